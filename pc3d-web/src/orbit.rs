/// Pointer-driven orbiting and wheel zoom of the product view
use std::f32::consts::TAU;

/// Dolly factor per wheel notch
const ZOOM_STEP: f32 = 0.95;

/// Tracks one pointer drag. A drag across the full viewer height turns the
/// product once around.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitDrag {
    last: Option<(f32, f32)>,
}

impl OrbitDrag {
    pub fn begin(&mut self, x: f32, y: f32) {
        self.last = Some((x, y));
    }

    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }

    /// Rotation `(about x, about y)` in radians since the previous pointer
    /// position, or `None` outside a drag.
    pub fn drag_to(&mut self, x: f32, y: f32, viewport_height: u32) -> Option<(f32, f32)> {
        let (last_x, last_y) = self.last?;
        self.last = Some((x, y));

        let per_pixel = TAU / viewport_height.max(1) as f32;
        Some(((y - last_y) * per_pixel, (x - last_x) * per_pixel))
    }

    pub fn end(&mut self) {
        self.last = None;
    }
}

/// Camera dolly factor for a wheel delta: scrolling down moves away
pub fn zoom_factor(delta_y: f64) -> f32 {
    if delta_y > 0.0 {
        1.0 / ZOOM_STEP
    } else if delta_y < 0.0 {
        ZOOM_STEP
    } else {
        1.0
    }
}
