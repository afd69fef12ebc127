/// Viewer host settings
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub target_fps: u32,
    /// Radians per key press
    pub rotation_step: f32,
    pub auto_rotate: bool,
    /// Radians per frame around x and y while auto-rotating
    pub auto_rotate_speed: (f32, f32),
    /// Terminal cells are roughly twice as tall as they are wide
    pub cell_aspect: f32,
    /// Rows reserved below the viewport for tabs, options and status
    pub panel_height: u16,
}

impl ViewerConfig {
    pub fn frame_time(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.target_fps.max(1)))
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            target_fps: 30,
            rotation_step: 0.1,
            auto_rotate: true,
            auto_rotate_speed: (0.01, 0.015),
            cell_aspect: 2.0,
            panel_height: 7,
        }
    }
}
