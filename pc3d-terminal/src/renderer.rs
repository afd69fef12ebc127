/// ASCII rasterizer for terminal rendering
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Matrix4;
use pc3d_core::{Camera, Lighting, Mesh, RenderParams, Rgb, Triangle};
use std::io::Write;

/// Character luminosity ramp for shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    glyph: char,
    color: Rgb,
}

const EMPTY: Cell = Cell {
    glyph: ' ',
    color: Rgb::BLACK,
};

/// ASCII renderer that converts the shaded product proxy to terminal cells
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    cells: Vec<Cell>,
    drawn_params: Option<RenderParams>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            cells: vec![EMPTY; size],
            drawn_params: None,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.depth_buffer.fill(f32::INFINITY);
        self.cells.fill(EMPTY);
    }

    /// Whether the last rendered frame used exactly these parameters
    pub fn is_current(&self, params: &RenderParams) -> bool {
        self.drawn_params.as_ref() == Some(params)
    }

    pub fn render_mesh(
        &mut self,
        mesh: &Mesh,
        model_matrix: &Matrix4<f32>,
        camera: &Camera,
        lighting: &Lighting,
        params: &RenderParams,
    ) {
        for triangle in &mesh.triangles {
            self.render_triangle(triangle, model_matrix, camera, lighting, params);
        }
        self.drawn_params = Some(*params);
    }

    fn render_triangle(
        &mut self,
        triangle: &Triangle,
        model_matrix: &Matrix4<f32>,
        camera: &Camera,
        lighting: &Lighting,
        params: &RenderParams,
    ) {
        let mut screen_coords = [(0.0, 0.0, 0.0); 3];
        for (slot, vertex) in screen_coords.iter_mut().zip(&triangle.vertices) {
            match camera.project_to_screen(
                &vertex.position,
                model_matrix,
                self.width as u32,
                self.height as u32,
            ) {
                Some(coords) => *slot = coords,
                None => return, // Triangle is clipped
            }
        }

        let normal = model_matrix.transform_vector(&triangle.calculate_normal());
        let centroid = model_matrix.transform_point(&triangle.centroid());
        let view_dir = camera.view_direction(&centroid);

        // Back-face culling
        if normal.dot(&view_dir) <= 0.0 {
            return;
        }

        let color = lighting.shade(&normal, &view_dir, params);
        let cell = Cell {
            glyph: glyph_for(color),
            color,
        };

        self.rasterize_triangle(&screen_coords, cell);
    }

    fn rasterize_triangle(&mut self, coords: &[(f32, f32, f32); 3], cell: Cell) {
        let [v0, v1, v2] = *coords;

        // Bounding box clipped to the viewport
        let min_x = (v0.0.min(v1.0).min(v2.0).floor() as i32).max(0);
        let max_x = (v0.0.max(v1.0).max(v2.0).ceil() as i32).min(self.width as i32 - 1);
        let min_y = (v0.1.min(v1.1).min(v2.1).floor() as i32).max(0);
        let max_y = (v0.1.max(v1.1).max(v2.1).ceil() as i32).min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                if let Some((w0, w1, w2)) =
                    barycentric((v0.0, v0.1), (v1.0, v1.1), (v2.0, v2.1), (px, py))
                {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;

                        let idx = y as usize * self.width + x as usize;
                        if depth < self.depth_buffer[idx] {
                            self.depth_buffer[idx] = depth;
                            self.cells[idx] = cell;
                        }
                    }
                }
            }
        }
    }

    /// Number of cells covered by the product in the current frame
    pub fn coverage(&self) -> usize {
        self.depth_buffer.iter().filter(|d| d.is_finite()).count()
    }

    /// Queue the frame starting at terminal row `top`
    pub fn draw<W: Write>(&self, writer: &mut W, top: u16) -> std::io::Result<()> {
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, top + y as u16))?;
            let mut current: Option<Rgb> = None;
            for x in 0..self.width {
                let cell = self.cells[y * self.width + x];
                if current != Some(cell.color) {
                    writer.queue(SetForegroundColor(to_terminal_color(cell.color)))?;
                    current = Some(cell.color);
                }
                writer.queue(Print(cell.glyph))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

pub fn to_terminal_color(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Map shaded brightness onto the luminosity ramp. Never blank, so that
/// black products remain visible.
fn glyph_for(color: Rgb) -> char {
    let last = LUMINOSITY_RAMP.len() - 1;
    let index = ((color.luminance() * last as f32).round() as usize).clamp(1, last);
    LUMINOSITY_RAMP[index]
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pc3d_core::{map_to_render_params, Category, ConfigState, RotationState};

    fn frame(state: &ConfigState) -> AsciiRenderer {
        let params = map_to_render_params(state);
        let camera = Camera::with_aspect(80.0 / (40.0 * 2.0));
        let mut renderer = AsciiRenderer::new(80, 40);
        renderer.render_mesh(
            &Mesh::product_proxy(),
            &params.model_matrix(&RotationState::zero()),
            &camera,
            &Lighting::default(),
            &params,
        );
        renderer
    }

    #[test]
    fn test_proxy_is_visible() {
        assert!(frame(&ConfigState::default()).coverage() > 0);
    }

    #[test]
    fn test_larger_size_covers_more_cells() {
        let small = ConfigState::default().with_selection(Category::Size, "small").unwrap();
        let large = ConfigState::default().with_selection(Category::Size, "large").unwrap();
        assert!(frame(&large).coverage() > frame(&small).coverage());
    }

    #[test]
    fn test_tracks_drawn_params() {
        let state = ConfigState::default();
        let renderer = frame(&state);
        assert!(renderer.is_current(&map_to_render_params(&state)));

        let metal = state.with_selection(Category::Material, "metal").unwrap();
        assert!(!renderer.is_current(&map_to_render_params(&metal)));
    }

    #[test]
    fn test_clear_resets_coverage() {
        let mut renderer = frame(&ConfigState::default());
        renderer.clear();
        assert_eq!(renderer.coverage(), 0);
    }

    #[test]
    fn test_dark_colors_keep_a_glyph() {
        assert_eq!(glyph_for(Rgb::BLACK), '.');
        assert_eq!(glyph_for(Rgb::WHITE), '@');
    }

    #[test]
    fn test_draw_emits_shaded_glyphs() {
        let renderer = frame(&ConfigState::default());
        let mut out = Vec::new();
        renderer.draw(&mut out, 1).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('@') || text.contains('%') || text.contains('#'));
    }
}
