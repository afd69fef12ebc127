/// Flat-shaded painter's-algorithm rendering of the product proxy
use nalgebra::Matrix4;
use pc3d_core::{
    axis_lines, grid_lines, Camera, Lighting, Line, Mesh, RenderParams, Rgb, RotationState,
};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub const BACKGROUND: Rgb = Rgb::new(0xf4, 0xf4, 0xf4);

const GRID_SIZE: f32 = 10.0;
const GRID_DIVISIONS: u32 = 10;
const AXIS_LENGTH: f32 = 5.0;
/// Helper lines are cut into pieces so the visible parts survive clipping
const LINE_PIECES: u32 = 16;

/// One screen-space helper line piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintedLine {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub color: Rgb,
}

/// Ground grid and axes as seen by `camera`; they stay fixed while the
/// product orbits.
pub fn helper_lines(camera: &Camera, width: u32, height: u32) -> Vec<PaintedLine> {
    let identity = Matrix4::identity();
    let lines: Vec<Line> = grid_lines(GRID_SIZE, GRID_DIVISIONS)
        .into_iter()
        .chain(axis_lines(AXIS_LENGTH))
        .collect();

    let mut painted = Vec::new();
    for line in lines {
        let point_at = |i: u32| {
            let t = i as f32 / LINE_PIECES as f32;
            line.start + (line.end - line.start) * t
        };
        for i in 0..LINE_PIECES {
            let from = camera.project_to_screen(&point_at(i), &identity, width, height);
            let to = camera.project_to_screen(&point_at(i + 1), &identity, width, height);
            if let (Some(from), Some(to)) = (from, to) {
                painted.push(PaintedLine {
                    from: (from.0, from.1),
                    to: (to.0, to.1),
                    color: line.color,
                });
            }
        }
    }
    painted
}

/// One screen-space triangle ready to be filled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintedTriangle {
    pub points: [(f32, f32); 3],
    pub depth: f32,
    pub color: Rgb,
}

/// Visible triangles of `mesh`, sorted back to front
pub fn paint_list(
    mesh: &Mesh,
    params: &RenderParams,
    rotation: &RotationState,
    camera: &Camera,
    lighting: &Lighting,
    width: u32,
    height: u32,
) -> Vec<PaintedTriangle> {
    let model = params.model_matrix(rotation);
    let mut painted = Vec::with_capacity(mesh.triangles.len());

    'triangles: for triangle in &mesh.triangles {
        let normal = model.transform_vector(&triangle.calculate_normal());
        let centroid = model.transform_point(&triangle.centroid());
        let view_dir = camera.view_direction(&centroid);
        if normal.dot(&view_dir) <= 0.0 {
            continue;
        }

        let mut points = [(0.0, 0.0); 3];
        let mut depth = 0.0;
        for (point, vertex) in points.iter_mut().zip(&triangle.vertices) {
            let Some((x, y, z)) = camera.project_to_screen(&vertex.position, &model, width, height)
            else {
                continue 'triangles;
            };
            *point = (x, y);
            depth += z / 3.0;
        }

        painted.push(PaintedTriangle {
            points,
            depth,
            color: lighting.shade(&normal, &view_dir, params),
        });
    }

    painted.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    painted
}

pub fn paint(
    ctx: &CanvasRenderingContext2d,
    width: u32,
    height: u32,
    lines: &[PaintedLine],
    triangles: &[PaintedTriangle],
) {
    ctx.set_fill_style(&JsValue::from_str(&BACKGROUND.to_string()));
    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

    for line in lines {
        ctx.set_stroke_style(&JsValue::from_str(&line.color.to_string()));
        ctx.begin_path();
        ctx.move_to(line.from.0 as f64, line.from.1 as f64);
        ctx.line_to(line.to.0 as f64, line.to.1 as f64);
        ctx.stroke();
    }

    for triangle in triangles {
        let color = JsValue::from_str(&triangle.color.to_string());
        let [a, b, c] = triangle.points;
        ctx.begin_path();
        ctx.move_to(a.0 as f64, a.1 as f64);
        ctx.line_to(b.0 as f64, b.1 as f64);
        ctx.line_to(c.0 as f64, c.1 as f64);
        ctx.close_path();
        ctx.set_fill_style(&color);
        ctx.fill();
        // same-colored outline hides the seam between a face's two triangles
        ctx.set_stroke_style(&color);
        ctx.stroke();
    }
}
