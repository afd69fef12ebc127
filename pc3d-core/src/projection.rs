/// Viewer camera and projection
use nalgebra::{Matrix4, Point3, Vector3};

pub const MIN_DISTANCE: f32 = 1.5;
pub const MAX_DISTANCE: f32 = 20.0;

/// Projection mode for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionMode {
    Orthographic,
    Perspective,
}

/// Camera looking at the product from a fixed vantage point
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub mode: ProjectionMode,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_aspect(width as f32 / height.max(1) as f32)
    }

    pub fn with_aspect(aspect: f32) -> Self {
        Self {
            position: Point3::new(3.0, 3.0, 3.0),
            target: Point3::origin(),
            up: Vector3::y(),
            fov: 50f32.to_radians(),
            aspect,
            near: 0.1,
            far: 100.0,
            mode: ProjectionMode::Perspective,
        }
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Create the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        match self.mode {
            ProjectionMode::Perspective => {
                Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
            }
            ProjectionMode::Orthographic => {
                let height = (self.position - self.target).norm() * (self.fov / 2.0).tan() * 2.0;
                let width = height * self.aspect;
                Matrix4::new_orthographic(
                    -width / 2.0,
                    width / 2.0,
                    -height / 2.0,
                    height / 2.0,
                    self.near,
                    self.far,
                )
            }
        }
    }

    /// Direction from a world-space point toward the eye
    pub fn view_direction(&self, point: &Point3<f32>) -> Vector3<f32> {
        match self.mode {
            ProjectionMode::Perspective => self.position - point,
            ProjectionMode::Orthographic => self.position - self.target,
        }
    }

    /// Move the eye toward (`factor < 1`) or away from (`factor > 1`) the
    /// target along the view axis, keeping the distance within
    /// `MIN_DISTANCE..=MAX_DISTANCE`.
    pub fn dolly(&mut self, factor: f32) {
        let offset = self.position - self.target;
        let distance = offset.norm();
        if distance < 1e-6 || !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let new_distance = (distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.position = self.target + offset * (new_distance / distance);
    }

    pub fn distance(&self) -> f32 {
        (self.position - self.target).norm()
    }

    /// Project a model-space point to screen space. Returns `(x, y, depth)`
    /// with depth in normalized device units (smaller is nearer), or `None`
    /// when the point falls outside the view volume.
    pub fn project_to_screen(
        &self,
        point: &Point3<f32>,
        model_matrix: &Matrix4<f32>,
        width: u32,
        height: u32,
    ) -> Option<(f32, f32, f32)> {
        let mvp = self.projection_matrix() * self.view_matrix() * model_matrix;
        let clip = mvp * point.to_homogeneous();

        // Behind the eye
        if clip.w < 1e-6 {
            return None;
        }

        let ndc = clip.xyz() / clip.w;
        if ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 || ndc.z.abs() > 1.0 {
            return None;
        }

        let screen_x = (ndc.x + 1.0) * 0.5 * width as f32;
        let screen_y = (1.0 - ndc.y) * 0.5 * height as f32;

        Some((screen_x, screen_y, ndc.z))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800, 500)
    }
}
