/// Geometry of the product proxy
use nalgebra::{Point3, Vector3};

use crate::color::Rgb;

/// A 3D vertex with position and normal
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(position: Point3<f32>, normal: Vector3<f32>) -> Self {
        Self { position, normal }
    }
}

/// A triangle face defined by three vertices
#[derive(Debug, Clone)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Face normal from the winding of the vertices
    pub fn calculate_normal(&self) -> Vector3<f32> {
        let [v0, v1, v2] = self.vertices.map(|v| v.position);
        (v1 - v0).cross(&(v2 - v0)).normalize()
    }

    pub fn centroid(&self) -> Point3<f32> {
        let sum = self
            .vertices
            .iter()
            .fold(Vector3::zeros(), |acc, v| acc + v.position.coords);
        Point3::from(sum / 3.0)
    }
}

/// A 3D mesh composed of triangles
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    /// Axis-aligned cube centred on the origin, counter-clockwise winding
    /// seen from outside.
    pub fn cube(size: f32) -> Self {
        let half = size / 2.0;
        // (outward normal, two in-plane axes whose cross product is the normal)
        let faces: [(Vector3<f32>, Vector3<f32>, Vector3<f32>); 6] = [
            (Vector3::x(), Vector3::y(), Vector3::z()),
            (-Vector3::x(), Vector3::z(), Vector3::y()),
            (Vector3::y(), Vector3::z(), Vector3::x()),
            (-Vector3::y(), Vector3::x(), Vector3::z()),
            (Vector3::z(), Vector3::x(), Vector3::y()),
            (-Vector3::z(), Vector3::y(), Vector3::x()),
        ];

        let mut triangles = Vec::with_capacity(12);
        for (normal, u, v) in faces {
            let center = Point3::from(normal * half);
            let corner = |su: f32, sv: f32| {
                Vertex::new(center + u * (su * half) + v * (sv * half), normal)
            };
            let (a, b, c, d) = (
                corner(-1.0, -1.0),
                corner(1.0, -1.0),
                corner(1.0, 1.0),
                corner(-1.0, 1.0),
            );
            triangles.push(Triangle::new(a, b, c));
            triangles.push(Triangle::new(a, c, d));
        }

        Self { triangles }
    }

    /// The stand-in shape the configurator renders: a unit cube
    pub fn product_proxy() -> Self {
        Self::cube(1.0)
    }
}

/// A straight segment of a viewer helper (grid or axis)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point3<f32>,
    pub end: Point3<f32>,
    pub color: Rgb,
}

const GRID_CENTER: Rgb = Rgb::new(0x44, 0x44, 0x44);
const GRID: Rgb = Rgb::new(0x88, 0x88, 0x88);

/// Square ground grid on the y = 0 plane, `size` wide with `divisions`
/// cells per side. The two lines through the origin are darker.
pub fn grid_lines(size: f32, divisions: u32) -> Vec<Line> {
    let half = size / 2.0;
    let step = size / divisions.max(1) as f32;
    let mut lines = Vec::with_capacity(2 * (divisions as usize + 1));

    for i in 0..=divisions.max(1) {
        let k = -half + i as f32 * step;
        let color = if k.abs() < step * 1e-3 { GRID_CENTER } else { GRID };
        lines.push(Line {
            start: Point3::new(-half, 0.0, k),
            end: Point3::new(half, 0.0, k),
            color,
        });
        lines.push(Line {
            start: Point3::new(k, 0.0, -half),
            end: Point3::new(k, 0.0, half),
            color,
        });
    }
    lines
}

/// X, Y and Z axes from the origin, colored red, green and blue
pub fn axis_lines(length: f32) -> [Line; 3] {
    let origin = Point3::origin();
    [
        (Vector3::x(), Rgb::new(0xff, 0x00, 0x00)),
        (Vector3::y(), Rgb::new(0x00, 0xff, 0x00)),
        (Vector3::z(), Rgb::new(0x00, 0x00, 0xff)),
    ]
    .map(|(axis, color)| Line {
        start: origin,
        end: origin + axis * length,
        color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_layout() {
        let lines = grid_lines(10.0, 10);
        assert_eq!(lines.len(), 22);
        assert!(lines.iter().all(|l| l.start.y == 0.0 && l.end.y == 0.0));
        assert_eq!(lines.iter().filter(|l| l.color == GRID_CENTER).count(), 2);
    }

    #[test]
    fn test_axes_point_along_each_axis() {
        let [x, y, z] = axis_lines(5.0);
        assert_eq!(x.end, Point3::new(5.0, 0.0, 0.0));
        assert_eq!(y.end, Point3::new(0.0, 5.0, 0.0));
        assert_eq!(z.end, Point3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_cube_has_twelve_triangles() {
        assert_eq!(Mesh::product_proxy().triangles.len(), 12);
    }

    #[test]
    fn test_cube_winding_faces_outward() {
        for triangle in &Mesh::cube(2.0).triangles {
            let normal = triangle.calculate_normal();
            assert!((normal - triangle.vertices[0].normal).norm() < 1e-5);
            assert!(triangle.centroid().coords.dot(&normal) > 0.0);
        }
    }

    #[test]
    fn test_cube_extent() {
        for triangle in &Mesh::cube(2.0).triangles {
            for vertex in &triangle.vertices {
                let p = vertex.position;
                assert!(p.x.abs() <= 1.0 + 1e-6 && p.y.abs() <= 1.0 + 1e-6 && p.z.abs() <= 1.0 + 1e-6);
                assert!((p.coords.amax() - 1.0).abs() < 1e-6);
            }
        }
    }
}
