/// Mapping from configuration state to the material and geometry
/// parameters of the product proxy, plus the light model viewers shade it
/// with.

use nalgebra::{Matrix4, Point3, Vector3};
use serde::Serialize;

use crate::catalog::{Material, Size, Texture};
use crate::color::Rgb;
use crate::state::ConfigState;
use crate::transform::{RotationState, Transform};

/// Material/geometry parameters of the rendered proxy
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderParams {
    pub scale: f32,
    pub base_color: Rgb,
    pub metalness: f32,
    pub roughness: f32,
}

impl RenderParams {
    /// Model matrix of the proxy for the given orbit rotation
    pub fn model_matrix(&self, rotation: &RotationState) -> Matrix4<f32> {
        Transform::model_matrix(rotation, self.scale)
    }
}

pub fn scale_for(size: Size) -> f32 {
    match size {
        Size::Small => 0.8,
        Size::Medium => 1.0,
        Size::Large => 1.2,
    }
}

pub fn metalness_for(material: Material) -> f32 {
    match material {
        Material::Metal => 0.8,
        Material::Plastic | Material::Wood => 0.0,
    }
}

pub fn roughness_for(texture: Texture) -> f32 {
    match texture {
        Texture::Glossy => 0.1,
        Texture::Matte => 0.8,
        Texture::Smooth => 0.5,
    }
}

/// Derive render parameters from a configuration. Pure and total: the
/// discrete attributes are closed enums, so no lookup can miss.
pub fn map_to_render_params(state: &ConfigState) -> RenderParams {
    RenderParams {
        scale: scale_for(state.size),
        base_color: state.color,
        metalness: metalness_for(state.material),
        roughness: roughness_for(state.texture),
    }
}

impl From<&ConfigState> for RenderParams {
    fn from(state: &ConfigState) -> Self {
        map_to_render_params(state)
    }
}

/// Ambient plus one directional light
#[derive(Debug, Clone, Copy)]
pub struct Lighting {
    pub ambient: f32,
    /// Unit vector pointing from the surface toward the light
    pub direction: Vector3<f32>,
    pub intensity: f32,
}

impl Lighting {
    pub fn new(ambient: f32, light_position: Point3<f32>, intensity: f32) -> Self {
        Self {
            ambient,
            direction: light_position.coords.normalize(),
            intensity,
        }
    }

    /// Shade a surface point. `normal` and `view_dir` (surface toward the
    /// eye) are expected in world space; neither needs to be normalized.
    pub fn shade(&self, normal: &Vector3<f32>, view_dir: &Vector3<f32>, params: &RenderParams) -> Rgb {
        let n = normal.normalize();
        let v = view_dir.normalize();
        let l = self.direction;

        let diffuse = n.dot(&l).max(0.0) * self.intensity * (1.0 - params.metalness);

        let half = (l + v).normalize();
        let roughness = params.roughness.clamp(0.05, 1.0);
        let shininess = (2.0 / (roughness * roughness) - 2.0).max(1.0);
        let specular = if n.dot(&l) > 0.0 {
            n.dot(&half).max(0.0).powf(shininess) * (1.0 - roughness) * self.intensity
        } else {
            0.0
        };

        let base = params.base_color.to_channels();
        let mut out = [0.0; 3];
        for (i, channel) in out.iter_mut().enumerate() {
            // metals tint their highlights with the base color
            let tint = 1.0 + (base[i] - 1.0) * params.metalness;
            *channel = base[i] * (self.ambient + diffuse) + tint * specular;
        }
        Rgb::from_channels(out)
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Self::new(0.5, Point3::new(10.0, 10.0, 5.0), 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_default_params() {
        let params = map_to_render_params(&ConfigState::default());
        assert!(approx(params.scale, 1.0));
        assert!(approx(params.metalness, 0.0));
        assert!(approx(params.roughness, 0.5));
        assert_eq!(params.base_color.to_string(), "#ffffff");
    }

    #[test]
    fn test_tables() {
        assert!(approx(scale_for(Size::Small), 0.8));
        assert!(approx(scale_for(Size::Large), 1.2));
        assert!(approx(metalness_for(Material::Wood), 0.0));
        assert!(approx(metalness_for(Material::Metal), 0.8));
        assert!(approx(roughness_for(Texture::Glossy), 0.1));
        assert!(approx(roughness_for(Texture::Matte), 0.8));
    }

    #[test]
    fn test_parameters_stay_in_range() {
        for material in Material::ALL {
            for size in Size::ALL {
                for texture in Texture::ALL {
                    let state = ConfigState {
                        material,
                        size,
                        texture,
                        ..ConfigState::default()
                    };
                    let params = RenderParams::from(&state);
                    assert!(params.scale > 0.0);
                    assert!((0.0..=1.0).contains(&params.metalness));
                    assert!((0.0..=1.0).contains(&params.roughness));
                }
            }
        }
    }

    #[test]
    fn test_color_passes_through() {
        let state = ConfigState::default()
            .with_selection(Category::Color, "rgb(1, 2, 3)")
            .unwrap();
        assert_eq!(map_to_render_params(&state).base_color, Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_model_matrix_scales_uniformly() {
        let params = RenderParams {
            scale: 1.2,
            base_color: Rgb::WHITE,
            metalness: 0.0,
            roughness: 0.5,
        };
        let m = params.model_matrix(&RotationState::zero());
        let p = m.transform_point(&Point3::new(1.0, -1.0, 0.5));
        assert!((p - Point3::new(1.2, -1.2, 0.6)).norm() < 1e-5);
    }

    #[test]
    fn test_shading_is_deterministic() {
        let lighting = Lighting::default();
        let params = map_to_render_params(&ConfigState::default());
        let n = Vector3::new(0.2, 1.0, 0.3);
        let v = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(lighting.shade(&n, &v, &params), lighting.shade(&n, &v, &params));
    }

    #[test]
    fn test_back_faces_get_only_ambient() {
        let lighting = Lighting::default();
        let params = map_to_render_params(&ConfigState::default());
        let away = -lighting.direction;
        let color = lighting.shade(&away, &away, &params);
        assert_eq!(color, Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_glossy_highlight_is_sharper_than_matte() {
        let lighting = Lighting::default();
        let mut params = map_to_render_params(&ConfigState::default());
        params.base_color = Rgb::BLACK;

        // mirror direction: normal halfway between light and eye
        let view = Vector3::new(-1.0, 1.0, 0.0);
        let normal = lighting.direction + view.normalize();

        params.roughness = roughness_for(Texture::Glossy);
        let glossy = lighting.shade(&normal, &view, &params);
        params.roughness = roughness_for(Texture::Matte);
        let matte = lighting.shade(&normal, &view, &params);

        assert!(glossy.luminance() > matte.luminance());
    }
}
