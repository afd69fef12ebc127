/// Configuration state and the controller that owns it
use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::{Category, ConfigOption, Material, Size, Texture};
use crate::color::{parse_color, Rgb};
use crate::error::{ConfigError, Result};

/// The currently selected value of every attribute category.
///
/// Color is stored as a free-form value; color swatches only offer
/// shortcuts to particular values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ConfigState {
    pub material: Material,
    pub color: Rgb,
    pub size: Size,
    pub texture: Texture,
}

impl ConfigState {
    /// Textual value of a category: the option id, or `#rrggbb` for color
    pub fn value_of(&self, category: Category) -> String {
        match category {
            Category::Material => self.material.id().to_string(),
            Category::Color => self.color.to_string(),
            Category::Size => self.size.id().to_string(),
            Category::Texture => self.texture.id().to_string(),
        }
    }

    /// Whether `option` of `category` reflects the current value
    pub fn is_selected(&self, category: Category, option: &ConfigOption) -> bool {
        match category {
            Category::Color => option.swatch == Some(self.color),
            _ => self.value_of(category) == option.id,
        }
    }

    /// A copy of this state with one category replaced.
    ///
    /// Catalog-backed categories only accept option ids of their own
    /// catalog; color accepts any notation understood by [`parse_color`].
    pub fn with_selection(&self, category: Category, value: &str) -> Result<ConfigState> {
        let invalid = || ConfigError::InvalidOption {
            category,
            value: value.to_string(),
        };

        let mut next = *self;
        match category {
            Category::Material => next.material = Material::from_id(value).ok_or_else(invalid)?,
            Category::Color => next.color = parse_color(value)?,
            Category::Size => next.size = Size::from_id(value).ok_or_else(invalid)?,
            Category::Texture => next.texture = Texture::from_id(value).ok_or_else(invalid)?,
        }
        Ok(next)
    }
}

impl Default for ConfigState {
    fn default() -> Self {
        Self {
            material: Material::Plastic,
            color: Rgb::WHITE,
            size: Size::Medium,
            texture: Texture::Smooth,
        }
    }
}

/// Sole writer of the configuration state
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: ConfigState,
    revision: u64,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ConfigState {
        &self.state
    }

    /// Bumped every time a selection changes the state
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace one category's value. On error the state is left untouched.
    pub fn select(&mut self, category: Category, value: &str) -> Result<&ConfigState> {
        let next = match self.state.with_selection(category, value) {
            Ok(next) => next,
            Err(err) => {
                warn!(%category, value, error = %err, "rejected selection");
                return Err(err);
            }
        };

        if next != self.state {
            self.state = next;
            self.revision += 1;
            debug!(%category, value, revision = self.revision, "selection applied");
        }
        Ok(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{categories, options_for};

    #[test]
    fn test_default_state() {
        let state = ConfigState::default();
        assert_eq!(state.value_of(Category::Material), "plastic");
        assert_eq!(state.value_of(Category::Color), "#ffffff");
        assert_eq!(state.value_of(Category::Size), "medium");
        assert_eq!(state.value_of(Category::Texture), "smooth");
    }

    #[test]
    fn test_select_every_option_changes_only_its_category() {
        for &category in categories() {
            for option in options_for(category) {
                let mut controller = SelectionController::new();
                let before = *controller.state();
                let after = *controller.select(category, option.id).unwrap();

                assert!(after.is_selected(category, option));
                for &other in categories().iter().filter(|&&c| c != category) {
                    assert_eq!(after.value_of(other), before.value_of(other));
                }
            }
        }
    }

    #[test]
    fn test_invalid_option_leaves_state_unchanged() {
        let mut controller = SelectionController::new();
        controller.select(Category::Texture, "matte").unwrap();
        let before = *controller.state();
        let revision = controller.revision();

        let err = controller.select(Category::Texture, "sandpaper").unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidOption {
                category: Category::Texture,
                value: "sandpaper".into()
            }
        );
        assert_eq!(*controller.state(), before);
        assert_eq!(controller.revision(), revision);
    }

    #[test]
    fn test_option_ids_do_not_cross_categories() {
        let mut controller = SelectionController::new();
        assert!(controller.select(Category::Size, "metal").is_err());
        assert!(controller.select(Category::Material, "large").is_err());
    }

    #[test]
    fn test_color_is_free_form() {
        let mut controller = SelectionController::new();
        controller.select(Category::Color, "#336699").unwrap();
        assert_eq!(controller.state().color, Rgb::new(0x33, 0x66, 0x99));

        // no swatch matches a custom color
        let state = controller.state();
        assert!(options_for(Category::Color)
            .iter()
            .all(|swatch| !state.is_selected(Category::Color, swatch)));

        assert_eq!(
            controller.select(Category::Color, "chartreuse"),
            Err(ConfigError::InvalidColor("chartreuse".into()))
        );
    }

    #[test]
    fn test_swatch_and_hex_select_same_state() {
        let by_swatch = ConfigState::default().with_selection(Category::Color, "red").unwrap();
        let by_hex = ConfigState::default().with_selection(Category::Color, "#FF0000").unwrap();
        assert_eq!(by_swatch, by_hex);
    }

    #[test]
    fn test_revision_only_moves_on_change() {
        let mut controller = SelectionController::new();
        controller.select(Category::Size, "medium").unwrap();
        assert_eq!(controller.revision(), 0);
        controller.select(Category::Size, "large").unwrap();
        assert_eq!(controller.revision(), 1);
    }
}
