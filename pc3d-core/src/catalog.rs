/// Static option catalog: the closed set of attribute categories and the
/// discrete options offered for each of them.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::color::Rgb;
use crate::error::{ConfigError, Result};

/// Attribute category, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Material,
    Color,
    Size,
    Texture,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Material,
        Category::Color,
        Category::Size,
        Category::Texture,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Material => "material",
            Category::Color => "color",
            Category::Size => "size",
            Category::Texture => "texture",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Material => "Material",
            Category::Color => "Color",
            Category::Size => "Size",
            Category::Texture => "Texture",
        }
    }

    /// Position in display order
    pub fn index(self) -> usize {
        match self {
            Category::Material => 0,
            Category::Color => 1,
            Category::Size => 2,
            Category::Texture => 3,
        }
    }

    /// Next category in display order, wrapping around
    pub fn next(self) -> Category {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous category in display order, wrapping around
    pub fn previous(self) -> Category {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.id() == s)
            .ok_or_else(|| ConfigError::InvalidCategory(s.to_string()))
    }
}

/// A selectable option within one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfigOption {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Color value carried by color swatches; `None` for other categories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swatch: Option<Rgb>,
}

impl ConfigOption {
    const fn new(id: &'static str, label: &'static str, description: &'static str) -> Self {
        Self {
            id,
            label,
            description,
            swatch: None,
        }
    }

    const fn swatch(
        id: &'static str,
        label: &'static str,
        description: &'static str,
        color: Rgb,
    ) -> Self {
        Self {
            id,
            label,
            description,
            swatch: Some(color),
        }
    }
}

const MATERIAL_OPTIONS: &[ConfigOption] = &[
    ConfigOption::new("plastic", "Plastic", "Durable plastic finish"),
    ConfigOption::new("metal", "Metal", "Premium metal finish"),
    ConfigOption::new("wood", "Wood", "Classic wood finish"),
];

const COLOR_OPTIONS: &[ConfigOption] = &[
    ConfigOption::swatch("white", "White", "Clean white finish", Rgb::WHITE),
    ConfigOption::swatch("black", "Black", "Sleek black finish", Rgb::BLACK),
    ConfigOption::swatch("red", "Red", "Bold red finish", Rgb::new(0xff, 0x00, 0x00)),
    ConfigOption::swatch("blue", "Blue", "Classic blue finish", Rgb::new(0x00, 0x00, 0xff)),
];

const SIZE_OPTIONS: &[ConfigOption] = &[
    ConfigOption::new("small", "Small", "Compact size"),
    ConfigOption::new("medium", "Medium", "Standard size"),
    ConfigOption::new("large", "Large", "Large size"),
];

const TEXTURE_OPTIONS: &[ConfigOption] = &[
    ConfigOption::new("smooth", "Smooth", "Clean smooth finish"),
    ConfigOption::new("matte", "Matte", "Non-reflective matte"),
    ConfigOption::new("glossy", "Glossy", "High-gloss finish"),
];

/// All categories in display order
pub fn categories() -> &'static [Category] {
    &Category::ALL
}

/// Options of a category in declaration order
pub fn options_for(category: Category) -> &'static [ConfigOption] {
    match category {
        Category::Material => MATERIAL_OPTIONS,
        Category::Color => COLOR_OPTIONS,
        Category::Size => SIZE_OPTIONS,
        Category::Texture => TEXTURE_OPTIONS,
    }
}

pub fn find_option(category: Category, id: &str) -> Option<&'static ConfigOption> {
    options_for(category).iter().find(|option| option.id == id)
}

/// Product material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    #[default]
    Plastic,
    Metal,
    Wood,
}

impl Material {
    pub const ALL: [Material; 3] = [Material::Plastic, Material::Metal, Material::Wood];

    pub fn id(self) -> &'static str {
        match self {
            Material::Plastic => "plastic",
            Material::Metal => "metal",
            Material::Wood => "wood",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }
}

impl FromStr for Material {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_id(s).ok_or_else(|| ConfigError::InvalidOption {
            category: Category::Material,
            value: s.to_string(),
        })
    }
}

/// Product size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    pub fn id(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

impl FromStr for Size {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_id(s).ok_or_else(|| ConfigError::InvalidSize(s.to_string()))
    }
}

/// Surface finish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Texture {
    #[default]
    Smooth,
    Matte,
    Glossy,
}

impl Texture {
    pub const ALL: [Texture; 3] = [Texture::Smooth, Texture::Matte, Texture::Glossy];

    pub fn id(self) -> &'static str {
        match self {
            Texture::Smooth => "smooth",
            Texture::Matte => "matte",
            Texture::Glossy => "glossy",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

impl FromStr for Texture {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_id(s).ok_or_else(|| ConfigError::InvalidTexture(s.to_string()))
    }
}
