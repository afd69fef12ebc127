/// Error taxonomy for configuration updates and parsing
use crate::catalog::Category;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("'{value}' is not a {category} option")]
    InvalidOption { category: Category, value: String },

    #[error("unknown attribute category: {0}")]
    InvalidCategory(String),

    /// Raised by `Size::from_str` when text from outside the catalog (a
    /// saved configuration, a query string) names no size. Catalog
    /// selections report `InvalidOption` instead.
    #[error("unknown size: {0}")]
    InvalidSize(String),

    /// Same as `InvalidSize`, for `Texture::from_str`
    #[error("unknown texture: {0}")]
    InvalidTexture(String),

    #[error("not a color value: {0}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
