/// PC3D Core Library - Product configuration model and viewer math
///
/// This library holds the option catalog, the configuration state and its
/// single writer, tab navigation, and the mapping from a configuration to
/// the render parameters of the 3D product proxy. It performs no I/O;
/// viewer hosts drive it through `Session`.

pub mod catalog;
pub mod color;
pub mod error;
pub mod geometry;
pub mod projection;
pub mod render;
pub mod session;
pub mod state;
pub mod style;
pub mod tabs;
pub mod transform;

// Re-export commonly used types
pub use catalog::{categories, options_for, Category, ConfigOption, Material, Size, Texture};
pub use color::{parse_color, Rgb};
pub use error::{ConfigError, Result};
pub use geometry::{axis_lines, grid_lines, Line, Mesh, Triangle, Vertex};
pub use projection::{Camera, ProjectionMode, MAX_DISTANCE, MIN_DISTANCE};
pub use render::{map_to_render_params, Lighting, RenderParams};
pub use session::{Event, Outcome, PanelEntry, Session};
pub use state::{ConfigState, SelectionController};
pub use style::{
    button_style, tab_trigger_style, ButtonStyle, ButtonVariant, Interaction, TabTriggerStyle,
};
pub use tabs::TabNavigation;
pub use transform::{RotationState, Transform};
