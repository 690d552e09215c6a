#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod picker;
pub mod renderer;
pub mod scene;
pub mod tool;
pub mod util;

pub use app::DoodleApp;
pub use config::{ConfigError, DrawingConfig, ToolSettings};
pub use error::ToolBarError;
pub use geometry::{Color, Point, Size};
pub use input::{InputEvent, InputMode};
pub use panels::ToolBar;
pub use picker::{ColorPicker, PickerKind, ThicknessPicker};
pub use renderer::Renderer;
pub use scene::{Canvas, Drawable, DrawableId, SceneModel};
pub use tool::{Brush, BrushKind, Tool};
