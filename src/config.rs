//! Drawing configuration.
//!
//! All tunables live in [`DrawingConfig`], handed to the toolbar and every
//! brush at construction. Values can be overridden from a JSON file whose
//! path is given in `DOODLE_PAD_CONFIG`.

use crate::geometry::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "DOODLE_PAD_CONFIG";

/// Errors that can occur while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Geometry of the side panel holding the brush and picker icons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Height of the panel with no brushes
    pub base_height: i32,
    /// Extra height per supplied brush
    pub height_per_brush: i32,
    pub width: f32,
    pub corner_radius: f32,
    /// Centre x of the panel
    pub center_x: f32,
    /// Vertical distance between icons
    pub icon_spacing: f32,
    /// Gap between the panel top edge and the first icon
    pub top_inset: f32,
    pub icon_size: f32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            base_height: 250,
            height_per_brush: 75,
            width: 90.0,
            corner_radius: 20.0,
            center_x: -460.0,
            icon_spacing: 85.0,
            top_inset: 60.0,
            icon_size: 40.0,
        }
    }
}

/// Geometry of the color and thickness picker overlays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Width spanned by the row of elements
    pub width: f32,
    pub height: f32,
    /// Width of one element; the row holds `width / element_size` of them
    pub element_size: f32,
    /// Offset from the anchor to the first element
    pub leading_inset: f32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 60.0,
            element_size: 40.0,
            leading_inset: 25.0,
        }
    }
}

impl PickerConfig {
    /// Number of selectable elements in a picker row.
    pub fn columns(&self) -> usize {
        if self.element_size <= 0.0 {
            return 0;
        }
        (self.width / self.element_size).floor() as usize
    }

    pub fn column_distance(&self) -> f32 {
        match self.columns() {
            0 => 0.0,
            n => self.width / n as f32,
        }
    }
}

/// Everything the toolbar and brushes need to know up front
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingConfig {
    /// Color every drawing brush starts with
    pub default_color: Color,
    pub default_thickness: u32,
    pub eraser_thickness: u32,
    /// Pointer events at or left of this x fall on the toolbar
    pub toolbar_boundary_x: f32,
    pub max_brushes: usize,
    /// Reject brush lists longer than `max_brushes` instead of ignoring extras
    pub strict_brush_limit: bool,
    /// Forget the Lines brush anchor when the pointer is lifted
    pub lines_reset_on_lift: bool,
    /// Fixed seed for the spray brush; random when unset
    pub spray_seed: Option<u64>,
    pub panel: PanelConfig,
    pub picker: PickerConfig,
    pub palette: Vec<Color>,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: Color::BLACK,
            default_thickness: 5,
            eraser_thickness: 30,
            toolbar_boundary_x: -410.0,
            max_brushes: 6,
            strict_brush_limit: false,
            lines_reset_on_lift: false,
            spray_seed: None,
            panel: PanelConfig::default(),
            picker: PickerConfig::default(),
            palette: default_palette(),
        }
    }
}

/// The ten swatches offered by the color picker out of the box.
pub fn default_palette() -> Vec<Color> {
    vec![
        Color::BLACK,
        Color::rgb(0.906, 0.298, 0.235),
        Color::rgb(0.953, 0.612, 0.071),
        Color::rgb(0.945, 0.769, 0.059),
        Color::rgb(0.180, 0.800, 0.443),
        Color::rgb(0.102, 0.737, 0.612),
        Color::rgb(0.204, 0.596, 0.859),
        Color::rgb(0.608, 0.349, 0.714),
        Color::rgb(0.992, 0.475, 0.659),
        Color::rgb(0.545, 0.341, 0.165),
    ]
}

impl DrawingConfig {
    /// Load and validate a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `DOODLE_PAD_CONFIG`, or use defaults.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded drawing config from {}", path);
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {}: {}", path, err);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.default_thickness == 0 || self.eraser_thickness == 0 {
            return Err(ConfigError::Invalid("brush thickness must be positive".into()));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::Invalid("palette must not be empty".into()));
        }
        if self.picker.element_size <= 0.0 || self.picker.columns() == 0 {
            return Err(ConfigError::Invalid(format!(
                "picker element size {} leaves no columns in width {}",
                self.picker.element_size, self.picker.width
            )));
        }
        if self.palette.len() > self.picker.columns() {
            return Err(ConfigError::Invalid(format!(
                "palette has {} colors but the picker row fits {}",
                self.palette.len(),
                self.picker.columns()
            )));
        }
        Ok(())
    }
}

/// The user's last picked color and thickness, restored on the next start.
/// `None` means nothing was picked, so brushes keep their own defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub color: Option<Color>,
    pub thickness: Option<u32>,
}
