//! Value types shared by the brushes, pickers and the scene.
//!
//! Points and sizes are egui's own `Pos2`/`Vec2` so the scene can be handed
//! straight to an `egui::Painter`. Colors are kept as normalised floats and
//! converted to `Color32` only when painting.

pub mod hit_testing;

use eframe::egui::{self, Color32};
use serde::{Deserialize, Serialize};

/// A location in scene coordinates (origin at the scene centre, y up).
pub type Point = egui::Pos2;

/// A width/height pair in scene units.
pub type Size = egui::Vec2;

/// An immutable RGBA color with every channel in `[0, 1]`.
///
/// Deserialized colors go through [`Color::rgba`], so out-of-range channels
/// in a config file or restored settings are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawColor")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const CLEAR: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Tint for the selected toolbar icon
    pub const SELECTED_TINT: Color = Color::rgb(0.686, 0.322, 0.871);

    /// Background of the side panel
    pub const PANEL_GRAY: Color = Color::rgb(0.8, 0.8, 0.8);

    /// Background of an open picker
    pub const PICKER_GRAY: Color = Color::rgb(0.921, 0.921, 0.921);

    /// Builds a color, clamping every channel into `[0, 1]`.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
            a: clamp_unit(a),
        }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }
}

/// Color channels as written on disk, before clamping
#[derive(Deserialize)]
struct RawColor {
    r: f32,
    g: f32,
    b: f32,
    #[serde(default = "opaque")]
    a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl From<RawColor> for Color {
    fn from(raw: RawColor) -> Self {
        Color::rgba(raw.r, raw.g, raw.b, raw.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Color> for Color32 {
    fn from(color: Color) -> Self {
        let to_byte = |v: f32| (v * 255.0).round() as u8;
        Color32::from_rgba_unmultiplied(
            to_byte(color.r),
            to_byte(color.g),
            to_byte(color.b),
            to_byte(color.a),
        )
    }
}

/// NaN counts as zero.
const fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() || v < 0.0 {
        0.0
    } else if v > 1.0 {
        1.0
    } else {
        v
    }
}
