//! Modal overlay pickers for color and thickness.
//!
//! A picker is either closed or open. `draw` opens it and lays out a row of
//! tappable elements; `select` reports the tapped value once and closes it;
//! `dismiss` closes it without a selection. Every render object a picker
//! creates carries the picker's tag so closing is a single `remove_by_tag`.

mod color;
mod thickness;

pub use color::ColorPicker;
pub use thickness::ThicknessPicker;

use crate::config::PickerConfig;
use crate::geometry::{Color, Point};
use crate::scene::{Anchor, Canvas, Drawable, DrawableId};
use eframe::egui::vec2;
use serde::{Deserialize, Serialize};

const SELECT_SCALE: f32 = 1.5;
const SELECT_SECS: f64 = 0.2;

/// Which of the two pickers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickerKind {
    Color,
    Thickness,
}

impl PickerKind {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Color => "ColorPicker",
            Self::Thickness => "ThicknessPicker",
        }
    }
}

/// Shared open/closed bookkeeping for both pickers
#[derive(Debug, Clone, PartialEq)]
pub struct PickerState {
    kind: PickerKind,
    anchor: Option<Point>,
    /// Value of each element paired with the drawable that acknowledges a tap
    rows: Vec<(PickerValue, DrawableId)>,
}

/// A value offered by a picker element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickerValue {
    Color(Color),
    Thickness(u32),
}

impl PickerState {
    pub fn new(kind: PickerKind) -> Self {
        Self {
            kind,
            anchor: None,
            rows: Vec::new(),
        }
    }

    pub fn kind(&self) -> PickerKind {
        self.kind
    }

    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    pub fn is_open(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Closes an open picker before reopening it at `at`, then places the panel.
    fn open(&mut self, canvas: &mut dyn Canvas, at: Point, config: &PickerConfig) {
        if self.is_open() {
            self.close(canvas);
        }
        let panel = Drawable::rectangle(
            config.width + 20.0,
            config.height + 10.0,
            20.0,
            Color::PICKER_GRAY,
        )
        .chrome()
        .tagged(self.tag());
        canvas.place_anchored(panel, at, Anchor::Left);
        self.anchor = Some(at);
        log::debug!("{} opened at {:?}", self.tag(), at);
    }

    fn push_row(&mut self, value: PickerValue, visual: DrawableId) {
        self.rows.push((value, visual));
    }

    /// Removes every tagged render object. Returns false if already closed.
    fn close(&mut self, canvas: &mut dyn Canvas) -> bool {
        if !self.is_open() {
            return false;
        }
        let removed = canvas.remove_by_tag(self.tag());
        self.anchor = None;
        self.rows.clear();
        log::debug!("{} closed, removed {} drawables", self.tag(), removed);
        true
    }

    /// Scales up the element showing `value` and closes. The element outlives
    /// the picker until its animation settles. `None` when closed.
    fn select(&mut self, canvas: &mut dyn Canvas, value: PickerValue) -> Option<PickerValue> {
        if !self.is_open() {
            return None;
        }
        if let Some(&(_, visual)) = self.rows.iter().find(|(v, _)| *v == value) {
            canvas.scale_to(visual, SELECT_SCALE, SELECT_SECS);
            canvas.retire(visual);
        }
        self.close(canvas);
        Some(value)
    }

    pub fn element_count(&self) -> usize {
        self.rows.len()
    }
}

/// Positions of the elements of a picker row anchored at `at`.
fn row_positions(at: Point, count: usize, config: &PickerConfig) -> impl Iterator<Item = Point> {
    let start = at + vec2(config.leading_inset, 0.0);
    let step = config.column_distance();
    (0..count).map(move |i| start + vec2(step * i as f32, 0.0))
}
