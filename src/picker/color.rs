use super::{PickerKind, PickerState, PickerValue, row_positions};
use crate::config::PickerConfig;
use crate::geometry::{Color, Point};
use crate::scene::{Canvas, Drawable, DrawableId, TapAction};

const SWATCH_RADIUS: f32 = 15.0;
const ICON_RADIUS: f32 = 20.0;

/// Picker offering a fixed palette of colors
#[derive(Debug, Clone)]
pub struct ColorPicker {
    state: PickerState,
    palette: Vec<Color>,
    config: PickerConfig,
    /// Toolbar icon, filled with the last chosen color
    pub icon: Option<DrawableId>,
}

impl ColorPicker {
    pub fn new(palette: Vec<Color>, config: PickerConfig) -> Self {
        Self {
            state: PickerState::new(PickerKind::Color),
            palette,
            config,
            icon: None,
        }
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The toolbar icon: a circle showing the current color.
    pub fn icon_drawable(&self, color: Color) -> Drawable {
        Drawable::circle(ICON_RADIUS, color)
            .chrome()
            .on_tap(TapAction::OpenColorPicker)
    }

    /// Opens the picker with its swatch row starting at `at`.
    pub fn draw(&mut self, canvas: &mut dyn Canvas, at: Point) {
        self.state.open(canvas, at, &self.config);
        let count = self.palette.len().min(self.config.columns());
        for (color, pos) in self.palette.iter().zip(row_positions(at, count, &self.config)) {
            let swatch = Drawable::circle(SWATCH_RADIUS, *color)
                .chrome()
                .tagged(self.state.tag())
                .on_tap(TapAction::PickColor(*color));
            let id = canvas.place(swatch, pos);
            self.state.push_row(PickerValue::Color(*color), id);
        }
    }

    /// Reports `color` once if the picker is open, then closes it.
    pub fn select(&mut self, canvas: &mut dyn Canvas, color: Color) -> Option<Color> {
        match self.state.select(canvas, PickerValue::Color(color)) {
            Some(PickerValue::Color(c)) => Some(c),
            _ => None,
        }
    }

    /// Closes without a selection. Does nothing when already closed.
    pub fn dismiss(&mut self, canvas: &mut dyn Canvas) -> bool {
        self.state.close(canvas)
    }
}
