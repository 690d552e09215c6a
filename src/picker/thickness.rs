use super::{PickerKind, PickerState, PickerValue, row_positions};
use crate::config::PickerConfig;
use crate::geometry::{Color, Point};
use crate::scene::{Canvas, Drawable, DrawableId, TapAction};

const ELEMENT_LENGTH: f32 = 40.0;
const HIT_RADIUS: f32 = 20.0;
const ICON_THICKNESS: f32 = 15.0;

/// Picker offering thicknesses 3, 6, 9, ... one per column
#[derive(Debug, Clone)]
pub struct ThicknessPicker {
    state: PickerState,
    config: PickerConfig,
    /// Toolbar icon, resized to the last chosen thickness
    pub icon: Option<DrawableId>,
}

impl ThicknessPicker {
    pub fn new(config: PickerConfig) -> Self {
        Self {
            state: PickerState::new(PickerKind::Thickness),
            config,
            icon: None,
        }
    }

    /// Values in row order: `3 * column` for each column.
    pub fn values(&self) -> Vec<u32> {
        (1..=self.config.columns() as u32).map(|i| i * 3).collect()
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The toolbar icon: a vertical bar whose width shows the thickness.
    pub fn icon_drawable(&self) -> Drawable {
        Drawable::bar(ELEMENT_LENGTH, ICON_THICKNESS, Color::BLACK)
            .chrome()
            .rotated(90.0)
    }

    /// Transparent circle over the icon that receives the tap.
    pub fn icon_hit_area(&self) -> Drawable {
        Drawable::circle(HIT_RADIUS, Color::CLEAR)
            .chrome()
            .on_tap(TapAction::OpenThicknessPicker)
    }

    pub fn icon_length(&self) -> f32 {
        ELEMENT_LENGTH
    }

    /// Opens the picker with its row of bars starting at `at`.
    pub fn draw(&mut self, canvas: &mut dyn Canvas, at: Point) {
        self.state.open(canvas, at, &self.config);
        let values = self.values();
        let positions = row_positions(at, values.len(), &self.config);
        for (thickness, pos) in values.into_iter().zip(positions) {
            let bar = Drawable::bar(ELEMENT_LENGTH, thickness as f32, Color::BLACK)
                .chrome()
                .rotated(90.0)
                .tagged(self.state.tag());
            let hit = Drawable::circle(HIT_RADIUS, Color::CLEAR)
                .chrome()
                .tagged(self.state.tag())
                .on_tap(TapAction::PickThickness(thickness));
            let bar_id = canvas.place(bar, pos);
            canvas.place(hit, pos);
            self.state.push_row(PickerValue::Thickness(thickness), bar_id);
        }
    }

    /// Reports `thickness` once if the picker is open, then closes it.
    pub fn select(&mut self, canvas: &mut dyn Canvas, thickness: u32) -> Option<u32> {
        match self.state.select(canvas, PickerValue::Thickness(thickness)) {
            Some(PickerValue::Thickness(t)) => Some(t),
            _ => None,
        }
    }

    pub fn dismiss(&mut self, canvas: &mut dyn Canvas) -> bool {
        self.state.close(canvas)
    }
}
