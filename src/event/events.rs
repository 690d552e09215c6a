use crate::geometry::Color;
use crate::input::InputMode;
use crate::picker::PickerKind;

/// Everything observable the toolbar does in response to input
#[derive(Debug, Clone, PartialEq)]
pub enum ToolBarEvent {
    BrushSelected {
        index: usize,
        name: &'static str,
    },
    PickerOpened(PickerKind),
    PickerDismissed(PickerKind),
    /// A color was picked and applied to every brush
    ColorSelected(Color),
    /// A thickness was picked and applied to every brush
    ThicknessSelected(u32),
    ModeChanged {
        from: InputMode,
        to: InputMode,
    },
}
