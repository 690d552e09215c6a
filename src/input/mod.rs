use crate::geometry::Point;
use crate::picker::PickerKind;

mod router;
pub use router::route_event;

/// Who currently receives canvas pointer-move events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Pointer moves go to the active brush
    Draw,
    /// A picker owns input; pointer moves are dropped
    PickerOpen(PickerKind),
    /// Nothing installed yet
    #[default]
    Idle,
}

impl InputMode {
    /// The pointer-move handler this mode installs on the canvas.
    pub fn pointer_move_handler(&self) -> PointerMoveHandler {
        match self {
            Self::Draw => PointerMoveHandler::ActiveBrush,
            Self::PickerOpen(_) | Self::Idle => PointerMoveHandler::Ignore,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Draw)
    }

    pub fn open_picker(&self) -> Option<PickerKind> {
        match self {
            Self::PickerOpen(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// The single pointer-move handler installed on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerMoveHandler {
    /// Forward to the active brush unless the event falls on the toolbar
    ActiveBrush,
    /// Drop the event
    #[default]
    Ignore,
}

/// Pointer input in scene coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer dragged with the primary button held
    PointerMove { position: Point },
    /// Drag finished
    PointerUp { position: Point },
    /// Press and release without a drag
    Tap { position: Point },
}

impl InputEvent {
    pub fn position(&self) -> Point {
        match self {
            Self::PointerMove { position }
            | Self::PointerUp { position }
            | Self::Tap { position } => *position,
        }
    }
}
