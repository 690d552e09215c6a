use crate::panels::ToolBar;
use crate::scene::Canvas;

use super::InputEvent;

/// Routes an input event to the toolbar, which owns the input-routing policy
pub fn route_event(event: &InputEvent, toolbar: &mut ToolBar, canvas: &mut dyn Canvas) {
    match *event {
        InputEvent::PointerMove { position } => toolbar.handle_pointer_move(canvas, position),
        InputEvent::PointerUp { .. } => toolbar.handle_pointer_up(),
        InputEvent::Tap { position } => toolbar.handle_tap(canvas, position),
    }
}
