use super::BrushParams;
use crate::geometry::Point;
use crate::scene::Canvas;

pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Glyph drawn as the tool's toolbar icon
    fn glyph(&self) -> &'static str;

    /// Handle pointer drag while this tool is active, emitting marks onto the canvas.
    /// Reads the brush's current parameters on every call.
    fn on_pointer_move(&mut self, params: &BrushParams, canvas: &mut dyn Canvas, pos: Point);

    /// Called when the pointer is lifted at the end of a drag.
    fn on_pointer_up(&mut self) {
        // default: do nothing
    }
}
