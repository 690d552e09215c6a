use crate::geometry::Point;
use crate::scene::{Canvas, DrawableId};
use crate::tool::{BrushParams, Tool};
use eframe::egui::vec2;

/// Removes every mark within a `2 * thickness` square around the pointer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EraserTool;

impl Tool for EraserTool {
    fn name(&self) -> &'static str {
        "Eraser"
    }

    fn glyph(&self) -> &'static str {
        "⌫"
    }

    fn on_pointer_move(&mut self, params: &BrushParams, canvas: &mut dyn Canvas, pos: Point) {
        let side = params.thickness as f32 * 2.0;
        // Toolbar and picker chrome is never erased
        let hits: Vec<DrawableId> = canvas
            .query_drawables(pos, vec2(side, side))
            .into_iter()
            .filter(|id| canvas.drawable(*id).is_some_and(|d| d.is_mark()))
            .collect();
        if !hits.is_empty() {
            log::debug!("Eraser removed {} drawables at {:?}", hits.len(), pos);
        }
        canvas.remove(&hits);
    }
}
