pub mod eraser;
pub mod lines;
pub mod pen;
pub mod spray;

pub use eraser::EraserTool;
pub use lines::LinesTool;
pub use pen::PenTool;
pub use spray::SprayTool;

use super::{BrushParams, Tool};
use crate::geometry::Point;
use crate::scene::Canvas;

/// The fixed set of brush variants
#[derive(Debug, Clone)]
pub enum BrushKind {
    Pen(PenTool),
    Lines(LinesTool),
    SprayPaint(SprayTool),
    Eraser(EraserTool),
}

impl Tool for BrushKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Pen(tool) => tool.name(),
            Self::Lines(tool) => tool.name(),
            Self::SprayPaint(tool) => tool.name(),
            Self::Eraser(tool) => tool.name(),
        }
    }

    fn glyph(&self) -> &'static str {
        match self {
            Self::Pen(tool) => tool.glyph(),
            Self::Lines(tool) => tool.glyph(),
            Self::SprayPaint(tool) => tool.glyph(),
            Self::Eraser(tool) => tool.glyph(),
        }
    }

    fn on_pointer_move(&mut self, params: &BrushParams, canvas: &mut dyn Canvas, pos: Point) {
        match self {
            Self::Pen(tool) => tool.on_pointer_move(params, canvas, pos),
            Self::Lines(tool) => tool.on_pointer_move(params, canvas, pos),
            Self::SprayPaint(tool) => tool.on_pointer_move(params, canvas, pos),
            Self::Eraser(tool) => tool.on_pointer_move(params, canvas, pos),
        }
    }

    fn on_pointer_up(&mut self) {
        match self {
            Self::Pen(tool) => tool.on_pointer_up(),
            Self::Lines(tool) => tool.on_pointer_up(),
            Self::SprayPaint(tool) => tool.on_pointer_up(),
            Self::Eraser(tool) => tool.on_pointer_up(),
        }
    }
}

impl BrushKind {
    pub fn as_lines(&self) -> Option<&LinesTool> {
        match self {
            Self::Lines(tool) => Some(tool),
            _ => None,
        }
    }

    pub fn as_lines_mut(&mut self) -> Option<&mut LinesTool> {
        match self {
            Self::Lines(tool) => Some(tool),
            _ => None,
        }
    }

    pub fn is_eraser(&self) -> bool {
        matches!(self, Self::Eraser(_))
    }
}
