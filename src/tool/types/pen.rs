use crate::geometry::Point;
use crate::scene::{Canvas, Drawable};
use crate::tool::{BrushParams, Tool};

/// Freehand brush: one filled circle per pointer event
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PenTool;

impl Tool for PenTool {
    fn name(&self) -> &'static str {
        "Pen"
    }

    fn glyph(&self) -> &'static str {
        "✏"
    }

    fn on_pointer_move(&mut self, params: &BrushParams, canvas: &mut dyn Canvas, pos: Point) {
        let radius = (params.thickness / 2) as f32;
        canvas.place(Drawable::circle(radius, params.color), pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Color;
    use crate::scene::{SceneModel, Shape};
    use eframe::egui::pos2;

    #[test]
    fn test_one_circle_per_event() {
        let mut scene = SceneModel::new();
        let mut pen = PenTool;
        let params = BrushParams { thickness: 7, color: Color::BLACK };
        let points = [pos2(0.0, 0.0), pos2(3.5, -2.0), pos2(100.0, 40.0)];

        for p in points {
            pen.on_pointer_move(&params, &mut scene, p);
        }

        assert_eq!(scene.len(), points.len());
        for (drawable, p) in scene.drawables().iter().zip(points) {
            assert_eq!(drawable.position, p);
            // 7 / 2 rounds down
            assert_eq!(drawable.shape, Shape::Circle { radius: 3.0 });
        }
    }
}
