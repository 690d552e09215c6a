use crate::geometry::Point;
use crate::scene::{Canvas, Drawable};
use crate::tool::{BrushParams, Tool};

/// Polyline brush: joins each pointer position to the previous one.
///
/// The anchor survives across drags unless `reset_on_lift` is set, so by
/// default a new drag starts with a segment from where the last one ended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinesTool {
    previous_point: Option<Point>,
    reset_on_lift: bool,
}

impl LinesTool {
    pub fn new(reset_on_lift: bool) -> Self {
        Self {
            previous_point: None,
            reset_on_lift,
        }
    }

    /// Starts from an existing anchor instead of a degenerate first segment.
    pub fn with_previous_point(point: Point, reset_on_lift: bool) -> Self {
        Self {
            previous_point: Some(point),
            reset_on_lift,
        }
    }

    pub fn previous_point(&self) -> Option<Point> {
        self.previous_point
    }

    pub fn resets_on_lift(&self) -> bool {
        self.reset_on_lift
    }

    pub fn set_reset_on_lift(&mut self, reset: bool) {
        self.reset_on_lift = reset;
    }
}

impl Tool for LinesTool {
    fn name(&self) -> &'static str {
        "Lines"
    }

    fn glyph(&self) -> &'static str {
        "📏"
    }

    fn on_pointer_move(&mut self, params: &BrushParams, canvas: &mut dyn Canvas, pos: Point) {
        let start = *self.previous_point.get_or_insert(pos);
        canvas.add(Drawable::line(start, pos, params.thickness as f32, params.color));
        self.previous_point = Some(pos);
    }

    fn on_pointer_up(&mut self) {
        if self.reset_on_lift {
            self.previous_point = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Color;
    use crate::scene::{SceneModel, Shape};
    use eframe::egui::pos2;

    fn params() -> BrushParams {
        BrushParams { thickness: 5, color: Color::BLACK }
    }

    fn endpoints(scene: &SceneModel) -> Vec<(Point, Point)> {
        scene
            .drawables()
            .iter()
            .filter_map(|d| match d.shape {
                Shape::Segment { from, to, .. } => Some((from, to)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_segments_form_connected_polyline() {
        let mut scene = SceneModel::new();
        let mut lines = LinesTool::new(false);
        let points = [pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 10.0)];
        for p in points {
            lines.on_pointer_move(&params(), &mut scene, p);
        }

        let segments = endpoints(&scene);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], (points[0], points[0]));
        for i in 1..segments.len() {
            assert_eq!(segments[i].0, segments[i - 1].1);
        }
    }

    #[test]
    fn test_preset_anchor_starts_first_segment() {
        let mut scene = SceneModel::new();
        let mut lines = LinesTool::with_previous_point(pos2(-5.0, -5.0), false);
        lines.on_pointer_move(&params(), &mut scene, pos2(5.0, 5.0));
        assert_eq!(endpoints(&scene), vec![(pos2(-5.0, -5.0), pos2(5.0, 5.0))]);
    }

    #[test]
    fn test_new_drag_connects_to_previous_by_default() {
        let mut scene = SceneModel::new();
        let mut lines = LinesTool::new(false);
        lines.on_pointer_move(&params(), &mut scene, pos2(0.0, 0.0));
        lines.on_pointer_up();
        lines.on_pointer_move(&params(), &mut scene, pos2(50.0, 50.0));

        assert_eq!(endpoints(&scene)[1], (pos2(0.0, 0.0), pos2(50.0, 50.0)));
    }

    #[test]
    fn test_reset_on_lift_starts_fresh() {
        let mut scene = SceneModel::new();
        let mut lines = LinesTool::new(true);
        lines.on_pointer_move(&params(), &mut scene, pos2(0.0, 0.0));
        lines.on_pointer_up();
        assert_eq!(lines.previous_point(), None);

        lines.on_pointer_move(&params(), &mut scene, pos2(50.0, 50.0));
        assert_eq!(endpoints(&scene)[1], (pos2(50.0, 50.0), pos2(50.0, 50.0)));
    }
}
