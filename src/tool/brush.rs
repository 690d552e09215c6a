use super::types::BrushKind;
use super::{EraserTool, LinesTool, PenTool, SprayTool, Tool};
use crate::config::DrawingConfig;
use crate::geometry::{Color, Point};
use crate::scene::{Canvas, DrawableId};

/// Parameters shared by every brush variant, mutated by the pickers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushParams {
    /// Stroke thickness, always positive
    pub thickness: u32,
    pub color: Color,
}

/// A toolbar tool that turns pointer drags into marks.
///
/// The pointer handler is a method on the brush itself, so a color or
/// thickness change made through a picker is seen by the very next event.
#[derive(Debug, Clone)]
pub struct Brush {
    params: BrushParams,
    /// Toolbar icon, set once the toolbar has placed it
    pub icon: Option<DrawableId>,
    kind: BrushKind,
}

impl Brush {
    pub fn new(kind: BrushKind, thickness: u32, color: Color) -> Self {
        Self {
            params: BrushParams {
                thickness: thickness.max(1),
                color,
            },
            icon: None,
            kind,
        }
    }

    /// Circles at every pointer position.
    pub fn pen(config: &DrawingConfig) -> Self {
        Self::new(
            BrushKind::Pen(PenTool),
            config.default_thickness,
            config.default_color,
        )
    }

    /// Connected segments from one pointer position to the next.
    pub fn lines(config: &DrawingConfig) -> Self {
        Self::new(
            BrushKind::Lines(LinesTool::new(config.lines_reset_on_lift)),
            config.default_thickness,
            config.default_color,
        )
    }

    /// Random bursts of small circles.
    pub fn spray_paint(config: &DrawingConfig) -> Self {
        let spray = match config.spray_seed {
            Some(seed) => SprayTool::seeded(seed, config.toolbar_boundary_x),
            None => SprayTool::new(config.toolbar_boundary_x),
        };
        Self::new(
            BrushKind::SprayPaint(spray),
            config.default_thickness,
            config.default_color,
        )
    }

    /// Removes marks under the pointer. Its color is a background sentinel never drawn with.
    pub fn eraser(config: &DrawingConfig) -> Self {
        Self::new(
            BrushKind::Eraser(EraserTool),
            config.eraser_thickness,
            Color::WHITE,
        )
    }

    /// Pen, Lines, SprayPaint and Eraser, in toolbar order.
    pub fn default_set(config: &DrawingConfig) -> Vec<Self> {
        vec![
            Self::pen(config),
            Self::lines(config),
            Self::spray_paint(config),
            Self::eraser(config),
        ]
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn glyph(&self) -> &'static str {
        self.kind.glyph()
    }

    pub fn kind(&self) -> &BrushKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut BrushKind {
        &mut self.kind
    }

    pub fn params(&self) -> BrushParams {
        self.params
    }

    pub fn thickness(&self) -> u32 {
        self.params.thickness
    }

    pub fn color(&self) -> Color {
        self.params.color
    }

    /// Zero is ignored so the thickness stays positive.
    pub fn set_thickness(&mut self, thickness: u32) {
        if thickness > 0 {
            self.params.thickness = thickness;
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.params.color = color;
    }

    pub fn handle_pointer_move(&mut self, canvas: &mut dyn Canvas, pos: Point) {
        self.kind.on_pointer_move(&self.params, canvas, pos);
    }

    pub fn end_stroke(&mut self) {
        self.kind.on_pointer_up();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneModel;
    use eframe::egui::pos2;

    #[test]
    fn test_constructors_use_config() {
        let config = DrawingConfig {
            default_color: Color::rgb(0.0, 0.0, 1.0),
            default_thickness: 8,
            ..DrawingConfig::default()
        };
        let pen = Brush::pen(&config);
        assert_eq!(pen.thickness(), 8);
        assert_eq!(pen.color(), Color::rgb(0.0, 0.0, 1.0));

        let eraser = Brush::eraser(&config);
        assert_eq!(eraser.thickness(), 30);
        assert_eq!(eraser.color(), Color::WHITE);
    }

    #[test]
    fn test_zero_thickness_is_ignored() {
        let mut pen = Brush::pen(&DrawingConfig::default());
        pen.set_thickness(0);
        assert_eq!(pen.thickness(), 5);
    }

    #[test]
    fn test_parameter_change_is_seen_by_next_event() {
        let mut scene = SceneModel::new();
        let mut pen = Brush::pen(&DrawingConfig::default());

        pen.handle_pointer_move(&mut scene, pos2(0.0, 0.0));
        pen.set_thickness(20);
        pen.set_color(Color::WHITE);
        pen.handle_pointer_move(&mut scene, pos2(1.0, 0.0));

        let last = &scene.drawables()[1];
        assert_eq!(last.unrotated_size().x, 20.0);
        assert_eq!(last.fill, Color::WHITE);
    }

    #[test]
    fn test_default_set_order() {
        let names: Vec<_> = Brush::default_set(&DrawingConfig::default())
            .iter()
            .map(Brush::name)
            .collect();
        assert_eq!(names, ["Pen", "Lines", "SprayPaint", "Eraser"]);
    }
}
