use crate::geometry::{Point, Size};
use crate::scene::{Drawable, SceneModel, Shape};
use crate::util::time;
use eframe::egui::{self, Color32, Pos2, Rect, Vec2};

/// Side length of the square scene, in scene units
pub const SCENE_SIZE: f32 = 1024.0;

/// Maps scene coordinates (origin at the centre, y up) onto a screen rect,
/// keeping the scene's aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneTransform {
    center: Pos2,
    scale: f32,
}

impl SceneTransform {
    /// Aspect-fits a scene of `scene_size` into `rect`.
    pub fn fit(rect: Rect, scene_size: Size) -> Self {
        let scale = (rect.width() / scene_size.x).min(rect.height() / scene_size.y);
        Self {
            center: rect.center(),
            scale: scale.max(f32::EPSILON),
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn to_screen(&self, p: Point) -> Pos2 {
        self.center + Vec2::new(p.x * self.scale, -p.y * self.scale)
    }

    pub fn to_scene(&self, p: Pos2) -> Point {
        let d = (p - self.center) / self.scale;
        Point::new(d.x, -d.y)
    }

    /// Screen rect covering the scene rect `r`.
    pub fn rect_to_screen(&self, r: Rect) -> Rect {
        Rect::from_two_pos(self.to_screen(r.min), self.to_screen(r.max))
    }
}

/// Paints scene drawables with an egui painter
#[derive(Debug)]
pub struct Renderer {
    scene_size: Size,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            scene_size: Vec2::splat(SCENE_SIZE),
        }
    }

    pub fn scene_size(&self) -> Size {
        self.scene_size
    }

    pub fn transform(&self, rect: Rect) -> SceneTransform {
        SceneTransform::fit(rect, self.scene_size)
    }

    /// Renders the current frame
    ///
    /// Returns true while an animation is still running, so the caller knows
    /// to request another repaint.
    pub fn render(&self, painter: &egui::Painter, rect: Rect, scene: &SceneModel) -> bool {
        let transform = self.transform(rect);
        let now = time::current_time_secs();

        painter.rect_filled(transform.rect_to_screen(Rect::from_center_size(Pos2::ZERO, self.scene_size)), 0.0, Color32::WHITE);
        for drawable in scene.drawables() {
            paint_drawable(painter, &transform, drawable, now);
        }

        scene.is_animating(now)
    }
}

fn paint_drawable(painter: &egui::Painter, transform: &SceneTransform, drawable: &Drawable, now: f64) {
    if drawable.fill.is_transparent() {
        return;
    }
    let fill: Color32 = drawable.fill.into();
    let scale = drawable.animation.map_or(1.0, |a| a.scale_at(now)) * transform.scale();
    let center = transform.to_screen(drawable.position);

    match &drawable.shape {
        Shape::Circle { radius } => {
            let radius = drawable.size.map_or(*radius, |s| s.x / 2.0);
            painter.circle_filled(center, radius * scale, fill);
        }
        Shape::Segment { from, to, thickness } => {
            let points = [transform.to_screen(*from), transform.to_screen(*to)];
            let width = thickness * scale;
            if points[0] == points[1] {
                painter.circle_filled(points[0], width / 2.0, fill);
            } else {
                painter.line_segment(points, egui::Stroke::new(width, fill));
            }
        }
        Shape::Bar { .. } | Shape::Rectangle { .. } => {
            let corner = match &drawable.shape {
                Shape::Rectangle { corner_radius, .. } => corner_radius * scale,
                _ => 0.0,
            };
            // Scene bounds already account for quarter-turn rotation
            let size = drawable.bounds().size() * scale;
            painter.rect_filled(Rect::from_center_size(center, size), corner, fill);
        }
        Shape::Icon { glyph, size } => {
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                glyph,
                egui::FontId::proportional(size * scale * 0.8),
                fill,
            );
        }
    }
}
