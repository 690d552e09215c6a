//! The drawing surface the toolbar and brushes talk to.
//!
//! [`Canvas`] is the minimal scene API: placing and removing drawables,
//! bulk removal by tag, region queries and per-drawable tap actions.
//! [`SceneModel`] is the in-memory implementation the app renders from.

mod animation;
mod model;

pub use animation::{ScaleAnimation, ScaleKind};
pub use model::SceneModel;

use crate::geometry::hit_testing::{rects_overlap, segment_bounds};
use crate::geometry::{Color, Point, Size};
use eframe::egui::{Rect, vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a drawable in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawableId(Uuid);

impl DrawableId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DrawableId {
    fn default() -> Self {
        Self::new()
    }
}

/// Geometry of a drawable
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    /// Straight line between two absolute scene points
    Segment { from: Point, to: Point, thickness: f32 },
    /// Horizontal line of a given length, centred on the drawable position
    Bar { length: f32, thickness: f32 },
    Rectangle { width: f32, height: f32, corner_radius: f32 },
    /// Square glyph standing in for an icon image
    Icon { glyph: String, size: f32 },
}

/// Whether a drawable is user artwork or toolbar/picker chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Mark,
    Chrome,
}

/// Which point of the drawable `place_anchored` pins to the given location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Center,
    Left,
}

/// What tapping a drawable asks the toolbar to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapAction {
    SelectBrush(usize),
    OpenColorPicker,
    OpenThicknessPicker,
    PickColor(Color),
    PickThickness(u32),
}

/// A single render object in the scene
#[derive(Debug, Clone)]
pub struct Drawable {
    pub id: DrawableId,
    pub shape: Shape,
    /// Centre of the drawable (segments use their midpoint)
    pub position: Point,
    pub fill: Color,
    pub tag: Option<String>,
    /// Rotation in degrees, counter-clockwise
    pub rotation: f32,
    /// Overrides the unrotated width/height of the shape
    pub size: Option<Size>,
    pub role: Role,
    pub on_tap: Option<TapAction>,
    pub animation: Option<ScaleAnimation>,
    /// Dropped from the scene once its animation has finished
    pub expires: bool,
}

impl Drawable {
    fn new(shape: Shape, fill: Color) -> Self {
        let position = match &shape {
            Shape::Segment { from, to, .. } => from.lerp(*to, 0.5),
            _ => Point::ZERO,
        };
        Self {
            id: DrawableId::new(),
            shape,
            position,
            fill,
            tag: None,
            rotation: 0.0,
            size: None,
            role: Role::Mark,
            on_tap: None,
            animation: None,
            expires: false,
        }
    }

    pub fn circle(radius: f32, color: Color) -> Self {
        Self::new(Shape::Circle { radius }, color)
    }

    pub fn line(from: Point, to: Point, thickness: f32, color: Color) -> Self {
        Self::new(Shape::Segment { from, to, thickness }, color)
    }

    pub fn bar(length: f32, thickness: f32, color: Color) -> Self {
        Self::new(Shape::Bar { length, thickness }, color)
    }

    pub fn rectangle(width: f32, height: f32, corner_radius: f32, color: Color) -> Self {
        Self::new(
            Shape::Rectangle {
                width,
                height,
                corner_radius,
            },
            color,
        )
    }

    pub fn icon(glyph: impl Into<String>, size: f32, color: Color) -> Self {
        Self::new(
            Shape::Icon {
                glyph: glyph.into(),
                size,
            },
            color,
        )
    }

    /// Marks the drawable as toolbar or picker chrome.
    pub fn chrome(mut self) -> Self {
        self.role = Role::Chrome;
        self
    }

    pub fn tagged(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn on_tap(mut self, action: TapAction) -> Self {
        self.on_tap = Some(action);
        self
    }

    pub fn is_mark(&self) -> bool {
        self.role == Role::Mark
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag.as_deref() == Some(tag)
    }

    /// Width and height before rotation, honouring any size override.
    pub fn unrotated_size(&self) -> Size {
        if let Some(size) = self.size {
            return size;
        }
        match &self.shape {
            Shape::Circle { radius } => vec2(radius * 2.0, radius * 2.0),
            Shape::Segment { from, to, thickness } => {
                segment_bounds(*from, *to, *thickness).size()
            }
            Shape::Bar { length, thickness } => vec2(*length, *thickness),
            Shape::Rectangle { width, height, .. } => vec2(*width, *height),
            Shape::Icon { size, .. } => vec2(*size, *size),
        }
    }

    /// Axis-aligned bounds in scene coordinates.
    pub fn bounds(&self) -> Rect {
        if let Shape::Segment { from, to, thickness } = &self.shape {
            return segment_bounds(*from, *to, *thickness);
        }
        let mut size = self.unrotated_size();
        let quarter_turns = (self.rotation / 90.0).round().rem_euclid(2.0);
        if quarter_turns == 1.0 {
            size = vec2(size.y, size.x);
        }
        Rect::from_center_size(self.position, size)
    }

    pub fn intersects(&self, region: Rect) -> bool {
        rects_overlap(self.bounds(), region)
    }

    fn move_to(&mut self, center: Point) {
        let delta = center - self.position;
        if let Shape::Segment { from, to, .. } = &mut self.shape {
            *from += delta;
            *to += delta;
        }
        self.position = center;
    }
}

/// The scene surface consumed by brushes, pickers and the toolbar.
///
/// Every operation is infallible: unknown ids are ignored.
pub trait Canvas {
    /// Adds a drawable at the position it already carries.
    fn add(&mut self, drawable: Drawable) -> DrawableId;

    fn remove(&mut self, ids: &[DrawableId]);

    /// Removes every drawable tagged with `tag`, returning how many went.
    fn remove_by_tag(&mut self, tag: &str) -> usize;

    /// Ids of drawables intersecting the `within`-sized rect centred on `near`.
    fn query_drawables(&self, near: Point, within: Size) -> Vec<DrawableId>;

    fn drawable(&self, id: DrawableId) -> Option<&Drawable>;

    fn drawable_mut(&mut self, id: DrawableId) -> Option<&mut Drawable>;

    /// Topmost drawable with a tap action whose bounds contain `point`.
    fn tap_target(&self, point: Point) -> Option<(DrawableId, TapAction)>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn place(&mut self, drawable: Drawable, at: Point) -> DrawableId {
        self.place_anchored(drawable, at, Anchor::Center)
    }

    fn place_anchored(&mut self, mut drawable: Drawable, at: Point, anchor: Anchor) -> DrawableId {
        let center = match anchor {
            Anchor::Center => at,
            Anchor::Left => at + vec2(drawable.bounds().width() / 2.0, 0.0),
        };
        drawable.move_to(center);
        self.add(drawable)
    }

    fn set_fill(&mut self, id: DrawableId, color: Color) {
        if let Some(d) = self.drawable_mut(id) {
            d.fill = color;
        }
    }

    fn set_tag(&mut self, id: DrawableId, tag: &str) {
        if let Some(d) = self.drawable_mut(id) {
            d.tag = Some(tag.to_string());
        }
    }

    fn set_rotation(&mut self, id: DrawableId, degrees: f32) {
        if let Some(d) = self.drawable_mut(id) {
            d.rotation = degrees;
        }
    }

    fn set_size(&mut self, id: DrawableId, size: Size) {
        if let Some(d) = self.drawable_mut(id) {
            d.size = Some(size);
        }
    }

    fn set_tap_action(&mut self, id: DrawableId, action: Option<TapAction>) {
        if let Some(d) = self.drawable_mut(id) {
            d.on_tap = action;
        }
    }

    /// Brief scale-up/scale-back acknowledgment.
    fn pulse(&mut self, id: DrawableId) {
        if let Some(d) = self.drawable_mut(id) {
            d.animation = Some(ScaleAnimation::pulse());
        }
    }

    fn scale_to(&mut self, id: DrawableId, scale: f32, duration: f64) {
        if let Some(d) = self.drawable_mut(id) {
            d.animation = Some(ScaleAnimation::scale_to(scale, duration));
        }
    }

    /// Detaches a drawable from its tag and tap action so it can finish
    /// animating after its owner is gone. It is removed once settled.
    fn retire(&mut self, id: DrawableId) {
        if let Some(d) = self.drawable_mut(id) {
            d.tag = None;
            d.on_tap = None;
            d.expires = true;
        }
    }
}
