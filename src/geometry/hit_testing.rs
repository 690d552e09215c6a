use super::{Point, Size};
use eframe::egui::Rect;

/// Rectangle of `size` centred on `center`.
pub fn centered_rect(center: Point, size: Size) -> Rect {
    Rect::from_center_size(center, size)
}

/// Whether two rectangles overlap, edges included.
///
/// A zero-sized rect lying on the other rect's border still counts.
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    a.min.x <= b.max.x && b.min.x <= a.max.x && a.min.y <= b.max.y && b.min.y <= a.max.y
}

/// Bounding box of a straight segment with the given stroke width.
pub fn segment_bounds(from: Point, to: Point, thickness: f32) -> Rect {
    let half = thickness / 2.0;
    Rect::from_two_pos(from, to).expand(half)
}
