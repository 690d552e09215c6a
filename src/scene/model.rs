use super::{Canvas, Drawable, DrawableId, TapAction};
use crate::geometry::hit_testing::centered_rect;
use crate::geometry::{Point, Size};

/// In-memory scene: drawables in z-order, last placed on top.
#[derive(Debug, Default, Clone)]
pub struct SceneModel {
    drawables: Vec<Drawable>,
}

impl SceneModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drawables in paint order.
    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    pub fn marks(&self) -> impl Iterator<Item = &Drawable> {
        self.drawables.iter().filter(|d| d.is_mark())
    }

    pub fn tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Drawable> + 'a {
        self.drawables.iter().filter(move |d| d.has_tag(tag))
    }

    /// Removes expiring drawables whose animation has finished at `now`.
    pub fn prune_expired(&mut self, now: f64) -> usize {
        let before = self.drawables.len();
        self.drawables
            .retain(|d| !d.expires || d.animation.is_some_and(|a| !a.is_finished(now)));
        let pruned = before - self.drawables.len();
        if pruned > 0 {
            log::trace!("pruned {} settled drawables", pruned);
        }
        pruned
    }

    /// True while any drawable still has a running animation.
    pub fn is_animating(&self, now: f64) -> bool {
        self.drawables
            .iter()
            .filter_map(|d| d.animation.as_ref())
            .any(|a| !a.is_finished(now))
    }
}

impl Canvas for SceneModel {
    fn add(&mut self, drawable: Drawable) -> DrawableId {
        let id = drawable.id;
        self.drawables.push(drawable);
        id
    }

    fn remove(&mut self, ids: &[DrawableId]) {
        if ids.is_empty() {
            return;
        }
        self.drawables.retain(|d| !ids.contains(&d.id));
    }

    fn remove_by_tag(&mut self, tag: &str) -> usize {
        let before = self.drawables.len();
        self.drawables.retain(|d| !d.has_tag(tag));
        before - self.drawables.len()
    }

    fn query_drawables(&self, near: Point, within: Size) -> Vec<DrawableId> {
        let region = centered_rect(near, within);
        self.drawables
            .iter()
            .filter(|d| d.intersects(region))
            .map(|d| d.id)
            .collect()
    }

    fn drawable(&self, id: DrawableId) -> Option<&Drawable> {
        self.drawables.iter().find(|d| d.id == id)
    }

    fn drawable_mut(&mut self, id: DrawableId) -> Option<&mut Drawable> {
        self.drawables.iter_mut().find(|d| d.id == id)
    }

    fn tap_target(&self, point: Point) -> Option<(DrawableId, TapAction)> {
        self.drawables
            .iter()
            .rev()
            .find_map(|d| match d.on_tap {
                Some(action) if d.bounds().contains(point) => Some((d.id, action)),
                _ => None,
            })
    }

    fn len(&self) -> usize {
        self.drawables.len()
    }
}
