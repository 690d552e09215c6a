use crate::geometry::Point;
use crate::scene::{Canvas, Drawable};
use crate::tool::{BrushParams, Tool};
use eframe::egui::vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

const MIN_BURST: u32 = 10;
const MAX_BURST: u32 = 30;

/// Spray brush: a burst of small circles scattered around the pointer
#[derive(Debug, Clone)]
pub struct SprayTool {
    rng: StdRng,
    /// Circles centred at or left of this x would land under the toolbar
    boundary_x: f32,
}

impl SprayTool {
    pub fn new(boundary_x: f32) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            boundary_x,
        }
    }

    pub fn seeded(seed: u64, boundary_x: f32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            boundary_x,
        }
    }

    /// Uniformly distributed point inside the disk of `radius` around `center`.
    pub fn random_point_in_disk(&mut self, center: Point, radius: f32) -> Point {
        let r = radius * self.rng.gen_range(0.0..=1.0f32).sqrt();
        let theta = TAU * self.rng.gen_range(0.0..=1.0f32);
        center + vec2(r * theta.cos(), r * theta.sin())
    }
}

impl Tool for SprayTool {
    fn name(&self) -> &'static str {
        "SprayPaint"
    }

    fn glyph(&self) -> &'static str {
        "💨"
    }

    fn on_pointer_move(&mut self, params: &BrushParams, canvas: &mut dyn Canvas, pos: Point) {
        let thickness = params.thickness.max(1);
        let burst = self.rng.gen_range(MIN_BURST..=MAX_BURST);

        for _ in 0..burst {
            let radius = 1 + self.rng.gen_range(0..=thickness / 2);
            let center = self.random_point_in_disk(pos, thickness as f32);
            if center.x <= self.boundary_x {
                continue;
            }
            canvas.place(Drawable::circle(radius as f32, params.color), center);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Color;
    use crate::scene::{SceneModel, Shape};
    use eframe::egui::pos2;

    #[test]
    fn test_burst_size_and_radius_range() {
        let mut scene = SceneModel::new();
        let mut spray = SprayTool::seeded(7, -410.0);
        let params = BrushParams { thickness: 10, color: Color::BLACK };

        spray.on_pointer_move(&params, &mut scene, pos2(0.0, 0.0));

        let count = scene.len() as u32;
        assert!((MIN_BURST..=MAX_BURST).contains(&count));
        for d in scene.drawables() {
            match d.shape {
                Shape::Circle { radius } => assert!((1.0..=6.0).contains(&radius)),
                ref other => panic!("unexpected shape {:?}", other),
            }
        }
    }

    #[test]
    fn test_points_stay_inside_disk() {
        let mut spray = SprayTool::seeded(42, -410.0);
        let center = pos2(12.0, -30.0);
        for _ in 0..5000 {
            let p = spray.random_point_in_disk(center, 10.0);
            assert!(p.distance(center) <= 10.0 + 1e-3);
        }
    }

    #[test]
    fn test_points_under_toolbar_are_dropped() {
        let mut scene = SceneModel::new();
        let mut spray = SprayTool::seeded(3, -410.0);
        let params = BrushParams { thickness: 30, color: Color::BLACK };

        for _ in 0..200 {
            spray.on_pointer_move(&params, &mut scene, pos2(-405.0, 0.0));
        }

        assert!(scene.len() > 0);
        assert!(scene.drawables().iter().all(|d| d.position.x > -410.0));
    }
}
