//! A top/bottom barrier pair with a passable gap between them.

use rand::Rng;

use crate::collision::Aabb;
use crate::config::Tuning;

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge, decreasing every frame.
    pub x: f64,
    pub width: f64,
    pub top_height: f64,
    pub gap_height: f64,
    /// Bottom segment spans `bottom_y..world_height`.
    pub bottom_y: f64,
    pub bottom_height: f64,
    pub scored: bool,
}

impl Obstacle {
    /// Build an obstacle at the right edge with the given top segment.
    pub fn with_top_height(tuning: &Tuning, top_height: f64) -> Self {
        let bottom_y = top_height + tuning.gap_height;
        Self {
            x: tuning.world_width,
            width: tuning.obstacle_width,
            top_height,
            gap_height: tuning.gap_height,
            bottom_y,
            bottom_height: tuning.world_height - bottom_y,
            scored: false,
        }
    }

    /// New obstacle at the right edge, top segment drawn uniformly from the
    /// whole units in `[min_segment, world_height / 2 - min_segment]`.
    /// `tuning` must have passed [`Tuning::validate`].
    pub fn spawn<R: Rng>(tuning: &Tuning, rng: &mut R) -> Self {
        let lo = tuning.min_segment.ceil() as u32;
        let hi = (tuning.max_top_height() as u32).max(lo);
        let top_height = rng.gen_range(lo..=hi) as f64;
        Self::with_top_height(tuning, top_height)
    }

    pub fn advance(&mut self, speed: f64) {
        self.x -= speed;
    }

    /// The trailing edge has left the screen.
    pub fn is_offscreen(&self) -> bool {
        self.x + self.width < 0.0
    }

    pub fn top_box(&self) -> Aabb {
        Aabb::new(self.x, 0.0, self.width, self.top_height)
    }

    pub fn bottom_box(&self) -> Aabb {
        Aabb::new(self.x, self.bottom_y, self.width, self.bottom_height)
    }

    pub fn intersects(&self, flyer: &Aabb) -> bool {
        flyer.overlaps(&self.top_box()) || flyer.overlaps(&self.bottom_box())
    }

    /// The flyer's left edge is strictly past this obstacle's trailing edge.
    pub fn is_passed_by(&self, flyer_x: f64) -> bool {
        self.x + self.width < flyer_x
    }
}
