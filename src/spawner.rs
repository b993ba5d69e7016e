//! The ordered pipeline of live obstacles.

use std::ops::ControlFlow;

use rand::Rng;
use tracing::{debug, trace};

use crate::clock::on_cadence;
use crate::config::Tuning;
use crate::obstacle::Obstacle;

/// Live obstacles in spawn order, oldest (leftmost) first. Every spawn enters
/// at the right edge, so `x` ascends along the pipeline.
#[derive(Debug, Clone, Default)]
pub struct ObstacleSpawner {
    obstacles: Vec<Obstacle>,
}

impl ObstacleSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh obstacle on frames that are a multiple of the spawn
    /// period. Returns whether one was added.
    pub fn tick<R: Rng>(&mut self, frame: u64, tuning: &Tuning, rng: &mut R) -> bool {
        if !on_cadence(frame, tuning.spawn_period) {
            return false;
        }
        let obstacle = Obstacle::spawn(tuning, rng);
        debug!(frame, top_height = obstacle.top_height, "obstacle spawned");
        self.obstacles.push(obstacle);
        true
    }

    /// Move obstacles oldest first, handing each to `visit` right after it
    /// moves. The first break stops the pass and returns that obstacle's
    /// index; the ones behind it stay where they were.
    pub fn advance_each<F>(&mut self, speed: f64, mut visit: F) -> Option<usize>
    where
        F: FnMut(&mut Obstacle) -> ControlFlow<()>,
    {
        for (index, o) in self.obstacles.iter_mut().enumerate() {
            o.advance(speed);
            if visit(o).is_break() {
                return Some(index);
            }
        }
        None
    }

    pub fn advance_all(&mut self, speed: f64) {
        self.advance_each(speed, |_| ControlFlow::Continue(()));
    }

    /// Drop every obstacle whose trailing edge has left the screen, keeping
    /// survivors in order. Returns how many were removed.
    pub fn prune_offscreen(&mut self) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_offscreen());
        let removed = before - self.obstacles.len();
        if removed > 0 {
            trace!(removed, live = self.obstacles.len(), "pruned obstacles");
        }
        removed
    }

    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }
}
