//! Game constants and the [`Tuning`] that carries them into a session.

use crate::error::ConfigError;

// World
pub const WORLD_WIDTH: f64 = 400.0;
pub const WORLD_HEIGHT: f64 = 600.0;

// Crow
pub const FLYER_X: f64 = 50.0;
pub const FLYER_WIDTH: f64 = 40.0;
pub const FLYER_HEIGHT: f64 = 30.0;
/// Velocity gained every frame (positive = downward).
pub const GRAVITY: f64 = 0.4;
/// Velocity set by a flap.
pub const LIFT_IMPULSE: f64 = -7.0;
/// Frames between wing up/down toggles.
pub const WING_PERIOD: u64 = 5;

// Obstacles
pub const OBSTACLE_WIDTH: f64 = 60.0;
pub const GAP_HEIGHT: f64 = 200.0;
pub const OBSTACLE_SPEED: f64 = 3.5;
/// Frames between spawns.
pub const SPAWN_PERIOD: u64 = 90;
/// Shortest allowed top segment.
pub const MIN_SEGMENT: f64 = 60.0;

/// Every number the simulation reads. `Default` is the stock game; tests
/// build variants with struct update syntax.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub world_width: f64,
    pub world_height: f64,
    pub flyer_x: f64,
    pub flyer_width: f64,
    pub flyer_height: f64,
    pub gravity: f64,
    pub lift_impulse: f64,
    pub wing_period: u64,
    pub obstacle_width: f64,
    pub gap_height: f64,
    pub obstacle_speed: f64,
    pub spawn_period: u64,
    pub min_segment: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            flyer_x: FLYER_X,
            flyer_width: FLYER_WIDTH,
            flyer_height: FLYER_HEIGHT,
            gravity: GRAVITY,
            lift_impulse: LIFT_IMPULSE,
            wing_period: WING_PERIOD,
            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_period: SPAWN_PERIOD,
            min_segment: MIN_SEGMENT,
        }
    }
}

impl Tuning {
    /// Largest top segment a spawn may draw.
    pub fn max_top_height(&self) -> f64 {
        (self.world_height / 2.0 - self.min_segment).floor()
    }

    /// Vertical start position of the crow (centered).
    pub fn flyer_start_y(&self) -> f64 {
        self.world_height / 2.0
    }

    /// Reject any tuning that could produce a negative segment, a flyer
    /// outside the world or a division by a zero period.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("world width", self.world_width),
            ("world height", self.world_height),
            ("flyer x", self.flyer_x),
            ("flyer width", self.flyer_width),
            ("flyer height", self.flyer_height),
            ("gravity", self.gravity),
            ("lift impulse", self.lift_impulse),
            ("obstacle width", self.obstacle_width),
            ("gap height", self.gap_height),
            ("obstacle speed", self.obstacle_speed),
            ("minimum segment", self.min_segment),
        ] {
            if value.is_infinite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        if !(self.world_width > 0.0 && self.world_height > 0.0) {
            return Err(ConfigError::EmptyWorld {
                width: self.world_width,
                height: self.world_height,
            });
        }

        for (field, value) in [
            ("flyer width", self.flyer_width),
            ("flyer height", self.flyer_height),
            ("obstacle width", self.obstacle_width),
            ("gap height", self.gap_height),
            ("obstacle speed", self.obstacle_speed),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        for (field, value) in [
            ("gravity", self.gravity),
            ("minimum segment", self.min_segment),
            ("flyer x", self.flyer_x),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if !(self.lift_impulse < 0.0) {
            return Err(ConfigError::LiftNotUpward(self.lift_impulse));
        }
        if self.wing_period == 0 {
            return Err(ConfigError::ZeroPeriod("wing"));
        }
        if self.spawn_period == 0 {
            return Err(ConfigError::ZeroPeriod("spawn"));
        }

        if self.flyer_x + self.flyer_width > self.world_width
            || self.flyer_height + self.flyer_start_y() > self.world_height
        {
            return Err(ConfigError::FlyerOutOfWorld {
                x: self.flyer_x,
                width: self.flyer_width,
                height: self.flyer_height,
            });
        }

        // The tallest top segment still has to leave `min_segment` below the gap.
        let max_top = self.max_top_height();
        if max_top < self.min_segment
            || max_top + self.gap_height + self.min_segment > self.world_height
        {
            return Err(ConfigError::GapTooLarge {
                gap: self.gap_height,
                min_segment: self.min_segment,
                world_height: self.world_height,
            });
        }

        Ok(())
    }
}
