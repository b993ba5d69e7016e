//! The crow: vertical motion, flapping and the wing animation.

use crate::clock::on_cadence;
use crate::collision::Aabb;
use crate::config::Tuning;

/// Radians of tilt per unit of vertical velocity.
pub const TILT_PER_VELOCITY: f64 = 0.05;

/// Which way the wings are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WingPhase {
    Up,
    Down,
}

impl WingPhase {
    fn toggled(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// The player's crow. `x` never changes; only `y` moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Flyer {
    pub x: f64,
    /// Top edge in world units (0 = ceiling).
    pub y: f64,
    /// Units per frame, positive = downward.
    pub velocity: f64,
    pub width: f64,
    pub height: f64,
    pub wing: WingPhase,
}

/// What the clamp did after an integration step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clamp {
    Free,
    /// Bumped the ceiling. Harmless.
    Ceiling,
    /// Hit the floor. Ends the game.
    Floor,
}

impl Flyer {
    /// A crow at rest, vertically centered.
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: tuning.flyer_x,
            y: tuning.flyer_start_y(),
            velocity: 0.0,
            width: tuning.flyer_width,
            height: tuning.flyer_height,
            wing: WingPhase::Up,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }

    /// Rotation to draw the crow with; nose down while falling.
    pub fn tilt(&self) -> f64 {
        self.velocity * TILT_PER_VELOCITY
    }
}

/// Apply one frame of gravity, flip the wings on cadence and clamp the
/// crow into `[0, world_height - height]`.
pub fn integrate(flyer: &mut Flyer, frame: u64, tuning: &Tuning) -> Clamp {
    flyer.velocity += tuning.gravity;
    flyer.y += flyer.velocity;

    if on_cadence(frame, tuning.wing_period) {
        flyer.wing = flyer.wing.toggled();
    }

    let floor = tuning.world_height - flyer.height;
    if flyer.y > floor {
        flyer.y = floor;
        flyer.velocity = 0.0;
        return Clamp::Floor;
    }
    if flyer.y < 0.0 {
        flyer.y = 0.0;
        flyer.velocity = 0.0;
        return Clamp::Ceiling;
    }
    Clamp::Free
}

/// Replace the velocity with the lift impulse and raise the wings.
pub fn flap(flyer: &mut Flyer, tuning: &Tuning) {
    flyer.velocity = tuning.lift_impulse;
    flyer.wing = WingPhase::Up;
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_new_flyer_is_centered_at_rest() {
        let t = Tuning::default();
        let f = Flyer::new(&t);
        assert_eq!(f.y, 300.0);
        assert_eq!(f.velocity, 0.0);
        assert_eq!(f.x, 50.0);
        assert_eq!(f.wing, WingPhase::Up);
    }

    #[test]
    fn test_one_frame_of_gravity() {
        let t = Tuning::default();
        let mut f = Flyer::new(&t);
        f.y = 300.0;
        f.velocity = 0.0;

        let clamp = integrate(&mut f, 1, &t);

        assert_eq!(clamp, Clamp::Free);
        assert!((f.velocity - 0.4).abs() < EPS);
        assert!((f.y - 300.4).abs() < EPS);
    }

    #[test]
    fn test_floor_clamps_and_reports() {
        let t = Tuning::default();
        let mut f = Flyer::new(&t);
        f.y = 569.0;
        f.velocity = 5.0;

        assert_eq!(integrate(&mut f, 1, &t), Clamp::Floor);
        assert_eq!(f.y, 570.0);
        assert_eq!(f.velocity, 0.0);
    }

    #[test]
    fn test_resting_exactly_on_floor_is_free() {
        let t = Tuning {
            gravity: 0.0,
            ..Tuning::default()
        };
        let mut f = Flyer::new(&t);
        f.y = 570.0;
        assert_eq!(integrate(&mut f, 1, &t), Clamp::Free);
    }

    #[test]
    fn test_ceiling_clamps_without_ending() {
        let t = Tuning::default();
        let mut f = Flyer::new(&t);
        f.y = 3.0;
        f.velocity = -7.0;

        assert_eq!(integrate(&mut f, 1, &t), Clamp::Ceiling);
        assert_eq!(f.y, 0.0);
        assert_eq!(f.velocity, 0.0);
    }

    #[test]
    fn test_flap_sets_velocity_not_adds() {
        let t = Tuning::default();
        let mut f = Flyer::new(&t);
        f.velocity = 4.2;
        f.wing = WingPhase::Down;

        flap(&mut f, &t);

        assert_eq!(f.velocity, -7.0);
        assert_eq!(f.wing, WingPhase::Up);
    }

    #[test]
    fn test_wings_toggle_on_period() {
        let t = Tuning::default();
        let mut f = Flyer::new(&t);
        let mut seen = Vec::new();
        for frame in 1..=10 {
            f.y = 300.0;
            integrate(&mut f, frame, &t);
            seen.push(f.wing);
        }
        assert_eq!(seen[3], WingPhase::Up);
        assert_eq!(seen[4], WingPhase::Down); // frame 5
        assert_eq!(seen[8], WingPhase::Down);
        assert_eq!(seen[9], WingPhase::Up); // frame 10
    }

    #[test]
    fn test_tilt_follows_velocity() {
        let t = Tuning::default();
        let mut f = Flyer::new(&t);
        f.velocity = -7.0;
        assert!((f.tilt() + 0.35).abs() < EPS);
        f.velocity = 0.0;
        assert_eq!(f.tilt(), 0.0);
    }
}
