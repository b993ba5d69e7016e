//! Game session: phase machine and the per-frame step.
//!
//! A session starts `Idle`. The first flap starts a run; the run ends when the
//! crow hits the floor or an obstacle, and only an explicit restart begins a
//! new one. While `Running`, [`GameSession::step`] advances exactly one frame:
//!
//! 1. frame counter
//! 2. obstacle spawn
//! 3. crow integration (the floor ends the frame)
//! 4. per obstacle in spawn order: advance, collide (ends the frame), score
//! 5. prune obstacles that left the screen

use std::ops::ControlFlow;

use rand::Rng;
use tracing::{debug, info};

use crate::clock::FrameCounter;
use crate::config::Tuning;
use crate::error::ConfigError;
use crate::flyer::{self, Clamp, Flyer};
use crate::obstacle::Obstacle;
use crate::spawner::ObstacleSpawner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first flap.
    Idle,
    Running,
    /// Frozen until restart.
    GameOver,
}

/// Discrete player intents coming from the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Flap while running; start when idle.
    Flap,
    /// New run after a game over.
    Restart,
}

/// What an input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Started,
    Flapped,
    Restarted,
    Ignored,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crash {
    Floor,
    /// Index into the obstacle pipeline at the moment of impact.
    Obstacle { index: usize },
}

/// Everything that happened during one [`GameSession::step`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Frame number after the increment; 0 if the session was not running.
    pub frame: u64,
    pub spawned: bool,
    /// Obstacles passed this frame.
    pub scored: u32,
    pub pruned: usize,
    pub crash: Option<Crash>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    tuning: Tuning,
    phase: Phase,
    clock: FrameCounter,
    flyer: Flyer,
    spawner: ObstacleSpawner,
    score: u32,
    best: u32,
}

impl GameSession {
    /// Idle session for a validated tuning.
    pub fn new(tuning: Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        Ok(Self {
            flyer: Flyer::new(&tuning),
            tuning,
            phase: Phase::Idle,
            clock: FrameCounter::new(),
            spawner: ObstacleSpawner::new(),
            score: 0,
            best: 0,
        })
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn frame(&self) -> u64 {
        self.clock.get()
    }

    pub fn flyer(&self) -> &Flyer {
        &self.flyer
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.spawner.as_slice()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Highest score of any run in this process.
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Apply one input. Inputs that make no sense in the current phase are
    /// dropped.
    pub fn handle_input(&mut self, input: Input) -> Response {
        let response = match (self.phase, input) {
            (Phase::Idle, Input::Flap) => {
                self.begin_run();
                Response::Started
            }
            (Phase::Running, Input::Flap) => {
                flyer::flap(&mut self.flyer, &self.tuning);
                Response::Flapped
            }
            (Phase::GameOver, Input::Restart) => {
                self.begin_run();
                Response::Restarted
            }
            _ => Response::Ignored,
        };
        match response {
            Response::Ignored => debug!(?input, phase = ?self.phase, "input ignored"),
            Response::Flapped => {}
            _ => info!(?response, best = self.best, "run started"),
        }
        response
    }

    /// Advance one frame. Does nothing unless running.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> TickReport {
        let mut report = TickReport::default();
        if self.phase != Phase::Running {
            return report;
        }

        let frame = self.clock.tick();
        report.frame = frame;
        report.spawned = self.spawner.tick(frame, &self.tuning, rng);

        if flyer::integrate(&mut self.flyer, frame, &self.tuning) == Clamp::Floor {
            report.crash = Some(Crash::Floor);
            self.end_run(Crash::Floor);
            return report;
        }

        let flyer_box = self.flyer.bounds();
        let flyer_x = self.flyer.x;
        let speed = self.tuning.obstacle_speed;
        let mut scored = 0;
        let hit = self.spawner.advance_each(speed, |obstacle| {
            if obstacle.intersects(&flyer_box) {
                return ControlFlow::Break(());
            }
            if !obstacle.scored && obstacle.is_passed_by(flyer_x) {
                obstacle.scored = true;
                scored += 1;
            }
            ControlFlow::Continue(())
        });
        report.scored = scored;

        if report.scored > 0 {
            self.score += report.scored;
            debug!(frame, score = self.score, "obstacle passed");
        }

        if let Some(index) = hit {
            let crash = Crash::Obstacle { index };
            report.crash = Some(crash);
            self.end_run(crash);
            return report;
        }

        report.pruned = self.spawner.prune_offscreen();
        report
    }

    fn begin_run(&mut self) {
        self.flyer = Flyer::new(&self.tuning);
        self.spawner.clear();
        self.clock = FrameCounter::new();
        self.score = 0;
        self.phase = Phase::Running;
    }

    fn end_run(&mut self, crash: Crash) {
        self.phase = Phase::GameOver;
        self.best = self.best.max(self.score);
        info!(
            ?crash,
            score = self.score,
            best = self.best,
            frame = self.clock.get(),
            "game over"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flyer::WingPhase;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn running() -> GameSession {
        let mut s = GameSession::new(Tuning::default()).unwrap();
        assert_eq!(s.handle_input(Input::Flap), Response::Started);
        s
    }

    /// Obstacle whose gap is centered on the crow's start height.
    fn open_obstacle(x: f64) -> Obstacle {
        let mut o = Obstacle::with_top_height(&Tuning::default(), 200.0);
        o.x = x;
        o
    }

    #[test]
    fn test_new_session_is_idle() {
        let s = GameSession::new(Tuning::default()).unwrap();
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.score(), 0);
        assert_eq!(s.frame(), 0);
        assert!(s.obstacles().is_empty());
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let t = Tuning {
            gap_height: 900.0,
            ..Tuning::default()
        };
        assert!(GameSession::new(t).is_err());
    }

    #[test]
    fn test_idle_does_not_simulate() {
        let mut s = GameSession::new(Tuning::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let report = s.step(&mut rng);
        assert_eq!(report, TickReport::default());
        assert_eq!(s.flyer().y, 300.0);
        assert_eq!(s.frame(), 0);
    }

    #[test]
    fn test_flap_in_idle_starts_without_impulse() {
        let s = running();
        assert_eq!(s.phase(), Phase::Running);
        assert_eq!(s.flyer().velocity, 0.0);
    }

    #[test]
    fn test_flap_while_running() {
        let mut s = running();
        assert_eq!(s.handle_input(Input::Flap), Response::Flapped);
        assert_eq!(s.flyer().velocity, -7.0);
    }

    #[test]
    fn test_restart_ignored_unless_game_over() {
        let mut s = GameSession::new(Tuning::default()).unwrap();
        assert_eq!(s.handle_input(Input::Restart), Response::Ignored);
        assert_eq!(s.phase(), Phase::Idle);

        let mut s = running();
        let mut rng = StdRng::seed_from_u64(0);
        s.step(&mut rng);
        let frame = s.frame();
        assert_eq!(s.handle_input(Input::Restart), Response::Ignored);
        assert_eq!(s.frame(), frame);
    }

    #[test]
    fn test_floor_ends_run_and_freezes() {
        let mut s = running();
        let mut rng = StdRng::seed_from_u64(0);
        s.flyer.y = 569.5;
        s.flyer.velocity = 2.0;

        let report = s.step(&mut rng);

        assert_eq!(report.crash, Some(Crash::Floor));
        assert_eq!(s.phase(), Phase::GameOver);
        assert_eq!(s.flyer().y, 570.0);

        let frozen = (s.frame(), s.flyer().clone(), s.obstacles().to_vec());
        assert_eq!(s.step(&mut rng), TickReport::default());
        assert_eq!((s.frame(), s.flyer().clone(), s.obstacles().to_vec()), frozen);
    }

    #[test]
    fn test_floor_crash_skips_obstacles() {
        let mut s = running();
        let mut rng = StdRng::seed_from_u64(0);
        s.spawner.push(open_obstacle(0.0));
        s.flyer.y = 569.5;
        s.flyer.velocity = 2.0;

        s.step(&mut rng);

        assert_eq!(s.obstacles()[0].x, 0.0);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn test_flap_ignored_after_game_over() {
        let mut s = running();
        s.phase = Phase::GameOver;
        assert_eq!(s.handle_input(Input::Flap), Response::Ignored);
        assert_eq!(s.flyer().velocity, 0.0);
    }

    #[test]
    fn test_ceiling_is_safe() {
        let mut s = running();
        let mut rng = StdRng::seed_from_u64(0);
        s.flyer.y = 2.0;
        s.flyer.velocity = -7.0;
        let report = s.step(&mut rng);
        assert!(report.crash.is_none());
        assert_eq!(s.phase(), Phase::Running);
        assert_eq!(s.flyer().y, 0.0);
    }

    #[test]
    fn test_spawns_every_ninety_frames() {
        let mut s = running();
        let mut rng = StdRng::seed_from_u64(5);
        for frame in 1..=90 {
            // hold the crow in the middle of every gap
            s.flyer.y = 300.0;
            s.flyer.velocity = 0.0;
            let report = s.step(&mut rng);
            assert_eq!(report.frame, frame);
            assert_eq!(report.spawned, frame == 90);
        }
        assert_eq!(s.obstacles().len(), 1);
        // spawned then advanced in the same frame
        assert_eq!(s.obstacles()[0].x, 396.5);
    }

    #[test]
    fn test_scores_once_when_passed() {
        let mut s = running();
        let mut rng = StdRng::seed_from_u64(0);
        // trailing edge at 51.5, crosses flyer x = 50 after one advance
        s.spawner.push(open_obstacle(-8.5));
        s.flyer.y = 250.0;

        let report = s.step(&mut rng);
        assert_eq!(report.scored, 1);
        assert_eq!(s.score(), 1);
        assert!(s.obstacles()[0].scored);

        let report = s.step(&mut rng);
        assert_eq!(report.scored, 0);
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn test_scored_before_pruned_same_frame() {
        let mut s = running();
        let mut rng = StdRng::seed_from_u64(0);
        // after advance: x = -61, offscreen and passed in one frame
        s.spawner.push(open_obstacle(-57.5));

        let report = s.step(&mut rng);

        assert_eq!(report.scored, 1);
        assert_eq!(report.pruned, 1);
        assert_eq!(s.score(), 1);
        assert!(s.obstacles().is_empty());
    }

    #[test]
    fn test_collision_short_circuits_later_obstacles() {
        let mut s = running();
        let mut rng = StdRng::seed_from_u64(0);
        // first obstacle sits on the crow, second is already passed but unscored
        let mut blocking = open_obstacle(60.0);
        blocking.top_height = 500.0;
        s.spawner.push(blocking);
        s.spawner.push(open_obstacle(-30.0));

        let report = s.step(&mut rng);

        assert_eq!(report.crash, Some(Crash::Obstacle { index: 0 }));
        assert_eq!(s.phase(), Phase::GameOver);
        assert_eq!(s.obstacles()[1].x, -30.0);
        assert!(!s.obstacles()[1].scored);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn test_earlier_obstacles_still_score_on_crash_frame() {
        let mut s = running();
        let mut rng = StdRng::seed_from_u64(0);
        s.spawner.push(open_obstacle(-30.0));
        let mut blocking = open_obstacle(60.0);
        blocking.top_height = 500.0;
        s.spawner.push(blocking);

        let report = s.step(&mut rng);

        assert_eq!(report.crash, Some(Crash::Obstacle { index: 1 }));
        assert_eq!(report.scored, 1);
        assert_eq!(s.score(), 1);
        assert_eq!(s.best(), 1);
    }

    #[test]
    fn test_restart_reinitializes() {
        let mut s = running();
        let mut rng = StdRng::seed_from_u64(0);
        s.spawner.push(open_obstacle(-8.5));
        s.flyer.y = 250.0;
        s.step(&mut rng);
        assert_eq!(s.score(), 1);
        s.flyer.y = 569.9;
        s.flyer.velocity = 3.0;
        s.step(&mut rng);
        assert_eq!(s.phase(), Phase::GameOver);

        assert_eq!(s.handle_input(Input::Restart), Response::Restarted);

        assert_eq!(s.phase(), Phase::Running);
        assert_eq!(s.score(), 0);
        assert_eq!(s.frame(), 0);
        assert_eq!(s.flyer().y, 300.0);
        assert_eq!(s.flyer().velocity, 0.0);
        assert_eq!(s.flyer().wing, WingPhase::Up);
        assert!(s.obstacles().is_empty());
        assert_eq!(s.best(), 1);
    }
}
