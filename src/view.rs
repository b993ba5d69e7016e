//! Read-only snapshot of a session, handed to presentation each frame.

use crate::flyer::WingPhase;
use crate::obstacle::Obstacle;
use crate::session::{GameSession, Phase};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyerPose {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Radians, positive = nose down.
    pub tilt: f64,
    pub wing: WingPhase,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleGeometry {
    pub x: f64,
    pub width: f64,
    pub top_height: f64,
    pub bottom_y: f64,
    pub bottom_height: f64,
}

impl From<&Obstacle> for ObstacleGeometry {
    fn from(o: &Obstacle) -> Self {
        Self {
            x: o.x,
            width: o.width,
            top_height: o.top_height,
            bottom_y: o.bottom_y,
            bottom_height: o.bottom_height,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneView {
    pub world_width: f64,
    pub world_height: f64,
    pub flyer: FlyerPose,
    /// In spawn order.
    pub obstacles: Vec<ObstacleGeometry>,
    pub score: u32,
    pub best: u32,
    pub phase: Phase,
}

impl SceneView {
    pub fn capture(session: &GameSession) -> Self {
        let f = session.flyer();
        let tuning = session.tuning();
        Self {
            world_width: tuning.world_width,
            world_height: tuning.world_height,
            flyer: FlyerPose {
                x: f.x,
                y: f.y,
                width: f.width,
                height: f.height,
                tilt: f.tilt(),
                wing: f.wing,
            },
            obstacles: session.obstacles().iter().map(ObstacleGeometry::from).collect(),
            score: session.score(),
            best: session.best(),
            phase: session.phase(),
        }
    }
}
