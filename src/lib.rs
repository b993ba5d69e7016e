//! Kaagtali - a one-button crow flyer for the terminal.
//!
//! The simulation core (`clock`, `flyer`, `obstacle`, `collision`,
//! `spawner`, `session`) knows nothing about terminals or audio. The binary
//! drives it one frame at a time and hands each [`view::SceneView`] to the
//! [`render`] module.

pub mod audio;
pub mod clock;
pub mod collision;
pub mod config;
pub mod error;
pub mod flyer;
pub mod obstacle;
pub mod render;
pub mod session;
pub mod spawner;
pub mod view;

pub use config::Tuning;
pub use error::{AppError, AudioError, ConfigError};
pub use session::{Crash, GameSession, Input, Phase, TickReport};
pub use view::SceneView;
