//! Error types for Kaagtali

use thiserror::Error;

/// A [`Tuning`](crate::Tuning) that would produce broken geometry or physics.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("world must have positive size, got {width}x{height}")]
    EmptyWorld { width: f64, height: f64 },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("lift impulse must point upward (negative), got {0}")]
    LiftNotUpward(f64),

    #[error("{0} period must be at least one frame")]
    ZeroPeriod(&'static str),

    #[error("flyer box ({x}, {width}x{height}) does not fit inside the world")]
    FlyerOutOfWorld { x: f64, width: f64, height: f64 },

    #[error(
        "gap of {gap} with minimum segment {min_segment} leaves no room in a world {world_height} high"
    )]
    GapTooLarge {
        gap: f64,
        min_segment: f64,
        world_height: f64,
    },
}

/// Audio output could not be opened.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output: {0}")]
    Stream(#[from] rodio::StreamError),
}

/// Anything that ends the binary early.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid tuning: {0}")]
    Config(#[from] ConfigError),

    #[error("could not set up logging: {0}")]
    Logging(String),

    #[error("--fps must be at least 1")]
    ZeroFps,
}
