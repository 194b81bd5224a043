//! Error types
//!
//! The game loop itself cannot fail. Errors only arise while loading
//! configuration or when an attempt cap stops obstacle generation.

use std::path::PathBuf;

use thiserror::Error;

/// Obstacle generation gave up
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("obstacle generation gave up after {draws} candidate draws across {sets} obstacle sets")]
    Exhausted { draws: u64, sets: u64 },
}

/// Configuration could not be loaded or is inconsistent
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] serde_json::Error),

    #[error("progress total must be greater than zero")]
    ZeroProgressTotal,

    #[error("tick rate must be greater than zero")]
    InvalidTickRate,

    #[error("ring ratio bounds ({min}, {max}) must satisfy 0 <= min < max <= 1")]
    InvalidRatio { min: f32, max: f32 },

    #[error("obstacle count must be greater than zero")]
    NoObstacles,

    #[error("unknown obstacle pattern {index} ({available} available)")]
    UnknownPattern { index: usize, available: usize },
}

/// Anything that stops a session from starting
#[derive(Debug, Error)]
pub enum DredgeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}
