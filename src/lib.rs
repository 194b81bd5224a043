//! Dredge - a two-ring wheel dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (obstacle generation, wheel, collisions, progress)
//! - `renderer`: Drawing boundary and a headless vertex recorder
//! - `platform`: Input sources, frame pacing and the session loop
//! - `settings`: Data-driven configuration
//! - `error`: Error types

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, DredgeError, GenerationError};
pub use settings::GameConfig;

use glam::Vec2;

/// Game configuration constants (defaults for `GameConfig`)
pub mod consts {
    /// Fixed simulation rate
    pub const TICK_RATE_HZ: u32 = 60;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Radial gap between the two ring centres
    pub const RING_SEPARATION: f32 = 25.0;

    /// Wheel geometry
    pub const WHEEL_SIZE: f32 = 250.0;
    pub const DIST_FROM_EDGE: f32 = 20.0;
    pub const BOX_RADIUS: f32 = 10.0;
    /// Line width of the guide circle between the rings
    pub const GUIDE_WIDTH: f32 = 2.0;

    /// Obstacle generation
    pub const OBSTACLE_COUNT: usize = 9;
    pub const OBSTACLE_SPACING: u32 = 35;
    /// Start-zone arc on ring 1 kept free of obstacles (degrees before 360)
    pub const SPACE_BEFORE_FIRST: u32 = 80;
    pub const OBSTACLE_SPEED: f32 = 1.0;
    pub const MIN_RING_RATIO: f32 = 0.3;
    pub const MAX_RING_RATIO: f32 = 0.7;

    /// Two full flawless wheel turns at one degree per tick
    pub const PROGRESS_TOTAL: u32 = 360 * 2;
    pub const PROGRESS_BAR_WIDTH: f32 = 30.0;
    /// Horizontal gap between the wheel edge and the progress bar
    pub const PROGRESS_BAR_GAP: f32 = 60.0;

    /// Multiplicative screen tint applied on a hit
    pub const PENALTY_STRENGTH: f32 = 0.5;

    /// How far ahead the autopilot checks for collisions
    pub const AUTOPILOT_LOOKAHEAD_TICKS: u32 = 4;
}

/// Rotate a vector about the origin by an angle in degrees
#[inline]
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}
