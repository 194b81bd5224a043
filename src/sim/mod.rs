//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Fixed ticks only
//! - Seeded RNG only, and only at session start
//! - Drawing goes through the `Renderer` trait

pub mod collision;
pub mod generate;
pub mod patterns;
pub mod point_set;
pub mod state;
pub mod tick;
pub mod wheel;

pub use collision::{Aabb, first_collision};
pub use generate::{PlacementSource, RandomPlacement, clears_other_ring, generate_obstacles};
pub use point_set::PointSet;
pub use state::{
    EndReason, GameEvent, GamePhase, GameState, Obstacle, Player, ProgressTracker, Ring,
};
pub use tick::{TickInput, tick};
pub use wheel::Wheel;
