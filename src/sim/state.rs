//! Game state and core simulation types

use std::num::NonZeroU32;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::generate::RandomPlacement;
use super::patterns::{PATTERNS, pattern_obstacles};
use super::wheel::Wheel;
use crate::error::{ConfigError, DredgeError};
use crate::renderer::{Color, Renderer, colors};
use crate::settings::GameConfig;

/// One of the two concentric tracks
///
/// `Outer` is ring 1, where the player starts, `dist_from_edge` inside the
/// wheel rim. `Inner` is ring 2, `ring_separation` closer to the centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ring {
    Outer,
    Inner,
}

impl Ring {
    pub fn other(self) -> Self {
        match self {
            Ring::Outer => Ring::Inner,
            Ring::Inner => Ring::Outer,
        }
    }

    /// Ring number as shown to players (1 = outer, 2 = inner)
    pub fn number(self) -> u8 {
        match self {
            Ring::Outer => 1,
            Ring::Inner => 2,
        }
    }
}

/// An obstacle riding the wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Current angle in degrees, grows without wrapping
    pub angle: f32,
    pub ring: Ring,
    /// Degrees per tick
    pub speed: f32,
}

impl Obstacle {
    pub fn new(angle: f32, ring: Ring, speed: f32) -> Self {
        Self { angle, ring, speed }
    }

    pub fn advance(&mut self) {
        self.angle += self.speed;
    }
}

/// The player's box, fixed above the wheel centre
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub ring: Ring,
    rect: Aabb,
    ring_separation: f32,
}

impl Player {
    /// Start on ring 1, directly above the wheel centre
    pub fn new(wheel: &Wheel, center: Vec2) -> Self {
        let box_center = Vec2::new(center.x, center.y - wheel.ring_radius(Ring::Outer));
        Self {
            ring: Ring::Outer,
            rect: Aabb::from_center_half_extent(box_center, wheel.box_radius()),
            ring_separation: wheel.ring_separation(),
        }
    }

    pub fn rect(&self) -> Aabb {
        self.rect
    }

    /// Box the player would occupy on `ring`
    pub fn rect_on(&self, ring: Ring) -> Aabb {
        if ring == self.ring {
            self.rect
        } else {
            self.rect.translate(Self::shift(ring, self.ring_separation))
        }
    }

    /// Switch rings, moving toward the centre when entering the inner ring
    pub fn toggle_ring(&mut self) {
        let next = self.ring.other();
        self.rect = self.rect.translate(Self::shift(next, self.ring_separation));
        self.ring = next;
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) -> Aabb {
        renderer.draw_rect(self.rect, colors::PLAYER)
    }

    /// Screen-space offset applied when entering `ring`
    fn shift(ring: Ring, ring_separation: f32) -> Vec2 {
        match ring {
            Ring::Inner => Vec2::new(0.0, ring_separation),
            Ring::Outer => Vec2::new(0.0, -ring_separation),
        }
    }
}

/// Flawless-tick counter drawn as a draining bar
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressTracker {
    progress: u32,
    total: NonZeroU32,
    bar: Aabb,
    /// Height of the unfilled part of the bar, refreshed on `increase`
    remaining_height: f32,
}

impl ProgressTracker {
    pub fn new(total: NonZeroU32, bar: Aabb) -> Self {
        Self {
            progress: 0,
            total,
            bar,
            remaining_height: bar.size().y,
        }
    }

    /// Count one flawless tick; `true` exactly when progress reaches the total
    pub fn increase(&mut self) -> bool {
        self.progress += 1;
        self.remaining_height = self.bar.size().y * (1.0 - self.fraction());
        self.progress == self.total.get()
    }

    /// Back to zero. The bar keeps its old height until the next `increase`.
    pub fn reset(&mut self) {
        self.progress = 0;
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn total(&self) -> u32 {
        self.total.get()
    }

    pub fn fraction(&self) -> f32 {
        self.progress as f32 / self.total.get() as f32
    }

    pub fn remaining_height(&self) -> f32 {
        self.remaining_height
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) {
        renderer.draw_rect(self.bar, colors::PROGRESS_FILL);
        let remaining = Aabb::from_min_size(
            self.bar.min,
            Vec2::new(self.bar.size().x, self.remaining_height.max(0.0)),
        );
        renderer.draw_rect(remaining, colors::PROGRESS_EMPTY);
    }
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    Won,
    Quit,
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    Ended(EndReason),
}

/// Notifications produced by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player touched an obstacle and lost this much progress
    Hit { progress_lost: u32 },
    Victory,
    Quit,
}

/// One play session: a wheel, a player and a progress bar
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the obstacles were generated from
    pub seed: u64,
    pub phase: GamePhase,
    pub time_ticks: u64,
    pub hits: u32,
    /// Screen centre; the wheel rotates around it
    pub center: Vec2,
    /// Screen tint applied on a hit
    pub penalty_tint: Color,
    pub wheel: Wheel,
    pub player: Player,
    pub progress: ProgressTracker,
    /// Events since the last `drain_events`
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Start a session, generating obstacles from `seed` unless the config
    /// selects a hand-authored pattern
    pub fn new(config: &GameConfig, seed: u64) -> Result<Self, DredgeError> {
        config.validate()?;

        let wheel = match config.pattern {
            Some(index) => {
                let obstacles = pattern_obstacles(index).ok_or(ConfigError::UnknownPattern {
                    index,
                    available: PATTERNS.len(),
                })?;
                Wheel::new(&config.wheel, config.screen.ring_separation, obstacles)
            }
            None => Wheel::generate(
                &config.wheel,
                config.screen.ring_separation,
                &config.generator,
                &mut RandomPlacement::from_seed(seed),
            )?,
        };

        Self::with_wheel(config, seed, wheel).map_err(DredgeError::from)
    }

    /// Start a session around an existing wheel
    pub fn with_wheel(config: &GameConfig, seed: u64, wheel: Wheel) -> Result<Self, ConfigError> {
        let center = config.screen.center();
        let progress = ProgressTracker::new(
            config.progress.total()?,
            config.progress.bar_rect(center, config.wheel.size),
        );

        Ok(Self {
            seed,
            phase: GamePhase::Playing,
            time_ticks: 0,
            hits: 0,
            center,
            penalty_tint: colors::penalty_tint(config.penalty_strength),
            player: Player::new(&wheel, center),
            wheel,
            progress,
            events: Vec::new(),
        })
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::Ended(_))
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;
    use crate::settings::WheelConfig;

    fn wheel() -> Wheel {
        Wheel::new(&WheelConfig::default(), 25.0, Vec::new())
    }

    fn tracker(total: u32) -> ProgressTracker {
        let bar = Aabb::from_min_size(Vec2::new(330.0, 110.0), Vec2::new(30.0, 500.0));
        ProgressTracker::new(NonZeroU32::new(total).unwrap(), bar)
    }

    #[test]
    fn test_player_starts_on_ring_one_above_center() {
        let player = Player::new(&wheel(), Vec2::new(640.0, 360.0));
        assert_eq!(player.ring, Ring::Outer);
        assert_eq!(player.rect().min, Vec2::new(630.0, 120.0));
        assert_eq!(player.rect().max, Vec2::new(650.0, 140.0));
    }

    #[test]
    fn test_player_toggle_moves_toward_center_and_back() {
        let mut player = Player::new(&wheel(), Vec2::new(640.0, 360.0));
        let start = player.rect();

        player.toggle_ring();
        assert_eq!(player.ring, Ring::Inner);
        assert_eq!(player.rect().min, start.min + Vec2::new(0.0, 25.0));
        assert_eq!(player.rect_on(Ring::Outer), start);

        player.toggle_ring();
        assert_eq!(player.ring, Ring::Outer);
        assert_eq!(player.rect(), start);
    }

    #[test]
    fn test_progress_wins_exactly_at_total() {
        let mut progress = tracker(720);
        for _ in 0..719 {
            assert!(!progress.increase());
        }
        assert!(progress.increase());
        assert_eq!(progress.progress(), 720);
        assert_eq!(progress.remaining_height(), 0.0);
    }

    #[test]
    fn test_progress_reset_restarts_count() {
        let mut progress = tracker(5);
        for _ in 0..4 {
            assert!(!progress.increase());
        }
        progress.reset();
        assert_eq!(progress.progress(), 0);
        for _ in 0..4 {
            assert!(!progress.increase());
        }
        assert!(progress.increase());
    }

    #[test]
    fn test_progress_past_total_is_not_a_win() {
        let mut progress = tracker(2);
        assert!(!progress.increase());
        assert!(progress.increase());
        assert!(!progress.increase());
    }

    #[test]
    fn test_reset_leaves_bar_height_until_next_increase() {
        let mut progress = tracker(10);
        for _ in 0..5 {
            progress.increase();
        }
        assert_eq!(progress.remaining_height(), 250.0);

        progress.reset();
        assert_eq!(progress.remaining_height(), 250.0);

        progress.increase();
        assert!((progress.remaining_height() - 450.0).abs() < 1e-3);
    }

    #[test]
    fn test_new_state_from_seed() {
        let config = GameConfig::default();
        let state = GameState::new(&config, 1234).unwrap();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.wheel.obstacles().len(), 9);
        assert_eq!(state.progress.total(), 720);
        assert_eq!(state.center, Vec2::new(640.0, 360.0));
    }

    #[test]
    fn test_new_state_wheel_matches_seeded_generation() {
        let config = GameConfig::default();
        let state = GameState::new(&config, 77).unwrap();
        let wheel = Wheel::generate(
            &config.wheel,
            config.screen.ring_separation,
            &config.generator,
            &mut RandomPlacement::from_seed(77),
        )
        .unwrap();
        assert_eq!(state.wheel, wheel);
    }

    #[test]
    fn test_exhausted_generation_stops_start_up() {
        let mut config = GameConfig::default();
        config.generator.spacing = 400;
        config.generator.attempt_cap = Some(500);
        assert!(matches!(
            GameState::new(&config, 3),
            Err(DredgeError::Generation(GenerationError::Exhausted { draws: 500, .. }))
        ));
    }

    #[test]
    fn test_new_state_from_pattern() {
        let config = GameConfig {
            pattern: Some(0),
            ..Default::default()
        };
        let state = GameState::new(&config, 0).unwrap();
        assert_eq!(state.wheel.obstacles().len(), 6);
        assert!(state.wheel.obstacles().iter().all(|o| o.speed == 2.0));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = GameConfig::default();
        config.progress.total = 0;
        assert!(matches!(
            GameState::new(&config, 0),
            Err(DredgeError::Config(ConfigError::ZeroProgressTotal))
        ));
    }
}
