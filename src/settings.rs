//! Game configuration
//!
//! Every section is `#[serde(default)]`, so a config file only needs the keys
//! it wants to override. Defaults live in [`crate::consts`].

use std::num::NonZeroU32;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::collision::Aabb;
use crate::sim::patterns::PATTERNS;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "DREDGE_CONFIG";

/// Screen geometry shared by every component that places things on screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: f32,
    pub height: f32,
    /// Radial gap between the two ring centres
    pub ring_separation: f32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            ring_separation: RING_SEPARATION,
        }
    }
}

impl ScreenConfig {
    /// Screen centre, rounded down to whole pixels
    pub fn center(&self) -> Vec2 {
        (Vec2::new(self.width, self.height) / 2.0).floor()
    }
}

/// Wheel geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Outer radius of the wheel disc
    pub size: f32,
    /// Distance from the wheel edge to the ring-1 box centre
    pub dist_from_edge: f32,
    /// Half the side length of an obstacle/player box
    pub box_radius: f32,
    pub guide_width: f32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            size: WHEEL_SIZE,
            dist_from_edge: DIST_FROM_EDGE,
            box_radius: BOX_RADIUS,
            guide_width: GUIDE_WIDTH,
        }
    }
}

/// Obstacle generator tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub count: usize,
    /// Minimum cross-ring gap in degrees
    pub spacing: u32,
    /// Degrees before 360 kept free on ring 1
    pub space_before_first: u32,
    /// Degrees per tick for generated obstacles
    pub speed: f32,
    pub min_ratio: f32,
    pub max_ratio: f32,
    /// Cap on candidate draws; `None` retries forever
    pub attempt_cap: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: OBSTACLE_COUNT,
            spacing: OBSTACLE_SPACING,
            space_before_first: SPACE_BEFORE_FIRST,
            speed: OBSTACLE_SPEED,
            min_ratio: MIN_RING_RATIO,
            max_ratio: MAX_RING_RATIO,
            attempt_cap: None,
        }
    }
}

impl GeneratorConfig {
    /// Largest angle ring 1 may start at
    pub fn start_zone_limit(&self) -> u32 {
        360u32.saturating_sub(self.space_before_first)
    }
}

/// Progress bar tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Flawless ticks needed to win
    pub total: u32,
    pub bar_width: f32,
    /// Gap between the wheel edge and the bar
    pub bar_gap: f32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            total: PROGRESS_TOTAL,
            bar_width: PROGRESS_BAR_WIDTH,
            bar_gap: PROGRESS_BAR_GAP,
        }
    }
}

impl ProgressConfig {
    pub fn total(&self) -> Result<NonZeroU32, ConfigError> {
        NonZeroU32::new(self.total).ok_or(ConfigError::ZeroProgressTotal)
    }

    /// Bar rectangle, left of the wheel and as tall as its diameter
    pub fn bar_rect(&self, center: Vec2, wheel_size: f32) -> Aabb {
        let min = Vec2::new(
            center.x - wheel_size - self.bar_gap,
            center.y - wheel_size,
        );
        Aabb::from_min_size(min, Vec2::new(self.bar_width, 2.0 * wheel_size))
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen: ScreenConfig,
    pub wheel: WheelConfig,
    pub generator: GeneratorConfig,
    pub progress: ProgressConfig,
    pub tick_rate_hz: u32,
    /// Fixed RNG seed; a clock-derived seed is used when absent
    pub seed: Option<u64>,
    /// Use a hand-authored obstacle pattern instead of generating one
    pub pattern: Option<usize>,
    /// Screen tint strength on a hit (0 = none, 1 = full red)
    pub penalty_strength: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen: ScreenConfig::default(),
            wheel: WheelConfig::default(),
            generator: GeneratorConfig::default(),
            progress: ProgressConfig::default(),
            tick_rate_hz: TICK_RATE_HZ,
            seed: None,
            pattern: None,
            penalty_strength: PENALTY_STRENGTH,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from the file named by `DREDGE_CONFIG`, or defaults when unset
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV_VAR);
        Self::load_from(path.as_deref().map(Path::new))
    }

    /// Load from `path` if given. A named file that can't be read, parsed or
    /// validated is an error, never a silent fallback.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            log::info!("Using default config");
            return Ok(Self::default());
        };

        let config = Self::from_path(path)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.progress.total()?;

        if self.tick_rate_hz == 0 {
            return Err(ConfigError::InvalidTickRate);
        }

        let (min, max) = (self.generator.min_ratio, self.generator.max_ratio);
        if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) || min >= max {
            return Err(ConfigError::InvalidRatio { min, max });
        }

        match self.pattern {
            Some(index) if index >= PATTERNS.len() => {
                return Err(ConfigError::UnknownPattern {
                    index,
                    available: PATTERNS.len(),
                });
            }
            // An empty set never satisfies the ring ratio
            None if self.generator.count == 0 => return Err(ConfigError::NoObstacles),
            _ => {}
        }

        Ok(())
    }
}
