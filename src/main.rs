//! Dredge entry point
//!
//! Loads configuration, builds the session and runs it headless under the
//! autopilot at the configured tick rate.

use std::time::{SystemTime, UNIX_EPOCH};

use dredge::GameConfig;
use dredge::platform::{self, Autopilot, FrameClock};
use dredge::renderer::FrameRecorder;
use dredge::sim::GameState;

fn main() {
    env_logger::init();
    log::info!("Dredge starting...");

    let config = match GameConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };
    let seed = config.seed.unwrap_or_else(seed_from_clock);
    log::info!("Session seed: {}", seed);

    let mut state = match GameState::new(&config, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to start session: {}", e);
            std::process::exit(1);
        }
    };

    match serde_json::to_string(state.wheel.obstacles()) {
        Ok(json) => log::debug!("Obstacles: {}", json),
        Err(e) => log::warn!("Failed to serialize obstacles: {}", e),
    }

    let mut renderer = FrameRecorder::new();
    let mut pacer = FrameClock::new(config.tick_rate_hz);
    let summary = platform::run(&mut state, &mut Autopilot, &mut renderer, &mut pacer, None);

    match serde_json::to_string(&summary) {
        Ok(json) => log::info!("Session over: {}", json),
        Err(_) => log::info!("Session over: {:?}", summary),
    }
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
