//! Platform layer
//!
//! Drives the simulation from the outside:
//! - Input sources (scripted, autopilot)
//! - Tick pacing
//! - The session loop

pub mod input;
pub mod time;

use serde::Serialize;

pub use input::{Autopilot, InputEvent, InputSource, ScriptedInput, collect_tick_input};
pub use time::{FrameClock, TickPacer, Unpaced};

use crate::renderer::Renderer;
use crate::sim::{EndReason, GameEvent, GamePhase, GameState, tick};

/// What happened in a session, logged when it ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub seed: u64,
    /// `None` when the tick limit stopped the session
    pub outcome: Option<EndReason>,
    pub ticks: u64,
    pub hits: u32,
    /// Highest progress reached before any reset
    pub best_progress: u32,
}

/// Run ticks until the session ends or `max_ticks` have elapsed
pub fn run<I, R, P>(
    state: &mut GameState,
    input: &mut I,
    renderer: &mut R,
    pacer: &mut P,
    max_ticks: Option<u64>,
) -> SessionSummary
where
    I: InputSource,
    R: Renderer,
    P: TickPacer,
{
    let mut best_progress = state.progress.progress();

    while !state.is_over() {
        if let Some(limit) = max_ticks
            && state.time_ticks >= limit
        {
            log::info!("Stopping after tick limit of {}", limit);
            break;
        }

        let events = input.poll();
        let tick_input = collect_tick_input(&events, input.idle_mode());
        tick(state, &tick_input, renderer);

        best_progress = best_progress.max(state.progress.progress());
        for event in state.drain_events() {
            match event {
                GameEvent::Hit { progress_lost } => {
                    best_progress = best_progress.max(progress_lost);
                    log::debug!("Hit! Lost {} progress", progress_lost);
                }
                GameEvent::Victory => log::info!("You win!"),
                GameEvent::Quit => log::info!("Session quit"),
            }
        }

        pacer.wait_for_next_tick();
    }

    SessionSummary {
        seed: state.seed,
        outcome: match state.phase {
            GamePhase::Ended(reason) => Some(reason),
            GamePhase::Playing => None,
        },
        ticks: state.time_ticks,
        hits: state.hits,
        best_progress,
    }
}
