//! Fixed timestep simulation tick
//!
//! One tick: apply input, rotate the wheel, draw, count progress, check for a
//! win and for collisions, present.

use super::collision::first_collision;
use super::state::{EndReason, GameEvent, GamePhase, GameState, Ring};
use crate::consts::AUTOPILOT_LOOKAHEAD_TICKS;
use crate::renderer::Renderer;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Ring-toggle presses since the last tick
    pub ring_toggles: u32,
    /// Quit requested
    pub quit: bool,
    /// Idle/demo mode - the autopilot picks the ring
    pub idle_mode: bool,
}

/// Advance the game by one tick, drawing the frame through `renderer`
pub fn tick<R: Renderer>(state: &mut GameState, input: &TickInput, renderer: &mut R) {
    if state.is_over() {
        return;
    }

    if input.quit {
        log::info!("Quit after {} ticks", state.time_ticks);
        state.phase = GamePhase::Ended(EndReason::Quit);
        state.events.push(GameEvent::Quit);
        return;
    }

    for _ in 0..input.ring_toggles {
        state.player.toggle_ring();
    }
    if input.idle_mode && autopilot_wants_toggle(state) {
        state.player.toggle_ring();
    }

    state.time_ticks += 1;
    state.wheel.rotate();

    let obstacle_boxes = state.wheel.render(renderer, state.center);
    let player_box = state.player.render(renderer);

    let win = state.progress.increase();
    state.progress.render(renderer);

    if win {
        log::info!(
            "Victory after {} ticks and {} hits",
            state.time_ticks,
            state.hits
        );
        state.phase = GamePhase::Ended(EndReason::Won);
        state.events.push(GameEvent::Victory);
    }

    // Runs on the winning tick too
    if let Some(index) = first_collision(&player_box, &obstacle_boxes) {
        let progress_lost = state.progress.progress();
        log::debug!(
            "Hit obstacle {} on tick {}, lost {} progress",
            index,
            state.time_ticks,
            progress_lost
        );
        renderer.tint(state.penalty_tint);
        state.progress.reset();
        state.hits += 1;
        state.events.push(GameEvent::Hit { progress_lost });
    }

    renderer.present();
}

/// Switch rings when the current one is about to be hit and the other is clear
fn autopilot_wants_toggle(state: &GameState) -> bool {
    let current = state.player.ring;
    ring_in_danger(state, current) && !ring_in_danger(state, current.other())
}

/// Whether any obstacle will overlap the player's box on `ring` within the lookahead
fn ring_in_danger(state: &GameState, ring: Ring) -> bool {
    let player_box = state.player.rect_on(ring);
    (1..=AUTOPILOT_LOOKAHEAD_TICKS).any(|ahead| {
        state.wheel.obstacles().iter().any(|ob| {
            let angle = ob.angle + ob.speed * ahead as f32;
            state
                .wheel
                .shape_at(ob.ring, angle, state.center)
                .bounding_box()
                .is_some_and(|b| b.intersects(&player_box))
        })
    })
}
