//! Input sources
//!
//! A source yields the raw events of one tick; [`collect_tick_input`] folds
//! them into the simulation's [`TickInput`].

use std::collections::BTreeMap;

use crate::sim::TickInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    ToggleRing,
}

pub trait InputSource {
    /// Events that arrived since the previous poll
    fn poll(&mut self) -> Vec<InputEvent>;

    /// Let the autopilot steer
    fn idle_mode(&self) -> bool {
        false
    }
}

pub fn collect_tick_input(events: &[InputEvent], idle_mode: bool) -> TickInput {
    let mut input = TickInput {
        idle_mode,
        ..Default::default()
    };
    for event in events {
        match event {
            InputEvent::Quit => input.quit = true,
            InputEvent::ToggleRing => input.ring_toggles += 1,
        }
    }
    input
}

/// Replays events at fixed poll counts, for tests and demos
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: BTreeMap<u64, Vec<InputEvent>>,
    polls: u64,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` on poll number `poll` (0-based)
    pub fn at(mut self, poll: u64, event: InputEvent) -> Self {
        self.script.entry(poll).or_default().push(event);
        self
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        let events = self.script.remove(&self.polls).unwrap_or_default();
        self.polls += 1;
        events
    }
}

/// No player input; the autopilot picks rings
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl InputSource for Autopilot {
    fn poll(&mut self) -> Vec<InputEvent> {
        Vec::new()
    }

    fn idle_mode(&self) -> bool {
        true
    }
}
