//! Frame pacing

use std::time::{Duration, Instant};

pub trait TickPacer {
    /// Block until the next tick is due
    fn wait_for_next_tick(&mut self);
}

/// Sleeps so the loop runs at most `rate_hz` ticks per second
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    next_deadline: Option<Instant>,
}

impl FrameClock {
    /// `rate_hz` is clamped to at least 1
    pub fn new(rate_hz: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / rate_hz.max(1),
            next_deadline: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl TickPacer for FrameClock {
    fn wait_for_next_tick(&mut self) {
        let now = Instant::now();
        let deadline = match self.next_deadline {
            Some(deadline) if deadline > now => {
                std::thread::sleep(deadline - now);
                deadline
            }
            // First tick, or running behind: don't try to catch up
            _ => now,
        };
        self.next_deadline = Some(deadline + self.period);
    }
}

/// Never waits
#[derive(Debug, Clone, Copy, Default)]
pub struct Unpaced;

impl TickPacer for Unpaced {
    fn wait_for_next_tick(&mut self) {}
}
