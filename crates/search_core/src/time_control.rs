//! Turn clocks and the per-move time budget.
//!
//! The search never owns the game clock. It polls a [`TurnClock`] before
//! expanding each node and stops once [`budget_exceeded`] reports that the
//! current turn has used its share of the remaining time.

use std::time::{Duration, Instant};

/// Read-only view of the clock for the current turn.
///
/// Both readings must be monotonic for the duration of one search call.
pub trait TurnClock {
    /// Milliseconds spent on the current turn so far.
    fn elapsed_millis(&self) -> u64;

    /// Milliseconds left on the player's clock.
    fn remaining_millis(&self) -> u64;
}

/// Returns true once the turn has used more than `1 / time_divisor` of the
/// remaining clock time.
#[inline]
pub fn budget_exceeded<C: TurnClock + ?Sized>(clock: &C, time_divisor: u64) -> bool {
    clock.elapsed_millis() > clock.remaining_millis() / time_divisor.max(1)
}

/// Wall-clock timer for one turn.
///
/// Created when the turn starts with the time left on the player's clock;
/// the remaining time counts down as the turn runs.
#[derive(Debug, Clone)]
pub struct TurnTimer {
    /// Start time of the turn
    start: Instant,
    /// Clock time available when the turn started
    clock_at_start: Duration,
}

impl TurnTimer {
    /// Start a timer for a turn with `remaining` time on the player's clock.
    pub fn start(remaining: Duration) -> Self {
        Self {
            start: Instant::now(),
            clock_at_start: remaining,
        }
    }

    /// Get elapsed time since the turn started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Get the time left on the player's clock.
    pub fn remaining(&self) -> Duration {
        self.clock_at_start.saturating_sub(self.elapsed())
    }
}

impl TurnClock for TurnTimer {
    fn elapsed_millis(&self) -> u64 {
        duration_millis(self.elapsed())
    }

    fn remaining_millis(&self) -> u64 {
        duration_millis(self.remaining())
    }
}

/// A clock that never runs out. Useful for analysis and fixed-depth searches.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unlimited;

impl TurnClock for Unlimited {
    fn elapsed_millis(&self) -> u64 {
        0
    }

    fn remaining_millis(&self) -> u64 {
        u64::MAX
    }
}

fn duration_millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
