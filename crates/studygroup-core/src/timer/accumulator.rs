//! Elapsed-time accumulator.
//!
//! Wall-clock based, like a stopwatch: the state only records when the
//! current run began and how much time earlier runs added up to. Nothing
//! ticks. Callers pass the current time in, so every command is a pure
//! function of `(state, now)`.
//!
//! ## State Transitions
//!
//! ```text
//! Stopped --start--> Running --stop--> Stopped
//!    ^                  |
//!    +------reset-------+
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::events::Event;

/// Study timer for one group.
///
/// Invariant: `running` implies `started_at_ms.is_some()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    running: bool,
    /// Epoch milliseconds when the current run began.
    #[serde(default)]
    started_at_ms: Option<u64>,
    /// Total of all finished runs.
    #[serde(default)]
    accumulated_ms: u64,
}

impl TimerState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_running(&self) -> bool {
        self.running && self.started_at_ms.is_some()
    }

    pub fn started_at_ms(&self) -> Option<u64> {
        self.started_at_ms
    }

    pub fn accumulated_ms(&self) -> u64 {
        self.accumulated_ms
    }

    /// Total elapsed time at `now_ms`. Never mutates.
    pub fn elapsed(&self, now_ms: u64) -> u64 {
        match (self.running, self.started_at_ms) {
            (true, Some(started)) => self.accumulated_ms + now_ms.saturating_sub(started),
            _ => self.accumulated_ms,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self, now_ms: u64) -> Option<Event> {
        if self.is_running() {
            return None;
        }
        self.running = true;
        self.started_at_ms = Some(now_ms);
        debug!(now_ms, accumulated_ms = self.accumulated_ms, "timer started");
        Some(Event::TimerStarted {
            started_at_ms: now_ms,
            accumulated_ms: self.accumulated_ms,
        })
    }

    pub fn stop(&mut self, now_ms: u64) -> Option<Event> {
        let started = match (self.running, self.started_at_ms) {
            (true, Some(started)) => started,
            _ => return None,
        };
        // A clock that moved backwards contributes nothing.
        let interval_ms = now_ms.saturating_sub(started);
        self.accumulated_ms += interval_ms;
        self.running = false;
        self.started_at_ms = None;
        debug!(interval_ms, accumulated_ms = self.accumulated_ms, "timer stopped");
        Some(Event::TimerStopped {
            stopped_at_ms: now_ms,
            interval_ms,
            accumulated_ms: self.accumulated_ms,
        })
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.running = false;
        self.started_at_ms = None;
        self.accumulated_ms = 0;
        debug!("timer reset");
        Some(Event::TimerReset)
    }
}
