//! Difficulty curve: a pure function of time since the last reset.
//!
//! Every parameter starts at its base value, grows linearly and saturates.

use crate::entities::{DifficultySnapshot, TICKS_PER_SECOND};

const BASE_POLLUTION_CHANCE: f32 = 0.2;
const MAX_POLLUTION_CHANCE: f32 = 0.5;
/// Pollution chance gained per minute of play.
const POLLUTION_PER_MINUTE: f32 = 0.2;

const BASE_DROP_SPEED: f32 = 2.0;
const MAX_DROP_SPEED: f32 = 6.0;

const BASE_ACTIVE_DROPS: usize = 2;
const MAX_ACTIVE_DROPS: usize = 5;

/// Seconds of play for one extra unit of drop speed and one extra drop.
const RAMP_SECONDS: f32 = 30.0;

/// Difficulty at `elapsed_secs` after the last reset.  Negative input is
/// treated as zero.
pub fn snapshot(elapsed_secs: f32) -> DifficultySnapshot {
    let t = elapsed_secs.max(0.0);
    let pollution_chance =
        (BASE_POLLUTION_CHANCE + (t / 60.0) * POLLUTION_PER_MINUTE).min(MAX_POLLUTION_CHANCE);
    let drop_speed = (BASE_DROP_SPEED + t / RAMP_SECONDS).min(MAX_DROP_SPEED);
    let active_drop_count =
        (BASE_ACTIVE_DROPS + (t / RAMP_SECONDS).floor() as usize).min(MAX_ACTIVE_DROPS);

    DifficultySnapshot {
        pollution_chance,
        drop_speed,
        active_drop_count,
    }
}

/// Elapsed-time origin for the difficulty curve.
///
/// Counts whole ticks since the last reset; seconds are derived from the
/// count, so the 30 s and 60 s steps land on exact tick boundaries however
/// long the game runs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DifficultyClock {
    ticks: u64,
}

impl DifficultyClock {
    pub fn new() -> Self {
        DifficultyClock::default()
    }

    /// A clock that has already run for `ticks` ticks.
    pub fn from_ticks(ticks: u64) -> Self {
        DifficultyClock { ticks }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Seconds since the last reset.
    pub fn elapsed(&self) -> f32 {
        (self.ticks as f64 / TICKS_PER_SECOND as f64) as f32
    }

    /// One tick later.
    pub fn advance(self) -> Self {
        DifficultyClock {
            ticks: self.ticks.saturating_add(1),
        }
    }

    /// Move the origin to "now".
    pub fn reset(self) -> Self {
        DifficultyClock::new()
    }

    pub fn snapshot(&self) -> DifficultySnapshot {
        snapshot(self.elapsed())
    }
}
