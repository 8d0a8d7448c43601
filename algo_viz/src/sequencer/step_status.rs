// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};
use strum_macros::Display as StrumDisplay;

/// Display status of one step in the steps panel.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, StrumDisplay,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    #[default]
    Pending,
    Current,
    Done,
}

/// `Idle -> Running -> {Paused <-> Running} -> Completed`, and back to `Idle` on reset.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, StrumDisplay,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    #[default]
    Idle,
    Running,
    Paused,
    Completed,
}

impl PlaybackState {
    /// A sequence is loaded and not yet completed.
    #[must_use]
    pub fn is_playing(self) -> bool { matches!(self, Self::Running | Self::Paused) }
}

/// Bumped on every start and reset. A timer tick carrying an older generation belongs to
/// a sequence that was replaced, and is dropped.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn next(self) -> Self { Self(self.0.wrapping_add(1)) }

    #[must_use]
    pub fn as_u64(self) -> u64 { self.0 }
}

impl Display for Generation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "gen:{}", self.0) }
}

/// Result of one [`crate::StepSequencer::timer_tick`] or
/// [`crate::StepSequencer::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick belongs to a sequence that was replaced or reset.
    Stale,
    /// Nothing is playing, the sequencer is idle or already completed.
    Idle,
    /// Playback is paused, the timer should poll again.
    Paused,
    /// The step at this index is now current.
    Advanced(usize),
    /// This call revealed past the last step and completed the sequence.
    Completed,
}

impl TickOutcome {
    /// The timer loop keeps running only while this is `true`.
    #[must_use]
    pub fn keeps_timer_alive(self) -> bool { matches!(self, Self::Advanced(_) | Self::Paused) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_generation_is_monotonic() {
        let generation = Generation::default();
        assert!(generation.next() > generation);
        assert_eq2!(generation.next().next().as_u64(), 2);
        assert_eq2!(generation.next().to_string(), "gen:1");
    }

    #[test]
    fn test_is_playing() {
        assert!(PlaybackState::Running.is_playing());
        assert!(PlaybackState::Paused.is_playing());
        assert!(!PlaybackState::Idle.is_playing());
        assert!(!PlaybackState::Completed.is_playing());
    }
}
