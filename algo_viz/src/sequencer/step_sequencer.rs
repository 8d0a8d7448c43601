// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{Generation, PlaybackState, SequencerSignal, SequencerSignalSender, Step,
            StepEffect, StepSequence, StepStatus, StepStatusChange, StepTag, TickOutcome};

pub const IDLE_TITLE: &str = "Idle";

/// The steps panel as a synchronous state machine. It knows nothing about timers, the
/// [`crate::StepPlayer`] (or a test) decides when to call [`Self::timer_tick`] or
/// [`Self::advance`].
///
/// Steps are revealed strictly in order: everything before the current step is `Done`,
/// everything after it is `Pending`. Only [`Self::finish`] jumps ahead.
#[derive(Debug)]
pub struct StepSequencer {
    title: String,
    steps: StepSequence,
    statuses: Vec<StepStatus>,
    current_index: Option<usize>,
    state: PlaybackState,
    generation: Generation,
    maybe_signal_sender: Option<SequencerSignalSender>,
}

impl Default for StepSequencer {
    fn default() -> Self { Self::new() }
}

impl StepSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: IDLE_TITLE.to_string(),
            steps: StepSequence::new(),
            statuses: vec![],
            current_index: None,
            state: PlaybackState::Idle,
            generation: Generation::default(),
            maybe_signal_sender: None,
        }
    }

    #[must_use]
    pub fn with_signal_sender(mut self, sender: SequencerSignalSender) -> Self {
        self.maybe_signal_sender = Some(sender);
        self
    }

    pub fn set_signal_sender(&mut self, sender: Option<SequencerSignalSender>) {
        self.maybe_signal_sender = sender;
    }

    #[must_use]
    pub fn title(&self) -> &str { &self.title }

    #[must_use]
    pub fn state(&self) -> PlaybackState { self.state }

    #[must_use]
    pub fn generation(&self) -> Generation { self.generation }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> { self.current_index }

    #[must_use]
    pub fn steps(&self) -> &StepSequence { &self.steps }

    #[must_use]
    pub fn len(&self) -> usize { self.steps.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.steps.is_empty() }

    #[must_use]
    pub fn statuses(&self) -> &[StepStatus] { &self.statuses }

    #[must_use]
    pub fn status_of(&self, index: usize) -> Option<StepStatus> {
        self.statuses.get(index).copied()
    }

    /// Replace whatever was playing with `steps`, and reveal step 0 right away. Returns
    /// the generation that timer ticks for this sequence must carry.
    pub fn start(&mut self, title: impl Into<String>, steps: StepSequence) -> Generation {
        self.generation = self.generation.next();
        self.title = title.into();
        self.statuses = vec![StepStatus::Pending; steps.len()];
        self.steps = steps;
        self.current_index = None;

        tracing::debug!(
            message = "sequence started",
            generation = %self.generation,
            title = %self.title,
            len = self.steps.len()
        );
        self.emit(SequencerSignal::Started {
            generation: self.generation,
            title: self.title.clone(),
            len: self.steps.len(),
        });

        if self.steps.is_empty() {
            self.complete();
        } else {
            self.state = PlaybackState::Running;
            self.reveal(0);
        }

        self.generation
    }

    /// Move to the next step. Works while paused too, pause only gates the timer.
    pub fn advance(&mut self) -> TickOutcome {
        if !self.state.is_playing() {
            return TickOutcome::Idle;
        }

        let next = self.current_index.map_or(0, |it| it + 1);
        if next >= self.steps.len() {
            self.complete();
            return TickOutcome::Completed;
        }

        self.reveal(next);
        TickOutcome::Advanced(next)
    }

    /// Timer entry point. Ticks from a replaced sequence are suppressed.
    pub fn timer_tick(&mut self, generation: Generation) -> TickOutcome {
        if generation != self.generation {
            tracing::debug!(
                message = "stale tick suppressed",
                tick_generation = %generation,
                generation = %self.generation
            );
            return TickOutcome::Stale;
        }

        match self.state {
            PlaybackState::Idle | PlaybackState::Completed => TickOutcome::Idle,
            PlaybackState::Paused => TickOutcome::Paused,
            PlaybackState::Running => self.advance(),
        }
    }

    /// Returns `true` if this call paused playback.
    pub fn pause(&mut self) -> bool {
        if self.state != PlaybackState::Running {
            return false;
        }
        self.state = PlaybackState::Paused;
        true
    }

    /// Returns `true` if this call resumed playback.
    pub fn resume(&mut self) -> bool {
        if self.state != PlaybackState::Paused {
            return false;
        }
        self.state = PlaybackState::Running;
        true
    }

    /// Optionally append one terminal step, then mark every step `Done`.
    pub fn finish(&mut self, maybe_extra_step_text: Option<String>) {
        if self.state == PlaybackState::Idle
            && self.steps.is_empty()
            && maybe_extra_step_text.is_none()
        {
            return;
        }

        if let Some(text) = maybe_extra_step_text {
            self.steps.push(text, StepTag::Complete, StepEffect::None);
            self.statuses.push(StepStatus::Pending);
        }

        tracing::debug!(
            message = "sequence finished",
            generation = %self.generation,
            title = %self.title
        );
        self.complete();
    }

    /// Back to an empty `Idle` sequencer. Returns `false` if it already was one.
    pub fn reset(&mut self) -> bool {
        if self.state == PlaybackState::Idle && self.steps.is_empty() {
            return false;
        }

        self.generation = self.generation.next();
        self.title = IDLE_TITLE.to_string();
        self.steps = StepSequence::new();
        self.statuses.clear();
        self.current_index = None;
        self.state = PlaybackState::Idle;

        tracing::debug!(message = "sequencer reset", generation = %self.generation);
        self.emit(SequencerSignal::Reset);
        true
    }

    #[must_use]
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            title: self.title.clone(),
            state: self.state,
            current_index: self.current_index,
            generation: self.generation,
            entries: self
                .steps
                .iter()
                .zip(self.statuses.iter())
                .map(|(step, status)| StepEntry {
                    step: step.clone(),
                    status: *status,
                })
                .collect(),
        }
    }

    fn reveal(&mut self, index: usize) {
        for it in 0..self.statuses.len() {
            let status = match it.cmp(&index) {
                std::cmp::Ordering::Less => StepStatus::Done,
                std::cmp::Ordering::Equal => StepStatus::Current,
                std::cmp::Ordering::Greater => StepStatus::Pending,
            };
            self.set_status(it, status);
        }
        self.current_index = Some(index);
    }

    fn complete(&mut self) {
        for it in 0..self.statuses.len() {
            self.set_status(it, StepStatus::Done);
        }
        self.current_index = None;
        self.state = PlaybackState::Completed;
        self.emit(SequencerSignal::Completed {
            generation: self.generation,
        });
    }

    fn set_status(&mut self, index: usize, status: StepStatus) {
        let Some(slot) = self.statuses.get_mut(index) else {
            return;
        };
        if *slot == status {
            return;
        }
        *slot = status;
        self.emit(SequencerSignal::StepStatusChanged(StepStatusChange {
            generation: self.generation,
            index,
            status,
        }));
    }

    fn emit(&self, signal: SequencerSignal) {
        if let Some(sender) = self.maybe_signal_sender.as_ref() {
            // We don't care about the result of this operation.
            sender.send(signal).ok();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEntry {
    pub step: Step,
    pub status: StepStatus,
}

/// Point in time copy of the panel, safe to hand to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    pub title: String,
    pub state: PlaybackState,
    pub current_index: Option<usize>,
    pub generation: Generation,
    pub entries: Vec<StepEntry>,
}

impl PlaybackSnapshot {
    #[must_use]
    pub fn statuses(&self) -> Vec<StepStatus> { self.entries.iter().map(|it| it.status).collect() }

    #[must_use]
    pub fn current_step(&self) -> Option<&Step> {
        self.current_index
            .and_then(|it| self.entries.get(it))
            .map(|it| &it.step)
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc::unbounded_channel;

    use super::*;
    use crate::{StepStatus::{Current, Done, Pending},
                assert_eq2};

    fn three_steps() -> StepSequence {
        let mut steps = StepSequence::new();
        steps.note("one", StepTag::Info);
        steps.note("two", StepTag::Info);
        steps.note("three", StepTag::Complete);
        steps
    }

    #[test]
    fn test_start_reveals_first_step() {
        let mut sequencer = StepSequencer::new();
        let generation = sequencer.start("Insert After", three_steps());

        assert_eq2!(generation.as_u64(), 1);
        assert_eq2!(sequencer.state(), PlaybackState::Running);
        assert_eq2!(sequencer.current_index(), Some(0));
        assert_eq2!(sequencer.statuses(), &[Current, Pending, Pending]);
    }

    #[test]
    fn test_advance_through_to_completed() {
        let mut sequencer = StepSequencer::new();
        sequencer.start("op", three_steps());

        assert_eq2!(sequencer.advance(), TickOutcome::Advanced(1));
        assert_eq2!(sequencer.statuses(), &[Done, Current, Pending]);
        assert_eq2!(sequencer.advance(), TickOutcome::Advanced(2));
        assert_eq2!(sequencer.advance(), TickOutcome::Completed);
        assert_eq2!(sequencer.statuses(), &[Done, Done, Done]);
        assert_eq2!(sequencer.state(), PlaybackState::Completed);
        assert_eq2!(sequencer.current_index(), None);
        assert_eq2!(sequencer.advance(), TickOutcome::Idle);
    }

    #[test]
    fn test_empty_sequence_completes_immediately() {
        let mut sequencer = StepSequencer::new();
        sequencer.start("nothing", StepSequence::new());
        assert_eq2!(sequencer.state(), PlaybackState::Completed);
    }

    #[test]
    fn test_pause_gates_timer_not_advance() {
        let mut sequencer = StepSequencer::new();
        let generation = sequencer.start("op", three_steps());

        assert!(sequencer.pause());
        assert!(!sequencer.pause());
        assert_eq2!(sequencer.timer_tick(generation), TickOutcome::Paused);
        assert_eq2!(sequencer.current_index(), Some(0));

        assert_eq2!(sequencer.advance(), TickOutcome::Advanced(1));
        assert_eq2!(sequencer.state(), PlaybackState::Paused);

        assert!(sequencer.resume());
        assert_eq2!(sequencer.timer_tick(generation), TickOutcome::Advanced(2));
    }

    #[test]
    fn test_stale_tick_is_suppressed() {
        let mut sequencer = StepSequencer::new();
        let old = sequencer.start("first", three_steps());
        let new = sequencer.start("second", three_steps());

        assert_eq2!(sequencer.timer_tick(old), TickOutcome::Stale);
        assert_eq2!(sequencer.current_index(), Some(0));
        assert_eq2!(sequencer.title(), "second");
        assert_eq2!(sequencer.timer_tick(new), TickOutcome::Advanced(1));

        sequencer.reset();
        assert_eq2!(sequencer.timer_tick(new), TickOutcome::Stale);
    }

    #[test]
    fn test_finish_appends_and_marks_done() {
        let mut sequencer = StepSequencer::new();
        sequencer.start("op", three_steps());
        sequencer.finish(Some("Operation completed".to_string()));

        assert_eq2!(sequencer.len(), 4);
        assert_eq2!(sequencer.statuses(), &[Done, Done, Done, Done]);
        assert_eq2!(sequencer.state(), PlaybackState::Completed);
        assert_eq2!(
            sequencer.steps().last().map(|it| it.tag),
            Some(StepTag::Complete)
        );
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut sequencer = StepSequencer::new();
        sequencer.start("op", three_steps());

        assert!(sequencer.reset());
        let once = sequencer.snapshot();
        assert!(!sequencer.reset());
        assert_eq2!(sequencer.snapshot(), once);
        assert_eq2!(once.state, PlaybackState::Idle);
        assert_eq2!(once.title, IDLE_TITLE);
        assert!(once.entries.is_empty());
    }

    #[test]
    fn test_signals() {
        let (sender, mut receiver) = unbounded_channel();
        let mut sequencer = StepSequencer::new().with_signal_sender(sender);
        let generation = sequencer.start("op", three_steps());
        sequencer.advance();

        let change = |index, status| {
            SequencerSignal::StepStatusChanged(StepStatusChange {
                generation,
                index,
                status,
            })
        };

        let mut signals = vec![];
        while let Ok(it) = receiver.try_recv() {
            signals.push(it);
        }
        assert_eq2!(
            signals,
            vec![
                SequencerSignal::Started {
                    generation,
                    title: "op".to_string(),
                    len: 3,
                },
                change(0, Current),
                change(0, Done),
                change(1, Current),
            ]
        );
    }
}
