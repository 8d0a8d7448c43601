// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{sync::Arc, time::Duration};

use tokio::{sync::{broadcast, oneshot, watch},
            time::Instant};

use crate::{Generation, PlaybackSnapshot, PlaybackState, SequencerSignalSender, StdMutex,
            StepSequence, StepSequencer, TickOutcome, VizConfig, lock_safe};

pub type SafeStepSequencer = Arc<StdMutex<StepSequencer>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    /// A tokio task reveals one step every `step_interval`, and polls every
    /// `pause_poll_interval` while paused.
    Timed {
        step_interval: Duration,
        pause_poll_interval: Duration,
    },
    /// Nothing is spawned, the caller drives [`StepPlayer::advance`].
    Manual,
}

impl PlaybackMode {
    #[must_use]
    pub fn timed(step_interval: Duration, config: &VizConfig) -> Self {
        Self::Timed {
            step_interval,
            pause_poll_interval: config.pause_poll_interval(),
        }
    }

    /// Timed with the list step interval from `config`.
    #[must_use]
    pub fn timed_for_lists(config: &VizConfig) -> Self {
        Self::timed(config.list_step_interval(), config)
    }
}

/// Drives a [`StepSequencer`] from a timer. Every [`Self::play`], [`Self::finish`] and
/// [`Self::reset`] stops the task of the previous sequence through the shutdown
/// broadcast channel, and the generation check in [`StepSequencer::timer_tick`] drops
/// any tick of that task that still races in. [`Self::set_step_interval`] reaches the
/// running task through a watch channel, so a speed change re-arms the step being
/// waited on.
///
/// [`PlaybackMode::Timed`] needs a tokio runtime. Without one, [`Self::play`] logs a
/// warning and the sequence waits for [`Self::advance`].
///
/// ```
/// use r3bl_algo_viz::{PlaybackMode, PlaybackState, StepPlayer, StepSequence, StepTag};
///
/// let mut player = StepPlayer::new(PlaybackMode::Manual);
/// let mut steps = StepSequence::new();
/// steps.note("Identify selected node S", StepTag::Info);
/// steps.note("Insertion complete", StepTag::Complete);
///
/// player.play("Insert After", steps);
/// player.advance();
/// player.advance();
/// assert_eq!(player.state(), PlaybackState::Completed);
/// ```
#[allow(missing_debug_implementations)]
pub struct StepPlayer {
    safe_sequencer: SafeStepSequencer,
    mode: PlaybackMode,
    shutdown_sender: broadcast::Sender<()>,
    step_interval_sender: watch::Sender<Duration>,
    /// Signals when the timer task has completely shutdown. Use
    /// [`Self::await_shutdown()`].
    maybe_shutdown_complete_rx: Option<oneshot::Receiver<()>>,
}

impl StepPlayer {
    #[must_use]
    pub fn new(mode: PlaybackMode) -> Self {
        // Shutdown broadcast channel.
        let (shutdown_sender, _) = broadcast::channel::<()>(1);
        let initial_interval = match mode {
            PlaybackMode::Timed { step_interval, .. } => step_interval,
            PlaybackMode::Manual => Duration::ZERO,
        };
        let (step_interval_sender, _) = watch::channel(initial_interval);
        Self {
            safe_sequencer: Arc::new(StdMutex::new(StepSequencer::new())),
            mode,
            shutdown_sender,
            step_interval_sender,
            maybe_shutdown_complete_rx: None,
        }
    }

    #[must_use]
    pub fn manual() -> Self { Self::new(PlaybackMode::Manual) }

    #[must_use]
    pub fn with_signal_sender(self, sender: SequencerSignalSender) -> Self {
        lock_safe(&self.safe_sequencer).set_signal_sender(Some(sender));
        self
    }

    #[must_use]
    pub fn mode(&self) -> PlaybackMode { self.mode }

    /// Takes effect on the next [`Self::play`].
    pub fn set_mode(&mut self, mode: PlaybackMode) {
        self.mode = mode;
        if let PlaybackMode::Timed { step_interval, .. } = mode {
            self.step_interval_sender.send_replace(step_interval);
        }
    }

    /// Change the step interval of a timed player. A running timer applies it to the
    /// step it is waiting on, measured from the start of that wait. Manual players
    /// ignore this.
    pub fn set_step_interval(&mut self, interval: Duration) {
        if let PlaybackMode::Timed { step_interval, .. } = &mut self.mode {
            *step_interval = interval;
            self.step_interval_sender.send_replace(interval);
        }
    }

    #[must_use]
    pub fn sequencer(&self) -> SafeStepSequencer { self.safe_sequencer.clone() }

    #[must_use]
    pub fn state(&self) -> PlaybackState { lock_safe(&self.safe_sequencer).state() }

    #[must_use]
    pub fn generation(&self) -> Generation { lock_safe(&self.safe_sequencer).generation() }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        lock_safe(&self.safe_sequencer).current_index()
    }

    #[must_use]
    pub fn snapshot(&self) -> PlaybackSnapshot { lock_safe(&self.safe_sequencer).snapshot() }

    /// Start `steps`, replacing whatever was playing.
    pub fn play(&mut self, title: impl Into<String>, steps: StepSequence) -> Generation {
        self.request_shutdown();

        let (generation, state) = {
            let mut sequencer = lock_safe(&self.safe_sequencer);
            let generation = sequencer.start(title, steps);
            (generation, sequencer.state())
        };

        if let PlaybackMode::Timed {
            step_interval,
            pause_poll_interval,
        } = self.mode
            && state == PlaybackState::Running
        {
            self.try_start_task(generation, step_interval, pause_poll_interval);
        }

        generation
    }

    pub fn advance(&mut self) -> TickOutcome { lock_safe(&self.safe_sequencer).advance() }

    pub fn pause(&mut self) -> bool { lock_safe(&self.safe_sequencer).pause() }

    pub fn resume(&mut self) -> bool { lock_safe(&self.safe_sequencer).resume() }

    /// Returns the state after toggling.
    pub fn toggle_pause(&mut self) -> PlaybackState {
        let mut sequencer = lock_safe(&self.safe_sequencer);
        match sequencer.state() {
            PlaybackState::Running => {
                sequencer.pause();
            }
            PlaybackState::Paused => {
                sequencer.resume();
            }
            _ => {}
        }
        sequencer.state()
    }

    /// Stop the timer and mark every step done.
    pub fn finish(&mut self, maybe_extra_step_text: Option<String>) {
        self.request_shutdown();
        lock_safe(&self.safe_sequencer).finish(maybe_extra_step_text);
    }

    /// Stop the timer and clear the panel. Returns `false` if there was nothing to reset.
    pub fn reset(&mut self) -> bool {
        self.request_shutdown();
        lock_safe(&self.safe_sequencer).reset()
    }

    /// Run [`Self::advance`] until the sequence completes, without waiting on the timer.
    pub fn run_to_end(&mut self) {
        self.request_shutdown();
        let mut sequencer = lock_safe(&self.safe_sequencer);
        while sequencer.advance() != TickOutcome::Completed {
            if !sequencer.state().is_playing() {
                break;
            }
        }
    }

    /// Sends the shutdown signal to the timer task, and returns without waiting for it.
    pub fn request_shutdown(&mut self) {
        // We don't care about the result of this operation.
        self.shutdown_sender.send(()).ok();
    }

    /// Waits for the last spawned timer task to exit, either because the sequence
    /// completed or because [`Self::request_shutdown`] was called.
    pub async fn await_shutdown(&mut self) {
        if let Some(receiver) = self.maybe_shutdown_complete_rx.take() {
            // We don't care about the result of this operation.
            receiver.await.ok();
        }
    }

    fn try_start_task(
        &mut self,
        generation: Generation,
        step_interval: Duration,
        pause_poll_interval: Duration,
    ) {
        if tokio::runtime::Handle::try_current().is_err() {
            tracing::warn!(
                message = "no tokio runtime, timed playback falls back to manual advance",
                generation = %generation
            );
            return;
        }

        let mut shutdown_receiver = self.shutdown_sender.subscribe();
        let mut step_interval_receiver = self.step_interval_sender.subscribe();

        let (shutdown_complete_sender, shutdown_complete_receiver) =
            oneshot::channel::<()>();
        self.maybe_shutdown_complete_rx = Some(shutdown_complete_receiver);

        let safe_sequencer = self.safe_sequencer.clone();

        tokio::spawn(async move {
            let mut step_interval = step_interval;
            let mut wait_started = Instant::now();
            let mut deadline = wait_started + step_interval;
            let mut is_polling = false;

            loop {
                tokio::select! {
                    // Poll shutdown channel.
                    // This branch is cancel safe because recv is cancel safe.
                    _ = shutdown_receiver.recv() => {
                        tracing::debug!(message = "timer task shutdown", generation = %generation);
                        break;
                    }

                    // This branch is cancel safe because changed is cancel safe.
                    result = step_interval_receiver.changed() => {
                        if result.is_err() {
                            break;
                        }
                        step_interval = *step_interval_receiver.borrow_and_update();
                        if !is_polling {
                            deadline = wait_started + step_interval;
                        }
                        tracing::debug!(
                            message = "timer task step interval changed",
                            generation = %generation,
                            step_interval = ?step_interval
                        );
                    }

                    // This branch is cancel safe because sleep_until is cancel safe.
                    () = tokio::time::sleep_until(deadline) => {
                        let outcome = lock_safe(&safe_sequencer).timer_tick(generation);
                        is_polling = outcome == TickOutcome::Paused;
                        wait_started = Instant::now();
                        deadline = wait_started
                            + if is_polling { pause_poll_interval } else { step_interval };
                        if !outcome.keeps_timer_alive() {
                            tracing::debug!(
                                message = "timer task done",
                                generation = %generation,
                                outcome = ?outcome
                            );
                            break;
                        }
                    }
                }
            }

            // We don't care about the result of this operation.
            shutdown_complete_sender.send(()).ok();
        });
    }
}

impl Drop for StepPlayer {
    fn drop(&mut self) { self.request_shutdown(); }
}
