// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use rand::Rng;

use crate::{AnimationSpeed, CommonResult, HighlightedIndices, InputError, PlaybackSnapshot,
            PlaybackState, SortKind, SortReplay, SortStats, SortTrace, StepPlayer,
            VizConfig, replay, run_sort};

/// One sort visualizer. [`Self::sort`] computes the whole trace up front, then the player
/// reveals it step by step. The array, the stats and the highlights for the revealed
/// step are rebuilt from the trace with [`SortReplay`], so pausing or skipping never
/// leaves them out of sync with the steps panel.
#[allow(missing_debug_implementations)]
pub struct SortVisualizer {
    kind: SortKind,
    /// What [`Self::reset`] restores.
    original: Vec<i64>,
    player: StepPlayer,
    config: VizConfig,
    speed: AnimationSpeed,
    maybe_last_trace: Option<SortTrace>,
}

impl SortVisualizer {
    #[must_use]
    pub fn new(kind: SortKind, player: StepPlayer) -> Self {
        Self::with_config(kind, player, VizConfig::default())
    }

    #[must_use]
    pub fn with_config(kind: SortKind, mut player: StepPlayer, config: VizConfig) -> Self {
        let speed = config.sort_speed;
        player.set_step_interval(speed.delay());
        Self {
            kind,
            original: config.sort_seed.clone(),
            player,
            config,
            speed,
            maybe_last_trace: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> SortKind { self.kind }

    #[must_use]
    pub fn speed(&self) -> AnimationSpeed { self.speed }

    #[must_use]
    pub fn player(&self) -> &StepPlayer { &self.player }

    pub fn player_mut(&mut self) -> &mut StepPlayer { &mut self.player }

    #[must_use]
    pub fn playback(&self) -> PlaybackSnapshot { self.player.snapshot() }

    #[must_use]
    pub fn last_trace(&self) -> Option<&SortTrace> { self.maybe_last_trace.as_ref() }

    /// A sort is loaded and its steps are still being revealed.
    #[must_use]
    pub fn is_sorting(&self) -> bool {
        self.maybe_last_trace.is_some() && self.player.state().is_playing()
    }

    /// Replace the array. Ignored (returns `Ok(false)`) while a sort is in flight.
    ///
    /// # Errors
    ///
    /// - [`InputError::NoValidNumbers`] if `values` is empty.
    /// - [`InputError::TooManyElements`] if `values` is longer than the configured max.
    pub fn set_array(&mut self, values: Vec<i64>) -> CommonResult<bool> {
        if self.is_sorting() {
            tracing::debug!(message = "set_array ignored while sorting", kind = %self.kind);
            return Ok(false);
        }
        if values.is_empty() {
            return Err(InputError::NoValidNumbers {
                input: String::new(),
            }
            .into());
        }
        if values.len() > self.config.max_array_len {
            return Err(InputError::TooManyElements {
                count: values.len(),
                max: self.config.max_array_len,
            }
            .into());
        }

        self.load(values);
        Ok(true)
    }

    /// Load 8 to 12 random values in `1..=100` (the configured ranges). Ignored while a
    /// sort is in flight.
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.is_sorting() {
            return false;
        }
        let len = rng.random_range(self.config.random_len_range());
        let values = (0..len)
            .map(|_| rng.random_range(self.config.random_value_range()))
            .collect();
        self.load(values);
        true
    }

    pub fn randomize(&mut self) -> bool { self.randomize_with(&mut rand::rng()) }

    /// Run the sort over the array as it currently stands and start revealing its steps.
    /// After a completed run that is the sorted output, otherwise the loaded array.
    /// Ignored while a sort is in flight.
    pub fn sort(&mut self) -> bool {
        if self.is_sorting() {
            tracing::debug!(message = "sort ignored, already sorting", kind = %self.kind);
            return false;
        }
        let input = match &self.maybe_last_trace {
            Some(trace) if self.player.state() == PlaybackState::Completed => {
                trace.sorted.clone()
            }
            _ => self.original.clone(),
        };
        let trace = run_sort(self.kind, &input);
        self.player
            .play(self.kind.title(), trace.steps.clone());
        self.maybe_last_trace = Some(trace);
        true
    }

    pub fn pause(&mut self) -> bool { self.player.pause() }

    pub fn resume(&mut self) -> bool { self.player.resume() }

    pub fn toggle_pause(&mut self) -> PlaybackState { self.player.toggle_pause() }

    /// Reveal every remaining step at once.
    pub fn skip_to_end(&mut self) {
        if self.maybe_last_trace.is_some() {
            self.player.finish(None);
        }
    }

    /// Stop playback and put the original array back.
    pub fn reset(&mut self) {
        self.player.reset();
        self.maybe_last_trace = None;
    }

    /// Applies right away, a sort in flight keeps going at the new pace.
    pub fn set_speed(&mut self, speed: AnimationSpeed) {
        self.speed = speed;
        self.player.set_step_interval(speed.delay());
    }

    /// Totals of the last run, or zeros when nothing ran since the last reset.
    #[must_use]
    pub fn stats(&self) -> SortStats {
        self.maybe_last_trace
            .as_ref()
            .map(|it| it.stats)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn array_at_current_step(&self) -> Vec<i64> { self.replay_current().array().to_vec() }

    #[must_use]
    pub fn stats_at_current_step(&self) -> SortStats { self.replay_current().stats() }

    #[must_use]
    pub fn sorted_mask_at_current_step(&self) -> Vec<bool> {
        self.replay_current().sorted_mask().to_vec()
    }

    #[must_use]
    pub fn highlighted_at_current_step(&self) -> HighlightedIndices {
        let Some(trace) = &self.maybe_last_trace else {
            return HighlightedIndices::new();
        };
        self.player
            .current_index()
            .and_then(|it| trace.steps.get(it))
            .map(|it| it.effect.highlighted_indices())
            .unwrap_or_default()
    }

    fn load(&mut self, values: Vec<i64>) {
        self.player.reset();
        self.original = values;
        self.maybe_last_trace = None;
    }

    fn replay_current(&self) -> SortReplay {
        let Some(trace) = &self.maybe_last_trace else {
            return SortReplay::new(&self.original);
        };
        let steps = trace.steps.as_slice();
        let upto = match self.player.state() {
            PlaybackState::Completed => steps.len().checked_sub(1),
            _ => self.player.current_index(),
        };
        replay(&trace.input, steps, upto)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{PlaybackMode, TickOutcome, assert_eq2};

    fn viz(kind: SortKind) -> SortVisualizer { SortVisualizer::new(kind, StepPlayer::manual()) }

    #[test]
    fn test_starts_with_default_array() {
        let viz = viz(SortKind::Bubble);
        assert_eq2!(viz.array_at_current_step(), vec![64, 34, 25, 12, 22, 11, 90]);
        assert_eq2!(viz.stats(), SortStats::default());
        assert!(!viz.is_sorting());
    }

    #[test]
    fn test_set_array_bounds() {
        let mut viz = viz(SortKind::Insertion);
        assert!(viz.set_array(vec![]).is_err());
        assert!(viz.set_array((0..21).collect()).is_err());
        assert!(viz.set_array(vec![3, 1, 2]).unwrap());
        assert_eq2!(viz.array_at_current_step(), vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_is_single_flight() {
        let mut viz = viz(SortKind::Bubble);
        viz.set_array(vec![5, 3, 4, 1]).unwrap();
        assert!(viz.sort());
        assert!(viz.is_sorting());
        assert!(!viz.sort());
        assert!(!viz.set_array(vec![1]).unwrap());
        assert!(!viz.randomize());
    }

    #[test]
    fn test_current_step_follows_playback() {
        let mut viz = viz(SortKind::Bubble);
        viz.set_array(vec![5, 3, 4, 1]).unwrap();
        viz.sort();

        // Pass header, then compare.
        viz.player_mut().advance();
        assert_eq2!(viz.highlighted_at_current_step().as_slice(), &[0, 1]);
        assert_eq2!(viz.stats_at_current_step().comparisons, 1);

        // Swap.
        viz.player_mut().advance();
        assert_eq2!(viz.array_at_current_step(), vec![3, 5, 4, 1]);

        viz.skip_to_end();
        assert!(!viz.is_sorting());
        assert_eq2!(viz.array_at_current_step(), vec![1, 3, 4, 5]);
        assert_eq2!(viz.stats_at_current_step(), viz.stats());
        assert!(viz.sorted_mask_at_current_step().iter().all(|it| *it));
    }

    #[test]
    fn test_reset_restores_original() {
        let mut viz = viz(SortKind::Quick);
        viz.set_array(vec![9, 7, 8]).unwrap();
        viz.sort();
        viz.skip_to_end();
        assert_eq2!(viz.array_at_current_step(), vec![7, 8, 9]);

        viz.reset();
        assert_eq2!(viz.array_at_current_step(), vec![9, 7, 8]);
        assert_eq2!(viz.stats(), SortStats::default());
        assert_eq2!(viz.playback().state, PlaybackState::Idle);
    }

    #[test]
    fn test_sort_again_starts_from_sorted_array() {
        let mut viz = viz(SortKind::Bubble);
        viz.set_array(vec![5, 3, 4, 1]).unwrap();
        viz.sort();
        viz.skip_to_end();
        assert_eq2!(viz.stats().swaps, 5);

        assert!(viz.sort());
        assert_eq2!(viz.array_at_current_step(), vec![1, 3, 4, 5]);
        assert_eq2!(viz.last_trace().unwrap().input, vec![1, 3, 4, 5]);
        viz.skip_to_end();
        assert_eq2!(viz.stats().swaps, 0);

        viz.reset();
        assert_eq2!(viz.array_at_current_step(), vec![5, 3, 4, 1]);
        assert!(viz.sort());
        assert_eq2!(viz.last_trace().unwrap().input, vec![5, 3, 4, 1]);
    }

    #[test]
    fn test_randomize_ranges() {
        let mut viz = viz(SortKind::Insertion);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert!(viz.randomize_with(&mut rng));
            let array = viz.array_at_current_step();
            assert!((8..=12).contains(&array.len()));
            assert!(array.iter().all(|it| (1..=100).contains(it)));
        }
    }

    #[test]
    fn test_pause_and_toggle() {
        let mut viz = viz(SortKind::Insertion);
        viz.sort();
        assert!(viz.pause());
        assert_eq2!(viz.toggle_pause(), PlaybackState::Running);
        assert_eq2!(viz.toggle_pause(), PlaybackState::Paused);
        assert!(viz.resume());
        assert_eq2!(viz.player_mut().advance(), TickOutcome::Advanced(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_speed_change_applies_mid_sort() {
        let config = VizConfig {
            sort_speed: AnimationSpeed::try_new(1).unwrap(),
            ..VizConfig::default()
        };
        let player = StepPlayer::new(PlaybackMode::timed(config.sort_speed.delay(), &config));
        let mut viz = SortVisualizer::with_config(SortKind::Bubble, player, config);
        viz.set_array(vec![2, 1]).unwrap();
        viz.sort();
        assert_eq2!(viz.player().current_index(), Some(0));

        viz.set_speed(AnimationSpeed::try_new(10).unwrap());
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        assert_eq2!(viz.playback().state, PlaybackState::Completed);
        assert_eq2!(viz.array_at_current_step(), vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timed_sort_uses_speed() {
        let player = StepPlayer::new(PlaybackMode::Timed {
            step_interval: std::time::Duration::from_secs(60),
            pause_poll_interval: std::time::Duration::from_millis(100),
        });
        let mut viz = SortVisualizer::new(SortKind::Bubble, player);
        viz.set_speed(AnimationSpeed::try_new(10).unwrap());
        viz.set_array(vec![2, 1]).unwrap();
        viz.sort();

        let len = viz.last_trace().unwrap().steps.len();
        tokio::time::sleep(viz.speed().delay() * u32::try_from(len + 1).unwrap()).await;
        assert_eq2!(viz.playback().state, PlaybackState::Completed);
        assert_eq2!(viz.array_at_current_step(), vec![1, 2]);
    }
}
