// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ArrayModel, SortStats, Step, StepEffect, apply_array_effect};

/// Rebuilds the array, the stats and the sorted marks at any point of a sort trace by
/// folding step effects over a copy of the input. Renderers use it to draw the bars for
/// the step that is currently revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortReplay {
    array: ArrayModel,
    stats: SortStats,
    sorted: Vec<bool>,
    applied: usize,
}

impl SortReplay {
    #[must_use]
    pub fn new(input: &[i64]) -> Self {
        Self {
            array: ArrayModel::from(input),
            stats: SortStats::default(),
            sorted: vec![false; input.len()],
            applied: 0,
        }
    }

    pub fn apply(&mut self, step: &Step) {
        let effect = step.effect;
        apply_array_effect(&mut self.array, &effect);
        self.stats.record(&effect);
        if let StepEffect::MarkSorted { from, to } = effect {
            for it in self.sorted.iter_mut().take(to + 1).skip(from) {
                *it = true;
            }
        }
        self.applied += 1;
    }

    /// Apply `steps[self.applied..=index]`. Indices past the end are clamped, and
    /// asking for a step that was already applied does nothing.
    pub fn apply_through(&mut self, steps: &[Step], index: usize) {
        let end = (index + 1).min(steps.len());
        if self.applied >= end {
            return;
        }
        for step in &steps[self.applied..end] {
            self.apply(step);
        }
    }

    #[must_use]
    pub fn array(&self) -> &ArrayModel { &self.array }

    #[must_use]
    pub fn stats(&self) -> SortStats { self.stats }

    /// One flag per position, `true` once the position reached its final value.
    #[must_use]
    pub fn sorted_mask(&self) -> &[bool] { &self.sorted }

    /// How many steps have been folded in so far.
    #[must_use]
    pub fn applied(&self) -> usize { self.applied }
}

/// State after `steps[..=upto]`, or the untouched input when `upto` is `None`.
#[must_use]
pub fn replay(input: &[i64], steps: &[Step], upto: Option<usize>) -> SortReplay {
    let mut it = SortReplay::new(input);
    if let Some(upto) = upto {
        it.apply_through(steps, upto);
    }
    it
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{SortKind, assert_eq2, run_sort};

    #[test]
    fn test_full_replay_matches_runner() {
        let input = [64, 34, 25, 12, 22, 11, 90];
        for kind in SortKind::iter() {
            let trace = run_sort(kind, &input);
            let last = trace.steps.len() - 1;
            let replayed = replay(&input, trace.steps.as_slice(), Some(last));

            assert_eq2!(replayed.array().to_vec(), trace.sorted);
            assert_eq2!(replayed.stats(), trace.stats);
            assert!(replayed.sorted_mask().iter().all(|it| *it));
        }
    }

    #[test]
    fn test_partial_replay() {
        let input = [5, 3, 4, 1];
        let trace = run_sort(SortKind::Bubble, &input);
        let steps = trace.steps.as_slice();

        // Pass header, compare, swap.
        let replayed = replay(&input, steps, Some(2));
        assert_eq2!(replayed.array().as_slice(), &[3, 5, 4, 1]);
        assert_eq2!(replayed.stats().swaps, 1);
        assert_eq2!(replayed.stats().comparisons, 1);
        assert!(!replayed.sorted_mask().iter().any(|it| *it));

        assert_eq2!(replay(&input, steps, None).array().as_slice(), &input);
    }

    #[test]
    fn test_apply_through_is_incremental() {
        let input = [3, 1, 2];
        let trace = run_sort(SortKind::Insertion, &input);
        let steps = trace.steps.as_slice();

        let mut incremental = SortReplay::new(&input);
        for index in 0..steps.len() {
            incremental.apply_through(steps, index);
            assert_eq2!(incremental, replay(&input, steps, Some(index)));
        }
        incremental.apply_through(steps, 2);
        assert_eq2!(incremental.applied(), steps.len());
        incremental.apply_through(steps, 999);
        assert_eq2!(incremental.applied(), steps.len());
    }
}
