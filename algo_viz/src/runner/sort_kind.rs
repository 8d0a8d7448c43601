// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::{ArrayModel, BubbleSort, InsertionSort, QuickSort, SortStats, StepEffect,
            StepSequence, StepTag};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SortKind {
    Bubble,
    Insertion,
    Quick,
}

impl SortKind {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Insertion => "Insertion Sort",
            Self::Quick => "Quick Sort",
        }
    }

    #[must_use]
    pub fn algorithm(self) -> &'static dyn SortAlgorithm {
        match self {
            Self::Bubble => &BubbleSort,
            Self::Insertion => &InsertionSort,
            Self::Quick => &QuickSort,
        }
    }
}

/// One sort, written against [`SortTraceBuilder`]. The algorithm reads the array through
/// the builder and every compare, swap, shift or write it performs goes through
/// [`SortTraceBuilder::push`], which applies the effect and records the step and stats
/// in one go.
pub trait SortAlgorithm: Send + Sync {
    fn run(&self, builder: &mut SortTraceBuilder);
}

/// Everything one sort run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortTrace {
    pub kind: SortKind,
    pub input: Vec<i64>,
    pub steps: StepSequence,
    pub stats: SortStats,
    pub sorted: Vec<i64>,
}

#[derive(Debug)]
pub struct SortTraceBuilder {
    array: ArrayModel,
    stats: SortStats,
    steps: StepSequence,
}

impl SortTraceBuilder {
    #[must_use]
    pub fn new(input: &[i64]) -> Self {
        Self {
            array: ArrayModel::from(input),
            stats: SortStats::default(),
            steps: StepSequence::new(),
        }
    }

    #[must_use]
    pub fn array(&self) -> &ArrayModel { &self.array }

    #[must_use]
    pub fn len(&self) -> usize { self.array.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.array.is_empty() }

    #[must_use]
    pub fn get(&self, index: usize) -> i64 { self.array.get(index) }

    #[must_use]
    pub fn compare(&self, a: usize, b: usize) -> Ordering { self.array.compare(a, b) }

    #[must_use]
    pub fn compare_with(&self, index: usize, value: i64) -> Ordering {
        self.array.compare_with(index, value)
    }

    /// Apply `effect` to the array and the stats, and record the step.
    pub fn push(&mut self, text: impl Into<String>, tag: StepTag, effect: StepEffect) {
        apply_array_effect(&mut self.array, &effect);
        self.stats.record(&effect);
        self.steps.push(text, tag, effect);
    }

    pub fn note(&mut self, text: impl Into<String>, tag: StepTag) {
        self.push(text, tag, StepEffect::None);
    }

    #[must_use]
    pub fn finish(mut self, kind: SortKind, input: &[i64]) -> SortTrace {
        let effect = match self.array.len() {
            0 => StepEffect::None,
            len => StepEffect::MarkSorted {
                from: 0,
                to: len - 1,
            },
        };
        self.push("Sorting complete!", StepTag::Complete, effect);
        SortTrace {
            kind,
            input: input.to_vec(),
            steps: self.steps,
            stats: self.stats,
            sorted: self.array.to_vec(),
        }
    }
}

/// Mutate `array` the way `effect` says. Effects that only inspect leave it alone.
pub fn apply_array_effect(array: &mut ArrayModel, effect: &StepEffect) {
    match *effect {
        StepEffect::Swap { a, b } => array.swap(a, b),
        StepEffect::Shift { from, to } => array.set(to, array.get(from)),
        StepEffect::Write { index, value } => array.set(index, value),
        _ => {}
    }
}

/// Run `kind` over `input` and return the full trace. This is synchronous and
/// deterministic, the same input always yields the same steps.
#[must_use]
pub fn run_sort(kind: SortKind, input: &[i64]) -> SortTrace {
    tracing::debug!(message = "run_sort", kind = %kind, len = input.len());
    let mut builder = SortTraceBuilder::new(input);
    kind.algorithm().run(&mut builder);
    let trace = builder.finish(kind, input);
    tracing::debug!(
        message = "run_sort done",
        kind = %kind,
        steps = trace.steps.len(),
        stats = ?trace.stats
    );
    trace
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_empty_array_yields_single_terminal_step() {
        for kind in SortKind::iter() {
            let trace = run_sort(kind, &[]);
            assert_eq2!(trace.steps.len(), 1);
            assert_eq2!(trace.steps.last().unwrap().tag, StepTag::Complete);
            assert!(trace.sorted.is_empty());
            assert_eq2!(trace.stats, SortStats::default());
        }
    }

    #[test]
    fn test_every_kind_sorts() {
        let input = [64, 34, 25, 12, 22, 11, 90];
        for kind in SortKind::iter() {
            let trace = run_sort(kind, &input);
            assert_eq2!(trace.sorted, vec![11, 12, 22, 25, 34, 64, 90]);
            assert_eq2!(trace.input, input.to_vec());
        }
    }

    #[test]
    fn test_builder_compares_the_live_array() {
        let mut builder = SortTraceBuilder::new(&[4, 2, 4]);
        assert!(builder.compare(0, 1).is_gt());
        assert!(builder.compare_with(2, 4).is_eq());

        builder.push("swap", StepTag::Swap, StepEffect::Swap { a: 0, b: 1 });
        assert!(builder.compare(0, 1).is_lt());
        assert!(builder.compare_with(0, 4).is_lt());
    }

    #[test]
    fn test_duplicates_and_negatives_sort() {
        let input = [3, -1, 3, 0, -7, 3, -1];
        for kind in SortKind::iter() {
            assert_eq2!(run_sort(kind, &input).sorted, vec![-7, -1, -1, 0, 3, 3, 3]);
        }
    }

    #[test]
    fn test_runs_are_deterministic() {
        let input = [5, 1, 4, 1, 5, 9, 2, 6];
        for kind in SortKind::iter() {
            assert_eq2!(run_sort(kind, &input), run_sort(kind, &input));
        }
    }
}
