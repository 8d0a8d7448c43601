// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};
use strum_macros::{Display as StrumDisplay, EnumIter};

use crate::StepEffect;

/// Category of a [`Step`], used by renderers to pick a color or icon.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, StrumDisplay, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StepTag {
    Info,
    Phase,
    Compare,
    Swap,
    Shift,
    Insert,
    Relink,
    Partition,
    Recurse,
    Sorted,
    Complete,
}

/// One immutable line of narration. Only its display status changes during playback,
/// and that lives in [`crate::StepSequencer`], not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub index: usize,
    pub text: String,
    pub tag: StepTag,
    pub effect: StepEffect,
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{:>3}. [{}] {}", self.index + 1, self.tag, self.text)
    }
}

/// Ordered steps produced by one operation. Indices are assigned on [`Self::push`], so
/// they are always `0..len` with no gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepSequence {
    steps: Vec<Step>,
}

impl StepSequence {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Append a step and return its index.
    pub fn push(
        &mut self,
        text: impl Into<String>,
        tag: StepTag,
        effect: StepEffect,
    ) -> usize {
        let index = self.steps.len();
        self.steps.push(Step {
            index,
            text: text.into(),
            tag,
            effect,
        });
        index
    }

    /// Append a narrative only step.
    pub fn note(&mut self, text: impl Into<String>, tag: StepTag) -> usize {
        self.push(text, tag, StepEffect::None)
    }

    #[must_use]
    pub fn len(&self) -> usize { self.steps.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.steps.is_empty() }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Step> { self.steps.get(index) }

    #[must_use]
    pub fn last(&self) -> Option<&Step> { self.steps.last() }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> { self.steps.iter() }

    #[must_use]
    pub fn as_slice(&self) -> &[Step] { &self.steps }

    #[must_use]
    pub fn texts(&self) -> Vec<&str> { self.steps.iter().map(|it| it.text.as_str()).collect() }

    #[must_use]
    pub fn tags(&self) -> Vec<StepTag> { self.steps.iter().map(|it| it.tag).collect() }

    #[must_use]
    pub fn count_tag(&self, tag: StepTag) -> usize {
        self.steps.iter().filter(|it| it.tag == tag).count()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Step> { self.steps }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter { self.steps.iter() }
}
