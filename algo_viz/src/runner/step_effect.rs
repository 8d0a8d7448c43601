// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::NodeId;

/// Most effects touch one or two positions, so these stay on the stack.
pub type HighlightedIndices = SmallVec<[usize; 2]>;

/// The one model mutation or inspection a [`crate::Step`] stands for. Array effects can
/// be replayed by [`crate::SortReplay`], list effects tell a renderer which node or
/// arrow to highlight. Narrative only steps carry [`StepEffect::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum StepEffect {
    None,

    // Array effects.
    BeginPass { pass: usize },
    Compare { a: usize, b: usize },
    CompareKey { index: usize, key: i64 },
    ComparePivot { index: usize, pivot_index: usize },
    Swap { a: usize, b: usize },
    PickKey { index: usize, key: i64 },
    PickPivot { index: usize },
    Shift { from: usize, to: usize },
    Write { index: usize, value: i64 },
    EnterPartition { low: usize, high: usize, depth: usize },
    LeavePartition { depth: usize },
    /// Inclusive range of positions that reached their final place.
    MarkSorted { from: usize, to: usize },

    // List effects.
    HighlightNode { id: NodeId },
    AllocateNode { id: NodeId, value: i64 },
    SetNext { from: NodeId, to: Option<NodeId> },
    SetPrev { from: NodeId, to: Option<NodeId> },
    SetHead { id: Option<NodeId> },
    SetTail { id: Option<NodeId> },
    FreeNode { id: NodeId },
}

impl StepEffect {
    /// How many element reads and writes this effect costs.
    #[must_use]
    pub fn array_accesses(&self) -> u64 {
        match self {
            Self::Compare { .. } | Self::Swap { .. } | Self::Shift { .. } => 2,
            Self::CompareKey { .. }
            | Self::ComparePivot { .. }
            | Self::PickKey { .. }
            | Self::PickPivot { .. }
            | Self::Write { .. } => 1,
            _ => 0,
        }
    }

    #[must_use]
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Compare { .. } | Self::CompareKey { .. } | Self::ComparePivot { .. }
        )
    }

    /// Array positions a renderer should highlight for this step.
    #[must_use]
    pub fn highlighted_indices(&self) -> HighlightedIndices {
        match *self {
            Self::Compare { a, b } | Self::Swap { a, b } => smallvec![a, b],
            Self::ComparePivot { index, pivot_index } => smallvec![index, pivot_index],
            Self::Shift { from, to } => smallvec![from, to],
            Self::CompareKey { index, .. }
            | Self::PickKey { index, .. }
            | Self::PickPivot { index }
            | Self::Write { index, .. } => smallvec![index],
            Self::EnterPartition { low, high, .. } => (low..=high).collect(),
            _ => SmallVec::new(),
        }
    }
}
