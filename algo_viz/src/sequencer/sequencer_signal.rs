// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{Generation, StepStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepStatusChange {
    pub generation: Generation,
    pub index: usize,
    pub status: StepStatus,
}

/// Everything a render adapter needs to mirror the steps panel. These are sent over an
/// unbounded channel, so the sequencer never waits on the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum SequencerSignal {
    Started {
        generation: Generation,
        title: String,
        len: usize,
    },
    StepStatusChanged(StepStatusChange),
    Completed {
        generation: Generation,
    },
    Reset,
}

impl SequencerSignal {
    #[must_use]
    pub fn generation(&self) -> Option<Generation> {
        match self {
            Self::Started { generation, .. } | Self::Completed { generation } => {
                Some(*generation)
            }
            Self::StepStatusChanged(change) => Some(change.generation),
            Self::Reset => None,
        }
    }
}

pub type SequencerSignalSender = tokio::sync::mpsc::UnboundedSender<SequencerSignal>;
pub type SequencerSignalReceiver = tokio::sync::mpsc::UnboundedReceiver<SequencerSignal>;
