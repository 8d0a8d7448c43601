// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{NodeId, StepSequence};

/// One user level request against a [`crate::LinkedList`]. Targets are node ids, the
/// render adapter resolves clicks (or values typed on the command line) into ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ListOperation {
    Initialize { values: Vec<i64> },
    Select { target: NodeId },
    InsertAtHead { value: i64 },
    InsertAtTail { value: i64 },
    InsertAfter { target: NodeId, value: i64 },
    InsertBefore { target: NodeId, value: i64 },
    Delete { target: NodeId },
    Reverse,
}

impl ListOperation {
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Initialize { .. } => "Initialize",
            Self::Select { .. } => "Select Node",
            Self::InsertAtHead { .. } => "Insert at Head",
            Self::InsertAtTail { .. } => "Insert at Tail",
            Self::InsertAfter { .. } => "Insert After",
            Self::InsertBefore { .. } => "Insert Before",
            Self::Delete { .. } => "Delete Node",
            Self::Reverse => "Reverse List",
        }
    }

    /// The node this operation is aimed at, if any.
    #[must_use]
    pub fn target(&self) -> Option<NodeId> {
        match *self {
            Self::Select { target }
            | Self::InsertAfter { target, .. }
            | Self::InsertBefore { target, .. }
            | Self::Delete { target } => Some(target),
            _ => None,
        }
    }
}

/// What actually happened to the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOperationOutcome {
    /// `false` when the operation turned into a no-op.
    pub applied: bool,
    pub new_node: Option<NodeId>,
    pub removed: Option<NodeId>,
}

impl ListOperationOutcome {
    #[must_use]
    pub fn no_op() -> Self { Self::default() }

    #[must_use]
    pub fn applied() -> Self {
        Self {
            applied: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn inserted(id: NodeId) -> Self {
        Self {
            applied: true,
            new_node: Some(id),
            removed: None,
        }
    }

    #[must_use]
    pub fn removed(id: NodeId) -> Self {
        Self {
            applied: true,
            new_node: None,
            removed: Some(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOperationReport {
    pub title: String,
    pub steps: StepSequence,
    pub outcome: ListOperationOutcome,
    /// Pseudo-code lines for the code panel.
    pub code_listing: Vec<String>,
}

impl ListOperationReport {
    #[must_use]
    pub fn applied(&self) -> bool { self.outcome.applied }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_target_and_title() {
        let op = ListOperation::InsertAfter {
            target: NodeId::from(2),
            value: 99,
        };
        assert_eq2!(op.target(), Some(NodeId::from(2)));
        assert_eq2!(op.title(), "Insert After");
        assert_eq2!(ListOperation::Reverse.target(), None);
    }

    #[test]
    fn test_serializes_with_op_tag() {
        let json = serde_json::to_value(ListOperation::InsertAtHead { value: 5 }).unwrap();
        assert_eq2!(json["op"], "insert_at_head");
        assert_eq2!(json["value"], 5);
    }
}
