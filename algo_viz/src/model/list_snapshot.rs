// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{LinkedList, ListKind, NodeId};

/// Everything a renderer needs to draw one node box and its arrows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub id: NodeId,
    pub value: i64,
    pub next: Option<NodeId>,
    pub prev: Option<NodeId>,
    pub is_head: bool,
    pub is_tail: bool,
}

/// Read only copy of a [`LinkedList`], with nodes in traversal order from the head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSnapshot {
    pub kind: ListKind,
    pub size: usize,
    pub head: Option<NodeId>,
    pub tail: Option<NodeId>,
    pub nodes: Vec<NodeDescriptor>,
}

impl ListSnapshot {
    #[must_use]
    pub fn values(&self) -> Vec<i64> { self.nodes.iter().map(|it| it.value).collect() }
}

impl LinkedList {
    #[must_use]
    pub fn snapshot(&self) -> ListSnapshot {
        let head = self.head();
        let tail = self.tail();
        ListSnapshot {
            kind: self.kind(),
            size: self.len(),
            head,
            tail,
            nodes: self
                .iter()
                .map(|node| NodeDescriptor {
                    id: node.id,
                    value: node.value,
                    next: node.next,
                    prev: node.prev,
                    is_head: Some(node.id) == head,
                    is_tail: Some(node.id) == tail,
                })
                .collect(),
        }
    }
}

impl From<&LinkedList> for ListSnapshot {
    fn from(list: &LinkedList) -> Self { list.snapshot() }
}
