// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

/// Opaque identity of a node in one [`crate::LinkedList`]. Ids come from a per list
/// [`NodeIdGenerator`] and are never handed out twice by the same list, even across
/// [`crate::LinkedList::clear()`]. A stale id held by a renderer therefore never resolves
/// to a node created later.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    #[must_use]
    pub fn as_u64(&self) -> u64 { self.0 }
}

impl From<u64> for NodeId {
    fn from(it: u64) -> Self { Self(it) }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "#{}", self.0) }
}

/// Monotonic source of [`NodeId`]s, starting at `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeIdGenerator {
    next: u64,
}

impl Default for NodeIdGenerator {
    fn default() -> Self { Self { next: 1 } }
}

impl NodeIdGenerator {
    pub fn next_id(&mut self) -> NodeId {
        let it = NodeId(self.next);
        self.next += 1;
        it
    }
}
