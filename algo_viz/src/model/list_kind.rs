// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The four list visualizations share one [`crate::LinkedList`] and one runner. The
/// variant only decides two things: whether `prev` links are maintained, and whether the
/// tail wraps around to the head.
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
pub enum ListKind {
    Singly,
    Doubly,
    CircularSingly,
    CircularDoubly,
}

impl ListKind {
    #[must_use]
    pub fn is_doubly(self) -> bool { matches!(self, Self::Doubly | Self::CircularDoubly) }

    #[must_use]
    pub fn is_circular(self) -> bool {
        matches!(self, Self::CircularSingly | Self::CircularDoubly)
    }

    #[must_use]
    pub fn supports_insert_before(self) -> bool { self.is_doubly() }

    #[must_use]
    pub fn supports_reverse(self) -> bool { matches!(self, Self::Singly) }

    /// Human readable name used in step titles.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Singly => "Singly Linked List",
            Self::Doubly => "Doubly Linked List",
            Self::CircularSingly => "Circular Singly Linked List",
            Self::CircularDoubly => "Circular Doubly Linked List",
        }
    }
}
