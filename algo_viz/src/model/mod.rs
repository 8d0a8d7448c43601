// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod array_model;
pub mod linked_list;
pub mod list_invariants;
pub mod list_kind;
pub mod list_snapshot;
pub mod node_id;

// Re-export.
pub use array_model::*;
pub use linked_list::*;
pub use list_kind::*;
pub use list_snapshot::*;
pub use node_id::*;
