// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod bubble_sort;
pub mod code_listing;
pub mod insertion_sort;
pub mod list_operation;
pub mod list_runner;
pub mod quick_sort;
pub mod sort_kind;
pub mod sort_replay;
pub mod sort_stats;
pub mod step;
pub mod step_effect;

// Re-export.
pub use bubble_sort::*;
pub use code_listing::*;
pub use insertion_sort::*;
pub use list_operation::*;
pub use list_runner::*;
pub use quick_sort::*;
pub use sort_kind::*;
pub use sort_replay::*;
pub use sort_stats::*;
pub use step::*;
pub use step_effect::*;
