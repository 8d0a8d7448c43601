// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod list_visualizer;
pub mod sort_visualizer;

// Re-export.
pub use list_visualizer::*;
pub use sort_visualizer::*;
