// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod animation_speed;
pub mod viz_config;

// Re-export.
pub use animation_speed::*;
pub use viz_config::*;
