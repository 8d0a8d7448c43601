// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod sequencer_signal;
pub mod step_player;
pub mod step_sequencer;
pub mod step_status;

// Re-export.
pub use sequencer_signal::*;
pub use step_player::*;
pub use step_sequencer::*;
pub use step_status::*;
