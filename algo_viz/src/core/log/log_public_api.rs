// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher::DefaultGuard;
use tracing_core::LevelFilter;

use crate::{TracingConfig, ok};

/// Global default subscriber, which once set, can't be unset or changed. This is what
/// the `algo-viz` binary uses.
///
/// Logging is **DISABLED** by **default**. Passing [`LevelFilter::OFF`] is a no-op, and
/// so is never calling this function. The [`tracing::debug!`] calls sprinkled in the
/// runner and sequencer then cost nothing.
///
/// # Errors
///
/// Returns an error if the log file can't be created or a global subscriber is already
/// installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return ok!();
    }

    it.install_global()
}

/// Thread local subscriber, removed when the returned guard drops. This is great for
/// tests, since each test can pick its own level and writer.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}
