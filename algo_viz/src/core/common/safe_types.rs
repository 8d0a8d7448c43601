// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{MutexGuard, PoisonError};

pub type StdMutex<T> = std::sync::Mutex<T>;

/// Lock the mutex, and recover the inner value if a previous holder panicked. The values
/// guarded in this crate (playback state) stay consistent between statements, so a
/// poisoned lock carries no half written state.
pub fn lock_safe<T>(mutex: &StdMutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
