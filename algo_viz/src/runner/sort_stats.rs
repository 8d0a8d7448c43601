// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::StepEffect;

/// Counters shown next to the bars. They start at zero for every run and only grow,
/// except `recursion_depth` which tracks the partition currently being worked on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStats {
    pub comparisons: u64,
    pub swaps: u64,
    pub shifts: u64,
    pub array_accesses: u64,
    pub current_pass: usize,
    pub recursion_depth: usize,
    pub max_recursion_depth: usize,
    pub current_key: Option<i64>,
}

impl SortStats {
    /// Fold one effect into the counters. The runner and [`crate::SortReplay`] both go
    /// through here, so they always agree.
    pub fn record(&mut self, effect: &StepEffect) {
        self.array_accesses += effect.array_accesses();
        if effect.is_comparison() {
            self.comparisons += 1;
        }

        match *effect {
            StepEffect::BeginPass { pass } => self.current_pass = pass,
            StepEffect::Swap { .. } => self.swaps += 1,
            StepEffect::Shift { .. } => self.shifts += 1,
            StepEffect::PickKey { key, .. } => self.current_key = Some(key),
            StepEffect::EnterPartition { depth, .. } => {
                self.recursion_depth = depth + 1;
                self.max_recursion_depth = self.max_recursion_depth.max(depth + 1);
            }
            StepEffect::LeavePartition { depth } => self.recursion_depth = depth,
            _ => {}
        }
    }
}
