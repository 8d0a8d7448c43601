// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{ops::RangeInclusive, time::Duration};

use miette::IntoDiagnostic;
use serde::{Deserialize, Serialize};

use crate::{AnimationSpeed, CommonResult};

pub mod viz_config_defaults {
    pub const LIST_STEP_INTERVAL_MS: u64 = 950;
    pub const PAUSE_POLL_INTERVAL_MS: u64 = 100;
    pub const NODE_VALUE_MIN: i64 = 0;
    pub const NODE_VALUE_MAX: i64 = 99;
    pub const MAX_ARRAY_LEN: usize = 20;
    pub const RANDOM_LEN_MIN: usize = 8;
    pub const RANDOM_LEN_MAX: usize = 12;
    pub const RANDOM_VALUE_MIN: i64 = 1;
    pub const RANDOM_VALUE_MAX: i64 = 100;
    pub const LIST_SEED: [i64; 4] = [10, 20, 30, 50];
    pub const SORT_SEED: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];
}

/// Tunables shared by the list and sort visualizers. Every field has a default, so a
/// JSON document only needs to name the fields it overrides:
///
/// ```
/// use r3bl_algo_viz::VizConfig;
///
/// let config = VizConfig::try_from_json_str(r#"{ "list_step_interval_ms": 10 }"#).unwrap();
/// assert_eq!(config.list_step_interval().as_millis(), 10);
/// assert_eq!(config.max_array_len, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub list_step_interval_ms: u64,
    pub pause_poll_interval_ms: u64,
    pub sort_speed: AnimationSpeed,
    pub node_value_min: i64,
    pub node_value_max: i64,
    pub max_array_len: usize,
    pub random_len_min: usize,
    pub random_len_max: usize,
    pub random_value_min: i64,
    pub random_value_max: i64,
    pub list_seed: Vec<i64>,
    pub sort_seed: Vec<i64>,
}

impl Default for VizConfig {
    fn default() -> Self {
        use viz_config_defaults::{LIST_SEED, LIST_STEP_INTERVAL_MS, MAX_ARRAY_LEN,
                                  NODE_VALUE_MAX, NODE_VALUE_MIN,
                                  PAUSE_POLL_INTERVAL_MS, RANDOM_LEN_MAX,
                                  RANDOM_LEN_MIN, RANDOM_VALUE_MAX,
                                  RANDOM_VALUE_MIN, SORT_SEED};
        Self {
            list_step_interval_ms: LIST_STEP_INTERVAL_MS,
            pause_poll_interval_ms: PAUSE_POLL_INTERVAL_MS,
            sort_speed: AnimationSpeed::default(),
            node_value_min: NODE_VALUE_MIN,
            node_value_max: NODE_VALUE_MAX,
            max_array_len: MAX_ARRAY_LEN,
            random_len_min: RANDOM_LEN_MIN,
            random_len_max: RANDOM_LEN_MAX,
            random_value_min: RANDOM_VALUE_MIN,
            random_value_max: RANDOM_VALUE_MAX,
            list_seed: LIST_SEED.to_vec(),
            sort_seed: SORT_SEED.to_vec(),
        }
    }
}

impl VizConfig {
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a field has the wrong type.
    pub fn try_from_json_str(json: &str) -> CommonResult<Self> {
        serde_json::from_str(json).into_diagnostic()
    }

    #[must_use]
    pub fn list_step_interval(&self) -> Duration {
        Duration::from_millis(self.list_step_interval_ms)
    }

    #[must_use]
    pub fn pause_poll_interval(&self) -> Duration {
        Duration::from_millis(self.pause_poll_interval_ms)
    }

    #[must_use]
    pub fn node_value_range(&self) -> RangeInclusive<i64> {
        self.node_value_min..=self.node_value_max
    }

    #[must_use]
    pub fn random_len_range(&self) -> RangeInclusive<usize> {
        self.random_len_min..=self.random_len_max
    }

    #[must_use]
    pub fn random_value_range(&self) -> RangeInclusive<i64> {
        self.random_value_min..=self.random_value_max
    }
}
