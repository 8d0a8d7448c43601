// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          time::Duration};

use serde::{Deserialize, Serialize};

use crate::InputError;

/// Delay in milliseconds between reveals, indexed by `level - 1`.
const SPEED_DELAYS_MS: [u64; 10] = [1500, 1200, 900, 700, 500, 350, 200, 100, 50, 20];

const SPEED_LABELS: [&str; 10] = [
    "Very Slow",
    "Slow",
    "Slow",
    "Normal",
    "Medium",
    "Medium",
    "Fast",
    "Fast",
    "Very Fast",
    "Ultra Fast",
];

/// Speed slider of the sort visualizers. Level `1` is the slowest, `10` is the fastest.
/// The level is always in range, so [`Self::delay`] and [`Self::label`] never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AnimationSpeed {
    level: u8,
}

impl AnimationSpeed {
    pub const MIN_LEVEL: u8 = 1;
    pub const MAX_LEVEL: u8 = 10;
    pub const DEFAULT_LEVEL: u8 = 5;

    /// # Errors
    ///
    /// Returns [`InputError::ValueOutOfRange`] if `level` is not in `1..=10`.
    pub fn try_new(level: u8) -> std::result::Result<Self, InputError> {
        if (Self::MIN_LEVEL..=Self::MAX_LEVEL).contains(&level) {
            Ok(Self { level })
        } else {
            Err(InputError::ValueOutOfRange {
                value: i64::from(level),
                min: i64::from(Self::MIN_LEVEL),
                max: i64::from(Self::MAX_LEVEL),
            })
        }
    }

    #[must_use]
    pub fn level(&self) -> u8 { self.level }

    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(SPEED_DELAYS_MS[usize::from(self.level - 1)])
    }

    #[must_use]
    pub fn label(&self) -> &'static str { SPEED_LABELS[usize::from(self.level - 1)] }
}

impl Default for AnimationSpeed {
    fn default() -> Self {
        Self {
            level: Self::DEFAULT_LEVEL,
        }
    }
}

impl TryFrom<u8> for AnimationSpeed {
    type Error = InputError;

    fn try_from(level: u8) -> std::result::Result<Self, Self::Error> { Self::try_new(level) }
}

impl From<AnimationSpeed> for u8 {
    fn from(speed: AnimationSpeed) -> Self { speed.level }
}

impl Display for AnimationSpeed {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({}ms)", self.label(), self.delay().as_millis())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(1, 1500, "Very Slow")]
    #[test_case(4, 700, "Normal")]
    #[test_case(5, 500, "Medium")]
    #[test_case(8, 100, "Fast")]
    #[test_case(10, 20, "Ultra Fast")]
    fn test_speed_presets(level: u8, millis: u64, label: &str) {
        let speed = AnimationSpeed::try_new(level).unwrap();
        assert_eq!(speed.delay(), Duration::from_millis(millis));
        assert_eq!(speed.label(), label);
    }

    #[test_case(0)]
    #[test_case(11)]
    fn test_out_of_range_level(level: u8) {
        assert!(AnimationSpeed::try_new(level).is_err());
    }

    #[test]
    fn test_default_is_medium() {
        let speed = AnimationSpeed::default();
        assert_eq!(speed.level(), 5);
        assert_eq!(speed.to_string(), "Medium (500ms)");
    }

    #[test]
    fn test_serde_rejects_bad_level() {
        let speed: AnimationSpeed = serde_json::from_str("9").unwrap();
        assert_eq!(speed.delay(), Duration::from_millis(50));
        assert!(serde_json::from_str::<AnimationSpeed>("42").is_err());
    }
}
