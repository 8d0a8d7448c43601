// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Configure where the playback and runner logs go, and at which level. Build one with
/// any of the `From` impls below and merge them with `+`:
///
/// ```
/// use r3bl_algo_viz::{DisplayPreference, TracingConfig, WriterConfig};
///
/// let config: TracingConfig = tracing_core::LevelFilter::INFO.into();
/// let config = config + TracingConfig::from(DisplayPreference::Stderr);
/// assert_eq!(
///     config.writer_config,
///     WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "log.txt".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* log file path */),
    DisplayAndFile(DisplayPreference, String /* log file path */),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self {
        Self {
            level_filter: level.into(),
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(preferred_display: DisplayPreference) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::Display(preferred_display),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// The more verbose level wins, writer configs merge per [`WriterConfig`]'s `Add`.
impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// `rhs` has higher specificity, so whatever it sets clobbers `self`. A display and a
/// file from opposite sides combine into [`WriterConfig::DisplayAndFile`].
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            (None, rhs) => rhs,
            (lhs, None) => lhs,
            (Display(display), File(file)) | (File(file), Display(display)) => {
                DisplayAndFile(display, file)
            }
            (DisplayAndFile(_, file), Display(display)) => DisplayAndFile(display, file),
            (DisplayAndFile(display, _), File(file)) => DisplayAndFile(display, file),
            (_, rhs @ (Display(_) | File(_) | DisplayAndFile(..))) => rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn file(name: &str) -> WriterConfig { WriterConfig::File(name.to_string()) }

    fn stdout() -> WriterConfig { WriterConfig::Display(DisplayPreference::Stdout) }

    fn stderr() -> WriterConfig { WriterConfig::Display(DisplayPreference::Stderr) }

    fn both(display: DisplayPreference, name: &str) -> WriterConfig {
        WriterConfig::DisplayAndFile(display, name.to_string())
    }

    #[test_case(WriterConfig::None, stdout(), stdout(); "none lhs")]
    #[test_case(file("a"), WriterConfig::None, file("a"); "none rhs")]
    #[test_case(stdout(), file("a"), both(DisplayPreference::Stdout, "a"); "display plus file")]
    #[test_case(file("a"), stderr(), both(DisplayPreference::Stderr, "a"); "file plus display")]
    #[test_case(stdout(), stderr(), stderr(); "display collision")]
    #[test_case(file("a"), file("b"), file("b"); "file collision")]
    #[test_case(both(DisplayPreference::Stdout, "a"), stderr(), both(DisplayPreference::Stderr, "a"); "both then display")]
    #[test_case(both(DisplayPreference::Stdout, "a"), file("b"), both(DisplayPreference::Stdout, "b"); "both then file")]
    #[test_case(file("a"), both(DisplayPreference::Stderr, "b"), both(DisplayPreference::Stderr, "b"); "file then both")]
    fn test_add_writer_configs(lhs: WriterConfig, rhs: WriterConfig, expected: WriterConfig) {
        assert_eq2!(lhs + rhs, expected);
    }

    #[test]
    fn test_add_tracing_configs_keeps_most_verbose_level() {
        let lhs: TracingConfig = LevelFilter::WARN.into();
        let rhs: TracingConfig = DisplayPreference::Stdout.into();
        let merged = lhs + rhs;
        assert_eq2!(merged.level_filter, LevelFilter::DEBUG);
        assert_eq2!(merged.writer_config, both(DisplayPreference::Stdout, "log.txt"));
    }
}
