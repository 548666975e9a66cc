//! Runtime configuration for the log manager

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// Default delimiter inserted between rendered arguments.
pub const DEFAULT_DELIMITER: &str = " ";

/// Tunable state of a [`LogManager`](crate::LogManager).
///
/// Every field can be changed at any time through the manager's setters; the
/// next emitted line picks the new values up.
///
/// # Example
///
/// ```
/// use debuglog::{LogConfig, LogLevel};
///
/// let config = LogConfig::new()
///     .with_console_level(LogLevel::Debug)
///     .with_delimiter(", ")
///     .with_header_fields(true, true, false);
///
/// assert_eq!(config.console_level, LogLevel::Debug);
/// assert_eq!(config.storage_level, LogLevel::Info);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Severity threshold for the console sink.
    pub console_level: LogLevel,
    /// Severity threshold for the persistent sink.
    pub storage_level: LogLevel,
    /// Text inserted between adjacent rendered arguments.
    pub delimiter: String,
    /// Include the source file name in line headers.
    pub include_file: bool,
    /// Include the source line number in line headers.
    pub include_line: bool,
    /// Include the calling function in line headers.
    pub include_func: bool,
    /// Keep the numeric base across calls instead of resetting to decimal.
    pub persist_base: bool,
    /// Flush the persistent sink after every completed line.
    pub auto_flush: bool,
}

impl LogConfig {
    /// Create a configuration with the default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            console_level: LogLevel::default(),
            storage_level: LogLevel::default(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            include_file: true,
            include_line: true,
            include_func: true,
            persist_base: false,
            auto_flush: false,
        }
    }

    /// Set the console severity threshold.
    #[must_use]
    pub fn with_console_level(mut self, level: LogLevel) -> Self {
        self.console_level = level;
        self
    }

    /// Set the persistent-sink severity threshold.
    #[must_use]
    pub fn with_storage_level(mut self, level: LogLevel) -> Self {
        self.storage_level = level;
        self
    }

    /// Set the argument delimiter.
    #[must_use]
    pub fn with_delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Choose which source-location fields appear in line headers.
    #[must_use]
    pub fn with_header_fields(mut self, file: bool, line: bool, func: bool) -> Self {
        self.include_file = file;
        self.include_line = line;
        self.include_func = func;
        self
    }

    /// Keep the numeric base across calls.
    #[must_use]
    pub fn with_persist_base(mut self, persist: bool) -> Self {
        self.persist_base = persist;
        self
    }

    /// Flush the persistent sink after every completed line.
    #[must_use]
    pub fn with_auto_flush(mut self, auto_flush: bool) -> Self {
        self.auto_flush = auto_flush;
        self
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}
