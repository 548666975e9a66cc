//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record, compared against per-sink thresholds.
///
/// Lower ordinal means higher urgency, except [`LogLevel::None`], which is
/// not a severity at all: a record logged at `None` is never delivered, and a
/// threshold of `None` silences its sink entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    None = 0,
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::None => "NONE",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    /// Whether a record at this level is delivered to a sink filtered by
    /// `threshold`.
    ///
    /// `None` on either side always suppresses; otherwise a record passes
    /// when it is at least as urgent as the threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use debuglog::LogLevel;
    ///
    /// assert!(LogLevel::Error.enabled_for(LogLevel::Warn));
    /// assert!(LogLevel::Warn.enabled_for(LogLevel::Warn));
    /// assert!(!LogLevel::Info.enabled_for(LogLevel::Warn));
    /// assert!(!LogLevel::Error.enabled_for(LogLevel::None));
    /// assert!(!LogLevel::None.enabled_for(LogLevel::Trace));
    /// ```
    #[must_use]
    pub fn enabled_for(self, threshold: LogLevel) -> bool {
        self != LogLevel::None && threshold != LogLevel::None && self <= threshold
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NONE" => Ok(LogLevel::None),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" | "VERBOSE" => Ok(LogLevel::Trace),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [LogLevel; 6] = [
        LogLevel::None,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    #[test]
    fn test_ordering_follows_urgency() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Trace);
        assert!(LogLevel::None < LogLevel::Error);
    }

    #[test]
    fn test_enabled_for_matrix() {
        // Delivered iff neither side is None and the record is at least as
        // urgent as the threshold.
        for message in ALL {
            for threshold in ALL {
                let expected = message != LogLevel::None
                    && threshold != LogLevel::None
                    && (message as u8) <= (threshold as u8);
                assert_eq!(
                    message.enabled_for(threshold),
                    expected,
                    "message={message} threshold={threshold}"
                );
            }
        }
    }

    #[test]
    fn test_warn_threshold_example() {
        assert!(LogLevel::Error.enabled_for(LogLevel::Warn));
        assert!(LogLevel::Warn.enabled_for(LogLevel::Warn));
        assert!(!LogLevel::Info.enabled_for(LogLevel::Warn));
        assert!(!LogLevel::Debug.enabled_for(LogLevel::Warn));
        assert!(!LogLevel::Trace.enabled_for(LogLevel::Warn));
    }

    #[test]
    fn test_from_str_accepts_aliases() {
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("VERBOSE".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert_eq!("error".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for level in ALL {
            let parsed: LogLevel = level.to_string().parse().unwrap();
            assert_eq!(parsed, level);
        }
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }
}
