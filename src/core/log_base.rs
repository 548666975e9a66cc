//! Numeric base selection for integer rendering

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Radix applied to integer arguments on the current line.
///
/// Passing a `LogBase` as a log argument is not rendered as text; it switches
/// the base for the numeric arguments that follow it on the same line. The
/// base reverts to [`LogBase::Dec`] at the end of the call unless the
/// manager's persist-base option is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogBase {
    Bin = 2,
    Oct = 8,
    #[default]
    Dec = 10,
    Hex = 16,
}

impl LogBase {
    pub fn to_str(&self) -> &'static str {
        match self {
            LogBase::Bin => "BIN",
            LogBase::Oct => "OCT",
            LogBase::Dec => "DEC",
            LogBase::Hex => "HEX",
        }
    }

    /// The numeric radix value (2, 8, 10 or 16).
    #[must_use]
    pub fn radix(&self) -> u32 {
        *self as u32
    }
}

impl fmt::Display for LogBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogBase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BIN" => Ok(LogBase::Bin),
            "OCT" => Ok(LogBase::Oct),
            "DEC" => Ok(LogBase::Dec),
            "HEX" => Ok(LogBase::Hex),
            _ => Err(format!("Invalid log base: '{}'", s)),
        }
    }
}
