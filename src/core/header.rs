//! Line header generation
//!
//! Produces the `[LEVEL] file L.42 func : ` prefix emitted before the
//! rendered arguments. The header is built once per delivered record and
//! shared by every warranted sink.

use super::config::LogConfig;
use super::log_level::LogLevel;

/// Format the header for one log line.
///
/// The severity tag is omitted for [`LogLevel::None`]; each source-location
/// field appears only when the configuration enables it. The `": "` lead-out
/// is always present.
///
/// # Examples
///
/// ```
/// use debuglog::{format_header, LogConfig, LogLevel};
///
/// let config = LogConfig::default();
/// let header = format_header(LogLevel::Info, "main.rs", 42, "app::run", &config);
/// assert_eq!(header, "[INFO] main.rs L.42 app::run : ");
/// ```
#[must_use]
pub fn format_header(
    level: LogLevel,
    file: &str,
    line: u32,
    func: &str,
    config: &LogConfig,
) -> String {
    let mut header = String::with_capacity(32);
    if level != LogLevel::None {
        header.push('[');
        header.push_str(level.to_str());
        header.push_str("] ");
    }
    if config.include_file {
        header.push_str(file);
        header.push(' ');
    }
    if config.include_line {
        header.push_str("L.");
        header.push_str(&line.to_string());
        header.push(' ');
    }
    if config.include_func {
        header.push_str(func);
        header.push(' ');
    }
    header.push_str(": ");
    header
}
