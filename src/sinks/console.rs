//! Console sink implementation

use crate::core::{Result, Sink};
use std::io::Write;

/// Sink writing to the process's standard output.
///
/// This is the default console transport of a
/// [`LogManager`](crate::LogManager). Writes go through a locked handle so
/// header, arguments and terminator of one line stay contiguous.
pub struct StdoutSink;

impl StdoutSink {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for StdoutSink {
    fn write_str(&mut self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        Ok(())
    }

    fn write_line(&mut self) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }
}
