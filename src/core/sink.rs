//! Sink capabilities for log output destinations
//!
//! The manager never touches a concrete transport type: the console is any
//! [`Sink`], persistent storage is any [`Storage`] that can open a
//! [`StorageSink`]. Platform adapters implementing these traits live in
//! [`crate::sinks`] and are injected at startup.

use super::error::Result;
use std::path::Path;

/// Minimal text-output capability.
///
/// No `Send`/`Sync` bounds: the engine targets single-threaded cooperative
/// execution and encodes exclusive access through `&mut self`.
pub trait Sink {
    /// Write a piece of text, without any terminator.
    fn write_str(&mut self, text: &str) -> Result<()>;

    /// Write the line terminator.
    fn write_line(&mut self) -> Result<()>;

    /// Push buffered output down to the device. No-op by default.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A sink backed by persistent storage, with an open/closed lifecycle.
///
/// Writes while closed must fail with [`LogError::SinkClosed`] rather than
/// panic; the manager silently skips a sink that reports `is_open() ==
/// false`.
///
/// [`LogError::SinkClosed`]: crate::core::error::LogError::SinkClosed
pub trait StorageSink: Sink {
    /// Whether the underlying handle is usable.
    fn is_open(&self) -> bool;

    /// Flush and release the underlying handle. Idempotent.
    fn close(&mut self) -> Result<()>;
}

/// Mode for opening a persistent log target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMode {
    /// Create the file if missing and append to its end.
    #[default]
    Append,
    /// Create the file if missing and discard any previous contents.
    Truncate,
}

/// Capability for opening persistent sinks.
///
/// `open` failure is a non-fatal condition for the caller: the manager
/// degrades to console-only delivery and never reports the error anywhere
/// except through `is_storage_open`.
pub trait Storage {
    fn open(&mut self, path: &Path, mode: OpenMode) -> Result<Box<dyn StorageSink>>;
}
