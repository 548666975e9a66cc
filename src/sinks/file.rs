//! Filesystem-backed persistent sink

use crate::core::{LogError, OpenMode, Result, Sink, Storage, StorageSink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Storage backend that opens buffered log files on the local filesystem.
///
/// Inject one into [`LogManager::attach_storage`](crate::LogManager::attach_storage)
/// to persist log lines:
///
/// ```no_run
/// use debuglog::sinks::FsStorage;
/// use debuglog::{LogManager, OpenMode};
///
/// let mut manager = LogManager::new();
/// let mut storage = FsStorage::new();
/// if !manager.attach_storage(&mut storage, "/var/log/app.log", OpenMode::Append, true) {
///     eprintln!("log file unavailable, console only");
/// }
/// ```
pub struct FsStorage;

impl FsStorage {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FsStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for FsStorage {
    fn open(&mut self, path: &Path, mode: OpenMode) -> Result<Box<dyn StorageSink>> {
        Ok(Box::new(FileSink::create(path, mode)?))
    }
}

/// Persistent sink over a buffered file writer.
///
/// The writer is released on [`close`](StorageSink::close); writes after
/// that fail with [`LogError::SinkClosed`]. Buffered data is flushed on drop.
pub struct FileSink {
    writer: Option<BufWriter<File>>,
}

impl FileSink {
    /// Open a log file directly, outside any [`Storage`] backend.
    pub fn create(path: impl AsRef<Path>, mode: OpenMode) -> Result<Self> {
        let path = path.as_ref();
        let file = match mode {
            OpenMode::Append => OpenOptions::new().create(true).append(true).open(path),
            OpenMode::Truncate => OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(path),
        }
        .map_err(|e| LogError::storage(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
        })
    }
}

impl Sink for FileSink {
    fn write_str(&mut self, text: &str) -> Result<()> {
        let writer = self.writer.as_mut().ok_or(LogError::SinkClosed)?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn write_line(&mut self) -> Result<()> {
        let writer = self.writer.as_mut().ok_or(LogError::SinkClosed)?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}

impl StorageSink for FileSink {
    fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    fn close(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data reaches the file
        let _ = self.flush();
    }
}
