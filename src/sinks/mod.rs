//! Sink adapters for common transports

pub mod console;
pub mod file;
pub mod memory;

pub use console::StdoutSink;
pub use file::{FileSink, FsStorage};
pub use memory::MemorySink;

// Re-export the capability traits alongside their adapters
pub use crate::core::{Sink, Storage, StorageSink};
