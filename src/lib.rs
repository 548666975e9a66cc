//! # debuglog
//!
//! A leveled, dual-sink logging engine for resource-constrained targets:
//! heterogeneous argument lists are rendered once into a formatted text line,
//! filtered by severity, and routed independently to a console sink and an
//! optional persistent-storage sink.
//!
//! ## Features
//!
//! - **Dual Sinks**: Console and persistent storage, each with its own
//!   severity threshold
//! - **Rich Arguments**: Integers in any base, floats, text, containers and
//!   maps, rendered without per-argument allocation
//! - **Halting Assertions**: Emit once to every sink, flush, then halt
//! - **Zero-Cost Disable**: The `disable-log` feature turns leveled macros
//!   into no-ops
//!
//! ```
//! use debuglog::{log_info, LogBase, LogLevel, LogManager};
//!
//! let mut manager = LogManager::builder()
//!     .console_level(LogLevel::Debug)
//!     .build();
//!
//! log_info!(manager, "dac value", LogBase::Hex, 0x0fffu16);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        format_header, AsText, HaltHandler, LogBase, LogConfig, LogError, LogLevel, LogManager,
        LogManagerBuilder, OpenMode, RenderState, Renderable, Result, Sink, Storage, StorageSink,
        DEFAULT_DELIMITER, DEFAULT_FLOAT_PRECISION, DEFAULT_HALT_INTERVAL,
    };
    pub use crate::sinks::{FileSink, FsStorage, MemorySink, StdoutSink};
}

pub use crate::core::{
    format_header, AsText, HaltHandler, LogBase, LogConfig, LogError, LogLevel, LogManager,
    LogManagerBuilder, OpenMode, RenderState, Renderable, Result, Sink, Storage, StorageSink,
    DEFAULT_DELIMITER, DEFAULT_FLOAT_PRECISION, DEFAULT_HALT_INTERVAL,
};
