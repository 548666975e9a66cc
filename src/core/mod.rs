//! Core logging engine types and traits

pub mod config;
pub mod error;
pub mod header;
pub mod log_base;
pub mod log_level;
pub mod manager;
pub mod render;
pub mod sink;

pub use config::{LogConfig, DEFAULT_DELIMITER};
pub use error::{LogError, Result};
pub use header::format_header;
pub use log_base::LogBase;
pub use log_level::LogLevel;
pub use manager::{HaltHandler, LogManager, LogManagerBuilder, DEFAULT_HALT_INTERVAL};
pub use render::{AsText, RenderState, Renderable, DEFAULT_FLOAT_PRECISION};
pub use sink::{OpenMode, Sink, Storage, StorageSink};
