//! Error types for the logging engine

pub type Result<T> = std::result::Result<T, LogError>;

/// Failures raised by sink implementations.
///
/// These never cross the manager's public boundary: routing and rendering
/// swallow them at the fan-out layer, and storage attachment reports plain
/// success/failure. They exist so sink adapters can be used and tested on
/// their own with honest error reporting.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Storage error with path context
    #[error("storage error for '{path}': {message}")]
    Storage { path: String, message: String },

    /// Write attempted on a sink that is closed or was never opened
    #[error("sink is closed")]
    SinkClosed,

    /// Argument rendering failed
    #[error("render error: {0}")]
    Render(String),
}

impl LogError {
    /// Create a storage error with path context
    pub fn storage(path: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::Storage {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a render error
    pub fn render<S: Into<String>>(msg: S) -> Self {
        LogError::Render(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LogError::storage("/var/log/app.log", "Permission denied");
        assert!(matches!(err, LogError::Storage { .. }));

        let err = LogError::render("unsupported argument");
        assert!(matches!(err, LogError::Render(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LogError::storage("/var/log/app.log", "disk full");
        assert_eq!(
            err.to_string(),
            "storage error for '/var/log/app.log': disk full"
        );

        assert_eq!(LogError::SinkClosed.to_string(), "sink is closed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: LogError = io_err.into();
        assert!(matches!(err, LogError::Io(_)));
        assert!(err.to_string().contains("access denied"));
    }
}
