//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

/// A single sink's write failure, kept separately so partial fan-out
/// failures can name the sink that failed without hiding the one that
/// succeeded.
#[derive(Debug, thiserror::Error)]
#[error("write to {sink} sink failed: {source}")]
pub struct SinkFailure {
    pub sink: &'static str,
    #[source]
    pub source: std::io::Error,
}

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Config file missing, unreadable, or malformed
    #[error("failed to load config from '{path}': {message}")]
    ConfigLoad { path: String, message: String },

    /// Destination file could not be opened for append
    #[error("failed to open log file '{path}': {source}")]
    SinkOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Attempt to change a field whose backing resource is already live
    #[error("cannot change {field} while the logger is initialized; shut down first")]
    ConfigConflict { field: &'static str },

    /// Call issued outside the lifecycle states that allow it
    #[error("operation not valid while the logger is {state}")]
    InvalidState { state: &'static str },

    /// Prefix pattern rejected at compile time
    #[error("invalid prefix pattern: {message}")]
    InvalidPattern { message: String },

    /// One or more sink writes failed; every enabled sink was still attempted
    #[error("{}", format_failures(.0))]
    SinkWrite(Vec<SinkFailure>),
}

impl LoggerError {
    /// Create a config load error
    pub fn config_load(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::ConfigLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a sink open error
    pub fn sink_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a config conflict error
    pub fn conflict(field: &'static str) -> Self {
        LoggerError::ConfigConflict { field }
    }

    /// Create an invalid state error
    pub fn invalid_state(state: &'static str) -> Self {
        LoggerError::InvalidState { state }
    }
}

fn format_failures(failures: &[SinkFailure]) -> String {
    let parts: Vec<String> = failures.iter().map(ToString::to_string).collect();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config_load("log.toml", "no such file");
        assert!(matches!(err, LoggerError::ConfigLoad { .. }));

        let err = LoggerError::conflict("log filename");
        assert!(matches!(err, LoggerError::ConfigConflict { .. }));

        let err = LoggerError::invalid_state("shut down");
        assert!(matches!(err, LoggerError::InvalidState { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::conflict("prefix format");
        assert_eq!(
            err.to_string(),
            "cannot change prefix format while the logger is initialized; shut down first"
        );

        let err = LoggerError::invalid_state("shut down");
        assert_eq!(
            err.to_string(),
            "operation not valid while the logger is shut down"
        );
    }

    #[test]
    fn test_sink_write_aggregates_failures() {
        let err = LoggerError::SinkWrite(vec![
            SinkFailure {
                sink: "file",
                source: io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
            },
            SinkFailure {
                sink: "console",
                source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
            },
        ]);

        let rendered = err.to_string();
        assert!(rendered.contains("write to file sink failed"));
        assert!(rendered.contains("write to console sink failed"));
        assert!(rendered.contains("; "));
    }
}
