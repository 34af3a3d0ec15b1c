//! Core logger types

pub mod config;
pub mod error;
pub mod log_event;
pub mod log_level;
pub mod logger;
pub mod pattern;

pub use config::{LoggerConfig, DEFAULT_CONFIG_FILE, DEFAULT_PREFIX_FORMAT};
pub use error::{LoggerError, Result, SinkFailure};
pub use log_event::LogEvent;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, LoggerState};
pub use pattern::{Field, PrefixPattern, Segment};
