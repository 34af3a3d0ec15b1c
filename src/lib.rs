//! # Prefix Logger
//!
//! A thread-safe, leveled logging library with compiled prefix patterns and
//! file/console output.
//!
//! ## Features
//!
//! - **Compiled prefixes**: the prefix format string (e.g. `"%d %l %f:%n: "`)
//!   is compiled once into an immutable plan and replayed on every call
//! - **Level gating**: calls below the configured threshold cost a single
//!   comparison
//! - **Thread safe**: concurrent callers never interleave within a line
//! - **Config files**: key-value (TOML) configuration with per-field
//!   defaults

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        LogEvent, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerState,
        PrefixPattern, Result, SinkFailure,
    };
    pub use crate::sinks::{ConsoleSink, FileSink};
}

pub use crate::core::{
    Field, LogEvent, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerState,
    PrefixPattern, Result, Segment, SinkFailure, DEFAULT_CONFIG_FILE, DEFAULT_PREFIX_FORMAT,
};
pub use crate::sinks::{ConsoleSink, FileSink};
