//! Log event structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};

/// One logging call's worth of data.
///
/// Built on the calling stack once the level gate passes and dropped as soon
/// as the line is written; never shared across threads.
#[derive(Debug, Clone)]
pub struct LogEvent<'a> {
    pub level: LogLevel,
    /// Source file of the call site, as captured by `file!()`
    pub file: &'a str,
    /// Source line of the call site, as captured by `line!()`
    pub line: u32,
    /// Wall-clock capture time, microsecond precision
    pub timestamp: DateTime<Local>,
    /// The already-formatted user message
    pub message: String,
}

impl<'a> LogEvent<'a> {
    /// Capture the current wall-clock time and bundle it with the call data.
    pub fn new(level: LogLevel, file: &'a str, line: u32, message: String) -> Self {
        Self {
            level,
            file,
            line,
            timestamp: Local::now(),
            message,
        }
    }
}
