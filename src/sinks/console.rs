//! Console sink implementation

use crate::core::log_level::LogLevel;
use colored::Colorize;
use std::io::{self, Write};

/// Console destination.
///
/// Error and Fatal lines go to standard error, everything else to standard
/// output. Each write is flushed before returning.
pub struct ConsoleSink {
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Write one already-assembled line (terminator included) and flush the
    /// stream it went to.
    pub fn write_line(&mut self, line: &str, level: LogLevel) -> io::Result<()> {
        let rendered = if self.use_colors {
            format!(
                "{}\n",
                line.trim_end_matches('\n').color(level.color_code())
            )
        } else {
            line.to_string()
        };

        if level <= LogLevel::Error {
            let mut stream = io::stderr().lock();
            stream.write_all(rendered.as_bytes())?;
            stream.flush()
        } else {
            let mut stream = io::stdout().lock();
            stream.write_all(rendered.as_bytes())?;
            stream.flush()
        }
    }

    /// Flush both streams, since writes go to both over time.
    pub fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        io::stderr().flush()
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}
