//! Main logger implementation
//!
//! One owned [`Logger`] value holds its configuration, compiled prefix plan,
//! and sinks; there is no process-global state. Shared readers (`&Logger`)
//! may log concurrently: the compiled plan and the threshold are read-only
//! after `init()`, and the sink pair sits behind a single mutex so two calls
//! never interleave within one emitted line. Reconfiguration goes through
//! `&mut self`, which serializes it against in-flight log calls at compile
//! time.

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result, SinkFailure},
    log_event::LogEvent,
    log_level::LogLevel,
    pattern::PrefixPattern,
};
use crate::sinks::{ConsoleSink, FileSink};
use parking_lot::Mutex;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Logger lifecycle states.
///
/// `Configured -> Initialized -> ShutDown`, with `ShutDown` terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerState {
    /// Config fields may still change; nothing is open
    Configured,
    /// Pattern compiled and sinks open; logging is live
    Initialized,
    /// Sinks closed; every further call fails
    ShutDown,
}

impl LoggerState {
    fn name(self) -> &'static str {
        match self {
            LoggerState::Configured => "configured",
            LoggerState::Initialized => "initialized",
            LoggerState::ShutDown => "shut down",
        }
    }
}

impl fmt::Display for LoggerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The sink pair one log call writes to, grouped so a single lock guards
/// both and a call's file+console writes happen atomically with respect to
/// other calls.
struct SinkSet {
    file: Option<FileSink>,
    console: ConsoleSink,
}

pub struct Logger {
    state: LoggerState,
    config: LoggerConfig,
    pattern: Option<PrefixPattern>,
    sinks: Mutex<SinkSet>,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::default())
    }

    #[must_use]
    pub fn with_config(config: LoggerConfig) -> Self {
        Self {
            state: LoggerState::Configured,
            config,
            pattern: None,
            sinks: Mutex::new(SinkSet {
                file: None,
                console: ConsoleSink::new(),
            }),
        }
    }

    /// Load a config file and construct a logger from it.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        LoggerConfig::load(path).map(Self::with_config)
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    #[must_use]
    pub fn state(&self) -> LoggerState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.config.level
    }

    /// Human-readable defaults-vs-configured table.
    #[must_use]
    pub fn config_summary(&self) -> String {
        self.config.summary()
    }

    /// Compile the prefix pattern and open the file sink if one is
    /// configured.
    ///
    /// A second call on a live logger is a no-op; the open handle is never
    /// silently replaced. On error the logger stays `Configured`, so the
    /// offending field can be corrected and `init()` retried.
    ///
    /// # Errors
    ///
    /// [`LoggerError::InvalidPattern`] if the format string is malformed,
    /// [`LoggerError::SinkOpen`] if the destination file cannot be opened
    /// for append, [`LoggerError::InvalidState`] after shutdown.
    pub fn init(&mut self) -> Result<()> {
        match self.state {
            LoggerState::Configured => {}
            LoggerState::Initialized => return Ok(()),
            LoggerState::ShutDown => return Err(LoggerError::invalid_state(self.state.name())),
        }

        let pattern = PrefixPattern::compile(&self.config.prefix_format)?;

        if let Some(path) = &self.config.filename {
            let sink = FileSink::open(path)?;
            self.sinks.lock().file = Some(sink);
        }

        self.pattern = Some(pattern);
        self.state = LoggerState::Initialized;
        Ok(())
    }

    /// Write one log line.
    ///
    /// Calls below the threshold return `Ok(())` after a single comparison:
    /// no formatting, no allocation, no lock. Otherwise the timestamp is
    /// captured, the prefix rendered from the compiled plan, and the line
    /// written and flushed to each enabled sink. A failure on one sink does
    /// not stop the attempt on the other; failures come back aggregated in
    /// [`LoggerError::SinkWrite`].
    ///
    /// The `message` is only stringified after the gate passes, so the
    /// `format_args!` value the macros hand in costs nothing when
    /// suppressed.
    pub fn log(
        &self,
        level: LogLevel,
        file: &str,
        line: u32,
        message: impl fmt::Display,
    ) -> Result<()> {
        if self.state != LoggerState::Initialized {
            return Err(LoggerError::invalid_state(self.state.name()));
        }
        if level > self.config.level {
            return Ok(());
        }

        let event = LogEvent::new(level, file, line, message.to_string());
        let pattern = self
            .pattern
            .as_ref()
            .ok_or_else(|| LoggerError::invalid_state(self.state.name()))?;

        let mut sinks = self.sinks.lock();

        let mut line_buf = pattern.render(&event);
        if let Some(tag) = &self.config.tag {
            line_buf.push_str(&format!("= {tag} = "));
        }
        line_buf.push_str(&event.message);
        line_buf.push('\n');

        let mut failures = Vec::new();
        if self.config.filename.is_some() {
            match sinks.file.as_mut() {
                Some(sink) => {
                    if let Err(source) = sink.write_line(&line_buf) {
                        failures.push(SinkFailure {
                            sink: "file",
                            source,
                        });
                    }
                }
                None => failures.push(SinkFailure {
                    sink: "file",
                    source: io::Error::new(io::ErrorKind::NotFound, "no open file handle"),
                }),
            }
        }
        if self.config.print_log {
            if let Err(source) = sinks.console.write_line(&line_buf, event.level) {
                failures.push(SinkFailure {
                    sink: "console",
                    source,
                });
            }
        }
        drop(sinks);

        if failures.is_empty() {
            Ok(())
        } else {
            Err(LoggerError::SinkWrite(failures))
        }
    }

    /// Flush both sinks without writing anything.
    pub fn flush(&self) -> Result<()> {
        if self.state != LoggerState::Initialized {
            return Err(LoggerError::invalid_state(self.state.name()));
        }

        let mut sinks = self.sinks.lock();
        let failures = Self::flush_sinks(&mut sinks);
        if failures.is_empty() {
            Ok(())
        } else {
            Err(LoggerError::SinkWrite(failures))
        }
    }

    /// Threshold changes take effect on the next call; no resource conflict.
    pub fn set_level(&mut self, level: LogLevel) -> Result<()> {
        self.ensure_not_shut_down()?;
        self.config.level = level;
        Ok(())
    }

    pub fn set_console_echo(&mut self, print: bool) -> Result<()> {
        self.ensure_not_shut_down()?;
        self.config.print_log = print;
        Ok(())
    }

    pub fn set_tag(&mut self, tag: Option<String>) -> Result<()> {
        self.ensure_not_shut_down()?;
        self.config.tag = tag;
        Ok(())
    }

    /// Rejected once a file handle is open; shut down and build a new logger
    /// to point logging somewhere else.
    pub fn set_filename(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        self.ensure_not_shut_down()?;
        if self.state == LoggerState::Initialized {
            return Err(LoggerError::conflict("log filename"));
        }
        self.config.filename = Some(path.into());
        Ok(())
    }

    /// Rejected once the pattern is compiled.
    pub fn set_prefix_format(&mut self, format: impl Into<String>) -> Result<()> {
        self.ensure_not_shut_down()?;
        if self.state == LoggerState::Initialized {
            return Err(LoggerError::conflict("prefix format"));
        }
        self.config.prefix_format = format.into();
        Ok(())
    }

    /// Flush and close the sinks, drop the compiled plan, and make further
    /// calls fail. Terminal; calling it twice is harmless.
    pub fn shutdown(&mut self) -> Result<()> {
        if self.state == LoggerState::ShutDown {
            return Ok(());
        }

        let failures = {
            let mut sinks = self.sinks.lock();
            let failures = Self::flush_sinks(&mut sinks);
            // Closing is dropping; FileSink flushes once more on drop
            sinks.file = None;
            failures
        };

        self.pattern = None;
        self.state = LoggerState::ShutDown;

        if failures.is_empty() {
            Ok(())
        } else {
            Err(LoggerError::SinkWrite(failures))
        }
    }

    fn flush_sinks(sinks: &mut SinkSet) -> Vec<SinkFailure> {
        let mut failures = Vec::new();
        if let Some(sink) = sinks.file.as_mut() {
            if let Err(source) = sink.flush() {
                failures.push(SinkFailure {
                    sink: "file",
                    source,
                });
            }
        }
        if let Err(source) = sinks.console.flush() {
            failures.push(SinkFailure {
                sink: "console",
                source,
            });
        }
        failures
    }

    fn ensure_not_shut_down(&self) -> Result<()> {
        if self.state == LoggerState::ShutDown {
            return Err(LoggerError::invalid_state(self.state.name()));
        }
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.state == LoggerState::Initialized {
            let _ = self.shutdown();
        }
    }
}

/// Builder for constructing a configured [`Logger`] with a fluent API.
///
/// The built logger is in `Configured` state; call [`Logger::init`] to go
/// live.
///
/// # Example
/// ```
/// use prefix_logger::prelude::*;
///
/// let mut logger = Logger::builder()
///     .level(LogLevel::Debug)
///     .console_echo(true)
///     .build();
/// logger.init().unwrap();
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
        }
    }

    /// Set the minimum severity threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    /// Set the destination file path
    #[must_use = "builder methods return a new value"]
    pub fn filename(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.filename = Some(path.into());
        self
    }

    /// Set the prefix format string
    #[must_use = "builder methods return a new value"]
    pub fn prefix_format(mut self, format: impl Into<String>) -> Self {
        self.config.prefix_format = format.into();
        self
    }

    /// Enable or disable the console echo sink
    #[must_use = "builder methods return a new value"]
    pub fn console_echo(mut self, print: bool) -> Self {
        self.config.print_log = print;
        self
    }

    /// Set the fixed tag emitted between prefix and message
    #[must_use = "builder methods return a new value"]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.config.tag = Some(tag.into());
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger::with_config(self.config)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
