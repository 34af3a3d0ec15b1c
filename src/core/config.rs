//! Logger configuration and key-value config file loading

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config path used when the caller does not name one.
pub const DEFAULT_CONFIG_FILE: &str = "log.toml";

/// Default prefix format: timestamp, padded level name, source location.
pub const DEFAULT_PREFIX_FORMAT: &str = "%d %l %f:%n: ";

/// Everything a [`Logger`](super::logger::Logger) needs before `init()`.
///
/// Created with defaults, optionally overridden by [`LoggerConfig::load`]
/// and/or the logger's setters, then frozen when the logger initializes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Minimum severity actually written
    pub level: LogLevel,
    /// Destination file; `None` disables the file sink
    pub filename: Option<PathBuf>,
    /// Pattern string compiled at `init()`
    pub prefix_format: String,
    /// Console echo sink on/off
    pub print_log: bool,
    /// Optional fixed tag, emitted as `= tag = ` between prefix and message
    pub tag: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Error,
            filename: None,
            prefix_format: DEFAULT_PREFIX_FORMAT.to_string(),
            print_log: false,
            tag: None,
        }
    }
}

/// Raw key-value shape of the config file. Every key is optional; missing
/// keys fall back to the defaults above rather than failing the load.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    log_level: Option<i64>,
    log_filename: Option<PathBuf>,
    log_prefix_format: Option<String>,
    print_log: Option<bool>,
    log_prefix: Option<String>,
}

impl LoggerConfig {
    /// Load configuration from a TOML key-value file.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::ConfigLoad`] when the file is unreadable, not
    /// valid TOML, or carries a `log_level` ordinal outside 0-5.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let contents = std::fs::read_to_string(path)
            .map_err(|e| LoggerError::config_load(&display, e.to_string()))?;
        let file: ConfigFile = toml::from_str(&contents)
            .map_err(|e| LoggerError::config_load(&display, e.to_string()))?;

        let defaults = Self::default();
        let level = match file.log_level {
            Some(ordinal) => LogLevel::from_ordinal(ordinal).ok_or_else(|| {
                LoggerError::config_load(
                    &display,
                    format!("log_level {ordinal} out of range (expected 0-5)"),
                )
            })?,
            None => defaults.level,
        };

        Ok(Self {
            level,
            filename: file.log_filename,
            prefix_format: file.log_prefix_format.unwrap_or(defaults.prefix_format),
            print_log: file.print_log.unwrap_or(defaults.print_log),
            tag: file.log_prefix,
        })
    }

    /// Human-readable defaults-vs-configured table.
    #[must_use]
    pub fn summary(&self) -> String {
        let defaults = Self::default();
        let mut out = String::new();
        out.push_str("======================\n");
        out.push_str("Logger configuration\n");
        out.push_str("======================\n");
        out.push_str("Parameter | Default           | Configured\n");
        out.push_str("--------------------------------------------\n");
        out.push_str(&format!(
            "level     | {:<17} | {}\n",
            defaults.level.to_str(),
            self.level.to_str()
        ));
        out.push_str(&format!(
            "filename  | {:<17} | {}\n",
            path_or_none(&defaults.filename),
            path_or_none(&self.filename)
        ));
        out.push_str(&format!(
            "format    | {:<17} | {:?}\n",
            format!("{:?}", defaults.prefix_format),
            self.prefix_format
        ));
        out.push_str(&format!(
            "print     | {:<17} | {}\n",
            defaults.print_log, self.print_log
        ));
        out.push_str(&format!(
            "tag       | {:<17} | {}\n",
            defaults.tag.as_deref().unwrap_or("(none)"),
            self.tag.as_deref().unwrap_or("(none)")
        ));
        out
    }
}

fn path_or_none(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "(none)".to_string(),
    }
}
