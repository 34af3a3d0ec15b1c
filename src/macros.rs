//! Logging macros for ergonomic log message formatting.
//!
//! Each macro captures the call site via `file!()`/`line!()` so the `%f` and
//! `%n` prefix selectors point at the caller, and passes the message as a
//! `format_args!` value so nothing is formatted for calls the level gate
//! suppresses.
//!
//! # Examples
//!
//! ```
//! use prefix_logger::prelude::*;
//! use prefix_logger::info;
//!
//! let mut logger = Logger::builder()
//!     .level(LogLevel::Info)
//!     .build();
//! logger.init().unwrap();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use prefix_logger::prelude::*;
/// # let mut logger = Logger::new();
/// # logger.init().unwrap();
/// use prefix_logger::log;
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, file!(), line!(), format_args!($($arg)+))
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use prefix_logger::prelude::*;
/// # let mut logger = Logger::new();
/// # logger.init().unwrap();
/// use prefix_logger::trace;
/// trace!(logger, "Entering function: calculate()").unwrap();
/// trace!(logger, "Variable value: {}", 42).unwrap();
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use prefix_logger::prelude::*;
/// # let mut logger = Logger::new();
/// # logger.init().unwrap();
/// use prefix_logger::debug;
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use prefix_logger::prelude::*;
/// # let mut logger = Logger::new();
/// # logger.init().unwrap();
/// use prefix_logger::info;
/// info!(logger, "Processing {} items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use prefix_logger::prelude::*;
/// # let mut logger = Logger::new();
/// # logger.init().unwrap();
/// use prefix_logger::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use prefix_logger::prelude::*;
/// # let mut logger = Logger::new();
/// # logger.init().unwrap();
/// use prefix_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// # Examples
///
/// ```
/// # use prefix_logger::prelude::*;
/// # let mut logger = Logger::new();
/// # logger.init().unwrap();
/// use prefix_logger::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full").unwrap();
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
