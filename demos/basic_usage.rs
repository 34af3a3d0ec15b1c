//! Basic logger usage example
//!
//! Demonstrates console logging at the six severity levels and changing the
//! threshold at runtime.
//!
//! Run with: cargo run --example basic_usage

use prefix_logger::prelude::*;
use prefix_logger::{debug, error, fatal, info, trace, warn};

fn main() -> Result<()> {
    let mut logger = Logger::builder()
        .level(LogLevel::Trace)
        .console_echo(true)
        .build();
    logger.init()?;

    println!("{}", logger.config_summary());

    trace!(logger, "world")?;
    debug!(logger, "hello {}", "toto")?;
    info!(logger, "Prog has started")?;
    warn!(logger, "disk space low: {} MiB left", 42)?;
    error!(logger, "Oups!")?;
    fatal!(logger, "cannot continue")?;

    // Raise the threshold: info is now suppressed at near-zero cost
    logger.set_level(LogLevel::Error)?;
    info!(logger, "this line is suppressed")?;
    error!(logger, "this one still shows")?;

    logger.shutdown()?;
    Ok(())
}
