//! File logging example
//!
//! Writes tagged lines to `app.log` with a custom prefix format, echoing
//! them to the console as well.
//!
//! Run with: cargo run --example file_logging

use prefix_logger::prelude::*;
use prefix_logger::{info, warn};

fn main() -> Result<()> {
    let mut logger = Logger::builder()
        .level(LogLevel::Info)
        .filename("app.log")
        .prefix_format("%d %l %f:%n: ")
        .tag("file-demo")
        .console_echo(true)
        .build();
    logger.init()?;

    for i in 0..5 {
        info!(logger, "processing item {}", i)?;
    }
    warn!(logger, "queue nearly empty")?;

    logger.shutdown()?;
    println!("wrote log lines to app.log");
    Ok(())
}
