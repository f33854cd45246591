//! Basic logger usage example
//!
//! Demonstrates console terminals, level subsets and the print tier.
//!
//! Run with: cargo run --example basic_usage

use rust_handler_logger::prelude::*;
use rust_handler_logger::{infof, warning, LineFormat};

fn main() -> Result<()> {
    println!("=== Rust Handler Logger - Basic Usage Example ===\n");

    // Everything to stdout, without the smart context fields
    let logger = Logger::builder()
        .bare_target("stdout")
        .prevent_smart(true)
        .build()?;

    println!("1. Logging at every level:");
    logger.debug(["This is a debug message"]);
    logger.info(["This is an info message"]);
    logger.notice(["This is a notice message"]);
    logger.warning(["This is a warning message"]);
    logger.error(["This is an error message"]);
    logger.critical(["This is a critical message"]);
    logger.alert(["This is an alert message"]);
    logger.emergency(["This is an emergency message"]);
    logger.print(["The print tier carries no level label"]);
    logger.close();

    println!("\n2. Filtering by level subset:");
    // Membership, not a threshold: ALERT is not in the set
    let terminal = LevelHandler::open("stdout", LevelSet::from_names(["error", "critical"])?)?
        .with_line_format(LineFormat::colored());
    let logger = Logger::builder()
        .handler(terminal)
        .prevent_smart(true)
        .build()?;
    logger.info(["Info message (hidden)"]);
    logger.error(["Error message (visible)"]);
    logger.alert(["Alert message (hidden)"]);
    logger.critical(["Critical message (visible)"]);
    logger.println(["Print tier (always visible)"]);
    logger.close();

    println!("\n3. Smart context and mixed arguments:");
    let logger = Logger::builder().bare_target("stdout").build()?;
    warning!(logger, "retrying", 3, "times");
    infof!(logger, "user {} logged in after {}ms", "alice", 12.5);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
