//! File logging example
//!
//! Demonstrates configuration-driven routing to several files, JSON
//! output, and reopening files after external rotation.
//!
//! Run with: cargo run --example file_logging

use rust_handler_logger::prelude::*;

const OPTIONS: &str = r#"{
    "kind": "multi",
    "handlers": [
        { "file": "errors.log", "levels": ["error", "critical", "alert", "emergency"] },
        { "file": "application.log", "levels": [] }
    ],
    "json": true
}"#;

fn main() -> Result<()> {
    println!("=== Rust Handler Logger - File Logging Example ===\n");

    let options = LoggerOptions::from_json(OPTIONS)?;
    let logger = Logger::from_options(&options)?;
    println!("Handlers: {:?}", logger.handler_names());

    println!("1. Logging to both files:");
    logger.info(["Application started"]);
    logger.debug(["Loading configuration..."]);
    logger.warning(["Using default settings for some options"]);
    logger.errorf("Failed to load optional plugin {}", ["geoip"]);

    println!("\n2. Rotating application.log:");
    if std::path::Path::new("application.log").exists() {
        std::fs::rename("application.log", "application.log.1")?;
    }
    logger.reload()?;

    for i in 1..=5 {
        logger.infof("Processing item {}/5", [i]);
    }
    logger.info(["All operations completed"]);
    logger.close();

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log', 'application.log.1' and 'errors.log'");

    Ok(())
}
