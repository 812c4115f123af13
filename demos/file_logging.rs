//! File logging example
//!
//! Demonstrates JSON output to a file next to colorized text on stderr,
//! with a filter keeping only entries that carry an `audit` property.
//!
//! Run with: cargo run --example file_logging

use leveled_logger::prelude::*;
use std::fs;

fn main() -> Result<()> {
    println!("=== Leveled Logger - File Logging Example ===\n");

    let log_path = std::env::temp_dir().join("leveled_logger_demo.log");
    let _ = fs::remove_file(&log_path);

    let logger = Logger::new();
    logger.add_backend(
        "stderr",
        Backend::new(FilterPassAll, SerializerText::new(), WriterStderr::new()),
    );
    logger.add_backend(
        "audit",
        Backend::new(
            |entry: &Entry| -> Result<bool> { Ok(entry.properties.contains_key("audit")) },
            SerializerJson::new().with_timestamp_format(TimestampFormat::Iso8601),
            WriterFile::open(&log_path, 0o644)?,
        ),
    );

    println!("Logging to: {}", log_path.display());

    logger.info("Application started");
    logger
        .with_property("audit", true)
        .with_property("user", "alice")
        .notice("user logged in");
    logger.with_property("audit", true).warning("password expires soon");
    logger.error("Not audited, stderr only");

    println!("\n=== Audit file content ===");
    print!("{}", fs::read_to_string(&log_path)?);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
