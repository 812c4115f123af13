//! Basic logger usage example
//!
//! Demonstrates the default logger, leveled methods, properties and
//! the text serializer modes.
//!
//! Run with: cargo run --example basic_usage

use leveled_logger::prelude::*;
use leveled_logger::{info, warning};

#[derive(Debug)]
struct ConfigError;

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "missing key 'port'")
    }
}

impl std::error::Error for ConfigError {}

fn audit(logger: &Logger, action: &str) {
    // attributed to the caller of audit
    logger.inc_depth(1).with_property("action", action).notice("audit");
}

fn main() -> Result<()> {
    println!("=== Leveled Logger - Basic Usage Example ===\n");

    println!("1. Default logger:");
    leveled_logger::info("This goes to stderr through the default backend");
    leveled_logger::with_property("port", 8080).notice("listening");
    leveled_logger::debug("Debug message (hidden, default threshold is info)");

    println!("\n2. Custom logger at debug threshold:");
    let logger = Logger::builder()
        .threshold(Level::DEBUG)
        .backend(
            "stderr",
            Backend::new(FilterPassAll, SerializerText::new(), WriterStderr::new()),
        )
        .build()?;
    for level in Level::ALL {
        logger.log(level, format!("This is a {} message", level));
    }

    println!("\n3. Properties, errors and wrappers:");
    logger
        .with_property("user", "alice")
        .with_property("attempt", 3)
        .with_property("ratio", 0.75)
        .warning("login failed");
    logger.with_error(&ConfigError).error("cannot start");
    audit(&logger, "shutdown");

    println!("\n4. Formatting macros:");
    info!(logger, "served {} requests in {}ms", 42, 17);
    warning!(logger.with_property("disk", "/dev/sda1"), "usage at {}%", 91);

    println!("\n5. Text serializer modes:");
    let mut serializer = SerializerText::new();
    serializer.timestamp_mode = TimestampMode::Full;
    serializer.quote_mode = QuoteMode::All;
    serializer.call_context_mode = CallContextMode::Package;
    logger.add_backend(
        "stderr",
        Backend::new(FilterPassAll, serializer, WriterStderr::new()),
    );
    logger.info("Full timestamp, quoted values, package context");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
