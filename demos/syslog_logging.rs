//! Syslog logging example
//!
//! Sends text entries to the local syslog daemon, or to a remote one over
//! UDP when an address is given.
//!
//! Run with: cargo run --example syslog_logging [host:port]

use leveled_logger::prelude::*;
use leveled_logger::Facility;

fn main() -> Result<()> {
    println!("=== Leveled Logger - Syslog Example ===\n");

    let writer = match std::env::args().nth(1) {
        Some(addr) => WriterSyslog::connect("udp", &addr, Facility::LOG_USER, "leveled-demo")?,
        None => WriterSyslog::connect("", "", Facility::LOG_USER, "leveled-demo")?,
    };

    // syslog adds its own timestamp
    let mut serializer = SerializerText::new();
    serializer.use_colors = false;
    serializer.timestamp_mode = TimestampMode::None;

    let logger = Logger::builder()
        .threshold(Level::DEBUG)
        .backend("syslog", Backend::new(FilterPassAll, serializer, writer))
        .build()?;

    logger.with_property("pid", std::process::id()).notice("demo started");
    logger.debug("debug entries map to LOG_DEBUG");
    logger.critical("critical entries map to LOG_CRIT");

    println!("Entries sent; check your syslog.");
    Ok(())
}
