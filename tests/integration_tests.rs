//! Integration tests for the logger
//!
//! These tests verify:
//! - JSON and text output written through a file writer
//! - Call site attribution through wrappers and macros
//! - Filtering and threshold handling
//! - Isolation of failing backends
//! - Thread safety

use leveled_logger::prelude::*;
use leveled_logger::{error, info, log, warning};
use parking_lot::Mutex;
use std::fs;
use std::io;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

/// Writer keeping every line in memory
#[derive(Clone, Default)]
struct MemoryWriter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryWriter {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl Writer for MemoryWriter {
    fn write(&self, _level: Level, bytes: &[u8]) -> leveled_logger::Result<usize> {
        self.lines
            .lock()
            .push(String::from_utf8_lossy(bytes).into_owned());
        Ok(bytes.len())
    }
}

fn plain_text() -> SerializerText {
    let mut serializer = SerializerText::new();
    serializer.use_colors = false;
    serializer.timestamp_mode = TimestampMode::None;
    serializer
}

fn memory_logger(serializer: impl Serializer + 'static) -> (Logger, MemoryWriter) {
    let writer = MemoryWriter::default();
    let logger = Logger::builder()
        .threshold(Level::DEBUG)
        .backend("memory", Backend::new(FilterPassAll, serializer, writer.clone()))
        .build()
        .expect("Failed to build logger");
    (logger, writer)
}

#[inline(never)]
fn report_failure(logger: &Logger, reason: &str) {
    logger.inc_depth(1).with_property("reason", reason).error("request failed");
}

#[test]
fn test_json_file_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");

    let logger = Logger::new();
    logger.add_backend(
        "file",
        Backend::new(
            FilterPassAll,
            SerializerJson::new(),
            WriterFile::open(&log_file, 0o600).expect("Failed to open log file"),
        ),
    );

    let mut entry = logger.with_property("user", "alice").with_property("attempt", 3);
    entry.warning("login failed");
    let line = line!() - 1;
    logger.debug("below threshold");
    logger.info("second line");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let records: Vec<serde_json::Value> = content
        .lines()
        .map(|line| serde_json::from_str(line).expect("Each line should be JSON"))
        .collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["level"], "warning");
    assert_eq!(records[0]["message"], "login failed");
    assert_eq!(records[0]["properties"]["user"], "alice");
    assert_eq!(records[0]["properties"]["attempt"], 3);
    assert_eq!(records[0]["callcontext"]["file"], "integration_tests.rs");
    assert_eq!(records[0]["callcontext"]["line"], line);
    assert_eq!(
        records[0]["callcontext"]["function"],
        "test_json_file_end_to_end"
    );
    assert!(records[0]["timestamp"].as_str().is_some());

    assert_eq!(records[1]["level"], "info");
    assert!(records[1].get("properties").is_none());
}

#[test]
fn test_text_file_appends() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("text.log");

    for round in 0..2 {
        let logger = Logger::new();
        let mut serializer = plain_text();
        serializer.call_context_mode = CallContextMode::None;
        logger.add_backend(
            "file",
            Backend::new(FilterPassAll, serializer, WriterFile::new(&log_file, 0o644)),
        );
        logger.with_property("round", round).notice("started");
    }

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, ["[NOT] started {round:0;}", "[NOT] started {round:1;}"]);
}

#[test]
fn test_file_writer_reports_open_failure() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("missing").join("app.log");

    let err = WriterFile::open(&missing, 0o644).unwrap_err();
    assert!(err.to_string().contains("opening log file"));
}

#[test]
fn test_wrapper_attribution() {
    let (logger, writer) = memory_logger(plain_text());

    report_failure(&logger, "timeout");
    let line = line!() - 1;

    assert_eq!(
        writer.lines(),
        [format!(
            r#"[ERR] [integration_tests.rs:{}] "request failed" {{reason:timeout;}}"#,
            line
        )]
    );
}

#[test]
fn test_function_call_context_mode() {
    let mut serializer = plain_text();
    serializer.call_context_mode = CallContextMode::Function;
    let (logger, writer) = memory_logger(serializer);

    logger.info("hello");
    let line = line!() - 1;

    assert_eq!(
        writer.lines(),
        [format!(
            "[INF] [integration_tests.rs:test_function_call_context_mode:{}] hello ",
            line
        )]
    );
}

#[test]
fn test_macros_report_invocation_site() {
    let (logger, writer) = memory_logger(plain_text());

    info!(logger, "listening on port {}", 8080);
    let first = line!() - 1;
    warning!(logger.with_property("port", 22), "port {} is privileged", 22);
    let second = line!() - 1;
    log!(logger, Level::DEBUG, "raw {}", "debug");
    error!(logger.with_error(&io::Error::other("disk full")), "flush failed");

    let lines = writer.lines();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        format!(r#"[INF] [integration_tests.rs:{}] "listening on port 8080" "#, first)
    );
    assert_eq!(
        lines[1],
        format!(
            r#"[WAR] [integration_tests.rs:{}] "port 22 is privileged" {{port:22;}}"#,
            second
        )
    );
    assert!(lines[2].starts_with("[DEB] "));
    assert!(lines[3].ends_with(r#""flush failed" {error:"disk full";}"#));
}

#[test]
fn test_closure_filter() {
    let writer = MemoryWriter::default();
    let logger = Logger::new();
    logger.add_backend(
        "audited",
        Backend::new(
            |entry: &Entry| -> leveled_logger::Result<bool> {
                Ok(entry.properties.contains_key("audit"))
            },
            plain_text(),
            writer.clone(),
        ),
    );

    logger.info("ignored");
    logger.with_property("audit", true).info("kept");

    assert_eq!(writer.lines().len(), 1);
    assert!(writer.lines()[0].contains("kept"));
}

#[test]
fn test_threshold_changes_apply_immediately() {
    let (logger, writer) = memory_logger(plain_text());

    logger.set_threshold(Level::ERROR).unwrap();
    logger.warning("dropped");
    logger.critical("kept");
    assert!(logger.set_threshold(Level::from_raw(42)).is_err());
    assert_eq!(logger.threshold(), Level::ERROR);

    let lines = writer.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("[CRI]"));
    assert_eq!(logger.metrics().suppressed_count(), 1);
}

#[test]
fn test_failing_backend_does_not_affect_others() {
    struct FailingWriter;

    impl Writer for FailingWriter {
        fn write(&self, _level: Level, _bytes: &[u8]) -> leveled_logger::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed").into())
        }
    }

    let failures = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&failures);
    let (logger, writer) = memory_logger(plain_text());
    logger.add_backend(
        "broken",
        Backend::new(FilterPassAll, SerializerJson::new(), FailingWriter),
    );
    logger.set_error_handler(move |backend, err| {
        seen.lock().push(format!("{}: {}", backend, err));
    });

    logger.info("still delivered");

    assert_eq!(writer.lines().len(), 1);
    assert_eq!(*failures.lock(), ["broken: IO error: closed"]);
    assert_eq!(logger.metrics().backend_failures(), 1);
}

#[test]
fn test_concurrent_logging() {
    let (logger, writer) = memory_logger(SerializerJson::new());

    let handles: Vec<_> = (0..8)
        .map(|thread_id| {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..100 {
                    logger
                        .with_property("thread", thread_id)
                        .with_property("seq", i)
                        .info("tick");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let lines = writer.lines();
    assert_eq!(lines.len(), 800);
    for line in &lines {
        let record: serde_json::Value = serde_json::from_str(line).expect("Valid JSON");
        assert_eq!(record["message"], "tick");
    }
    assert_eq!(logger.metrics().dispatched_count(), 800);
}
