//! Criterion benchmarks for leveled_logger

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use leveled_logger::prelude::*;

/// Writer that drops everything, so benchmarks measure the pipeline only
struct NullWriter;

impl Writer for NullWriter {
    fn write(&self, _level: Level, bytes: &[u8]) -> leveled_logger::Result<usize> {
        Ok(bytes.len())
    }
}

fn sample_entry(logger: &Logger) -> Entry {
    let mut entry = logger
        .with_property("user", "alice")
        .with_property("attempt", 3)
        .with_property("latency", 12.5);
    entry.level = Some(Level::WARNING);
    entry.message = "login failed".to_string();
    entry.timestamp = Some(Utc::now());
    entry.call_context = CallContext::capture(0);
    entry
}

// ============================================================================
// Serialization Benchmarks
// ============================================================================

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::new();
    let entry = sample_entry(&logger);

    let json = SerializerJson::new();
    group.bench_function("json", |b| {
        b.iter(|| json.serialize(black_box(&entry)));
    });

    let mut text = SerializerText::new();
    text.use_colors = false;
    group.bench_function("text", |b| {
        b.iter(|| text.serialize(black_box(&entry)));
    });

    let mut colored = SerializerText::new();
    colored.call_context_mode = CallContextMode::Package;
    group.bench_function("text_colored", |b| {
        b.iter(|| colored.serialize(black_box(&entry)));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::new();
    logger.add_backend(
        "null",
        Backend::new(FilterPassAll, SerializerJson::new(), NullWriter),
    );

    group.bench_function("suppressed", |b| {
        b.iter(|| logger.debug(black_box("Debug message")));
    });

    group.bench_function("info", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("info_with_properties", |b| {
        b.iter(|| {
            logger
                .with_property("request_id", black_box(42))
                .with_property("path", "/index.html")
                .info("request served")
        });
    });

    group.bench_function("infof", |b| {
        b.iter(|| logger.infof(format_args!("served {} bytes", black_box(512))));
    });

    group.finish();
}

// ============================================================================
// Call Context Benchmarks
// ============================================================================

fn bench_call_context(c: &mut Criterion) {
    let mut group = c.benchmark_group("call_context");
    group.throughput(Throughput::Elements(1));

    group.bench_function("capture", |b| {
        b.iter(|| CallContext::capture(black_box(0)));
    });

    group.finish();
}

// ============================================================================
// Backend Fan-out Benchmarks
// ============================================================================

fn bench_backend_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("backend_fanout");

    for count in [1usize, 4, 16] {
        let logger = Logger::new();
        for i in 0..count {
            logger.add_backend(
                format!("null-{}", i),
                Backend::new(FilterPassAll, SerializerJson::new(), NullWriter),
            );
        }
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("backends_{}", count), |b| {
            b.iter(|| logger.notice(black_box("fan-out")));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_serialization,
    bench_logging,
    bench_call_context,
    bench_backend_fanout,
);
criterion_main!(benches);
