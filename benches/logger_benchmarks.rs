//! Criterion benchmarks for debuglog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use debuglog::prelude::*;
use std::collections::BTreeMap;

/// Sink that discards everything, so the numbers measure engine cost only.
struct NullSink;

impl Sink for NullSink {
    fn write_str(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }

    fn write_line(&mut self) -> Result<()> {
        Ok(())
    }
}

fn null_manager(level: LogLevel) -> LogManager {
    LogManager::builder()
        .console_level(level)
        .console(Box::new(NullSink))
        .build()
}

// ============================================================================
// Manager Creation Benchmarks
// ============================================================================

fn bench_manager_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("manager_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new", |b| {
        b.iter(|| black_box(LogManager::new()));
    });

    group.bench_function("builder", |b| {
        b.iter(|| {
            let manager = LogManager::builder()
                .console_level(LogLevel::Debug)
                .delimiter(", ")
                .build();
            black_box(manager)
        });
    });

    group.finish();
}

// ============================================================================
// Suppressed Path Benchmarks
// ============================================================================

fn bench_suppressed_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("suppressed_path");
    group.throughput(Throughput::Elements(1));

    let mut manager = null_manager(LogLevel::Warn);
    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            manager.log(
                black_box(LogLevel::Debug),
                black_box("bench.rs"),
                black_box(1),
                black_box("bench::run"),
                &[&"filtered", &42u32],
            );
        });
    });

    let mut muted = null_manager(LogLevel::None);
    group.bench_function("none_threshold", |b| {
        b.iter(|| {
            muted.log(
                black_box(LogLevel::Error),
                black_box("bench.rs"),
                black_box(1),
                black_box("bench::run"),
                &[&"filtered", &42u32],
            );
        });
    });

    group.finish();
}

// ============================================================================
// Delivered Line Benchmarks
// ============================================================================

fn bench_delivered_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("delivered_line");
    group.throughput(Throughput::Elements(1));

    let mut manager = null_manager(LogLevel::Trace);

    group.bench_function("text_only", |b| {
        b.iter(|| {
            manager.log(
                black_box(LogLevel::Info),
                "bench.rs",
                42,
                "bench::run",
                &[&"plain message"],
            );
        });
    });

    group.bench_function("mixed_arguments", |b| {
        b.iter(|| {
            manager.log(
                black_box(LogLevel::Info),
                "bench.rs",
                42,
                "bench::run",
                &[&"value", &black_box(12345u32), &black_box(2.71828f64), &true],
            );
        });
    });

    group.bench_function("hex_arguments", |b| {
        b.iter(|| {
            manager.log(
                black_box(LogLevel::Info),
                "bench.rs",
                42,
                "bench::run",
                &[&LogBase::Hex, &black_box(0xdead_beefu32), &black_box(0xffffu16)],
            );
        });
    });

    group.finish();
}

// ============================================================================
// Container Rendering Benchmarks
// ============================================================================

fn bench_container_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("container_rendering");

    let mut manager = null_manager(LogLevel::Trace);

    let small: Vec<u32> = (0..8).collect();
    group.throughput(Throughput::Elements(8));
    group.bench_function("vec_8", |b| {
        b.iter(|| manager.print(&[&small]));
    });

    let large: Vec<u32> = (0..256).collect();
    group.throughput(Throughput::Elements(256));
    group.bench_function("vec_256", |b| {
        b.iter(|| manager.print(&[&large]));
    });

    let mut map = BTreeMap::new();
    for i in 0..8 {
        map.insert(format!("key{}", i), i);
    }
    group.throughput(Throughput::Elements(8));
    group.bench_function("map_8", |b| {
        b.iter(|| manager.print(&[&map]));
    });

    group.finish();
}

// ============================================================================
// Header Generation Benchmarks
// ============================================================================

fn bench_header_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("header_generation");
    group.throughput(Throughput::Elements(1));

    let full = LogConfig::default();
    group.bench_function("all_fields", |b| {
        b.iter(|| {
            let header = format_header(
                black_box(LogLevel::Info),
                black_box("bench.rs"),
                black_box(42),
                black_box("bench::run"),
                &full,
            );
            black_box(header)
        });
    });

    let bare = LogConfig::new().with_header_fields(false, false, false);
    group.bench_function("tag_only", |b| {
        b.iter(|| {
            let header = format_header(
                black_box(LogLevel::Info),
                black_box("bench.rs"),
                black_box(42),
                black_box("bench::run"),
                &bare,
            );
            black_box(header)
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_manager_creation,
    bench_suppressed_path,
    bench_delivered_line,
    bench_container_rendering,
    bench_header_generation
);

criterion_main!(benches);
