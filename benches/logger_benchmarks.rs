//! Criterion benchmarks for rust_handler_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_handler_logger::handlers::{Destination, LevelHandler};
use rust_handler_logger::prelude::*;
use std::sync::Arc;

/// Discards every line so the benchmarks measure rendering and fan-out only
struct SinkDestination;

impl Destination for SinkDestination {
    fn write_line(&mut self, line: &str) -> Result<()> {
        black_box(line);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn reopen(&mut self) -> Result<()> {
        Ok(())
    }

    fn target(&self) -> &str {
        "sink"
    }
}

fn sink_logger(levels: LevelSet, json: bool, smart: bool) -> Logger {
    Logger::builder()
        .handler(LevelHandler::new(Box::new(SinkDestination), levels))
        .json(json)
        .prevent_smart(!smart)
        .build()
        .unwrap()
}

// ============================================================================
// Fan-out Benchmarks
// ============================================================================

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out");
    group.throughput(Throughput::Elements(1));

    let null = Logger::null();
    group.bench_function("null_logger", |b| {
        b.iter(|| null.info(black_box(["Info message"])));
    });

    let plain = sink_logger(LevelSet::all(), false, false);
    group.bench_function("plain_terminal", |b| {
        b.iter(|| plain.info(black_box(["Info message"])));
    });

    let decorated = sink_logger(LevelSet::all(), true, true);
    group.bench_function("smart_json_terminal", |b| {
        b.iter(|| decorated.info(black_box(["Info message"])));
    });

    let mut wide = Logger::null();
    for _ in 0..4 {
        wide.add_handler(Box::new(LevelHandler::new(
            Box::new(SinkDestination),
            LevelSet::all(),
        )));
    }
    group.bench_function("four_terminals", |b| {
        b.iter(|| wide.info(black_box(["Info message"])));
    });

    group.finish();
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(LevelSet::at_least(LogLevel::Error), false, false);

    group.bench_function("rejected", |b| {
        b.iter(|| logger.debug(black_box(["Filtered out"])));
    });

    group.bench_function("accepted", |b| {
        b.iter(|| logger.error(black_box(["Passes filter"])));
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(LevelSet::all(), false, false);

    group.bench_function("joined_args", |b| {
        b.iter(|| {
            logger.info(black_box(vec![
                Value::from("user"),
                Value::from(42),
                Value::from(true),
            ]))
        });
    });

    group.bench_function("template", |b| {
        b.iter(|| {
            logger.infof(
                black_box("user {} logged in from {}"),
                black_box(["alice", "10.0.0.1"]),
            )
        });
    });

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let logger = Arc::new(sink_logger(LevelSet::all(), true, false));

    group.bench_function("multi_thread_4", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        logger.info(black_box(["Concurrent message"]));
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_fan_out,
    bench_filtering,
    bench_formatting,
    bench_concurrent_logging,
);
criterion_main!(benches);
