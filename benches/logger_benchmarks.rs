//! Criterion benchmarks for multi_handler_logging

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use multi_handler_logging::prelude::*;
use multi_handler_logging::{debug, multi_handlers};

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let formatter = Formatter::default();
    let entry = LogEntry::new(LogLevel::Debug, "FILE", "18 is an even number.")
        .with_location("multi_handlers", 64);

    group.bench_function("default_template", |b| {
        b.iter(|| black_box(formatter.format(black_box(&entry))));
    });

    group.bench_function("compile_template", |b| {
        b.iter(|| {
            black_box(Formatter::new(
                black_box(multi_handler_logging::core::DEFAULT_TEMPLATE),
                "%b-%d-%Y %H:%M:%S",
            ))
        });
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let ctx = LoggingContext::default();
    let logger = ctx.get_logger("CONSOLE");
    logger.set_min_level(LogLevel::Debug);
    logger.add_appender(shared(ConsoleAppender::with_writer(
        ctx.formatter(),
        Box::new(std::io::sink()),
    )));

    group.bench_function("debug_to_sink", |b| {
        b.iter(|| debug!(logger, "{} is an odd number.", black_box(7)));
    });

    let filtered = ctx.get_logger("ROOT");
    filtered.set_min_level(LogLevel::Critical);

    group.bench_function("below_threshold", |b| {
        b.iter(|| debug!(filtered, "{} is an odd number.", black_box(7)));
    });

    group.bench_function("multi_handlers_unconfigured", |b| {
        let bare = LoggingContext::default();
        b.iter(|| multi_handlers(black_box(&bare)));
    });

    group.finish();
}

criterion_group!(benches, bench_formatting, bench_dispatch);
criterion_main!(benches);
