//! Benchmarks for whatstat parsing, inference and aggregation.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench pipeline -- pivot`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use whatstat::config::AnalyzerConfig;
use whatstat::core::labels::localize;
use whatstat::core::output::{to_csv, to_jsonl};
use whatstat::core::pivot::aggregate;
use whatstat::dimension::{Dimension, Metric};
use whatstat::locale::Locale;
use whatstat::parsing::{infer_from_sample, sanitize_line};
use whatstat::pipeline::TranscriptParser;

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_transcript(count: usize) -> String {
    let mut lines = Vec::with_capacity(count + count / 10);
    for i in 0..count {
        let author = if i % 2 == 0 { "Alice" } else { "Bob" };
        let day = (i / 200) % 28 + 1;
        let month = (i / 5600) % 12 + 1;
        let hour = (i / 10) % 24;
        let minute = i % 60;
        let body = if i % 17 == 0 {
            "<Media omitted>".to_string()
        } else {
            format!("message number {i}, with a comma")
        };
        lines.push(format!(
            "{day}/{month}/23, {hour:02}:{minute:02} - {author}: {body}"
        ));
        if i % 10 == 0 {
            lines.push("a continuation line".to_string());
        }
    }
    lines.join("\n")
}

fn seeded_parser() -> TranscriptParser {
    TranscriptParser::with_config(AnalyzerConfig::new().with_seed(1))
}

// =============================================================================
// Parsing
// =============================================================================

fn bench_sanitize(c: &mut Criterion) {
    let lines: Vec<String> = generate_transcript(10_000)
        .lines()
        .map(str::to_string)
        .collect();
    let mut group = c.benchmark_group("sanitize");
    group.throughput(Throughput::Elements(lines.len() as u64));
    group.bench_function("10000_lines", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(sanitize_line(black_box(line)));
            }
        });
    });
    group.finish();
}

fn bench_infer_format(c: &mut Criterion) {
    let sample: Vec<String> = (0..50)
        .map(|i| format!("{:02}/{:02}/2023 {:02}:{:02}", i % 28 + 1, i % 12 + 1, i % 24, i))
        .collect();
    c.bench_function("infer_format_50", |b| {
        b.iter(|| black_box(infer_from_sample(black_box(&sample)).unwrap()));
    });
}

fn bench_parse_transcript(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_transcript");
    let parser = seeded_parser();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let collection = parser.parse_str(black_box(txt)).unwrap();
                black_box(collection)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Aggregation and Output
// =============================================================================

fn bench_pivot(c: &mut Criterion) {
    let collection = seeded_parser()
        .parse_str(&generate_transcript(50_000))
        .unwrap();
    let mut group = c.benchmark_group("pivot");
    group.throughput(Throughput::Elements(collection.len() as u64));

    for (x, y, hue) in [
        (Dimension::Hour, Metric::Msg, None),
        (Dimension::DayOfWeek, Metric::Wpm, Some(Dimension::Month)),
        (Dimension::YearDay, Metric::Words, None),
    ] {
        let id = format!("{x}_{y}_{}", hue.map_or("none", Dimension::as_str));
        group.bench_function(id, |b| {
            b.iter(|| {
                let table = aggregate(black_box(collection.records()), x, y, hue);
                black_box(localize(&table, Locale::Es))
            });
        });
    }
    group.finish();
}

fn bench_output(c: &mut Criterion) {
    let collection = seeded_parser()
        .parse_str(&generate_transcript(10_000))
        .unwrap();
    let mut group = c.benchmark_group("output");
    group.throughput(Throughput::Elements(collection.len() as u64));
    group.bench_function("csv", |b| b.iter(|| black_box(to_csv(&collection).unwrap())));
    group.bench_function("jsonl", |b| b.iter(|| black_box(to_jsonl(&collection).unwrap())));
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_sanitize,
    bench_infer_format,
    bench_parse_transcript,
    bench_pivot,
    bench_output,
);

criterion_main!(benches);
