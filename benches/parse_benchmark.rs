//! Parsing throughput benchmarks.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use apexlog::parser::{group_entries, parse_log, tokenize_line};
use apexlog::report::{summary, LogMeta, LogReport};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Event line templates cycled to build a synthetic log.
const TEMPLATES: &[&str] = &[
    "USER_DEBUG|[{n}]|DEBUG|Starting step {n}",
    "USER_DEBUG|[{n}]|ERROR|Exception in step {n}",
    "STATEMENT_EXECUTE|[{n}]",
    "SOQL_EXECUTE_BEGIN|[{n}]|Aggregations:0|SELECT Id, Name FROM Account WHERE Id = :id",
    "SOQL_EXECUTE_END|[{n}]|Rows:{n}",
    "DML_BEGIN|[{n}]|Op:Update|Type:Contact|Rows:1",
    "HEAP_ALLOCATE|[{n}]|Bytes:{n}",
    "CODE_UNIT_STARTED|[EXTERNAL]|__sfdc_trigger/AccountTrigger",
    "METHOD_ENTRY|[{n}]|01p000000000001|AccountService.process()",
    "VALIDATION_RULE|03d00000000000{d}|Require_Field_{d}",
    "CALLOUT_REQUEST|[{n}]|System.HttpRequest[Endpoint=https://example.com]",
    "SYSTEM_MODE_ENTER|false",
];

/// Generate a debug log with `lines` event lines after the header.
fn generate_log(lines: usize) -> String {
    let mut log = String::from("64.0 APEX_CODE,FINEST;APEX_PROFILING,INFO;DB,INFO\n");
    for i in 0..lines {
        let template = TEMPLATES[i % TEMPLATES.len()];
        let body = template
            .replace("{n}", &(i % 500).to_string())
            .replace("{d}", &(i % 10).to_string());
        let ms = i % 1000;
        let secs = (i / 1000) % 60;
        log.push_str(&format!("09:15:{secs:02}.{ms:03} ({})|{body}\n", 1_000 + i * 100));
    }
    log
}

fn benchmark_parse(c: &mut Criterion) {
    let small = generate_log(1_000);
    let large = generate_log(100_000);
    println!("Generated log: {} bytes", large.len());

    c.bench_function("parse_log_1k_lines", |b| {
        b.iter(|| black_box(parse_log(black_box(&small))))
    });

    c.bench_function("parse_log_100k_lines", |b| {
        b.iter(|| black_box(parse_log(black_box(&large))))
    });

    c.bench_function("tokenize_100k_lines", |b| {
        b.iter(|| {
            let entries = large
                .lines()
                .enumerate()
                .filter_map(|(i, line)| tokenize_line(line, i + 1))
                .count();
            black_box(entries)
        })
    });

    let debug_entries: Vec<_> = large
        .lines()
        .enumerate()
        .filter_map(|(i, line)| tokenize_line(line, i + 1))
        .filter(|e| e.event_identifier() == "USER_DEBUG")
        .collect();

    c.bench_function("group_user_debug", |b| {
        b.iter(|| black_box(group_entries("USER_DEBUG", black_box(debug_entries.clone()))))
    });
}

fn benchmark_report(c: &mut Criterion) {
    let parsed = parse_log(&generate_log(100_000));
    let meta = LogMeta::default();

    c.bench_function("summary_100k_lines", |b| {
        b.iter(|| black_box(summary(black_box(&parsed))))
    });

    c.bench_function("json_report_100k_lines", |b| {
        b.iter(|| black_box(LogReport::from_parsed(black_box(&parsed), &meta).to_json()))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(std::time::Duration::from_secs(10));
    targets = benchmark_parse, benchmark_report
}

criterion_main!(benches);
