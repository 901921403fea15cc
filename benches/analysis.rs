//! Benchmarks for tgstats extraction and aggregation.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench analysis -- tokenize`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use tgstats::Message;
use tgstats::core::output::to_json;
use tgstats::core::{Analyzer, StopWords, Tokenizer};
use tgstats::parser::{ExportParser, ParseResult, SenderState};
use tgstats::parsers::TelegramHtmlParser;

use chrono::{Duration, NaiveDate, NaiveDateTime};

// =============================================================================
// Test Data Generators
// =============================================================================

const PHRASES: &[&str] = &[
    "Привет, как дела? Что нового на работе?",
    "Смотри https://example.com/article?id=42 это интересно",
    "ахаха да, я тоже так думаю 😂",
    "Давай завтра созвонимся вечером, обсудим релиз",
    "ok see you at the meeting tomorrow",
];

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn generate_messages(count: usize) -> Vec<Message> {
    let start = base_time();
    (0..count)
        .map(|i| {
            let sender = if i % 3 == 0 { "Alice" } else { "Bob" };
            let ts = start + Duration::minutes(i as i64 * 37);
            Message::new(ts, sender, PHRASES[i % PHRASES.len()]).with_reply(i % 7 == 0)
        })
        .collect()
}

fn generate_html(count: usize) -> String {
    let start = base_time();
    let mut body = String::with_capacity(count * 400);
    for i in 0..count {
        let ts = start + Duration::minutes(i as i64 * 37);
        let from = if i % 4 == 3 {
            String::new()
        } else {
            let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
            format!(r#"<div class="from_name">{}</div>"#, sender)
        };
        body.push_str(&format!(
            r#"<div class="message default clearfix" id="message{i}"><div class="body"><div class="pull_right date details" title="{} UTC+03:00">{}</div>{from}<div class="text">{}</div></div></div>"#,
            ts.format("%d.%m.%Y %H:%M:%S"),
            ts.format("%H:%M"),
            PHRASES[i % PHRASES.len()],
        ));
        body.push('\n');
    }
    format!(
        r#"<html><body><div class="page_header"><div class="text bold">Bench Chat</div></div><div class="history">{body}</div></body></html>"#
    )
}

// =============================================================================
// Extraction Benchmarks
// =============================================================================

fn bench_html_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("html_parsing");
    let parser = TelegramHtmlParser::new();

    for size in [100_usize, 1_000, 5_000] {
        let html = generate_html(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &html, |b, html| {
            b.iter(|| {
                let mut state = SenderState::new();
                let page = parser.parse_str(black_box(html), &mut state).unwrap();
                black_box(page)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Aggregation Benchmarks
// =============================================================================

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    let tokenizer = Tokenizer::new(StopWords::russian());

    for (i, phrase) in PHRASES.iter().enumerate() {
        group.throughput(Throughput::Bytes(phrase.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(i), phrase, |b, phrase| {
            b.iter(|| black_box(tokenizer.tokenize(black_box(phrase))));
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let analyzer = Analyzer::new();

    for size in [1_000_usize, 10_000, 100_000] {
        let result = ParseResult::from_messages("Bench Chat", generate_messages(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &result, |b, result| {
            b.iter(|| black_box(analyzer.analyze(black_box(result))));
        });
    }
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let parser = TelegramHtmlParser::new();
    let analyzer = Analyzer::new();

    for size in [1_000_usize, 5_000] {
        let html = generate_html(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &html, |b, html| {
            b.iter(|| {
                // parse -> aggregate -> serialize
                let mut state = SenderState::new();
                let page = parser.parse_str(black_box(html), &mut state).unwrap();
                let result = ParseResult::from_messages("Bench Chat", page.messages);
                let stats = analyzer.analyze(&result);
                black_box(to_json(&stats).unwrap())
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_html_parsing,
    bench_tokenize,
    bench_analyze,
    bench_full_pipeline,
);

criterion_main!(benches);
