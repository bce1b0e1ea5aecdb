//! Benchmarks for analysis, layout and PDF rendering.
//!
//! Run with: cargo bench

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use portrait::{CompanyInfo, Portrait, SegmentOptions, SubjectProfile};

fn profile() -> SubjectProfile {
    SubjectProfile::new(
        "Jean Dupont",
        "jean@example.com",
        "Finance",
        "Directeur financier",
        "Devenir CFO",
    )
}

/// Markdown body with all seven headings.
fn structured_text() -> String {
    portrait::templates::fallback_content(&profile(), &CompanyInfo::default(), "01/01/2025")
}

/// Headingless prose of roughly `len` characters.
fn wall_of_text(len: usize) -> String {
    "La transformation numérique du secteur financier ouvre de nouvelles perspectives. "
        .repeat(len / 80 + 1)
        .chars()
        .take(len)
        .collect()
}

/// Benchmark segmentation of structured and headingless input.
fn bench_analysis(c: &mut Criterion) {
    let options = SegmentOptions::default();
    let structured = structured_text();
    let wall = wall_of_text(20_000);

    c.bench_function("analyze_structured", |b| {
        b.iter(|| portrait::analyze(black_box(&structured), &options).unwrap());
    });

    c.bench_function("analyze_forced", |b| {
        b.iter(|| portrait::analyze(black_box(&wall), &options).unwrap());
    });
}

/// Benchmark pagination at various body sizes.
fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let portrait = Portrait::new().with_generated_at(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    let profile = profile();

    for len in [2_000, 20_000, 100_000].iter() {
        let text = wall_of_text(*len);
        group.bench_function(format!("{}_chars", len), |b| {
            b.iter(|| portrait.layout(black_box(&text), &profile).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the full path to PDF bytes.
fn bench_pdf(c: &mut Criterion) {
    let portrait = Portrait::new();
    let profile = profile();
    let text = structured_text();

    c.bench_function("generate_pdf", |b| {
        b.iter(|| portrait.generate(black_box(&text), &profile).unwrap());
    });
}

criterion_group!(benches, bench_analysis, bench_layout, bench_pdf);
criterion_main!(benches);
