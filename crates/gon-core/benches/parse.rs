use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gon_core::{load_from_buffer, to_json, tokenize};

const SETTINGS: &str = r#"
# window settings
window {
    title "Main Window"
    size [1280 720]
    position { x 100 y 80 }
    fullscreen false
}
audio { volume 0.8 muted false devices ["default" "hdmi"] }
"#;

/// A document with `n` entries in a top-level array of small objects.
fn records(n: usize) -> String {
    let mut out = String::from("records [\n");
    for i in 0..n {
        out.push_str(&format!(
            "  {{ id {i} name \"user {i}\" score {}.5 active {} }}\n",
            i % 100,
            i % 2 == 0
        ));
    }
    out.push_str("]\n");
    out
}

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_settings", |b| b.iter(|| tokenize(black_box(SETTINGS))));
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_settings", |b| {
        b.iter(|| load_from_buffer(black_box(SETTINGS)))
    });

    let mut group = c.benchmark_group("parse_records");
    for size in [10, 100, 1000] {
        let source = records(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, s| {
            b.iter(|| load_from_buffer(black_box(s)))
        });
    }
    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let Ok(doc) = load_from_buffer(&records(100)) else {
        return;
    };

    c.bench_function("to_text_records_100", |b| b.iter(|| black_box(&doc).to_text()));
    c.bench_function("to_json_records_100", |b| {
        b.iter(|| to_json(&black_box(&doc).root()))
    });
}

criterion_group!(benches, bench_tokenize, bench_parse, bench_serialize);
criterion_main!(benches);
