use criterion::{criterion_group, criterion_main, Criterion};
use qljson::{normalize, parse, Document, ParseContext};
use std::hint::black_box;

/// A config-shaped document with comments, nesting and escapes.
fn sample(entries: usize) -> String {
    let mut src = String::from("{\n  // generated benchmark input\n  services: [\n");
    for i in 0..entries {
        src.push_str(&format!(
            "    {{ name: \"svc-{i}\", port: {port}, weight: {i}.5, tags: [\"a\", \"b\\tc\"], // entry {i}\n      env: {{ debug: false, path: \"C:\\\\srv\\\\{i}\" }} }},\n",
            port = 8000 + i
        ));
    }
    src.push_str("    null\n  ]\n}\n");
    src
}

fn benchmark_normalize(c: &mut Criterion) {
    let src = sample(200);
    c.bench_function("normalize of 200 entries", |b| {
        b.iter(|| normalize(black_box(&src)))
    });
}

fn benchmark_parse(c: &mut Criterion) {
    let src = sample(200);
    let ctx = ParseContext::default();
    c.bench_function("parse of 200 entries", |b| {
        b.iter(|| parse(black_box(&src), &ctx))
    });
}

fn benchmark_path_lookup(c: &mut Criterion) {
    let doc = Document::parse(&sample(200)).unwrap();
    c.bench_function("get of deep path", |b| {
        b.iter(|| doc.get(black_box("services.150.env.path")).is_null())
    });
}

criterion_group!(
    benches,
    benchmark_normalize,
    benchmark_parse,
    benchmark_path_lookup
);
criterion_main!(benches);
