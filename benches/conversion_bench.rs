//! Conversion performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use twconv::*;

fn bench_example_conversion(c: &mut Criterion) {
    c.bench_function("example_conversion", |b| {
        b.iter(|| convert(black_box(EXAMPLE_CSS)))
    });
}

fn bench_off_scale_conversion(c: &mut Criterion) {
    let content = ".card {
  margin: 0 auto 13px;
  padding: 5px 7px 9px 11px;
  border: 3px solid rgba(0,0,0,0.1);
  border-radius: 10px;
  width: 33.33%;
  line-height: 1.5;
  letter-spacing: 0.3px;
  mask-image: url(x.svg);
}";

    c.bench_function("off_scale_conversion", |b| {
        b.iter(|| convert(black_box(content)))
    });
}

fn bench_large_declaration_list(c: &mut Criterion) {
    let mut content = String::from(".large {\n");
    for i in 0..1000 {
        content.push_str(&format!("  padding: {}px {}px;\n", i % 64, (i * 3) % 97));
        content.push_str(&format!("  color: #{:06x};\n", i * 4099));
    }
    content.push('}');

    c.bench_function("large_declaration_list", |b| {
        b.iter(|| convert(black_box(&content)))
    });
}

fn bench_parse_only(c: &mut Criterion) {
    c.bench_function("parse_only", |b| {
        b.iter(|| parse(black_box(EXAMPLE_CSS)))
    });
}

criterion_group!(
    benches,
    bench_example_conversion,
    bench_off_scale_conversion,
    bench_large_declaration_list,
    bench_parse_only
);
criterion_main!(benches);
