extern crate criterion;

use criterion::{criterion_group, criterion_main, Criterion};

use cssscope_lib::transform;

fn bench_large_stylesheet(c: &mut Criterion) {
    let mut big_css = String::with_capacity(4_000_000);
    for i in 0..50_000 {
        big_css.push_str(&format!(".card-{i}, .card-{i}:hover {{\n  color: red;\n}}\n"));
    }

    c.bench_function("large_stylesheet", |b| {
        b.iter(|| transform(&big_css, ".dashboard"))
    });
}

fn bench_media_heavy(c: &mut Criterion) {
    let mut media_css = String::new();
    for i in 0..10_000 {
        media_css.push_str(&format!(
            "@media (min-width: {i}px) {{\n  .col-{i} {{\n    width: 100%;\n  }}\n}}\n"
        ));
    }

    c.bench_function("media_heavy", |b| {
        b.iter(|| transform(&media_css, ".dashboard"))
    });
}

criterion_group!(benches, bench_large_stylesheet, bench_media_heavy);
criterion_main!(benches);
