#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Throughput benchmarks for the parse / typed-read / merge-update paths.
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use quaere::{Integer, Multiple, QueryParams, Schema, Text};

const QUERY: &str = "page=3&q=rust+query+strings&tag=a&order=asc&tag=b&strict=&tag=c&offset=120";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| {
        b.iter(|| QueryParams::parse(black_box(QUERY)));
    });
}

fn bench_typed_read(c: &mut Criterion) {
    let params = QueryParams::parse(QUERY);
    let tags = Multiple::new(Text);
    c.bench_function("typed_read", |b| {
        b.iter(|| {
            let page = params.get(black_box("page"), &Integer);
            let tag = params.get(black_box("tag"), &tags);
            (page, tag)
        });
    });
}

fn bench_merge_update(c: &mut Criterion) {
    let params = QueryParams::parse(QUERY);
    let tags = Multiple::new(Text);
    let replacement: Vec<String> = (0..8).map(|i| format!("tag{i}")).collect();
    c.bench_function("merge_update", |b| {
        b.iter(|| params.set(black_box("tag"), &tags, Some(&replacement)));
    });
}

fn bench_get_obj(c: &mut Criterion) {
    let params = QueryParams::parse(QUERY);
    let schema = Schema::new()
        .field("page", Integer)
        .field("q", Text)
        .field("tag", Multiple::new(Text))
        .field("offset", Integer);
    c.bench_function("get_obj", |b| {
        b.iter(|| params.get_obj(black_box(&schema)));
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_typed_read,
    bench_merge_update,
    bench_get_obj
);
criterion_main!(benches);
