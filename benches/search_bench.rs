use std::hint::black_box;

use apex_sphere::{Catalog, CatalogItem, extract_keywords, score_item, search};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Sample catalog repeated until it holds `size` items.
fn scaled_catalog(size: usize) -> Vec<CatalogItem> {
    let sample = Catalog::sample();
    (0..size)
        .map(|i| {
            let mut item = sample[i % sample.len()].clone();
            item.id = i as u64 + 1;
            item
        })
        .collect()
}

fn bench_extract_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_keywords");
    for query in [
        "black jeans for tall people",
        "Ich suche eine schwarze Jeans für große Menschen",
        "шукаю чорні джинси для високих",
    ] {
        group.throughput(Throughput::Bytes(query.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, q| {
            b.iter(|| extract_keywords(black_box(q)))
        });
    }
    group.finish();
}

fn bench_score_item(c: &mut Criterion) {
    let catalog = Catalog::sample();
    let keywords = extract_keywords("black jeans for tall people");
    c.bench_function("score_item", |b| {
        b.iter(|| score_item(black_box(&catalog[0]), black_box(&keywords)))
    });
}

fn bench_search_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_scaling");
    for size in [3usize, 100, 1_000, 10_000] {
        let catalog = scaled_catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| search(black_box("black jeans for tall people"), catalog, 5))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_extract_keywords,
    bench_score_item,
    bench_search_scaling
);
criterion_main!(benches);
