use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use marquee::domain::{
    catalog::{Catalog, MediaItem},
    text::truncate_to_width,
};
use marquee::infrastructure::config::Config;

/// Default catalog repeated until it holds roughly `n` items per shelf
fn large_catalog(n: usize) -> Catalog {
    let base = Config::defaults().map(|c| c.catalog).unwrap_or_default();
    let grow = |items: &[MediaItem], offset: u64| -> Vec<MediaItem> {
        (0..n)
            .filter_map(|i| {
                let item = items.get(i % items.len().max(1))?;
                let mut copy = item.clone();
                copy.id = offset + i as u64;
                copy.title = format!("{} {i}", item.title);
                Some(copy)
            })
            .collect()
    };

    Catalog {
        featured: base.featured.clone(),
        popular_movies: grow(&base.popular_movies, 1_000_000),
        popular_tv: grow(&base.popular_tv, 2_000_000),
        family: grow(&base.family, 3_000_000),
        documentary: grow(&base.documentary, 4_000_000),
    }
}

fn benchmark(c: &mut Criterion) {
    let small = Config::defaults().map(|c| c.catalog).unwrap_or_default();
    let large = large_catalog(2_500);

    c.bench_function("search-default-catalog", |b| {
        b.iter(|| small.search(black_box("dune"), black_box(50)))
    });

    c.bench_function("search-large-catalog", |b| {
        b.iter(|| large.search(black_box("blade runner"), black_box(50)))
    });

    c.bench_function("search-large-catalog-miss", |b| {
        b.iter(|| large.search(black_box("qwxz"), black_box(50)))
    });

    c.bench_function("truncate-label", |b| {
        b.iter(|| {
            truncate_to_width(
                black_box("Dune: Part Two (2024) · Movie · ★ 8.2 · 映画の題名"),
                black_box(20),
            )
        })
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
