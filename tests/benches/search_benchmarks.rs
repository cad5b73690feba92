//! # Search Benchmarks
//!
//! The list filters on every keystroke once the dropdown commits, so search
//! has to stay cheap on catalogues far larger than the demo one.
//!
//! | Operation | Collection | Target |
//! |-----------|------------|--------|
//! | `filter_items` | 10 000 | < 5ms |
//! | `suggest` (cap 5) | 10 000 | < 1ms on early matches |
//! | `highlight` | one title | < 1µs |

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bps_02_search::{filter_items, highlight, sort_newest_first, suggest, DEFAULT_SUGGESTION_CAP};
use shared_types::{Publication, PublicationId};

const TOPICS: [&str; 6] = [
    "Sensus Penduduk",
    "Statistik Harga",
    "Indikator Kesejahteraan",
    "Produk Domestik Regional Bruto",
    "Survei Angkatan Kerja",
    "Gorontalo Dalam Angka",
];

fn catalogue(size: usize) -> Vec<Publication> {
    let epoch = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    (0..size)
        .map(|i| Publication {
            id: PublicationId(i as u64 + 1),
            title: format!("{} {}", TOPICS[i % TOPICS.len()], 2000 + i % 25),
            release_date: epoch + chrono::Days::new((i * 7 % 9000) as u64),
            description: Some(format!("Publikasi nomor {i} tentang {}", TOPICS[(i + 3) % TOPICS.len()])),
            cover_url: String::new(),
        })
        .collect()
}

// ============================================================================
// FILTER / SUGGEST
// ============================================================================

fn bench_filter_and_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("bps-02-search");

    for size in [100, 1_000, 10_000] {
        let mut publications = catalogue(size);
        sort_newest_first(&mut publications);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("filter_items", size),
            &publications,
            |b, items| b.iter(|| black_box(filter_items(items, black_box("sensus")).len())),
        );
        group.bench_with_input(
            BenchmarkId::new("suggest", size),
            &publications,
            |b, items| {
                b.iter(|| black_box(suggest(items, black_box("kerja"), DEFAULT_SUGGESTION_CAP)))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("suggest_no_match", size),
            &publications,
            |b, items| {
                b.iter(|| black_box(suggest(items, black_box("zzz"), DEFAULT_SUGGESTION_CAP)))
            },
        );
    }

    group.finish();
}

// ============================================================================
// SORT / HIGHLIGHT
// ============================================================================

fn bench_sort_and_highlight(c: &mut Criterion) {
    let mut group = c.benchmark_group("bps-02-display");

    let publications = catalogue(10_000);
    group.bench_function("sort_newest_first_10k", |b| {
        b.iter_batched(
            || publications.clone(),
            |mut items| {
                sort_newest_first(&mut items);
                black_box(items)
            },
            criterion::BatchSize::LargeInput,
        )
    });

    let title = "Hasil Sensus Pertanian 2023 Tahap I: Sensus Usaha Pertanian Perorangan";
    group.bench_function("highlight_title", |b| {
        b.iter(|| black_box(highlight(black_box(title), black_box("sensus"))))
    });

    group.finish();
}

criterion_group!(benches, bench_filter_and_suggest, bench_sort_and_highlight);

criterion_main!(benches);
