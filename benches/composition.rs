//! Composition and export micro-benchmarks
//!
//! Measures how document composition scales with catalog size and layout.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use flyer::{CatalogSettings, CatalogSnapshot, LayoutMode, LayoutOption, PipelineBuilder, Product};
use std::hint::black_box;
use tokio::runtime::Runtime;

fn catalog(count: usize, layout: LayoutOption) -> CatalogSnapshot {
    let products = (0..count)
        .map(|i| {
            Product::new(i, format!("Produto {}", i), "19,90", "14,90")
                .with_image(format!("https://cdn.example/p{}.png", i))
        })
        .collect();
    let mut settings = CatalogSettings {
        mode: LayoutMode::NamedLayout { layout },
        ..Default::default()
    };
    settings.footer.website = Some("mercado.example".to_string());
    settings.footer.instagram = Some("@mercado".to_string());
    settings.footer.qr_code_link = Some("https://mercado.example/ofertas".to_string());
    CatalogSnapshot::new(products, settings)
}

fn benchmark_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let pipeline = PipelineBuilder::new().build().expect("Failed to build pipeline");

    for count in [12, 120, 1200] {
        let snapshot = catalog(count, LayoutOption::Grid4x3);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("products", count), &snapshot, |b, snapshot| {
            b.iter(|| black_box(pipeline.compose(snapshot)));
        });
    }
    group.finish();
}

fn benchmark_layouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose_layouts");
    let pipeline = PipelineBuilder::new().build().expect("Failed to build pipeline");

    for layout in LayoutOption::ALL {
        let snapshot = catalog(96, layout);
        group.bench_with_input(BenchmarkId::new("layout", layout), &snapshot, |b, snapshot| {
            b.iter(|| black_box(pipeline.compose(snapshot)));
        });
    }
    group.finish();
}

fn benchmark_async_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_json");
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let pipeline = PipelineBuilder::new().build().expect("Failed to build pipeline");

    for count in [12, 120] {
        let snapshot = catalog(count, LayoutOption::Grid3x3);
        group.bench_with_input(BenchmarkId::new("products", count), &snapshot, |b, snapshot| {
            b.iter(|| {
                rt.block_on(async {
                    pipeline
                        .export(snapshot.clone(), Vec::new())
                        .await
                        .expect("Failed to export")
                })
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_compose, benchmark_layouts, benchmark_async_export);
criterion_main!(benches);
