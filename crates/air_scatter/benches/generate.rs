use std::hint::black_box;

use air_scatter::land::{Geometry, LandIndex, Position};
use air_scatter::scatter::{generate, Region};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const COUNTS: [usize; 3] = [100, 1_000, 5_000];

fn square(min_lng: f64, min_lat: f64, size: f64) -> Geometry {
    let ring: Vec<Position> = vec![
        [min_lng, min_lat],
        [min_lng + size, min_lat],
        [min_lng + size, min_lat + size],
        [min_lng, min_lat + size],
        [min_lng, min_lat],
    ];
    Geometry::Polygon(vec![ring])
}

fn patchwork_land() -> LandIndex {
    // A grid of land squares covering about a quarter of the sampling area.
    let mut geometries = Vec::new();
    for i in 0..8 {
        for j in 0..8 {
            geometries.push(square(
                -160.0 + f64::from(i) * 40.0,
                -60.0 + f64::from(j) * 15.0,
                10.0,
            ));
        }
    }
    LandIndex::from_geometries(geometries)
}

fn generate_unconstrained(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate/unconstrained");

    for &count in &COUNTS {
        let regions = vec![Region::new("bench", 20.0, 0.0, 40.0, 120.0, count)];
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let result = generate(&regions, 20_260_226, None);
                black_box(result.records.len());
            });
        });
    }

    group.finish();
}

fn generate_land_constrained(c: &mut Criterion) {
    let land = patchwork_land();
    let mut group = c.benchmark_group("generate/land_constrained");

    for &count in &COUNTS {
        let regions = vec![Region::new("bench", 0.0, 0.0, 60.0, 160.0, count)];
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let result = generate(&regions, 20_260_226, Some(&land));
                black_box(result.records.len());
            });
        });
    }

    group.finish();
}

fn land_index_contains(c: &mut Criterion) {
    let land = patchwork_land();
    let mut group = c.benchmark_group("land/contains");

    group.bench_function("sweep", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for i in 0..1_000 {
                let lng = -170.0 + f64::from(i) * 0.34;
                let lat = -55.0 + f64::from(i % 100) * 1.1;
                if land.contains(lng, lat) {
                    hits += 1;
                }
            }
            black_box(hits);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    generate_unconstrained,
    generate_land_constrained,
    land_index_contains
);
criterion_main!(benches);
