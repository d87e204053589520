// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshkernel Contributors

//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use meshkernel::geometry::{
    compute_area_statistics, compute_area_statistics_with_workers, is_point_inside,
    recalculate_normals, subdivide,
};
use meshkernel::{Mesh, Vertex};
use nalgebra::Point3;

/// Origin-centered cube, refined `levels` times (12 * 4^levels triangles)
fn refined_cube(levels: usize) -> Mesh {
    let corners: [[f64; 3]; 8] = [
        [-1.0, -1.0, -1.0],
        [1.0, -1.0, -1.0],
        [1.0, 1.0, -1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, 1.0],
        [-1.0, 1.0, 1.0],
    ];

    let mut mesh = Mesh::new();
    for [x, y, z] in corners {
        mesh.add_vertex(Vertex::from_position(Point3::new(x, y, z)));
    }
    mesh.indices = vec![
        0, 2, 1, 0, 3, 2,
        4, 5, 6, 4, 6, 7,
        0, 1, 5, 0, 5, 4,
        3, 6, 2, 3, 7, 6,
        0, 4, 7, 0, 7, 3,
        1, 2, 6, 1, 6, 5,
    ];
    recalculate_normals(&mut mesh);

    for _ in 0..levels {
        subdivide(&mut mesh);
    }
    mesh
}

fn bench_normals(c: &mut Criterion) {
    let mut group = c.benchmark_group("normals");

    for levels in [3, 5] {
        let mut mesh = refined_cube(levels);
        group.bench_with_input(
            BenchmarkId::new("recalculate", mesh.triangle_count()),
            &levels,
            |b, _| {
                b.iter(|| recalculate_normals(black_box(&mut mesh)));
            },
        );
    }

    group.finish();
}

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for levels in [3, 5] {
        let mesh = refined_cube(levels);
        group.bench_with_input(
            BenchmarkId::new("parallel", mesh.triangle_count()),
            &mesh,
            |b, mesh| {
                b.iter(|| compute_area_statistics(black_box(mesh)));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("single_worker", mesh.triangle_count()),
            &mesh,
            |b, mesh| {
                b.iter(|| compute_area_statistics_with_workers(black_box(mesh), 1));
            },
        );
    }

    group.finish();
}

fn bench_subdivide(c: &mut Criterion) {
    let mut group = c.benchmark_group("subdivide");

    for levels in [2, 4] {
        let mesh = refined_cube(levels);
        group.bench_with_input(
            BenchmarkId::new("one_level", mesh.triangle_count()),
            &mesh,
            |b, mesh| {
                b.iter_batched(
                    || mesh.clone(),
                    |mut mesh| subdivide(&mut mesh),
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_containment(c: &mut Criterion) {
    let mut group = c.benchmark_group("containment");

    for levels in [3, 5] {
        let mesh = refined_cube(levels);
        let inside = Point3::new(0.137, 0.248, 0.361);
        group.bench_with_input(
            BenchmarkId::new("is_point_inside", mesh.triangle_count()),
            &mesh,
            |b, mesh| {
                b.iter(|| is_point_inside(black_box(mesh), black_box(&inside)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_normals,
    bench_statistics,
    bench_subdivide,
    bench_containment
);
criterion_main!(benches);
