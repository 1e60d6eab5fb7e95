use cg_setops::PI;
use cg_setops::compact::minimum_bounding_circle;
use cg_setops::geometry::primitives::{Chain, Point};
use cg_setops::set_ops::{Geometry, intersects};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

criterion_main!(benches);
criterion_group!(benches, chain_intersects_bench, mbc_bench);

const N_VERTICES: [usize; 3] = [10, 100, 1000];

fn random_walk(rng: &mut SmallRng, n_vertices: usize, origin: Point) -> Chain {
    let mut vertices = Vec::with_capacity(n_vertices);
    let mut current = origin;
    for _ in 0..n_vertices {
        vertices.push(current);
        current = Point(
            current.0 + rng.random_range(-1.0..1.0),
            current.1 + rng.random_range(-1.0..1.0),
        );
    }
    Chain::from_vertices(vertices).expect("random walk has at least 2 vertices")
}

/// Pairwise intersection test of two random-walk chains sharing their bounding region
fn chain_intersects_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_intersects");
    for n_vertices in N_VERTICES {
        let mut rng = SmallRng::seed_from_u64(0);
        let a = Geometry::from(random_walk(&mut rng, n_vertices, Point(0.0, 0.0)));
        let b = Geometry::from(random_walk(&mut rng, n_vertices, Point(50.0, 50.0)));

        group.bench_function(BenchmarkId::from_parameter(n_vertices), |bencher| {
            bencher.iter(|| intersects(&a, &b).expect("chains are supported"))
        });
    }
    group.finish();
}

/// Minimum bounding circle of points scattered over a disc
fn mbc_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimum_bounding_circle");
    for n_points in N_VERTICES {
        let mut rng = SmallRng::seed_from_u64(0);
        let points = (0..n_points)
            .map(|_| {
                let (r, theta): (f64, f64) =
                    (rng.random_range(0.0..10.0), rng.random_range(0.0..2.0 * PI));
                Point(r * theta.cos(), r * theta.sin())
            })
            .collect::<Vec<_>>();

        group.bench_function(BenchmarkId::from_parameter(n_points), |bencher| {
            bencher.iter(|| minimum_bounding_circle(&points))
        });
    }
    group.finish();
}
