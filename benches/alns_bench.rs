//! Criterion benchmarks for the ALNS engine.
//!
//! Uses a synthetic Sphere problem with cheap operators so the numbers
//! reflect engine overhead (selection, classification, statistics) rather
//! than operator work.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::Rng;
use u_alns::accept::{HillClimbing, SimulatedAnnealing};
use u_alns::select::{RouletteConfig, RouletteWheel};
use u_alns::stop::MaxIterations;
use u_alns::{Alns, AlnsConfig, Operator, State};

// ===========================================================================
// Sphere function: minimize sum(x_i^2)
// ===========================================================================

#[derive(Clone)]
struct Point {
    coords: Vec<Option<f64>>,
}

impl State for Point {
    fn objective(&self) -> f64 {
        self.coords.iter().flatten().map(|x| x * x).sum()
    }

    fn assigned(&self) -> Option<usize> {
        Some(self.coords.iter().filter(|c| c.is_some()).count())
    }
}

/// Clears a random block of coordinates.
struct BlockDestroy {
    size: usize,
}

impl Operator<Point, StdRng> for BlockDestroy {
    fn name(&self) -> &str {
        "block"
    }

    fn apply(&self, state: &Point, rng: &mut StdRng, _options: &()) -> Point {
        let mut out = state.clone();
        let n = out.coords.len();
        let start = rng.random_range(0..n);
        for i in 0..self.size.min(n) {
            out.coords[(start + i) % n] = None;
        }
        out
    }
}

/// Refills cleared coordinates with a shrunken random value.
struct ShrinkRepair;

impl Operator<Point, StdRng> for ShrinkRepair {
    fn name(&self) -> &str {
        "shrink"
    }

    fn apply(&self, state: &Point, rng: &mut StdRng, _options: &()) -> Point {
        let mut out = state.clone();
        for c in out.coords.iter_mut().filter(|c| c.is_none()) {
            *c = Some(rng.random_range(-1.0..1.0));
        }
        out
    }
}

fn engine(dim: usize) -> Alns<Point> {
    let mut alns = Alns::from_config(AlnsConfig::default().with_seed(42).with_log_interval(0));
    alns.add_destroy_operator(BlockDestroy { size: 1 });
    alns.add_destroy_operator_named(BlockDestroy { size: dim / 4 + 1 }, "block_wide");
    alns.add_repair_operator(ShrinkRepair);
    alns
}

fn initial(dim: usize) -> Point {
    Point {
        coords: vec![Some(5.0); dim],
    }
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_alns_hill_climbing(c: &mut Criterion) {
    let mut group = c.benchmark_group("alns_hill_climbing");
    group.sample_size(10);

    for &dim in &[10usize, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(dim), &dim, |b, &dim| {
            b.iter(|| {
                let mut alns = engine(dim);
                let mut select = RouletteWheel::new(2, 1, &RouletteConfig::default()).unwrap();
                let result = alns.iterate(
                    black_box(initial(dim)),
                    &mut select,
                    &mut HillClimbing,
                    &mut MaxIterations::new(1000),
                    &(),
                );
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_alns_annealing(c: &mut Criterion) {
    let mut group = c.benchmark_group("alns_annealing");
    group.sample_size(10);

    for &iters in &[1000usize, 5000] {
        group.bench_with_input(BenchmarkId::from_parameter(iters), &iters, |b, &iters| {
            b.iter(|| {
                let mut alns = engine(50);
                let config = RouletteConfig::default().with_segment_length(50);
                let mut select = RouletteWheel::new(2, 1, &config).unwrap();
                let mut accept = SimulatedAnnealing::new(10.0, 0.999, 0.01).unwrap();
                let result = alns.iterate(
                    black_box(initial(50)),
                    &mut select,
                    &mut accept,
                    &mut MaxIterations::new(iters),
                    &(),
                );
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_alns_hill_climbing, bench_alns_annealing);
criterion_main!(benches);
