//! Criterion benchmarks for the cuckoo search engine.
//!
//! Synthetic problems (Sphere, OneMax) measure engine overhead; the nurse
//! instance measures a realistic penalty-heavy fitness.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_cuckoo::cs::{CsConfig, CsRunner, LevyFlight};
use u_cuckoo::nurse::{NurseScheduling, ScheduleParams};
use u_cuckoo::random::create_rng;
use u_cuckoo::{Constraint, Problem, Solution};

// ===========================================================================
// Sphere function: maximize -sum(x_i^2) on [-5, 5]^d
// ===========================================================================

struct Sphere {
    bounds: Vec<Constraint>,
}

impl Sphere {
    fn new(dim: usize) -> Self {
        Self {
            bounds: (0..dim).map(|i| Constraint::new(i, -5.0, 5.0)).collect(),
        }
    }
}

impl Problem for Sphere {
    fn dimensionality(&self) -> usize {
        self.bounds.len()
    }

    fn constraints(&self) -> &[Constraint] {
        &self.bounds
    }

    fn fitness(&self, solution: &Solution) -> f64 {
        -solution.vector().iter().map(|x| x * x).sum::<f64>()
    }
}

// ===========================================================================
// OneMax: maximize the number of ones
// ===========================================================================

struct OneMax {
    n: usize,
}

impl Problem for OneMax {
    fn dimensionality(&self) -> usize {
        self.n
    }

    fn fitness(&self, solution: &Solution) -> f64 {
        solution.count_ones() as f64
    }
}

fn nurse_instance() -> NurseScheduling {
    let row = |first: i64| -> Vec<i64> { (0..12).map(|i| (first - 1 + i) % 4 + 1).collect() };
    NurseScheduling::new(
        ScheduleParams::new(3, 3, 4, 5),
        vec![vec![1, 1, 1, 0]; 3],
        vec![row(1), row(4), row(3)],
    )
    .expect("benchmark instance is valid")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_levy_sample(c: &mut Criterion) {
    let levy = LevyFlight::new(1.5);
    let mut rng = create_rng(42);
    c.bench_function("levy_sample_1000", |b| {
        b.iter(|| black_box(levy.sample_vec(1000, &mut rng)))
    });
}

fn bench_cs_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("cs_sphere");
    group.sample_size(10);

    for (dim, nests, iters) in [(10usize, 25usize, 200usize), (50, 25, 100), (100, 50, 50)] {
        let problem = Sphere::new(dim);
        let config = CsConfig::default()
            .with_population_size(nests)
            .with_max_iterations(iters)
            .with_clamp_to_bounds(true)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("d{}_n{}_i{}", dim, nests, iters), dim),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = CsRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_cs_onemax(c: &mut Criterion) {
    let mut group = c.benchmark_group("cs_onemax");
    group.sample_size(10);

    for &n in &[20, 50, 100] {
        let problem = OneMax { n };
        let config = CsConfig::default().with_max_iterations(100).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(problem, config), |b, (p, c)| {
            b.iter(|| {
                let result = CsRunner::run(black_box(p), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_cs_nurse(c: &mut Criterion) {
    let problem = nurse_instance();
    let config = CsConfig::default()
        .with_max_iterations(100)
        .with_clamp_to_bounds(true)
        .with_seed(42);
    let mut group = c.benchmark_group("cs_nurse");
    group.sample_size(10);
    group.bench_function("3x3x4", |b| {
        b.iter(|| black_box(CsRunner::run(black_box(&problem), black_box(&config))))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_levy_sample,
    bench_cs_sphere,
    bench_cs_onemax,
    bench_cs_nurse
);
criterion_main!(benches);
