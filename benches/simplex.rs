use criterion::Criterion;
use kinetic_fit::NelderMead;
use std::hint::black_box;

fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| (1.0 - w[0]).powi(2) + 100.0 * (w[1] - w[0].powi(2)).powi(2))
        .sum()
}

pub fn bench_simplex(c: &mut Criterion) {
    const DIMS: [usize; 3] = [2, 4, 8];

    for &n in DIMS.iter() {
        let start = vec![-1.2; n];
        let minimizer = NelderMead::new(Some(2000 * n), 1e-8, 1e-10);
        c.bench_function(format!("Nelder-Mead Rosenbrock {n}D").as_str(), |b| {
            b.iter(|| minimizer.minimize(&rosenbrock, black_box(&start)))
        });
    }
}
