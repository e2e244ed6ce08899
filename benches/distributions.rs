use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use probkit::special::{betainc_with_lbeta, betaincinv_with_lbeta, lbeta, ndtri, BetaIncInvSettings};
use probkit::stats::{Beta, ContinuousDistribution, Gaussian};

// ---------------------------------------------------------------------------
// Scalar engines
// ---------------------------------------------------------------------------

fn incomplete_beta(c: &mut Criterion) {
    let mut g = c.benchmark_group("betainc");

    for &(a, b) in &[(0.5_f64, 0.5), (2.0, 3.0), (30.0, 4.0)] {
        let ln_b = lbeta(a, b);
        g.bench_function(format!("a={a},b={b}"), |bench| {
            bench.iter(|| betainc_with_lbeta(black_box(a), black_box(b), black_box(0.37), ln_b))
        });
    }

    g.finish();
}

fn incomplete_beta_inverse(c: &mut Criterion) {
    let mut g = c.benchmark_group("betaincinv");
    let settings = BetaIncInvSettings::default();

    for &(a, b) in &[(0.5_f64, 0.5), (2.0, 3.0), (30.0, 4.0)] {
        let ln_b = lbeta(a, b);
        g.bench_function(format!("a={a},b={b}"), |bench| {
            bench.iter(|| {
                betaincinv_with_lbeta(black_box(a), black_box(b), black_box(0.37), ln_b, &settings)
            })
        });
    }

    g.finish();
}

fn normal_quantile(c: &mut Criterion) {
    let mut g = c.benchmark_group("ndtri");

    // central, intermediate tail, far tail
    for &p in &[0.3_f64, 1e-6, 1e-200] {
        g.bench_function(format!("p={p:e}"), |bench| bench.iter(|| ndtri(black_box(p))));
    }

    g.finish();
}

// ---------------------------------------------------------------------------
// Batch evaluation
// ---------------------------------------------------------------------------

fn batch(c: &mut Criterion) {
    let mut g = c.benchmark_group("batch_1000");

    let xs: Vec<f64> = (0..1000).map(|i| -1.0 + 3.0 * i as f64 / 999.0).collect();
    let ps: Vec<f64> = (0..1000).map(|i| (i as f64 + 0.5) / 1000.0).collect();

    let beta = Beta::new(2.0, 3.0, -1.0, 2.0).unwrap();
    let gauss = Gaussian::new(0.0, 1.0).unwrap();

    g.bench_function("beta_cdf", |b| {
        let mut out = vec![0.0; xs.len()];
        b.iter(|| beta.cdf_into(black_box(&xs), &mut out))
    });

    g.bench_function("beta_quantile", |b| {
        let mut out = vec![0.0; ps.len()];
        b.iter(|| beta.quantile_into(black_box(&ps), &mut out))
    });

    g.bench_function("gaussian_quantile", |b| {
        let mut out = vec![0.0; ps.len()];
        b.iter(|| gauss.quantile_into(black_box(&ps), &mut out))
    });

    g.finish();
}

criterion_group!(benches, incomplete_beta, incomplete_beta_inverse, normal_quantile, batch);
criterion_main!(benches);
