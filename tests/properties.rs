use probkit::special::{betainc, betaincinv};
use probkit::stats::{Beta, ContinuousDistribution, Gaussian, Uniform};
use proptest::prelude::*;

/// Whether `x` is the closest representable point to the root of
/// I_x(a, b) = p: the residual is below `tol`, or `p` lies between I at the
/// values adjacent to `x`.
fn is_best_representable(a: f64, b: f64, p: f64, x: f64, tol: f64) -> bool {
    let back = betainc(a, b, x).unwrap();
    if (back - p).abs() < tol {
        return true;
    }
    let below = if x > 0.0 { f64::from_bits(x.to_bits() - 1) } else { 0.0 };
    let above = if x < 1.0 { f64::from_bits(x.to_bits() + 1) } else { 1.0 };
    betainc(a, b, below).unwrap() <= p + 1e-15 && p <= betainc(a, b, above).unwrap() + 1e-15
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn beta_cdf_bounded_and_monotone(
        alpha in 0.1_f64..30.0,
        beta in 0.1_f64..30.0,
        lo in -50.0_f64..50.0,
        width in 0.01_f64..100.0,
        u in 0.0_f64..1.0,
        v in 0.0_f64..1.0,
    ) {
        let d = Beta::new(alpha, beta, lo, lo + width).unwrap();
        let (x1, x2) = if u <= v { (u, v) } else { (v, u) };
        let c1 = d.cdf(lo + x1 * width);
        let c2 = d.cdf(lo + x2 * width);
        prop_assert!((0.0..=1.0).contains(&c1));
        prop_assert!((0.0..=1.0).contains(&c2));
        prop_assert!(c1 <= c2 + 1e-14, "cdf decreased: {} > {}", c1, c2);
    }

    #[test]
    fn beta_quantile_inverts_cdf(
        alpha in 0.5_f64..20.0,
        beta in 0.5_f64..20.0,
        p in 0.001_f64..0.999,
    ) {
        let x = betaincinv(alpha, beta, p).unwrap();
        prop_assert!((0.0..=1.0).contains(&x));
        let back = betainc(alpha, beta, x).unwrap();
        prop_assert!((back - p).abs() < 1e-9, "I_x({}, {}) at x = {} gave {} for p = {}", alpha, beta, x, back, p);
    }

    #[test]
    fn beta_quantile_small_shapes(
        alpha in 0.01_f64..20.0,
        beta in 0.01_f64..20.0,
        p in 0.001_f64..0.999,
    ) {
        let x = betaincinv(alpha, beta, p).unwrap();
        prop_assert!((0.0..=1.0).contains(&x));
        prop_assert!(
            is_best_representable(alpha, beta, p, x, 1e-9),
            "Beta({}, {}) at p = {} gave x = {}", alpha, beta, p, x
        );
    }

    #[test]
    fn beta_quantile_tiny_first_shape(
        alpha in 0.01_f64..0.5,
        beta in 0.5_f64..50.0,
        p in 0.001_f64..0.5,
    ) {
        // the lower half of the law: roots are representable and often tiny
        let x = betaincinv(alpha, beta, p).unwrap();
        let back = betainc(alpha, beta, x).unwrap();
        prop_assert!((back - p).abs() <= 1e-10 * p, "x = {}, I_x = {}", x, back);
    }

    #[test]
    fn beta_reflection(
        alpha in 0.2_f64..20.0,
        beta in 0.2_f64..20.0,
        x in 0.0_f64..1.0,
    ) {
        let lhs = betainc(alpha, beta, x).unwrap();
        let rhs = 1.0 - betainc(beta, alpha, 1.0 - x).unwrap();
        prop_assert!((lhs - rhs).abs() < 1e-12);
    }

    #[test]
    fn gaussian_quantile_inverts_cdf(
        mu in -1e3_f64..1e3,
        sigma in 1e-3_f64..1e3,
        p in 1e-9_f64..(1.0 - 1e-9),
    ) {
        let g = Gaussian::from_std_dev(mu, sigma).unwrap();
        let x = g.quantile(p).unwrap();
        prop_assert!((g.cdf(x) - p).abs() < 1e-10);
    }

    #[test]
    fn uniform_quantile_in_support(
        a in -1e6_f64..1e6,
        width in 1e-3_f64..1e6,
        p in -0.5_f64..1.5,
    ) {
        let u = Uniform::new(a, a + width).unwrap();
        let x = u.quantile(p).unwrap();
        prop_assert!(x >= a && x <= a + width);
    }
}
