//! Beta function and log-beta via lgamma.

use crate::FloatScalar;

/// Beta function B(a, b) = Γ(a)·Γ(b) / Γ(a+b).
///
/// Computed as `exp(lbeta(a, b))` to avoid overflow for large arguments.
///
/// # Example
///
/// ```
/// use probkit::special::beta;
///
/// // B(2, 3) = 1/12
/// assert!((beta(2.0_f64, 3.0) - 1.0 / 12.0).abs() < 1e-15);
/// ```
pub fn beta<T: FloatScalar>(a: T, b: T) -> T {
    lbeta(a, b).exp()
}

/// Natural logarithm of the beta function, ln B(a, b).
///
/// `lgamma(a) + lgamma(b) − lgamma(a+b)`. Every CDF and quantile evaluation
/// of a Beta law needs this value, so distribution instances compute it once
/// at construction and pass it to [`betainc_with_lbeta`](super::betainc_with_lbeta)
/// and [`betaincinv_with_lbeta`](super::betaincinv_with_lbeta).
///
/// # Example
///
/// ```
/// use probkit::special::lbeta;
///
/// // ln B(1, 1) = 0
/// assert!(lbeta(1.0_f64, 1.0).abs() < 1e-15);
///
/// // symmetric in its arguments
/// assert_eq!(lbeta(0.25_f64, 4.0), lbeta(4.0, 0.25));
/// ```
pub fn lbeta<T: FloatScalar>(a: T, b: T) -> T {
    a.ln_gamma() + b.ln_gamma() - (a + b).ln_gamma()
}
