//! Continuous probability distributions.
//!
//! Each distribution implements [`ContinuousDistribution`], which provides
//! per-point evaluation (`pdf`, `cdf`, `quantile`, `sample`) and slice-based
//! batch variants on top of them.
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`Beta`] | shapes α, β; interval a < b | [a, b] |
//! | [`Gaussian`] | mean μ, variance σ² | (−∞, ∞) |
//! | [`Uniform`] | lower a, upper b | [a, b] |
//!
//! Parameters are validated and fixed at construction; instances are
//! immutable `Copy` values, safe to share across threads.
//!
//! Sampling takes an explicit [`Generator`]. With the `rand` feature every
//! [`rand::Rng`] is a generator.
//!
//! # Example
//!
//! ```
//! use probkit::stats::{Beta, ContinuousDistribution};
//!
//! let b = Beta::new(2.0_f64, 3.0, -1.0, 2.0).unwrap();
//! assert!((b.cdf(0.5) - 0.6875).abs() < 1e-14);
//!
//! let x = b.quantile(0.6875).unwrap();
//! assert!((x - 0.5).abs() < 1e-9);
//! ```

mod beta_dist;
mod gaussian;
mod generator;
mod uniform;


pub use beta_dist::Beta;
pub use gaussian::Gaussian;
pub use generator::Generator;
pub use uniform::Uniform;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::special::SpecialError;
use crate::traits::FloatScalar;

/// Errors from distribution construction and evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// A parameter is out of its valid range.
    InvalidParameter,
    /// The quantile iteration did not converge within its iteration limit.
    ConvergenceFailure,
}

impl core::fmt::Display for StatsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatsError::InvalidParameter => {
                write!(f, "distribution parameter out of valid range")
            }
            StatsError::ConvergenceFailure => {
                write!(f, "quantile iteration did not converge")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

impl From<SpecialError> for StatsError {
    fn from(e: SpecialError) -> Self {
        match e {
            SpecialError::ConvergenceFailure => StatsError::ConvergenceFailure,
            SpecialError::DomainError => StatsError::InvalidParameter,
        }
    }
}

/// Trait for continuous probability distributions.
pub trait ContinuousDistribution<T: FloatScalar> {
    /// Probability density function.
    fn pdf(&self, x: T) -> T;
    /// Natural log of the probability density function.
    fn ln_pdf(&self, x: T) -> T;
    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: T) -> T;
    /// Quantile function (inverse CDF). Returns x such that P(X ≤ x) = p.
    fn quantile(&self, p: T) -> Result<T, StatsError>;
    /// Expected value E\[X\].
    fn mean(&self) -> T;
    /// Variance Var(X).
    fn variance(&self) -> T;

    /// Draw one value using `rng`.
    ///
    /// The default is inverse-transform sampling, `quantile(U)` with
    /// U uniform on [0, 1).
    fn sample<G: Generator<T> + ?Sized>(&self, rng: &mut G) -> Result<T, StatsError> {
        self.quantile(rng.uniform())
    }

    /// Evaluate the density at each point of `x` into `out`.
    ///
    /// # Panics
    ///
    /// If `x` and `out` differ in length.
    fn pdf_into(&self, x: &[T], out: &mut [T]) {
        assert_eq!(x.len(), out.len(), "input and output lengths differ");
        for (o, &xi) in out.iter_mut().zip(x) {
            *o = self.pdf(xi);
        }
    }

    /// Evaluate the CDF at each point of `x` into `out`.
    ///
    /// # Panics
    ///
    /// If `x` and `out` differ in length.
    fn cdf_into(&self, x: &[T], out: &mut [T]) {
        assert_eq!(x.len(), out.len(), "input and output lengths differ");
        for (o, &xi) in out.iter_mut().zip(x) {
            *o = self.cdf(xi);
        }
    }

    /// Evaluate the quantile at each probability of `p` into `out`.
    ///
    /// Stops at the first failing point; entries after it are left as they were.
    ///
    /// # Panics
    ///
    /// If `p` and `out` differ in length.
    fn quantile_into(&self, p: &[T], out: &mut [T]) -> Result<(), StatsError> {
        assert_eq!(p.len(), out.len(), "input and output lengths differ");
        for (o, &pi) in out.iter_mut().zip(p) {
            *o = self.quantile(pi)?;
        }
        Ok(())
    }

    /// Fill `out` with independent draws.
    fn sample_into<G: Generator<T> + ?Sized>(
        &self,
        rng: &mut G,
        out: &mut [T],
    ) -> Result<(), StatsError> {
        for o in out.iter_mut() {
            *o = self.sample(rng)?;
        }
        Ok(())
    }

    /// Density at each point of `x`.
    #[cfg(feature = "alloc")]
    fn pdf_vec(&self, x: &[T]) -> Vec<T> {
        x.iter().map(|&xi| self.pdf(xi)).collect()
    }

    /// CDF at each point of `x`.
    #[cfg(feature = "alloc")]
    fn cdf_vec(&self, x: &[T]) -> Vec<T> {
        x.iter().map(|&xi| self.cdf(xi)).collect()
    }

    /// Quantile at each probability of `p`.
    #[cfg(feature = "alloc")]
    fn quantile_vec(&self, p: &[T]) -> Result<Vec<T>, StatsError> {
        p.iter().map(|&pi| self.quantile(pi)).collect()
    }

    /// `count` independent draws.
    #[cfg(feature = "alloc")]
    fn sample_vec<G: Generator<T> + ?Sized>(
        &self,
        rng: &mut G,
        count: usize,
    ) -> Result<Vec<T>, StatsError> {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}

/// `k · ln(y)` with the convention `0 · ln(0) = 0`.
#[inline]
pub(crate) fn xlogy<T: FloatScalar>(k: T, y: T) -> T {
    if k == T::zero() {
        T::zero()
    } else {
        k * y.ln()
    }
}
