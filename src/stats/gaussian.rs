use crate::FloatScalar;
use crate::special::{ndtr, ndtri};
use super::{ContinuousDistribution, Generator, StatsError};

/// Gaussian (normal) distribution N(μ, σ²).
///
/// A zero variance is allowed and gives the point mass at μ: the CDF is the
/// unit step at μ and every quantile in (0, 1) is μ.
///
/// # Example
///
/// ```
/// use probkit::stats::{Gaussian, ContinuousDistribution};
///
/// let g = Gaussian::new(0.0_f64, 1.0).unwrap();
/// assert_eq!(g.cdf(0.0), 0.5);
/// assert!((g.quantile(0.975).unwrap() - 1.959963984540054).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Gaussian<T> {
    mu: T,
    variance: T,
    sigma: T,
}

impl<T: FloatScalar> Gaussian<T> {
    /// Create a Gaussian distribution with mean `mu` and variance `variance`.
    ///
    /// Requires `variance ≥ 0`; both parameters finite.
    pub fn new(mu: T, variance: T) -> Result<Self, StatsError> {
        if !(mu.is_finite() && variance.is_finite() && variance >= T::zero()) {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self {
            mu,
            variance,
            sigma: variance.sqrt(),
        })
    }

    /// Create a Gaussian distribution from its standard deviation `sigma ≥ 0`.
    pub fn from_std_dev(mu: T, sigma: T) -> Result<Self, StatsError> {
        if !(sigma.is_finite() && sigma >= T::zero()) {
            return Err(StatsError::InvalidParameter);
        }
        Self::new(mu, sigma * sigma)
    }

    /// The standard normal N(0, 1).
    pub fn standard() -> Self {
        Self {
            mu: T::zero(),
            variance: T::one(),
            sigma: T::one(),
        }
    }

    /// Standard deviation σ.
    pub fn std_dev(&self) -> T {
        self.sigma
    }

    #[inline]
    fn is_degenerate(&self) -> bool {
        self.sigma == T::zero()
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Gaussian<T> {
    fn pdf(&self, x: T) -> T {
        if self.is_degenerate() {
            return if x == self.mu { T::infinity() } else { T::zero() };
        }
        let two = T::one() + T::one();
        let pi = T::from(core::f64::consts::PI).unwrap();
        let z = (x - self.mu) / self.sigma;
        (-(z * z) / two).exp() / (self.sigma * (two * pi).sqrt())
    }

    fn ln_pdf(&self, x: T) -> T {
        if self.is_degenerate() {
            return if x == self.mu { T::infinity() } else { T::neg_infinity() };
        }
        let two = T::one() + T::one();
        let pi = T::from(core::f64::consts::PI).unwrap();
        let z = (x - self.mu) / self.sigma;
        -self.sigma.ln() - (two * pi).ln() / two - z * z / two
    }

    fn cdf(&self, x: T) -> T {
        if self.is_degenerate() {
            return if x < self.mu { T::zero() } else { T::one() };
        }
        ndtr((x - self.mu) / self.sigma)
    }

    fn quantile(&self, p: T) -> Result<T, StatsError> {
        let z = ndtri(p);
        if self.is_degenerate() {
            // 0·∞ would be NaN at the endpoints
            return Ok(if z.is_finite() { self.mu } else { z });
        }
        Ok(self.mu + self.sigma * z)
    }

    fn mean(&self) -> T {
        self.mu
    }

    fn variance(&self) -> T {
        self.variance
    }

    fn sample<G: Generator<T> + ?Sized>(&self, rng: &mut G) -> Result<T, StatsError> {
        Ok(self.mu + self.sigma * rng.standard_normal())
    }
}
