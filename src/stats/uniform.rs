use crate::FloatScalar;
use super::{ContinuousDistribution, StatsError};

/// Continuous uniform distribution on [a, b].
///
/// # Example
///
/// ```
/// use probkit::stats::{Uniform, ContinuousDistribution};
///
/// let u = Uniform::new(2.0_f64, 6.0).unwrap();
/// assert_eq!(u.pdf(3.0), 0.25);
/// assert_eq!(u.cdf(3.0), 0.25);
/// assert_eq!(u.quantile(0.25).unwrap(), 3.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Uniform<T> {
    a: T,
    b: T,
}

impl<T: FloatScalar> Uniform<T> {
    /// Create a uniform distribution on [a, b]. Requires finite `a < b`.
    pub fn new(a: T, b: T) -> Result<Self, StatsError> {
        if !(a.is_finite() && b.is_finite() && a < b) {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self { a, b })
    }

    /// Support `(a, b)`.
    pub fn support(&self) -> (T, T) {
        (self.a, self.b)
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Uniform<T> {
    fn pdf(&self, x: T) -> T {
        if x >= self.a && x <= self.b {
            T::one() / (self.b - self.a)
        } else {
            T::zero()
        }
    }

    fn ln_pdf(&self, x: T) -> T {
        if x >= self.a && x <= self.b {
            -((self.b - self.a).ln())
        } else {
            T::neg_infinity()
        }
    }

    fn cdf(&self, x: T) -> T {
        if x <= self.a {
            T::zero()
        } else if x >= self.b {
            T::one()
        } else {
            (x - self.a) / (self.b - self.a)
        }
    }

    /// Affine map of `p`, clamped to the support for `p` outside [0, 1].
    fn quantile(&self, p: T) -> Result<T, StatsError> {
        if p.is_nan() {
            return Ok(p);
        }
        if p <= T::zero() {
            return Ok(self.a);
        }
        if p >= T::one() {
            return Ok(self.b);
        }
        Ok((self.a + p * (self.b - self.a)).min(self.b))
    }

    fn mean(&self) -> T {
        let two = T::one() + T::one();
        (self.a + self.b) / two
    }

    fn variance(&self) -> T {
        let twelve = T::from(12.0).unwrap();
        let d = self.b - self.a;
        d * d / twelve
    }
}
