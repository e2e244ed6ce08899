use crate::FloatScalar;
use crate::special::{betainc_with_lbeta, betaincinv_with_lbeta, lbeta, BetaIncInvSettings};
use super::{xlogy, ContinuousDistribution, StatsError};

/// Beta distribution with shape parameters α, β, rescaled to [a, b].
///
/// f(x) = y^{α−1} (1−y)^{β−1} / (B(α, β)·(b − a)), y = (x − a)/(b − a), for a ≤ x ≤ b.
///
/// ln B(α, β) is computed once at construction and reused by every
/// CDF and quantile evaluation.
///
/// # Example
///
/// ```
/// use probkit::stats::{Beta, ContinuousDistribution};
///
/// let b = Beta::new(1.0_f64, 2.0, 3.0, 4.0).unwrap();
/// let median = b.quantile(0.5).unwrap();
/// assert!((median - 3.292893218813452).abs() < 1e-12);
/// assert!((b.cdf(median) - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Beta<T> {
    alpha: T,
    beta: T,
    a: T,
    b: T,
    ln_beta: T,
    settings: BetaIncInvSettings,
}

impl<T: FloatScalar> Beta<T> {
    /// Create a Beta distribution with shapes `alpha`, `beta` on `[a, b]`.
    ///
    /// Requires `alpha > 0`, `beta > 0`, all parameters finite, and `a < b`.
    pub fn new(alpha: T, beta: T, a: T, b: T) -> Result<Self, StatsError> {
        let zero = T::zero();
        if !(alpha > zero && alpha.is_finite() && beta > zero && beta.is_finite()) {
            return Err(StatsError::InvalidParameter);
        }
        if !(a.is_finite() && b.is_finite() && a < b) {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self {
            alpha,
            beta,
            a,
            b,
            ln_beta: lbeta(alpha, beta),
            settings: BetaIncInvSettings::default(),
        })
    }

    /// Beta distribution on the unit interval.
    pub fn standard(alpha: T, beta: T) -> Result<Self, StatsError> {
        Self::new(alpha, beta, T::zero(), T::one())
    }

    /// Replace the settings used by [`quantile`](ContinuousDistribution::quantile).
    pub fn with_settings(mut self, settings: BetaIncInvSettings) -> Self {
        self.settings = settings;
        self
    }

    /// First shape parameter α.
    pub fn alpha(&self) -> T {
        self.alpha
    }

    /// Second shape parameter β.
    pub fn beta(&self) -> T {
        self.beta
    }

    /// Support `(a, b)`.
    pub fn support(&self) -> (T, T) {
        (self.a, self.b)
    }

    /// Cached ln B(α, β).
    pub fn ln_beta(&self) -> T {
        self.ln_beta
    }

    /// CDF that reports a failed series instead of returning NaN.
    pub fn try_cdf(&self, x: T) -> Result<T, StatsError> {
        let y = (x - self.a) / self.width();
        Ok(betainc_with_lbeta(self.alpha, self.beta, y, self.ln_beta)?)
    }

    #[inline]
    fn width(&self) -> T {
        self.b - self.a
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Beta<T> {
    fn pdf(&self, x: T) -> T {
        if x < self.a || x > self.b {
            return T::zero();
        }
        self.ln_pdf(x).exp()
    }

    fn ln_pdf(&self, x: T) -> T {
        if x < self.a || x > self.b {
            return T::neg_infinity();
        }
        let one = T::one();
        let y = (x - self.a) / self.width();
        xlogy(self.alpha - one, y) + xlogy(self.beta - one, one - y)
            - self.ln_beta
            - self.width().ln()
    }

    fn cdf(&self, x: T) -> T {
        self.try_cdf(x).unwrap_or(T::nan())
    }

    fn quantile(&self, p: T) -> Result<T, StatsError> {
        let y = betaincinv_with_lbeta(self.alpha, self.beta, p, self.ln_beta, &self.settings)?;
        if y.is_nan() {
            return Ok(y);
        }
        Ok((self.width() * y + self.a).max(self.a).min(self.b))
    }

    fn mean(&self) -> T {
        self.a + self.width() * self.alpha / (self.alpha + self.beta)
    }

    fn variance(&self) -> T {
        let ab = self.alpha + self.beta;
        let w = self.width();
        w * w * self.alpha * self.beta / (ab * ab * (ab + T::one()))
    }
}
