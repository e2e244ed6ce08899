//! Source of random variates for sampling.

#[cfg(feature = "rand")]
use crate::traits::FloatScalar;

/// A stateful source of uniform and standard-normal variates.
///
/// Distributions never own or seed a generator; callers pass one to
/// [`sample`](super::ContinuousDistribution::sample), so reproducibility is a
/// matter of seeding the generator they hand in.
///
/// With the `rand` feature every [`rand::Rng`] implements this trait.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "rand")] {
/// use rand::{rngs::StdRng, SeedableRng};
/// use probkit::stats::{ContinuousDistribution, Gaussian};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let g = Gaussian::new(10.0_f64, 4.0).unwrap();
/// let x = g.sample(&mut rng).unwrap();
/// assert!(x.is_finite());
/// # }
/// ```
pub trait Generator<T> {
    /// Uniform variate on [0, 1).
    fn uniform(&mut self) -> T;
    /// Standard normal variate N(0, 1).
    fn standard_normal(&mut self) -> T;
}

#[cfg(feature = "rand")]
impl<T: FloatScalar, R: rand::Rng + ?Sized> Generator<T> for R {
    #[inline]
    fn uniform(&mut self) -> T {
        // narrowing to f32 may round up to 1
        let u = T::from(self.random::<f64>()).unwrap();
        u.min(T::one() - T::epsilon())
    }

    /// Box–Muller, cosine branch.
    fn standard_normal(&mut self) -> T {
        // U1 > 0 keeps ln finite
        let u1 = self.random::<f64>().max(f64::MIN_POSITIVE);
        let u2 = self.random::<f64>();
        let r = libm::sqrt(-2.0 * libm::log(u1));
        T::from(r * libm::cos(core::f64::consts::TAU * u2)).unwrap()
    }
}
