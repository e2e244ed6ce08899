use core::fmt::Debug;
use num_traits::Float;

/// Trait for the floating-point types the numerical engines operate on.
///
/// Blanket arithmetic comes from [`Float`]; the extra methods are the
/// transcendental primitives that `core` does not provide and that the
/// engines treat as external building blocks. Both are backed by `libm`,
/// so they behave identically with and without `std`.
///
/// Implemented for `f32` and `f64`.
pub trait FloatScalar: Float + Debug + Send + Sync + 'static {
    /// Natural logarithm of |Γ(x)|.
    fn ln_gamma(self) -> Self;

    /// Error function erf(x).
    fn erf(self) -> Self;

    /// Complementary error function 1 − erf(x), accurate in the upper tail.
    fn erfc(self) -> Self;
}

macro_rules! impl_float_scalar {
    ($t:ty, $lgamma:path, $erf:path, $erfc:path) => {
        impl FloatScalar for $t {
            #[inline]
            fn ln_gamma(self) -> $t {
                $lgamma(self)
            }

            #[inline]
            fn erf(self) -> $t {
                $erf(self)
            }

            #[inline]
            fn erfc(self) -> $t {
                $erfc(self)
            }
        }
    };
}

impl_float_scalar!(f32, libm::lgammaf, libm::erff, libm::erfcf);
impl_float_scalar!(f64, libm::lgamma, libm::erf, libm::erfc);
