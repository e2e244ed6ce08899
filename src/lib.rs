//! # probkit
//!
//! CDF, quantile, density and sampling for the Beta, Gaussian and Uniform
//! distributions. Pure Rust, no-std compatible, generic over `f32`/`f64`.
//!
//! ## Quick start
//!
//! ```
//! use probkit::stats::{Beta, ContinuousDistribution, Gaussian};
//!
//! // Beta(2, 3) rescaled to [-1, 2]
//! let b = Beta::new(2.0_f64, 3.0, -1.0, 2.0).unwrap();
//! assert!((b.cdf(0.5) - 0.6875).abs() < 1e-14);
//! assert_eq!(b.cdf(-1.0), 0.0);
//! assert_eq!(b.cdf(2.0), 1.0);
//!
//! // N(1, 4)
//! let g = Gaussian::new(1.0_f64, 4.0).unwrap();
//! assert_eq!(g.quantile(0.5).unwrap(), 1.0);
//! assert_eq!(g.quantile(0.0).unwrap(), f64::NEG_INFINITY);
//! ```
//!
//! ## Modules
//!
//! - [`special`] — the numerical engines: log-beta, the regularized
//!   incomplete beta function (AS 63) and its inverse (AS 109, safeguarded
//!   Newton–Raphson), and the standard normal CDF and quantile (AS 241).
//!   Fallible engines return [`special::SpecialError`].
//!
//! - [`stats`] — distribution adapters [`Beta`](stats::Beta),
//!   [`Gaussian`](stats::Gaussian) and [`Uniform`](stats::Uniform) behind the
//!   [`ContinuousDistribution`](stats::ContinuousDistribution) trait, with
//!   slice-based batch evaluation and sampling from an explicit
//!   [`Generator`](stats::Generator).
//!
//! - [`traits`] — [`FloatScalar`], the element trait for `f32`/`f64`.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. Hardware FPU via system libm, `std::error::Error` impls |
//! | `alloc`   | via std  | `Vec`-returning batch helpers (`cdf_vec`, `quantile_vec`, …) |
//! | `rand`    | yes      | Every `rand::Rng` is a [`Generator`](stats::Generator) |
//! | `tracing` | no       | Diagnostic events from the iterative engines via `tracing` |
//! | `all`     | no       | All features: `std` + `rand` + `tracing` |
//!
//! `libm` is always linked; it supplies log-gamma and erf and is the
//! software float fallback without `std`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod special;
pub mod stats;
pub mod traits;

pub use traits::FloatScalar;
