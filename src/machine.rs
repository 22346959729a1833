//! Machine constants and the `AiryFloat` trait.
//!
//! Constants follow the Cephes MACHEP/MAXNUM conventions.

use num_traits::Float;

/// Floating-point trait for Airy function computation.
///
/// Implemented for `f64` and `f32`. Provides the machine constants used by
/// the power-series termination test and the overflow saturation value.
pub trait AiryFloat: Float + core::fmt::Debug + 'static {
    /// Unit roundoff, 2^-p for a p-bit significand (MACHEP).
    ///
    /// The near-zero power series stops once the newest term is no larger
    /// than this fraction of the partial sum.
    const MACHEP: Self;
    /// Largest finite value (MAXNUM), reported as Bi and Bi' on overflow.
    const MAXNUM: Self;

    /// Infallible conversion from f64.
    ///
    /// For f64 this is the identity, so every coefficient reaches the f64
    /// evaluator unchanged; for f32 it rounds via `as f32`.
    fn from_f64(x: f64) -> Self;
}

#[allow(clippy::excessive_precision)]
impl AiryFloat for f64 {
    const MACHEP: f64 = 1.11022302462515654042e-16; // 2**-53
    const MAXNUM: f64 = 1.79769313486231570815e308; // 2**1024*(1-MACHEP)

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }
}

#[allow(clippy::excessive_precision)]
impl AiryFloat for f32 {
    const MACHEP: f32 = 5.9604644775390625e-8; // 2**-24
    const MAXNUM: f32 = 3.40282346638528859812e38; // 2**128*(1-MACHEP)

    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }
}
