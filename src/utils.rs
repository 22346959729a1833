//! Small complex arithmetic helpers.

use num_complex::Complex;

use crate::machine::AiryFloat;

/// Multiply a complex number by i: (a+bi)·i = -b+ai.
///
/// Exact: only swaps components and flips one sign.
#[inline]
pub(crate) fn mul_i<T: AiryFloat>(c: Complex<T>) -> Complex<T> {
    Complex::new(-c.im, c.re)
}

/// Unit phasor sin θ + i·cos θ.
///
/// Both components come straight from `sin`/`cos`, not from `exp(iθ)`, so
/// they carry no extra rounding.
#[inline]
pub(crate) fn sin_cos_phasor<T: AiryFloat>(theta: T) -> Complex<T> {
    Complex::new(theta.sin(), theta.cos())
}
