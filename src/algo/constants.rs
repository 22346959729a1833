//! Shared constants used by multiple algorithm modules.
//!
//! Coefficient tables remain in their respective files.

#![allow(clippy::excessive_precision)]
#![allow(clippy::approx_constant)]

/// π
pub(crate) const PI: f64 = 3.14159265358979323846;

/// 1/√π (Cephes: sqpii)
pub(crate) const SQPII: f64 = 5.64189583547756286948e-1;

/// √3
pub(crate) const SQRT3: f64 = 1.732050807568877293527;

/// Ai(0) = 3^(-2/3) / Γ(2/3)
pub(crate) const C1: f64 = 0.35502805388781723926;

/// -Ai'(0) = 3^(-1/3) / Γ(1/3)
pub(crate) const C2: f64 = 0.258819403792806798405;

/// Largest argument with representable Bi (MAXAIRY).
pub(crate) const MAXAIRY: f64 = 25.77;

/// Below this, the oscillatory asymptotic form gives all four values.
pub(crate) const OSCILLATORY_BOUND: f64 = -2.09;

/// At or above this, Ai and Ai' come from the exponential asymptotic form.
pub(crate) const EXPONENTIAL_BOUND: f64 = 2.09;

/// Above this, ζ = (2/3)x^(3/2) > 16 and Bi, Bi' come from the asymptotic
/// form too. Exact crossing is 24^(2/3) = 8.320335292...
pub(crate) const BI_ASYMPTOTIC_BOUND: f64 = 8.3203353;
