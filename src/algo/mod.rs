//! Internal algorithm modules for Airy function computation.
//!
//! All functions are `pub(crate)`; they are not part of the public API.
//!
//! # Evaluation regimes
//!
//! - [`oscillatory`]: x < −2.09, rational minimax fits of the modulus and
//!   phase corrections in 1/ζ².
//! - [`exponential`]: x ≥ 2.09, rational minimax fits in 1/ζ for Ai, Ai'
//!   (and for Bi, Bi' once ζ > 16).
//! - [`series`]: power series in x³ for everything else.
//!
//! # Clippy suppressions
//!
//! Table-bearing modules carry `#![allow(clippy::excessive_precision)]`:
//! coefficients are transcribed with all published digits so the f64 values
//! round exactly as the published tables do.

pub(crate) mod constants;
pub(crate) mod polevl;

// Near-zero power series
pub(crate) mod series;

// Large-|x| asymptotic forms
pub(crate) mod exponential;
pub(crate) mod oscillatory;
