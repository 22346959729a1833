//! Asymptotic form of Ai, Bi and their derivatives for x ≥ 2.09.
//!
//! With ζ = (2/3)x^(3/2):
//!
//! ```text
//! Ai(x)  = e^(−ζ) / (2√π x^(1/4)) · A(1/ζ)
//! Ai'(x) = −x^(1/4) e^(−ζ) / (2√π) · A'(1/ζ)
//! Bi(x)  = e^ζ / (√π x^(1/4)) · (1 + B(1/ζ)/ζ)      ζ > 16 only
//! Bi'(x) = x^(1/4) e^ζ / √π · (1 + B'(1/ζ)/ζ)       ζ > 16 only
//! ```
//!
//! A, A' are ratios of degree-7 minimax polynomials; B, B' are degree 4/5
//! fits valid for ζ > 16 (Cephes `airy`). Below that the dispatcher takes
//! Bi and Bi' from the power series instead.

// Minimax tables are exact published values; preserve verbatim.
#![allow(clippy::excessive_precision)]

use crate::algo::constants::SQPII;
use crate::algo::polevl::{p1evl, polevl};
use crate::machine::AiryFloat;

/// A(1/ζ) numerator.
#[rustfmt::skip]
const AN: [f64; 8] = [
    3.46538101525629032477e-1,
    1.20075952739645805542e1,
    7.62796053615234516538e1,
    1.68089224934630576269e2,
    1.59756391350164413639e2,
    7.05360906840444183113e1,
    1.40264691163389668864e1,
    9.99999999999999995305e-1,
];
/// A(1/ζ) denominator.
#[rustfmt::skip]
const AD: [f64; 8] = [
    5.67594532638770212846e-1,
    1.47562562584847203173e1,
    8.45138970141474626562e1,
    1.77318088145400459522e2,
    1.64234692871529701831e2,
    7.14778400825575695274e1,
    1.40959135607834029598e1,
    1.00000000000000000470e0,
];

/// A'(1/ζ) numerator.
#[rustfmt::skip]
const APN: [f64; 8] = [
    6.13759184814035759225e-1,
    1.47454670787755323881e1,
    8.20584123476060982430e1,
    1.71184781360976385540e2,
    1.59317847137141783523e2,
    6.99778599330103016170e1,
    1.39470856980481566958e1,
    1.00000000000000000550e0,
];
/// A'(1/ζ) denominator.
#[rustfmt::skip]
const APD: [f64; 8] = [
    3.34203677749736953049e-1,
    1.11810297306158156705e1,
    7.11727352147859965283e1,
    1.58778084372838313640e2,
    1.53206427475809220834e2,
    6.86752304592780337944e1,
    1.38498634758259442477e1,
    9.99999999999999994502e-1,
];

/// B(1/ζ) numerator, ζ > 16.
#[rustfmt::skip]
const BN16: [f64; 5] = [
    -2.53240795869364152689e-1,
     5.75285167332467384228e-1,
    -3.29907036873225371650e-1,
     6.44404068948199951727e-2,
    -3.82519546641336734394e-3,
];
/// B(1/ζ) denominator (implicit leading 1).
#[rustfmt::skip]
const BD16: [f64; 5] = [
    -7.15685095054035237902e0,
     1.06039580715664694291e1,
    -5.23246636471251500874e0,
     9.57395864378383833152e-1,
    -5.50828147163549611107e-2,
];

/// B'(1/ζ) numerator, ζ > 16.
#[rustfmt::skip]
const BPPN: [f64; 5] = [
     4.65461162774651610328e-1,
    -1.08992173800493920734e0,
     6.38800117371827987759e-1,
    -1.26844349553102907034e-1,
     7.62487844342109852105e-3,
];
/// B'(1/ζ) denominator (implicit leading 1).
#[rustfmt::skip]
const BPPD: [f64; 5] = [
    -8.70622787633159124240e0,
     1.38993162704553213172e1,
    -7.14116144616431159572e0,
     1.34008595960680518666e0,
    -7.84273211323341930448e-2,
];

/// Quantities shared by the Ai and Bi asymptotic forms at one argument.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Exponential<T> {
    /// x^(1/4)
    quarter: T,
    /// e^ζ
    growth: T,
    /// 1/ζ
    inv_zeta: T,
}

impl<T: AiryFloat> Exponential<T> {
    pub(crate) fn new(x: T) -> Self {
        let t = x.sqrt();
        let zeta = T::from_f64(2.0) * x * t / T::from_f64(3.0);
        Exponential {
            quarter: t.sqrt(),
            growth: zeta.exp(),
            inv_zeta: T::one() / zeta,
        }
    }

    /// (Ai(x), Ai'(x)).
    pub(crate) fn ai_pair(&self) -> (T, T) {
        let sqpii = T::from_f64(SQPII);
        let (t, g, z) = (self.quarter, self.growth, self.inv_zeta);

        let k = T::from_f64(2.0) * t * g;
        let f = polevl(z, &AN) / polevl(z, &AD);
        let ai = sqpii * f / k;

        let k = T::from_f64(-0.5) * sqpii * t / g;
        let f = polevl(z, &APN) / polevl(z, &APD);
        (ai, f * k)
    }

    /// (Bi(x), Bi'(x)). Accurate only for ζ > 16.
    pub(crate) fn bi_pair(&self) -> (T, T) {
        let one = T::one();
        let (t, g, z) = (self.quarter, self.growth, self.inv_zeta);

        let k = T::from_f64(SQPII) * g;
        let f = z * polevl(z, &BN16) / p1evl(z, &BD16);
        let bi = k * (one + f) / t;

        let f = z * polevl(z, &BPPN) / p1evl(z, &BPPD);
        (bi, k * t * (one + f))
    }
}
