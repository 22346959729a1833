//! Asymptotic form of Ai, Bi and their derivatives for x < −2.09.
//!
//! With ζ = (2/3)(−x)^(3/2) and θ = ζ + π/4, the oscillatory solutions are
//!
//! ```text
//! Ai + i·Bi   =  (−x)^(-1/4)/√π · (sin θ + i·cos θ)·(F(ζ) + i·G(ζ))
//! Ai' + i·Bi' =  (−x)^(1/4)/√π  · i·(sin θ + i·cos θ)·(F'(ζ) + i·G'(ζ))
//! ```
//!
//! where the modulus factors F = 1 + O(ζ⁻²), G = O(ζ⁻¹) and their derivative
//! counterparts are rational minimax fits in 1/ζ² (Cephes `airy`).

// Minimax tables are exact published values; preserve verbatim.
#![allow(clippy::excessive_precision)]

use num_complex::Complex;

use crate::algo::constants::{PI, SQPII};
use crate::algo::polevl::{p1evl, polevl};
use crate::machine::AiryFloat;
use crate::types::AiryValues;
use crate::utils::{mul_i, sin_cos_phasor};

/// F(ζ) − 1 numerator, in zz = 1/ζ², after one factor of zz.
#[rustfmt::skip]
const AFN: [f64; 9] = [
    -1.31696323418331795333e-1,
    -6.26456544431912369773e-1,
    -6.93158036036933542233e-1,
    -2.79779981545119124951e-1,
    -4.91900132609500318020e-2,
    -4.06265923594885404393e-3,
    -1.59276496239262096340e-4,
    -2.77649108155232920844e-6,
    -1.67787698489114633780e-8,
];
/// F(ζ) − 1 denominator (implicit leading 1).
#[rustfmt::skip]
const AFD: [f64; 9] = [
     1.33560420706553243746e1,
     3.26825032795224613948e1,
     2.67367040941499554804e1,
     9.18707402907259625840e0,
     1.47529146771666414581e0,
     1.15687173795188044134e-1,
     4.40291641615211203805e-3,
     7.54720348287414296618e-5,
     4.51850092970580378464e-7,
];

/// G(ζ)·ζ numerator, in zz = 1/ζ².
#[rustfmt::skip]
const AGN: [f64; 11] = [
     1.97339932091685679179e-2,
     3.91103029615688277255e-1,
     1.06579897599595591108e0,
     9.39169229816650230044e-1,
     3.51465656105547619242e-1,
     6.33888919628925490927e-2,
     5.85804113048388458567e-3,
     2.82851600836737019778e-4,
     6.98793669997260967291e-6,
     8.11789239554389293311e-8,
     3.41551784765923618484e-10,
];
/// G(ζ)·ζ denominator (implicit leading 1).
#[rustfmt::skip]
const AGD: [f64; 10] = [
     9.30892908077441974853e0,
     1.98352928718312140417e1,
     1.55646628932864612953e1,
     5.47686069422975497931e0,
     9.54293611618961883998e-1,
     8.64580826352392193095e-2,
     4.12656523824222607191e-3,
     1.01259085116509135510e-4,
     1.17166733214413521882e-6,
     4.91834570062930015649e-9,
];

/// F'(ζ) − 1 numerator, in zz = 1/ζ², after one factor of zz.
#[rustfmt::skip]
const APFN: [f64; 9] = [
     1.85365624022535566142e-1,
     8.86712188052584095637e-1,
     9.87391981747398547272e-1,
     4.01241082318003734092e-1,
     7.10304926289631174579e-2,
     5.90618657995661810071e-3,
     2.33051409401776799569e-4,
     4.08718778289035454598e-6,
     2.48379932900442457853e-8,
];
/// F'(ζ) − 1 denominator (implicit leading 1).
#[rustfmt::skip]
const APFD: [f64; 9] = [
     1.47345854687502542552e1,
     3.75423933435489594466e1,
     3.14657751203046424330e1,
     1.09969125207298778536e1,
     1.78885054766999417817e0,
     1.41733275753662636873e-1,
     5.44066067017226003627e-3,
     9.39421290654511171663e-5,
     5.65978713036027009243e-7,
];

/// G'(ζ)·ζ numerator, in zz = 1/ζ².
#[rustfmt::skip]
const APGN: [f64; 11] = [
    -3.55615429033082288335e-2,
    -6.37311518129435504426e-1,
    -1.70856738884312371053e0,
    -1.50221872117316635393e0,
    -5.63606665822102676611e-1,
    -1.02101031120216891789e-1,
    -9.48396695961445269093e-3,
    -4.60325307486780994357e-4,
    -1.14300836484517375919e-5,
    -1.33415518685547420648e-7,
    -5.63803833958893494476e-10,
];
/// G'(ζ)·ζ denominator (implicit leading 1).
#[rustfmt::skip]
const APGD: [f64; 10] = [
     9.85865801696130355144e0,
     2.16401867356585941885e1,
     1.73130776389749389525e1,
     6.17872175280828766327e0,
     1.08848694396321495475e0,
     9.95005543440888479402e-2,
     4.78468199683886610842e-3,
     1.18159633322838625562e-4,
     1.37480673554219441465e-6,
     5.79912514929147598821e-9,
];

/// Modulus factors F + i·G for one pair of tables.
#[inline]
fn modulus<T: AiryFloat>(
    z: T,
    zz: T,
    fnum: &[f64],
    fden: &[f64],
    gnum: &[f64],
    gden: &[f64],
) -> Complex<T> {
    let uf = T::one() + zz * polevl(zz, fnum) / p1evl(zz, fden);
    let ug = z * polevl(zz, gnum) / p1evl(zz, gden);
    Complex::new(uf, ug)
}

/// Compute all four Airy values for x < −2.09.
///
/// Self-contained: the near-zero series is never consulted on this side.
pub(crate) fn airy_oscillatory<T: AiryFloat>(x: T) -> AiryValues<T> {
    let sqpii = T::from_f64(SQPII);

    let t = (-x).sqrt();
    let zeta = T::from_f64(-2.0) * x * t / T::from_f64(3.0);
    let t = t.sqrt();
    let z = T::one() / zeta;
    let zz = z * z;

    let theta = zeta + T::from_f64(0.25) * T::from_f64(PI);
    let phase = sin_cos_phasor(theta);

    // Ai + i·Bi
    let k = sqpii / t;
    let w = phase * modulus(z, zz, &AFN, &AFD, &AGN, &AGD) * k;

    // Ai' + i·Bi'
    let k = sqpii * t;
    let wp = mul_i(phase * modulus(z, zz, &APFN, &APFD, &APGN, &APGD)) * k;

    AiryValues {
        ai: w.re,
        ai_prime: wp.re,
        bi: w.im,
        bi_prime: wp.im,
    }
}
