//! Airy functions Ai(x), Bi(x) and their derivatives for real x.
//!
//! Regime selection over three evaluation methods:
//!
//! | x                     | Ai, Ai'             | Bi, Bi'             |
//! |-----------------------|---------------------|---------------------|
//! | x > 25.77             | 0 (saturated)       | MAXNUM (saturated)  |
//! | 8.3203353 < x ≤ 25.77 | exponential form    | exponential form    |
//! | 2.09 ≤ x ≤ 8.3203353  | exponential form    | power series        |
//! | −2.09 ≤ x < 2.09      | power series        | power series        |
//! | x < −2.09             | oscillatory form    | oscillatory form    |
//!
//! Accuracy (absolute when |f| ≤ 1, relative otherwise): about 2e-15 for
//! x in [−10, 0] and 2.3e-14 for Ai, Ai' in [0, 10]. For large negative x the
//! absolute error grows like (−x)^(3/2); for large positive x the relative
//! error grows at the same rate.

use crate::algo::constants::{
    BI_ASYMPTOTIC_BOUND, C1, C2, EXPONENTIAL_BOUND, MAXAIRY, OSCILLATORY_BOUND, SQRT3,
};
use crate::algo::exponential::Exponential;
use crate::algo::oscillatory::airy_oscillatory;
use crate::algo::series::{derivative_series, value_series, SeriesSum, MAX_SERIES_TERMS};
use crate::machine::AiryFloat;
use crate::types::{AiryResult, AiryValues, Computed, Status};

/// Compute Ai(x), Ai'(x), Bi(x) and Bi'(x).
///
/// All four values are returned on every call. Beyond the overflow bound
/// they are saturated to `(0, 0, MAXNUM, MAXNUM)` with [`Status::Overflow`].
/// NaN propagates to all four values with [`Status::Normal`].
pub(crate) fn airy_real<T: AiryFloat>(x: T) -> AiryResult<T> {
    if x > T::from_f64(MAXAIRY) {
        return AiryResult {
            values: AiryValues::saturated(),
            status: Status::Overflow,
        };
    }

    if x < T::from_f64(OSCILLATORY_BOUND) {
        return AiryResult {
            values: airy_oscillatory(x),
            status: Status::Normal,
        };
    }

    let zero = T::zero();
    let mut out = AiryValues {
        ai: zero,
        ai_prime: zero,
        bi: zero,
        bi_prime: zero,
    };
    let mut done = Computed::NONE;

    if x >= T::from_f64(EXPONENTIAL_BOUND) {
        let exp = Exponential::new(x);
        (out.ai, out.ai_prime) = exp.ai_pair();
        done |= Computed::AI | Computed::AI_PRIME;

        if x > T::from_f64(BI_ASYMPTOTIC_BOUND) {
            (out.bi, out.bi_prime) = exp.bi_pair();
            return AiryResult {
                values: out,
                status: Status::Normal,
            };
        }
    }

    fill_from_series(x, done, &mut out);
    AiryResult {
        values: out,
        status: Status::Normal,
    }
}

/// Write every output not in `done` from the near-zero power series.
fn fill_from_series<T: AiryFloat>(x: T, done: Computed, out: &mut AiryValues<T>) {
    let c1 = T::from_f64(C1);
    let c2 = T::from_f64(C2);
    let sqrt3 = T::from_f64(SQRT3);
    let z = x * x * x;

    let s = value_series(x, z, MAX_SERIES_TERMS);
    check_convergence(x, &s);
    if !done.contains(Computed::AI) {
        out.ai = s.ai_combination(c1, c2);
    }
    if !done.contains(Computed::BI) {
        out.bi = s.bi_combination(c1, c2, sqrt3);
    }

    let d = derivative_series(x, z, MAX_SERIES_TERMS);
    check_convergence(x, &d);
    if !done.contains(Computed::AI_PRIME) {
        out.ai_prime = d.ai_combination(c1, c2);
    }
    if !done.contains(Computed::BI_PRIME) {
        out.bi_prime = d.bi_combination(c1, c2, sqrt3);
    }
}

/// Report a series that hit its term cap.
///
/// Cannot happen for arguments the dispatcher routes to the series; the
/// truncated sums are still used.
#[inline]
fn check_convergence<T: AiryFloat>(x: T, s: &SeriesSum<T>) {
    if !s.converged {
        log::error!(
            "airy power series stopped after {} terms without converging (x = {:?})",
            s.terms,
            x
        );
    }
}
