//! Power series for Ai, Bi and their derivatives near the origin.
//!
//! With z = x³, the two solutions of y'' = xy are combined from
//!
//! ```text
//! f(x) = Σ 3^k (1/3)_k z^k / (3k)!       g(x) = Σ 3^k (2/3)_k z^k x / (3k+1)!
//! ```
//!
//! as Ai = c1·f − c2·g and Bi = √3·(c1·f + c2·g), with c1 = Ai(0) and
//! c2 = −Ai'(0). The derivative series are f' and g', combined the same way.
//! Both sums accumulate terms by running products of consecutive integers,
//! so each new term costs a handful of multiplies and divides.

use crate::machine::AiryFloat;

/// Hard cap on series terms.
///
/// Every argument the dispatcher sends here (|x| ≤ 8.33, z ≤ 576) converges
/// in about 30 terms.
pub(crate) const MAX_SERIES_TERMS: usize = 200;

/// Partial sums of one pair of series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SeriesSum<T> {
    /// Sum feeding the c1 term.
    pub(crate) f: T,
    /// Sum feeding the c2 term.
    pub(crate) g: T,
    /// Terms added after the leading ones.
    pub(crate) terms: usize,
    /// `false` if the cap was reached before the termination test passed.
    pub(crate) converged: bool,
}

impl<T: AiryFloat> SeriesSum<T> {
    /// c1·f − c2·g, the Ai-type combination.
    #[inline]
    pub(crate) fn ai_combination(&self, c1: T, c2: T) -> T {
        c1 * self.f - c2 * self.g
    }

    /// √3·(c1·f + c2·g), the Bi-type combination.
    #[inline]
    pub(crate) fn bi_combination(&self, c1: T, c2: T, sqrt3: T) -> T {
        sqrt3 * (c1 * self.f + c2 * self.g)
    }
}

/// Sum f(x) and g(x) for Ai(x) and Bi(x), given `z = x³`.
///
/// Terminates when the newest term of f is at most MACHEP relative to the
/// partial sum, or after `max_terms` terms.
pub(crate) fn value_series<T: AiryFloat>(x: T, z: T, max_terms: usize) -> SeriesSum<T> {
    let one = T::one();
    let eps = T::MACHEP;

    let mut f = one;
    let mut g = x;
    let mut uf = one;
    let mut ug = x;
    let mut k = one;
    let mut t = one;
    let mut terms = 0;

    while t > eps {
        if terms == max_terms {
            return SeriesSum { f, g, terms, converged: false };
        }
        // uf ← uf·z/((k+1)(k+2)), ug ← ug·z/((k+2)(k+3))
        uf = uf * z;
        k = k + one;
        uf = uf / k;
        ug = ug * z;
        k = k + one;
        ug = ug / k;
        uf = uf / k;
        f = f + uf;
        k = k + one;
        ug = ug / k;
        g = g + ug;
        t = (uf / f).abs();
        terms += 1;
    }

    SeriesSum { f, g, terms, converged: true }
}

/// Sum f'(x) and g'(x) for Ai'(x) and Bi'(x), given `z = x³`.
///
/// Terminates when the newest term of g' is at most MACHEP relative to the
/// partial sum, or after `max_terms` terms.
pub(crate) fn derivative_series<T: AiryFloat>(x: T, z: T, max_terms: usize) -> SeriesSum<T> {
    let one = T::one();
    let eps = T::MACHEP;

    let mut k = T::from_f64(4.0);
    let mut uf = x * x / T::from_f64(2.0);
    let mut ug = z / T::from_f64(3.0);
    let mut f = uf;
    let mut g = one + ug;
    uf = uf / T::from_f64(3.0);
    let mut t = one;
    let mut terms = 0;

    while t > eps {
        if terms == max_terms {
            return SeriesSum { f, g, terms, converged: false };
        }
        uf = uf * z;
        ug = ug / k;
        k = k + one;
        ug = ug * z;
        uf = uf / k;
        f = f + uf;
        k = k + one;
        ug = ug / k;
        uf = uf / k;
        g = g + ug;
        k = k + one;
        t = (ug / g).abs();
        terms += 1;
    }

    SeriesSum { f, g, terms, converged: true }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::constants::{C1, C2, SQRT3};

    #[test]
    fn value_series_at_origin() {
        let s = value_series(0.0_f64, 0.0, MAX_SERIES_TERMS);
        assert!(s.converged);
        assert_eq!(s.f, 1.0);
        assert_eq!(s.g, 0.0);
        assert_eq!(s.ai_combination(C1, C2), C1);
        assert_eq!(s.bi_combination(C1, C2, SQRT3), SQRT3 * C1);
    }

    #[test]
    fn derivative_series_at_origin() {
        let s = derivative_series(0.0_f64, 0.0, MAX_SERIES_TERMS);
        assert!(s.converged);
        assert_eq!(s.f, 0.0);
        assert_eq!(s.g, 1.0);
        assert_eq!(s.ai_combination(C1, C2), -C2);
        assert_eq!(s.bi_combination(C1, C2, SQRT3), SQRT3 * C2);
    }

    #[test]
    fn value_series_leading_terms() {
        // f = 1 + z/6 + z²/180 + z³/12960 + …
        // g = x(1 + z/12 + z²/504 + z³/45360 + …)
        let x = 0.1_f64;
        let z = x * x * x;
        let s = value_series(x, z, MAX_SERIES_TERMS);
        assert!(s.converged);
        let f = 1.0 + z / 6.0 + z * z / 180.0 + z * z * z / 12960.0;
        let g = x * (1.0 + z / 12.0 + z * z / 504.0 + z * z * z / 45360.0);
        assert!((s.f - f).abs() < 1e-15);
        assert!((s.g - g).abs() < 1e-16);
    }

    #[test]
    fn series_reproduce_ai_bi_at_one() {
        // mpmath: Ai(1), Ai'(1), Bi(1), Bi'(1)
        let x = 1.0_f64;
        let s = value_series(x, x * x * x, MAX_SERIES_TERMS);
        let d = derivative_series(x, x * x * x, MAX_SERIES_TERMS);
        assert!(s.converged && d.converged);
        assert!((s.ai_combination(C1, C2) - 1.35292416312881414e-01).abs() < 1e-15);
        assert!((s.bi_combination(C1, C2, SQRT3) - 1.20742359495287133e+00).abs() < 1e-15);
        assert!((d.ai_combination(C1, C2) - (-1.59147441296793202e-01)).abs() < 1e-15);
        assert!((d.bi_combination(C1, C2, SQRT3) - 9.32435933392775640e-01).abs() < 1e-15);
    }

    #[test]
    fn series_negative_argument() {
        // mpmath: Ai(-2), Bi(-2); alternating series with cancellation
        let x = -2.0_f64;
        let s = value_series(x, x * x * x, MAX_SERIES_TERMS);
        assert!(s.converged);
        assert!((s.ai_combination(C1, C2) - 2.27407428201685575e-01).abs() < 1e-15);
        assert!((s.bi_combination(C1, C2, SQRT3) - (-4.12302587956398510e-01)).abs() < 1e-15);
    }

    #[test]
    fn series_converge_well_below_cap() {
        // Worst case the dispatcher can send: just under the Bi asymptotic bound
        let x = 8.3203353_f64;
        let z = x * x * x;
        let s = value_series(x, z, MAX_SERIES_TERMS);
        let d = derivative_series(x, z, MAX_SERIES_TERMS);
        assert!(s.converged && d.converged);
        assert!(s.terms < 40, "value series took {} terms", s.terms);
        assert!(d.terms < 40, "derivative series took {} terms", d.terms);
    }

    #[test]
    fn series_report_cap_exhaustion() {
        let x = 5.0_f64;
        let z = x * x * x;
        let s = value_series(x, z, 2);
        assert!(!s.converged);
        assert_eq!(s.terms, 2);
        assert!(s.f.is_finite() && s.g.is_finite());

        let d = derivative_series(x, z, 2);
        assert!(!d.converged);
        assert_eq!(d.terms, 2);
    }

    #[test]
    fn nan_argument_stops_after_one_term() {
        let s = value_series(f64::NAN, f64::NAN, MAX_SERIES_TERMS);
        assert!(s.converged);
        assert_eq!(s.terms, 1);
        assert!(s.f.is_nan());

        let d = derivative_series(f64::NAN, f64::NAN, MAX_SERIES_TERMS);
        assert!(d.converged);
        assert_eq!(d.terms, 1);
        assert!(d.g.is_nan());
    }

    #[test]
    fn series_f32() {
        let x = 0.5_f32;
        let s = value_series(x, x * x * x, MAX_SERIES_TERMS);
        assert!(s.converged);
        let ai = s.ai_combination(C1 as f32, C2 as f32);
        assert!((ai - 0.23169361_f32).abs() < 1e-6);
    }
}
