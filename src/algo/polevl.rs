//! Horner evaluation of polynomials stored as f64 coefficient tables.
//!
//! Tables are ordered highest degree first. Evaluation is a plain
//! multiply-then-add per coefficient, never a fused multiply-add, so f64
//! results round exactly as the Cephes `polevl`/`p1evl` pair does.

use crate::machine::AiryFloat;

/// Evaluate `coef[0]·x^n + coef[1]·x^(n-1) + … + coef[n]` with n = `coef.len() - 1`.
///
/// An empty table is the zero polynomial.
#[inline]
pub(crate) fn polevl<T: AiryFloat>(x: T, coef: &[f64]) -> T {
    let Some((&first, rest)) = coef.split_first() else {
        return T::zero();
    };
    rest.iter()
        .fold(T::from_f64(first), |acc, &c| acc * x + T::from_f64(c))
}

/// Evaluate `x^n + coef[0]·x^(n-1) + … + coef[n-1]` with n = `coef.len()`.
///
/// The leading coefficient is an implicit 1.0; minimax denominators are
/// normalized that way and the tables omit it.
#[inline]
pub(crate) fn p1evl<T: AiryFloat>(x: T, coef: &[f64]) -> T {
    coef.iter().fold(T::one(), |acc, &c| acc * x + T::from_f64(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polevl_constant() {
        assert_eq!(polevl(123.0_f64, &[4.5]), 4.5);
    }

    #[test]
    fn polevl_empty_is_zero() {
        assert_eq!(polevl(3.0_f64, &[]), 0.0);
    }

    #[test]
    fn polevl_quadratic() {
        // 2x² - 3x + 1 at x = 4 → 32 - 12 + 1 = 21
        assert_eq!(polevl(4.0_f64, &[2.0, -3.0, 1.0]), 21.0);
        // roots at 1/2 and 1
        assert_eq!(polevl(0.5_f64, &[2.0, -3.0, 1.0]), 0.0);
        assert_eq!(polevl(1.0_f64, &[2.0, -3.0, 1.0]), 0.0);
    }

    #[test]
    fn polevl_highest_degree_first() {
        // x³ at x = 2 is 8; reversed table would give 1
        assert_eq!(polevl(2.0_f64, &[1.0, 0.0, 0.0, 0.0]), 8.0);
        assert_eq!(polevl(2.0_f64, &[0.0, 0.0, 0.0, 1.0]), 1.0);
    }

    #[test]
    fn p1evl_empty_is_one() {
        assert_eq!(p1evl(7.0_f64, &[]), 1.0);
    }

    #[test]
    fn p1evl_has_implicit_leading_one() {
        // x² + 2x + 3 at x = 5 → 25 + 10 + 3 = 38
        assert_eq!(p1evl(5.0_f64, &[2.0, 3.0]), 38.0);
        assert_eq!(p1evl(5.0_f64, &[2.0, 3.0]), polevl(5.0_f64, &[1.0, 2.0, 3.0]));
    }

    #[test]
    fn p1evl_matches_polevl_bitwise() {
        // 1·x is exact, so prepending 1.0 must not change a single bit
        let coef = [
            -7.15685095054035237902e0,
            1.06039580715664694291e1,
            -5.23246636471251500874e0,
            9.57395864378383833152e-1,
            -5.50828147163549611107e-2,
        ];
        let mut full = [1.0; 6];
        full[1..].copy_from_slice(&coef);
        for &x in &[0.0625_f64, 0.1, 1.0 / 3.0, 0.47] {
            assert_eq!(p1evl(x, &coef).to_bits(), polevl(x, &full).to_bits());
        }
    }

    #[test]
    fn polevl_f32() {
        let v: f32 = polevl(0.5_f32, &[2.0, -3.0, 1.0]);
        assert_eq!(v, 0.0);
        let v: f32 = p1evl(2.0_f32, &[0.0, -4.0]);
        assert_eq!(v, 0.0);
    }
}
