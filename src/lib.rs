//! Pure Rust Airy functions of real argument.
//!
//! Computes Ai(x), Ai'(x), Bi(x) and Bi'(x), the two independent solutions of
//! y''(x) = x·y(x) and their first derivatives, after the Cephes `airy`
//! routine: power series summation for small |x| and rational minimax
//! approximations of the asymptotic expansions for large |x|.
//!
//! Generic over [`AiryFloat`], implemented for `f64` (reference accuracy,
//! bit-for-bit with the published coefficients) and `f32`.
//!
//! # Example
//!
//! ```
//! use real_airy::{airy, Status};
//!
//! let r = airy(1.0_f64);
//! assert_eq!(r.status, Status::Normal);
//! assert!((r.values.ai - 0.13529241631288141).abs() < 1e-15);
//!
//! // Bi overflows past x = 25.77: values saturate, status flags it
//! let r = airy(30.0_f64);
//! assert_eq!(r.status.code(), -1);
//! assert_eq!(r.values.bi, f64::MAX);
//! ```
//!
//! # Features
//!
//! - `std` (default): use the platform math library. Without it the crate is
//!   `no_std` and uses `libm`.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

mod airy;
mod algo;
pub mod machine;
pub mod types;
mod utils;

pub use machine::AiryFloat;
pub use types::{AiryResult, AiryValues, Error, Status};

/// All four Airy values at x, with a status flag.
///
/// Never fails: for x > 25.77 the values saturate to
/// `(0, 0, MAXNUM, MAXNUM)` and the status is [`Status::Overflow`].
#[inline]
pub fn airy<T: AiryFloat>(x: T) -> AiryResult<T> {
    airy::airy_real(x)
}

/// All four Airy values at x, or an error.
///
/// Returns [`Error::InvalidInput`] for NaN or infinite x and
/// [`Error::Overflow`] for x > 25.77.
#[inline]
pub fn try_airy<T: AiryFloat>(x: T) -> Result<AiryValues<T>, Error> {
    if !x.is_finite() {
        return Err(Error::InvalidInput);
    }
    airy::airy_real(x).into_result()
}

// ── Single-value convenience functions ──

/// Airy function of the first kind, Ai(x). Returns 0 past the overflow bound.
#[inline]
pub fn ai<T: AiryFloat>(x: T) -> T {
    airy::airy_real(x).values.ai
}

/// Derivative Ai'(x). Returns 0 past the overflow bound.
#[inline]
pub fn ai_prime<T: AiryFloat>(x: T) -> T {
    airy::airy_real(x).values.ai_prime
}

/// Airy function of the second kind, Bi(x). Returns MAXNUM past the overflow
/// bound.
#[inline]
pub fn bi<T: AiryFloat>(x: T) -> T {
    airy::airy_real(x).values.bi
}

/// Derivative Bi'(x). Returns MAXNUM past the overflow bound.
#[inline]
pub fn bi_prime<T: AiryFloat>(x: T) -> T {
    airy::airy_real(x).values.bi_prime
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convenience_functions_agree_with_airy() {
        for &x in &[-12.0_f64, -2.5, 0.0, 0.8, 3.0, 9.0] {
            let v = airy(x).values;
            assert_eq!(ai(x), v.ai);
            assert_eq!(ai_prime(x), v.ai_prime);
            assert_eq!(bi(x), v.bi);
            assert_eq!(bi_prime(x), v.bi_prime);
        }
    }

    #[test]
    fn convenience_functions_saturate() {
        assert_eq!(ai(40.0_f64), 0.0);
        assert_eq!(ai_prime(40.0_f64), 0.0);
        assert_eq!(bi(40.0_f64), f64::MAX);
        assert_eq!(bi_prime(40.0_f64), f64::MAX);
    }

    #[test]
    fn try_airy_ok() {
        let v = try_airy(-1.0_f64).unwrap();
        assert!((v.ai - 5.35560883292352075e-01).abs() < 1e-15);
        assert!((v.bi - 1.03997389496944606e-01).abs() < 1e-15);
        assert_eq!(Ok(v), airy(-1.0_f64).into_result());
    }

    #[test]
    fn try_airy_rejects_non_finite() {
        assert_eq!(try_airy(f64::NAN), Err(Error::InvalidInput));
        assert_eq!(try_airy(f64::INFINITY), Err(Error::InvalidInput));
        assert_eq!(try_airy(f64::NEG_INFINITY), Err(Error::InvalidInput));
        assert_eq!(try_airy(f32::NAN), Err(Error::InvalidInput));
    }

    #[test]
    fn try_airy_reports_overflow() {
        assert_eq!(try_airy(25.770000000000003_f64), Err(Error::Overflow));
        assert!(try_airy(25.77_f64).is_ok());
    }

    #[test]
    fn error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&Error::Overflow);
        let e: Box<dyn std::error::Error> = Box::new(try_airy(100.0_f64).unwrap_err());
        assert_eq!(
            e.to_string(),
            "overflow: result magnitude exceeds representable range"
        );
    }

    #[test]
    fn f32_entry_points() {
        let r = airy(0.0_f32);
        assert_eq!(r.status, Status::Normal);
        assert!((r.values.ai - 0.35502806_f32).abs() < 1e-7);
        assert!((r.values.bi - 0.61492663_f32).abs() < 1e-7);
        assert!((bi(-1.0_f32) - 0.10399739_f32).abs() < 1e-6);
        assert_eq!(try_airy(26.0_f32), Err(Error::Overflow));
    }

    #[test]
    fn values_usable_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| std::thread::spawn(move || airy(-3.0 + 2.0 * i as f64)))
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            let r = h.join().unwrap();
            assert_eq!(r, airy(-3.0 + 2.0 * i as f64));
        }
    }
}
