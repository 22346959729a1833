//! Core types for Airy function computation.

use core::fmt;
use core::ops::{BitOr, BitOrAssign};

use crate::machine::AiryFloat;

/// Ai(x), Ai'(x), Bi(x) and Bi'(x) at a single real argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiryValues<T: AiryFloat> {
    /// Ai(x), the solution of y'' = xy that decays as x → +∞.
    pub ai: T,
    /// Ai'(x).
    pub ai_prime: T,
    /// Bi(x), the solution of y'' = xy that grows as x → +∞.
    pub bi: T,
    /// Bi'(x).
    pub bi_prime: T,
}

impl<T: AiryFloat> AiryValues<T> {
    /// Saturated values reported for arguments beyond the overflow bound.
    #[inline]
    pub(crate) fn saturated() -> Self {
        AiryValues {
            ai: T::zero(),
            ai_prime: T::zero(),
            bi: T::MAXNUM,
            bi_prime: T::MAXNUM,
        }
    }

    /// Wronskian W{Ai, Bi} = Ai·Bi' − Ai'·Bi.
    ///
    /// Equals 1/π for every x, so it is a cheap consistency check on a
    /// computed quadruple. Meaningless for saturated values.
    #[inline]
    pub fn wronskian(&self) -> T {
        self.ai * self.bi_prime - self.ai_prime * self.bi
    }
}

/// Status of the computation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// All four values computed.
    Normal,
    /// x exceeded the overflow bound; values are saturated to
    /// `(0, 0, MAXNUM, MAXNUM)`.
    Overflow,
}

impl Status {
    /// Integer status code: 0 for [`Status::Normal`], −1 for [`Status::Overflow`].
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            Status::Normal => 0,
            Status::Overflow => -1,
        }
    }
}

/// Result of an Airy function computation, returned by [`airy`](crate::airy).
///
/// Single-value convenience functions (`ai`, `bi`, …) do not expose this
/// type; they return only the computed value and discard the status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiryResult<T: AiryFloat> {
    /// Computed function values. Always populated, including on overflow.
    pub values: AiryValues<T>,
    /// Whether the values were computed or saturated.
    pub status: Status,
}

impl<T: AiryFloat> AiryResult<T> {
    /// `true` when the argument was beyond the overflow bound.
    #[inline]
    pub fn is_overflow(&self) -> bool {
        self.status == Status::Overflow
    }

    /// Convert the saturate-and-flag result into a `Result`.
    ///
    /// Returns [`Error::Overflow`] instead of the saturated values.
    #[inline]
    pub fn into_result(self) -> Result<AiryValues<T>, Error> {
        match self.status {
            Status::Normal => Ok(self.values),
            Status::Overflow => Err(Error::Overflow),
        }
    }
}

/// Set of outputs already produced by an asymptotic branch.
///
/// The near-zero power series runs as a shared fallback and must leave any
/// output in this set untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Computed(u8);

impl Computed {
    pub(crate) const NONE: Computed = Computed(0);
    pub(crate) const AI: Computed = Computed(1);
    pub(crate) const BI: Computed = Computed(2);
    pub(crate) const AI_PRIME: Computed = Computed(4);
    pub(crate) const BI_PRIME: Computed = Computed(8);

    /// `true` if every output in `other` is also in `self`.
    #[inline]
    pub(crate) const fn contains(self, other: Computed) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Computed {
    type Output = Computed;

    #[inline]
    fn bitor(self, rhs: Computed) -> Computed {
        Computed(self.0 | rhs.0)
    }
}

impl BitOrAssign for Computed {
    #[inline]
    fn bitor_assign(&mut self, rhs: Computed) {
        self.0 |= rhs.0;
    }
}

/// Error type for Airy function computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Argument is NaN or infinite.
    InvalidInput,
    /// Overflow: x too large for Bi to be representable.
    Overflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput => {
                write!(f, "invalid input: argument must be finite")
            }
            Error::Overflow => {
                write!(f, "overflow: result magnitude exceeds representable range")
            }
        }
    }
}

impl core::error::Error for Error {}
