//! `numutils`: small, stateless numeric utilities.
//!
//! This crate is `#![no_std]` by default. It provides:
//! - [`splice_bits`] for copying an inclusive bit range between two `i32`s
//! - [`next_bigger`] for the next larger integer built from the same digits
//! - [`digit_filter`] / `filter_by_digit` / `filter_with` for selecting
//!   integers by decimal digit membership
//! - [`nth_root`] for Newton-Raphson nth roots with a bounded iteration count
//! - `NumericError` / `NumericResult<T>` shared by all of the above
//!
//! The `alloc` feature enables the `Vec`-returning filters. The `std` feature
//! adds the `timing` wrapper.

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use core::fmt;

mod validate;

pub mod digits;
pub use digits::{contains_digit, Digits, MAX_DIGITS};

mod bits;
pub use bits::{bit_range_mask, splice_bits, MAX_BIT_INDEX};

mod permutation;
pub use permutation::next_bigger;

mod filter;
pub use filter::digit_filter;
#[cfg(feature = "alloc")]
pub use filter::{filter_by_digit, filter_with};

mod root;
pub use root::{nth_root, nth_root_with, RootOptions, DEFAULT_MAX_ITERATIONS};

#[cfg(feature = "std")]
pub mod timing;

/// Errors raised by the numeric operations. No panics, no partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Argument outside its valid domain (bit index, digit, degree, precision, ...).
    OutOfRange,
    /// Both bit indices are valid but `high < low`.
    InvertedRange { high: u32, low: u32 },
    /// A required sequence argument was absent.
    NullArgument,
    /// The computed result does not fit in an `i32`.
    Overflow,
    /// Iteration stopped without meeting the requested precision.
    NoConvergence { iterations: u32 },
}

/// Result type for numeric operations.
pub type NumericResult<T> = Result<T, NumericError>;

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "argument is out of range"),
            Self::InvertedRange { high, low } => {
                write!(f, "high bit index {high} is less than low bit index {low}")
            }
            Self::NullArgument => write!(f, "required argument is absent"),
            Self::Overflow => write!(f, "result does not fit in a 32-bit signed integer"),
            Self::NoConvergence { iterations } => {
                write!(f, "no convergence after {iterations} iterations")
            }
        }
    }
}

impl core::error::Error for NumericError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_error_is_copy() {
        let err = NumericError::Overflow;
        let err2 = err; // Copy
        assert_eq!(err, err2);
    }

    #[test]
    fn numeric_result_err() {
        let result: NumericResult<i32> = Err(NumericError::OutOfRange);
        assert!(result.is_err());
        assert_eq!(result, Err(NumericError::OutOfRange));
    }

    #[test]
    fn range_and_order_errors_are_distinct() {
        assert_ne!(
            NumericError::OutOfRange,
            NumericError::InvertedRange { high: 4, low: 6 }
        );
    }
}
