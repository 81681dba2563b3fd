//! Argument checks shared by the public operations.
//!
//! Each check converts a caller-facing signed value into the narrower type the
//! algorithm works with, or fails with `OutOfRange`.

use crate::bits::MAX_BIT_INDEX;
use crate::{NumericError, NumericResult};

/// Bit index in `0..=31`.
pub(crate) fn check_bit_index(index: i32) -> NumericResult<u32> {
    u32::try_from(index)
        .ok()
        .filter(|&i| i <= MAX_BIT_INDEX)
        .ok_or(NumericError::OutOfRange)
}

/// Strictly positive integer.
pub(crate) fn check_positive(value: i32) -> NumericResult<u32> {
    if value <= 0 {
        return Err(NumericError::OutOfRange);
    }
    Ok(value.unsigned_abs())
}

/// Single decimal digit in `0..=9`.
pub(crate) fn check_digit(digit: i32) -> NumericResult<u8> {
    u8::try_from(digit)
        .ok()
        .filter(|&d| d <= 9)
        .ok_or(NumericError::OutOfRange)
}

/// Tolerance in the open interval `(0, 1)`. NaN fails both comparisons.
pub(crate) fn check_precision(precision: f64) -> NumericResult<f64> {
    if precision > 0.0 && precision < 1.0 {
        Ok(precision)
    } else {
        Err(NumericError::OutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_index_bounds() {
        assert_eq!(check_bit_index(0), Ok(0));
        assert_eq!(check_bit_index(31), Ok(31));
        assert_eq!(check_bit_index(32), Err(NumericError::OutOfRange));
        assert_eq!(check_bit_index(-1), Err(NumericError::OutOfRange));
        assert_eq!(check_bit_index(i32::MIN), Err(NumericError::OutOfRange));
    }

    #[test]
    fn positive_rejects_zero_and_negatives() {
        assert_eq!(check_positive(1), Ok(1));
        assert_eq!(check_positive(i32::MAX), Ok(i32::MAX as u32));
        assert_eq!(check_positive(0), Err(NumericError::OutOfRange));
        assert_eq!(check_positive(i32::MIN), Err(NumericError::OutOfRange));
    }

    #[test]
    fn digit_bounds() {
        assert_eq!(check_digit(0), Ok(0));
        assert_eq!(check_digit(9), Ok(9));
        assert_eq!(check_digit(10), Err(NumericError::OutOfRange));
        assert_eq!(check_digit(-2), Err(NumericError::OutOfRange));
    }

    #[test]
    fn precision_open_interval() {
        assert_eq!(check_precision(0.0001), Ok(0.0001));
        assert_eq!(check_precision(0.0), Err(NumericError::OutOfRange));
        assert_eq!(check_precision(1.0), Err(NumericError::OutOfRange));
        assert_eq!(check_precision(-0.6), Err(NumericError::OutOfRange));
        assert_eq!(check_precision(-7.0), Err(NumericError::OutOfRange));
        assert_eq!(check_precision(f64::NAN), Err(NumericError::OutOfRange));
    }
}
