//! Selecting integers by decimal digit membership.
//!
//! Digit membership is sign-independent: it is tested on `|value|`.
//! The absent-sequence check runs before the digit check.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::digits::contains_digit;
use crate::validate::check_digit;
use crate::{NumericError, NumericResult};

/// Lazily yields, in order, every element of `values` containing `digit`.
///
/// Allocation-free counterpart of `filter_by_digit`.
///
/// ```
/// use numutils::digit_filter;
///
/// let values = [1, 2, 3, 4, 5, 6, 7, 68, 69, 70, 15, 17];
/// let hits = digit_filter(Some(&values), 7).unwrap();
/// assert!(hits.eq([7, 70, 17]));
/// ```
///
/// # Errors
/// - `NullArgument` if `values` is `None`
/// - `OutOfRange` if `digit` is outside `0..=9`
pub fn digit_filter(
    values: Option<&[i32]>,
    digit: i32,
) -> NumericResult<impl Iterator<Item = i32> + '_> {
    let values = values.ok_or(NumericError::NullArgument)?;
    let digit = check_digit(digit)?;
    Ok(values
        .iter()
        .copied()
        .filter(move |&v| contains_digit(v, digit)))
}

/// Order-preserving list of the elements of `values` containing `digit`.
#[cfg(feature = "alloc")]
pub fn filter_by_digit(values: Option<&[i32]>, digit: i32) -> NumericResult<Vec<i32>> {
    Ok(digit_filter(values, digit)?.collect())
}

/// Order-preserving list of the elements of `values` accepted by `predicate`.
///
/// Pluggable form of `filter_by_digit`: any membership rule can be
/// supplied, e.g. `|v| contains_digit(v, 3)`.
#[cfg(feature = "alloc")]
pub fn filter_with<P>(values: Option<&[i32]>, mut predicate: P) -> NumericResult<Vec<i32>>
where
    P: FnMut(i32) -> bool,
{
    let values = values.ok_or(NumericError::NullArgument)?;
    Ok(values.iter().copied().filter(|&v| predicate(v)).collect())
}
