//! Next larger integer with the same decimal digits.
//!
//! Classic next-lexicographic-permutation over the most-significant-first
//! digit sequence:
//!
//! 1. find the pivot: the rightmost digit smaller than its right neighbour
//!    (everything after it is a non-increasing run)
//! 2. swap the pivot with the rightmost suffix digit greater than it
//! 3. reverse the suffix, turning it into its smallest arrangement
//!
//! No pivot means the digits are already in their largest arrangement.

use crate::digits::Digits;
use crate::validate::check_positive;
use crate::NumericResult;

/// Smallest integer greater than `number` that uses exactly the same digits.
///
/// Returns `Ok(None)` when no such permutation exists (single digits, or
/// digits already in non-increasing order such as `10` or `531`).
///
/// # Errors
/// - `OutOfRange` if `number <= 0`
/// - `Overflow` if the next permutation exceeds `i32::MAX`
pub fn next_bigger(number: i32) -> NumericResult<Option<i32>> {
    let mut digits = Digits::of(check_positive(number)?);
    let d = digits.as_mut_slice();

    let Some(pivot) = (0..d.len().saturating_sub(1)).rev().find(|&i| d[i] < d[i + 1]) else {
        return Ok(None);
    };

    // The suffix is non-increasing and d[pivot + 1] > d[pivot], so the
    // rightmost greater digit always exists.
    let successor = d[pivot + 1..]
        .iter()
        .rposition(|&x| x > d[pivot])
        .map_or(pivot + 1, |offset| pivot + 1 + offset);

    d.swap(pivot, successor);
    d[pivot + 1..].reverse();

    digits.to_i32().map(Some)
}
