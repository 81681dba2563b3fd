//! Decimal digit sequences.
//!
//! [`Digits`] holds the decimal representation of a non-negative integer,
//! most-significant digit first, in a fixed-size buffer: `u32::MAX` has ten
//! digits, so no allocation is ever needed. Every stored value is in `0..=9`
//! and a sequence is never empty (zero is the single digit `0`).
//!
//! Reconstruction through [`Digits::to_i32`] is checked; rearranging the digits
//! of a valid `i32` can produce a value above `i32::MAX`, which is reported as
//! `Overflow` instead of wrapping.

use crate::{NumericError, NumericResult};

/// Number of decimal digits in `u32::MAX`.
pub const MAX_DIGITS: usize = 10;

/// Decimal digits of a non-negative integer, most-significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digits {
    buf: [u8; MAX_DIGITS],
    len: usize,
}

impl Digits {
    /// Splits `value` into its decimal digits.
    pub fn of(value: u32) -> Self {
        let mut buf = [0u8; MAX_DIGITS];
        let mut len = 0;
        let mut rest = value;
        // Fill from the back, then shift to the front.
        loop {
            buf[MAX_DIGITS - 1 - len] = (rest % 10) as u8;
            len += 1;
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        buf.copy_within(MAX_DIGITS - len.., 0);
        Self { buf, len }
    }

    /// Number of digits (at least 1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Mutable view for in-place rearrangement. Callers may permute the digits
    /// but must not write values outside `0..=9`.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.buf[..self.len]
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.as_slice().contains(&digit)
    }

    /// Rebuilds the integer, failing with `Overflow` above `i32::MAX`.
    pub fn to_i32(&self) -> NumericResult<i32> {
        self.as_slice().iter().try_fold(0i32, |acc, &d| {
            acc.checked_mul(10)
                .and_then(|v| v.checked_add(i32::from(d)))
                .ok_or(NumericError::Overflow)
        })
    }
}

/// Whether the decimal representation of `|value|` contains `digit`.
///
/// The sign is ignored, so `-17` contains `7`. `i32::MIN` is handled through
/// `unsigned_abs`.
pub fn contains_digit(value: i32, digit: u8) -> bool {
    Digits::of(value.unsigned_abs()).contains(digit)
}


// ── Kani Formal Verification Proofs ──────────────────────────────────────
//
// Run with: cargo kani -p numutils
//
// - Every stored digit is in 0..=9 and the sequence is never empty
// - Reconstruction is exact for every value that fits in i32

#[cfg(kani)]
mod proofs {
    use super::*;

    #[kani::proof]
    #[kani::unwind(11)]
    fn digits_are_decimal() {
        let value: u32 = kani::any();
        let d = Digits::of(value);
        kani::assert(d.len() >= 1 && d.len() <= MAX_DIGITS, "length in 1..=10");
        for &digit in d.as_slice() {
            kani::assert(digit <= 9, "digit out of range");
        }
    }

    #[kani::proof]
    #[kani::unwind(11)]
    fn roundtrip_for_non_negative_i32() {
        let value: i32 = kani::any();
        kani::assume(value >= 0);
        kani::assert(
            Digits::of(value as u32).to_i32() == Ok(value),
            "digit roundtrip must be exact",
        );
    }
}
