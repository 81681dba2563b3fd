//! Bit range splicing for 32-bit integers.
//!
//! All arithmetic is done on the `u32` reinterpretation of the operands so
//! that shifts never touch the sign bit semantics of `i32`. Indices are
//! validated before any shift, so every shift amount is in `0..=31`.
//!
//! `no_std` compatible: no alloc, no panics.

use crate::validate::check_bit_index;
use crate::{NumericError, NumericResult};

/// Highest valid bit index of a 32-bit integer.
pub const MAX_BIT_INDEX: u32 = 31;

/// Mask with bits `low..=high` set. Requires `low <= high <= 31`.
#[inline]
pub const fn bit_range_mask(high: u32, low: u32) -> u32 {
    (u32::MAX >> (MAX_BIT_INDEX - high)) & (u32::MAX << low)
}

/// Copies the low `high - low + 1` bits of `source` into bits `low..=high` of
/// `destination`.
///
/// Bits of `destination` outside the range are preserved; bits inside it are
/// replaced, never combined. Source bits above the range width are ignored.
///
/// # Errors
/// - `OutOfRange` if either index is outside `0..=31`
/// - `InvertedRange` if both are valid but `high < low`
pub fn splice_bits(destination: i32, source: i32, high: i32, low: i32) -> NumericResult<i32> {
    let high = check_bit_index(high)?;
    let low = check_bit_index(low)?;
    if high < low {
        return Err(NumericError::InvertedRange { high, low });
    }

    let mask = bit_range_mask(high, low);
    let field = ((source as u32) << low) & mask;
    Ok(((destination as u32 & !mask) | field) as i32)
}


// ── Kani Formal Verification Proofs ──────────────────────────────────────
//
// Run with: cargo kani -p numutils
//
// The proofs establish that:
// - splice_bits never panics for any inputs
// - bits outside [low, high] come from destination, bits inside from source

#[cfg(kani)]
mod proofs {
    use super::*;

    #[kani::proof]
    fn splice_never_panics() {
        let _ = splice_bits(kani::any(), kani::any(), kani::any(), kani::any());
    }

    #[kani::proof]
    fn splice_preserves_and_copies_bits() {
        let destination: i32 = kani::any();
        let source: i32 = kani::any();
        let high: i32 = kani::any();
        let low: i32 = kani::any();
        kani::assume((0..=31).contains(&low) && (low..=31).contains(&high));

        let result = splice_bits(destination, source, high, low).unwrap() as u32;
        let bit: u32 = kani::any();
        kani::assume(bit <= MAX_BIT_INDEX);

        let actual = (result >> bit) & 1;
        let expected = if bit >= low as u32 && bit <= high as u32 {
            ((source as u32) >> (bit - low as u32)) & 1
        } else {
            ((destination as u32) >> bit) & 1
        };
        kani::assert(actual == expected, "bit must come from the right operand");
    }
}
