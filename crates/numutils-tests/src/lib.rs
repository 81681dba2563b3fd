//! Straightforward reference implementations used to cross-check `numutils`.
//!
//! These favour obviousness over speed: bit-by-bit loops, string digits and
//! exhaustive permutation search.

/// Bit-by-bit splice: bit `i` comes from `source` bit `i - low` inside
/// `low..=high`, from `destination` elsewhere. Indices must be valid.
pub fn splice_bits_orig(destination: i32, source: i32, high: u32, low: u32) -> i32 {
    let mut result = 0u32;
    for bit in 0..32 {
        let from = if (low..=high).contains(&bit) {
            ((source as u32) >> (bit - low)) & 1
        } else {
            ((destination as u32) >> bit) & 1
        };
        result |= from << bit;
    }
    result as i32
}

/// Minimum over every distinct arrangement of `number`'s digits that is
/// strictly greater than `number`. Arrangements that overflow `i32` are
/// skipped, so `None` covers both "no permutation" and "only overflowing ones".
pub fn next_bigger_orig(number: i32) -> Option<i32> {
    let digits: Vec<u8> = number.to_string().bytes().map(|b| b - b'0').collect();
    let mut best: Option<i32> = None;
    let mut used = vec![false; digits.len()];
    let mut current = Vec::with_capacity(digits.len());
    search(&digits, &mut used, &mut current, number, &mut best);
    best
}

fn search(
    digits: &[u8],
    used: &mut [bool],
    current: &mut Vec<u8>,
    floor: i32,
    best: &mut Option<i32>,
) {
    if current.len() == digits.len() {
        let value = current
            .iter()
            .try_fold(0i32, |acc, &d| acc.checked_mul(10)?.checked_add(i32::from(d)));
        if let Some(v) = value.filter(|&v| v > floor) {
            *best = Some(best.map_or(v, |b| b.min(v)));
        }
        return;
    }
    for i in 0..digits.len() {
        if !used[i] {
            used[i] = true;
            current.push(digits[i]);
            search(digits, used, current, floor, best);
            current.pop();
            used[i] = false;
        }
    }
}

/// Sorted decimal digits of `number`; equal for numbers with the same multiset.
pub fn digit_multiset(number: i32) -> Vec<u8> {
    let mut digits: Vec<u8> = number.unsigned_abs().to_string().into_bytes();
    digits.sort_unstable();
    digits
}

/// String-based digit membership on `|value|`.
pub fn filter_by_digit_orig(values: &[i32], digit: u8) -> Vec<i32> {
    let needle = char::from(b'0' + digit);
    values
        .iter()
        .copied()
        .filter(|v| v.unsigned_abs().to_string().contains(needle))
        .collect()
}
