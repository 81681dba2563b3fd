//! Newton-Raphson nth roots.
//!
//! Starting from `1.0`, iterate
//!
//! ```text
//! next = ((degree - 1) * current + number / current^(degree - 1)) / degree
//! ```
//!
//! until two successive iterates differ by less than `precision`. The loop is
//! bounded by [`RootOptions::max_iterations`]; a tolerance that cannot be met
//! in floating point (or an iterate that stops being finite) yields
//! `NoConvergence` instead of spinning forever.
//!
//! Odd roots of negative numbers are computed as `-root(|number|)`. Even roots
//! of negative numbers have no real value and are rejected up front. Zero is
//! its own root and returns immediately.
//!
//! For large degrees the first step lands near `number / degree`, where
//! `number / current^(degree - 1)` is lost against `(degree - 1) * current`
//! and each step only scales `current` by `(degree - 1) / degree`. Those steps
//! are taken in power-of-two strides and count as a single iteration, so the
//! cap only bounds the steps where the correction term still matters.

use crate::validate::{check_positive, check_precision};
use crate::{NumericError, NumericResult};

/// Default iteration cap for [`nth_root`].
pub const DEFAULT_MAX_ITERATIONS: u32 = 1_000_000;

/// Tunables for [`nth_root_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootOptions {
    /// Iterations allowed before giving up with `NoConvergence`.
    pub max_iterations: u32,
}

impl Default for RootOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Approximates the real `degree`-th root of `number` to within `precision`.
///
/// # Errors
/// - `OutOfRange` if `degree <= 0`, `precision` is not in `(0, 1)`, `number`
///   is not finite, or `number` is negative and `degree` is even
/// - `NoConvergence` if the default iteration cap is reached
pub fn nth_root(number: f64, degree: i32, precision: f64) -> NumericResult<f64> {
    nth_root_with(number, degree, precision, &RootOptions::default())
}

/// [`nth_root`] with explicit [`RootOptions`].
pub fn nth_root_with(
    number: f64,
    degree: i32,
    precision: f64,
    options: &RootOptions,
) -> NumericResult<f64> {
    let degree = check_positive(degree)?;
    let precision = check_precision(precision)?;
    if !number.is_finite() {
        return Err(NumericError::OutOfRange);
    }

    if number == 0.0 {
        return Ok(0.0);
    }

    if number < 0.0 {
        if degree % 2 == 0 {
            return Err(NumericError::OutOfRange);
        }
        return newton(-number, degree, precision, options.max_iterations).map(|r| -r);
    }
    newton(number, degree, precision, options.max_iterations)
}

/// Requires `number > 0`, `degree >= 1`.
fn newton(number: f64, degree: u32, precision: f64, max_iterations: u32) -> NumericResult<f64> {
    let n = f64::from(degree);

    let mut current = 1.0f64;
    let mut iterations = 0;
    while iterations < max_iterations {
        iterations += 1;
        if degree > 1 {
            current = skip_contraction(current, number, degree - 1, precision);
        }
        let next = ((n - 1.0) * current + number / pow(current, degree - 1)) / n;
        if !next.is_finite() {
            break;
        }
        let delta = next - current;
        if delta < precision && -delta < precision {
            return Ok(next);
        }
        current = next;
    }
    Err(NumericError::NoConvergence { iterations })
}

/// Whether `number / current^exp` vanishes against `(n - 1) * current`,
/// leaving the Newton step a pure contraction by `(n - 1) / n`. Monotone in
/// `current`: once it fails on the way down it keeps failing.
fn correction_vanishes(current: f64, number: f64, exp: u32) -> bool {
    let scaled = f64::from(exp) * current;
    scaled + number / pow(current, exp) == scaled
}

/// Applies as many pure contraction steps as possible at once, stopping
/// before the correction term matters or before a step would be smaller than
/// `precision` (where the plain iteration would have returned).
fn skip_contraction(current: f64, number: f64, exp: u32, precision: f64) -> f64 {
    if !correction_vanishes(current, number, exp) {
        return current;
    }
    let n = f64::from(exp) + 1.0;

    // strides[j] = ratio^(2^j)
    let mut strides = [0.0f64; 64];
    let mut len = 0;
    let mut stride = f64::from(exp) / n;
    while len < strides.len() && stride > 0.0 {
        strides[len] = stride;
        len += 1;
        stride *= stride;
    }

    let mut current = current;
    for &stride in strides[..len].iter().rev() {
        let candidate = current * stride;
        if candidate / n >= precision && correction_vanishes(candidate, number, exp) {
            current = candidate;
        }
    }
    current
}

/// `base^exp` by square-and-multiply; `f64::powi` lives in `std`.
fn pow(base: f64, exp: u32) -> f64 {
    let mut result = 1.0;
    let mut base = base;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result *= base;
        }
        base *= base;
        exp >>= 1;
    }
    result
}
