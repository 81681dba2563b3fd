//! Wall-clock timing around the pure operations (`std` only).
//!
//! Purely diagnostic: the wrapped computation is unchanged and its result is
//! passed through untouched.

use std::time::{Duration, Instant};

use crate::{next_bigger, NumericResult};

/// A value together with the time it took to compute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Runs `f` once and measures it.
pub fn timed<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// [`next_bigger`] plus its elapsed time.
pub fn next_bigger_timed(number: i32) -> Timed<NumericResult<Option<i32>>> {
    timed(|| next_bigger(number))
}
