//! Fast reciprocal of square-root routines.

// Based on GPL-licensed code (c) 2012 by Thomas Friedel

use super::bits::rsqrt_estimate;

const THREEHALFS: f64 = 1.5;

/// One Newton-Raphson step towards `1.0 / sqrt(x)` from the estimate `y`.
///
/// Roughly squares the relative error of `y`.
#[inline]
pub fn refine_rsqrt(x: f64, y: f64) -> f64 {
    y * (THREEHALFS - (x * 0.5 * y * y))
}

/// Approximately `1.0 / sqrt(x)`, relative error below 1.8e-3.
///
/// `x` must be positive and normal. Other inputs give a meaningless result
/// but never panic.
#[inline]
pub fn fast_rsqrt(x: f64) -> f64 {
    refine_rsqrt(x, rsqrt_estimate(x))
}

/// `1.0 / sqrt(x)` refined to full double precision.
///
/// Same preconditions as [`fast_rsqrt`].
#[inline]
pub fn rsqrt(x: f64) -> f64 {
    let mut y = rsqrt_estimate(x);
    for _ in 0..4 {
        y = refine_rsqrt(x, y);
    }

    y
}
