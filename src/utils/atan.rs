//! Fast arc-tangent routines.
//!
//! Three trade-offs between speed and accuracy, cheapest first:
//!
//! - [`atan2_linear`]: rational first-order fit, no tables, ~0.07 rad error.
//! - [`atan2_lookup`]: octant lookup table, ~5e-4 rad error.
//! - [`fast_atan2`]: unit circle normalization, arcsine table and series
//!   correction, ~1e-8 rad error.

// Based on GPL-licensed code (c) 2012 by Thomas Friedel

use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

#[allow(unused_imports)]
use num_traits::float::Float;

use super::bits::{is_degenerate, quantize_unit};
use super::rsqrt::{fast_rsqrt, refine_rsqrt};
use crate::error::Error;
use crate::resources::asin::asin_tables;
use crate::resources::atan2::{atan2_tables, Atan2Tables, Octant};

const ONE_SIXTH: f64 = 1.0 / 6.0;

impl Atan2Tables {
    /// Table-based approximation of `atan2(y, x)` in units of `stretch` per half turn.
    ///
    /// `(0, 0)` returns `0`. NaN inputs return an arbitrary table entry.
    #[inline]
    pub fn lookup(&self, y: f64, x: f64) -> f64 {
        let size = self.size() as f64;
        let (octant, ratio) = if x >= 0.0 {
            if y >= 0.0 {
                if x >= y {
                    (Octant::Ppy, y / x * size)
                } else {
                    (Octant::Ppx, x / y * size)
                }
            } else if x >= -y {
                (Octant::Pny, -y / x * size)
            } else {
                (Octant::Pnx, x / -y * size)
            }
        } else if y >= 0.0 {
            if -x >= y {
                (Octant::Npy, y / -x * size)
            } else {
                (Octant::Npx, -x / y * size)
            }
        } else if x <= y {
            (Octant::Nny, y / x * size)
        } else {
            (Octant::Nnx, x / y * size)
        };

        let index = (ratio + 0.5) as usize;
        debug_assert!(index <= self.size());

        self.table(octant)[index]
    }
}

/// Approximation of `atan2(y, x)` in radians using the shared octant tables.
///
/// Error is below 5e-4 rad.
#[inline]
pub fn atan2_lookup(y: f64, x: f64) -> f64 {
    atan2_tables().lookup(y, x)
}

/// Approximation of `atan2(y, x)` in radians, accurate to about 1e-8 rad.
///
/// Returns NaN if either input is NaN, if both are zero, or if `x² + y²`
/// leaves the normal floating-point range.
pub fn fast_atan2(y: f64, x: f64) -> f64 {
    let d2 = x * x + y * y;
    if is_degenerate(d2) {
        return f64::NAN;
    }

    // Reduce to 0 <= y <= x
    let neg_y = y < 0.0;
    let neg_x = x < 0.0;
    let (mut y, mut x) = (y.abs(), x.abs());
    let steep = y > x;
    if steep {
        core::mem::swap(&mut x, &mut y);
    }

    // Scale onto the unit circle, x = cos θ, y = sin θ, 0 <= θ <= π/4
    let rinv = refine_rsqrt(d2, fast_rsqrt(d2));
    x *= rinv;
    y *= rinv;

    // φ is the table angle nearest to θ, sin φ = sφ exactly
    let (index, s_phi) = quantize_unit(y);
    let tables = asin_tables();
    let phi = tables.asin[index];
    let c_phi = tables.cos[index];

    // sin(θ - φ), then asin by the first two terms of its Maclaurin series
    let sd = y * c_phi - x * s_phi;
    let d = (6.0 + sd * sd) * sd * ONE_SIXTH;
    let mut theta = phi + d;

    if steep {
        theta = FRAC_PI_2 - theta;
    }
    if neg_x {
        theta = PI - theta;
    }
    if neg_y {
        theta = -theta;
    }

    theta
}

/// Like [`fast_atan2`], but reports degenerate input as an error.
pub fn try_fast_atan2(y: f64, x: f64) -> Result<f64, Error> {
    let theta = fast_atan2(y, x);
    if theta.is_nan() {
        Err(Error::DegenerateInput)
    } else {
        Ok(theta)
    }
}

/// Coarse approximation of `atan2(y, x)` in radians without any tables.
///
/// Error is up to 0.072 rad. `(0, 0)` returns NaN.
#[inline]
pub fn atan2_linear(y: f64, x: f64) -> f64 {
    const COEFF_1: f64 = FRAC_PI_4;
    const COEFF_2: f64 = 3.0 * FRAC_PI_4;

    let abs_y = y.abs();
    let angle = if x >= 0.0 {
        let r = (x - abs_y) / (x + abs_y);
        COEFF_1 - COEFF_1 * r
    } else {
        let r = (x + abs_y) / (abs_y - x);
        COEFF_2 - COEFF_1 * r
    };

    if y < 0.0 {
        -angle
    } else {
        angle
    }
}
