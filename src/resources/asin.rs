//! Arcsine and cosine tables over `[0, 1]` at `2^-FRAC_EXP` steps.

// Based on GPL-licensed code (c) 2012 by Thomas Friedel

#[allow(unused_imports)]
use num_traits::float::Float;
use spin::Once;

use crate::utils::bits::FRAC_EXP;

/// Number of entries in each fractional table.
pub const LUT_ASIN_SIZE: usize = (1 << FRAC_EXP) + 1;

static ASIN_TABLES: Once<AsinTables> = Once::new();

/// `asin(i / 256)` and `cos(asin(i / 256))` for `i` in `0..=256`.
#[derive(Debug, Clone)]
pub struct AsinTables {
    pub asin: [f64; LUT_ASIN_SIZE],
    pub cos: [f64; LUT_ASIN_SIZE],
}

impl AsinTables {
    pub fn new() -> Self {
        let mut asin = [0.0; LUT_ASIN_SIZE];
        let mut cos = [0.0; LUT_ASIN_SIZE];
        let scale = 1.0 / (1 << FRAC_EXP) as f64;

        for (i, (a, c)) in asin.iter_mut().zip(cos.iter_mut()).enumerate() {
            let phi = (i as f64 * scale).asin();
            *a = phi;
            *c = phi.cos();
        }

        log::debug!("Built arcsine tables, {} entries", LUT_ASIN_SIZE);

        Self { asin, cos }
    }
}

impl Default for AsinTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared tables, built on first call.
#[inline]
pub fn asin_tables() -> &'static AsinTables {
    ASIN_TABLES.call_once(AsinTables::new)
}
