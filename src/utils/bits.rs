//! IEEE-754 bit pattern tricks.
//!
//! All reinterpretation of `f64` bit layouts in the crate goes through this module.

// Based on GPL-licensed code (c) 2012 by Thomas Friedel

/// Exponent of the fractional quantization step (step size is `2^-FRAC_EXP`).
pub const FRAC_EXP: u32 = 8;

/// Magic constant for the reciprocal square root estimate of a 64-bit float.
const RSQRT_MAGIC: i64 = 0x5FE6EB50C7B537AA;

/// Bit pattern of the smallest positive normal `f64`.
const MIN_NORMAL_BITS: u64 = 0x0010_0000_0000_0000;

const SIGN_MASK: u64 = 0x8000_0000_0000_0000;

/// `2^(52 - FRAC_EXP)`: one unit in the last place of this value equals the
/// quantization step `2^-FRAC_EXP`.
pub const FRAC_BIAS: f64 = (1u64 << (52 - FRAC_EXP)) as f64;

/// Returns `true` for NaN, infinities, zeros and subnormals.
#[inline]
pub fn is_degenerate(x: f64) -> bool {
    x.is_nan() || x.is_infinite() || ((x.to_bits() & !SIGN_MASK) < MIN_NORMAL_BITS)
}

/// Coarse estimate of `1 / sqrt(x)` from the bit pattern of `x`.
///
/// Relative error is below 3.5e-2 for positive normal inputs. Any other input
/// gives a meaningless value.
#[inline]
pub fn rsqrt_estimate(x: f64) -> f64 {
    let i = x.to_bits() as i64;
    f64::from_bits(RSQRT_MAGIC.wrapping_sub(i >> 1) as u64)
}

/// Quantizes `y` in `[0, 1]` to the nearest multiple of `2^-FRAC_EXP`.
///
/// Adding `FRAC_BIAS` shifts the mantissa of `y` right until only `FRAC_EXP`
/// fractional bits survive, rounded to nearest-even, and those bits end up in
/// the low end of the sum's mantissa. Returns the table index and the
/// quantized value `index / 2^FRAC_EXP`.
#[inline]
pub fn quantize_unit(y: f64) -> (usize, f64) {
    let yp = FRAC_BIAS + y;
    let index = (yp.to_bits() & 0xFFFF_FFFF) as usize;
    (index, yp - FRAC_BIAS)
}
