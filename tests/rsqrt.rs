//! Tests for the reciprocal square root and the bit pattern helpers

use fast_trig::utils::bits::{is_degenerate, quantize_unit, rsqrt_estimate, FRAC_BIAS, FRAC_EXP};
use fast_trig::{fast_rsqrt, rsqrt};

/// Logarithmically spaced values over [1e-10, 1e10].
fn log_sweep(count: usize) -> impl Iterator<Item = f64> {
    (0..=count).map(move |i| 10f64.powf(-10.0 + 20.0 * i as f64 / count as f64))
}

#[test]
fn rsqrt_round_trip() {
    for x in log_sweep(100_000) {
        let r = rsqrt(x);
        assert!((r * r * x - 1.0).abs() < 1e-10, "x = {x}, r = {r}");
    }
}

#[test]
fn fast_rsqrt_error_bound() {
    for x in log_sweep(100_000) {
        let r = fast_rsqrt(x);
        assert!((r * x.sqrt() - 1.0).abs() < 1.8e-3, "x = {x}, r = {r}");
        // The Newton step approaches from below.
        assert!(r <= 1.0 / x.sqrt() * (1.0 + 1e-15));
    }
}

#[test]
fn estimate_error_bound() {
    for x in log_sweep(10_000) {
        let r = rsqrt_estimate(x);
        assert!((r * x.sqrt() - 1.0).abs() < 3.5e-2, "x = {x}, r = {r}");
    }
}

#[test]
fn fast_rsqrt_outside_domain_does_not_panic() {
    for &x in &[0.0, -0.0, -1.0, -1e300, f64::NAN, f64::INFINITY, f64::MIN_POSITIVE / 4.0] {
        let _ = fast_rsqrt(x);
        let _ = rsqrt(x);
    }
}

#[test]
fn frac_bias_layout() {
    assert_eq!(FRAC_EXP, 8);
    assert_eq!(FRAC_BIAS.to_bits(), (0x433 - FRAC_EXP as u64) << 52);
    assert_eq!(FRAC_BIAS, 17592186044416.0);
}

#[test]
fn quantize_matches_rounding() {
    let steps = 1u32 << 20;
    for k in 0..=steps {
        let y = k as f64 / steps as f64;
        let (index, quantized) = quantize_unit(y);
        let expected = (y * 256.0).round_ties_even();
        assert_eq!(index, expected as usize, "y = {y}");
        assert_eq!(quantized, expected / 256.0, "y = {y}");
    }
}

#[test]
fn quantize_grid_points_and_ties() {
    for k in 0..=256usize {
        let (index, quantized) = quantize_unit(k as f64 / 256.0);
        assert_eq!(index, k);
        assert_eq!(quantized, k as f64 / 256.0);
    }

    // Halfway between two steps rounds to the even index.
    for k in 0..256usize {
        let (index, _) = quantize_unit((k as f64 + 0.5) / 256.0);
        assert_eq!(index, if k % 2 == 0 { k } else { k + 1 });
    }

    // Just below a step boundary.
    let (index, _) = quantize_unit(1.0 / 512.0 - f64::EPSILON);
    assert_eq!(index, 0);
}

#[test]
fn degenerate_values() {
    for &x in &[0.0, -0.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::MIN_POSITIVE / 2.0] {
        assert!(is_degenerate(x), "{x}");
    }

    for &x in &[f64::MIN_POSITIVE, 1.0, -1.0, 1e300, f64::MAX] {
        assert!(!is_degenerate(x), "{x}");
    }
}
