//! Scalar math helpers.
//!
//! Small, total functions used throughout layout and rendering. These
//! deliberately do NOT use `f32::clamp`, which panics on inverted
//! bounds; control code feeds these functions raw user ranges and the
//! tie-break rules below are part of the contract.

/// Limits `x` to the interval `[lo, hi]`.
///
/// The high bound is checked first, then the low bound, so when
/// `lo > hi` the result is `lo` (the low bound wins on conflict).
#[inline]
#[must_use]
pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    let x = if x > hi { hi } else { x };
    if x < lo {
        lo
    } else {
        x
    }
}

/// Returns `0.0` if the magnitude of `x` is less than `eps`, else `x`.
///
/// Used to suppress numerical noise near zero.
#[inline]
#[must_use]
pub fn chop(x: f32, eps: f32) -> f32 {
    if x < eps && x > -eps {
        0.0
    } else {
        x
    }
}

/// Affine map of `x` from `[x_min, x_max]` onto `[y_min, y_max]`.
///
/// Inputs outside the source interval extrapolate; nothing is clamped.
/// A degenerate source interval (`x_min == x_max`) divides by zero and
/// propagates IEEE infinity/NaN - the caller must avoid it.
#[inline]
#[must_use]
pub fn remap(x: f32, x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> f32 {
    debug_assert!(
        x_min != x_max,
        "remap called with a degenerate source interval"
    );
    y_min + (x - x_min) / (x_max - x_min) * (y_max - y_min)
}

/// Linear interpolation from `a` to `b` by `frac`.
///
/// `frac` outside `[0, 1]` extrapolates.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, frac: f32) -> f32 {
    (1.0 - frac) * a + frac * b
}

/// Minimum of two integers.
#[inline]
#[must_use]
pub const fn min_int(a: i32, b: i32) -> i32 {
    if a < b {
        a
    } else {
        b
    }
}

/// Maximum of two integers.
#[inline]
#[must_use]
pub const fn max_int(a: i32, b: i32) -> i32 {
    if a > b {
        a
    } else {
        b
    }
}

/// Squares the magnitude of `x`, preserving its sign.
///
/// Produces a symmetric bipolar response curve for control inputs.
#[inline]
#[must_use]
pub fn quadratic_bipolar(x: f32) -> f32 {
    let x2 = x * x;
    if x >= 0.0 {
        x2
    } else {
        -x2
    }
}

/// Cubic shaping curve. Odd power, naturally sign-preserving.
#[inline]
#[must_use]
pub fn cubic(x: f32) -> f32 {
    x * x * x
}

/// Fourth power of the magnitude of `x`, preserving its sign.
#[inline]
#[must_use]
pub fn quartic_bipolar(x: f32) -> f32 {
    let x2 = x * x;
    let x4 = x2 * x2;
    if x >= 0.0 {
        x4
    } else {
        -x4
    }
}

/// Quintic shaping curve. Odd power, naturally sign-preserving.
#[inline]
#[must_use]
pub fn quintic(x: f32) -> f32 {
    x * x * x * x * x
}

/// Euclidean modulus: the result is in `[0, base)` for positive `base`,
/// including for negative `a`.
///
/// Rust's `%` follows the sign of the dividend; this does not.
#[inline]
#[must_use]
pub const fn euc_mod(a: i32, base: i32) -> i32 {
    let m = a % base;
    if m < 0 {
        m + base
    } else {
        m
    }
}

/// Reads an optional value, falling back to `default` when absent.
///
/// Models an optional input parameter without a sentinel value.
#[inline]
#[must_use]
pub fn read_or(value: Option<&f32>, default: f32) -> f32 {
    value.copied().unwrap_or(default)
}

/// Writes `value` into an optional output slot; no-op when absent.
#[inline]
pub fn write_if_present(slot: Option<&mut f32>, value: f32) {
    if let Some(slot) = slot {
        *slot = value;
    }
}

/// Linearly interpolates `buffer` at the fractional index `x`.
///
/// Reads `buffer[floor(x)]` and `buffer[floor(x) + 1]`, so the buffer
/// must hold at least `ceil(x) + 1` elements and `x` must be
/// non-negative. Violations panic on the slice index.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn interpolate_array(buffer: &[f32], x: f32) -> f32 {
    debug_assert!(x >= 0.0, "interpolate_array called with a negative index");
    let xi = x as usize;
    let xf = x - xi as f32;
    lerp(buffer[xi], buffer[xi + 1], xf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_in_range_is_identity() {
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(0.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(1.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_clamp_restricts_to_bounds() {
        assert_eq!(clamp(-3.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(7.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_clamp_inverted_bounds_low_wins() {
        // High bound applied first, then low: lo wins when lo > hi.
        assert_eq!(clamp(0.5, 2.0, 1.0), 2.0);
        assert_eq!(clamp(5.0, 2.0, 1.0), 2.0);
    }

    #[test]
    fn test_chop_suppresses_noise() {
        assert_eq!(chop(1e-7, 1e-6), 0.0);
        assert_eq!(chop(-1e-7, 1e-6), 0.0);
        assert_eq!(chop(0.5, 1e-6), 0.5);
        assert_eq!(chop(-0.5, 1e-6), -0.5);
    }

    #[test]
    fn test_remap_endpoints_and_midpoint() {
        assert!((remap(0.0, 0.0, 1.0, -10.0, 10.0) - -10.0).abs() < 1e-6);
        assert!((remap(0.5, 0.0, 1.0, -10.0, 10.0) - 0.0).abs() < 1e-6);
        assert!((remap(1.0, 0.0, 1.0, -10.0, 10.0) - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_remap_extrapolates() {
        assert!((remap(2.0, 0.0, 1.0, 0.0, 10.0) - 20.0).abs() < 1e-5);
        assert!((remap(-1.0, 0.0, 1.0, 0.0, 10.0) - -10.0).abs() < 1e-5);
    }

    #[test]
    fn test_remap_round_trip() {
        for x in [-3.0_f32, -0.25, 0.0, 0.5, 1.0, 42.0] {
            let there = remap(x, -1.0, 1.0, 10.0, 50.0);
            let back = remap(there, 10.0, 50.0, -1.0, 1.0);
            assert!((back - x).abs() < 1e-4, "round trip drifted: {x} -> {back}");
        }
    }

    #[test]
    fn test_lerp_interpolates_and_extrapolates() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
        assert_eq!(lerp(0.0, 10.0, -1.0), -10.0);
    }

    #[test]
    fn test_int_min_max() {
        assert_eq!(min_int(3, -5), -5);
        assert_eq!(max_int(3, -5), 3);
        assert_eq!(min_int(7, 7), 7);
        assert_eq!(max_int(7, 7), 7);
    }

    #[test]
    fn test_bipolar_curves_preserve_sign() {
        assert_eq!(quadratic_bipolar(2.0), 4.0);
        assert_eq!(quadratic_bipolar(-2.0), -4.0);
        assert_eq!(quartic_bipolar(2.0), 16.0);
        assert_eq!(quartic_bipolar(-2.0), -16.0);
        assert_eq!(cubic(-2.0), -8.0);
        assert_eq!(quintic(-2.0), -32.0);
    }

    #[test]
    fn test_euc_mod_is_always_non_negative() {
        assert_eq!(euc_mod(-1, 4), 3);
        assert_eq!(euc_mod(-4, 4), 0);
        assert_eq!(euc_mod(-5, 4), 3);
        assert_eq!(euc_mod(5, 4), 1);
        for a in -20..20 {
            let m = euc_mod(a, 4);
            assert!((0..4).contains(&m), "euc_mod({a}, 4) = {m}");
        }
    }

    #[test]
    fn test_read_or_falls_back() {
        let present = 3.5_f32;
        assert_eq!(read_or(Some(&present), 0.0), 3.5);
        assert_eq!(read_or(None, 7.25), 7.25);
    }

    #[test]
    fn test_write_if_present_is_noop_on_absence() {
        let mut slot = 0.0_f32;
        write_if_present(Some(&mut slot), 9.0);
        assert_eq!(slot, 9.0);
        // Absent slot: nothing to observe, it just must not panic.
        write_if_present(None, 9.0);
    }

    #[test]
    fn test_interpolate_array() {
        let buffer = [0.0, 10.0, 20.0, 30.0];
        assert_eq!(interpolate_array(&buffer, 0.0), 0.0);
        assert_eq!(interpolate_array(&buffer, 0.5), 5.0);
        assert_eq!(interpolate_array(&buffer, 2.25), 22.5);
    }
}
