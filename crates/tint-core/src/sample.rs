//! Conversion between floating-point intermediates and 8-bit samples.
//!
//! Every conversion clamps first and casts second, so negative values
//! saturate to 0 instead of wrapping and NaN maps to 0.

/// Largest sample value as a float.
pub const SAMPLE_MAX: f32 = 255.0;

/// Clamps to `[0, 255]` and rounds half away from zero.
///
/// # Example
///
/// ```rust
/// use tint_core::quantize;
///
/// assert_eq!(quantize(127.5), 128);
/// assert_eq!(quantize(-40.0), 0);
/// assert_eq!(quantize(700.0), 255);
/// ```
#[inline]
pub fn quantize(value: f32) -> u8 {
    // `as u8` saturates and maps NaN to 0
    value.clamp(0.0, SAMPLE_MAX).round() as u8
}

/// Clamps to `[0, 255]` and truncates toward zero.
///
/// ```rust
/// use tint_core::quantize_trunc;
///
/// assert_eq!(quantize_trunc(127.9), 127);
/// assert_eq!(quantize_trunc(-0.5), 0);
/// ```
#[inline]
pub fn quantize_trunc(value: f64) -> u8 {
    value.clamp(0.0, SAMPLE_MAX as f64) as u8
}

/// Maps a sample to `[0, 1]`.
#[inline]
pub fn normalize(sample: u8) -> f32 {
    sample as f32 / SAMPLE_MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_rounds_half_away() {
        assert_eq!(quantize(0.49), 0);
        assert_eq!(quantize(0.5), 1);
        assert_eq!(quantize(254.5), 255);
    }

    #[test]
    fn test_quantize_nan() {
        assert_eq!(quantize(f32::NAN), 0);
        assert_eq!(quantize_trunc(f64::NAN), 0);
    }

    #[test]
    fn test_quantize_trunc_saturates_before_cast() {
        assert_eq!(quantize_trunc(-300.0), 0);
        assert_eq!(quantize_trunc(700.0), 255);
        assert_eq!(quantize_trunc(254.999), 254);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(0), 0.0);
        assert_eq!(normalize(255), 1.0);
    }
}
