//! LUT builders for affine (gain/bias) and power-law (gamma) curves.
//!
//! ## Affine
//!
//! `out = clamp(in * gain + bias, 0, 255)`, truncated toward zero. The clamp
//! happens before the cast so negative results saturate to 0.
//!
//! ## Power
//!
//! `out = (in / 255) ^ (1 / exponent) * 255`, rounded half away from zero.
//! The curve stays inside `[0, 255]` for any positive exponent and always
//! maps 0 to 0 and 255 to 255.

use crate::{Lut, LutError, LutResult};
use tint_core::{quantize, quantize_trunc, SAMPLE_MAX};
use tracing::debug;

/// Gain and bias of a per-channel affine curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineParams {
    /// Multiplier applied to the input sample.
    pub gain: f64,
    /// Offset added after the gain.
    pub bias: f64,
}

impl AffineParams {
    /// Creates new parameters.
    #[inline]
    pub const fn new(gain: f64, bias: f64) -> Self {
        Self { gain, bias }
    }

    /// Gain 1, bias 0.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0)
    }

    /// Builds the LUT for these parameters.
    pub fn to_lut(self) -> LutResult<Lut> {
        build_affine_lut(self.gain, self.bias)
    }
}

impl Default for AffineParams {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<(f64, f64)> for AffineParams {
    fn from((gain, bias): (f64, f64)) -> Self {
        Self::new(gain, bias)
    }
}

/// Builds `clamp(i * gain + bias, 0, 255)` for every `i` in `0..=255`.
///
/// # Errors
///
/// Returns [`LutError::InvalidParameter`] if `gain` or `bias` is not finite.
///
/// # Example
///
/// ```rust
/// use tint_lut::build_affine_lut;
///
/// let lut = build_affine_lut(2.0, 300.0).unwrap();
/// assert_eq!(lut.lookup(200), 255); // 700 clamps
///
/// let dark = build_affine_lut(1.0, -50.0).unwrap();
/// assert_eq!(dark.lookup(10), 0); // saturates, no wrap
/// ```
pub fn build_affine_lut(gain: f64, bias: f64) -> LutResult<Lut> {
    if !gain.is_finite() {
        return Err(LutError::InvalidParameter { name: "gain", value: gain });
    }
    if !bias.is_finite() {
        return Err(LutError::InvalidParameter { name: "bias", value: bias });
    }
    debug!(gain, bias, "building affine LUT");
    Ok(Lut::from_fn(|i| quantize_trunc(i as f64 * gain + bias)))
}

/// Builds `(i / 255) ^ (1 / exponent) * 255` for every `i` in `0..=255`.
///
/// # Errors
///
/// Returns [`LutError::InvalidExponent`] if `exponent <= 0` or is not finite.
///
/// # Example
///
/// ```rust
/// use tint_lut::build_power_lut;
///
/// let lut = build_power_lut(2.2).unwrap();
/// assert_eq!(lut.lookup(0), 0);
/// assert_eq!(lut.lookup(255), 255);
/// assert!(lut.lookup(64) > 64); // gamma > 1 brightens midtones
///
/// assert!(build_power_lut(0.0).is_err());
/// ```
pub fn build_power_lut(exponent: f64) -> LutResult<Lut> {
    if !exponent.is_finite() || exponent <= 0.0 {
        return Err(LutError::InvalidExponent(exponent));
    }
    debug!(exponent, "building power LUT");
    let inv = 1.0 / exponent;
    let max = SAMPLE_MAX as f64;
    Ok(Lut::from_fn(|i| {
        let t = i as f64 / max;
        quantize((t.powf(inv) * max) as f32)
    }))
}

impl Lut {
    /// Shorthand for [`build_affine_lut`].
    pub fn affine(gain: f64, bias: f64) -> LutResult<Self> {
        build_affine_lut(gain, bias)
    }

    /// Shorthand for [`build_power_lut`].
    pub fn power(exponent: f64) -> LutResult<Self> {
        build_power_lut(exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_affine_identity() {
        assert!(build_affine_lut(1.0, 0.0).unwrap().is_identity());
    }

    #[test]
    fn test_affine_matches_clamped_formula() {
        for &(gain, bias) in &[(0.5, 3.0), (1.7, -20.0), (0.0, 42.0), (3.0, 0.25)] {
            let lut = build_affine_lut(gain, bias).unwrap();
            for i in 0..=255u8 {
                let expected = (i as f64 * gain + bias).clamp(0.0, 255.0) as u8;
                assert_eq!(lut.lookup(i), expected, "gain={gain} bias={bias} i={i}");
            }
        }
    }

    #[test]
    fn test_affine_clamps_high() {
        let lut = build_affine_lut(2.0, 300.0).unwrap();
        assert_eq!(lut.lookup(200), 255);
        assert_eq!(lut.lookup(0), 255);
    }

    #[test]
    fn test_affine_negative_saturates() {
        let lut = build_affine_lut(-1.0, 0.0).unwrap();
        assert_eq!(lut.lookup(0), 0);
        assert_eq!(lut.lookup(255), 0);
    }

    #[test]
    fn test_affine_rejects_nan() {
        assert!(matches!(
            build_affine_lut(f64::NAN, 0.0),
            Err(LutError::InvalidParameter { name: "gain", .. })
        ));
        assert!(matches!(
            build_affine_lut(1.0, f64::INFINITY),
            Err(LutError::InvalidParameter { name: "bias", .. })
        ));
    }

    #[test]
    fn test_power_boundaries() {
        for &e in &[0.1, 0.45, 1.0, 2.2, 10.0] {
            let lut = build_power_lut(e).unwrap();
            assert_eq!(lut.lookup(0), 0);
            assert_eq!(lut.lookup(255), 255);
        }
    }

    #[test]
    fn test_power_unit_exponent_is_identity() {
        assert!(build_power_lut(1.0).unwrap().is_identity());
    }

    #[test]
    fn test_power_midpoint() {
        let lut = build_power_lut(2.0).unwrap();
        // sqrt(0.5) * 255 = 180.31
        let expected = (0.5f64.sqrt() * 255.0) as f32;
        assert_abs_diff_eq!(lut.lookup(128) as f32, expected, epsilon = 1.5);
    }

    #[test]
    fn test_power_is_monotonic() {
        let lut = build_power_lut(2.2).unwrap();
        assert!(lut.as_slice().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_power_rejects_non_positive() {
        assert_eq!(build_power_lut(0.0), Err(LutError::InvalidExponent(0.0)));
        assert_eq!(build_power_lut(-2.2), Err(LutError::InvalidExponent(-2.2)));
        assert!(build_power_lut(f64::NAN).is_err());
        assert!(build_power_lut(f64::INFINITY).is_err());
    }

    #[test]
    fn test_params_conversion() {
        let p: AffineParams = (2.0, -1.0).into();
        assert_eq!(p, AffineParams::new(2.0, -1.0));
        assert_eq!(AffineParams::default(), AffineParams::identity());
    }
}
