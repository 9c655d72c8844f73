//! Gamma correction through a single shared LUT.
//!
//! `out = (in / 255) ^ (1 / gamma) * 255` for every sample of every channel.
//! One table serves all channels; this is not per-channel gamma.

use crate::kernel::map_samples;
use crate::OpsResult;
use tint_core::Image;
use tint_lut::{build_power_lut, Lut};
use tracing::debug;

/// Applies `lut` uniformly to every sample and returns a new image.
///
/// Works for any channel count.
pub fn apply_lut(image: &Image, lut: &Lut) -> OpsResult<Image> {
    if lut.is_identity() {
        return Ok(image.clone());
    }
    let data = map_samples(image.data(), image.row_len(), std::slice::from_ref(lut));
    Ok(Image::from_data(image.width(), image.height(), image.channels(), data)?)
}

/// Gamma-corrects an image.
///
/// # Errors
///
/// Returns [`OpsError::Lut`](crate::OpsError::Lut) wrapping
/// `LutError::InvalidExponent` if `gamma <= 0` or is not finite.
///
/// # Example
///
/// ```rust
/// use tint_core::Image;
/// use tint_ops::gamma::apply_gamma;
///
/// let img = Image::filled(4, 4, &[0, 64, 255]);
/// let out = apply_gamma(&img, 2.2).unwrap();
/// let px = out.pixel(0, 0);
/// assert_eq!(px[0], 0);
/// assert!(px[1] > 64);
/// assert_eq!(px[2], 255);
///
/// assert!(apply_gamma(&img, 0.0).is_err());
/// ```
pub fn apply_gamma(image: &Image, gamma: f64) -> OpsResult<Image> {
    let lut = build_power_lut(gamma)?;
    debug!(gamma, width = image.width(), height = image.height(), "gamma correction");
    apply_lut(image, &lut)
}
