//! Channel-wise gain/bias color balance.
//!
//! Each of the three channels gets its own affine LUT
//! (`out = clamp(gain * in + bias)`). Channels never mix: channel 0 only
//! ever reads channel 0.
//!
//! Channels are positional. [`apply_channel_balance`] maps `red` to index 0;
//! use [`apply_channel_balance_bgr`] for buffers decoded in B, G, R order.
//!
//! # Example
//!
//! ```rust
//! use tint_core::Image;
//! use tint_lut::AffineParams;
//! use tint_ops::balance::apply_channel_balance;
//!
//! let img = Image::filled(2, 2, &[100, 100, 100]);
//! let out = apply_channel_balance(
//!     &img,
//!     AffineParams::new(2.0, 0.0),
//!     AffineParams::identity(),
//!     AffineParams::identity(),
//! )
//! .unwrap();
//! assert_eq!(out.pixel(0, 0), &[200, 100, 100]);
//! ```

use crate::kernel::map_samples;
use crate::OpsResult;
use tint_core::{Image, RGB_CHANNELS};
use tint_lut::{AffineParams, Lut};
use tracing::debug;

/// Applies one LUT per channel and returns a new image.
///
/// `luts[c]` remaps channel `c`. The input is never modified.
///
/// # Errors
///
/// Returns [`OpsError::InvalidChannelCount`](crate::OpsError::InvalidChannelCount)
/// unless the image has exactly 3 channels.
pub fn apply_luts(image: &Image, luts: &[Lut; 3]) -> OpsResult<Image> {
    image.ensure_channels(RGB_CHANNELS)?;
    if luts.iter().all(Lut::is_identity) {
        debug!("all channel LUTs are identity, copying input");
        return Ok(image.clone());
    }
    let data = map_samples(image.data(), image.row_len(), luts);
    Ok(Image::from_data(image.width(), image.height(), image.channels(), data)?)
}

/// Color-balances a 3-channel image with independent gain/bias per channel.
///
/// `red` drives channel 0, `green` channel 1 and `blue` channel 2.
///
/// # Errors
///
/// - [`OpsError::InvalidChannelCount`](crate::OpsError::InvalidChannelCount)
///   for images that are not 3-channel.
/// - [`OpsError::Lut`](crate::OpsError::Lut) if a gain or bias is not finite.
pub fn apply_channel_balance(
    image: &Image,
    red: AffineParams,
    green: AffineParams,
    blue: AffineParams,
) -> OpsResult<Image> {
    debug!(?red, ?green, ?blue, "channel balance");
    let luts = [red.to_lut()?, green.to_lut()?, blue.to_lut()?];
    apply_luts(image, &luts)
}

/// Same as [`apply_channel_balance`] for buffers stored B, G, R.
///
/// `blue` drives channel 0 and `red` channel 2, so callers can keep naming
/// parameters by color regardless of how the decoder ordered the planes.
pub fn apply_channel_balance_bgr(
    image: &Image,
    red: AffineParams,
    green: AffineParams,
    blue: AffineParams,
) -> OpsResult<Image> {
    apply_channel_balance(image, blue, green, red)
}
