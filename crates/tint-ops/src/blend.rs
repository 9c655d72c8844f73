//! Linear dyadic blending of two images.
//!
//! ```text
//! out = clamp((1 - f) * secondary / 255 + f * primary / 255, 0, 1) * 255
//! ```
//!
//! The factor `f` is clamped to `[0, 1]`. The output always has the
//! primary's shape: if the secondary's width or height differ it is
//! resampled onto the primary's grid first (bilinear unless another
//! [`Filter`] is requested). The primary is never resized.
//!
//! # Example
//!
//! ```rust
//! use tint_core::Image;
//! use tint_ops::blend::blend;
//!
//! let white = Image::filled(4, 4, &[255, 255, 255]);
//! let black = Image::filled(4, 4, &[0, 0, 0]);
//! let grey = blend(&white, &black, 0.5).unwrap();
//! assert_eq!(grey.pixel(0, 0), &[128, 128, 128]);
//! ```

use crate::kernel::mix_samples;
use crate::resize::{resize, Filter};
use crate::{OpsError, OpsResult};
use std::borrow::Cow;
use tint_core::Image;
use tracing::debug;

/// Clamps a blend factor to `[0, 1]`.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] for NaN, which has no meaningful
/// clamp.
pub fn clamp_factor(factor: f64) -> OpsResult<f32> {
    if factor.is_nan() {
        return Err(OpsError::InvalidParameter("blend factor is NaN".into()));
    }
    Ok(factor.clamp(0.0, 1.0) as f32)
}

/// Blends `primary` and `secondary` with weight `factor` on the primary.
///
/// Equivalent to [`blend_with_filter`] with [`Filter::Bilinear`].
pub fn blend(primary: &Image, secondary: &Image, factor: f64) -> OpsResult<Image> {
    blend_with_filter(primary, secondary, factor, Filter::Bilinear)
}

/// Blends two images, resampling `secondary` with `filter` when its size
/// differs from `primary`.
///
/// # Errors
///
/// - [`OpsError::InvalidDimensions`] if either operand has zero area.
/// - [`OpsError::ChannelMismatch`] if the operands' channel counts differ.
/// - [`OpsError::InvalidParameter`] if `factor` is NaN.
pub fn blend_with_filter(
    primary: &Image,
    secondary: &Image,
    factor: f64,
    filter: Filter,
) -> OpsResult<Image> {
    let factor = clamp_factor(factor)?;
    if primary.is_empty() || secondary.is_empty() {
        return Err(OpsError::InvalidDimensions(format!(
            "cannot blend zero-area images: {}x{} and {}x{}",
            primary.width(),
            primary.height(),
            secondary.width(),
            secondary.height()
        )));
    }
    if primary.channels() != secondary.channels() {
        return Err(OpsError::ChannelMismatch {
            primary: primary.channels(),
            secondary: secondary.channels(),
        });
    }

    let secondary: Cow<'_, Image> = if secondary.dimensions() == primary.dimensions() {
        Cow::Borrowed(secondary)
    } else {
        debug!(
            from = ?secondary.dimensions(),
            to = ?primary.dimensions(),
            %filter,
            "resizing secondary to primary"
        );
        Cow::Owned(resize(secondary, primary.width(), primary.height(), filter)?)
    };

    debug!(factor, "dyadic blend");
    let data = mix_samples(primary.data(), secondary.data(), primary.row_len(), factor);
    Ok(Image::from_data(primary.width(), primary.height(), primary.channels(), data)?)
}
