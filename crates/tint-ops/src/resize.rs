//! Image resampling.
//!
//! Used by the dyadic blend to bring the secondary operand onto the
//! primary's grid, and exposed on its own for the CLI.
//!
//! The resampler is separable: one pass along x, one along y, each a
//! normalized weighted sum over the filter support. Given the same input
//! and filter the output is bit-for-bit deterministic.
//!
//! # Filters
//!
//! - [`Filter::Nearest`] - box of width 1 (blocky)
//! - [`Filter::Bilinear`] - triangle (default for blending)
//! - [`Filter::Bicubic`] - Mitchell-Netravali, B = C = 1/3
//! - [`Filter::Lanczos3`] - windowed sinc, best for downscaling
//!
//! # Example
//!
//! ```rust
//! use tint_core::Image;
//! use tint_ops::resize::{resize, Filter};
//!
//! let src = Image::filled(8, 8, &[40, 80, 120]);
//! let dst = resize(&src, 16, 4, Filter::Bilinear).unwrap();
//! assert_eq!(dst.shape(), (4, 16, 3));
//! assert_eq!(dst.pixel(3, 2), &[40, 80, 120]);
//! ```

use crate::{OpsError, OpsResult};
use tint_core::{quantize, Image};
use tracing::trace;

/// Resampling filter for resize operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Nearest-neighbor.
    Nearest,
    /// Triangle filter.
    #[default]
    Bilinear,
    /// Mitchell-Netravali cubic.
    Bicubic,
    /// Lanczos, a = 3.
    Lanczos3,
}

impl Filter {
    /// Every filter, in CLI listing order.
    pub const ALL: [Filter; 4] = [
        Filter::Nearest,
        Filter::Bilinear,
        Filter::Bicubic,
        Filter::Lanczos3,
    ];

    /// Lower-case name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Filter::Nearest => "nearest",
            Filter::Bilinear => "bilinear",
            Filter::Bicubic => "bicubic",
            Filter::Lanczos3 => "lanczos3",
        }
    }

    /// Parses a filter name, accepting a few common aliases.
    pub fn from_name(name: &str) -> Option<Filter> {
        match name.to_ascii_lowercase().as_str() {
            "nearest" | "box" => Some(Filter::Nearest),
            "bilinear" | "linear" | "triangle" => Some(Filter::Bilinear),
            "bicubic" | "cubic" | "mitchell" => Some(Filter::Bicubic),
            "lanczos" | "lanczos3" => Some(Filter::Lanczos3),
            _ => None,
        }
    }

    /// Support radius in source pixels at scale 1.
    #[inline]
    pub fn support(self) -> f32 {
        match self {
            Filter::Nearest => 0.5,
            Filter::Bilinear => 1.0,
            Filter::Bicubic => 2.0,
            Filter::Lanczos3 => 3.0,
        }
    }

    /// Kernel weight at distance `x`.
    #[inline]
    pub fn weight(self, x: f32) -> f32 {
        let ax = x.abs();
        match self {
            Filter::Nearest => {
                if ax < 0.5 {
                    1.0
                } else {
                    0.0
                }
            }
            Filter::Bilinear => (1.0 - ax).max(0.0),
            Filter::Bicubic => mitchell(ax),
            Filter::Lanczos3 => lanczos(ax, 3.0),
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[inline]
fn mitchell(ax: f32) -> f32 {
    const B: f32 = 1.0 / 3.0;
    const C: f32 = 1.0 / 3.0;
    if ax < 1.0 {
        ((12.0 - 9.0 * B - 6.0 * C) * ax * ax * ax
            + (-18.0 + 12.0 * B + 6.0 * C) * ax * ax
            + (6.0 - 2.0 * B))
            / 6.0
    } else if ax < 2.0 {
        ((-B - 6.0 * C) * ax * ax * ax
            + (6.0 * B + 30.0 * C) * ax * ax
            + (-12.0 * B - 48.0 * C) * ax
            + (8.0 * B + 24.0 * C))
            / 6.0
    } else {
        0.0
    }
}

#[inline]
fn lanczos(ax: f32, a: f32) -> f32 {
    if ax < 1e-8 {
        1.0
    } else if ax < a {
        let pi_x = std::f32::consts::PI * ax;
        let pi_x_a = pi_x / a;
        (pi_x.sin() / pi_x) * (pi_x_a.sin() / pi_x_a)
    } else {
        0.0
    }
}

/// Precomputed taps for one output coordinate.
struct Taps {
    first: usize,
    weights: Vec<f32>,
}

/// Computes normalized taps mapping `dst_len` outputs onto `src_len` inputs.
fn taps(src_len: usize, dst_len: usize, filter: Filter) -> Vec<Taps> {
    let scale = src_len as f32 / dst_len as f32;
    // widen the kernel when minifying so every source pixel contributes
    let stretch = scale.max(1.0);
    let support = filter.support() * stretch;

    (0..dst_len)
        .map(|d| {
            let center = (d as f32 + 0.5) * scale - 0.5;
            let lo = ((center - support).floor().max(0.0)) as usize;
            let hi = ((center + support).ceil().max(0.0) as usize).min(src_len - 1);
            let lo = lo.min(hi);

            let mut weights: Vec<f32> = (lo..=hi)
                .map(|s| filter.weight((s as f32 - center) / stretch))
                .collect();
            let sum: f32 = weights.iter().sum();
            if sum.abs() > f32::EPSILON {
                weights.iter_mut().for_each(|w| *w /= sum);
            } else {
                // degenerate kernel: fall back to the closest sample
                let nearest = (center.round().max(0.0) as usize).clamp(lo, hi);
                weights.iter_mut().for_each(|w| *w = 0.0);
                weights[nearest - lo] = 1.0;
            }
            Taps { first: lo, weights }
        })
        .collect()
}

/// Resizes interleaved `f32` samples.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`] if `src` does not hold
/// `src_w * src_h * channels` samples or if either size has zero area.
///
/// # Example
///
/// ```rust
/// use tint_ops::resize::{resize_f32, Filter};
///
/// let src = vec![0.5f32; 16 * 16 * 3];
/// let dst = resize_f32(&src, 16, 16, 3, 32, 8, Filter::Bicubic).unwrap();
/// assert_eq!(dst.len(), 32 * 8 * 3);
/// ```
pub fn resize_f32(
    src: &[f32],
    src_w: usize,
    src_h: usize,
    channels: usize,
    dst_w: usize,
    dst_h: usize,
    filter: Filter,
) -> OpsResult<Vec<f32>> {
    let expected = src_w * src_h * channels;
    if src.len() != expected {
        return Err(OpsError::InvalidDimensions(format!(
            "expected {} samples, got {}",
            expected,
            src.len()
        )));
    }
    if src_w == 0 || src_h == 0 {
        return Err(OpsError::InvalidDimensions(
            "cannot resample a zero-area image".into(),
        ));
    }
    if dst_w == 0 || dst_h == 0 {
        return Err(OpsError::InvalidDimensions(
            "destination size must be > 0".into(),
        ));
    }

    trace!(src_w, src_h, dst_w, dst_h, %filter, "resample");

    // horizontal pass: src_h rows of dst_w pixels
    let x_taps = taps(src_w, dst_w, filter);
    let mut tmp = vec![0.0f32; dst_w * src_h * channels];
    for y in 0..src_h {
        let src_row = &src[y * src_w * channels..(y + 1) * src_w * channels];
        let dst_row = &mut tmp[y * dst_w * channels..(y + 1) * dst_w * channels];
        for (x, t) in x_taps.iter().enumerate() {
            let out = &mut dst_row[x * channels..(x + 1) * channels];
            for (k, &w) in t.weights.iter().enumerate() {
                let s = (t.first + k) * channels;
                for c in 0..channels {
                    out[c] += src_row[s + c] * w;
                }
            }
        }
    }

    // vertical pass
    let y_taps = taps(src_h, dst_h, filter);
    let row_len = dst_w * channels;
    let mut dst = vec![0.0f32; dst_h * row_len];
    for (y, t) in y_taps.iter().enumerate() {
        let out = &mut dst[y * row_len..(y + 1) * row_len];
        for (k, &w) in t.weights.iter().enumerate() {
            let sy = t.first + k;
            let src_row = &tmp[sy * row_len..(sy + 1) * row_len];
            for (o, &v) in out.iter_mut().zip(src_row) {
                *o += v * w;
            }
        }
    }

    Ok(dst)
}

/// Resizes an 8-bit image to `width` x `height`.
///
/// Samples are resampled in float and quantized back with
/// [`tint_core::quantize`]. Resizing to the current size returns a copy.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`] if either the source or the
/// target has zero area.
pub fn resize(image: &Image, width: u32, height: u32, filter: Filter) -> OpsResult<Image> {
    if image.dimensions() == (width, height) && !image.is_empty() {
        return Ok(image.clone());
    }
    let src: Vec<f32> = image.data().iter().map(|&v| v as f32).collect();
    let out = resize_f32(
        &src,
        image.width() as usize,
        image.height() as usize,
        image.channels() as usize,
        width as usize,
        height as usize,
        filter,
    )?;
    let data = out.into_iter().map(quantize).collect();
    Ok(Image::from_data(width, height, image.channels(), data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_weights() {
        assert_eq!(Filter::Nearest.weight(0.0), 1.0);
        assert_eq!(Filter::Nearest.weight(0.6), 0.0);
        assert_eq!(Filter::Bilinear.weight(0.0), 1.0);
        assert!((Filter::Bilinear.weight(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(Filter::Bilinear.weight(1.5), 0.0);
        assert_eq!(Filter::Lanczos3.weight(0.0), 1.0);
    }

    #[test]
    fn test_filter_names_roundtrip() {
        for f in Filter::ALL {
            assert_eq!(Filter::from_name(f.name()), Some(f));
        }
        assert_eq!(Filter::from_name("LINEAR"), Some(Filter::Bilinear));
        assert_eq!(Filter::from_name("sinc"), None);
    }

    #[test]
    fn test_same_size_bilinear_is_exact() {
        let src: Vec<f32> = (0..4 * 3 * 3).map(|v| v as f32).collect();
        let dst = resize_f32(&src, 4, 3, 3, 4, 3, Filter::Bilinear).unwrap();
        for (a, b) in src.iter().zip(&dst) {
            assert!((a - b).abs() < 1e-4);
        }
    }

    #[test]
    fn test_constant_stays_constant() {
        for f in Filter::ALL {
            let src = Image::filled(5, 7, &[17, 128, 250]);
            let up = resize(&src, 13, 11, f).unwrap();
            let down = resize(&src, 2, 3, f).unwrap();
            assert!(up.data().chunks(3).all(|p| p == [17, 128, 250]), "{f}");
            assert!(down.data().chunks(3).all(|p| p == [17, 128, 250]), "{f}");
        }
    }

    #[test]
    fn test_resize_upscale_shape() {
        let src = Image::new(4, 4, 3);
        let dst = resize(&src, 8, 6, Filter::Bilinear).unwrap();
        assert_eq!(dst.shape(), (6, 8, 3));
    }

    #[test]
    fn test_resize_bilinear_gradient_is_monotonic() {
        let src = Image::from_data(2, 1, 3, vec![0, 0, 0, 255, 255, 255]).unwrap();
        let dst = resize(&src, 8, 1, Filter::Bilinear).unwrap();
        let plane = dst.channel_plane(0).unwrap();
        assert!(plane.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(plane[0], 0);
        assert_eq!(plane[7], 255);
    }

    #[test]
    fn test_resize_zero_area() {
        let src = Image::new(0, 4, 3);
        assert!(matches!(
            resize(&src, 4, 4, Filter::Bilinear),
            Err(OpsError::InvalidDimensions(_))
        ));
        let src = Image::new(4, 4, 3);
        assert!(resize(&src, 0, 4, Filter::Bilinear).is_err());
    }

    #[test]
    fn test_resize_f32_wrong_len() {
        assert!(resize_f32(&[0.0; 5], 2, 2, 3, 4, 4, Filter::Nearest).is_err());
    }
}
