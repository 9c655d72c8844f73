//! Per-sample kernels shared by the image operations.
//!
//! Each kernel has a serial form here and a row-parallel form in
//! [`crate::parallel`]. Both produce identical bytes; the `parallel` feature
//! only selects which one the public operations call.

use tint_core::{normalize, quantize, SAMPLE_MAX};
use tint_lut::Lut;

/// Linear dyadic mix of one sample pair in normalized space.
#[inline]
pub(crate) fn mix_sample(primary: u8, secondary: u8, factor: f32) -> u8 {
    let v = (1.0 - factor) * normalize(secondary) + factor * normalize(primary);
    quantize(v.clamp(0.0, 1.0) * SAMPLE_MAX)
}

/// Remaps `row` in place. `luts` holds one table per interleaved channel,
/// or a single table shared by all of them.
#[inline]
pub(crate) fn map_row(row: &mut [u8], luts: &[Lut]) {
    if luts.is_empty() {
        return;
    }
    for px in row.chunks_exact_mut(luts.len()) {
        for (s, lut) in px.iter_mut().zip(luts) {
            *s = lut.lookup(*s);
        }
    }
}

#[inline]
pub(crate) fn mix_row(out: &mut [u8], primary: &[u8], secondary: &[u8], factor: f32) {
    for ((o, &p), &s) in out.iter_mut().zip(primary).zip(secondary) {
        *o = mix_sample(p, s, factor);
    }
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
pub(crate) fn map_samples_serial(src: &[u8], luts: &[Lut]) -> Vec<u8> {
    let mut out = src.to_vec();
    map_row(&mut out, luts);
    out
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
pub(crate) fn mix_samples_serial(primary: &[u8], secondary: &[u8], factor: f32) -> Vec<u8> {
    let mut out = vec![0u8; primary.len()];
    mix_row(&mut out, primary, secondary, factor);
    out
}

/// Applies `luts` to every sample of `src`, returning a fresh buffer.
pub(crate) fn map_samples(src: &[u8], row_len: usize, luts: &[Lut]) -> Vec<u8> {
    #[cfg(feature = "parallel")]
    {
        crate::parallel::map_samples(src, row_len, luts)
    }
    #[cfg(not(feature = "parallel"))]
    {
        let _ = row_len;
        map_samples_serial(src, luts)
    }
}

/// Mixes two equally sized sample buffers.
pub(crate) fn mix_samples(
    primary: &[u8],
    secondary: &[u8],
    row_len: usize,
    factor: f32,
) -> Vec<u8> {
    debug_assert_eq!(primary.len(), secondary.len());
    #[cfg(feature = "parallel")]
    {
        crate::parallel::mix_samples(primary, secondary, row_len, factor)
    }
    #[cfg(not(feature = "parallel"))]
    {
        let _ = row_len;
        mix_samples_serial(primary, secondary, factor)
    }
}
