//! Row-parallel kernels using Rayon.
//!
//! Every output sample depends only on the input samples at the same
//! coordinates, so rows are processed independently with no
//! synchronization. Results match the serial kernels byte for byte.

use crate::kernel::{map_row, mix_row};
use rayon::prelude::*;
use tint_lut::Lut;

/// Applies `luts` to `src` row by row in parallel.
///
/// `luts` holds one table per interleaved channel, or a single table shared
/// by every sample. Rows are only split where `row_len` is a whole number
/// of pixels; otherwise the buffer is mapped in one piece.
pub(crate) fn map_samples(src: &[u8], row_len: usize, luts: &[Lut]) -> Vec<u8> {
    let mut out = src.to_vec();
    if out.is_empty() || luts.is_empty() {
        return out;
    }
    if row_len == 0 || row_len % luts.len() != 0 {
        map_row(&mut out, luts);
        return out;
    }
    out.par_chunks_mut(row_len).for_each(|row| map_row(row, luts));
    out
}

/// Computes `(1 - factor) * secondary + factor * primary` per sample, in
/// parallel over rows.
pub(crate) fn mix_samples(
    primary: &[u8],
    secondary: &[u8],
    row_len: usize,
    factor: f32,
) -> Vec<u8> {
    let mut out = vec![0u8; primary.len()];
    if out.is_empty() {
        return out;
    }
    if row_len == 0 {
        mix_row(&mut out, primary, secondary, factor);
        return out;
    }
    out.par_chunks_mut(row_len)
        .zip(primary.par_chunks(row_len))
        .zip(secondary.par_chunks(row_len))
        .for_each(|((o, p), s)| mix_row(o, p, s, factor));
    out
}
