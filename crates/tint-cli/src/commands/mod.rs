//! CLI command implementations

pub mod balance;
pub mod blend;
pub mod gamma;
pub mod info;
pub mod resize;

use anyhow::{Context, Result};
use std::path::Path;
use tint_core::{Image, RGB_CHANNELS};
use tracing::{debug, info};

/// Loads an image from disk as 3-channel RGB8.
///
/// Grayscale and alpha inputs are expanded or flattened by the decoder.
pub fn load_image(path: &Path) -> Result<Image> {
    let decoded = image::open(path)
        .with_context(|| format!("Failed to load: {}", path.display()))?;
    debug!(path = %path.display(), color = ?decoded.color(), "decoded");
    let rgb = decoded.to_rgb8();
    let (w, h) = rgb.dimensions();
    Image::from_data(w, h, RGB_CHANNELS, rgb.into_raw())
        .with_context(|| format!("Decoder returned a malformed buffer for {}", path.display()))
}

/// Saves a 3-channel image; the format follows the file extension.
pub fn save_image(path: &Path, img: &Image) -> Result<()> {
    img.ensure_channels(RGB_CHANNELS)?;
    let buffer = image::RgbImage::from_raw(img.width(), img.height(), img.data().to_vec())
        .context("Image buffer does not match its dimensions")?;
    buffer
        .save(path)
        .with_context(|| format!("Failed to save: {}", path.display()))?;
    info!(path = %path.display(), width = img.width(), height = img.height(), "saved");
    Ok(())
}
