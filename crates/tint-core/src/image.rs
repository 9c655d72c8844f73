//! 8-bit image buffer.
//!
//! [`Image`] is the single container every tint operation consumes and
//! produces: a `(height, width, channels)` array of `u8` samples.
//!
//! # Memory Layout
//!
//! Samples are stored **row-major**, top-to-bottom, with channels interleaved:
//!
//! ```text
//! Memory: [c0 c1 c2 c0 c1 c2 c0 c1 c2 ...]  <- Row 0
//!         [c0 c1 c2 c0 c1 c2 c0 c1 c2 ...]  <- Row 1
//!         ...
//! ```
//!
//! Channels are purely positional. Whether index 0 is red or blue is up to
//! whoever decoded the buffer; tint never reorders them.
//!
//! # Usage
//!
//! ```rust
//! use tint_core::Image;
//!
//! let mut img = Image::filled(4, 2, &[10, 20, 30]);
//! assert_eq!(img.shape(), (2, 4, 3));
//!
//! img.set_pixel(1, 1, &[255, 0, 0]);
//! assert_eq!(img.pixel(1, 1), &[255, 0, 0]);
//! ```

use crate::{Error, Result};

/// Number of channels in a tristimulus image.
pub const RGB_CHANNELS: u8 = 3;

/// Owned 8-bit image buffer with interleaved channels.
///
/// Every sample is a `u8`, so the `[0, 255]` range invariant holds by
/// construction. The buffer length always equals
/// `width * height * channels`.
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl Image {
    /// Creates a new image filled with zeros.
    ///
    /// # Panics
    ///
    /// Panics if `channels` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_core::Image;
    ///
    /// let img = Image::new(640, 480, 3);
    /// assert_eq!(img.width(), 640);
    /// assert_eq!(img.data().len(), 640 * 480 * 3);
    /// ```
    pub fn new(width: u32, height: u32, channels: u8) -> Self {
        assert!(channels > 0, "image must have at least one channel");
        let len = width as usize * height as usize * channels as usize;
        Self {
            data: vec![0; len],
            width,
            height,
            channels,
        }
    }

    /// Creates an image where every pixel equals `pixel`.
    ///
    /// The channel count is taken from `pixel.len()`.
    ///
    /// # Panics
    ///
    /// Panics if `pixel` is empty or longer than 255 channels.
    pub fn filled(width: u32, height: u32, pixel: &[u8]) -> Self {
        let channels = u8::try_from(pixel.len()).expect("too many channels");
        assert!(channels > 0, "image must have at least one channel");
        let pixel_count = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixel_count * pixel.len());
        for _ in 0..pixel_count {
            data.extend_from_slice(pixel);
        }
        Self {
            data,
            width,
            height,
            channels,
        }
    }

    /// Creates an image from existing interleaved sample data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `channels` is zero, if the
    /// size overflows, or if `data.len() != width * height * channels`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_core::Image;
    ///
    /// let img = Image::from_data(2, 1, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(img.pixel(1, 0), &[4, 5, 6]);
    /// assert!(Image::from_data(2, 1, 3, vec![0; 5]).is_err());
    /// ```
    pub fn from_data(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self> {
        if channels == 0 {
            return Err(Error::invalid_dimensions(width, height, "zero channels"));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(channels as usize))
            .ok_or_else(|| Error::invalid_dimensions(width, height, "size overflows"))?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the number of interleaved channels.
    #[inline]
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns `(height, width, channels)`, the array shape of the buffer.
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of samples in one row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    /// Returns the raw interleaved samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the raw interleaved samples mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the image and returns its sample buffer.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels as usize
    }

    /// Returns the samples of pixel (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        &self.data[offset..offset + self.channels as usize]
    }

    /// Returns the samples of pixel (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Overwrites pixel (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds or `pixel.len()` differs from the
    /// channel count.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: &[u8]) {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        self.data[offset..offset + self.channels as usize].copy_from_slice(pixel);
    }

    /// Returns row `y` as interleaved samples.
    ///
    /// # Panics
    ///
    /// Panics if y >= height.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.row_len();
        &self.data[start..start + self.row_len()]
    }

    /// Extracts one channel as a `height * width` plane.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Other`] if `channel >= channels()`.
    pub fn channel_plane(&self, channel: u8) -> Result<Vec<u8>> {
        if channel >= self.channels {
            return Err(Error::other(format!(
                "channel {} out of range for {}-channel image",
                channel, self.channels
            )));
        }
        Ok(self
            .data
            .chunks_exact(self.channels as usize)
            .map(|px| px[channel as usize])
            .collect())
    }

    /// Fails with [`Error::InvalidChannelCount`] unless the image has exactly
    /// `expected` channels.
    #[inline]
    pub fn ensure_channels(&self, expected: u8) -> Result<()> {
        if self.channels != expected {
            return Err(Error::invalid_channel_count(expected, self.channels));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_new() {
        let img = Image::new(100, 50, 3);
        assert_eq!(img.shape(), (50, 100, 3));
        assert_eq!(img.pixel_count(), 5000);
        assert!(img.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_image_filled() {
        let img = Image::filled(10, 10, &[1, 2, 3]);
        assert_eq!(img.pixel(0, 0), &[1, 2, 3]);
        assert_eq!(img.pixel(9, 9), &[1, 2, 3]);
    }

    #[test]
    fn test_image_set_get_pixel() {
        let mut img = Image::new(10, 10, 3);
        img.set_pixel(5, 4, &[255, 0, 7]);
        assert_eq!(img.pixel(5, 4), &[255, 0, 7]);
        assert_eq!(img.pixel(4, 5), &[0, 0, 0]);
        assert_eq!(img.get_pixel(10, 0), None);
    }

    #[test]
    fn test_image_from_data_wrong_size() {
        let err = Image::from_data(4, 4, 3, vec![0; 10]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn test_image_from_data_zero_channels() {
        assert!(Image::from_data(4, 4, 0, Vec::new()).is_err());
    }

    #[test]
    fn test_image_row() {
        let img = Image::from_data(2, 2, 3, (0..12).collect()).unwrap();
        assert_eq!(img.row(1), &[6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_channel_plane() {
        let img = Image::from_data(2, 1, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(img.channel_plane(0).unwrap(), vec![1, 4]);
        assert_eq!(img.channel_plane(2).unwrap(), vec![3, 6]);
        assert!(img.channel_plane(3).is_err());
    }

    #[test]
    fn test_ensure_channels() {
        let rgba = Image::new(1, 1, 4);
        assert_eq!(
            rgba.ensure_channels(RGB_CHANNELS),
            Err(Error::invalid_channel_count(3, 4))
        );
        assert!(Image::new(1, 1, 3).ensure_channels(RGB_CHANNELS).is_ok());
    }

    #[test]
    fn test_is_empty() {
        assert!(Image::new(0, 10, 3).is_empty());
        assert!(!Image::new(1, 1, 3).is_empty());
    }
}
