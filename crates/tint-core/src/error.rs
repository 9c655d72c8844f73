//! Error types for tint-core operations.
//!
//! The [`Error`] enum covers the failure modes of building and addressing an
//! [`Image`](crate::Image): bad buffer sizes and wrong channel counts.
//!
//! # Usage
//!
//! ```rust
//! use tint_core::{Error, Result};
//!
//! fn check(channels: u8) -> Result<()> {
//!     if channels != 3 {
//!         return Err(Error::invalid_channel_count(3, channels));
//!     }
//!     Ok(())
//! }
//! assert!(check(4).is_err());
//! ```
//!
//! # Used By
//!
//! - `tint-cli` - `?` into `anyhow` when loading and saving
//! - `tint-ops` - converted into `OpsError`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing or accessing images.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The image does not carry the number of channels an operation needs.
    #[error("invalid channel count: expected {expected}, got {got}")]
    InvalidChannelCount {
        /// Required channel count
        expected: u8,
        /// Actual channel count
        got: u8,
    },

    /// Invalid image dimensions or buffer length.
    ///
    /// Returned when the sample buffer length disagrees with
    /// `width * height * channels`, when the channel count is zero, or when
    /// the size computation would overflow.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Generic error with custom message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates an [`Error::InvalidChannelCount`] error.
    #[inline]
    pub fn invalid_channel_count(expected: u8, got: u8) -> Self {
        Self::InvalidChannelCount { expected, got }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::Other`] error.
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
