//! # tint-core
//!
//! Core types shared by every tint crate:
//!
//! - [`Image`] - owned `(height, width, channels)` buffer of `u8` samples
//! - [`Error`] / [`Result`] - image construction and validation errors
//! - [`quantize`], [`quantize_trunc`], [`normalize`] - float <-> sample conversion
//!
//! ## Crate Structure
//!
//! ```text
//! tint-core (this crate)
//!    ^
//!    |
//!    +-- tint-lut (256-entry lookup tables)
//!    +-- tint-ops (balance, gamma, blend, resize)
//!    +-- tint-cli (file I/O front end)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod sample;

pub use error::{Error, Result};
pub use image::{Image, RGB_CHANNELS};
pub use sample::{normalize, quantize, quantize_trunc, SAMPLE_MAX};

/// Prelude module for convenient imports.
///
/// ```
/// use tint_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::{Image, RGB_CHANNELS};
    pub use crate::sample::{normalize, quantize, quantize_trunc};
}
