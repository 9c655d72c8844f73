//! # tint-lut
//!
//! 8-bit lookup tables for per-sample image transforms.
//!
//! # LUT Types
//!
//! - [`Lut`] - exactly 256 `u8` entries, index = input sample
//! - [`AffineParams`] - gain/bias pair for channel balance curves
//!
//! # Builders
//!
//! - [`build_affine_lut`] - `clamp(i * gain + bias)`
//! - [`build_power_lut`] - `(i / 255) ^ (1 / exponent) * 255`
//!
//! # Usage
//!
//! ```rust
//! use tint_lut::{build_affine_lut, build_power_lut};
//!
//! let boost = build_affine_lut(1.2, 10.0).unwrap();
//! let gamma = build_power_lut(2.2).unwrap();
//!
//! let mut row = vec![0u8, 64, 128, 255];
//! boost.then(&gamma).apply_in_place(&mut row);
//! assert!(row[0] > 10); // bias 10, then lifted by gamma
//! assert_eq!(row[3], 255);
//! ```
//!
//! # Dependencies
//!
//! - [`tint-core`] - sample quantization
//! - [`thiserror`] - error handling
//! - [`tracing`] - debug logging of LUT construction

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod curve;
mod error;
mod lut;

pub use curve::{build_affine_lut, build_power_lut, AffineParams};
pub use error::{LutError, LutResult};
pub use lut::{Lut, LUT_SIZE};
