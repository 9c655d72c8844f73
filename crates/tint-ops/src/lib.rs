//! # tint-ops
//!
//! Per-pixel image operations on 8-bit, 3-channel buffers.
//!
//! Every operation is a pure function: it borrows its inputs and returns a
//! freshly allocated [`Image`](tint_core::Image). Nothing is mutated in
//! place and no state survives between calls.
//!
//! # Modules
//!
//! - [`balance`] - per-channel gain/bias color balance
//! - [`gamma`] - gamma correction with one shared LUT
//! - [`blend`] - linear dyadic blend of two images
//! - [`resize`] - separable resampling used by the blend
//!
//! With the `parallel` feature (on by default) rows are processed on the
//! Rayon pool; output is identical to the serial build.
//!
//! # Example
//!
//! ```rust
//! use tint_core::Image;
//! use tint_lut::AffineParams;
//! use tint_ops::{apply_channel_balance, apply_gamma, blend};
//!
//! let frame = Image::filled(8, 8, &[30, 60, 90]);
//! let warm = apply_channel_balance(
//!     &frame,
//!     AffineParams::new(1.2, 5.0),
//!     AffineParams::identity(),
//!     AffineParams::new(0.9, 0.0),
//! )?;
//! let lifted = apply_gamma(&warm, 2.2)?;
//! let mixed = blend(&lifted, &frame, 0.5)?;
//! assert_eq!(mixed.shape(), (8, 8, 3));
//! # Ok::<(), tint_ops::OpsError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod kernel;
pub mod balance;
pub mod blend;
pub mod gamma;
pub mod resize;

#[cfg(feature = "parallel")]
mod parallel;

pub use balance::{apply_channel_balance, apply_channel_balance_bgr, apply_luts};
pub use blend::{blend, blend_with_filter};
pub use error::{OpsError, OpsResult};
pub use gamma::{apply_gamma, apply_lut};
pub use resize::Filter;
