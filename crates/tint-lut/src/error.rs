//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while building a LUT.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LutError {
    /// Power-law exponent is zero, negative or not finite.
    ///
    /// `1 / exponent` is undefined at zero and flips the curve for negative
    /// values, so such exponents are rejected instead of producing garbage.
    #[error("invalid exponent {0}: must be finite and > 0")]
    InvalidExponent(f64),

    /// A curve parameter is not a finite number.
    #[error("invalid parameter {name} = {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Table does not have exactly 256 entries.
    #[error("invalid LUT size: expected 256 entries, got {0}")]
    InvalidSize(usize),
}
