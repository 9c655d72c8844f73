//! Error types for image operations.

use thiserror::Error;
use tint_lut::LutError;

/// Error type for image operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    /// Image does not have the channel count the operation requires.
    #[error("invalid channel count: expected {expected}, got {got}")]
    InvalidChannelCount {
        /// Required channel count
        expected: u8,
        /// Actual channel count
        got: u8,
    },

    /// Two operands carry different channel counts.
    #[error("channel mismatch: {primary} vs {secondary}")]
    ChannelMismatch {
        /// Channels of the primary operand
        primary: u8,
        /// Channels of the secondary operand
        secondary: u8,
    },

    /// Invalid dimensions specified.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// LUT construction failed.
    #[error(transparent)]
    Lut(#[from] LutError),

    /// Image construction failed.
    #[error(transparent)]
    Core(tint_core::Error),
}

impl From<tint_core::Error> for OpsError {
    fn from(err: tint_core::Error) -> Self {
        match err {
            tint_core::Error::InvalidChannelCount { expected, got } => {
                Self::InvalidChannelCount { expected, got }
            }
            other => Self::Core(other),
        }
    }
}

impl OpsError {
    /// Returns `true` for errors caused by a bad curve parameter.
    #[inline]
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter(_)
                | Self::Lut(LutError::InvalidExponent(_) | LutError::InvalidParameter { .. })
        )
    }
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tint_core::Image;

    #[test]
    fn test_channel_count_is_flattened() {
        let err: OpsError = Image::new(1, 1, 4).ensure_channels(3).unwrap_err().into();
        assert_eq!(err, OpsError::InvalidChannelCount { expected: 3, got: 4 });
    }

    #[test]
    fn test_other_core_errors_are_wrapped() {
        let err: OpsError = Image::from_data(2, 2, 3, vec![0; 5]).unwrap_err().into();
        assert!(matches!(err, OpsError::Core(tint_core::Error::InvalidDimensions { .. })));
    }
}
