//! Error types for weighmaster

use thiserror::Error;

/// Reasons a form submission is rejected.
///
/// Checked in declaration order; only the first failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Plate Number is required.")]
    PlateRequired,

    #[error("Both gross and tare weights must be valid numbers.")]
    InvalidWeights,

    #[error("Price must be a valid number.")]
    InvalidPrice,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Audio host errors. Never shown to the operator.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Audio output unavailable: {0}")]
    Unavailable(String),

    #[error("Audio playback failed: {0}")]
    Playback(String),

    #[error("Audio IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_fixed() {
        assert_eq!(
            ValidationError::PlateRequired.to_string(),
            "Plate Number is required."
        );
        assert_eq!(
            ValidationError::InvalidWeights.to_string(),
            "Both gross and tare weights must be valid numbers."
        );
        assert_eq!(
            ValidationError::InvalidPrice.to_string(),
            "Price must be a valid number."
        );
    }

    #[test]
    fn test_config_error_converts_into_error() {
        let err: Error = ConfigError::NotFound.into();
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
