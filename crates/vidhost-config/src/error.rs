//! Error types for configuration documents.

use thiserror::Error;

/// Primary error type for configuration parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Field contained an invalid value.
    #[error("invalid value for '{field}': {reason}")]
    InvalidField {
        /// Flat field key that failed validation.
        field: String,
        /// Offending value when available.
        value: Option<String>,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// Resolution label outside the supported set.
    #[error("unknown transcoding resolution '{value}'")]
    UnknownResolution {
        /// Label provided by the caller.
        value: String,
    },
    /// NSFW policy value was not recognised.
    #[error("unknown NSFW policy '{value}'")]
    UnknownNsfwPolicy {
        /// Policy payload provided by the caller.
        value: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, value: Option<String>, reason: &'static str) -> Self {
        Self::InvalidField {
            field: field.to_string(),
            value,
            reason,
        }
    }
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
