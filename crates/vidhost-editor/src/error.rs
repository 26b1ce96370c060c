//! Error types for the configuration editor.

use thiserror::Error;

use crate::field::FieldKind;

/// Failure to move values between the flat form and the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Form has no value for a bound field.
    #[error("form field '{key}' has no value")]
    MissingValue {
        /// Flat form key.
        key: String,
    },
    /// Form value could not be decoded into the document type.
    #[error("form field '{key}' holds a value its {expected} control cannot store")]
    InvalidValue {
        /// Flat form key.
        key: String,
        /// Control type the binding expects.
        expected: FieldKind,
    },
    /// Key is not registered in the form schema.
    #[error("unknown form field '{key}'")]
    UnknownField {
        /// Flat form key supplied by the caller.
        key: String,
    },
}

/// Primary error type for editor operations.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Fetching the current configuration failed.
    #[error("failed to load configuration: {message}")]
    LoadFailure {
        /// Message reported by the configuration service.
        message: String,
    },
    /// Persisting the edited configuration failed.
    #[error("failed to save configuration: {message}")]
    SaveFailure {
        /// Message reported by the configuration service.
        message: String,
    },
    /// Submission blocked by field validators.
    #[error("configuration form has invalid fields: {}", fields.join(", "))]
    InvalidForm {
        /// Keys of the failing fields, in form order.
        fields: Vec<String>,
    },
    /// Form could not be mapped onto the document.
    #[error(transparent)]
    Mapping(#[from] MappingError),
    /// Editor settings were malformed.
    #[error("invalid editor setting {variable}='{value}'")]
    Settings {
        /// Environment variable that carried the value.
        variable: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// Convenience alias for editor results.
pub type EditorResult<T> = Result<T, EditorError>;
