//! Custom error types for translation operations

use thiserror::Error;

/// Fixed message carried by every provider-reported failure
pub const TRANSLATION_FAILED_MESSAGE: &str = "Translation failed";

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// A required configuration value is missing, empty or unparsable
    #[error("Configuration error: {field} - {message}")]
    ConfigurationError {
        /// Name of the offending configuration value
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// The request could not be sent or the body could not be read
    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    /// The provider answered with an `error` object
    #[error("{message}: {details}")]
    TranslationFailed {
        /// Always [`TRANSLATION_FAILED_MESSAGE`]
        message: String,
        /// Provider error payload, verbatim
        details: serde_json::Value,
    },

    /// The provider answered with something other than the expected shape
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// What was missing or invalid
        message: String,
    },
}

impl TranslationError {
    /// Build a configuration error for `field`
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        TranslationError::ConfigurationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Build a provider failure carrying its error payload
    pub fn failed(details: serde_json::Value) -> Self {
        TranslationError::TranslationFailed {
            message: TRANSLATION_FAILED_MESSAGE.to_string(),
            details,
        }
    }

    /// Build a malformed-response error
    pub fn malformed(message: impl Into<String>) -> Self {
        TranslationError::MalformedResponse {
            message: message.into(),
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
