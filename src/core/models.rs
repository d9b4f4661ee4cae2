//! Core data models for translation

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, TranslationError};

/// Translation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate, passed through verbatim
    pub text: String,
    /// Source language code
    pub source_language: String,
    /// Target language code
    pub target_language: String,
}

impl TranslationRequest {
    /// Build a request from its three parts
    pub fn new(
        text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }
}

/// Outbound chat-completion body
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    /// Provider model identifier
    pub model: &'a str,
    /// Conversation, always a single user message
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature, serialized as a float
    pub temperature: f64,
    /// Upper bound on generated tokens, serialized as an integer
    pub max_tokens: u32,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message author role
    pub role: String,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Message with the `user` role
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Provider reply, either the error shape or the success shape.
///
/// The error variant is tried first, so a body carrying an `error` key is
/// always a failure even if it also has `choices`. Choices stay raw until
/// [`ProviderResponse::into_translation`] decodes the first one; later
/// entries are never inspected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProviderResponse {
    /// Body carrying an `error` key
    Error {
        /// Provider error payload, verbatim
        error: serde_json::Value,
    },
    /// Body carrying a `choices` array
    Success {
        /// Undecoded completions
        choices: Vec<serde_json::Value>,
    },
}

/// One completion candidate
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Choice {
    /// Assistant message of this candidate
    pub message: ChoiceMessage,
}

/// Assistant message inside a choice
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChoiceMessage {
    /// Translated text
    pub content: String,
}

impl ProviderResponse {
    /// Decode a raw response body
    pub fn parse(body: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| TranslationError::malformed(format!("body is not JSON: {e}")))?;

        Self::deserialize(value).map_err(|_| {
            TranslationError::malformed("expected an `error` object or a `choices` array")
        })
    }

    /// Extract the first completion's text or the provider's error
    pub fn into_translation(self) -> Result<String> {
        match self {
            ProviderResponse::Error { error } => Err(TranslationError::failed(error)),
            ProviderResponse::Success { choices } => {
                let first = choices
                    .into_iter()
                    .next()
                    .ok_or_else(|| TranslationError::malformed("`choices` is empty"))?;

                let choice = Choice::deserialize(first).map_err(|e| {
                    TranslationError::malformed(format!("`choices[0]` has no string `message.content`: {e}"))
                })?;

                Ok(choice.message.content)
            }
        }
    }
}
