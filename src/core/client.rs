//! Translation client for chat-completion providers

use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::config::TranslationConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{ChatCompletionRequest, ChatMessage, ProviderResponse, TranslationRequest};
use crate::core::prompt::build_prompt;

/// Sends one prompt per call to the configured completion endpoint
#[derive(Debug, Clone)]
pub struct TranslationClient {
    client: reqwest::Client,
    config: Arc<TranslationConfig>,
}

impl TranslationClient {
    /// Create a new client, rejecting incomplete configuration
    pub fn new(config: TranslationConfig) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;

        Self::with_http_client(config, client)
    }

    /// Create a client on top of an existing connection pool
    pub fn with_http_client(config: TranslationConfig, client: reqwest::Client) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        Self::new(TranslationConfig::from_env()?)
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &TranslationConfig {
        &self.config
    }

    /// Translate `text` from `source_language` to `target_language`.
    ///
    /// Language codes are not validated; they are handed to the model as-is.
    /// Each call performs exactly one HTTP round trip and is not retried.
    pub async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String> {
        let prompt = build_prompt(text, source_language, target_language);
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![ChatMessage::user(prompt)],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!(
            model = %self.config.model,
            source_language,
            target_language,
            "Sending translation request"
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        match ProviderResponse::parse(&text).and_then(ProviderResponse::into_translation) {
            Ok(translation) => {
                debug!(%status, chars = translation.chars().count(), "Translation received");
                Ok(translation)
            }
            Err(TranslationError::MalformedResponse { message }) => {
                warn!(%status, "Malformed provider response: {}", message);
                Err(TranslationError::malformed(format!("HTTP {status}: {message}")))
            }
            Err(e) => {
                warn!(%status, "Provider reported an error: {}", e);
                Err(e)
            }
        }
    }

    /// Translate a prepared request
    pub async fn translate_request(&self, request: &TranslationRequest) -> Result<String> {
        self.translate(&request.text, &request.source_language, &request.target_language)
            .await
    }
}
