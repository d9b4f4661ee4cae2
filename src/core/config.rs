//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::core::errors::{Result, TranslationError};

/// Default completion endpoint
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// Default provider model
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f64 = 0.3;
/// Default upper bound on generated tokens
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Required bearer token
pub const ENV_API_KEY: &str = "TRANSLATION_API_KEY";
/// Endpoint override
pub const ENV_API_URL: &str = "TRANSLATION_API_URL";
/// Model override
pub const ENV_MODEL: &str = "TRANSLATION_MODEL";
/// Temperature override, parsed as f64
pub const ENV_TEMPERATURE: &str = "TRANSLATION_TEMPERATURE";
/// Token limit override, parsed as u32
pub const ENV_MAX_TOKENS: &str = "TRANSLATION_MAX_TOKENS";

/// Configuration for the translation client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Bearer token sent with every request
    pub api_key: String,
    /// Absolute completion endpoint URL
    pub api_url: String,
    /// Provider model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f64,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
}

impl TranslationConfig {
    /// Build a config from its five values
    pub fn new(
        api_key: impl Into<String>,
        api_url: impl Into<String>,
        model: impl Into<String>,
        temperature: f64,
        max_tokens: u32,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: api_url.into(),
            model: model.into(),
            temperature,
            max_tokens,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .ok_or_else(|| TranslationError::config("api_key", format!("{ENV_API_KEY} is required")))?;

        let api_url = lookup(ENV_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let model = lookup(ENV_MODEL).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let temperature = parse_var(&lookup, ENV_TEMPERATURE, "temperature", DEFAULT_TEMPERATURE)?;
        let max_tokens = parse_var(&lookup, ENV_MAX_TOKENS, "max_tokens", DEFAULT_MAX_TOKENS)?;

        debug!(%api_url, %model, temperature, max_tokens, "Loaded translation config");

        Ok(Self {
            api_key,
            api_url,
            model,
            temperature,
            max_tokens,
        })
    }

    /// Load from a JSON file or the environment, with an optional API key override
    pub fn load(path: Option<&Path>, api_key: Option<String>) -> Result<Self> {
        Self::load_with(path, api_key, |name| std::env::var(name).ok())
    }

    fn load_with<F>(path: Option<&Path>, api_key: Option<String>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::from_vars(|name| match &api_key {
                Some(key) if name == ENV_API_KEY => Some(key.clone()),
                _ => lookup(name),
            })?,
        };

        if let Some(key) = api_key {
            config.api_key = key;
        }

        Ok(config)
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| TranslationError::config("file", format!("{}: {e}", path.display())))?;
        serde_json::from_str(&content)
            .map_err(|e| TranslationError::config("file", format!("{}: {e}", path.display())))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(TranslationError::config("api_key", "must not be empty"));
        }

        if self.api_url.trim().is_empty() {
            return Err(TranslationError::config("api_url", "must not be empty"));
        }

        match reqwest::Url::parse(&self.api_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(TranslationError::config(
                    "api_url",
                    format!("unsupported scheme: {}", url.scheme()),
                ));
            }
            Err(e) => {
                return Err(TranslationError::config("api_url", format!("not an absolute URL: {e}")));
            }
        }

        if self.model.trim().is_empty() {
            return Err(TranslationError::config("model", "must not be empty"));
        }

        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(TranslationError::config(
                "temperature",
                format!("must be a non-negative number, got {}", self.temperature),
            ));
        }

        if self.max_tokens == 0 {
            return Err(TranslationError::config("max_tokens", "must be greater than 0"));
        }

        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, field: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| TranslationError::config(field, format!("invalid {name}={raw:?}: {e}"))),
        None => Ok(default),
    }
}
