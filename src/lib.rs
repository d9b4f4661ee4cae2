//! LLM Translator - translate text through a chat-completion endpoint
//!
//! This library builds a translation prompt, sends it to a configured
//! provider in a single HTTP request, and returns the first completion's
//! text or a typed error. A small CLI and HTTP surface host the client.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod server;

// Re-export key types for convenience
pub use core::{
    client::TranslationClient,
    config::TranslationConfig,
    errors::{Result, TranslationError},
    models::{ProviderResponse, TranslationRequest},
    prompt::build_prompt,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
