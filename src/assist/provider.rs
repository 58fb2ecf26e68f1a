use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while asking a provider for text.
/// None of them reach the user: `AssistClient` turns every one into a fallback message.
#[derive(Debug)]
pub enum ProviderError {
    /// Provider misconfigured (missing API key, bad URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned an error response.
    Api { status: u16, message: String },
    /// The response didn't contain usable text.
    Parse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Config(msg) => write!(f, "config error: {msg}"),
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ProviderError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Everything a provider needs for a single-shot generation.
pub struct GenerationRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Sends one prompt and returns the complete response text.
    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, ProviderError>;
}
