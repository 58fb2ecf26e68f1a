//! Google Gemini provider using the `generateContent` endpoint.
//!
//! One request, one complete response. No streaming, no retries.
//!
//! ```text
//! POST {base_url}/models/{model}:generateContent
//! x-goog-api-key: <key>
//! {"contents":[{"parts":[{"text":"<prompt>"}]}]}
//! ```

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::assist::{GenerationRequest, ProviderError, TextGenerator};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// ============================================================================
// Gemini API Types
// ============================================================================

#[derive(Serialize, Debug)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    role: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    #[serde(default)]
    content: Content,
    #[serde(rename = "finishReason", default)]
    finish_reason: Option<String>,
}

/// `{"error": {"code": 400, "message": "...", "status": "INVALID_ARGUMENT"}}`
#[derive(Deserialize, Debug)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
    message: String,
}

// ============================================================================
// Translation Layer
// ============================================================================

fn build_request(prompt: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: Some(prompt.to_string()),
            }],
            role: None,
        }],
    }
}

/// Concatenates the text parts of the first candidate, the way the SDK's
/// `response.text` accessor does.
fn response_text(response: &GenerateContentResponse) -> Option<String> {
    let candidate = response.candidates.first()?;
    debug!("Gemini finish reason: {:?}", candidate.finish_reason);
    let text: String = candidate
        .content
        .parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect();
    if text.is_empty() { None } else { Some(text) }
}

/// Pulls the human-readable message out of an error body, falling back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|env| env.error.message)
        .unwrap_or_else(|_| body.to_string())
}

// ============================================================================
// Provider Implementation
// ============================================================================

pub struct GeminiGenerator {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiGenerator {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            api_key,
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::Config("Gemini API key is empty".to_string()));
        }

        let url = format!("{}/models/{}:generateContent", self.base_url, request.model);
        info!(
            "Gemini generateContent request: model={}, prompt_len={}",
            request.model,
            request.prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&build_request(request.prompt))
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        debug!("Gemini response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Gemini API error: {} - {}", status, err_body);
            return Err(ProviderError::Api {
                status,
                message: api_error_message(&err_body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Parse(e.to_string()))?;

        let text = response_text(&parsed)
            .ok_or_else(|| ProviderError::Parse("response contained no text".to_string()))?;
        info!("Gemini response: {} bytes of text", text.len());
        Ok(text)
    }
}
