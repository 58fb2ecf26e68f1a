//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::assist::{AssistClient, GenerationRequest, ProviderError, TextGenerator};
use crate::core::locale::Locale;

/// A provider for tests that don't need real API calls.
pub struct NoopGenerator;

#[async_trait]
impl TextGenerator for NoopGenerator {
    fn name(&self) -> &str {
        "noop"
    }

    async fn generate(&self, _request: GenerationRequest<'_>) -> Result<String, ProviderError> {
        Ok(String::new())
    }
}

/// Records every call and answers with a canned reply.
pub struct SpyGenerator {
    reply: String,
    calls: AtomicUsize,
    last: Mutex<Option<(String, String)>>,
}

impl SpyGenerator {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(model, prompt)` of the most recent call.
    pub fn last_request(&self) -> Option<(String, String)> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for SpyGenerator {
    fn name(&self) -> &str {
        "spy"
    }

    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((request.model.to_string(), request.prompt.to_string()));
        Ok(self.reply.clone())
    }
}

/// Always fails at the transport level.
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(&self, _request: GenerationRequest<'_>) -> Result<String, ProviderError> {
        Err(ProviderError::Network("connection refused".to_string()))
    }
}

/// Creates a test App (English UI) with a NoopGenerator.
pub fn test_app() -> crate::core::state::App {
    let assist = AssistClient::new(Arc::new(NoopGenerator), "test-model".to_string(), Locale::English);
    crate::core::state::App::new(Arc::new(assist), Locale::English)
}
