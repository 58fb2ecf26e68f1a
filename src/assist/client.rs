//! # Review Assist Client
//!
//! Asks the model for three questions that help write a review of a movie.
//! Never fails from the caller's point of view: a blank title or any provider
//! error comes back as `AssistText::Fallback` with a fixed localized message.

use std::sync::Arc;

use log::{error, info};

use crate::assist::{GenerationRequest, TextGenerator};
use crate::core::locale::Locale;

/// Text to show under the review field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistText {
    /// The model's response, verbatim.
    Questions(String),
    /// A fixed message used instead of a model response.
    Fallback(String),
}

impl AssistText {
    pub fn as_str(&self) -> &str {
        match self {
            AssistText::Questions(text) | AssistText::Fallback(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            AssistText::Questions(text) | AssistText::Fallback(text) => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AssistText::Fallback(_))
    }
}

pub struct AssistClient {
    generator: Arc<dyn TextGenerator>,
    model: String,
    locale: Locale,
}

impl AssistClient {
    pub fn new(generator: Arc<dyn TextGenerator>, model: String, locale: Locale) -> Self {
        Self {
            generator,
            model,
            locale,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    pub async fn generate_review_questions(&self, title: &str) -> AssistText {
        let strings = self.locale.strings();
        let title = title.trim();
        if title.is_empty() {
            return AssistText::Fallback(strings.enter_title_first.to_string());
        }

        let prompt = self.locale.review_questions_prompt(title);
        let request = GenerationRequest {
            model: &self.model,
            prompt: &prompt,
        };

        match self.generator.generate(request).await {
            Ok(text) => {
                info!("Review questions generated for '{}' ({} bytes)", title, text.len());
                AssistText::Questions(text)
            }
            Err(e) => {
                error!(
                    "Error generating review questions via {}: {}",
                    self.generator.name(),
                    e
                );
                AssistText::Fallback(strings.assist_failed.to_string())
            }
        }
    }
}
