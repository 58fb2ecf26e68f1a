pub mod client;
pub mod provider;
pub mod providers;

pub use client::{AssistClient, AssistText};
pub use provider::{GenerationRequest, ProviderError, TextGenerator};
pub use providers::GeminiGenerator;
