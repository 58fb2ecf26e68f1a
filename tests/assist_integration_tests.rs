use std::sync::Arc;

use cinelog::assist::{AssistClient, AssistText, GeminiGenerator, GenerationRequest, ProviderError, TextGenerator};
use cinelog::core::locale::Locale;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

const MODEL: &str = "test-model";
const GENERATE_PATH: &str = "/models/test-model:generateContent";

fn candidate_body(parts: &[&str]) -> serde_json::Value {
    let parts: Vec<_> = parts.iter().map(|t| json!({ "text": t })).collect();
    json!({
        "candidates": [
            { "content": { "role": "model", "parts": parts }, "finishReason": "STOP" }
        ]
    })
}

fn request<'a>(prompt: &'a str) -> GenerationRequest<'a> {
    GenerationRequest {
        model: MODEL,
        prompt,
    }
}

// ============================================================================
// GeminiGenerator
// ============================================================================

#[tokio::test]
async fn test_gemini_sends_key_and_body_and_joins_parts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_json(json!({ "contents": [{ "parts": [{ "text": "hello" }] }] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(&["Q1\n", "Q2\n", "Q3"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let generator = GeminiGenerator::new("test-key".to_string(), Some(mock_server.uri()));
    let text = generator.generate(request("hello")).await.unwrap();

    assert_eq!(text, "Q1\nQ2\nQ3");
}

#[tokio::test]
async fn test_gemini_trailing_slash_in_base_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(&["ok"])))
        .mount(&mock_server)
        .await;

    let generator = GeminiGenerator::new("k".to_string(), Some(format!("{}/", mock_server.uri())));
    assert_eq!(generator.generate(request("hi")).await.unwrap(), "ok");
}

#[tokio::test]
async fn test_gemini_api_error_maps_status_and_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "code": 401, "message": "API key not valid", "status": "UNAUTHENTICATED" }
        })))
        .mount(&mock_server)
        .await;

    let generator = GeminiGenerator::new("bad-key".to_string(), Some(mock_server.uri()));
    let result = generator.generate(request("hello")).await;

    match result {
        Err(ProviderError::Api { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "API key not valid");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_gemini_no_candidates_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&mock_server)
        .await;

    let generator = GeminiGenerator::new("k".to_string(), Some(mock_server.uri()));
    assert!(matches!(
        generator.generate(request("hello")).await,
        Err(ProviderError::Parse(_))
    ));
}

#[tokio::test]
async fn test_gemini_malformed_json_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let generator = GeminiGenerator::new("k".to_string(), Some(mock_server.uri()));
    assert!(matches!(
        generator.generate(request("hello")).await,
        Err(ProviderError::Parse(_))
    ));
}

#[tokio::test]
async fn test_gemini_unreachable_server_is_network_error() {
    // Nothing listens on port 1
    let generator = GeminiGenerator::new("k".to_string(), Some("http://127.0.0.1:1".to_string()));
    assert!(matches!(
        generator.generate(request("hello")).await,
        Err(ProviderError::Network(_))
    ));
}

// ============================================================================
// AssistClient over Gemini
// ============================================================================

fn client_for(server: &MockServer, locale: Locale) -> AssistClient {
    let generator = GeminiGenerator::new("test-key".to_string(), Some(server.uri()));
    AssistClient::new(Arc::new(generator), MODEL.to_string(), locale)
}

#[tokio::test]
async fn test_assist_returns_questions_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(&["Why sand?\nWho is Paul?"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Locale::English);
    let text = client.generate_review_questions("Dune").await;

    assert_eq!(text, AssistText::Questions("Why sand?\nWho is Paul?".to_string()));

    // The prompt names the movie
    let received = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("'Dune'"));
}

#[tokio::test]
async fn test_assist_server_error_becomes_localized_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Locale::Korean);
    let text = client.generate_review_questions("기생충").await;

    assert_eq!(
        text,
        AssistText::Fallback(Locale::Korean.strings().assist_failed.to_string())
    );
}

#[tokio::test]
async fn test_assist_blank_title_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(&["unused"])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Locale::English);
    let text = client.generate_review_questions("   ").await;

    assert!(text.is_fallback());
    assert_eq!(text.as_str(), "Please enter a movie title first.");
}
