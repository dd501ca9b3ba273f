//! Gemini adapter integration tests over a mocked HTTP server

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use soap_scribe::application::ports::{GenerationError, NoteGenerator};
use soap_scribe::application::{FormatNoteUseCase, NoteEngine};
use soap_scribe::domain::audio::{AudioData, AudioMimeType};
use soap_scribe::domain::config::AiServiceConfig;
use soap_scribe::domain::note::{format_soap, FormatRequest, SoapPrompt};
use soap_scribe::infrastructure::GeminiClient;

fn client(server: &MockServer) -> GeminiClient {
    GeminiClient::new(AiServiceConfig::new("test-key", "test-model").unwrap())
        .unwrap()
        .with_base_url(server.uri())
}

fn success_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

#[tokio::test]
async fn generate_text_returns_trimmed_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/test-model:generateContent"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("  整形済み記録  \n")))
        .expect(1)
        .mount(&server)
        .await;

    let text = client(&server)
        .generate_text("プロンプト", "患者の記録")
        .await
        .unwrap();

    assert_eq!(text, "整形済み記録");
}

#[tokio::test]
async fn generate_text_embeds_prompt_and_input() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/test-model:generateContent"))
        .and(body_string_contains("入力データ:"))
        .and(body_string_contains("患者の記録"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .generate_text("プロンプト", "患者の記録")
        .await
        .unwrap();
}

#[tokio::test]
async fn transcribe_audio_sends_inline_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/test-model:generateContent"))
        .and(body_string_contains("inlineData"))
        .and(body_string_contains("audio/wav"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("文字起こし結果")))
        .expect(1)
        .mount(&server)
        .await;

    let audio = AudioData::new(vec![0u8; 32], AudioMimeType::Wav);
    let text = client(&server)
        .transcribe_audio("文字起こししてください", &audio)
        .await
        .unwrap();

    assert_eq!(text, "文字起こし結果");
}

#[tokio::test]
async fn unauthorized_maps_to_invalid_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client(&server).generate_text("p", "t").await.unwrap_err();
    assert!(matches!(err, GenerationError::InvalidApiKey));
}

#[tokio::test]
async fn too_many_requests_maps_to_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = client(&server).generate_text("p", "t").await.unwrap_err();
    assert!(matches!(err, GenerationError::RateLimited));
}

#[tokio::test]
async fn missing_candidates_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let err = client(&server).generate_text("p", "t").await.unwrap_err();
    assert!(matches!(err, GenerationError::EmptyResponse));
}

#[tokio::test]
async fn whitespace_only_text_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("   \n  ")))
        .mount(&server)
        .await;

    let err = client(&server).generate_text("p", "t").await.unwrap_err();
    assert!(matches!(err, GenerationError::EmptyResponse));
}

#[tokio::test]
async fn error_body_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": { "message": "model overloaded", "status": "UNAVAILABLE", "code": 503 }
        })))
        .mount(&server)
        .await;

    let err = client(&server).generate_text("p", "t").await.unwrap_err();
    match err {
        GenerationError::ApiError(message) => assert_eq!(message, "model overloaded"),
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn format_use_case_falls_back_when_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let use_case = FormatNoteUseCase::new(Some(Arc::new(client(&server))));
    let transcript = "患者は「痛い」と言った。血圧120。";

    let outcome = use_case
        .format(&FormatRequest::new(SoapPrompt::default(), transcript))
        .await;

    assert_eq!(outcome.engine, NoteEngine::Heuristic);
    assert!(outcome.fallback_reason.is_some());
    assert_eq!(outcome.text, format_soap(transcript).render());
}
