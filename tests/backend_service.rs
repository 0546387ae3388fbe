//! Backend client tests against a mocked translation + TTS service.

use serde_json::json;
use translate_speak::backend_service::{BackendError, BackendServiceClient, REQUEST_FAILED};
use translate_speak::translate::{TranslationRequest, TranslationService};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn hello_hi() -> TranslationRequest {
    TranslationRequest {
        text: "hello".to_string(),
        target_lang: "hi".to_string(),
    }
}

#[tokio::test]
async fn test_languages_preserves_backend_order() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"code": "hi", "name": "Hindi", "tts_supported": true},
            {"code": "as", "name": "Assamese", "tts_supported": false},
            {"code": "bn", "name": "Bengali", "tts_supported": true}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = BackendServiceClient::new(mock_server.uri());
    let languages = client.languages().await.unwrap();

    let codes: Vec<&str> = languages.iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes, vec!["hi", "as", "bn"]);
    assert!(!languages[1].tts_supported);
}

#[tokio::test]
async fn test_languages_reports_http_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/languages"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&mock_server)
        .await;

    let client = BackendServiceClient::new(mock_server.uri());
    let result = client.languages().await;

    match result {
        Err(BackendError::Status { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "unavailable");
        }
        other => panic!("Expected BackendError::Status, got {:?}", other),
    }
}

#[tokio::test]
async fn test_translate_posts_text_and_target() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate_tts"))
        .and(body_json(json!({"text": "hello", "target_lang": "hi"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "translated_text": "नमस्ते",
            "detected_source_lang": "en",
            "target_lang": "hi",
            "tts_supported": true,
            "audio_url": "https://backend.test/static/audio/a.mp3",
            "message": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = BackendServiceClient::new(mock_server.uri());
    let result = client.translate_tts(&hello_hi()).await.unwrap();

    assert_eq!(result.translated_text, "नमस्ते");
    assert_eq!(result.detected_source_lang, "en");
    assert_eq!(
        result.playable_audio_url(),
        Some("https://backend.test/static/audio/a.mp3")
    );
    assert_eq!(result.advisory(), None);
}

#[tokio::test]
async fn test_translate_error_body_becomes_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate_tts"))
        .respond_with(ResponseTemplate::new(500).set_body_string("rate limited"))
        .mount(&mock_server)
        .await;

    let client = BackendServiceClient::new(mock_server.uri());
    let err = client.translate_tts(&hello_hi()).await.unwrap_err();

    assert_eq!(err.user_message(), "rate limited");
}

#[tokio::test]
async fn test_translate_empty_error_body_uses_fallback() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate_tts"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let client = BackendServiceClient::new(mock_server.uri());
    let err = client.translate_tts(&hello_hi()).await.unwrap_err();

    assert_eq!(err.user_message(), REQUEST_FAILED);
}

#[tokio::test]
async fn test_translate_malformed_success_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate_tts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
        .mount(&mock_server)
        .await;

    let client = BackendServiceClient::new(mock_server.uri());
    let err = client.translate_tts(&hello_hi()).await.unwrap_err();

    assert!(matches!(err, BackendError::Decode(_)));
    assert!(!err.user_message().is_empty());
}

#[tokio::test]
async fn test_health_check() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&mock_server)
        .await;

    let client = BackendServiceClient::new(format!("{}/", mock_server.uri()));
    assert!(client.health_check().await.unwrap());
}
