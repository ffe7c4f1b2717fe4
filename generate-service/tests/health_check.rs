//! Integration tests that run the real server on a random port.
//!
//! Gemini is replaced by a wiremock server, so no network access or API key
//! is needed.

use generate_service::config::{GeminiSettings, GenerateConfig};
use generate_service::startup::Application;
use reqwest::Client;
use secrecy::Secret;
use serde_json::{json, Value};
use service_core::config::Config;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str, api_key: &str) -> GenerateConfig {
    GenerateConfig {
        common: Config { port: 0 },
        gemini: GeminiSettings {
            api_key: Secret::new(api_key.to_string()),
            base_url: base_url.to_string(),
            request_timeout_secs: Some(5),
        },
    }
}

/// Spawn the application on a random port and return the port number.
async fn spawn_app(config: GenerateConfig) -> u16 {
    let app = Application::build(config)
        .await
        .expect("Failed to build application");

    let port = app.port();

    // Spawn the server in the background
    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    port
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app(test_config("http://127.0.0.1:9", "test-api-key")).await;
    let client = Client::new();

    let response = client
        .get(format!("http://127.0.0.1:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("x-request-id"));

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "generate-service");
}

#[tokio::test]
async fn readiness_requires_api_key() {
    let client = Client::new();

    let ready_port = spawn_app(test_config("http://127.0.0.1:9", "test-api-key")).await;
    let response = client
        .get(format!("http://127.0.0.1:{}/ready", ready_port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 200);

    let unready_port = spawn_app(test_config("http://127.0.0.1:9", "")).await;
    let response = client
        .get(format!("http://127.0.0.1:{}/ready", unready_port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 503);
}

#[tokio::test]
async fn generate_round_trips_through_gemini() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Hello" }] },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&gemini)
        .await;

    let port = spawn_app(test_config(&gemini.uri(), "test-api-key")).await;

    let response = Client::new()
        .post(format!("http://127.0.0.1:{}/api/generate", port))
        .json(&json!({ "user_prompt": "Hi", "system_prompt": "Be brief." }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({ "success": true, "response": "Hello" }));
}

#[tokio::test]
async fn generate_surfaces_gemini_failure_as_500() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" }
        })))
        .expect(1)
        .mount(&gemini)
        .await;

    let port = spawn_app(test_config(&gemini.uri(), "bad-key")).await;

    let response = Client::new()
        .post(format!("http://127.0.0.1:{}/api/generate", port))
        .json(&json!({ "user_prompt": "Hi" }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("API key not valid."));
}

#[tokio::test]
async fn missing_prompt_never_reaches_gemini() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&gemini)
        .await;

    let port = spawn_app(test_config(&gemini.uri(), "test-api-key")).await;

    let response = Client::new()
        .post(format!("http://127.0.0.1:{}/api/generate", port))
        .json(&json!({ "system_prompt": "orphan" }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({ "success": false, "error": "Missing user prompt" }));
}
