mod common;

use std::sync::atomic::Ordering;

use common::ScriptedProvider;
use learning_digest::DigestError;
use learning_digest::ai::{NoteProvider, ProviderChain};
use learning_digest::clients::{ChatClient, GeminiClient};
use learning_digest::core::config::{GeminiConfig, GroqConfig};
use learning_digest::prompt::NotePrompt;
use learning_digest::worker::generate::generate_note;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GEMINI_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";
const GROQ_PATH: &str = "/openai/v1/chat/completions";

fn http_chain(server: &MockServer) -> ProviderChain {
    let http = reqwest::Client::new();
    let providers: Vec<Box<dyn NoteProvider>> = vec![
        Box::new(GeminiClient::new(
            http.clone(),
            &GeminiConfig {
                api_key: "test-google-key".to_string(),
                model: "gemini-1.5-flash".to_string(),
                label: "Gemini 1.5 Flash".to_string(),
                base_url: server.uri(),
            },
        )),
        Box::new(ChatClient::new(
            http,
            &GroqConfig {
                api_key: "test-groq-key".to_string(),
                model: "mixtral-8x7b-32768".to_string(),
                base_url: server.uri(),
                max_tokens: 300,
            },
        )),
    ];
    ProviderChain::new(providers)
}

async fn mount_groq(server: &MockServer, status: u16, body: Value, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(GROQ_PATH))
        .and(header("authorization", "Bearer test-groq-key"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn primary_success_never_touches_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .and(header("x-goog-api-key", "test-google-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [ { "content": { "parts": [ { "text": "X" } ] } } ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_groq(&server, 200, json!({}), 0).await;

    let result = generate_note(&http_chain(&server), &NotePrompt::daily())
        .await
        .expect("primary should succeed");

    assert_eq!(result.text(), "X");
    assert_eq!(result.provider_label(), "Gemini 1.5 Flash");
    server.verify().await;

    let requests = server.received_requests().await.expect("recording enabled");
    assert!(
        requests[0].url.query().is_none(),
        "API key must not travel in the URL"
    );
}

#[tokio::test]
async fn primary_error_status_falls_back_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;
    mount_groq(
        &server,
        200,
        json!({ "choices": [ { "message": { "content": "  Y \n" } } ] }),
        1,
    )
    .await;

    let result = generate_note(&http_chain(&server), &NotePrompt::daily())
        .await
        .expect("fallback should succeed");

    assert_eq!(result.text(), "Y");
    assert_eq!(result.provider_label(), "mixtral-8x7b-32768");
    server.verify().await;

    let requests = server.received_requests().await.expect("recording enabled");
    let groq_request = requests
        .iter()
        .find(|r| r.url.path() == GROQ_PATH)
        .expect("fallback request recorded");
    let body: Value = groq_request.body_json().expect("JSON body");
    assert_eq!(body["model"], "mixtral-8x7b-32768");
    assert_eq!(body["max_tokens"], 300);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["role"], "user");
}

#[tokio::test]
async fn primary_missing_text_field_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [],
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_groq(
        &server,
        200,
        json!({ "choices": [ { "message": { "content": "Y" } } ] }),
        1,
    )
    .await;

    let result = generate_note(&http_chain(&server), &NotePrompt::daily())
        .await
        .expect("fallback should succeed");
    assert_eq!(result.text(), "Y");
    server.verify().await;
}

#[tokio::test]
async fn both_providers_failing_is_terminal() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_string("API key not valid"))
        .expect(1)
        .mount(&server)
        .await;
    mount_groq(&server, 401, json!({ "error": { "message": "Invalid API Key" } }), 1).await;

    let err = generate_note(&http_chain(&server), &NotePrompt::daily())
        .await
        .expect_err("both providers fail");

    match err {
        DigestError::GenerationError(msg) => {
            let gemini_at = msg.find("Gemini 1.5 Flash").expect("primary failure listed");
            let groq_at = msg.find("mixtral-8x7b-32768").expect("fallback failure listed");
            assert!(gemini_at < groq_at, "failures listed in provider order: {msg}");
            assert!(msg.contains("API key not valid"));
            assert!(msg.contains("Invalid API Key"));
        }
        other => panic!("expected GenerationError, got {other:?}"),
    }
    server.verify().await;
}

#[tokio::test]
async fn chain_stops_at_first_success() {
    let (first, first_calls) = ScriptedProvider::ok("primary", "note");
    let (second, second_calls) = ScriptedProvider::ok("secondary", "other");
    let providers: Vec<Box<dyn NoteProvider>> = vec![Box::new(first), Box::new(second)];
    let chain = ProviderChain::new(providers);

    let result = chain.generate(&NotePrompt::daily()).await.unwrap();

    assert_eq!(result.text(), "note");
    assert_eq!(result.provider_label(), "primary");
    assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn chain_tries_each_provider_exactly_once() {
    let (first, first_calls) = ScriptedProvider::failing("primary", "timeout");
    let (second, second_calls) = ScriptedProvider::failing("secondary", "unauthorized");
    let providers: Vec<Box<dyn NoteProvider>> = vec![Box::new(first), Box::new(second)];
    let chain = ProviderChain::new(providers);

    let err = chain.generate(&NotePrompt::daily()).await.unwrap_err();

    assert!(matches!(err, DigestError::GenerationError(_)));
    assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn blank_note_counts_as_failure() {
    let (first, _) = ScriptedProvider::ok("primary", "   ");
    let (second, second_calls) = ScriptedProvider::ok("secondary", "real note");
    let providers: Vec<Box<dyn NoteProvider>> = vec![Box::new(first), Box::new(second)];
    let chain = ProviderChain::new(providers);

    let result = chain.generate(&NotePrompt::daily()).await.unwrap();

    assert_eq!(result.provider_label(), "secondary");
    assert_eq!(second_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_chain_reports_no_providers() {
    let chain = ProviderChain::new(Vec::new());
    assert!(chain.is_empty());

    match chain.generate(&NotePrompt::daily()).await {
        Err(DigestError::GenerationError(msg)) => assert!(msg.contains("no providers")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn transport_failure_does_not_leak_api_key() {
    let providers: Vec<Box<dyn NoteProvider>> = vec![Box::new(GeminiClient::new(
        reqwest::Client::new(),
        &GeminiConfig {
            api_key: "SECRET-GOOGLE-KEY".to_string(),
            model: "gemini-1.5-flash".to_string(),
            label: "Gemini 1.5 Flash".to_string(),
            base_url: "http://127.0.0.1:1".to_string(),
        },
    ))];
    let chain = ProviderChain::new(providers);

    let err = chain.generate(&NotePrompt::daily()).await.unwrap_err();

    let message = err.to_string();
    assert!(matches!(err, DigestError::GenerationError(_)));
    assert!(message.contains("Gemini request failed"), "{message}");
    assert!(!message.contains("SECRET-GOOGLE-KEY"), "{message}");
}
