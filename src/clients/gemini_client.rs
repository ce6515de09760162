//! Primary provider: Google Gemini `generateContent`.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::ai::NoteProvider;
use crate::core::config::GeminiConfig;
use crate::errors::DigestError;
use crate::prompt::NotePrompt;

/// Keeps the key out of the URL, and so out of any error that echoes it.
const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    label: String,
    base_url: String,
}

impl GeminiClient {
    #[must_use]
    pub fn new(http: Client, config: &GeminiConfig) -> Self {
        Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            label: config.label.clone(),
            base_url: config.base_url.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    #[must_use]
    pub fn build_request_body(prompt: &NotePrompt) -> Value {
        json!({
            "contents": [
                { "parts": [ { "text": prompt.instructions } ] }
            ]
        })
    }

    /// Pulls `candidates[0].content.parts[0].text` out of a response body.
    pub fn extract_text(response_json: &Value) -> Option<String> {
        response_json
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.get(0))
            .and_then(|p| p.get("text"))
            .and_then(|t| t.as_str())
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string)
    }
}

#[async_trait]
impl NoteProvider for GeminiClient {
    fn label(&self) -> &str {
        &self.label
    }

    async fn generate(&self, prompt: &NotePrompt) -> Result<String, DigestError> {
        #[cfg(feature = "debug-logs")]
        info!("Using Gemini prompt:\n{}", prompt.instructions);

        #[cfg(not(feature = "debug-logs"))]
        info!("Calling Gemini model {}", self.model);

        let response = self
            .http
            .post(self.endpoint())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&Self::build_request_body(prompt))
            .send()
            .await
            .map_err(|e| {
                DigestError::ProviderError(format!("Gemini request failed: {}", e.without_url()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            return Err(DigestError::ProviderError(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            DigestError::ProviderError(format!(
                "Failed to parse Gemini response: {}",
                e.without_url()
            ))
        })?;

        Self::extract_text(&response_json)
            .ok_or_else(|| DigestError::ProviderError("No text in Gemini response".to_string()))
    }
}
