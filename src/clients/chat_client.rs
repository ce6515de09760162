//! Fallback provider: an OpenAI-compatible `chat/completions` endpoint (Groq).

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::ai::NoteProvider;
use crate::core::config::GroqConfig;
use crate::errors::DigestError;
use crate::prompt::NotePrompt;

pub struct ChatClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
    max_tokens: u32,
}

impl ChatClient {
    #[must_use]
    pub fn new(http: Client, config: &GroqConfig) -> Self {
        Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            max_tokens: config.max_tokens,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/openai/v1/chat/completions", self.base_url)
    }

    #[must_use]
    pub fn build_messages(prompt: &NotePrompt) -> Vec<ChatCompletionMessage> {
        vec![
            ChatCompletionMessage {
                role: MessageRole::system,
                content: Content::Text(prompt.system_persona.clone()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
            ChatCompletionMessage {
                role: MessageRole::user,
                content: Content::Text(prompt.instructions.clone()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
        ]
    }

    #[must_use]
    pub fn build_request_body(&self, prompt: &NotePrompt) -> Value {
        let messages: Vec<Value> = Self::build_messages(prompt)
            .iter()
            .map(|msg| {
                let role_str = match msg.role {
                    MessageRole::system => "system",
                    MessageRole::assistant => "assistant",
                    _ => "user",
                };
                let content_val = match &msg.content {
                    Content::Text(text) => json!(text),
                    _ => json!(""),
                };
                json!({
                    "role": role_str,
                    "content": content_val
                })
            })
            .collect();

        json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": self.max_tokens
        })
    }

    /// Pulls `choices[0].message.content` out of a response body, trimmed.
    pub fn extract_text(response_json: &Value) -> Option<String> {
        response_json
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|t| t.as_str())
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

#[async_trait]
impl NoteProvider for ChatClient {
    fn label(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &NotePrompt) -> Result<String, DigestError> {
        info!(
            "Calling chat model {} with max_tokens={}",
            self.model, self.max_tokens
        );

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&self.build_request_body(prompt))
            .send()
            .await
            .map_err(|e| DigestError::ProviderError(format!("Groq request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            return Err(DigestError::ProviderError(format!(
                "Groq API error ({}): {}",
                status, error_text
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            DigestError::ProviderError(format!("Failed to parse Groq response: {}", e))
        })?;

        Self::extract_text(&response_json)
            .ok_or_else(|| DigestError::ProviderError("No text in Groq response".to_string()))
    }
}
