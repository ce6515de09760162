//! Resend email API client module

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info};

use crate::core::config::MailConfig;
use crate::core::models::EmailRequest;
use crate::errors::DigestError;
use crate::worker::notify::MailTransport;

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: Option<String>,
}

pub struct MailClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl MailClient {
    #[must_use]
    pub fn new(http: Client, config: &MailConfig) -> Self {
        Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        }
    }
}

#[async_trait]
impl MailTransport for MailClient {
    async fn send(&self, email: &EmailRequest) -> Result<String, DigestError> {
        let resp = self
            .http
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .map_err(|e| {
                DigestError::MailError(format!("request failed: {}", e.without_url()))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            error!("Resend send failed: status={} body={}", status, body_text);
            return Err(DigestError::MailError(format!(
                "Resend returned {}: {}",
                status, body_text
            )));
        }

        let parsed: SendResponse = resp.json().await.map_err(|e| {
            DigestError::MailError(format!("malformed response: {}", e.without_url()))
        })?;
        let email_id = parsed
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| DigestError::MailError("response has no message id".to_string()))?;
        info!("Email {} accepted for {}", email_id, email.to);
        Ok(email_id)
    }
}
