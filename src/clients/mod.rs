//! Client modules for external API interactions

pub mod chat_client;
pub mod gemini_client;
pub mod mail_client;
pub mod notion_client;

use std::time::Duration;

use reqwest::Client;

pub use chat_client::ChatClient;
pub use gemini_client::GeminiClient;
pub use mail_client::MailClient;
pub use notion_client::NotionClient;

/// One HTTP client per run, cloned into every API handle.
#[must_use]
pub fn build_http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}
