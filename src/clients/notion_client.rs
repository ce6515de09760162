//! Notion API client module
//!
//! Page creation for the publisher, plus the database lookups used by the
//! diagnostic binaries.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::{Value, json};
use tracing::{error, info};

use crate::core::config::NotionConfig;
use crate::core::models::PageRequest;
use crate::errors::DigestError;
use crate::worker::publish::PageStore;

pub const NOTION_VERSION: &str = "2022-06-28";

pub struct NotionClient {
    http: Client,
    token: String,
    base_url: String,
}

impl NotionClient {
    #[must_use]
    pub fn new(http: Client, config: &NotionConfig) -> Self {
        Self {
            http,
            token: config.token.clone(),
            base_url: config.base_url.clone(),
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
    }

    /// Sends an authorized request and returns the JSON body of a 2xx reply.
    async fn execute(&self, builder: RequestBuilder, action: &str) -> Result<Value, DigestError> {
        let response = self.authorized(builder).send().await.map_err(|e| {
            DigestError::NotionError(format!("{} request failed: {}", action, e.without_url()))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            error!("Notion {} failed: status={} body={}", action, status, body_text);
            return Err(DigestError::NotionError(format!(
                "{} returned {}: {}",
                action, status, body_text
            )));
        }

        response.json::<Value>().await.map_err(|e| {
            DigestError::NotionError(format!("{}: malformed response: {}", action, e.without_url()))
        })
    }

    /// Creates a page and returns its id.
    pub async fn create_database_page(&self, page: &PageRequest) -> Result<String, DigestError> {
        let builder = self
            .http
            .post(format!("{}/v1/pages", self.base_url))
            .json(page);
        let body = self.execute(builder, "page creation").await?;

        let page_id = body
            .get("id")
            .and_then(|v| v.as_str())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                DigestError::NotionError("page creation: response has no page id".to_string())
            })?
            .to_string();
        info!("Created Notion page {}", page_id);
        Ok(page_id)
    }

    /// Ids of every database shared with the integration.
    pub async fn list_databases(&self) -> Result<Vec<String>, DigestError> {
        let builder = self
            .http
            .post(format!("{}/v1/search", self.base_url))
            .json(&json!({
                "filter": { "property": "object", "value": "database" }
            }));
        let body = self.execute(builder, "database search").await?;

        Ok(body
            .get("results")
            .and_then(|r| r.as_array())
            .map(|results| {
                results
                    .iter()
                    .filter_map(|db| db.get("id").and_then(|id| id.as_str()))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Plain-text title of a database; empty when it has none.
    pub async fn retrieve_database_title(&self, database_id: &str) -> Result<String, DigestError> {
        let builder = self
            .http
            .get(format!("{}/v1/databases/{}", self.base_url, database_id));
        let body = self.execute(builder, "database retrieval").await?;

        Ok(body
            .get("title")
            .and_then(|t| t.get(0))
            .and_then(|t| t.get("plain_text"))
            .and_then(|t| t.as_str())
            .unwrap_or_default()
            .to_string())
    }
}

#[async_trait]
impl PageStore for NotionClient {
    async fn create_page(&self, page: &PageRequest) -> Result<String, DigestError> {
        self.create_database_page(page).await
    }
}
