// Prints the id of every Notion database the integration token can see.

use learning_digest::clients::{NotionClient, build_http_client};
use learning_digest::core::config::{DEFAULT_HTTP_TIMEOUT_SECS, NotionConfig};
use std::time::Duration;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    learning_digest::setup_logging();

    let config = NotionConfig::from_env()?;
    let client = NotionClient::new(
        build_http_client(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS)),
        &config,
    );

    match client.list_databases().await {
        Ok(ids) => {
            println!("Databases available: {:?}", ids);
            Ok(())
        }
        Err(e) => {
            error!("Database search failed: {}", e);
            Err(e.into())
        }
    }
}
