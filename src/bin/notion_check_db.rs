// Confirms the configured NOTION_DB_ID is reachable and prints its title.

use learning_digest::clients::{NotionClient, build_http_client};
use learning_digest::core::config::{DEFAULT_HTTP_TIMEOUT_SECS, NotionConfig, required_var};
use std::time::Duration;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    learning_digest::setup_logging();

    let config = NotionConfig::from_env()?;
    let database_id = required_var("NOTION_DB_ID")?;
    let client = NotionClient::new(
        build_http_client(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS)),
        &config,
    );

    match client.retrieve_database_title(&database_id).await {
        Ok(title) => {
            println!("DB title: {}", title);
            Ok(())
        }
        Err(e) => {
            error!("Database retrieval failed: {}", e);
            Err(e.into())
        }
    }
}
