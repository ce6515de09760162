// Entry point for one digest run: generate, publish to Notion, email.

use learning_digest::core::config::AppConfig;
use learning_digest::worker::run_digest;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real deployments set the variables directly
    dotenvy::dotenv().ok();
    learning_digest::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        e
    })?;

    match run_digest(&config).await {
        Ok(report) => {
            info!(
                "All done: run_id={} provider={} blocks={} page={} email={}",
                report.run_id,
                report.provider_label,
                report.segments,
                report.page_id,
                report.email_id
            );
            Ok(())
        }
        Err(e) => {
            error!("Digest run failed: {}", e);
            Err(e.into())
        }
    }
}
