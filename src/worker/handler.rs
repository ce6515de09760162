use chrono::{Local, NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::{error, info};
use uuid::Uuid;

use super::generate;
use super::notify::{self, MailRoute, MailTransport};
use super::publish::{self, PageStore, PublishTarget};
use crate::ai::ProviderChain;
use crate::clients::{MailClient, NotionClient, build_http_client};
use crate::core::config::AppConfig;
use crate::core::models::RunReport;
use crate::errors::DigestError;
use crate::prompt::NotePrompt;

/// Everything one run needs, with each external service behind a handle.
pub struct Pipeline<'a> {
    pub providers: &'a ProviderChain,
    pub store: &'a dyn PageStore,
    pub mailer: &'a dyn MailTransport,
    pub prompt: NotePrompt,
    pub target: PublishTarget,
    pub route: MailRoute,
    pub date: NaiveDate,
}

/// Today's date in `timezone`, or in the host's local zone.
#[must_use]
pub fn today(timezone: Option<Tz>) -> NaiveDate {
    match timezone {
        Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
        None => Local::now().date_naive(),
    }
}

/// Generate, publish, notify. The first failing stage ends the run.
pub async fn run_pipeline(pipeline: &Pipeline<'_>) -> Result<RunReport, DigestError> {
    let run_id = Uuid::new_v4();
    info!("Starting digest run {}", run_id);

    let note = generate::generate_note(pipeline.providers, &pipeline.prompt)
        .await
        .map_err(|e| {
            error!("Generation failed (run_id={}): {}", run_id, e);
            e
        })?;
    info!("Generated note with {} (run_id={})", note.provider_label(), run_id);

    let page_id = publish::publish_note(
        pipeline.store,
        &pipeline.target,
        pipeline.date,
        note.text(),
        note.provider_label(),
    )
    .await
    .map_err(|e| {
        error!("Publish failed (run_id={}): {}", run_id, e);
        e
    })?;

    let email_id = notify::notify(
        pipeline.mailer,
        &pipeline.route,
        note.text(),
        note.provider_label(),
    )
    .await
    .map_err(|e| {
        error!("Notify failed (run_id={}): {}", run_id, e);
        e
    })?;

    Ok(RunReport {
        run_id,
        provider_label: note.provider_label().to_string(),
        segments: crate::utils::segment_count(note.text(), pipeline.target.segment_max_chars),
        page_id,
        email_id,
    })
}

/// Builds the real API clients from `config` and runs the pipeline once.
pub async fn run_digest(config: &AppConfig) -> Result<RunReport, DigestError> {
    let http = build_http_client(config.http_timeout);
    let providers = generate::default_provider_chain(&http, config);
    let store = NotionClient::new(http.clone(), &config.notion);
    let mailer = MailClient::new(http, &config.mail);

    let pipeline = Pipeline {
        providers: &providers,
        store: &store,
        mailer: &mailer,
        prompt: NotePrompt::daily(),
        target: PublishTarget {
            database_id: config.notion_database_id.clone(),
            segment_max_chars: config.segment_max_chars,
        },
        route: MailRoute {
            from: config.mail.from.clone(),
            to: config.mail.to.clone(),
        },
        date: today(config.timezone),
    };

    run_pipeline(&pipeline).await
}
