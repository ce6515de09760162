use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

use crate::core::models::{ContentBlock, PageRequest};
use crate::errors::DigestError;
use crate::utils::split_segments;

/// Something that can persist a page into a document database.
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Creates the page and returns the id the store assigned to it.
    async fn create_page(&self, page: &PageRequest) -> Result<String, DigestError>;
}

/// Where published notes go and how they are cut into blocks.
#[derive(Debug, Clone)]
pub struct PublishTarget {
    pub database_id: String,
    pub segment_max_chars: usize,
}

/// US short date (`M/D/YYYY`), e.g. `10/19/2026`.
#[must_use]
pub fn format_note_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

#[must_use]
pub fn note_title(date: NaiveDate, provider_label: &str) -> String {
    format!("Learning Note - {} ({})", format_note_date(date), provider_label)
}

pub fn build_page_request(
    target: &PublishTarget,
    date: NaiveDate,
    text: &str,
    provider_label: &str,
) -> Result<PageRequest, DigestError> {
    if text.is_empty() {
        return Err(DigestError::ValidationError(
            "refusing to publish an empty note".to_string(),
        ));
    }

    let children = split_segments(text, target.segment_max_chars)
        .into_iter()
        .map(ContentBlock::paragraph)
        .collect();

    Ok(PageRequest::new(
        &target.database_id,
        &note_title(date, provider_label),
        children,
    ))
}

/// Writes the note as one page of ordered paragraph blocks; returns the page id.
pub async fn publish_note(
    store: &dyn PageStore,
    target: &PublishTarget,
    date: NaiveDate,
    text: &str,
    provider_label: &str,
) -> Result<String, DigestError> {
    let page = build_page_request(target, date, text, provider_label)?;
    info!(
        "Publishing note as {} block(s) to database {}",
        page.children.len(),
        target.database_id
    );

    let page_id = store.create_page(&page).await?;
    info!("Saved note to Notion page {}", page_id);
    Ok(page_id)
}
