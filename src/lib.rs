//! Learning Digest - generates a short daily learning note, files it in
//! Notion and emails it.
//!
//! A run has three sequential stages:
//! 1. Generate: ask Gemini for the note, falling back once to a Groq chat model
//! 2. Publish: cut the note into blocks of at most 1900 characters and create
//!    one Notion page holding them in order
//! 3. Notify: render the Markdown to HTML and send both forms through Resend
//!
//! # Architecture
//!
//! The system uses:
//! - reqwest for every external HTTP API
//! - openai-api-rs message types for the chat-completion fallback
//! - pulldown-cmark for the HTML email body
//! - Tokio for async runtime
//!
//! Each external service sits behind a trait (`NoteProvider`, `PageStore`,
//! `MailTransport`) so the stages can be driven by test doubles.
//!
//! # Example
//!
//! ```no_run
//! use learning_digest::core::config::AppConfig;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     learning_digest::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let report = learning_digest::worker::run_digest(&config).await?;
//!     println!(
//!         "Published {} block(s) from {} to page {}",
//!         report.segments, report.provider_label, report.page_id
//!     );
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod clients;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod utils;
pub mod worker;

pub use ai::{NoteProvider, ProviderChain};
pub use crate::core::models::GenerationResult;
pub use errors::DigestError;

/// Configure structured JSON logging.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// learning_digest::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
