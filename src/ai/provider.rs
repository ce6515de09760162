//! Ordered text-provider fallback.
//!
//! A [`ProviderChain`] asks each [`NoteProvider`] in turn for a note and
//! returns the first non-empty answer. Every provider is tried at most once;
//! only when the whole chain is exhausted does the caller see an error, and
//! that error lists each provider's failure in order.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::core::models::GenerationResult;
use crate::errors::DigestError;
use crate::prompt::NotePrompt;

/// A text-generation backend able to answer a [`NotePrompt`].
#[async_trait]
pub trait NoteProvider: Send + Sync {
    /// Human-readable name recorded alongside the generated note.
    fn label(&self) -> &str;

    /// # Errors
    ///
    /// Returns an error if the provider rejects the request or its response
    /// lacks the generated text.
    async fn generate(&self, prompt: &NotePrompt) -> Result<String, DigestError>;
}

pub struct ProviderChain {
    providers: Vec<Box<dyn NoteProvider>>,
}

impl ProviderChain {
    #[must_use]
    pub fn new(providers: Vec<Box<dyn NoteProvider>>) -> Self {
        Self { providers }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.label()).collect()
    }

    /// # Errors
    ///
    /// Returns [`DigestError::GenerationError`] when every provider failed.
    pub async fn generate(&self, prompt: &NotePrompt) -> Result<GenerationResult, DigestError> {
        let mut failures: Vec<String> = Vec::new();

        for (position, provider) in self.providers.iter().enumerate() {
            let label = provider.label();
            info!("Requesting note from provider {} ({})", position + 1, label);

            match provider.generate(prompt).await {
                Ok(text) if !text.trim().is_empty() => {
                    info!("Provider {} produced a note of {} chars", label, text.chars().count());
                    return Ok(GenerationResult::new(text, label));
                }
                Ok(_) => {
                    warn!("Provider {} returned an empty note", label);
                    failures.push(format!("{}: empty response", label));
                }
                Err(e) => {
                    warn!("Provider {} failed: {}", label, e);
                    failures.push(format!("{}: {}", label, e));
                }
            }
        }

        if failures.is_empty() {
            return Err(DigestError::GenerationError(
                "no providers configured".to_string(),
            ));
        }
        Err(DigestError::GenerationError(failures.join("; ")))
    }
}
