use reqwest::Client;
use tracing::{debug, info};

use crate::ai::{NoteProvider, ProviderChain};
use crate::clients::{ChatClient, GeminiClient};
use crate::core::config::AppConfig;
use crate::core::models::GenerationResult;
use crate::errors::DigestError;
use crate::prompt::NotePrompt;

/// Gemini first, then the Groq chat model.
#[must_use]
pub fn default_provider_chain(http: &Client, config: &AppConfig) -> ProviderChain {
    let providers: Vec<Box<dyn NoteProvider>> = vec![
        Box::new(GeminiClient::new(http.clone(), &config.gemini)),
        Box::new(ChatClient::new(http.clone(), &config.groq)),
    ];
    ProviderChain::new(providers)
}

pub async fn generate_note(
    chain: &ProviderChain,
    prompt: &NotePrompt,
) -> Result<GenerationResult, DigestError> {
    info!("Generating note with providers {:?}", chain.labels());
    let result = chain.generate(prompt).await?;
    debug!("Generated note:\n{}", result.text());
    Ok(result)
}
