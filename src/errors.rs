use thiserror::Error;

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Text provider failed: {0}")]
    ProviderError(String),

    #[error("All text providers failed: {0}")]
    GenerationError(String),

    #[error("Failed to access Notion API: {0}")]
    NotionError(String),

    #[error("Failed to send email: {0}")]
    MailError(String),

    #[error("Invalid input: {0}")]
    ValidationError(String),
}

impl From<reqwest::Error> for DigestError {
    fn from(error: reqwest::Error) -> Self {
        DigestError::HttpError(error.to_string())
    }
}
