//! Environment-driven configuration.
//!
//! Every run reads its credentials and endpoints from process environment
//! variables (optionally seeded from a `.env` file by the binaries). Required
//! values fail fast with a [`DigestError::ConfigError`] naming the variable.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use chrono_tz::Tz;
use url::Url;

use crate::errors::DigestError;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_LABEL: &str = "Gemini 1.5 Flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub const DEFAULT_GROQ_MODEL: &str = "mixtral-8x7b-32768";
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com";
pub const DEFAULT_GROQ_MAX_TOKENS: u32 = 300;

pub const DEFAULT_NOTION_BASE_URL: &str = "https://api.notion.com";
pub const DEFAULT_RESEND_BASE_URL: &str = "https://api.resend.com";
pub const DEFAULT_EMAIL_FROM: &str = "Leonard's Digest <onboarding@resend.dev>";

/// Notion's per-block rich text limit is 2000 characters; stay under it.
pub const DEFAULT_SEGMENT_MAX_CHARS: usize = 1900;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub label: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
}

#[derive(Debug, Clone)]
pub struct NotionConfig {
    pub token: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub api_key: String,
    pub from: String,
    pub to: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini: GeminiConfig,
    pub groq: GroqConfig,
    pub notion: NotionConfig,
    pub notion_database_id: String,
    pub mail: MailConfig,
    pub segment_max_chars: usize,
    /// `None` means the host's local timezone.
    pub timezone: Option<Tz>,
    pub http_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, DigestError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DigestError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timezone = match lookup("DIGEST_TIMEZONE").filter(|v| !v.trim().is_empty()) {
            Some(name) => Some(name.trim().parse::<Tz>().map_err(|e| {
                DigestError::ConfigError(format!("DIGEST_TIMEZONE: {}", e))
            })?),
            None => None,
        };

        Ok(Self {
            gemini: GeminiConfig {
                api_key: required(&lookup, "GOOGLE_API_KEY")?,
                model: optional(&lookup, "GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                label: optional(&lookup, "GEMINI_LABEL", DEFAULT_GEMINI_LABEL),
                base_url: base_url(&lookup, "GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL)?,
            },
            groq: GroqConfig {
                api_key: required(&lookup, "GROQ_API_KEY")?,
                model: optional(&lookup, "GROQ_MODEL", DEFAULT_GROQ_MODEL),
                base_url: base_url(&lookup, "GROQ_BASE_URL", DEFAULT_GROQ_BASE_URL)?,
                max_tokens: positive(&lookup, "GROQ_MAX_TOKENS", DEFAULT_GROQ_MAX_TOKENS)?,
            },
            notion: NotionConfig::from_lookup(&lookup)?,
            notion_database_id: required(&lookup, "NOTION_DB_ID")?,
            mail: MailConfig {
                api_key: required(&lookup, "RESEND_API")?,
                from: optional(&lookup, "EMAIL_FROM", DEFAULT_EMAIL_FROM),
                to: required(&lookup, "EMAIL_TO")?,
                base_url: base_url(&lookup, "RESEND_BASE_URL", DEFAULT_RESEND_BASE_URL)?,
            },
            segment_max_chars: positive(&lookup, "SEGMENT_MAX_CHARS", DEFAULT_SEGMENT_MAX_CHARS)?,
            timezone,
            http_timeout: Duration::from_secs(positive(
                &lookup,
                "HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )?),
        })
    }
}

impl NotionConfig {
    /// Only the Notion credentials, for the diagnostic binaries.
    pub fn from_env() -> Result<Self, DigestError> {
        Self::from_lookup(&|name: &str| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, DigestError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            token: required(lookup, "NOTION_TOKEN")?,
            base_url: base_url(lookup, "NOTION_BASE_URL", DEFAULT_NOTION_BASE_URL)?,
        })
    }
}

/// Reads a variable that must be present and non-blank.
pub fn required_var(name: &str) -> Result<String, DigestError> {
    required(&|n: &str| env::var(n).ok(), name)
}

fn required<F>(lookup: &F, name: &str) -> Result<String, DigestError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| DigestError::ConfigError(format!("{} is not set", name)))
}

fn optional<F>(lookup: &F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parsed<F, T>(lookup: &F, name: &str, default: T) -> Result<T, DigestError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(name).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| DigestError::ConfigError(format!("{}: {}", name, e))),
        None => Ok(default),
    }
}

/// Like [`parsed`], but zero is a configuration error.
fn positive<F, T>(lookup: &F, name: &str, default: T) -> Result<T, DigestError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + PartialEq + Default,
    T::Err: Display,
{
    let value = parsed(lookup, name, default)?;
    if value == T::default() {
        return Err(DigestError::ConfigError(format!("{} must be greater than zero", name)));
    }
    Ok(value)
}

fn base_url<F>(lookup: &F, name: &str, default: &str) -> Result<String, DigestError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = optional(lookup, name, default);
    Url::parse(&raw).map_err(|e| DigestError::ConfigError(format!("{}: {}", name, e)))?;
    Ok(raw.trim_end_matches('/').to_string())
}
