#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use learning_digest::DigestError;
use learning_digest::ai::NoteProvider;
use learning_digest::core::models::{EmailRequest, PageRequest};
use learning_digest::prompt::NotePrompt;
use learning_digest::worker::notify::MailTransport;
use learning_digest::worker::publish::PageStore;

/// Minimal set of variables `AppConfig` requires.
pub fn required_env() -> HashMap<String, String> {
    [
        ("GOOGLE_API_KEY", "test-google-key"),
        ("GROQ_API_KEY", "test-groq-key"),
        ("NOTION_TOKEN", "test-notion-token"),
        ("NOTION_DB_ID", "db-123"),
        ("RESEND_API", "test-resend-key"),
        ("EMAIL_TO", "reader@example.com"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Provider that answers from a script and counts its calls.
pub struct ScriptedProvider {
    label: String,
    reply: Result<String, String>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedProvider {
    pub fn ok(label: &str, text: &str) -> (Self, Arc<AtomicUsize>) {
        Self::build(label, Ok(text.to_string()))
    }

    pub fn failing(label: &str, message: &str) -> (Self, Arc<AtomicUsize>) {
        Self::build(label, Err(message.to_string()))
    }

    fn build(label: &str, reply: Result<String, String>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                label: label.to_string(),
                reply,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

#[async_trait]
impl NoteProvider for ScriptedProvider {
    fn label(&self) -> &str {
        &self.label
    }

    async fn generate(&self, _prompt: &NotePrompt) -> Result<String, DigestError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().map_err(DigestError::ProviderError)
    }
}

#[derive(Default)]
pub struct RecordingStore {
    pub pages: Mutex<Vec<PageRequest>>,
    pub fail: bool,
}

impl RecordingStore {
    pub fn failing() -> Self {
        Self {
            pages: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn pages(&self) -> Vec<PageRequest> {
        self.pages.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageStore for RecordingStore {
    async fn create_page(&self, page: &PageRequest) -> Result<String, DigestError> {
        self.pages.lock().unwrap().push(page.clone());
        if self.fail {
            return Err(DigestError::NotionError("validation_error".to_string()));
        }
        Ok("page-1".to_string())
    }
}

#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<EmailRequest>>,
    pub fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<EmailRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingMailer {
    async fn send(&self, email: &EmailRequest) -> Result<String, DigestError> {
        self.sent.lock().unwrap().push(email.clone());
        if self.fail {
            return Err(DigestError::MailError("Resend returned 403".to_string()));
        }
        Ok("email-1".to_string())
    }
}
