use async_trait::async_trait;
use tracing::info;

use crate::core::models::EmailRequest;
use crate::errors::DigestError;
use crate::utils::render_html;

/// Outbound mail dispatch.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Sends the message and returns the provider's message id.
    async fn send(&self, email: &EmailRequest) -> Result<String, DigestError>;
}

/// Fixed sender and the single configured recipient.
#[derive(Debug, Clone)]
pub struct MailRoute {
    pub from: String,
    pub to: String,
}

#[must_use]
pub fn subject_for(provider_label: &str) -> String {
    format!("Daily Learning Note ({})", provider_label)
}

#[must_use]
pub fn build_email(route: &MailRoute, text: &str, provider_label: &str) -> EmailRequest {
    EmailRequest {
        from: route.from.clone(),
        to: route.to.clone(),
        subject: subject_for(provider_label),
        text: text.to_string(),
        html: render_html(text),
    }
}

/// Emails the note in plain-text and HTML form. Any failure is returned to
/// the caller; the pipeline treats it as fatal.
pub async fn notify(
    mailer: &dyn MailTransport,
    route: &MailRoute,
    text: &str,
    provider_label: &str,
) -> Result<String, DigestError> {
    let email = build_email(route, text, provider_label);
    info!("Sending \"{}\" to {}", email.subject, email.to);

    let email_id = mailer.send(&email).await?;
    info!("Email sent via Resend ({})", email_id);
    Ok(email_id)
}
