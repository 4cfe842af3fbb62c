use crate::core::sanitize::sanitize;
use crate::domain::model::{
    ContactAck, ContactSubmission, Embed, EmbedField, EmbedFooter, SanitizedSubmission,
    WebhookMessage,
};
use crate::domain::ports::Notifier;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{is_valid_email, validate_non_empty_string};
use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::Arc;

pub const EMBED_TITLE: &str = "📧 New Contact Form Submission";
pub const EMBED_COLOR: u32 = 0x8B5CF6;
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! Thank you for reaching out.";

pub fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "https://taymaerz.de".to_string(),
        "https://www.taymaerz.de".to_string(),
    ]
}

#[derive(Debug, Clone)]
pub struct RelaySettings {
    pub allowed_origins: Vec<String>,
    pub username: String,
    pub avatar_url: Option<String>,
    pub footer: String,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            username: "Portfolio Bot".to_string(),
            avatar_url: None,
            footer: "Portfolio Contact Form".to_string(),
        }
    }
}

/// Validates, sanitizes and forwards contact form submissions.
pub struct ContactRelay {
    notifier: Option<Arc<dyn Notifier>>,
    settings: RelaySettings,
}

impl ContactRelay {
    pub fn new(notifier: Option<Arc<dyn Notifier>>, settings: RelaySettings) -> Self {
        if notifier.is_none() {
            tracing::warn!("No contact webhook configured, submissions will be rejected");
        }
        Self { notifier, settings }
    }

    /// `Origin` 必須完全相符，`Referer` 只需前綴相符
    pub fn is_allowed_origin(&self, origin: Option<&str>, referer: Option<&str>) -> bool {
        self.settings.allowed_origins.iter().any(|domain| {
            origin.is_some_and(|o| o == domain.as_str())
                || referer.is_some_and(|r| r.starts_with(domain.as_str()))
        })
    }

    pub async fn submit(
        &self,
        raw: ContactSubmission,
        origin: Option<&str>,
        referer: Option<&str>,
    ) -> Result<ContactAck> {
        if !self.is_allowed_origin(origin, referer) {
            tracing::warn!(
                "Contact submission rejected, origin={:?} referer={:?}",
                origin,
                referer
            );
            return Err(PortfolioError::InvalidOrigin);
        }

        let submission = validate_submission(raw)?;
        let sanitized = SanitizedSubmission {
            name: sanitize(&submission.name),
            email: sanitize(&submission.email),
            subject: sanitize(&submission.subject),
            message: sanitize(&submission.message),
        };

        let notifier = self
            .notifier
            .as_ref()
            .ok_or_else(|| PortfolioError::RelayUnavailable {
                message: "contact webhook is not configured".to_string(),
            })?;

        let message = self.build_message(&sanitized, Utc::now());
        notifier.deliver(&message).await.map_err(|e| match e {
            PortfolioError::RelayUnavailable { .. } => e,
            other => PortfolioError::RelayUnavailable {
                message: other.to_string(),
            },
        })?;

        tracing::info!("✅ Contact submission relayed");
        Ok(ContactAck {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        })
    }

    pub fn build_message(
        &self,
        submission: &SanitizedSubmission,
        timestamp: DateTime<Utc>,
    ) -> WebhookMessage {
        let field = |name: &str, value: String, inline: bool| EmbedField {
            name: name.to_string(),
            value,
            inline,
        };

        let embed = Embed {
            title: EMBED_TITLE.to_string(),
            color: EMBED_COLOR,
            fields: vec![
                field("👤 Name", submission.name.clone(), true),
                field("📧 Email", submission.email.clone(), true),
                field("📋 Subject", format!("```\n{}\n```", submission.subject), false),
                field("💬 Message", submission.message.clone(), false),
            ],
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            footer: EmbedFooter {
                text: self.settings.footer.clone(),
            },
        };

        WebhookMessage {
            username: self.settings.username.clone(),
            avatar_url: self.settings.avatar_url.clone(),
            embeds: vec![embed],
        }
    }
}

struct ValidSubmission {
    name: String,
    email: String,
    subject: String,
    message: String,
}

fn validate_submission(raw: ContactSubmission) -> Result<ValidSubmission> {
    let name = raw.name.unwrap_or_default();
    let email = raw.email.unwrap_or_default();
    let subject = raw.subject.unwrap_or_default();
    let message = raw.message.unwrap_or_default();

    validate_non_empty_string("name", &name)?;
    validate_non_empty_string("email", &email)?;
    validate_non_empty_string("subject", &subject)?;
    validate_non_empty_string("message", &message)?;

    if !is_valid_email(&email) {
        return Err(PortfolioError::InvalidEmail);
    }

    Ok(ValidSubmission {
        name,
        email,
        subject,
        message,
    })
}
