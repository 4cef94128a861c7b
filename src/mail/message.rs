use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::MailError;

/// One email to deliver, as handed to the [`Mailer`](super::Mailer).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmailRequest {
    pub to: Vec<String>,
    pub subject: String,
    pub html_content: Option<String>,
    pub text_content: Option<String>,
    pub from_name: Option<String>,
    pub from_email: Option<String>,
    pub reply_to: Option<String>,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
    pub attachments: Vec<Attachment>,
}

impl EmailRequest {
    pub fn new<I, S>(to: I, subject: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            to: unique(to),
            subject: subject.into(),
            ..Default::default()
        }
    }

    pub fn html(mut self, content: impl Into<String>) -> Self {
        self.html_content = Some(content.into());
        self
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.text_content = Some(content.into());
        self
    }

    pub fn from_name(mut self, name: impl Into<String>) -> Self {
        self.from_name = Some(name.into());
        self
    }

    pub fn from_email(mut self, email: impl Into<String>) -> Self {
        self.from_email = Some(email.into());
        self
    }

    pub fn reply_to(mut self, address: impl Into<String>) -> Self {
        self.reply_to = Some(address.into());
        self
    }

    pub fn cc<I, S>(mut self, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cc = unique(addresses);
        self
    }

    pub fn bcc<I, S>(mut self, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bcc = unique(addresses);
        self
    }

    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Whether a non-empty html or text body is present.
    ///
    /// Whitespace-only bodies count as content.
    pub fn has_content(&self) -> bool {
        non_empty(&self.html_content).is_some() || non_empty(&self.text_content).is_some()
    }

    /// Check the request before anything is rendered or sent.
    pub fn validate(&self) -> Result<(), MailError> {
        if !self.has_content() {
            return Err(MailError::Validation(
                "Either html_content or text_content must be provided".to_string(),
            ));
        }
        if self.to.iter().all(|address| address.trim().is_empty()) {
            return Err(MailError::Validation(
                "At least one recipient address is required".to_string(),
            ));
        }
        if self.subject.trim().is_empty() {
            return Err(MailError::Validation("Subject is required".to_string()));
        }
        for attachment in &self.attachments {
            attachment.validate()?;
        }
        Ok(())
    }
}

/// A file attached to an email, either fetched by the provider from `path`
/// or inlined as base64 `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Attachment {
    pub fn from_url(filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            path: Some(url.into()),
            content: None,
        }
    }

    pub fn validate(&self) -> Result<(), MailError> {
        if self.filename.trim().is_empty() {
            return Err(MailError::Validation(
                "Attachment filename is required".to_string(),
            ));
        }

        match (&self.path, &self.content) {
            (Some(_), None) => Ok(()),
            (None, Some(content)) => STANDARD.decode(content).map(|_| ()).map_err(|e| {
                MailError::Validation(format!(
                    "Attachment {} has invalid base64 content: {}",
                    self.filename, e
                ))
            }),
            _ => Err(MailError::Validation(format!(
                "Attachment {} needs exactly one of path or content",
                self.filename
            ))),
        }
    }
}

/// Fully resolved message, ready for the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEmail {
    /// `"Name <email>"`
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: Option<String>,
    pub text: Option<String>,
    /// `None` when there is nobody to copy
    pub cc: Option<Vec<String>>,
    pub bcc: Option<Vec<String>>,
    pub reply_to: String,
    pub attachments: Vec<Attachment>,
}

/// Result of a single delivery attempt.
#[derive(Debug)]
pub enum DeliveryOutcome {
    Success { id: String },
    Failure { error: MailError },
}

impl DeliveryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DeliveryOutcome::Success { .. })
    }

    pub fn message_id(&self) -> Option<&str> {
        match self {
            DeliveryOutcome::Success { id } => Some(id),
            DeliveryOutcome::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&MailError> {
        match self {
            DeliveryOutcome::Success { .. } => None,
            DeliveryOutcome::Failure { error } => Some(error),
        }
    }
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Drop blank and repeated addresses, keeping first-seen order.
fn unique<I, S>(addresses: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for address in addresses {
        let address = address.into().trim().to_string();
        if !address.is_empty() && !out.contains(&address) {
            out.push(address);
        }
    }
    out
}
