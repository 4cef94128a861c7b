pub mod message;
pub mod resend;
pub mod template;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::{MailError, ProviderError};

pub use message::{Attachment, DeliveryOutcome, EmailRequest, RenderedEmail};
pub use resend::ResendClient;

/// Transactional email provider (Resend in production)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Submit one message and return the provider's message id.
    async fn send(&self, email: &RenderedEmail) -> Result<String, ProviderError>;
}

/// Sender values used when a request leaves them out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderDefaults {
    pub from_email: String,
    pub from_name: String,
    pub reply_to: String,
}

/// Delivery service.
///
/// Holds the provider client built once at startup. A mailer without a
/// provider is uninitialized: every send fails without touching the network.
#[derive(Clone)]
pub struct Mailer {
    provider: Option<Arc<dyn EmailProvider>>,
    defaults: SenderDefaults,
}

impl Mailer {
    pub fn new(provider: Arc<dyn EmailProvider>, defaults: SenderDefaults) -> Self {
        Self {
            provider: Some(provider),
            defaults,
        }
    }

    pub fn unconfigured(defaults: SenderDefaults) -> Self {
        Self {
            provider: None,
            defaults,
        }
    }

    /// Create mailer from config (RESEND_API_KEY, EMAIL_FROM_ADDRESS, etc.)
    pub fn from_config(config: &Config) -> Self {
        match &config.resend_api_key {
            Some(api_key) => {
                tracing::info!(api_url = %config.resend_api_url, "Resend client initialized");
                let client = ResendClient::new(api_key.clone(), config.resend_api_url.clone());
                Self::new(Arc::new(client), config.sender_defaults())
            }
            None => {
                tracing::warn!(
                    "RESEND_API_KEY not found in configuration, email delivery disabled"
                );
                Self::unconfigured(config.sender_defaults())
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.provider.is_some()
    }

    /// Resolve defaults and render the body, without sending anything.
    pub fn compose(&self, request: EmailRequest) -> Result<RenderedEmail, MailError> {
        request.validate()?;

        let from_email = message::non_blank(&request.from_email)
            .unwrap_or(&self.defaults.from_email)
            .to_string();
        let from_name = message::non_blank(&request.from_name)
            .unwrap_or(&self.defaults.from_name)
            .to_string();
        let reply_to = message::non_blank(&request.reply_to)
            .unwrap_or(&self.defaults.reply_to)
            .to_string();

        let html =
            message::non_empty(&request.html_content).map(|body| template::render(body, true));
        let text = message::non_empty(&request.text_content).map(str::to_string);

        Ok(RenderedEmail {
            from: format!("{} <{}>", from_name, from_email),
            to: request.to,
            subject: request.subject,
            html,
            text,
            cc: Some(request.cc).filter(|cc| !cc.is_empty()),
            bcc: Some(request.bcc).filter(|bcc| !bcc.is_empty()),
            reply_to,
            attachments: request.attachments,
        })
    }

    /// Send one email. Makes at most one provider call and never fails
    /// outside of the returned outcome.
    pub async fn send(&self, request: EmailRequest) -> DeliveryOutcome {
        let Some(provider) = &self.provider else {
            let error =
                MailError::Configuration("Email service not properly initialized".to_string());
            tracing::error!(error = %error, "Email not sent");
            return DeliveryOutcome::Failure { error };
        };

        let email = match self.compose(request) {
            Ok(email) => email,
            Err(error) => {
                tracing::error!(error = %error, "Email not sent");
                return DeliveryOutcome::Failure { error };
            }
        };

        match provider.send(&email).await {
            Ok(id) => {
                tracing::info!(
                    id = %id,
                    to = ?email.to,
                    subject = %email.subject,
                    "Email sent successfully"
                );
                DeliveryOutcome::Success { id }
            }
            Err(e) => {
                tracing::error!(error = %e, to = ?email.to, "Error sending email with Resend API");
                DeliveryOutcome::Failure { error: e.into() }
            }
        }
    }
}
