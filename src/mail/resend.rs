use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{Attachment, EmailProvider, RenderedEmail};
use crate::error::ProviderError;

/// Resend HTTP API client
#[derive(Clone)]
pub struct ResendClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ResendClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.base_url)
    }
}

/// Body of `POST /emails`
#[derive(Debug, Serialize)]
pub(crate) struct Payload<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cc: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bcc: Option<&'a [String]>,
    reply_to: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachments: Option<&'a [Attachment]>,
}

impl<'a> From<&'a RenderedEmail> for Payload<'a> {
    fn from(email: &'a RenderedEmail) -> Self {
        Self {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            html: email.html.as_deref(),
            text: email.text.as_deref(),
            cc: email.cc.as_deref(),
            bcc: email.bcc.as_deref(),
            reply_to: &email.reply_to,
            attachments: Some(email.attachments.as_slice()).filter(|a| !a.is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
    #[serde(default)]
    name: Option<String>,
}

#[async_trait]
impl EmailProvider for ResendClient {
    async fn send(&self, email: &RenderedEmail) -> Result<String, ProviderError> {
        let payload = Payload::from(email);

        let res = self
            .client
            .post(self.emails_url())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(ErrorResponse {
                    message,
                    name: Some(name),
                }) => format!("{}: {}", name, message),
                Ok(ErrorResponse { message, name: None }) => message,
                Err(_) => body,
            };
            tracing::debug!(status = status.as_u16(), %message, "Resend API error");
            return Err(ProviderError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let response: SendResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::InvalidResponse(format!("{} (body: {})", e, body)))?;

        Ok(response.id)
    }
}
