use std::sync::Arc;

use serde::Deserialize;

use super::{ToolParameter, ToolResult, ToolSpec};
use crate::mail::{Attachment, DeliveryOutcome, EmailRequest, Mailer};

pub const SEND_EMAIL: &str = "send_email";

/// Raw `send_email` parameters as the agent supplies them.
///
/// Address fields are comma-separated strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendEmailParams {
    pub to: String,
    pub subject: String,
    #[serde(default)]
    pub html_content: Option<String>,
    #[serde(default)]
    pub text_content: Option<String>,
    #[serde(default)]
    pub from_name: Option<String>,
    #[serde(default)]
    pub from_email: Option<String>,
    #[serde(default)]
    pub cc: String,
    #[serde(default)]
    pub bcc: String,
    #[serde(default)]
    pub reply_to: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Split a comma-separated address field into distinct, trimmed addresses.
pub fn parse_address_list(raw: &str) -> Vec<String> {
    let mut addresses: Vec<String> = Vec::new();
    for address in raw.split(',').map(str::trim).filter(|a| !a.is_empty()) {
        if !addresses.iter().any(|seen| seen == address) {
            addresses.push(address.to_string());
        }
    }
    addresses
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// The `send_email` action
#[derive(Clone)]
pub struct EmailTool {
    mailer: Arc<Mailer>,
}

impl EmailTool {
    pub fn new(mailer: Arc<Mailer>) -> Self {
        tracing::info!(initialized = mailer.is_initialized(), "EmailTool initialized");
        Self { mailer }
    }

    pub fn spec() -> ToolSpec {
        ToolSpec::new(
            SEND_EMAIL,
            "Send an email through Resend. Provide 'to', 'subject' and either \
             'html_content' or 'text_content'. HTML content is wrapped in the \
             OrchestraConnect template and signed automatically.",
        )
        .with_parameter(ToolParameter::string(
            "to",
            "Comma-separated list of recipient email addresses",
            true,
        ))
        .with_parameter(ToolParameter::string("subject", "Email subject", true))
        .with_parameter(ToolParameter::string(
            "html_content",
            "HTML body fragment, without signature",
            false,
        ))
        .with_parameter(ToolParameter::string(
            "text_content",
            "Plain text body",
            false,
        ))
        .with_parameter(ToolParameter::string("from_name", "Sender name", false))
        .with_parameter(ToolParameter::string(
            "from_email",
            "Sender email address",
            false,
        ))
        .with_parameter(ToolParameter::string(
            "cc",
            "Comma-separated list of CC recipients",
            false,
        ))
        .with_parameter(ToolParameter::string(
            "bcc",
            "Comma-separated list of BCC recipients",
            false,
        ))
        .with_parameter(ToolParameter::string("reply_to", "Reply-to address", false))
        .with_parameter(ToolParameter::array(
            "attachments",
            "Files as {filename, path} or {filename, content (base64)}",
            false,
        ))
    }

    pub async fn send_email(&self, params: SendEmailParams) -> ToolResult {
        tracing::info!(
            to = %params.to,
            subject = %params.subject,
            cc = %params.cc,
            bcc = %params.bcc,
            reply_to = %params.reply_to,
            "Email tool called"
        );

        if !self.mailer.is_initialized() {
            return ToolResult::failure(
                "Email service is not properly initialized. \
                 Please check if RESEND_API_KEY is set in the environment.",
            );
        }

        let html_content = supplied(params.html_content);
        let text_content = supplied(params.text_content);
        if html_content.is_none() && text_content.is_none() {
            return ToolResult::failure("Either html_content or text_content must be provided.");
        }

        let to = parse_address_list(&params.to);
        if to.is_empty() {
            return ToolResult::failure("At least one recipient address is required in 'to'.");
        }

        let mut request = EmailRequest::new(to, params.subject)
            .cc(parse_address_list(&params.cc))
            .bcc(parse_address_list(&params.bcc));
        request.html_content = html_content;
        request.text_content = text_content;
        request.from_name = present(params.from_name);
        request.from_email = present(params.from_email);
        request.reply_to = present(Some(params.reply_to)).map(|r| r.trim().to_string());
        let request = params
            .attachments
            .into_iter()
            .fold(request, EmailRequest::attachment);

        match self.mailer.send(request).await {
            DeliveryOutcome::Success { .. } => {
                ToolResult::success(format!("Email sent successfully to {}", params.to))
            }
            DeliveryOutcome::Failure { error } => {
                ToolResult::failure(format!("Failed to send email: {}", error))
            }
        }
    }
}
