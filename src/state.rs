use std::sync::Arc;

use crate::mail::Mailer;
use crate::tools::EmailTool;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<Mailer>,
    pub email_tool: Arc<EmailTool>,
}

impl AppState {
    pub fn new(mailer: Mailer) -> Self {
        let mailer = Arc::new(mailer);
        Self {
            email_tool: Arc::new(EmailTool::new(mailer.clone())),
            mailer,
        }
    }
}
