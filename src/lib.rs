pub mod api;
pub mod config;
pub mod error;
pub mod mail;
pub mod state;
pub mod tools;

pub use config::Config;
pub use error::{AppError, MailError, ProviderError, Result};
pub use mail::{DeliveryOutcome, EmailRequest, Mailer};
pub use state::AppState;
pub use tools::{EmailTool, ToolResult};
