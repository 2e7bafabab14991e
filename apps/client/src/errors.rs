use thiserror::Error;

use crate::api_client::ApiError;
use crate::guard::Operation;

const GENERATION_FAILED_MESSAGE: &str = "Error generating resume.";

/// Application-level error type.
/// Every variant maps to the message shown in an error alert via `alert()`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected before any network call; the text is shown as-is.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend answered but did not report success.
    #[error("Rejected: {0}")]
    Rejected(String),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("{0:?} is already in progress")]
    Busy(Operation),

    #[error("Resume generation failed: {0}")]
    Generation(String),

    #[error("Session storage error: {0}")]
    Session(String),

    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    #[error("Export error: {0}")]
    Export(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Success or failure flavour of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// A message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

impl AppError {
    /// Converts the error into the alert the user sees.
    /// Internal failures are logged and replaced by a generic message.
    pub fn alert(&self) -> Alert {
        let message = match self {
            AppError::Validation(msg) | AppError::Rejected(msg) => msg.clone(),
            AppError::Api(e) => e.user_message(),
            AppError::Busy(op) => format!("{} is already in progress.", op.label()),
            AppError::Generation(cause) => {
                tracing::error!("Resume generation failed: {cause}");
                GENERATION_FAILED_MESSAGE.to_string()
            }
            AppError::Session(msg) => {
                tracing::error!("Session storage error: {msg}");
                "Could not access the saved session.".to_string()
            }
            AppError::Render(e) => {
                tracing::error!("Render error: {e}");
                "Could not render the resume.".to_string()
            }
            AppError::Export(e) => {
                tracing::error!("Export error: {e}");
                format!("Could not export the resume: {e}")
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An unexpected error occurred.".to_string()
            }
        };
        Alert::error(message)
    }
}
