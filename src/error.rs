//! Frontend Errors
//!
//! One enum per layer: models, session, remote actions.

use thiserror::Error;

/// Errors raised while interpreting an entity snapshot
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("IdeaStatus not found for value {0}.")]
    UnknownStatus(i32),
}

/// Errors reading page-injected session state
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("page value '{0}' is missing")]
    Missing(String),

    #[error("page value '{key}' is malformed: {reason}")]
    Malformed { key: String, reason: String },

    #[error("page value '{key}' could not be stored: {reason}")]
    Unwritable { key: String, reason: String },
}

/// Errors returned by the remote action service
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server rejected request ({status}){}", .message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Rejected { status: u16, message: Option<String> },
}

impl ServiceError {
    /// Message shown to the viewer
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Network(_) => "Could not reach the server. Please try again.".to_string(),
            ServiceError::Rejected { message: Some(message), .. } => message.clone(),
            ServiceError::Rejected { status, .. } if *status == 401 || *status == 403 => {
                "You are not allowed to do that.".to_string()
            }
            ServiceError::Rejected { .. } => "Something went wrong. Please try again.".to_string(),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
pub type SessionResult<T> = Result<T, SessionError>;
