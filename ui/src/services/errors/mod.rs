use thiserror::Error;

use crate::features::registration::{FieldError, StatusMessage, UNEXPECTED_ERROR_MESSAGE};
use crate::services::client::ClientError;

/// Failure taxonomy of a single registration attempt
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    #[error("Validation failed for {} field(s)", .errors.len())]
    Validation { errors: Vec<FieldError> },

    #[error("Registration rejected: {message}")]
    Registration { message: String },

    #[error("Admin assignment failed: {message}")]
    Assignment { message: String },

    #[error("Unexpected registration error: {message}")]
    Unexpected { message: String },
}

impl From<ClientError> for RegistrationError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Rejected { message, .. } => RegistrationError::Registration { message },
            other => RegistrationError::Unexpected {
                message: other.to_string(),
            },
        }
    }
}

impl RegistrationError {
    pub fn assignment(error: ClientError) -> Self {
        RegistrationError::Assignment {
            message: error.to_string(),
        }
    }

    /// Get error severity for logging purposes
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RegistrationError::Validation { .. } => ErrorSeverity::Low,
            RegistrationError::Registration { .. } => ErrorSeverity::Medium,
            RegistrationError::Assignment { .. } => ErrorSeverity::Medium,
            RegistrationError::Unexpected { .. } => ErrorSeverity::High,
        }
    }

    /// Toast to show for this failure. Validation errors are shown next to
    /// their fields and assignment failures are recovered silently, so
    /// neither produces one.
    pub fn status_message(&self) -> Option<StatusMessage> {
        match self {
            RegistrationError::Registration { message } => Some(StatusMessage::error(message)),
            RegistrationError::Unexpected { .. } => {
                Some(StatusMessage::error(UNEXPECTED_ERROR_MESSAGE))
            }
            RegistrationError::Validation { .. } | RegistrationError::Assignment { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}
