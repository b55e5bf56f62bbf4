use thiserror::Error;

/// Errors raised while talking to the authentication service
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The service answered with a structured refusal; `message` is already
    /// resolved to the text that should be shown to the user
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("Serialization error: {message}")]
    SerializationError { message: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// True when the service itself refused the request, as opposed to the
    /// request never completing
    pub fn is_rejection(&self) -> bool {
        matches!(self, ClientError::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_displays_service_message() {
        let error = ClientError::Rejected {
            status: 422,
            message: "Email already exists".to_string(),
        };
        assert!(error.is_rejection());
        assert_eq!(error.to_string(), "Email already exists");
    }

    #[test]
    fn test_transport_failures_are_not_rejections() {
        let network = ClientError::NetworkError {
            message: "connection refused".to_string(),
        };
        let decode = ClientError::SerializationError {
            message: "expected value".to_string(),
        };
        assert!(!network.is_rejection());
        assert!(!decode.is_rejection());
        assert_eq!(network.to_string(), "Network error: connection refused");
    }
}
