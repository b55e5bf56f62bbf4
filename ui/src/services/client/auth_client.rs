use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{info, instrument, warn};

use super::errors::{ClientError, ClientResult};
use super::traits::{AccountRegistrar, AdminAssignmentService, SessionProbe, UserCountOracle};
use super::types::*;
use crate::features::registration::{
    AccountIdentity, AdminAssignmentResult, SessionReadiness, UserCount,
};
use crate::services::config::AuthServiceConfig;

/// Client for the authentication service's registration endpoints
#[derive(Clone)]
pub struct AuthServiceClient {
    pub(crate) http_client: Client,
    config: AuthServiceConfig,
}

impl AuthServiceClient {
    pub fn new(config: AuthServiceConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &AuthServiceConfig {
        &self.config
    }

    fn get(&self, path: &str) -> RequestBuilder {
        with_credentials(self.http_client.get(self.config.endpoint(path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        with_credentials(
            self.http_client
                .post(self.config.endpoint(path))
                .header("Content-Type", "application/json"),
        )
    }
}

// The session cookie set by the service has to travel with every call
#[cfg(target_arch = "wasm32")]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder
}

async fn send(builder: RequestBuilder, operation: &str) -> ClientResult<Response> {
    builder.send().await.map_err(|e| ClientError::NetworkError {
        message: format!("Failed to call {}: {}", operation, e),
    })
}

/// Decode a JSON body, turning non-2xx statuses into `ClientError::Rejected`
async fn read_json<T: DeserializeOwned>(response: Response, operation: &str) -> ClientResult<T> {
    let status = response.status();
    let body = response.text().await;

    if !status.is_success() {
        return Err(rejection(status, &body.unwrap_or_default(), operation));
    }

    let body = body.map_err(|e| ClientError::NetworkError {
        message: format!("Failed to read {} response: {}", operation, e),
    })?;
    decode_body(&body, operation)
}

fn rejection(status: StatusCode, body: &str, operation: &str) -> ClientError {
    let message = rejection_message(status.as_u16(), status.canonical_reason(), body);
    warn!("{} rejected with status {}: {}", operation, status, message);
    ClientError::Rejected {
        status: status.as_u16(),
        message,
    }
}

fn decode_body<T: DeserializeOwned>(body: &str, operation: &str) -> ClientResult<T> {
    serde_json::from_str(body).map_err(|e| ClientError::SerializationError {
        message: format!("Failed to parse {} response: {}", operation, e),
    })
}

/// Resolve the user-facing text of a refused request: the service's own
/// message, then the status reason phrase, then a generic line
pub fn rejection_message(status: u16, canonical_reason: Option<&str>, body: &str) -> String {
    let service_message = serde_json::from_str::<ServiceErrorBody>(body)
        .ok()
        .and_then(|error_body| {
            if let Some(code) = &error_body.code {
                info!("Service error code: {}", code);
            }
            error_body.message
        })
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty());

    service_message
        .or_else(|| canonical_reason.map(str::to_string))
        .unwrap_or_else(|| format!("Request failed (status {})", status))
}

#[async_trait(?Send)]
impl AccountRegistrar for AuthServiceClient {
    #[instrument(skip(self, password), err)]
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> ClientResult<SignUpResponse> {
        info!("Creating account for email: {}", email);

        let request = SignUpRequest {
            email,
            password,
            name,
        };
        let response = send(self.post(&self.config.sign_up_path).json(&request), "sign-up").await?;
        read_json(response, "sign-up").await
    }
}

#[async_trait(?Send)]
impl UserCountOracle for AuthServiceClient {
    #[instrument(skip(self), err)]
    async fn user_count(&self) -> ClientResult<UserCount> {
        let response = send(self.get(&self.config.user_count_path), "user count").await?;
        let body: UserCountResponse = read_json(response, "user count").await?;
        Ok(body.count)
    }
}

#[async_trait(?Send)]
impl AdminAssignmentService for AuthServiceClient {
    #[instrument(skip(self), err)]
    async fn assign(&self, identity: &AccountIdentity) -> ClientResult<AdminAssignmentResult> {
        let request = AssignAdminRequest {
            user_id: identity.as_str(),
        };
        let response = send(
            self.post(&self.config.assign_admin_path).json(&request),
            "admin assignment",
        )
        .await?;
        let body: AssignAdminResponse = read_json(response, "admin assignment").await?;
        Ok(body.into())
    }
}

#[async_trait(?Send)]
impl SessionProbe for AuthServiceClient {
    #[instrument(skip(self), err)]
    async fn session_readiness(&self) -> ClientResult<SessionReadiness> {
        let response = send(self.get(&self.config.session_path), "session lookup").await?;
        let body: Option<SessionBody> = read_json(response, "session lookup").await?;

        Ok(match body.and_then(|session| session.user) {
            Some(_) => SessionReadiness::Authenticated,
            None => SessionReadiness::Anonymous,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_prefers_service_message() {
        let body = r#"{"message":"Email already exists","code":"USER_ALREADY_EXISTS"}"#;
        assert_eq!(
            rejection_message(422, Some("Unprocessable Entity"), body),
            "Email already exists"
        );
    }

    #[test]
    fn test_rejection_falls_back_to_status_text() {
        assert_eq!(rejection_message(400, Some("Bad Request"), ""), "Bad Request");
        assert_eq!(
            rejection_message(400, Some("Bad Request"), r#"{"message":"  "}"#),
            "Bad Request"
        );
        assert_eq!(
            rejection_message(500, Some("Internal Server Error"), "<html>oops</html>"),
            "Internal Server Error"
        );
    }

    #[test]
    fn test_rejection_without_reason_phrase() {
        assert_eq!(rejection_message(599, None, ""), "Request failed (status 599)");
    }

    #[test]
    fn test_refused_sign_up_becomes_rejection() {
        let body = r#"{"message":"Email already exists","code":"USER_ALREADY_EXISTS"}"#;
        let error = rejection(StatusCode::UNPROCESSABLE_ENTITY, body, "sign-up");
        assert_eq!(
            error,
            ClientError::Rejected {
                status: 422,
                message: "Email already exists".to_string()
            }
        );
        assert!(error.is_rejection());

        let bare = rejection(StatusCode::INTERNAL_SERVER_ERROR, "", "admin assignment");
        assert_eq!(
            bare,
            ClientError::Rejected {
                status: 500,
                message: "Internal Server Error".to_string()
            }
        );
    }

    #[test]
    fn test_undecodable_success_body_is_serialization_error() {
        let result: ClientResult<UserCountResponse> = decode_body("<html></html>", "user count");
        assert!(matches!(
            result,
            Err(ClientError::SerializationError { .. })
        ));
        assert!(!result.unwrap_err().is_rejection());
    }

    #[test]
    fn test_signed_out_session_body_decodes_to_none() {
        let body: Option<SessionBody> = decode_body("null", "session lookup").unwrap();
        assert!(body.is_none());

        let count: UserCountResponse = decode_body(r#"{"count":0}"#, "user count").unwrap();
        assert_eq!(count.count, 0);
    }

    #[test]
    fn test_client_keeps_configured_endpoints() {
        let client = AuthServiceClient::new(AuthServiceConfig::for_origin("https://auth.example.com"));
        assert_eq!(client.config().base_url, "https://auth.example.com");
    }
}
