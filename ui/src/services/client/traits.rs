//! Seams between the registration workflow and the authentication service
//!
//! WASM-first: futures are not required to be `Send`.

use async_trait::async_trait;

use super::errors::ClientResult;
use super::types::SignUpResponse;
use crate::features::registration::{
    AccountIdentity, AdminAssignmentResult, SessionReadiness, UserCount,
};

/// Creates accounts
#[async_trait(?Send)]
pub trait AccountRegistrar {
    async fn sign_up(&self, email: &str, password: &str, name: &str)
        -> ClientResult<SignUpResponse>;
}

/// Reports how many accounts exist; the answer is advisory only
#[async_trait(?Send)]
pub trait UserCountOracle {
    async fn user_count(&self) -> ClientResult<UserCount>;
}

/// Decides and applies first-user promotion. Idempotency and atomicity are
/// the implementor's contract.
#[async_trait(?Send)]
pub trait AdminAssignmentService {
    async fn assign(&self, identity: &AccountIdentity) -> ClientResult<AdminAssignmentResult>;
}

/// Reports whether the browser already holds an authenticated session
#[async_trait(?Send)]
pub trait SessionProbe {
    async fn session_readiness(&self) -> ClientResult<SessionReadiness>;
}
