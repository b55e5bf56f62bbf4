// Client-side access to the authentication service
//
// This module provides:
// - The traits the registration workflow is written against
// - A reqwest-backed implementation talking to the auth service over JSON
// - Wire types and error handling for those calls

pub mod auth_client;
pub mod errors;
pub mod traits;
pub mod types;

pub use auth_client::{rejection_message, AuthServiceClient};
pub use errors::{ClientError, ClientResult};
pub use traits::{AccountRegistrar, AdminAssignmentService, SessionProbe, UserCountOracle};
pub use types::{
    AssignAdminRequest, AssignAdminResponse, CreatedUser, ServiceErrorBody, SessionBody,
    SignUpRequest, SignUpResponse, UserCountResponse,
};
