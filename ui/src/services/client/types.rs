use serde::{Deserialize, Serialize};

use crate::features::registration::{AccountIdentity, AdminAssignmentResult};

/// Body of the email sign-up call. Deliberately not `Debug`: it carries the password.
#[derive(Serialize)]
pub struct SignUpRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub name: &'a str,
}

/// Successful sign-up response
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SignUpResponse {
    #[serde(default)]
    pub user: Option<CreatedUser>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CreatedUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl SignUpResponse {
    /// Response carrying the given user id
    pub fn with_user_id(id: &str) -> Self {
        Self {
            user: Some(CreatedUser {
                id: Some(id.to_string()),
                ..CreatedUser::default()
            }),
        }
    }

    /// The created account's identity, if the response carries a usable one
    pub fn account_identity(&self) -> Option<AccountIdentity> {
        self.user
            .as_ref()?
            .id
            .as_deref()
            .and_then(AccountIdentity::parse)
    }
}

/// Structured error body returned by the authentication service
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct UserCountResponse {
    pub count: u64,
}

#[derive(Serialize, Debug, Clone)]
pub struct AssignAdminRequest<'a> {
    #[serde(rename = "userId")]
    pub user_id: &'a str,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AssignAdminResponse {
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

impl From<AssignAdminResponse> for AdminAssignmentResult {
    fn from(response: AssignAdminResponse) -> Self {
        AdminAssignmentResult {
            is_admin: response.is_admin,
        }
    }
}

/// Session lookup response; the service answers `null` when signed out
#[derive(Deserialize, Debug, Clone)]
pub struct SessionBody {
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identity_extracted_from_user_id() {
        let response: SignUpResponse = serde_json::from_value(json!({
            "token": "ignored",
            "user": { "id": "u1", "email": "a@b.com", "name": "Ada" }
        }))
        .unwrap();
        assert_eq!(response.account_identity().unwrap().as_str(), "u1");
    }

    #[test]
    fn test_missing_or_blank_id_has_no_identity() {
        let no_user: SignUpResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(no_user.account_identity(), None);

        let no_id: SignUpResponse = serde_json::from_value(json!({ "user": {} })).unwrap();
        assert_eq!(no_id.account_identity(), None);

        let blank_id: SignUpResponse =
            serde_json::from_value(json!({ "user": { "id": "   " } })).unwrap();
        assert_eq!(blank_id.account_identity(), None);
    }

    #[test]
    fn test_wire_field_names() {
        let request = AssignAdminRequest { user_id: "u1" };
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({ "userId": "u1" }));

        let response: AssignAdminResponse =
            serde_json::from_value(json!({ "isAdmin": true })).unwrap();
        assert!(AdminAssignmentResult::from(response).is_admin);

        let signed_out: Option<SessionBody> = serde_json::from_str("null").unwrap();
        assert!(signed_out.is_none());
    }

    #[test]
    fn test_sign_up_request_shape() {
        let request = SignUpRequest {
            email: "ada@example.com",
            password: "correct horse",
            name: "Ada",
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "email": "ada@example.com",
                "password": "correct horse",
                "name": "Ada"
            })
        );
    }

    #[test]
    fn test_negative_count_is_rejected() {
        assert!(serde_json::from_value::<UserCountResponse>(json!({ "count": -1 })).is_err());
        let count: UserCountResponse = serde_json::from_value(json!({ "count": 5 })).unwrap();
        assert_eq!(count.count, 5);
    }
}
