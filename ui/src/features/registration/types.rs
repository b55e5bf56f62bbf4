// Core types for the registration flow - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::advisory::is_likely_first_user;
use super::form_validation::validate_field;
use crate::services::config::FormRules;
use crate::services::errors::RegistrationError;

pub const ADMIN_GRANTED_MESSAGE: &str =
    "Account created! You have been assigned admin privileges.";
pub const SIGN_UP_SUCCESS_MESSAGE: &str = "Sign up successful";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Number of registered accounts; advisory only
pub type UserCount = u64;

/// One submission attempt's input, trimmed where it matters
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegistrationInput {
    pub fn new(name: &str, email: &str, password: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }

    pub fn value_of(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }
}

impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque identifier of a freshly created account
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountIdentity(String);

impl AccountIdentity {
    /// Returns `None` for blank identifiers
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authoritative outcome of the promotion decision
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminAssignmentResult {
    pub is_admin: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Password];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

// Workflow state management
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkflowPhase {
    Idle,
    Validating,
    Submitting,
    AssigningRole,
    /// Terminal: navigation has been requested and the form is not reused
    Finalizing,
}

impl WorkflowPhase {
    /// True while an attempt is in flight or finished; the form must not resubmit
    pub fn is_busy(&self) -> bool {
        !matches!(self, WorkflowPhase::Idle)
    }
}

/// Whether the page knows the visitor's session state yet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionReadiness {
    Pending,
    Anonymous,
    Authenticated,
}

impl SessionReadiness {
    pub fn accepts_submission(&self) -> bool {
        matches!(self, SessionReadiness::Anonymous)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// The single toast shown for a submission attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: &str) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.to_string(),
        }
    }

    pub fn error(text: &str) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.to_string(),
        }
    }
}

/// What became of the admin-assignment step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminOutcome {
    Promoted,
    NotPromoted,
    /// The assignment call failed; the account exists but its role is unknown
    Unconfirmed,
    /// No usable identity came back, so assignment was never attempted
    Skipped,
}

impl AdminOutcome {
    pub fn status_text(&self) -> &'static str {
        match self {
            AdminOutcome::Promoted => ADMIN_GRANTED_MESSAGE,
            _ => SIGN_UP_SUCCESS_MESSAGE,
        }
    }
}

/// Result of one call to `RegistrationWorkflow::submit`
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionOutcome {
    NotReady,
    Rejected { message: String },
    /// Validation or unexpected failure; the form is back in `Idle`
    Failed(RegistrationError),
    Completed { admin: AdminOutcome },
    /// The form was torn down mid-flight; nothing was applied
    Abandoned,
}

// Action enum for state mutations
#[derive(Clone, Debug, PartialEq)]
pub enum RegistrationAction {
    // Form field actions
    SetName(String),
    SetEmail(String),
    SetPassword(String),
    TogglePasswordVisibility,

    // Workflow actions
    SetReadiness(SessionReadiness),
    SetUserCount(UserCount),
    SetPhase(WorkflowPhase),
    SetFieldErrors(Vec<FieldError>),
    ClearFieldErrors,
    SetStatus(Option<StatusMessage>),
}

// Form state
#[derive(Clone, Default, PartialEq)]
pub struct SignUpFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub show_password: bool,
}

impl SignUpFields {
    /// Snapshot the fields into an immutable submission input
    pub fn to_input(&self) -> RegistrationInput {
        RegistrationInput::new(&self.name, &self.email, &self.password)
    }

    pub fn value_of(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct RegistrationState {
    pub readiness: SessionReadiness,
    pub form: SignUpFields,
    pub field_errors: BTreeMap<Field, String>,
    pub phase: WorkflowPhase,
    pub user_count: Option<UserCount>,
    pub likely_first_user: bool,
    pub status: Option<StatusMessage>,
    pub rules: FormRules,
}

impl RegistrationState {
    pub fn new(rules: FormRules) -> Self {
        Self {
            readiness: SessionReadiness::Pending,
            form: SignUpFields::default(),
            field_errors: BTreeMap::new(),
            phase: WorkflowPhase::Idle,
            user_count: None,
            likely_first_user: false,
            status: None,
            rules,
        }
    }

    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: RegistrationAction) {
        match action {
            RegistrationAction::SetName(name) => {
                self.form.name = name;
                self.recheck_field(Field::Name);
            }
            RegistrationAction::SetEmail(email) => {
                self.form.email = email;
                self.recheck_field(Field::Email);
            }
            RegistrationAction::SetPassword(password) => {
                self.form.password = password;
                self.recheck_field(Field::Password);
            }
            RegistrationAction::TogglePasswordVisibility => {
                self.form.show_password = !self.form.show_password;
            }
            RegistrationAction::SetReadiness(readiness) => {
                self.readiness = readiness;
            }
            RegistrationAction::SetUserCount(count) => {
                self.user_count = Some(count);
                self.likely_first_user = is_likely_first_user(count);
            }
            RegistrationAction::SetPhase(phase) => {
                self.phase = phase;
            }
            RegistrationAction::SetFieldErrors(errors) => {
                self.field_errors = errors
                    .into_iter()
                    .map(|error| (error.field, error.message))
                    .collect();
            }
            RegistrationAction::ClearFieldErrors => {
                self.field_errors.clear();
            }
            RegistrationAction::SetStatus(status) => {
                self.status = status;
            }
        }
    }

    // Only fields already flagged are re-validated while typing
    fn recheck_field(&mut self, field: Field) {
        if !self.field_errors.contains_key(&field) {
            return;
        }
        match validate_field(field, self.form.value_of(field), &self.rules) {
            Some(message) => {
                self.field_errors.insert(field, message);
            }
            None => {
                self.field_errors.remove(&field);
            }
        }
    }

    /// Helper methods for common state queries
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }

    /// Snapshot the form for a new attempt, or `None` while an attempt is
    /// already running or the session is not yet known to be anonymous.
    /// Callers must move the phase out of `Idle` before yielding, otherwise a
    /// second submit event sees the same idle state.
    pub fn submission_input(&self) -> Option<RegistrationInput> {
        if self.is_busy() || !self.readiness.accepts_submission() {
            return None;
        }
        Some(self.form.to_input())
    }
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self::new(FormRules::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_errors() -> RegistrationState {
        let mut state = RegistrationState::default();
        state.reduce_in_place(RegistrationAction::SetFieldErrors(vec![
            FieldError::new(Field::Name, "Name must be at least 2 characters"),
            FieldError::new(Field::Password, "Password must be at least 8 characters"),
        ]));
        state
    }

    #[test]
    fn test_input_trims_name_and_email_only() {
        let input = RegistrationInput::new("  Ada ", " ada@example.com ", " secret password ");
        assert_eq!(input.name, "Ada");
        assert_eq!(input.email, "ada@example.com");
        assert_eq!(input.password, " secret password ");
        assert!(!format!("{:?}", input).contains("secret"));
    }

    #[test]
    fn test_field_errors_clear_independently() {
        let mut state = state_with_errors();

        state.reduce_in_place(RegistrationAction::SetName("Jo".to_string()));
        assert_eq!(state.field_error(Field::Name), None);
        assert!(state.field_error(Field::Password).is_some());

        state.reduce_in_place(RegistrationAction::SetPassword("longenough".to_string()));
        assert!(state.field_errors.is_empty());
    }

    #[test]
    fn test_still_invalid_field_keeps_error() {
        let mut state = state_with_errors();
        state.reduce_in_place(RegistrationAction::SetPassword("short".to_string()));
        assert_eq!(
            state.field_error(Field::Password),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn test_unflagged_field_not_validated_while_typing() {
        let mut state = RegistrationState::default();
        state.reduce_in_place(RegistrationAction::SetEmail("not-an-email".to_string()));
        assert_eq!(state.field_error(Field::Email), None);
    }

    #[test]
    fn test_user_count_drives_first_user_hint() {
        let mut state = RegistrationState::default();
        assert!(!state.likely_first_user);

        state.reduce_in_place(RegistrationAction::SetUserCount(0));
        assert!(state.likely_first_user);
        assert_eq!(state.user_count, Some(0));

        state.reduce_in_place(RegistrationAction::SetUserCount(5));
        assert!(!state.likely_first_user);
    }

    #[test]
    fn test_phase_busy_and_readiness() {
        assert!(!WorkflowPhase::Idle.is_busy());
        assert!(WorkflowPhase::Submitting.is_busy());
        assert!(WorkflowPhase::Finalizing.is_busy());

        assert!(!SessionReadiness::Pending.accepts_submission());
        assert!(SessionReadiness::Anonymous.accepts_submission());
        assert!(!SessionReadiness::Authenticated.accepts_submission());
    }

    #[test]
    fn test_second_submit_after_claim_is_refused() {
        let mut state = RegistrationState::default();
        state.reduce_in_place(RegistrationAction::SetName("Ada".to_string()));
        assert_eq!(state.submission_input(), None);

        state.reduce_in_place(RegistrationAction::SetReadiness(SessionReadiness::Anonymous));
        let first = state.submission_input();
        assert_eq!(first.map(|input| input.name), Some("Ada".to_string()));

        // Claimed synchronously, before the workflow task runs
        state.reduce_in_place(RegistrationAction::SetPhase(WorkflowPhase::Validating));
        assert_eq!(state.submission_input(), None);

        state.reduce_in_place(RegistrationAction::SetPhase(WorkflowPhase::Idle));
        assert!(state.submission_input().is_some());
    }

    #[test]
    fn test_admin_outcome_messages() {
        assert_eq!(AdminOutcome::Promoted.status_text(), ADMIN_GRANTED_MESSAGE);
        assert_eq!(AdminOutcome::NotPromoted.status_text(), SIGN_UP_SUCCESS_MESSAGE);
        assert_eq!(AdminOutcome::Unconfirmed.status_text(), SIGN_UP_SUCCESS_MESSAGE);
        assert_eq!(AdminOutcome::Skipped.status_text(), SIGN_UP_SUCCESS_MESSAGE);
    }
}
