//! Registration workflow
//!
//! Drives one submission attempt through
//! `Idle → Validating → Submitting → (AssigningRole | Finalizing)`.
//!
//! The advisory user count never reaches this module: whenever the registrar
//! hands back an identity the admin-assignment service is called, and only its
//! answer decides which success message is shown.

use std::cell::Cell;
use std::rc::Rc;
use tracing::{error, info, warn};

use super::form_validation::validate_registration;
use super::types::*;
use crate::services::client::{AccountRegistrar, AdminAssignmentService};
use crate::services::config::{FormRules, UiConfig};
use crate::services::errors::{ErrorSeverity, RegistrationError};

/// Callback applying actions to the form state
pub type Dispatch = Rc<dyn Fn(RegistrationAction)>;

/// Moves the user to the authenticated area once registration finishes
pub trait LandingNavigator {
    fn navigate_to(&self, route: &str);
}

/// Tracks whether the form that started a call is still mounted.
/// Clones share the same flag.
#[derive(Clone, Debug)]
pub struct MountGuard {
    live: Rc<Cell<bool>>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            live: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    pub fn tear_down(&self) {
        self.live.set(false);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RegistrationWorkflow {
    readiness: SessionReadiness,
    registrar: Rc<dyn AccountRegistrar>,
    assigner: Rc<dyn AdminAssignmentService>,
    navigator: Rc<dyn LandingNavigator>,
    dispatch: Dispatch,
    rules: FormRules,
    landing_route: String,
    guard: MountGuard,
}

impl RegistrationWorkflow {
    pub fn new(
        readiness: SessionReadiness,
        registrar: Rc<dyn AccountRegistrar>,
        assigner: Rc<dyn AdminAssignmentService>,
        navigator: Rc<dyn LandingNavigator>,
        dispatch: Dispatch,
    ) -> Self {
        Self {
            readiness,
            registrar,
            assigner,
            navigator,
            dispatch,
            rules: FormRules::default(),
            landing_route: UiConfig::default().landing_route,
            guard: MountGuard::new(),
        }
    }

    pub fn with_rules(mut self, rules: FormRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_landing_route(mut self, route: impl Into<String>) -> Self {
        self.landing_route = route.into();
        self
    }

    pub fn with_guard(mut self, guard: MountGuard) -> Self {
        self.guard = guard;
        self
    }

    /// Dispatch unless the form has been torn down
    fn apply(&self, action: RegistrationAction) {
        if self.guard.is_live() {
            (self.dispatch)(action);
        }
    }

    fn abandon(&self, step: &str) -> SubmissionOutcome {
        info!("Form torn down during {}; dropping the result", step);
        SubmissionOutcome::Abandoned
    }

    /// Run one submission attempt to completion
    pub async fn submit(&self, input: RegistrationInput) -> SubmissionOutcome {
        if !self.readiness.accepts_submission() {
            warn!(
                "Ignoring sign up while session readiness is {:?}",
                self.readiness
            );
            return SubmissionOutcome::NotReady;
        }

        self.apply(RegistrationAction::SetStatus(None));
        self.apply(RegistrationAction::SetPhase(WorkflowPhase::Validating));

        let errors = validate_registration(&input, &self.rules);
        if !errors.is_empty() {
            return self.report_failure(RegistrationError::Validation { errors });
        }

        self.apply(RegistrationAction::ClearFieldErrors);
        self.apply(RegistrationAction::SetPhase(WorkflowPhase::Submitting));

        let result = self
            .registrar
            .sign_up(&input.email, &input.password, &input.name)
            .await;
        if !self.guard.is_live() {
            return self.abandon("sign up");
        }

        let response = match result {
            Ok(response) => response,
            Err(e) => return self.report_failure(e.into()),
        };

        let admin = match response.account_identity() {
            Some(identity) => {
                self.apply(RegistrationAction::SetPhase(WorkflowPhase::AssigningRole));
                match self.assign_role(&identity).await {
                    Some(admin) => admin,
                    None => return self.abandon("admin assignment"),
                }
            }
            None => {
                warn!("Sign up succeeded without a usable account id; skipping admin assignment");
                AdminOutcome::Skipped
            }
        };

        self.finalize(admin)
    }

    /// Returns `None` when the form went away while the call was in flight
    async fn assign_role(&self, identity: &AccountIdentity) -> Option<AdminOutcome> {
        let result = self.assigner.assign(identity).await;
        if !self.guard.is_live() {
            return None;
        }

        Some(match result {
            Ok(AdminAssignmentResult { is_admin: true }) => {
                info!("Account {} promoted to admin", identity);
                AdminOutcome::Promoted
            }
            Ok(AdminAssignmentResult { is_admin: false }) => {
                info!("Account {} registered without admin role", identity);
                AdminOutcome::NotPromoted
            }
            Err(e) => {
                // The account already exists; a failed promotion must not undo that
                log_failure(&RegistrationError::assignment(e));
                AdminOutcome::Unconfirmed
            }
        })
    }

    /// Surface a failed attempt and hand the form back to the user
    fn report_failure(&self, error: RegistrationError) -> SubmissionOutcome {
        log_failure(&error);

        if let RegistrationError::Validation { errors } = &error {
            self.apply(RegistrationAction::SetFieldErrors(errors.clone()));
        }
        if let Some(status) = error.status_message() {
            self.apply(RegistrationAction::SetStatus(Some(status)));
        }
        self.apply(RegistrationAction::SetPhase(WorkflowPhase::Idle));

        match error {
            RegistrationError::Registration { message } => SubmissionOutcome::Rejected { message },
            other => SubmissionOutcome::Failed(other),
        }
    }

    fn finalize(&self, admin: AdminOutcome) -> SubmissionOutcome {
        self.apply(RegistrationAction::SetStatus(Some(StatusMessage::success(
            admin.status_text(),
        ))));
        self.apply(RegistrationAction::SetPhase(WorkflowPhase::Finalizing));
        self.navigator.navigate_to(&self.landing_route);
        SubmissionOutcome::Completed { admin }
    }
}

fn log_failure(error: &RegistrationError) {
    match error.severity() {
        ErrorSeverity::Low => info!("Sign up attempt stopped: {}", error),
        ErrorSeverity::Medium => warn!("Sign up attempt: {}", error),
        ErrorSeverity::High => error!("Sign up attempt failed: {}", error),
    }
}
