//! In-memory stand-ins for the authentication service, shared by the
//! registration tests

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::types::*;
use super::workflow::{LandingNavigator, MountGuard};
use crate::services::client::{
    AccountRegistrar, AdminAssignmentService, ClientResult, SessionProbe, SignUpResponse,
    UserCountOracle,
};

pub(crate) struct MockRegistrar {
    response: ClientResult<SignUpResponse>,
    requests: RefCell<Vec<(String, String, String)>>,
    tear_down: Option<MountGuard>,
}

impl MockRegistrar {
    pub(crate) fn returning(response: ClientResult<SignUpResponse>) -> Self {
        Self {
            response,
            requests: RefCell::new(Vec::new()),
            tear_down: None,
        }
    }

    /// Simulate the form unmounting while the call is in flight
    pub(crate) fn tearing_down(mut self, guard: MountGuard) -> Self {
        self.tear_down = Some(guard);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub(crate) fn requests(&self) -> Vec<(String, String, String)> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl AccountRegistrar for MockRegistrar {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> ClientResult<SignUpResponse> {
        self.requests
            .borrow_mut()
            .push((email.to_string(), password.to_string(), name.to_string()));
        if let Some(guard) = &self.tear_down {
            guard.tear_down();
        }
        self.response.clone()
    }
}

pub(crate) struct MockAssigner {
    response: ClientResult<AdminAssignmentResult>,
    identities: RefCell<Vec<String>>,
    tear_down: Option<MountGuard>,
}

impl MockAssigner {
    pub(crate) fn returning(response: ClientResult<AdminAssignmentResult>) -> Self {
        Self {
            response,
            identities: RefCell::new(Vec::new()),
            tear_down: None,
        }
    }

    pub(crate) fn tearing_down(mut self, guard: MountGuard) -> Self {
        self.tear_down = Some(guard);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.identities.borrow().len()
    }

    pub(crate) fn identities(&self) -> Vec<String> {
        self.identities.borrow().clone()
    }
}

#[async_trait(?Send)]
impl AdminAssignmentService for MockAssigner {
    async fn assign(&self, identity: &AccountIdentity) -> ClientResult<AdminAssignmentResult> {
        self.identities.borrow_mut().push(identity.as_str().to_string());
        if let Some(guard) = &self.tear_down {
            guard.tear_down();
        }
        self.response.clone()
    }
}

pub(crate) struct MockOracle {
    response: ClientResult<UserCount>,
    calls: Cell<usize>,
    tear_down: Option<MountGuard>,
}

impl MockOracle {
    pub(crate) fn returning(response: ClientResult<UserCount>) -> Self {
        Self {
            response,
            calls: Cell::new(0),
            tear_down: None,
        }
    }

    pub(crate) fn tearing_down(mut self, guard: MountGuard) -> Self {
        self.tear_down = Some(guard);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl UserCountOracle for MockOracle {
    async fn user_count(&self) -> ClientResult<UserCount> {
        self.calls.set(self.calls.get() + 1);
        if let Some(guard) = &self.tear_down {
            guard.tear_down();
        }
        self.response.clone()
    }
}

pub(crate) struct MockProbe {
    response: ClientResult<SessionReadiness>,
}

impl MockProbe {
    pub(crate) fn returning(response: ClientResult<SessionReadiness>) -> Self {
        Self { response }
    }
}

#[async_trait(?Send)]
impl SessionProbe for MockProbe {
    async fn session_readiness(&self) -> ClientResult<SessionReadiness> {
        self.response.clone()
    }
}

#[derive(Default)]
pub(crate) struct RecordingNavigator {
    routes: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub(crate) fn routes(&self) -> Vec<String> {
        self.routes.borrow().clone()
    }
}

impl LandingNavigator for RecordingNavigator {
    fn navigate_to(&self, route: &str) {
        self.routes.borrow_mut().push(route.to_string());
    }
}

/// Records dispatched actions and folds them into a live state
#[derive(Clone)]
pub(crate) struct ActionLog {
    actions: Rc<RefCell<Vec<RegistrationAction>>>,
    state: Rc<RefCell<RegistrationState>>,
}

impl ActionLog {
    pub(crate) fn new() -> Self {
        Self {
            actions: Rc::new(RefCell::new(Vec::new())),
            state: Rc::new(RefCell::new(RegistrationState::default())),
        }
    }

    pub(crate) fn apply(&self, action: RegistrationAction) {
        self.actions.borrow_mut().push(action.clone());
        self.state.borrow_mut().reduce_in_place(action);
    }

    pub(crate) fn sink(&self) -> impl Fn(RegistrationAction) + 'static {
        let log = self.clone();
        move |action| log.apply(action)
    }

    pub(crate) fn actions(&self) -> Vec<RegistrationAction> {
        self.actions.borrow().clone()
    }

    pub(crate) fn state(&self) -> RegistrationState {
        self.state.borrow().clone()
    }

    pub(crate) fn phases(&self) -> Vec<WorkflowPhase> {
        self.actions
            .borrow()
            .iter()
            .filter_map(|action| match action {
                RegistrationAction::SetPhase(phase) => Some(*phase),
                _ => None,
            })
            .collect()
    }

    /// Number of toasts actually shown (clears are not counted)
    pub(crate) fn statuses_shown(&self) -> usize {
        self.actions
            .borrow()
            .iter()
            .filter(|action| matches!(action, RegistrationAction::SetStatus(Some(_))))
            .count()
    }
}
