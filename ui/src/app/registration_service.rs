use dioxus::prelude::*;

use crate::app::navigation::RouterNavigator;
use crate::components::display::{LoadingIndicator, Toaster};
use crate::components::forms::SignUpForm;
use crate::console_info;
use crate::features::registration::{
    resolve_readiness, LandingNavigator, RegistrationAction, RegistrationState, SessionReadiness,
};
use crate::services::client::AuthServiceClient;
use crate::services::config::get_global_config;

const REGISTRATION_SERVICE_CSS: Asset = asset!("/assets/styling/registration_service.css");

#[component]
pub fn RegistrationService() -> Element {
    let config = use_hook(get_global_config);
    let mut state = use_signal(|| RegistrationState::new(config.rules));
    let toaster = try_use_context::<Toaster>();
    let navigator = navigator();

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: RegistrationAction| {
        if let (Some(toaster), RegistrationAction::SetStatus(status)) = (toaster, &action) {
            match status {
                Some(status) => toaster.show(status.clone()),
                None => toaster.dismiss(),
            }
        }
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    // Resolve the session once; the answer is handed to the form explicitly
    use_hook({
        let auth = config.auth.clone();
        move || {
            spawn(async move {
                let probe = AuthServiceClient::new(auth);
                let readiness = resolve_readiness(&probe).await;
                dispatch.call(RegistrationAction::SetReadiness(readiness));
            });
        }
    });

    // Visitors who are already signed in go straight to the landing route
    let landing_route = config.ui.landing_route.clone();
    use_effect(move || {
        if state().readiness == SessionReadiness::Authenticated {
            console_info!("[Registration Service] Session already active - redirecting");
            RouterNavigator::new(navigator).navigate_to(&landing_route);
        }
    });

    let readiness = state().readiness;

    rsx! {
        document::Link { rel: "stylesheet", href: REGISTRATION_SERVICE_CSS }

        div {
            class: "registration-service-container",

            div {
                class: "title-container",
                h1 {
                    class: "registration-title",
                    "Sign Up"
                }
            }

            match readiness {
                SessionReadiness::Pending => rsx! {
                    LoadingIndicator { message: "Checking your session...".to_string() }
                },
                SessionReadiness::Authenticated => rsx! {
                    LoadingIndicator { message: "Already signed in, redirecting...".to_string() }
                },
                SessionReadiness::Anonymous => rsx! {
                    SignUpForm {
                        state: state,
                        dispatch: dispatch,
                        config: config.clone()
                    }
                },
            }
        }
    }
}
