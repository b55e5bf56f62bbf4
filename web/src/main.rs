use dioxus::prelude::*;
use registration_ui::components::display::{use_toaster_provider, ToastOutlet};
use registration_ui::services::config::get_global_config;
use registration_ui::RegistrationService;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Toasts live above the router so the post-registration message survives navigation
    use_toaster_provider();
    let dismiss_after_ms = get_global_config().ui.status_dismiss_ms;

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastOutlet { dismiss_after_ms: dismiss_after_ms }
        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/sign-up")]
    SignUp {},
    #[route("/sign-in")]
    SignIn {},
    #[route("/dashboard")]
    Dashboard {},
}

#[component]
fn Home() -> Element {
    rsx! {
        div {
            RegistrationService {}
        }
    }
}

#[component]
fn SignUp() -> Element {
    rsx! {
        div {
            RegistrationService {}
        }
    }
}

#[component]
fn SignIn() -> Element {
    rsx! {
        div {
            class: "landing-page",
            h1 { "Sign In" }
            p { "Sign-in is served by the authentication service." }
            Link { to: Route::SignUp {}, "Need an account? Sign up" }
        }
    }
}

#[component]
fn Dashboard() -> Element {
    rsx! {
        div {
            class: "landing-page",
            h1 { "Dashboard" }
            p { "You are signed in." }
        }
    }
}
