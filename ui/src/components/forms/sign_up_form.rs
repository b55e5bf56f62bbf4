//! Account registration form

use dioxus::prelude::*;
use std::rc::Rc;

use crate::app::navigation::RouterNavigator;
use crate::components::{
    display::{FirstUserHint, StatusBanner, Toaster},
    input::{FieldErrorFeedback, InputType, ValidatedInput},
};
use crate::features::registration::*;
use crate::services::client::AuthServiceClient;
use crate::services::config::RegistrationConfig;
use crate::{console_debug, console_info};

#[derive(Props, PartialEq, Clone)]
pub struct SignUpFormProps {
    pub state: Signal<RegistrationState>,
    pub dispatch: EventHandler<RegistrationAction>,
    pub config: RegistrationConfig,
}

#[component]
pub fn SignUpForm(props: SignUpFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let config = props.config.clone();
    let navigator = navigator();
    let toaster = try_use_context::<Toaster>();

    // Results arriving after this form unmounts must not touch its state
    let guard = use_hook(MountGuard::new);
    use_drop({
        let guard = guard.clone();
        move || guard.tear_down()
    });

    let client = use_hook({
        let auth = config.auth.clone();
        move || Rc::new(AuthServiceClient::new(auth))
    });

    // Advisory user count, fetched once per mount
    use_hook({
        let client = client.clone();
        let guard = guard.clone();
        move || {
            spawn(async move {
                let count =
                    load_advisory_count(client.as_ref(), &guard, move |action| dispatch.call(action))
                        .await;
                console_debug!("[SignUp] Advisory user count: {:?}", count);
            });
        }
    });

    let on_submit = {
        let client = client.clone();
        let guard = guard.clone();
        let config = config.clone();
        move |event: FormEvent| {
            event.prevent_default();

            let current = state();
            let Some(input) = current.submission_input() else {
                console_debug!("[SignUp] Ignoring submit while busy or not ready");
                return;
            };
            // Claim the form now; the spawned task is not polled before the next event
            dispatch.call(RegistrationAction::SetPhase(WorkflowPhase::Validating));

            let workflow = RegistrationWorkflow::new(
                current.readiness,
                client.clone(),
                client.clone(),
                Rc::new(RouterNavigator::new(navigator)),
                Rc::new(move |action| dispatch.call(action)),
            )
            .with_rules(config.rules)
            .with_landing_route(config.ui.landing_route.clone())
            .with_guard(guard.clone());

            spawn(async move {
                let outcome = workflow.submit(input).await;
                console_info!("[SignUp] Submission finished: {:?}", outcome);
            });
        }
    };

    let current = state();
    let busy = current.is_busy();
    let name_error = current.field_error(Field::Name).map(str::to_string);
    let email_error = current.field_error(Field::Email).map(str::to_string);
    let password_error = current.field_error(Field::Password).map(str::to_string);
    let password_type = if current.form.show_password {
        InputType::Text
    } else {
        InputType::Password
    };

    rsx! {
        div {
            class: "registration-form",

            h2 {
                class: "form-title",
                "Create an account"
            }

            FirstUserHint { likely_first_user: current.likely_first_user }

            form {
                onsubmit: on_submit,

                // Name Input Section
                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        r#for: "signup-name",
                        "Name:"
                    }
                    ValidatedInput {
                        id: "signup-name".to_string(),
                        value: current.form.name.clone(),
                        placeholder: "Your name".to_string(),
                        input_type: InputType::Text,
                        autocomplete: "name".to_string(),
                        has_error: name_error.is_some(),
                        disabled: busy,
                        on_change: move |data: String| {
                            dispatch.call(RegistrationAction::SetName(data));
                        }
                    }
                    FieldErrorFeedback { message: name_error }
                }

                // Email Input Section
                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        r#for: "signup-email",
                        "Email:"
                    }
                    ValidatedInput {
                        id: "signup-email".to_string(),
                        value: current.form.email.clone(),
                        placeholder: "you@example.com".to_string(),
                        input_type: InputType::Email,
                        autocomplete: "email".to_string(),
                        has_error: email_error.is_some(),
                        disabled: busy,
                        on_change: move |data: String| {
                            dispatch.call(RegistrationAction::SetEmail(data));
                        }
                    }
                    FieldErrorFeedback { message: email_error }
                }

                // Password Input Section
                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        r#for: "signup-password",
                        "Password:"
                    }
                    div {
                        class: "password-row",
                        ValidatedInput {
                            id: "signup-password".to_string(),
                            value: current.form.password.clone(),
                            placeholder: format!("At least {} characters", current.rules.min_password_chars),
                            input_type: password_type,
                            autocomplete: "new-password".to_string(),
                            has_error: password_error.is_some(),
                            disabled: busy,
                            on_change: move |data: String| {
                                dispatch.call(RegistrationAction::SetPassword(data));
                            }
                        }
                        button {
                            class: "password-toggle",
                            r#type: "button",
                            onclick: move |_| dispatch.call(RegistrationAction::TogglePasswordVisibility),
                            if current.form.show_password { "Hide" } else { "Show" }
                        }
                    }
                    FieldErrorFeedback { message: password_error }
                }

                // Submit Button
                div {
                    class: "button-section",
                    button {
                        class: "signup-button",
                        r#type: "submit",
                        disabled: busy || !current.readiness.accepts_submission(),
                        if busy {
                            "Creating account..."
                        } else {
                            "Sign up"
                        }
                    }
                }
            }

            // Inline result when no app-wide toaster is installed
            if toaster.is_none() {
                if let Some(status) = current.status.clone() {
                    StatusBanner { status: status }
                }
            }

            div {
                class: "sign-in-link",
                "Already have an account? "
                a { href: "{config.ui.sign_in_route}", "Sign in" }
            }
        }
    }
}
