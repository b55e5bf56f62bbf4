use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct FirstUserHintProps {
    pub likely_first_user: bool,
}

/// Informational only; the admin decision is made by the server
#[component]
pub fn FirstUserHint(props: FirstUserHintProps) -> Element {
    if !props.likely_first_user {
        return rsx! { div {} };
    }

    rsx! {
        div {
            class: "first-user-hint",
            style: "color: #1d4ed8; background-color: #eff6ff; border: 1px solid #93c5fd; padding: 8px; border-radius: 4px; margin-bottom: 12px;",
            "👑 No accounts exist yet. The first account created is granted admin privileges."
        }
    }
}
