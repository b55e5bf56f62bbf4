use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::features::registration::{StatusKind, StatusMessage};

#[derive(Props, PartialEq, Clone)]
pub struct StatusBannerProps {
    pub status: StatusMessage,
    pub on_dismiss: Option<EventHandler<()>>,
}

#[component]
pub fn StatusBanner(props: StatusBannerProps) -> Element {
    let (class, style, icon) = match props.status.kind {
        StatusKind::Success => (
            "status-banner success",
            "color: #10b981; background-color: #d1fae5; border: 1px solid #10b981; padding: 8px; border-radius: 4px;",
            "✓",
        ),
        StatusKind::Error => (
            "status-banner error",
            "color: #ef4444; background-color: #fef2f2; border: 1px solid #ef4444; padding: 8px; border-radius: 4px;",
            "✗",
        ),
    };

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            role: "status",
            span { class: "result-message", "{icon} {props.status.text}" }
            if let Some(on_dismiss) = props.on_dismiss {
                button {
                    class: "status-dismiss",
                    r#type: "button",
                    onclick: move |_| on_dismiss.call(()),
                    "×"
                }
            }
        }
    }
}

/// App-wide toast slot that outlives page navigation
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    current: Signal<Option<StatusMessage>>,
}

impl Toaster {
    pub fn show(mut self, status: StatusMessage) {
        self.current.set(Some(status));
    }

    pub fn dismiss(mut self) {
        self.current.set(None);
    }

    /// Dismiss only if `status` is still the one on screen
    pub fn dismiss_if_current(mut self, status: &StatusMessage) {
        let is_current = self.current.peek().as_ref() == Some(status);
        if is_current {
            self.current.set(None);
        }
    }

    pub fn current(&self) -> Option<StatusMessage> {
        (self.current)()
    }
}

/// Install the toaster for every component below the caller
pub fn use_toaster_provider() -> Toaster {
    use_context_provider(|| Toaster {
        current: Signal::new(None),
    })
}

#[derive(Props, PartialEq, Clone)]
pub struct ToastOutletProps {
    pub dismiss_after_ms: u32,
}

/// Renders the toaster's message; success messages dismiss themselves
#[component]
pub fn ToastOutlet(props: ToastOutletProps) -> Element {
    let toaster = use_context::<Toaster>();
    let dismiss_after_ms = props.dismiss_after_ms;

    use_effect(move || {
        if let Some(status) = toaster.current() {
            if status.kind == StatusKind::Success {
                spawn(async move {
                    TimeoutFuture::new(dismiss_after_ms).await;
                    toaster.dismiss_if_current(&status);
                });
            }
        }
    });

    rsx! {
        div {
            class: "toast-outlet",
            if let Some(status) = toaster.current() {
                StatusBanner {
                    status: status,
                    on_dismiss: move |_| toaster.dismiss()
                }
            }
        }
    }
}
