use dioxus::prelude::*;

use crate::console_warn;
use crate::features::registration::LandingNavigator;

/// `LandingNavigator` backed by the Dioxus router
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    navigator: Navigator,
}

impl RouterNavigator {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

impl LandingNavigator for RouterNavigator {
    fn navigate_to(&self, route: &str) {
        if let Some(failure) = self
            .navigator
            .push(NavigationTarget::<String>::Internal(route.to_string()))
        {
            console_warn!("[Navigation] Could not navigate to {}: {:?}", route, failure);
        }
    }
}
