use std::sync::Arc;

use dioxus::prelude::*;
use sadhana_core::{AuthState, DefaultQuotes};
use sadhana_ui::{WelcomePopup, WelcomeServices};

use crate::context::get_launch;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the auth snapshot and the welcome services.
#[component]
pub fn App() -> Element {
    let launch = get_launch();

    let auth: Signal<AuthState> = use_signal(|| launch.auth.clone());
    use_context_provider(|| auth);
    use_context_provider(|| {
        WelcomeServices::new(launch.gate.clone(), Arc::new(DefaultQuotes::new()))
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
        WelcomePopup {}
    }
}
