//! Contexts consumed by the welcome popup.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Signal::new(auth_state));
//! use_context_provider(|| WelcomeServices::new(gate, Arc::new(DefaultQuotes::new())));
//!
//! // Anywhere below
//! WelcomePopup {}
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use sadhana_core::{AuthState, QuoteSource, WelcomeGate};

/// Welcome gate plus quote source, shared through context.
#[derive(Clone)]
pub struct WelcomeServices {
    pub gate: WelcomeGate,
    pub quotes: Arc<dyn QuoteSource>,
}

impl WelcomeServices {
    pub fn new(gate: WelcomeGate, quotes: Arc<dyn QuoteSource>) -> Self {
        Self { gate, quotes }
    }
}

/// Hook to access the welcome services from context.
pub fn use_welcome_services() -> WelcomeServices {
    use_context::<WelcomeServices>()
}

/// Hook to access the authentication snapshot.
///
/// Effects that read it re-run whenever the auth collaborator updates it.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}
