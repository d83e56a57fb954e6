//! Welcome Popup Component
//!
//! Greets an authenticated user once on their first visit. The decision is
//! made by [`sadhana_core::WelcomeGate`]; this component only owns the
//! pending reveal and the open/close state.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use sadhana_core::{PopupState, RevealCanceller, RevealOutcome, WelcomeDecision};

use crate::components::{AvatarGlyph, Button, ButtonVariant, CloseButton, QuoteCard};
use crate::context::{use_auth, use_welcome_services};

/// Line shown beneath the quote
pub const BLESSING: &str = "May your spiritual journey be filled with divine blessings today.";

/// Label of the dismiss button
pub const BEGIN_PRACTICE: &str = "Begin Practice";

/// Welcome Popup
///
/// Renders nothing when no authenticated user is present or while closed.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     HomePage {}
///     WelcomePopup {}
/// }
/// ```
#[component]
pub fn WelcomePopup() -> Element {
    let services = use_welcome_services();
    let auth = use_auth();

    let initial_quotes = services.quotes.clone();
    let mut popup = use_signal(move || PopupState::new(initial_quotes.as_ref()));

    // Canceller of the reveal scheduled by the latest evaluation
    let pending_slot: Rc<RefCell<Option<RevealCanceller>>> = use_hook(|| Rc::new(RefCell::new(None)));

    // Re-evaluate whenever the auth snapshot changes
    let effect_slot = pending_slot.clone();
    use_effect(move || {
        let snapshot = auth();

        if let Some(previous) = effect_slot.borrow_mut().take() {
            previous.cancel();
        }

        if let WelcomeDecision::Reveal(pending) = services.gate.evaluate(&snapshot) {
            *effect_slot.borrow_mut() = Some(pending.canceller());
            let quotes = services.quotes.clone();
            spawn(async move {
                if pending.wait().await == RevealOutcome::Revealed {
                    popup.write().set_open(true, quotes.as_ref());
                }
            });
        }
    });

    // Unmounting must not leave a reveal behind
    let drop_slot = pending_slot.clone();
    use_drop(move || {
        if let Some(pending) = drop_slot.borrow_mut().take() {
            tracing::debug!("Welcome popup unmounted, cancelling pending reveal");
            pending.cancel();
        }
    });

    let user = match auth.read().active_user() {
        Some(user) => user.clone(),
        None => return rsx! {},
    };

    if !popup.read().is_open() {
        return rsx! {};
    }

    let quote = popup.read().quote().clone();
    let greeting = user.greeting();
    let glyph = user.avatar_glyph().to_string();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| popup.write().close(),

            div {
                class: "welcome-modal",
                "role": "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),

                CloseButton { onclick: move |_| popup.write().close() }

                header { class: "welcome-header",
                    AvatarGlyph { glyph: glyph }
                    h2 { class: "modal-title welcome-title", "{greeting}" }
                }

                div { class: "welcome-body",
                    QuoteCard { quote: quote }
                    p { class: "welcome-blessing", "{BLESSING}" }
                }

                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Sacred,
                        onclick: move |_| popup.write().close(),
                        "{BEGIN_PRACTICE}"
                    }
                }
            }
        }
    }
}
