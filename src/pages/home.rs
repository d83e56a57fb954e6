//! Home page - stands in for the rest of the application behind the popup.
//!
//! The sign in/out toggle drives the auth snapshot, which re-runs the
//! welcome gate exactly as an external auth provider would.

use dioxus::prelude::*;
use sadhana_core::AuthState;
use sadhana_ui::{Button, ButtonVariant};

use crate::context::{get_launch, use_auth};

#[component]
pub fn Home() -> Element {
    let mut auth = use_auth();
    let signed_in_user = auth.read().active_user().cloned();

    let toggle = move |_| {
        if auth.read().active_user().is_some() {
            tracing::info!("Signing out");
            auth.set(AuthState::signed_out());
        } else if let Some(user) = get_launch().sign_in_as.clone() {
            tracing::info!("Signing in as '{}'", user.name);
            auth.set(AuthState::signed_in(user));
        }
    };

    rsx! {
        main { class: "home",
            header { class: "home-header",
                h1 { class: "page-title", "Sadhana" }
                p { class: "tagline", "a quiet space for daily practice" }
            }

            section { class: "home-status",
                if let Some(user) = signed_in_user {
                    p { class: "body-text",
                        "Signed in as "
                        span { class: "sacred-term", "{user.name}" }
                    }
                } else {
                    p { class: "body-text", "You are signed out." }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    onclick: toggle,
                    if auth.read().active_user().is_some() { "Sign out" } else { "Sign in" }
                }
            }
        }
    }
}
