//! Launch state shared with the component tree.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! let launch = get_launch();
//!
//! // In child components
//! let mut auth = use_auth();
//! auth.set(AuthState::signed_out());
//! ```

use sadhana_core::{AuthState, CurrentUser, WelcomeGate};

pub use sadhana_ui::use_auth;

/// Everything decided before the window opens.
pub struct Launch {
    /// Gate wired to the durable and session stores
    pub gate: WelcomeGate,
    /// Initial authentication snapshot
    pub auth: AuthState,
    /// User restored by the home page's sign-in button
    pub sign_in_as: Option<CurrentUser>,
}

/// Get the launch state set from command line args.
pub fn get_launch() -> &'static Launch {
    crate::get_launch()
}
