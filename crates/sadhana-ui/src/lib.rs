//! Sadhana UI Components
//!
//! Dioxus components for the first-visit welcome popup.
//!
//! ## Design Philosophy
//!
//! Warm devotional palette over a dark backdrop:
//! - **Saffron (#f59e0b)**: Titles, primary actions
//! - **Marigold (#f97316)**: Gradients, hover accents
//! - **Sandstone (#fde68a)**: Quote text
//!
//! ## Wiring
//!
//! The popup reads two contexts: a `Signal<AuthState>` from the
//! authentication collaborator and [`WelcomeServices`] holding the gate and
//! the quote source.

pub mod components;
pub mod context;

pub use components::*;
pub use context::*;
