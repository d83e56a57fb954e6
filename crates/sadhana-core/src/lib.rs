//! Sadhana Core Library
//!
//! First-visit welcome gate for an authenticated practitioner.
//!
//! ## Overview
//!
//! The welcome popup is shown at most once per device profile, and at most
//! once per fresh session. Two flags decide it:
//!
//! - **Session marker**: lives in a session-scoped store, written on the first
//!   evaluation of a session.
//! - **Shown flag**: lives in a durable store, written when the popup is
//!   actually revealed.
//!
//! Both stores are injected as [`KeyValueStore`] capabilities, so the policy
//! runs identically against redb, an in-memory map, or a test double.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use sadhana_core::{AuthState, CurrentUser, DurableStore, MemoryStore, WelcomeDecision, WelcomeGate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let durable = Arc::new(DurableStore::open("~/.sadhana/welcome.redb")?);
//!     let session = Arc::new(MemoryStore::new());
//!     let gate = WelcomeGate::new(durable, session);
//!
//!     let auth = AuthState::signed_in(CurrentUser::new("Asha"));
//!     if let WelcomeDecision::Reveal(pending) = gate.evaluate(&auth) {
//!         pending.wait().await;
//!     }
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod popup;
pub mod quotes;
pub mod session;
pub mod storage;
pub mod welcome;

// Re-exports
pub use auth::{AuthState, CurrentUser, DEFAULT_AVATAR};
pub use config::WelcomeConfig;
pub use error::{WelcomeError, WelcomeResult};
pub use popup::PopupState;
pub use quotes::{CyclingQuotes, DefaultQuotes, Quote, QuoteSource};
pub use session::{SequentialSessionIds, SessionIdGenerator, TimestampSessionIds, UlidSessionIds};
pub use storage::{DurableStore, KeyValueStore, MemoryStore};
pub use welcome::{PendingReveal, RevealCanceller, RevealOutcome, WelcomeDecision, WelcomeGate};
