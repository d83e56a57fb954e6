//! First-visit welcome gate.
//!
//! Decides, once per evaluation, whether the welcome popup should be
//! revealed:
//!
//! 1. No authenticated user: nothing happens.
//! 2. Session marker present: in-session navigation, nothing happens.
//! 3. Otherwise a new session marker is written immediately.
//! 4. Shown flag present: already welcomed on this profile, stop.
//! 5. Otherwise a [`PendingReveal`] is handed back. When its delay elapses
//!    the shown flag is written and the caller opens the popup.
//!
//! Storage failures never escape: a failed read counts as "absent" and a
//! failed write is logged and skipped. With broken storage the popup thus
//! leans towards showing rather than staying hidden.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::auth::AuthState;
use crate::config::WelcomeConfig;
use crate::session::{SessionIdGenerator, TimestampSessionIds};
use crate::storage::KeyValueStore;

/// Value written under the shown flag key
pub const SHOWN_FLAG_VALUE: &str = "true";

/// Result of one gate evaluation
#[must_use]
#[derive(Debug)]
pub enum WelcomeDecision {
    /// Not authenticated, or no user. No storage touched.
    SignedOut,
    /// Session marker already present.
    ExistingSession,
    /// Fresh session, but the popup was shown in an earlier one.
    AlreadyShown,
    /// Fresh session, never shown. Await the reveal.
    Reveal(PendingReveal),
}

impl WelcomeDecision {
    pub fn is_reveal(&self) -> bool {
        matches!(self, WelcomeDecision::Reveal(_))
    }

    pub fn into_reveal(self) -> Option<PendingReveal> {
        match self {
            WelcomeDecision::Reveal(pending) => Some(pending),
            _ => None,
        }
    }
}

/// How a pending reveal ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Delay elapsed, shown flag written. Open the popup.
    Revealed,
    /// Cancelled before the delay elapsed. Nothing written.
    Cancelled,
}

/// A scheduled reveal owned by whoever mounted the popup.
///
/// Nothing happens until [`PendingReveal::wait`] is awaited. Dropping the
/// future, or cancelling through a [`RevealCanceller`], before the delay
/// elapses guarantees the shown flag is never written.
pub struct PendingReveal {
    delay: Duration,
    token: CancellationToken,
    durable: Arc<dyn KeyValueStore>,
    shown_flag_key: String,
}

impl fmt::Debug for PendingReveal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingReveal")
            .field("delay", &self.delay)
            .field("cancelled", &self.token.is_cancelled())
            .field("shown_flag_key", &self.shown_flag_key)
            .finish()
    }
}

impl PendingReveal {
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Handle that cancels this reveal from elsewhere (e.g. on unmount)
    pub fn canceller(&self) -> RevealCanceller {
        RevealCanceller {
            token: self.token.clone(),
        }
    }

    /// Wait out the delay, then write the shown flag.
    pub async fn wait(self) -> RevealOutcome {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                tracing::debug!("Welcome reveal cancelled before delay elapsed");
                RevealOutcome::Cancelled
            }
            _ = tokio::time::sleep(self.delay) => {
                if let Err(e) = self.durable.set(&self.shown_flag_key, SHOWN_FLAG_VALUE) {
                    tracing::warn!(key = %self.shown_flag_key, "Failed to persist shown flag: {}", e);
                }
                tracing::info!("Revealing welcome popup");
                RevealOutcome::Revealed
            }
        }
    }
}

/// Cancels a [`PendingReveal`]. Cheap to clone.
#[derive(Debug, Clone)]
pub struct RevealCanceller {
    token: CancellationToken,
}

impl RevealCanceller {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// The decision policy, with its stores injected.
#[derive(Clone)]
pub struct WelcomeGate {
    durable: Arc<dyn KeyValueStore>,
    session: Arc<dyn KeyValueStore>,
    session_ids: Arc<dyn SessionIdGenerator>,
    config: WelcomeConfig,
}

impl WelcomeGate {
    /// Gate with default config and timestamp session ids.
    pub fn new(durable: Arc<dyn KeyValueStore>, session: Arc<dyn KeyValueStore>) -> Self {
        Self {
            durable,
            session,
            session_ids: Arc::new(TimestampSessionIds),
            config: WelcomeConfig::default(),
        }
    }

    pub fn with_config(mut self, config: WelcomeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_session_ids(mut self, session_ids: Arc<dyn SessionIdGenerator>) -> Self {
        self.session_ids = session_ids;
        self
    }

    pub fn config(&self) -> &WelcomeConfig {
        &self.config
    }

    /// Run the decision policy for the given auth snapshot.
    ///
    /// Call again whenever authentication or the user changes.
    pub fn evaluate(&self, auth: &AuthState) -> WelcomeDecision {
        let Some(user) = auth.active_user() else {
            return WelcomeDecision::SignedOut;
        };

        if self.read(self.session.as_ref(), &self.config.session_key).is_some() {
            tracing::debug!(user = %user.name, "Session already initialized, skipping welcome");
            return WelcomeDecision::ExistingSession;
        }

        let marker = self.session_ids.next_id();
        if let Err(e) = self.session.set(&self.config.session_key, &marker) {
            tracing::warn!(key = %self.config.session_key, "Failed to write session marker: {}", e);
        }
        tracing::debug!(%marker, "Started new session");

        if self.read(self.durable.as_ref(), &self.config.shown_flag_key).is_some() {
            tracing::debug!(user = %user.name, "Welcome already shown on this profile");
            return WelcomeDecision::AlreadyShown;
        }

        tracing::debug!(
            user = %user.name,
            delay_ms = self.config.reveal_delay_ms,
            "Scheduling welcome reveal"
        );
        WelcomeDecision::Reveal(PendingReveal {
            delay: self.config.reveal_delay(),
            token: CancellationToken::new(),
            durable: self.durable.clone(),
            shown_flag_key: self.config.shown_flag_key.clone(),
        })
    }

    fn read(&self, store: &dyn KeyValueStore, key: &str) -> Option<String> {
        match store.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(%key, "Storage read failed, treating as absent: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::CurrentUser;
    use crate::session::SequentialSessionIds;
    use crate::storage::MemoryStore;

    fn gate() -> (WelcomeGate, MemoryStore, MemoryStore) {
        let durable = MemoryStore::new();
        let session = MemoryStore::new();
        let gate = WelcomeGate::new(Arc::new(durable.clone()), Arc::new(session.clone()))
            .with_session_ids(Arc::new(SequentialSessionIds::new()));
        (gate, durable, session)
    }

    fn user() -> AuthState {
        AuthState::signed_in(CurrentUser::new("Asha"))
    }

    #[test]
    fn test_signed_out_touches_nothing() {
        let (gate, durable, session) = gate();
        assert!(matches!(gate.evaluate(&AuthState::signed_out()), WelcomeDecision::SignedOut));
        assert!(durable.is_empty());
        assert!(session.is_empty());
    }

    #[test]
    fn test_fresh_session_writes_marker_immediately() {
        let (gate, durable, session) = gate();
        let decision = gate.evaluate(&user());

        assert!(decision.is_reveal());
        assert_eq!(session.get("currentBrowserSession").unwrap().as_deref(), Some("session_0"));
        // Shown flag waits for the delay
        assert!(durable.is_empty());
    }

    #[test]
    fn test_existing_session_skips() {
        let (gate, durable, session) = gate();
        session.set("currentBrowserSession", "session_old").unwrap();

        assert!(matches!(gate.evaluate(&user()), WelcomeDecision::ExistingSession));
        assert_eq!(session.get("currentBrowserSession").unwrap().as_deref(), Some("session_old"));
        assert!(durable.is_empty());
    }

    #[test]
    fn test_already_shown_writes_new_marker_only() {
        let (gate, durable, session) = gate();
        durable.set("welcomePopupShownInBrowser", "true").unwrap();

        assert!(matches!(gate.evaluate(&user()), WelcomeDecision::AlreadyShown));
        assert!(session.get("currentBrowserSession").unwrap().is_some());
    }

    #[test]
    fn test_custom_keys_and_delay() {
        let (gate, _durable, session) = gate();
        let gate = gate.with_config(WelcomeConfig {
            shown_flag_key: "seen".into(),
            session_key: "tab".into(),
            reveal_delay_ms: 5,
        });

        let pending = gate.evaluate(&user()).into_reveal().unwrap();
        assert_eq!(pending.delay(), Duration::from_millis(5));
        assert!(session.get("tab").unwrap().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_writes_flag_after_delay() {
        let (gate, durable, _session) = gate();
        let pending = gate.evaluate(&user()).into_reveal().unwrap();

        assert_eq!(pending.wait().await, RevealOutcome::Revealed);
        assert_eq!(durable.get("welcomePopupShownInBrowser").unwrap().as_deref(), Some("true"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_delay() {
        let (gate, durable, _session) = gate();
        let pending = gate.evaluate(&user()).into_reveal().unwrap();
        let canceller = pending.canceller();

        let waiter = tokio::spawn(pending.wait());
        tokio::time::sleep(Duration::from_millis(100)).await;
        canceller.cancel();

        assert_eq!(waiter.await.unwrap(), RevealOutcome::Cancelled);
        assert!(canceller.is_cancelled());
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(durable.is_empty());
    }
}
