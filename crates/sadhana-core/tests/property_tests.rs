//! Property-based tests for the at-most-once guarantee.

use std::sync::Arc;

use proptest::prelude::*;
use sadhana_core::{
    AuthState, CurrentUser, MemoryStore, RevealOutcome, SequentialSessionIds, WelcomeDecision,
    WelcomeGate,
};

#[derive(Debug, Clone)]
struct Visit {
    /// Start a fresh session before this render
    new_session: bool,
    signed_in: bool,
    /// Tear the popup down before the delay elapses
    unmount_early: bool,
}

fn visit_strategy() -> impl Strategy<Value = Visit> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(new_session, signed_in, unmount_early)| {
        Visit {
            new_session,
            signed_in,
            unmount_early,
        }
    })
}

proptest! {
    #[test]
    fn prop_revealed_at_most_once_per_profile(visits in prop::collection::vec(visit_strategy(), 1..40)) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap();

        let durable = MemoryStore::new();
        let ids = Arc::new(SequentialSessionIds::new());
        let mut session = MemoryStore::new();
        let mut reveals_total = 0;
        let mut reveals_this_session = 0;

        for visit in visits {
            if visit.new_session {
                session = MemoryStore::new();
                reveals_this_session = 0;
            }
            let gate = WelcomeGate::new(Arc::new(durable.clone()), Arc::new(session.clone()))
                .with_session_ids(ids.clone());

            let auth = if visit.signed_in {
                AuthState::signed_in(CurrentUser::new("Asha"))
            } else {
                AuthState::signed_out()
            };

            if let WelcomeDecision::Reveal(pending) = gate.evaluate(&auth) {
                if visit.unmount_early {
                    pending.canceller().cancel();
                }
                if rt.block_on(pending.wait()) == RevealOutcome::Revealed {
                    reveals_total += 1;
                    reveals_this_session += 1;
                }
            }

            prop_assert!(reveals_total <= 1);
            prop_assert!(reveals_this_session <= 1);
            prop_assert_eq!(durable.is_empty(), reveals_total == 0);
        }
    }
}
