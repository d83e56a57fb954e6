//! Session marker identifiers.
//!
//! The marker value only has to differ between sessions; nothing reads it
//! back beyond checking presence.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;
use ulid::Ulid;

/// Prefix shared by every generated session marker
pub const SESSION_PREFIX: &str = "session_";

/// Produces a fresh session marker value on each call.
pub trait SessionIdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// `session_<unix millis>_<random fraction>`, best-effort unique.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimestampSessionIds;

impl SessionIdGenerator for TimestampSessionIds {
    fn next_id(&self) -> String {
        let millis = chrono::Utc::now().timestamp_millis();
        let fraction: f64 = rand::rng().random_range(0.0..1.0);
        format!("{}{}_{}", SESSION_PREFIX, millis, fraction)
    }
}

/// `session_<ULID>`, sortable and collision-resistant.
#[derive(Clone, Copy, Debug, Default)]
pub struct UlidSessionIds;

impl SessionIdGenerator for UlidSessionIds {
    fn next_id(&self) -> String {
        format!("{}{}", SESSION_PREFIX, Ulid::new())
    }
}

/// `session_<n>` from a monotonic counter. Deterministic, for tests and demos.
#[derive(Debug, Default)]
pub struct SequentialSessionIds {
    next: AtomicU64,
}

impl SequentialSessionIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from `first`
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl SessionIdGenerator for SequentialSessionIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", SESSION_PREFIX, n)
    }
}
