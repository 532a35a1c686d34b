//! Access event model for asynchronous access counting.

use chrono::{DateTime, Utc};

/// A resolved alias waiting to be counted.
///
/// Sent from the redirect handler to the background worker over a bounded
/// channel so the redirect never waits on the counter write.
///
/// # Usage Flow
///
/// 1. Created in the redirect handler after the alias resolves
/// 2. Sent to channel (non-blocking, dropped when the queue is full)
/// 3. Processed by [`crate::domain::access_worker::run_access_worker`]
#[derive(Debug, Clone)]
pub struct AccessEvent {
    pub alias: String,
    pub accessed_at: DateTime<Utc>,
}

impl AccessEvent {
    /// Creates an event stamped with the current time.
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            accessed_at: Utc::now(),
        }
    }

    /// Milliseconds between the access and `now`, clamped at zero.
    pub fn queue_delay_ms(&self, now: DateTime<Utc>) -> i64 {
        (now - self.accessed_at).num_milliseconds().max(0)
    }
}
