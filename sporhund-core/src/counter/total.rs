//! Atomic running event total.
//!
//! Companion tally for callers that track how many events were recorded
//! overall, independent of the per-pair counts. Feeds the trailing
//! summary line of [`CounterTable::dump_with_total`].
//!
//! [`CounterTable::dump_with_total`]: crate::counter::table::CounterTable::dump_with_total

use std::sync::atomic::{AtomicU64, Ordering};

/// A monotonically increasing event counter, safe to bump from any thread.
#[derive(Debug, Default)]
pub struct EventTotal {
    count: AtomicU64,
}

impl EventTotal {
    /// Creates a total starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one event to the total.
    #[inline]
    pub fn increment(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Current total.
    pub fn get(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}
