//! Arena allocation statistics.
//!
//! Atomic counters tracking arena activity, owned by each [`Arena`] and
//! exposed read-only through [`Arena::stats`].
//!
//! [`Arena`]: crate::alloc::arena::Arena
//! [`Arena::stats`]: crate::alloc::arena::Arena::stats

use std::sync::atomic::{AtomicU64, Ordering};

/// Allocation statistics tracker.
///
/// Uses atomic operations so readers never observe a torn counter.
#[derive(Debug, Default)]
pub struct ArenaStats {
    allocations: AtomicU64,
    regions_created: AtomicU64,
    restores: AtomicU64,
    bytes_requested: AtomicU64,
}

impl ArenaStats {
    /// Creates a tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one allocation of `size` requested bytes.
    #[inline]
    pub(crate) fn record_allocation(&self, size: usize) {
        self.allocations.fetch_add(1, Ordering::Relaxed);
        self.bytes_requested.fetch_add(size as u64, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn increment_regions_created(&self) {
        self.regions_created.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn increment_restores(&self) {
        self.restores.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of allocations served.
    pub fn allocations(&self) -> u64 {
        self.allocations.load(Ordering::Relaxed)
    }

    /// Number of regions opened over the arena's lifetime.
    pub fn regions_created(&self) -> u64 {
        self.regions_created.load(Ordering::Relaxed)
    }

    /// Number of snapshot restores performed.
    pub fn restores(&self) -> u64 {
        self.restores.load(Ordering::Relaxed)
    }

    /// Total bytes requested, before alignment rounding.
    pub fn bytes_requested(&self) -> u64 {
        self.bytes_requested.load(Ordering::Relaxed)
    }
}
