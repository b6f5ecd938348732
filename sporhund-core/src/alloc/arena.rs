//! Region-based bump allocator with snapshot/restore.
//!
//! Serves requests by advancing a cursor through fixed-capacity regions.
//! Nothing is freed individually: when the current region cannot satisfy
//! a request, a fresh region is opened and the old one is retained, so
//! handles into it stay resolvable. [`Snapshot`]/[`Arena::restore`] give
//! bulk reclamation of everything allocated inside a scope.
//!
//! Handles are `(region index, offset)` pairs rather than raw pointers.
//! Callers pairing a snapshot/restore around a scope promise not to
//! retain handles allocated inside it. The substrate does not track live
//! handles; as a best-effort guard, resolving a released handle yields
//! [`ArenaError::StaleHandle`] while its range is still unreused. Once
//! the cursor re-advances past the range, the handle resolves to the
//! reused bytes.
//!
//! The arena is a single-context resource. Concurrent contexts each own
//! their own arena; there is no shared allocation frontier.

use tracing::debug;

use crate::alloc::stats::ArenaStats;
use crate::error::ArenaError;

/// Fixed allocation alignment. Every request is rounded up to the next
/// multiple of this unit.
pub const ALIGNMENT: usize = 16;

/// Default region capacity in bytes. Overridable per arena via
/// [`Arena::with_region_capacity`].
pub const DEFAULT_REGION_CAPACITY: usize = 64 * 1024;

/// A handle to an allocation: region index, byte offset, requested length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaRef {
    region: usize,
    offset: usize,
    len: usize,
}

impl ArenaRef {
    /// Index of the region holding this allocation.
    pub fn region_index(&self) -> usize {
        self.region
    }

    /// Byte offset of the allocation within its region.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Requested (unrounded) length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// An opaque capture of the allocation frontier, for later [`Arena::restore`].
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    regions: usize,
    cursor: usize,
}

struct Region {
    data: Box<[u8]>,
    cursor: usize,
}

impl Region {
    fn new(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity].into_boxed_slice(),
            cursor: 0,
        }
    }
}

/// Bump-pointer arena over a growable sequence of fixed-capacity regions.
pub struct Arena {
    regions: Vec<Region>,
    region_capacity: usize,
    stats: ArenaStats,
}

impl Arena {
    /// Creates an arena with [`DEFAULT_REGION_CAPACITY`] regions.
    pub fn new() -> Self {
        Self::with_region_capacity(DEFAULT_REGION_CAPACITY)
    }

    /// Creates an arena whose regions hold `capacity` bytes each.
    ///
    /// # Panics
    /// If `capacity` is not a positive multiple of [`ALIGNMENT`].
    pub fn with_region_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "Region capacity must be greater than zero");
        assert!(
            capacity % ALIGNMENT == 0,
            "Region capacity must be a multiple of the alignment unit"
        );
        Self {
            regions: Vec::new(),
            region_capacity: capacity,
            stats: ArenaStats::new(),
        }
    }

    /// Allocates `size` bytes, rounded up to the next multiple of
    /// [`ALIGNMENT`], from the current region's free tail.
    ///
    /// When the current region cannot satisfy the request, a fresh region
    /// becomes current; prior regions are retained untouched. A request
    /// larger than the region capacity is refused with
    /// [`ArenaError::OversizedRequest`].
    pub fn allocate(&mut self, size: usize) -> Result<ArenaRef, ArenaError> {
        // Capacity is alignment-aligned, so any size within it survives
        // rounding; checking first keeps align_up clear of overflow.
        if size > self.region_capacity {
            return Err(ArenaError::OversizedRequest {
                requested: size,
                capacity: self.region_capacity,
            });
        }
        let rounded = align_up(size, ALIGNMENT);

        let fits = self
            .regions
            .last()
            .is_some_and(|region| region.cursor + rounded <= region.data.len());
        if !fits {
            debug!(
                capacity = self.region_capacity,
                regions = self.regions.len() + 1,
                "opening new arena region"
            );
            self.regions.push(Region::new(self.region_capacity));
            self.stats.increment_regions_created();
        }

        let index = self.regions.len() - 1;
        let region = &mut self.regions[index];
        let offset = region.cursor;
        region.cursor += rounded;
        self.stats.record_allocation(size);

        Ok(ArenaRef {
            region: index,
            offset,
            len: size,
        })
    }

    /// Allocates space for `bytes` and copies them in.
    pub fn allocate_copy(&mut self, bytes: &[u8]) -> Result<ArenaRef, ArenaError> {
        let handle = self.allocate(bytes.len())?;
        self.bytes_mut(&handle)?.copy_from_slice(bytes);
        Ok(handle)
    }

    /// Resolves a handle to its bytes.
    ///
    /// Fails with [`ArenaError::StaleHandle`] if the allocation was
    /// released by an intervening [`restore`](Self::restore) and its
    /// range has not been reused yet (best-effort; see module docs).
    pub fn bytes(&self, handle: &ArenaRef) -> Result<&[u8], ArenaError> {
        let region = self
            .regions
            .get(handle.region)
            .ok_or(ArenaError::StaleHandle)?;
        if handle.offset + handle.len > region.cursor {
            return Err(ArenaError::StaleHandle);
        }
        Ok(&region.data[handle.offset..handle.offset + handle.len])
    }

    /// Mutable variant of [`bytes`](Self::bytes).
    pub fn bytes_mut(&mut self, handle: &ArenaRef) -> Result<&mut [u8], ArenaError> {
        let region = self
            .regions
            .get_mut(handle.region)
            .ok_or(ArenaError::StaleHandle)?;
        if handle.offset + handle.len > region.cursor {
            return Err(ArenaError::StaleHandle);
        }
        Ok(&mut region.data[handle.offset..handle.offset + handle.len])
    }

    /// Captures the current allocation frontier. No side effect.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            regions: self.regions.len(),
            cursor: self.regions.last().map_or(0, |region| region.cursor),
        }
    }

    /// Rewinds the allocation frontier to `snapshot`, dropping every
    /// region opened after it and making that memory available to the
    /// next [`allocate`](Self::allocate) call.
    ///
    /// Handles into the released range become stale; resolving one fails
    /// until the range is reused by later allocations.
    pub fn restore(&mut self, snapshot: Snapshot) {
        debug!(
            released_regions = self.regions.len().saturating_sub(snapshot.regions),
            "restoring arena snapshot"
        );
        self.regions.truncate(snapshot.regions);
        if let Some(region) = self.regions.last_mut() {
            region.cursor = snapshot.cursor;
        }
        self.stats.increment_restores();
    }

    /// Number of regions currently open.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Per-region capacity in bytes.
    pub fn region_capacity(&self) -> usize {
        self.region_capacity
    }

    /// Allocation statistics for this arena.
    pub fn stats(&self) -> &ArenaStats {
        &self.stats
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn align_up(n: usize, align: usize) -> usize {
    (n + align - 1) & !(align - 1)
}
