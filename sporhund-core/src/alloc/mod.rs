//! ## sporhund-core::alloc
//! **Bump-pointer arena regions with snapshot/restore reclamation**
//!
//! ### Expectations (Production):
//! - O(1) allocation with no per-allocation bookkeeping
//! - Allocations already handed out stay resolvable until a restore
//!   unwinds past their region
//! - Bulk reclamation via snapshot/restore, no per-object free
//!
//! ### Key Submodules:
//! - `arena`: Region-based bump allocator with snapshot/restore
//! - `stats`: Allocation statistics tracking

pub mod arena;
pub mod stats;

pub use arena::{Arena, ArenaRef, Snapshot};
pub use stats::ArenaStats;
