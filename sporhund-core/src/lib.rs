//! # sporhund-core
//!
//! Foundation layer for profiling instrumentation.
//! Built with safety, performance, and maintainability as primary design constraints.
//!
//! ### Expectations (Production):
//! - Exact event counts under arbitrary concurrent interleaving
//! - Deterministic, byte-identical dump output for a fixed table state
//! - Zero per-allocation bookkeeping on the instrumentation hot path
//!
//! ### Key Submodules:
//! - `counter`: Thread-safe nested frequency counting with deterministic dumps
//! - `alloc`: Bump-pointer arena regions with snapshot/restore reclamation

pub mod alloc;
pub mod counter;
pub mod error;

pub mod prelude {
    pub use crate::alloc::arena::{Arena, ArenaRef, Snapshot};
    pub use crate::counter::table::CounterTable;
    pub use crate::counter::total::EventTotal;
    pub use crate::error::ArenaError;
}

pub use error::ArenaError;
