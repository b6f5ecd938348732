//! ## sporhund-core::counter
//! **Nested frequency counting with deterministic dumps**
//!
//! ### Expectations (Production):
//! - No lost updates under concurrent recording
//! - Dump output is byte-identical for a fixed table state, across runs
//!
//! ### Key Submodules:
//! - `table`: The subject/category counter table
//! - `total`: Atomic running event total for dump summaries

pub mod table;
pub mod total;

pub use table::CounterTable;
pub use total::EventTotal;
