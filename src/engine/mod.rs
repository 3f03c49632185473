//! Allocation engine and its collaborators.
//!
//! # Pipeline
//!
//! For each (offering, section) pair, [`AllocationEngine`] runs the day loop:
//! [`slot::find_slot`] picks the earliest feasible interval,
//! [`resolver::find_room`] picks the first free preferred room, the per-day
//! session cap is enforced, and the placement is committed to the ledger.
//! Exhausted pairs degrade to the online fallback.
//!
//! [`TimetableKpi`] summarizes a finished run.

pub mod resolver;
pub mod slot;

mod allocator;
mod kpi;

pub use allocator::{AllocationEngine, UNPLACED_REASON};
pub use kpi::TimetableKpi;
