//! Availability engine.
//!
//! Pure overlap checks over booking intervals that callers have already
//! fetched. Nothing in here touches the database.

pub mod overlap;
pub mod units;

pub use overlap::{conflicting, has_overlap, overlaps};
pub use units::{find_free_unit, UnitSchedule};
