//! Timetabling domain models.
//!
//! Core data types for course-timetabling inputs and outputs:
//!
//! | Type | Role |
//! |------|------|
//! | [`CourseOffering`] | One roster row: lecturer + course + sections |
//! | [`ClassSection`] | One student cohort; code encodes program and cohort kind |
//! | [`Room`] / [`RoomCatalog`] | Static physical room inventory |
//! | [`TimeOfDay`] / [`TimeWindow`] / [`Weekday`] | Day-local time primitives |
//! | [`Timetable`] | Allocation result: entries + failure records |

mod offering;
mod room;
mod section;
mod time;
mod timetable;

pub use offering::CourseOffering;
pub use room::{Building, Floor, Room, RoomCatalog};
pub use section::{ClassSection, CohortKind};
pub use time::{TimeOfDay, TimeParseError, TimeWindow, Weekday, ALL_DAYS};
pub use timetable::{FailureRecord, PlacementStatus, ScheduleEntry, Timetable};
