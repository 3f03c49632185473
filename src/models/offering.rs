//! Course-offering model.
//!
//! One offering is one roster row: a lecturer teaching a course to one or
//! more class-sections, with the lecturer's stated availability. Offerings
//! are immutable inputs; the allocation engine never mutates them.

use serde::{Deserialize, Serialize};

use super::section::ClassSection;
use super::time::{TimeOfDay, Weekday, ALL_DAYS};

/// A lecturer + course input record, possibly spanning several sections.
///
/// Listed order matters twice over: sections are allocated in the order they
/// appear, and candidate days are tried in the order the availability lists
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseOffering {
    /// Lecturer name or identifier.
    pub lecturer: String,
    /// Course name.
    pub course: String,
    /// Credit-hour count; determines session duration.
    pub credit_hours: u16,
    /// Sections taking this offering, in listed order.
    pub sections: Vec<ClassSection>,
    /// Days the lecturer is available, in listed order.
    pub available_days: Vec<Weekday>,
    /// Earliest start the lecturer accepts; `None` = unconstrained.
    pub earliest_start: Option<TimeOfDay>,
    /// The raw available-times cell, kept verbatim for failure reporting.
    pub raw_times: String,
}

impl CourseOffering {
    /// Creates an offering available on all days at any time.
    pub fn new(lecturer: impl Into<String>, course: impl Into<String>, credit_hours: u16) -> Self {
        Self {
            lecturer: lecturer.into(),
            course: course.into(),
            credit_hours,
            sections: Vec::new(),
            available_days: ALL_DAYS.to_vec(),
            earliest_start: None,
            raw_times: "ALL".to_string(),
        }
    }

    /// Adds a section by code.
    pub fn with_section(mut self, code: impl Into<String>) -> Self {
        self.sections.push(ClassSection::new(code));
        self
    }

    /// Restricts availability to the given days (listed order preserved).
    pub fn with_days(mut self, days: Vec<Weekday>) -> Self {
        self.available_days = days;
        self
    }

    /// Sets the earliest acceptable start time.
    pub fn with_earliest_start(mut self, earliest: TimeOfDay) -> Self {
        self.earliest_start = Some(earliest);
        self
    }

    /// Sets the raw available-times cell text.
    pub fn with_raw_times(mut self, raw: impl Into<String>) -> Self {
        self.raw_times = raw.into();
        self
    }

    /// Session duration for this offering under the given policy.
    #[inline]
    pub fn duration_minutes(&self, minutes_per_credit: u16) -> u16 {
        self.credit_hours.saturating_mul(minutes_per_credit)
    }

    /// Days the lecturer lists, joined for display/reporting.
    pub fn days_display(&self) -> String {
        self.available_days
            .iter()
            .map(|d| d.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
