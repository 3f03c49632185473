//! Timetable (solution) model.
//!
//! The allocation engine produces exactly one [`ScheduleEntry`] per
//! (offering, section) pair. Pairs that could not be placed physically get an
//! online-fallback entry (`day == None`, `room == None`) plus a paired
//! [`FailureRecord`] for visibility.

use serde::{Deserialize, Serialize};

use super::section::ClassSection;
use super::time::{TimeWindow, Weekday};

/// How a session was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementStatus {
    /// Physical placement within regular hours.
    Scheduled,
    /// Online session: either a late-evening physical placement past the
    /// cutoff (room still assigned) or the no-room fallback (no day, no room).
    Online,
}

/// One scheduled session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Lecturer name or identifier.
    pub lecturer: String,
    /// Course name.
    pub course: String,
    /// The section this session belongs to.
    pub section: ClassSection,
    /// Scheduled day; `None` for the online fallback.
    pub day: Option<Weekday>,
    /// Session interval.
    pub window: TimeWindow,
    /// Assigned room id; `None` for the online fallback.
    pub room: Option<String>,
    /// Placement status.
    pub status: PlacementStatus,
}

impl ScheduleEntry {
    /// Whether this entry is the no-room online fallback.
    #[inline]
    pub fn is_online_fallback(&self) -> bool {
        self.day.is_none()
    }
}

/// Why a (offering, section) pair could not be placed physically.
///
/// Always paired with an online-fallback [`ScheduleEntry`]; carries the
/// original constraints so an adapter can surface them for manual review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureRecord {
    /// Lecturer name or identifier.
    pub lecturer: String,
    /// Course name.
    pub course: String,
    /// Section code.
    pub section: String,
    /// Fixed human-readable reason.
    pub reason: String,
    /// The offering's availability, joined for display.
    pub available_days: String,
    /// The offering's raw available-times cell.
    pub available_times: String,
    /// Credit-hour count of the offering.
    pub credit_hours: u16,
}

/// A complete allocation result: entries plus placement failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// One entry per (offering, section) pair, in allocation order.
    pub entries: Vec<ScheduleEntry>,
    /// One record per pair that fell back to online, in allocation order.
    pub failures: Vec<FailureRecord>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Appends a failure record.
    pub fn add_failure(&mut self, failure: FailureRecord) {
        self.failures.push(failure);
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of online-fallback entries.
    pub fn fallback_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.is_online_fallback())
            .count()
    }

    /// Entries for one lecturer, in allocation order.
    pub fn entries_for_lecturer(&self, lecturer: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.lecturer == lecturer)
            .collect()
    }

    /// Entries for one section code, in allocation order.
    pub fn entries_for_section(&self, code: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.section.code == code)
            .collect()
    }

    /// Number of physical sessions a section already has on a day.
    ///
    /// Counts every committed entry on that day regardless of status — a
    /// late-evening `Online` placement still occupies a room. Fallback
    /// entries have no day and are never counted.
    pub fn physical_sessions_on(&self, code: &str, day: Weekday) -> usize {
        self.entries
            .iter()
            .filter(|e| e.section.code == code && e.day == Some(day))
            .count()
    }
}
