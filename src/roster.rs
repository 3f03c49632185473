//! Roster input parsing and adapter interfaces.
//!
//! The core never touches spreadsheets. Adapters implement [`RosterSource`]
//! to produce raw [`RosterRow`]s and [`TimetableSink`] to persist results;
//! [`parse_rows`] turns raw rows into validated [`CourseOffering`]s.
//!
//! # Error policy
//!
//! Hard errors (missing lecturer/course/sections, unparsable or non-positive
//! credit hours) are collected across all rows and reported together with
//! their 1-based row numbers — a malformed row is never silently skipped.
//! Soft issues degrade with a warning: a malformed available-times cell
//! becomes "unconstrained", an unknown day token is dropped.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::models::{CourseOffering, TimeOfDay, Timetable, Weekday, ALL_DAYS};

/// Sentinel accepted (case-insensitively) for "no restriction" day/time cells.
const ALL_SENTINEL: &str = "ALL";

/// One raw roster row, fields exactly as an adapter read them.
///
/// Empty availability cells are treated as the `ALL` sentinel, matching how
/// blank spreadsheet cells arrive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRow {
    /// Lecturer name or identifier.
    pub lecturer: String,
    /// Course name.
    pub course: String,
    /// Comma-joined class-section codes.
    pub sections: String,
    /// Credit-hour count, as text.
    pub credit_hours: String,
    /// Comma-joined day names, or `ALL`.
    pub available_days: String,
    /// Time constraint (`HH:MM - HH:MM` or `ALL`); only the start is used.
    pub available_times: String,
}

impl RosterRow {
    /// Creates a row with unrestricted availability.
    pub fn new(
        lecturer: impl Into<String>,
        course: impl Into<String>,
        sections: impl Into<String>,
        credit_hours: impl Into<String>,
    ) -> Self {
        Self {
            lecturer: lecturer.into(),
            course: course.into(),
            sections: sections.into(),
            credit_hours: credit_hours.into(),
            available_days: ALL_SENTINEL.to_string(),
            available_times: ALL_SENTINEL.to_string(),
        }
    }

    /// Sets the available-days cell.
    pub fn with_days(mut self, days: impl Into<String>) -> Self {
        self.available_days = days.into();
        self
    }

    /// Sets the available-times cell.
    pub fn with_times(mut self, times: impl Into<String>) -> Self {
        self.available_times = times.into();
        self
    }
}

/// A hard roster parsing error, tied to its 1-based row number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A required text field is empty.
    #[error("row {row}: missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },
    /// The credit-hours cell is not a positive integer.
    #[error("row {row}: invalid credit hours '{value}'")]
    InvalidCreditHours { row: usize, value: String },
}

/// Produces raw roster rows from wherever an adapter stores them.
pub trait RosterSource {
    /// Adapter-specific failure type.
    type Error;

    /// Reads all rows, in roster order.
    fn load(&mut self) -> Result<Vec<RosterRow>, Self::Error>;
}

/// Persists a finished timetable.
///
/// Grouping (per program-cohort key, per lecturer), recap sheets, and
/// highlighting of online-fallback entries all happen behind this seam;
/// none of it affects core semantics.
pub trait TimetableSink {
    /// Adapter-specific failure type.
    type Error;

    /// Writes the timetable.
    fn write(&mut self, timetable: &Timetable) -> Result<(), Self::Error>;
}

/// Parses raw rows into offerings, collecting every hard error.
///
/// Row order is preserved — it is the allocation order.
pub fn parse_rows(rows: &[RosterRow]) -> Result<Vec<CourseOffering>, Vec<RosterError>> {
    let mut offerings = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();

    for (idx, row) in rows.iter().enumerate() {
        match parse_row(row, idx + 1) {
            Ok(offering) => offerings.push(offering),
            Err(mut row_errors) => errors.append(&mut row_errors),
        }
    }

    if errors.is_empty() {
        Ok(offerings)
    } else {
        Err(errors)
    }
}

fn parse_row(row: &RosterRow, row_no: usize) -> Result<CourseOffering, Vec<RosterError>> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("lecturer", &row.lecturer),
        ("course", &row.course),
        ("sections", &row.sections),
    ] {
        if value.trim().is_empty() {
            errors.push(RosterError::MissingField { row: row_no, field });
        }
    }

    let credit_hours = match row.credit_hours.trim().parse::<u16>() {
        Ok(n) if n > 0 => n,
        _ => {
            errors.push(RosterError::InvalidCreditHours {
                row: row_no,
                value: row.credit_hours.clone(),
            });
            0
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    let raw_times = match row.available_times.trim() {
        "" => ALL_SENTINEL.to_string(),
        t => t.to_uppercase(),
    };
    let mut offering = CourseOffering::new(row.lecturer.trim(), row.course.trim(), credit_hours)
        .with_days(parse_days(&row.available_days, row_no))
        .with_raw_times(raw_times);
    for code in row.sections.split(',').filter(|c| !c.trim().is_empty()) {
        offering = offering.with_section(code);
    }
    if let Some(earliest) = parse_time_constraint(&row.available_times, row_no) {
        offering = offering.with_earliest_start(earliest);
    }
    Ok(offering)
}

/// Parses the available-days cell. Blank or `ALL` means every day; unknown
/// tokens are warned about and dropped.
fn parse_days(cell: &str, row_no: usize) -> Vec<Weekday> {
    let cell = cell.trim();
    if cell.is_empty() || cell.eq_ignore_ascii_case(ALL_SENTINEL) {
        return ALL_DAYS.to_vec();
    }
    let mut days = Vec::new();
    for token in cell.split(',') {
        match Weekday::parse(token) {
            Some(day) => {
                if !days.contains(&day) {
                    days.push(day);
                }
            }
            None => warn!(row = row_no, token = token.trim(), "unknown day name, skipped"),
        }
    }
    days
}

/// Parses the available-times cell into an earliest-start constraint.
///
/// The cell carries a range (`13:00 - 18:00`); only the start bounds the
/// search. Blank or `ALL` means unconstrained; anything unparsable is
/// warned about once and treated as unconstrained.
fn parse_time_constraint(cell: &str, row_no: usize) -> Option<TimeOfDay> {
    let cell = cell.trim();
    if cell.is_empty() || cell.eq_ignore_ascii_case(ALL_SENTINEL) {
        return None;
    }
    let start_text = cell.split('-').next().unwrap_or(cell);
    match TimeOfDay::parse(start_text) {
        Ok(start) => Some(start),
        Err(err) => {
            warn!(
                row = row_no,
                cell,
                %err,
                "unparsable available-times cell, treated as unconstrained"
            );
            None
        }
    }
}
