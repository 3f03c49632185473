//! Day-local time primitives.
//!
//! Times are minutes since midnight on an unspecified day; the weekday is
//! carried separately ([`Weekday`]). Intervals are half-open `[start, end)`.
//!
//! # Time Model
//! A timetable repeats weekly, so no calendar dates exist here. A
//! [`TimeOfDay`] past `24:00` is representable (an interval end pushed past
//! midnight by a long session) and simply fails any in-window check.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A clock time as minutes since midnight.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct TimeOfDay(u16);

/// Failure to parse an `HH:MM` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    /// No `:` separator between hours and minutes.
    #[error("expected HH:MM, got '{0}'")]
    MissingSeparator(String),
    /// Hour or minute field is not a number.
    #[error("non-numeric time component in '{0}'")]
    NotANumber(String),
    /// Hour above 23 or minute above 59.
    #[error("time component out of range in '{0}'")]
    OutOfRange(String),
}

impl TimeOfDay {
    /// Creates a time from hour and minute components.
    pub const fn new(hour: u16, minute: u16) -> Self {
        Self(hour * 60 + minute)
    }

    /// Creates a time from raw minutes since midnight.
    pub const fn from_minutes(minutes: u16) -> Self {
        Self(minutes)
    }

    /// Minutes since midnight.
    #[inline]
    pub const fn minutes(self) -> u16 {
        self.0
    }

    /// Hour component (0-23 for in-day times).
    #[inline]
    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Minute component (0-59).
    #[inline]
    pub const fn minute(self) -> u16 {
        self.0 % 60
    }

    /// This time shifted later by `minutes`.
    pub fn plus_minutes(self, minutes: u16) -> Self {
        Self(self.0.saturating_add(minutes))
    }

    /// Parses an `HH:MM` string.
    ///
    /// Returns an explicit error rather than a sentinel value; callers decide
    /// whether a parse failure is fatal (roster day windows) or degrades to
    /// "unconstrained" (lecturer time preferences).
    pub fn parse(s: &str) -> Result<Self, TimeParseError> {
        let s = s.trim();
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| TimeParseError::MissingSeparator(s.to_string()))?;
        let hour: u16 = h
            .trim()
            .parse()
            .map_err(|_| TimeParseError::NotANumber(s.to_string()))?;
        let minute: u16 = m
            .trim()
            .parse()
            .map_err(|_| TimeParseError::NotANumber(s.to_string()))?;
        if hour > 23 || minute > 59 {
            return Err(TimeParseError::OutOfRange(s.to_string()));
        }
        Ok(Self::new(hour, minute))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A time interval `[start, end)`.
///
/// Half-open: includes start, excludes end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub start: TimeOfDay,
    /// Interval end (exclusive).
    pub end: TimeOfDay,
}

impl TimeWindow {
    /// Creates a new time window.
    pub const fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Window length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Whether a time falls within this window.
    #[inline]
    pub fn contains(&self, t: TimeOfDay) -> bool {
        t >= self.start && t < self.end
    }

    /// Whether two windows overlap (half-open semantics).
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// A day of the scheduling week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// All weekdays in scheduling order (Monday first).
pub const ALL_DAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// Parses a day name from a roster cell.
    ///
    /// Accepts English names and the Indonesian names used by the source
    /// roster format (SENIN..MINGGU), case-insensitive. Returns `None` for
    /// anything else.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "MONDAY" | "SENIN" => Some(Self::Monday),
            "TUESDAY" | "SELASA" => Some(Self::Tuesday),
            "WEDNESDAY" | "RABU" => Some(Self::Wednesday),
            "THURSDAY" | "KAMIS" => Some(Self::Thursday),
            "FRIDAY" | "JUMAT" => Some(Self::Friday),
            "SATURDAY" | "SABTU" => Some(Self::Saturday),
            "SUNDAY" | "MINGGU" => Some(Self::Sunday),
            _ => None,
        }
    }

    /// English day name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
