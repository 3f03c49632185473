//! Class-section model.
//!
//! A class-section (one student cohort taking an offering) is identified by a
//! code such as `TI23101` or `SI22204B`. The code encodes two things:
//!
//! - **Program**: the leading run of letters (`TI`, `SI`, `AKT`, ...), used
//!   for room-preference lookup and output grouping.
//! - **Cohort kind**: marker letters after the program prefix. `B` marks a
//!   Saturday-intensive cohort, `C` a Sunday-intensive cohort, `M` an evening
//!   cohort. Markers are only recognized after the prefix so that program
//!   letters (e.g. the `M` in `ME`) are never misread as markers.
//!
//! The cohort kind is computed once at construction and drives the permitted
//! weekday set, the valid time window, and the daily session cap class.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::time::{TimeOfDay, TimeWindow, Weekday, ALL_DAYS};

/// Cohort classification derived from section-code markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CohortKind {
    /// Weekday daytime cohort (no marker).
    #[default]
    Regular,
    /// Saturday-intensive cohort (`B` marker).
    Saturday,
    /// Sunday-intensive cohort (`C` marker).
    Sunday,
    /// Evening cohort (`M` marker).
    Evening,
}

impl CohortKind {
    /// Weekdays this cohort may be scheduled on.
    ///
    /// Saturday/Sunday cohorts are confined to their single day regardless of
    /// what an offering's availability lists.
    pub fn permitted_days(self) -> &'static [Weekday] {
        match self {
            Self::Saturday => &[Weekday::Saturday],
            Self::Sunday => &[Weekday::Sunday],
            Self::Regular | Self::Evening => &ALL_DAYS,
        }
    }

    /// Valid session window for this cohort.
    pub fn time_window(self) -> TimeWindow {
        match self {
            Self::Evening => TimeWindow::new(TimeOfDay::new(17, 0), TimeOfDay::new(22, 0)),
            Self::Saturday | Self::Sunday => {
                TimeWindow::new(TimeOfDay::new(8, 0), TimeOfDay::new(21, 0))
            }
            Self::Regular => TimeWindow::new(TimeOfDay::new(8, 0), TimeOfDay::new(18, 0)),
        }
    }

    /// Whether this cohort packs many sessions into few days.
    ///
    /// Intensive cohorts (Saturday/Sunday/Evening) get the higher per-day
    /// session cap from the configuration.
    #[inline]
    pub fn is_intensive(self) -> bool {
        !matches!(self, Self::Regular)
    }
}

/// One student cohort taking a course offering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassSection {
    /// Normalized section code (trimmed, uppercased).
    pub code: String,
    /// Leading alphabetic program prefix; `None` when the code starts with a
    /// non-letter, in which case room resolution fails closed.
    pub program: Option<String>,
    /// Cohort kind derived from the code's marker letters.
    pub cohort: CohortKind,
}

impl ClassSection {
    /// Creates a section from a raw code, deriving program and cohort kind.
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into().trim().to_uppercase();
        let prefix_len = code.chars().take_while(|c| c.is_ascii_alphabetic()).count();
        let program = if prefix_len > 0 {
            Some(code[..prefix_len].to_string())
        } else {
            None
        };
        let cohort = derive_cohort(&code[prefix_len..]);
        Self {
            code,
            program,
            cohort,
        }
    }

    /// Valid session window (delegates to the cohort kind).
    #[inline]
    pub fn time_window(&self) -> TimeWindow {
        self.cohort.time_window()
    }

    /// Weekdays this section may be scheduled on.
    #[inline]
    pub fn permitted_days(&self) -> &'static [Weekday] {
        self.cohort.permitted_days()
    }

    /// Grouping key for output adapters: program + 4-digit intake year.
    ///
    /// `TI23101` → `TI2023`. Sections without a program prefix or without two
    /// leading digits after it fall into the `OTHER` group.
    pub fn group_key(&self) -> String {
        let Some(program) = &self.program else {
            return "OTHER".to_string();
        };
        let digits: String = self.code[program.len()..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .take(2)
            .collect();
        if digits.len() == 2 {
            format!("{program}20{digits}")
        } else {
            "OTHER".to_string()
        }
    }
}

impl fmt::Display for ClassSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Derives the cohort kind from the post-prefix part of a section code.
///
/// Marker precedence is `B`, then `C`, then `M`: a Saturday or Sunday marker
/// wins over an evening marker so that one enum value determines days, window,
/// and cap together.
fn derive_cohort(suffix: &str) -> CohortKind {
    if suffix.contains('B') {
        CohortKind::Saturday
    } else if suffix.contains('C') {
        CohortKind::Sunday
    } else if suffix.contains('M') {
        CohortKind::Evening
    } else {
        CohortKind::Regular
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_section() {
        let s = ClassSection::new("ti23101");
        assert_eq!(s.code, "TI23101");
        assert_eq!(s.program.as_deref(), Some("TI"));
        assert_eq!(s.cohort, CohortKind::Regular);
        assert_eq!(s.permitted_days().len(), 7);
    }

    #[test]
    fn test_saturday_marker() {
        let s = ClassSection::new("TI23101B");
        assert_eq!(s.cohort, CohortKind::Saturday);
        assert_eq!(s.permitted_days(), &[Weekday::Saturday]);
    }

    #[test]
    fn test_sunday_marker() {
        let s = ClassSection::new("SI22204C");
        assert_eq!(s.cohort, CohortKind::Sunday);
        assert_eq!(s.permitted_days(), &[Weekday::Sunday]);
    }

    #[test]
    fn test_evening_marker() {
        let s = ClassSection::new("HK24102M");
        assert_eq!(s.cohort, CohortKind::Evening);
        assert_eq!(s.permitted_days().len(), 7);
        assert_eq!(
            s.time_window(),
            TimeWindow::new(TimeOfDay::new(17, 0), TimeOfDay::new(22, 0))
        );
    }

    #[test]
    fn test_program_letters_are_not_markers() {
        // The M in ME is part of the program prefix, not an evening marker.
        let s = ClassSection::new("ME23101");
        assert_eq!(s.program.as_deref(), Some("ME"));
        assert_eq!(s.cohort, CohortKind::Regular);
    }

    #[test]
    fn test_marker_precedence() {
        // Saturday marker wins over evening marker.
        let s = ClassSection::new("TI23101BM");
        assert_eq!(s.cohort, CohortKind::Saturday);
    }

    #[test]
    fn test_three_letter_program() {
        let s = ClassSection::new("AKT23105");
        assert_eq!(s.program.as_deref(), Some("AKT"));
    }

    #[test]
    fn test_no_program_prefix() {
        let s = ClassSection::new("23101");
        assert_eq!(s.program, None);
        assert_eq!(s.group_key(), "OTHER");
    }

    #[test]
    fn test_cohort_windows() {
        assert_eq!(
            CohortKind::Regular.time_window(),
            TimeWindow::new(TimeOfDay::new(8, 0), TimeOfDay::new(18, 0))
        );
        assert_eq!(
            CohortKind::Saturday.time_window(),
            TimeWindow::new(TimeOfDay::new(8, 0), TimeOfDay::new(21, 0))
        );
    }

    #[test]
    fn test_group_key() {
        assert_eq!(ClassSection::new("TI23101").group_key(), "TI2023");
        assert_eq!(ClassSection::new("AKT22105B").group_key(), "AKT2022");
        assert_eq!(ClassSection::new("TI1").group_key(), "OTHER");
    }

    #[test]
    fn test_intensive_flag() {
        assert!(!CohortKind::Regular.is_intensive());
        assert!(CohortKind::Saturday.is_intensive());
        assert!(CohortKind::Sunday.is_intensive());
        assert!(CohortKind::Evening.is_intensive());
    }
}
