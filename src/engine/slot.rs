//! First-fit slot search.
//!
//! Scans the time grid over a section's valid window and returns the first
//! interval that fits the session duration, avoids breaks, honors the
//! lecturer's earliest-start preference, and conflicts with nothing the
//! ledger has booked for the lecturer or the section on that day. No
//! look-ahead and no fit-quality optimization.

use crate::config::ScheduleConfig;
use crate::grid;
use crate::ledger::{OccupancyLedger, ResourceKey};
use crate::models::{ClassSection, TimeOfDay, TimeWindow, Weekday};

/// Finds the earliest feasible interval for one session on one day.
///
/// Returns `None` when the section's window has no surviving candidate.
pub fn find_slot(
    section: &ClassSection,
    lecturer: &str,
    duration_minutes: u16,
    day: Weekday,
    earliest_start: Option<TimeOfDay>,
    ledger: &OccupancyLedger,
    config: &ScheduleConfig,
) -> Option<TimeWindow> {
    let window = section.time_window();
    let lecturer_key = ResourceKey::lecturer(lecturer);
    let section_key = ResourceKey::section(&section.code);

    for start in grid::instants(window, config.grid_step_minutes) {
        let end = start.plus_minutes(duration_minutes);
        if end > window.end {
            continue;
        }
        let candidate = TimeWindow::new(start, end);
        if grid::in_break(&candidate, &config.breaks) {
            continue;
        }
        if let Some(earliest) = earliest_start {
            if start < earliest {
                continue;
            }
        }
        if !ledger.is_free(day, &lecturer_key, candidate) {
            continue;
        }
        if !ledger.is_free(day, &section_key, candidate) {
            continue;
        }
        return Some(candidate);
    }
    None
}
