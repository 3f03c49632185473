//! Timetable quality metrics.
//!
//! Aggregate indicators computed from a completed allocation. Purely
//! derived; nothing here feeds back into placement decisions.

use std::collections::HashMap;

use crate::models::{PlacementStatus, Timetable, Weekday};

/// Placement indicators for one allocation run.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Total (offering, section) pairs processed.
    pub total_sessions: usize,
    /// Sessions placed in a physical room.
    pub physical_sessions: usize,
    /// Sessions that fell back to online with no room.
    pub online_fallbacks: usize,
    /// Physical sessions past the late-evening cutoff (online status with a
    /// room assigned).
    pub late_evening_sessions: usize,
    /// Fraction of sessions physically placed (0.0..1.0).
    pub placement_rate: f64,
    /// Physical sessions per weekday.
    pub sessions_per_day: HashMap<Weekday, usize>,
    /// Distinct rooms carrying at least one session.
    pub rooms_used: usize,
    /// Booked minutes per room.
    pub minutes_by_room: HashMap<String, u64>,
}

impl TimetableKpi {
    /// Computes KPIs from a timetable.
    pub fn calculate(timetable: &Timetable) -> Self {
        let total_sessions = timetable.entry_count();
        let mut physical_sessions = 0;
        let mut late_evening_sessions = 0;
        let mut sessions_per_day: HashMap<Weekday, usize> = HashMap::new();
        let mut minutes_by_room: HashMap<String, u64> = HashMap::new();

        for entry in &timetable.entries {
            let Some(day) = entry.day else {
                continue;
            };
            physical_sessions += 1;
            *sessions_per_day.entry(day).or_insert(0) += 1;
            if entry.status == PlacementStatus::Online {
                late_evening_sessions += 1;
            }
            if let Some(room) = &entry.room {
                *minutes_by_room.entry(room.clone()).or_insert(0) +=
                    u64::from(entry.window.duration_minutes());
            }
        }

        let placement_rate = if total_sessions == 0 {
            1.0
        } else {
            physical_sessions as f64 / total_sessions as f64
        };

        Self {
            total_sessions,
            physical_sessions,
            online_fallbacks: total_sessions - physical_sessions,
            late_evening_sessions,
            placement_rate,
            sessions_per_day,
            rooms_used: minutes_by_room.len(),
            minutes_by_room,
        }
    }

    /// Whether every session found a physical placement.
    pub fn fully_placed(&self) -> bool {
        self.online_fallbacks == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassSection, ScheduleEntry, TimeOfDay, TimeWindow};

    fn entry(code: &str, day: Option<Weekday>, room: Option<&str>, minutes: u16) -> ScheduleEntry {
        let start = TimeOfDay::new(8, 0);
        ScheduleEntry {
            lecturer: "Dr. Sari".to_string(),
            course: "Algorithms".to_string(),
            section: ClassSection::new(code),
            day,
            window: TimeWindow::new(start, start.plus_minutes(minutes)),
            room: room.map(String::from),
            status: if day.is_some() {
                PlacementStatus::Scheduled
            } else {
                PlacementStatus::Online
            },
        }
    }

    #[test]
    fn test_kpi_counts() {
        let mut t = Timetable::new();
        t.add_entry(entry("TI23101", Some(Weekday::Monday), Some("A3-1"), 100));
        t.add_entry(entry("TI23102", Some(Weekday::Monday), Some("A3-1"), 150));
        t.add_entry(entry("TI23103", Some(Weekday::Tuesday), Some("A3-2"), 100));
        t.add_entry(entry("TI23104", None, None, 100));

        let kpi = TimetableKpi::calculate(&t);
        assert_eq!(kpi.total_sessions, 4);
        assert_eq!(kpi.physical_sessions, 3);
        assert_eq!(kpi.online_fallbacks, 1);
        assert!((kpi.placement_rate - 0.75).abs() < 1e-10);
        assert_eq!(kpi.sessions_per_day[&Weekday::Monday], 2);
        assert_eq!(kpi.rooms_used, 2);
        assert_eq!(kpi.minutes_by_room["A3-1"], 250);
        assert!(!kpi.fully_placed());
    }

    #[test]
    fn test_kpi_empty_timetable() {
        let kpi = TimetableKpi::calculate(&Timetable::new());
        assert_eq!(kpi.total_sessions, 0);
        assert!((kpi.placement_rate - 1.0).abs() < 1e-10);
        assert!(kpi.fully_placed());
    }

    #[test]
    fn test_late_evening_counted_as_physical() {
        let mut t = Timetable::new();
        let mut e = entry("TI23101M", Some(Weekday::Monday), Some("A3-1"), 100);
        e.status = PlacementStatus::Online;
        t.add_entry(e);

        let kpi = TimetableKpi::calculate(&t);
        assert_eq!(kpi.physical_sessions, 1);
        assert_eq!(kpi.late_evening_sessions, 1);
        assert_eq!(kpi.online_fallbacks, 0);
    }
}
