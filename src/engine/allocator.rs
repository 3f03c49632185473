//! Single-pass first-fit allocation engine.
//!
//! # Algorithm
//!
//! 1. Consume offerings in input order; within an offering, sections in
//!    listed order. Input order is load-bearing: it decides who wins
//!    contested slots and rooms.
//! 2. For each (offering, section) pair, try each permitted day in the order
//!    the offering lists its availability: find a slot, resolve a room,
//!    check the per-day session cap, then commit all three resource
//!    bookings at once.
//! 3. A pair with no feasible day degrades to an online-fallback entry plus
//!    a failure record; the engine never fails a run over an unplaceable
//!    pair.
//!
//! No backtracking and no global optimization — an earlier offering may
//! consume the slot a later one needed.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

use tracing::{debug, warn};

use super::{resolver, slot};
use crate::config::ScheduleConfig;
use crate::ledger::{OccupancyLedger, ResourceKey};
use crate::models::{
    ClassSection, CourseOffering, FailureRecord, PlacementStatus, ScheduleEntry, TimeWindow,
    Timetable,
};

/// Fixed reason attached to every placement failure.
pub const UNPLACED_REASON: &str =
    "no available slot matching the credit hours and lecturer availability";

/// Greedy first-fit timetable allocator.
///
/// Owns the occupancy ledger for one scheduling run; all ledger writes happen
/// here, after every key of a placement has been checked free.
///
/// # Example
///
/// ```
/// use campus_timetable::config::ScheduleConfig;
/// use campus_timetable::engine::AllocationEngine;
/// use campus_timetable::models::CourseOffering;
///
/// let offerings = vec![
///     CourseOffering::new("Dr. Sari", "Algorithms", 2).with_section("TI23101"),
/// ];
/// let mut engine = AllocationEngine::new(ScheduleConfig::default());
/// let timetable = engine.allocate(&offerings);
/// assert_eq!(timetable.entry_count(), 1);
/// assert_eq!(timetable.fallback_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct AllocationEngine {
    config: ScheduleConfig,
    ledger: OccupancyLedger,
}

impl AllocationEngine {
    /// Creates an engine with a fresh, empty ledger.
    pub fn new(config: ScheduleConfig) -> Self {
        Self::with_ledger(config, OccupancyLedger::new())
    }

    /// Creates an engine over a pre-seeded ledger (e.g. externally fixed
    /// bookings that this run must schedule around).
    pub fn with_ledger(config: ScheduleConfig, ledger: OccupancyLedger) -> Self {
        Self { config, ledger }
    }

    /// The policy this engine runs under.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// The ledger state accumulated so far.
    pub fn ledger(&self) -> &OccupancyLedger {
        &self.ledger
    }

    /// Allocates every (offering, section) pair, in order.
    ///
    /// Produces exactly one [`ScheduleEntry`] per pair; pairs with no
    /// feasible physical placement additionally produce a [`FailureRecord`].
    pub fn allocate(&mut self, offerings: &[CourseOffering]) -> Timetable {
        let mut timetable = Timetable::new();

        for offering in offerings {
            let duration = offering.duration_minutes(self.config.minutes_per_credit);
            for section in &offering.sections {
                if !self.place_section(offering, section, duration, &mut timetable) {
                    self.fall_back_online(offering, section, duration, &mut timetable);
                }
            }
        }
        timetable
    }

    /// Tries each permitted day in listed order; commits and returns `true`
    /// on the first success.
    fn place_section(
        &mut self,
        offering: &CourseOffering,
        section: &ClassSection,
        duration: u16,
        timetable: &mut Timetable,
    ) -> bool {
        for &day in &offering.available_days {
            if !section.permitted_days().contains(&day) {
                continue;
            }
            let Some(window) = slot::find_slot(
                section,
                &offering.lecturer,
                duration,
                day,
                offering.earliest_start,
                &self.ledger,
                &self.config,
            ) else {
                continue;
            };
            // A failed room lookup fails the whole day; the found slot is
            // not retried at another time.
            let Some(room_id) = resolver::find_room(section, day, window, &self.ledger, &self.config)
                .map(|room| room.id.clone())
            else {
                continue;
            };
            let cap = self.config.daily_cap(section.cohort);
            if timetable.physical_sessions_on(&section.code, day) >= cap {
                continue;
            }

            // Past the cutoff the session is held online, but the room stays
            // assigned (a late-night physical slot, not the no-room fallback).
            let status = if window.end > self.config.online_cutoff {
                PlacementStatus::Online
            } else {
                PlacementStatus::Scheduled
            };

            // All three keys were checked free above; book them together
            // before anything else observes the ledger.
            self.ledger
                .book(day, ResourceKey::lecturer(&offering.lecturer), window);
            self.ledger
                .book(day, ResourceKey::section(&section.code), window);
            self.ledger.book(day, ResourceKey::room(&room_id), window);

            debug!(
                section = %section.code,
                day = %day,
                window = %window,
                room = %room_id,
                "section placed"
            );
            timetable.add_entry(ScheduleEntry {
                lecturer: offering.lecturer.clone(),
                course: offering.course.clone(),
                section: section.clone(),
                day: Some(day),
                window,
                room: Some(room_id),
                status,
            });
            return true;
        }
        false
    }

    /// Terminal fallback: an unconditional online entry paired with a
    /// failure record. No feasibility check — the interval is the section
    /// window's earliest start plus the session duration.
    fn fall_back_online(
        &self,
        offering: &CourseOffering,
        section: &ClassSection,
        duration: u16,
        timetable: &mut Timetable,
    ) {
        let start = section.time_window().start;
        let window = TimeWindow::new(start, start.plus_minutes(duration));

        warn!(
            section = %section.code,
            course = %offering.course,
            "no physical placement; falling back to online"
        );
        timetable.add_entry(ScheduleEntry {
            lecturer: offering.lecturer.clone(),
            course: offering.course.clone(),
            section: section.clone(),
            day: None,
            window,
            room: None,
            status: PlacementStatus::Online,
        });
        timetable.add_failure(FailureRecord {
            lecturer: offering.lecturer.clone(),
            course: offering.course.clone(),
            section: section.code.clone(),
            reason: UNPLACED_REASON.to_string(),
            available_days: offering.days_display(),
            available_times: offering.raw_times.clone(),
            credit_hours: offering.credit_hours,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TimeOfDay, Weekday, ALL_DAYS};

    fn w(sh: u16, sm: u16, eh: u16, em: u16) -> TimeWindow {
        TimeWindow::new(TimeOfDay::new(sh, sm), TimeOfDay::new(eh, em))
    }

    /// Asserts the no-overlap invariant over every (day, key) in the ledger.
    fn assert_no_overlaps(ledger: &OccupancyLedger) {
        for day in ALL_DAYS {
            for key in ledger.keys_on(day) {
                let booked = ledger.bookings(day, key);
                for pair in booked.windows(2) {
                    assert!(
                        pair[0].end <= pair[1].start,
                        "overlap on {day:?} for {key:?}: {} vs {}",
                        pair[0],
                        pair[1]
                    );
                }
            }
        }
    }

    #[test]
    fn test_scenario_unconstrained_first_fit() {
        let offerings =
            vec![CourseOffering::new("Dr. Sari", "Algorithms", 2).with_section("TI23101")];
        let mut engine = AllocationEngine::new(ScheduleConfig::default());
        let timetable = engine.allocate(&offerings);

        let entry = &timetable.entries[0];
        assert_eq!(entry.day, Some(Weekday::Monday));
        assert_eq!(entry.window, w(8, 0, 9, 40));
        assert_eq!(entry.room.as_deref(), Some("A3-1"));
        assert_eq!(entry.status, PlacementStatus::Scheduled);
        assert!(timetable.failures.is_empty());
    }

    #[test]
    fn test_scenario_lecturer_prebooked() {
        let mut ledger = OccupancyLedger::new();
        ledger.book(
            Weekday::Monday,
            ResourceKey::lecturer("Dr. Sari"),
            w(8, 0, 10, 0),
        );
        let offerings =
            vec![CourseOffering::new("Dr. Sari", "Algorithms", 2).with_section("TI23101")];
        let mut engine = AllocationEngine::with_ledger(ScheduleConfig::default(), ledger);
        let timetable = engine.allocate(&offerings);

        let entry = &timetable.entries[0];
        assert_eq!(entry.day, Some(Weekday::Monday));
        assert_eq!(entry.window, w(10, 0, 11, 40));
    }

    #[test]
    fn test_scenario_saturday_cohort_confined() {
        // Availability lists only weekdays; the Saturday cohort must not be
        // placed on any of them.
        let offerings = vec![CourseOffering::new("Dr. Sari", "Algorithms", 2)
            .with_section("TI23101B")
            .with_days(vec![Weekday::Monday, Weekday::Tuesday])];
        let mut engine = AllocationEngine::new(ScheduleConfig::default());
        let timetable = engine.allocate(&offerings);

        assert_eq!(timetable.entry_count(), 1);
        assert_eq!(timetable.fallback_count(), 1);
        assert_eq!(timetable.failures.len(), 1);
        let entry = &timetable.entries[0];
        assert_eq!(entry.day, None);
        assert_eq!(entry.room, None);
        assert_eq!(entry.status, PlacementStatus::Online);
        // Fallback interval: Saturday-cohort window start + duration.
        assert_eq!(entry.window, w(8, 0, 9, 40));
    }

    #[test]
    fn test_saturday_cohort_placed_when_listed() {
        let offerings = vec![CourseOffering::new("Dr. Sari", "Algorithms", 2)
            .with_section("TI23101B")
            .with_days(vec![Weekday::Monday, Weekday::Saturday])];
        let mut engine = AllocationEngine::new(ScheduleConfig::default());
        let timetable = engine.allocate(&offerings);

        assert_eq!(timetable.entries[0].day, Some(Weekday::Saturday));
        assert!(timetable.failures.is_empty());
    }

    #[test]
    fn test_scenario_no_program_prefix() {
        let offerings =
            vec![CourseOffering::new("Dr. Sari", "Algorithms", 2).with_section("23101")];
        let mut engine = AllocationEngine::new(ScheduleConfig::default());
        let timetable = engine.allocate(&offerings);

        // Room resolution fails closed on every day; online fallback.
        assert_eq!(timetable.fallback_count(), 1);
        assert_eq!(timetable.failures.len(), 1);
        assert_eq!(timetable.failures[0].reason, UNPLACED_REASON);
        assert_eq!(timetable.failures[0].credit_hours, 2);
    }

    #[test]
    fn test_coverage_one_entry_per_pair() {
        let offerings = vec![
            CourseOffering::new("Dr. Sari", "Algorithms", 2)
                .with_section("TI23101")
                .with_section("TI23102"),
            CourseOffering::new("Dr. Budi", "Databases", 3).with_section("SI23201"),
        ];
        let mut engine = AllocationEngine::new(ScheduleConfig::default());
        let timetable = engine.allocate(&offerings);

        assert_eq!(timetable.entry_count(), 3);
        assert_eq!(timetable.entries_for_section("TI23101").len(), 1);
        assert_eq!(timetable.entries_for_section("TI23102").len(), 1);
        assert_eq!(timetable.entries_for_section("SI23201").len(), 1);
    }

    #[test]
    fn test_no_overlap_invariant_under_contention() {
        // One lecturer, one day, several sections: every placement must be
        // serialized on the lecturer key.
        let offerings = vec![
            CourseOffering::new("Dr. Sari", "Algorithms", 2)
                .with_section("TI23101")
                .with_section("TI23102")
                .with_section("TI23103")
                .with_days(vec![Weekday::Monday]),
            CourseOffering::new("Dr. Sari", "Operating Systems", 2)
                .with_section("TI23104")
                .with_days(vec![Weekday::Monday]),
        ];
        let mut engine = AllocationEngine::new(ScheduleConfig::default());
        let timetable = engine.allocate(&offerings);

        assert_eq!(timetable.entry_count(), 4);
        assert_no_overlaps(engine.ledger());
        // Sequential first-fit on the shared lecturer key.
        assert_eq!(timetable.entries[0].window, w(8, 0, 9, 40));
        assert_eq!(timetable.entries[1].window, w(9, 40, 11, 20));
    }

    #[test]
    fn test_daily_cap_forces_fallback() {
        // Four distinct offerings, all Monday-only, same regular section:
        // the cap of 3 leaves the fourth unplaced.
        let offerings: Vec<_> = ["A", "B", "C", "D"]
            .iter()
            .map(|name| {
                CourseOffering::new(format!("Dr. {name}"), format!("Course {name}"), 2)
                    .with_section("TI23101")
                    .with_days(vec![Weekday::Monday])
            })
            .collect();
        let mut engine = AllocationEngine::new(ScheduleConfig::default());
        let timetable = engine.allocate(&offerings);

        assert_eq!(timetable.entry_count(), 4);
        assert_eq!(timetable.physical_sessions_on("TI23101", Weekday::Monday), 3);
        assert_eq!(timetable.fallback_count(), 1);
        assert_eq!(timetable.failures.len(), 1);
        assert_no_overlaps(engine.ledger());
    }

    #[test]
    fn test_late_evening_session_is_online_with_room() {
        // Evening cohort, 4 credits = 200 minutes: first fit lands on
        // 18:30-21:50, past the 21:00 cutoff.
        let offerings =
            vec![CourseOffering::new("Dr. Sari", "Seminar", 4).with_section("TI23101M")];
        let mut engine = AllocationEngine::new(ScheduleConfig::default());
        let timetable = engine.allocate(&offerings);

        let entry = &timetable.entries[0];
        assert_eq!(entry.day, Some(Weekday::Monday));
        assert_eq!(entry.window, w(18, 30, 21, 50));
        assert_eq!(entry.status, PlacementStatus::Online);
        assert!(entry.room.is_some());
        // A late-evening physical session is not a placement failure.
        assert!(timetable.failures.is_empty());
    }

    #[test]
    fn test_fallback_pairing_both_directions() {
        let offerings = vec![
            CourseOffering::new("Dr. Sari", "Algorithms", 2).with_section("TI23101"),
            CourseOffering::new("Dr. Budi", "Ethics", 2).with_section("23999"),
        ];
        let mut engine = AllocationEngine::new(ScheduleConfig::default());
        let timetable = engine.allocate(&offerings);

        for entry in &timetable.entries {
            let has_failure = timetable
                .failures
                .iter()
                .any(|f| f.section == entry.section.code);
            assert_eq!(entry.is_online_fallback(), has_failure);
            if entry.is_online_fallback() {
                assert_eq!(entry.room, None);
            }
        }
    }

    #[test]
    fn test_break_exclusion_property() {
        let config = ScheduleConfig::default();
        let offerings: Vec<_> = (0..6)
            .map(|i| {
                CourseOffering::new("Dr. Sari", format!("Course {i}"), 3)
                    .with_section(format!("TI2310{i}"))
            })
            .collect();
        let mut engine = AllocationEngine::new(config.clone());
        let timetable = engine.allocate(&offerings);

        for entry in timetable.entries.iter().filter(|e| e.day.is_some()) {
            assert!(
                !config.breaks.iter().any(|b| entry.window.overlaps(b)),
                "entry {} intersects a break",
                entry.window
            );
        }
    }

    #[test]
    fn test_earliest_start_respected() {
        let offerings = vec![CourseOffering::new("Dr. Sari", "Algorithms", 2)
            .with_section("TI23101")
            .with_earliest_start(TimeOfDay::new(13, 0))
            .with_raw_times("13:00 - 18:00")];
        let mut engine = AllocationEngine::new(ScheduleConfig::default());
        let timetable = engine.allocate(&offerings);

        assert_eq!(timetable.entries[0].window, w(13, 0, 14, 40));
    }

    #[test]
    fn test_empty_input() {
        let mut engine = AllocationEngine::new(ScheduleConfig::default());
        let timetable = engine.allocate(&[]);
        assert_eq!(timetable.entry_count(), 0);
        assert!(timetable.failures.is_empty());
    }
}
