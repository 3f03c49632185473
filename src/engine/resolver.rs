//! Room resolution.
//!
//! Given a section and a settled interval, picks the first free room under
//! the fixed preference order: buildings in catalog order, then the
//! program's preferred floors in policy order (first listed wins — the list
//! is not sorted), then rooms in catalog index order.
//!
//! Fails closed: a section without a program prefix, or whose program is
//! unknown to the preference policy, gets no room. Resolution never books;
//! the engine commits separately.

use crate::config::ScheduleConfig;
use crate::ledger::{OccupancyLedger, ResourceKey};
use crate::models::{ClassSection, Room, TimeWindow, Weekday};

/// Returns the first free room for the interval, or `None` when every room
/// on every preferred floor of every building is taken.
pub fn find_room<'a>(
    section: &ClassSection,
    day: Weekday,
    window: TimeWindow,
    ledger: &OccupancyLedger,
    config: &'a ScheduleConfig,
) -> Option<&'a Room> {
    let program = section.program.as_deref()?;
    let preferred = config.preferred_floors(program);

    for building in &config.catalog.buildings {
        for &level in preferred {
            let Some(floor) = building.floor(level) else {
                continue;
            };
            for room in &floor.rooms {
                if ledger.is_free(day, &ResourceKey::room(&room.id), window) {
                    return Some(room);
                }
            }
        }
    }
    None
}
