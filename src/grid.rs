//! Time-grid primitives.
//!
//! Discretizes a day window into fixed-step candidate instants and answers
//! break-intersection queries. Pure functions; interval overlap itself lives
//! on [`TimeWindow`](crate::models::TimeWindow).

use crate::models::{TimeOfDay, TimeWindow};

/// Candidate start instants over `window`, ascending and step-aligned from
/// `window.start`, excluding `window.end` itself.
///
/// A zero step yields no instants.
pub fn instants(window: TimeWindow, step_minutes: u16) -> Vec<TimeOfDay> {
    if step_minutes == 0 {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut t = window.start;
    while t < window.end {
        out.push(t);
        t = t.plus_minutes(step_minutes);
    }
    out
}

/// Whether an interval intersects any configured break window.
pub fn in_break(window: &TimeWindow, breaks: &[TimeWindow]) -> bool {
    breaks.iter().any(|b| window.overlaps(b))
}
