//! Occupancy ledger.
//!
//! The one piece of mutable state in a scheduling run: per day, per resource,
//! the set of booked intervals. Resources of all three kinds — lecturers,
//! class-sections, rooms — share the ledger under a [`ResourceKey`] that
//! partitions their namespaces, so a lecturer named `A3-1` can never collide
//! with the room `A3-1`.
//!
//! # Contract
//!
//! [`book`](OccupancyLedger::book) appends unconditionally. The engine must
//! verify [`is_free`](OccupancyLedger::is_free) for *every* key a placement
//! touches (lecturer, section, room) before booking *any* of them; the ledger
//! enforces no cross-key atomicity. There is no removal — corrections require
//! a fresh run.
//!
//! Intervals per key are kept as a start-sorted list, which is sufficient at
//! campus scale.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{TimeWindow, Weekday};

/// A bookable resource: one namespace, partitioned by kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKey {
    /// A lecturer, by name or identifier.
    Lecturer(String),
    /// A class-section, by code.
    Section(String),
    /// A room, by id.
    Room(String),
}

impl ResourceKey {
    /// Lecturer key.
    pub fn lecturer(id: impl Into<String>) -> Self {
        Self::Lecturer(id.into())
    }

    /// Section key.
    pub fn section(code: impl Into<String>) -> Self {
        Self::Section(code.into())
    }

    /// Room key.
    pub fn room(id: impl Into<String>) -> Self {
        Self::Room(id.into())
    }
}

/// Per-day, per-resource booked intervals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OccupancyLedger {
    bookings: HashMap<Weekday, HashMap<ResourceKey, Vec<TimeWindow>>>,
}

impl OccupancyLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `[window.start, window.end)` is free for a resource on a day.
    pub fn is_free(&self, day: Weekday, key: &ResourceKey, window: TimeWindow) -> bool {
        self.booked(day, key)
            .map(|intervals| !intervals.iter().any(|b| b.overlaps(&window)))
            .unwrap_or(true)
    }

    /// Books an interval for a resource on a day, keeping the list sorted by
    /// start time.
    ///
    /// Unconditional: the caller is responsible for having checked
    /// [`is_free`](Self::is_free) on every key touched by the placement.
    pub fn book(&mut self, day: Weekday, key: ResourceKey, window: TimeWindow) {
        let intervals = self
            .bookings
            .entry(day)
            .or_default()
            .entry(key)
            .or_default();
        let pos = intervals.partition_point(|b| b.start <= window.start);
        intervals.insert(pos, window);
    }

    /// Booked intervals for a resource on a day, sorted by start.
    pub fn bookings(&self, day: Weekday, key: &ResourceKey) -> &[TimeWindow] {
        self.booked(day, key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All keys with bookings on a day.
    pub fn keys_on(&self, day: Weekday) -> Vec<&ResourceKey> {
        self.bookings
            .get(&day)
            .map(|m| m.keys().collect())
            .unwrap_or_default()
    }

    fn booked(&self, day: Weekday, key: &ResourceKey) -> Option<&Vec<TimeWindow>> {
        self.bookings.get(&day).and_then(|m| m.get(key))
    }
}
