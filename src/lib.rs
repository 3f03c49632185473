//! University course timetabling.
//!
//! Assigns course sections to (day, time-window, room) triples under
//! per-lecturer availability, cohort rules, and room-preference policy. The
//! allocator is a single-pass first-fit greedy: it finds the earliest
//! feasible slot per section, resolves a room by fixed preference order, and
//! commits bookings to an occupancy ledger. Sections with no feasible
//! physical placement degrade to an online fallback instead of failing the
//! run.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `CourseOffering`, `ClassSection`, `Room`,
//!   `TimeWindow`, `Timetable`
//! - **`config`**: Static policy — room catalog, floor preferences, breaks,
//!   caps, durations
//! - **`grid`**: Time discretization and break tests
//! - **`ledger`**: Per-day, per-resource booked intervals
//! - **`engine`**: Slot search, room resolution, the allocation engine, KPIs
//! - **`roster`**: Raw-row parsing and the adapter seams (`RosterSource`,
//!   `TimetableSink`)
//!
//! # Architecture
//!
//! Spreadsheet I/O lives behind the `roster` traits; the core is pure
//! in-memory allocation. All shared mutable state is the
//! [`OccupancyLedger`](ledger::OccupancyLedger), written only by the engine
//! after a successful check of every resource key a placement touches.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent Research Directions in Automated Timetabling"

pub mod config;
pub mod engine;
pub mod grid;
pub mod ledger;
pub mod models;
pub mod roster;
