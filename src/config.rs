//! Scheduling policy configuration.
//!
//! Everything the allocator treats as policy rather than algorithm lives
//! here: the room catalog, the program → preferred-floor mapping, break
//! windows, session-duration and grid-step constants, per-day session caps,
//! and the late-evening online cutoff. The engine receives a
//! [`ScheduleConfig`] at construction and never hardcodes these values.
//!
//! Configs can be built in code, taken from [`ScheduleConfig::default`]
//! (the standard campus policy), or loaded from YAML. Times serialize as
//! minutes since midnight:
//!
//! ```yaml
//! minutes_per_credit: 50
//! grid_step_minutes: 10
//! online_cutoff: 1260          # 21:00
//! breaks:
//!   - { start: 720, end: 780 } # 12:00 - 13:00
//!   - { start: 1080, end: 1110 }
//! floor_preferences:
//!   TI: [3, 4]
//! ```
//!
//! Missing fields fall back to their defaults, so partial overrides are
//! accepted gracefully.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{Building, CohortKind, Floor, RoomCatalog, TimeOfDay, TimeWindow};

/// Failure to load a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The YAML is structurally invalid.
    #[error("invalid config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Static policy consumed by the allocation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Physical room inventory; building order is the resolver's iteration
    /// order.
    pub catalog: RoomCatalog,
    /// Program code → preferred floor levels. List order is preference
    /// order, not numeric order; the first listed floor wins.
    pub floor_preferences: HashMap<String, Vec<u8>>,
    /// Break windows no session may intersect.
    pub breaks: Vec<TimeWindow>,
    /// Session minutes per credit hour.
    pub minutes_per_credit: u16,
    /// Candidate-start step of the time grid, in minutes.
    pub grid_step_minutes: u16,
    /// Max physical sessions per day for a regular section.
    pub regular_daily_cap: usize,
    /// Max physical sessions per day for Saturday/Sunday/evening sections.
    pub intensive_daily_cap: usize,
    /// Sessions ending after this time are marked online even when a room
    /// was assigned.
    pub online_cutoff: TimeOfDay,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        let catalog = RoomCatalog::new()
            .with_building(
                Building::new("GD A")
                    .with_floor(Floor::numbered('A', 2, 8))
                    .with_floor(Floor::numbered('A', 3, 8))
                    .with_floor(Floor::numbered('A', 4, 8))
                    .with_floor(Floor::numbered('A', 5, 8)),
            )
            .with_building(
                Building::new("GD B")
                    .with_floor(Floor::numbered('B', 3, 5))
                    .with_floor(Floor::numbered('B', 4, 5))
                    .with_floor(Floor::numbered('B', 5, 5)),
            );

        let floor_preferences = [
            ("TI", vec![3, 4]),
            ("SI", vec![3, 4]),
            ("DK", vec![4, 5]),
            ("SD", vec![2, 3]),
            ("HK", vec![3, 4]),
            ("ME", vec![4, 5]),
            ("EL", vec![4, 5]),
            ("AKT", vec![2, 3]),
            ("MJN", vec![2, 3]),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        Self {
            catalog,
            floor_preferences,
            breaks: vec![
                TimeWindow::new(TimeOfDay::new(12, 0), TimeOfDay::new(13, 0)),
                TimeWindow::new(TimeOfDay::new(18, 0), TimeOfDay::new(18, 30)),
            ],
            minutes_per_credit: 50,
            grid_step_minutes: 10,
            regular_daily_cap: 3,
            intensive_daily_cap: 10,
            online_cutoff: TimeOfDay::new(21, 0),
        }
    }
}

impl ScheduleConfig {
    /// Preferred floor levels for a program, in preference order.
    ///
    /// Unknown programs get an empty list, which makes room resolution fail
    /// closed for them.
    pub fn preferred_floors(&self, program: &str) -> &[u8] {
        self.floor_preferences
            .get(program)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Per-day session cap for a cohort kind.
    #[inline]
    pub fn daily_cap(&self, cohort: CohortKind) -> usize {
        if cohort.is_intensive() {
            self.intensive_daily_cap
        } else {
            self.regular_daily_cap
        }
    }

    /// Parses a config from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        debug!(
            rooms = config.catalog.room_count(),
            programs = config.floor_preferences.len(),
            "schedule config parsed"
        );
        Ok(config)
    }

    /// Loads a config from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }
}
