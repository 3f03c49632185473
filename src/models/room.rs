//! Room catalog model.
//!
//! Rooms are static: a building owns floors, a floor owns an ordered room
//! list, and nothing is created or destroyed at runtime. Ordering is
//! load-bearing everywhere — buildings are tried in declared order, floors in
//! preference-policy order, rooms in catalog index order — so the catalog is
//! a tree of `Vec`s, not maps.

use serde::{Deserialize, Serialize};

/// A single physical room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room identifier, e.g. `A3-1`.
    pub id: String,
}

impl Room {
    /// Creates a room.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// One floor of a building with its rooms in catalog index order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    /// Floor level, as referenced by the preference policy.
    pub level: u8,
    /// Rooms in index order.
    pub rooms: Vec<Room>,
}

impl Floor {
    /// Creates an empty floor.
    pub fn new(level: u8) -> Self {
        Self {
            level,
            rooms: Vec::new(),
        }
    }

    /// Adds a room.
    pub fn with_room(mut self, id: impl Into<String>) -> Self {
        self.rooms.push(Room::new(id));
        self
    }

    /// Creates a floor with `count` rooms named `{letter}{level}-{i}`.
    pub fn numbered(letter: char, level: u8, count: usize) -> Self {
        let rooms = (1..=count)
            .map(|i| Room::new(format!("{letter}{level}-{i}")))
            .collect();
        Self { level, rooms }
    }
}

/// A building with floors in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    /// Building name, e.g. `GD A`.
    pub name: String,
    /// Floors in declared order.
    pub floors: Vec<Floor>,
}

impl Building {
    /// Creates an empty building.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            floors: Vec::new(),
        }
    }

    /// Adds a floor.
    pub fn with_floor(mut self, floor: Floor) -> Self {
        self.floors.push(floor);
        self
    }

    /// Looks up a floor by level.
    pub fn floor(&self, level: u8) -> Option<&Floor> {
        self.floors.iter().find(|f| f.level == level)
    }
}

/// The full static room catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomCatalog {
    /// Buildings in declared order; this is the resolver's outer iteration
    /// order.
    pub buildings: Vec<Building>,
}

impl RoomCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a building.
    pub fn with_building(mut self, building: Building) -> Self {
        self.buildings.push(building);
        self
    }

    /// Total number of rooms across all buildings.
    pub fn room_count(&self) -> usize {
        self.buildings
            .iter()
            .flat_map(|b| &b.floors)
            .map(|f| f.rooms.len())
            .sum()
    }
}
