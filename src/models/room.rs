//! Room model.
//!
//! Rooms host sessions. A room qualifies for a subject when its equipment
//! tags cover every tag the subject requires.

use serde::{Deserialize, Serialize};

/// A room that can host sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Seating capacity.
    pub capacity: u32,
    /// Equipment tags this room provides.
    pub equipment: Vec<String>,
}

impl Room {
    /// Creates a room with a default capacity of 30.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity: 30,
            equipment: Vec::new(),
        }
    }

    /// Sets the room name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the seating capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Adds an equipment tag.
    pub fn with_equipment(mut self, tag: impl Into<String>) -> Self {
        self.equipment.push(tag.into());
        self
    }

    /// Whether this room provides every required tag.
    pub fn satisfies(&self, requirements: &[String]) -> bool {
        requirements
            .iter()
            .all(|req| self.equipment.iter().any(|e| e == req))
    }
}
