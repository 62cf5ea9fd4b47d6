//! Teacher model and availability windows.
//!
//! A teacher declares the subjects they can teach, weekly availability
//! windows, and workload ceilings. Teachers are mutated only by the
//! surrounding system between runs, never during one.

use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// A weekly recurring availability window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    /// Day of week (0 = Sunday .. 6 = Saturday).
    pub day: u8,
    /// Window start (minutes since midnight, inclusive).
    pub start_min: u16,
    /// Window end (minutes since midnight, exclusive).
    pub end_min: u16,
}

impl AvailabilityWindow {
    /// Creates a new availability window.
    pub fn new(day: u8, start_min: u16, end_min: u16) -> Self {
        Self {
            day,
            start_min,
            end_min,
        }
    }

    /// Whether a slot falls entirely inside this window, same day.
    #[inline]
    pub fn contains(&self, slot: &TimeSlot) -> bool {
        self.day == slot.day && slot.start_min >= self.start_min && slot.end_min <= self.end_min
    }
}

/// A teacher who can be assigned to sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Names of subjects this teacher can teach.
    pub subjects: Vec<String>,
    /// Weekly availability windows, in declaration order.
    pub availability: Vec<AvailabilityWindow>,
    /// Maximum teaching hours per day.
    pub max_hours_per_day: u32,
    /// Maximum teaching hours per week.
    pub max_hours_per_week: u32,
}

impl Teacher {
    /// Creates a teacher with default workload ceilings (8h/day, 40h/week).
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            subjects: Vec::new(),
            availability: Vec::new(),
            max_hours_per_day: 8,
            max_hours_per_week: 40,
        }
    }

    /// Sets the teacher name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a teachable subject name.
    pub fn with_subject(mut self, subject_name: impl Into<String>) -> Self {
        self.subjects.push(subject_name.into());
        self
    }

    /// Adds an availability window.
    pub fn with_availability(mut self, day: u8, start_min: u16, end_min: u16) -> Self {
        self.availability
            .push(AvailabilityWindow::new(day, start_min, end_min));
        self
    }

    /// Sets the daily hour ceiling.
    pub fn with_max_hours_per_day(mut self, hours: u32) -> Self {
        self.max_hours_per_day = hours;
        self
    }

    /// Sets the weekly hour ceiling.
    pub fn with_max_hours_per_week(mut self, hours: u32) -> Self {
        self.max_hours_per_week = hours;
        self
    }

    /// Whether this teacher can teach the named subject.
    pub fn teaches(&self, subject_name: &str) -> bool {
        self.subjects.iter().any(|s| s == subject_name)
    }

    /// Whether a slot falls entirely inside one of this teacher's windows.
    pub fn is_available_for(&self, slot: &TimeSlot) -> bool {
        self.availability.iter().any(|w| w.contains(slot))
    }
}
