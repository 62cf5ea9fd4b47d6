//! Time grid builder.
//!
//! Enumerates the finite set of bookable slots for a working week:
//! Monday through Friday, fixed-length slots between configured working
//! hours, with the lunch interval excluded. The enumeration order
//! (day-major, then time) is what makes the constrained allocator
//! deterministic, so it must not change.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::TimeSlot;

/// Working days: Monday (1) through Friday (5).
pub const WORKING_DAYS: [u8; 5] = [1, 2, 3, 4, 5];

/// Invalid grid configuration.
///
/// The only error the engine surfaces to callers; every scheduling
/// outcome short of this is reported as conflict data instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("working hours are empty: start hour {start} is not before end hour {end}")]
    EmptyWorkingHours { start: u8, end: u8 },
    #[error("slot length must be positive")]
    ZeroSlotLength,
    #[error("lunch interval is inverted: {0} is not before {1} (minutes since midnight)")]
    InvertedLunch(u16, u16),
}

/// Configuration for the weekly time grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// First bookable hour of the day (24h clock).
    pub start_hour: u8,
    /// Hour the working day ends (exclusive).
    pub end_hour: u8,
    /// Session length in minutes.
    pub slot_min: u16,
    /// Lunch start (minutes since midnight).
    pub lunch_start_min: u16,
    /// Lunch end (minutes since midnight).
    pub lunch_end_min: u16,
}

impl Default for GridConfig {
    /// 08:00-17:00 working day, 60-minute slots, lunch 12:00-13:00.
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 17,
            slot_min: 60,
            lunch_start_min: 12 * 60,
            lunch_end_min: 13 * 60,
        }
    }
}

impl GridConfig {
    /// Creates the default grid configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the working hours.
    pub fn with_hours(mut self, start_hour: u8, end_hour: u8) -> Self {
        self.start_hour = start_hour;
        self.end_hour = end_hour;
        self
    }

    /// Sets the slot length in minutes.
    pub fn with_slot_minutes(mut self, slot_min: u16) -> Self {
        self.slot_min = slot_min;
        self
    }

    /// Sets the excluded lunch interval (minutes since midnight).
    pub fn with_lunch(mut self, start_min: u16, end_min: u16) -> Self {
        self.lunch_start_min = start_min;
        self.lunch_end_min = end_min;
        self
    }

    /// Validates the configuration.
    ///
    /// Must pass before a run begins; the builders call it themselves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_hour >= self.end_hour {
            return Err(ConfigError::EmptyWorkingHours {
                start: self.start_hour,
                end: self.end_hour,
            });
        }
        if self.slot_min == 0 {
            return Err(ConfigError::ZeroSlotLength);
        }
        if self.lunch_start_min >= self.lunch_end_min {
            return Err(ConfigError::InvertedLunch(
                self.lunch_start_min,
                self.lunch_end_min,
            ));
        }
        Ok(())
    }

    /// Enumerates every bookable slot for the week, in scheduling order.
    ///
    /// Day-major: all of Monday's slots, then Tuesday's, and so on.
    /// Within a day, slots ascend by start time. Slots that would overlap
    /// the lunch interval are skipped. Deterministic and side-effect-free.
    pub fn build_slots(&self) -> Result<Vec<TimeSlot>, ConfigError> {
        self.validate()?;

        // Widened arithmetic: a slot length near u16::MAX must fall out
        // of the loop condition, not overflow. Hour values cap day_end
        // at 255 * 60, so the pushed bounds always fit back into u16.
        let day_start = u32::from(self.start_hour) * 60;
        let day_end = u32::from(self.end_hour) * 60;
        let slot_len = u32::from(self.slot_min);
        let lunch_start = u32::from(self.lunch_start_min);
        let lunch_end = u32::from(self.lunch_end_min);
        let mut slots = Vec::new();

        for &day in WORKING_DAYS.iter() {
            let mut start = day_start;
            while start + slot_len <= day_end {
                let end = start + slot_len;
                if start < lunch_end && lunch_start < end {
                    start = end;
                    continue;
                }
                slots.push(TimeSlot::new(day, start as u16, end as u16));
                start = end;
            }
        }

        Ok(slots)
    }
}
