//! Subject (course) model.
//!
//! A subject is a unit of instruction: a name, a weekly instruction
//! duration, and the equipment a room must provide to host it.
//! Subjects are immutable for the duration of a generation run.

use serde::{Deserialize, Serialize};

/// A subject to be scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Display name (matched against teacher subject lists).
    pub name: String,
    /// Weekly instruction time in minutes.
    pub duration_min: u32,
    /// Equipment tags a room must all provide.
    pub room_requirements: Vec<String>,
    /// Prerequisite subject names. Informational only; the engine
    /// does not order sessions by prerequisites.
    pub prerequisites: Vec<String>,
}

impl Subject {
    /// Creates a subject with a default 60-minute weekly duration.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration_min: 60,
            room_requirements: Vec::new(),
            prerequisites: Vec::new(),
        }
    }

    /// Sets the weekly instruction duration (minutes).
    pub fn with_duration(mut self, duration_min: u32) -> Self {
        self.duration_min = duration_min;
        self
    }

    /// Adds a required room equipment tag.
    pub fn with_room_requirement(mut self, tag: impl Into<String>) -> Self {
        self.room_requirements.push(tag.into());
        self
    }

    /// Adds a prerequisite subject name.
    pub fn with_prerequisite(mut self, name: impl Into<String>) -> Self {
        self.prerequisites.push(name.into());
        self
    }

    /// Weekly sessions required: duration rounded up to whole hours.
    pub fn required_sessions(&self) -> u32 {
        self.duration_min.div_ceil(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_builder() {
        let s = Subject::new("MATH", "Mathematics")
            .with_duration(120)
            .with_room_requirement("whiteboard")
            .with_prerequisite("Arithmetic");

        assert_eq!(s.id, "MATH");
        assert_eq!(s.name, "Mathematics");
        assert_eq!(s.duration_min, 120);
        assert_eq!(s.room_requirements, vec!["whiteboard"]);
        assert_eq!(s.prerequisites, vec!["Arithmetic"]);
    }

    #[test]
    fn test_required_sessions_rounds_up() {
        assert_eq!(Subject::new("A", "A").with_duration(60).required_sessions(), 1);
        assert_eq!(Subject::new("A", "A").with_duration(90).required_sessions(), 2);
        assert_eq!(Subject::new("A", "A").with_duration(180).required_sessions(), 3);
        assert_eq!(Subject::new("A", "A").with_duration(0).required_sessions(), 0);
    }
}
