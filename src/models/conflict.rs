//! Conflict model.
//!
//! A conflict records a placement the engine could not fully satisfy, or a
//! double-booking found when auditing an existing schedule. Conflicts are
//! observations, never errors: generation always runs to completion and
//! accumulates them in order.
//!
//! Each conflict kind carries a fixed list of suggested remedies. The
//! engine never applies one — resolution is an operator's choice.

use serde::{Deserialize, Serialize};

/// Classification of scheduling conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// No qualifying teacher, or a teacher double-booked.
    TeacherConflict,
    /// No suitable room, or a room double-booked.
    RoomConflict,
    /// Students required in two places at once.
    StudentConflict,
    /// The time grid could not accommodate all required sessions.
    TimeConflict,
}

/// Conflict severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A reported scheduling conflict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// Conflict classification.
    pub kind: ConflictKind,
    /// Human-readable description.
    pub message: String,
    /// How urgently an operator should act on it.
    pub severity: Severity,
}

impl Conflict {
    /// Creates a conflict.
    pub fn new(kind: ConflictKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            severity,
        }
    }

    /// Structural unsatisfiability: no teacher qualifies for a subject.
    pub fn missing_teacher(subject_name: &str) -> Self {
        Self::new(
            ConflictKind::TeacherConflict,
            Severity::High,
            format!("No available teacher for subject: {subject_name}"),
        )
    }

    /// Structural unsatisfiability: no room meets a subject's requirements.
    pub fn missing_room(subject_name: &str) -> Self {
        Self::new(
            ConflictKind::RoomConflict,
            Severity::High,
            format!("No suitable room for subject: {subject_name}"),
        )
    }

    /// Partial unsatisfiability: the grid ran out before all required
    /// sessions were placed.
    pub fn session_shortfall(subject_name: &str, assigned: u32, required: u32) -> Self {
        Self::new(
            ConflictKind::TimeConflict,
            Severity::Medium,
            format!(
                "Could not assign all required slots for {subject_name}. \
                 Assigned {assigned}/{required}"
            ),
        )
    }

    /// Credit-driven placement ran out of free days for a course.
    pub fn day_shortfall(course_name: &str, placed: usize, needed: usize) -> Self {
        Self::new(
            ConflictKind::TimeConflict,
            Severity::Low,
            format!("Only placed {placed}/{needed} weekly sessions for {course_name}: no free day remains"),
        )
    }

    /// Post-hoc audit finding: a teacher is booked twice at once.
    pub fn teacher_double_booked(teacher_id: &str, day: u8) -> Self {
        Self::new(
            ConflictKind::TeacherConflict,
            Severity::High,
            format!("Teacher {teacher_id} double-booked on day {day}"),
        )
    }

    /// Post-hoc audit finding: a room is booked twice at once.
    pub fn room_double_booked(room_id: &str, day: u8) -> Self {
        Self::new(
            ConflictKind::RoomConflict,
            Severity::High,
            format!("Room {room_id} double-booked on day {day}"),
        )
    }

    /// Fixed remedy list for this conflict's kind.
    pub fn suggested_remedies(&self) -> &'static [&'static str] {
        self.kind.suggested_remedies()
    }
}

impl ConflictKind {
    /// Fixed, non-computed remedy suggestions, presented to an operator.
    pub fn suggested_remedies(self) -> &'static [&'static str] {
        match self {
            ConflictKind::TeacherConflict => &[
                "Assign a different teacher to one of the conflicting classes",
                "Reschedule one of the classes to a different time slot",
                "Split the class into smaller groups with different teachers",
            ],
            ConflictKind::RoomConflict => &[
                "Assign a different room to one of the conflicting classes",
                "Reschedule one of the classes to a different time slot",
                "Use a larger room that can accommodate both classes",
            ],
            ConflictKind::StudentConflict => &[
                "Reschedule one of the classes to a different time slot",
                "Split the class into smaller groups",
                "Assign different students to different class sections",
            ],
            ConflictKind::TimeConflict => &[
                "Adjust the time slots to avoid overlap",
                "Reduce the duration of one of the classes",
                "Move one of the classes to a different day",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_severities() {
        assert_eq!(Conflict::missing_teacher("Math").severity, Severity::High);
        assert_eq!(Conflict::missing_room("Math").severity, Severity::High);
        assert_eq!(
            Conflict::session_shortfall("Math", 1, 3).severity,
            Severity::Medium
        );
        assert_eq!(Conflict::day_shortfall("Math", 4, 5).severity, Severity::Low);
    }

    #[test]
    fn test_shortfall_message_counts() {
        let c = Conflict::session_shortfall("Mathematics", 1, 3);
        assert_eq!(c.kind, ConflictKind::TimeConflict);
        assert!(c.message.contains("1/3"));
        assert!(c.message.contains("Mathematics"));
    }

    #[test]
    fn test_every_kind_has_remedies() {
        for kind in [
            ConflictKind::TeacherConflict,
            ConflictKind::RoomConflict,
            ConflictKind::StudentConflict,
            ConflictKind::TimeConflict,
        ] {
            assert!(!kind.suggested_remedies().is_empty());
        }
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn test_serde_kind_names() {
        let c = Conflict::missing_teacher("Math");
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("teacher_conflict"));
        assert!(json.contains("high"));
    }
}
