//! Time slots and scheduled sessions.
//!
//! A [`TimeSlot`] is a plain (day, start, end) value produced by the grid
//! builder; a [`ScheduledSession`] binds a slot to a subject and, where the
//! generating strategy knows them, a teacher, a room, and a class.
//! A [`Timetable`] is the full output of one generation run: the emitted
//! sessions plus any conflicts observed along the way.
//!
//! # Time Model
//! All times are minutes since midnight. Intervals are half-open:
//! `[start_min, end_min)`. Day indices follow the 0–6 convention
//! (0 = Sunday); the working grid only ever emits days 1–5.

use serde::{Deserialize, Serialize};

use super::Conflict;

/// A bookable time interval on one weekday.
///
/// Value type: not owned by any entity, produced fresh by the grid
/// builder each run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Day of week (0 = Sunday .. 6 = Saturday).
    pub day: u8,
    /// Start (minutes since midnight, inclusive).
    pub start_min: u16,
    /// End (minutes since midnight, exclusive).
    pub end_min: u16,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(day: u8, start_min: u16, end_min: u16) -> Self {
        Self {
            day,
            start_min,
            end_min,
        }
    }

    /// Slot length in minutes.
    #[inline]
    pub fn duration_min(&self) -> u16 {
        self.end_min.saturating_sub(self.start_min)
    }

    /// Whether two slots overlap.
    ///
    /// Half-open interval intersection, day-qualified: slots on different
    /// days never overlap, and back-to-back slots do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day && self.start_min < other.end_min && other.start_min < self.end_min
    }

    /// Formats the slot as `"HH:MM-HH:MM"`.
    pub fn label(&self) -> String {
        format!(
            "{}-{}",
            format_minutes(self.start_min),
            format_minutes(self.end_min)
        )
    }
}

/// Formats minutes-since-midnight as `"HH:MM"`.
pub fn format_minutes(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Parses an `"HH:MM"` string into minutes since midnight.
///
/// Returns `None` for anything that is not a well-formed 24-hour time.
/// External string times must pass through here before any comparison;
/// comparing raw strings is how ordering bugs creep in.
pub fn parse_minutes(time: &str) -> Option<u16> {
    let (h, m) = time.split_once(':')?;
    let hours: u16 = h.parse().ok()?;
    let mins: u16 = m.parse().ok()?;
    if hours > 23 || mins > 59 {
        return None;
    }
    Some(hours * 60 + mins)
}

/// One scheduled occurrence of a subject.
///
/// The constrained path fills in teacher, room, and class; the
/// credit-driven path knows none of those identities and leaves them unset.
/// Sessions are append-only within a run: a generator never edits a
/// previously emitted session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledSession {
    /// When the session takes place.
    pub slot: TimeSlot,
    /// Subject identifier (course name on the credit-driven path).
    pub subject_id: String,
    /// Assigned teacher, if the strategy resolves one.
    pub teacher_id: Option<String>,
    /// Assigned room, if the strategy resolves one.
    pub room_id: Option<String>,
    /// Class the session is scheduled for, if any.
    pub class_name: Option<String>,
}

impl ScheduledSession {
    /// Creates a session with only a subject bound.
    pub fn new(slot: TimeSlot, subject_id: impl Into<String>) -> Self {
        Self {
            slot,
            subject_id: subject_id.into(),
            teacher_id: None,
            room_id: None,
            class_name: None,
        }
    }

    /// Sets the assigned teacher.
    pub fn with_teacher(mut self, teacher_id: impl Into<String>) -> Self {
        self.teacher_id = Some(teacher_id.into());
        self
    }

    /// Sets the assigned room.
    pub fn with_room(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }

    /// Sets the class name.
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

/// The output of one generation run: sessions plus observed conflicts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// Scheduled sessions, in emission order.
    pub sessions: Vec<ScheduledSession>,
    /// Conflicts observed during generation, in emission order.
    pub conflicts: Vec<Conflict>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a session.
    pub fn add_session(&mut self, session: ScheduledSession) {
        self.sessions.push(session);
    }

    /// Appends a conflict.
    pub fn add_conflict(&mut self, conflict: Conflict) {
        self.conflicts.push(conflict);
    }

    /// Whether the run completed without any conflict.
    pub fn is_conflict_free(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Number of sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Sessions assigned to a teacher.
    pub fn sessions_for_teacher(&self, teacher_id: &str) -> Vec<&ScheduledSession> {
        self.sessions
            .iter()
            .filter(|s| s.teacher_id.as_deref() == Some(teacher_id))
            .collect()
    }

    /// Sessions assigned to a room.
    pub fn sessions_for_room(&self, room_id: &str) -> Vec<&ScheduledSession> {
        self.sessions
            .iter()
            .filter(|s| s.room_id.as_deref() == Some(room_id))
            .collect()
    }

    /// Sessions scheduled for a class.
    pub fn sessions_for_class(&self, class_name: &str) -> Vec<&ScheduledSession> {
        self.sessions
            .iter()
            .filter(|s| s.class_name.as_deref() == Some(class_name))
            .collect()
    }

    /// Number of sessions for a subject.
    pub fn subject_session_count(&self, subject_id: &str) -> usize {
        self.sessions
            .iter()
            .filter(|s| s.subject_id == subject_id)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Conflict;

    #[test]
    fn test_slot_duration() {
        let slot = TimeSlot::new(1, 480, 540);
        assert_eq!(slot.duration_min(), 60);
        assert_eq!(slot.label(), "08:00-09:00");
    }

    #[test]
    fn test_slot_overlap_same_day() {
        let a = TimeSlot::new(1, 480, 540);
        let b = TimeSlot::new(1, 510, 570);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_slot_no_overlap_back_to_back() {
        let a = TimeSlot::new(1, 480, 540);
        let b = TimeSlot::new(1, 540, 600);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_slot_no_overlap_different_days() {
        let a = TimeSlot::new(1, 480, 540);
        let b = TimeSlot::new(2, 480, 540);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("08:00"), Some(480));
        assert_eq!(parse_minutes("13:30"), Some(810));
        assert_eq!(parse_minutes("24:00"), None);
        assert_eq!(parse_minutes("12:60"), None);
        assert_eq!(parse_minutes("noon"), None);
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(480), "08:00");
        assert_eq!(format_minutes(785), "13:05");
    }

    #[test]
    fn test_session_builder() {
        let s = ScheduledSession::new(TimeSlot::new(1, 540, 600), "MATH")
            .with_teacher("T1")
            .with_room("R1")
            .with_class("10A");
        assert_eq!(s.subject_id, "MATH");
        assert_eq!(s.teacher_id.as_deref(), Some("T1"));
        assert_eq!(s.room_id.as_deref(), Some("R1"));
        assert_eq!(s.class_name.as_deref(), Some("10A"));
    }

    #[test]
    fn test_timetable_queries() {
        let mut t = Timetable::new();
        t.add_session(
            ScheduledSession::new(TimeSlot::new(1, 540, 600), "MATH")
                .with_teacher("T1")
                .with_room("R1")
                .with_class("10A"),
        );
        t.add_session(
            ScheduledSession::new(TimeSlot::new(2, 540, 600), "MATH")
                .with_teacher("T1")
                .with_room("R2")
                .with_class("10A"),
        );
        t.add_session(ScheduledSession::new(TimeSlot::new(3, 540, 600), "PHYS").with_teacher("T2"));

        assert_eq!(t.session_count(), 3);
        assert_eq!(t.sessions_for_teacher("T1").len(), 2);
        assert_eq!(t.sessions_for_room("R2").len(), 1);
        assert_eq!(t.sessions_for_class("10A").len(), 2);
        assert_eq!(t.subject_session_count("MATH"), 2);
        assert!(t.is_conflict_free());

        t.add_conflict(Conflict::missing_teacher("PHYS"));
        assert!(!t.is_conflict_free());
    }

    #[test]
    fn test_timetable_serde_round_trip() {
        let mut t = Timetable::new();
        t.add_session(
            ScheduledSession::new(TimeSlot::new(1, 540, 600), "MATH").with_teacher("T1"),
        );
        let json = serde_json::to_string(&t).unwrap();
        let back: Timetable = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sessions, t.sessions);
    }
}
