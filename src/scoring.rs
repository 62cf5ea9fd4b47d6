//! Workload and usage scoring.
//!
//! Tie-breaking scores for the constrained allocator: teachers are
//! preferred by lowest workload ratio, rooms by lowest usage count.
//! Both are recomputed from the accumulating session list at every
//! candidate evaluation; the contract is recomputation, not caching,
//! because each score depends on every prior decision in the run.

use crate::models::{Room, ScheduledSession, Teacher};

/// Workload ratio for a teacher: assigned sessions this run divided by
/// the weekly hour ceiling.
///
/// Each session counts as one hour regardless of its true duration.
/// That approximation is part of the contract — callers must not
/// substitute minute-accurate accounting.
///
/// A ratio of 1.0 or more means the teacher is at their weekly ceiling.
/// A zero ceiling scores as infinitely loaded.
pub fn teacher_load(teacher: &Teacher, sessions: &[ScheduledSession]) -> f64 {
    if teacher.max_hours_per_week == 0 {
        return f64::INFINITY;
    }
    let assigned = sessions
        .iter()
        .filter(|s| s.teacher_id.as_deref() == Some(teacher.id.as_str()))
        .count();
    assigned as f64 / f64::from(teacher.max_hours_per_week)
}

/// Number of sessions already assigned to a room this run.
pub fn room_usage(room: &Room, sessions: &[ScheduledSession]) -> usize {
    sessions
        .iter()
        .filter(|s| s.room_id.as_deref() == Some(room.id.as_str()))
        .count()
}
