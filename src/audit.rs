//! Post-hoc conflict auditing.
//!
//! Re-derives the double-booking invariants over a finished session list,
//! independently of whichever strategy produced it. A correctly run
//! constrained allocation never trips these checks, but externally
//! supplied or previously persisted schedules can. Findings are reported
//! exactly like allocation-time conflicts and never auto-corrected.

use std::collections::{BTreeMap, HashSet};

use crate::models::{Conflict, ConflictKind, ScheduledSession};

/// Scans a session list for teacher and room double-bookings.
///
/// Sessions are grouped by teacher (resp. room) and pairwise-checked for
/// same-day time overlap. Sessions without a teacher or room identity
/// (the credit-driven path) are skipped for that grouping. Duplicate
/// findings are reported once.
pub fn audit_sessions(sessions: &[ScheduledSession]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    let mut seen: HashSet<(ConflictKind, String)> = HashSet::new();

    let by_teacher = group_by(sessions, |s| s.teacher_id.as_deref());
    for (teacher_id, group) in by_teacher {
        for day in overlapping_days(&group) {
            push_unique(&mut conflicts, &mut seen, Conflict::teacher_double_booked(teacher_id, day));
        }
    }

    let by_room = group_by(sessions, |s| s.room_id.as_deref());
    for (room_id, group) in by_room {
        for day in overlapping_days(&group) {
            push_unique(&mut conflicts, &mut seen, Conflict::room_double_booked(room_id, day));
        }
    }

    conflicts
}

/// Groups sessions by a key, in key order for deterministic reporting.
fn group_by<'a, F>(
    sessions: &'a [ScheduledSession],
    key: F,
) -> BTreeMap<&'a str, Vec<&'a ScheduledSession>>
where
    F: Fn(&'a ScheduledSession) -> Option<&'a str>,
{
    let mut groups: BTreeMap<&str, Vec<&ScheduledSession>> = BTreeMap::new();
    for session in sessions {
        if let Some(k) = key(session) {
            groups.entry(k).or_default().push(session);
        }
    }
    groups
}

/// Days on which any two sessions in the group overlap.
fn overlapping_days(group: &[&ScheduledSession]) -> Vec<u8> {
    let mut days = Vec::new();
    for i in 0..group.len() {
        for j in (i + 1)..group.len() {
            if group[i].slot.overlaps(&group[j].slot) {
                days.push(group[i].slot.day);
            }
        }
    }
    days
}

fn push_unique(
    conflicts: &mut Vec<Conflict>,
    seen: &mut HashSet<(ConflictKind, String)>,
    conflict: Conflict,
) {
    if seen.insert((conflict.kind, conflict.message.clone())) {
        conflicts.push(conflict);
    }
}
