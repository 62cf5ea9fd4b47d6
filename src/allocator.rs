//! Entity-constrained greedy allocator.
//!
//! # Algorithm
//!
//! 1. For each class, required subjects = union of its students' subject
//!    lists, intersected with the catalog, in catalog order.
//! 2. For each required subject, filter teachers by capability and rooms
//!    by equipment; a subject with no candidates is skipped with a
//!    high-severity conflict.
//! 3. Walk the time grid once, in grid order, assigning the least-loaded
//!    eligible teacher and least-used free room per slot until the
//!    subject's required session count is met.
//! 4. A shortfall leaves the partial result in place and records a
//!    medium-severity conflict.
//!
//! Single greedy pass: no backtracking, no re-ordering once begun.
//! Output is deterministic for a fixed catalog ordering and grid ordering.
//!
//! # Complexity
//! O(classes * subjects * slots * (teachers + rooms) * sessions-so-far).

use log::{debug, info, warn};
use std::collections::HashSet;

use crate::grid::{ConfigError, GridConfig};
use crate::models::{
    ClassGroup, Conflict, Room, ScheduledSession, Subject, Teacher, TimeSlot, Timetable,
};
use crate::scoring::{room_usage, teacher_load};

/// Greedy timetable generator over a full entity catalog.
///
/// # Example
///
/// ```
/// use classgrid::allocator::ConstrainedAllocator;
/// use classgrid::models::{ClassGroup, Room, Student, Subject, Teacher};
///
/// let subjects = vec![Subject::new("MATH", "Mathematics").with_room_requirement("whiteboard")];
/// let teachers = vec![Teacher::new("T1")
///     .with_subject("Mathematics")
///     .with_availability(1, 480, 1020)];
/// let rooms = vec![Room::new("R1").with_equipment("whiteboard")];
/// let groups = vec![ClassGroup::new("10A")
///     .with_student(Student::new("S1", "10A").with_subject("Mathematics"))];
///
/// let timetable = ConstrainedAllocator::new()
///     .generate(&groups, &subjects, &teachers, &rooms)
///     .unwrap();
/// assert_eq!(timetable.session_count(), 1);
/// assert!(timetable.is_conflict_free());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConstrainedAllocator {
    grid: GridConfig,
}

impl ConstrainedAllocator {
    /// Creates an allocator with the default weekly grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the grid configuration.
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    /// Generates a timetable for the given classes.
    ///
    /// The catalogs are an immutable snapshot for the duration of the
    /// run. Unsatisfiable placements never abort generation; they are
    /// recorded as conflicts on the returned timetable. The only error
    /// is an invalid grid configuration.
    pub fn generate(
        &self,
        groups: &[ClassGroup],
        subjects: &[Subject],
        teachers: &[Teacher],
        rooms: &[Room],
    ) -> Result<Timetable, ConfigError> {
        let slots = self.grid.build_slots()?;
        let mut timetable = Timetable::new();

        info!(
            "generating timetable: {} classes, {} subjects, {} teachers, {} rooms, {} slots",
            groups.len(),
            subjects.len(),
            teachers.len(),
            rooms.len(),
            slots.len()
        );

        for group in groups {
            for subject in required_subjects(group, subjects) {
                self.assign_subject(subject, teachers, rooms, &slots, &group.name, &mut timetable);
            }
        }

        info!(
            "generation finished: {} sessions, {} conflicts",
            timetable.session_count(),
            timetable.conflicts.len()
        );
        Ok(timetable)
    }

    /// Walks the grid once for one subject of one class.
    fn assign_subject(
        &self,
        subject: &Subject,
        teachers: &[Teacher],
        rooms: &[Room],
        slots: &[TimeSlot],
        class_name: &str,
        timetable: &mut Timetable,
    ) {
        let candidate_teachers: Vec<&Teacher> =
            teachers.iter().filter(|t| t.teaches(&subject.name)).collect();
        if candidate_teachers.is_empty() {
            warn!("no teacher qualifies for subject {}", subject.name);
            timetable.add_conflict(Conflict::missing_teacher(&subject.name));
            return;
        }

        let candidate_rooms: Vec<&Room> = rooms
            .iter()
            .filter(|r| r.satisfies(&subject.room_requirements))
            .collect();
        if candidate_rooms.is_empty() {
            warn!("no room satisfies requirements of subject {}", subject.name);
            timetable.add_conflict(Conflict::missing_room(&subject.name));
            return;
        }

        let required = subject.required_sessions();
        let mut assigned = 0u32;

        for slot in slots {
            if assigned >= required {
                break;
            }

            let Some(teacher) = pick_teacher(&candidate_teachers, slot, &timetable.sessions)
            else {
                continue;
            };
            let Some(room) = pick_room(&candidate_rooms, slot, &timetable.sessions) else {
                continue;
            };

            debug!(
                "assigned {} to {} with {} in {} on day {} {}",
                subject.name,
                class_name,
                teacher.id,
                room.id,
                slot.day,
                slot.label()
            );
            timetable.add_session(
                ScheduledSession::new(*slot, &subject.id)
                    .with_teacher(&teacher.id)
                    .with_room(&room.id)
                    .with_class(class_name),
            );
            assigned += 1;
        }

        if assigned < required {
            warn!(
                "grid exhausted for {}: assigned {}/{}",
                subject.name, assigned, required
            );
            timetable.add_conflict(Conflict::session_shortfall(&subject.name, assigned, required));
        }
    }
}

/// Picks the least-loaded candidate teacher who is available for the
/// slot, has no overlapping session this run, and is under their weekly
/// ceiling. Ties go to the earliest candidate in catalog order.
fn pick_teacher<'a>(
    candidates: &[&'a Teacher],
    slot: &TimeSlot,
    sessions: &[ScheduledSession],
) -> Option<&'a Teacher> {
    let mut best: Option<(&Teacher, f64)> = None;
    for &teacher in candidates {
        if !teacher.is_available_for(slot) || is_teacher_busy(teacher, slot, sessions) {
            continue;
        }
        let load = teacher_load(teacher, sessions);
        if load >= 1.0 {
            continue;
        }
        // Strict comparison keeps the first candidate on ties.
        if best.map_or(true, |(_, b)| load < b) {
            best = Some((teacher, load));
        }
    }
    best.map(|(t, _)| t)
}

/// Picks the least-used candidate room with no overlapping session this
/// run. Ties go to the earliest candidate in catalog order.
fn pick_room<'a>(
    candidates: &[&'a Room],
    slot: &TimeSlot,
    sessions: &[ScheduledSession],
) -> Option<&'a Room> {
    let mut best: Option<(&Room, usize)> = None;
    for &room in candidates {
        if is_room_busy(room, slot, sessions) {
            continue;
        }
        let usage = room_usage(room, sessions);
        if best.map_or(true, |(_, b)| usage < b) {
            best = Some((room, usage));
        }
    }
    best.map(|(r, _)| r)
}

fn is_teacher_busy(teacher: &Teacher, slot: &TimeSlot, sessions: &[ScheduledSession]) -> bool {
    sessions.iter().any(|s| {
        s.teacher_id.as_deref() == Some(teacher.id.as_str()) && s.slot.overlaps(slot)
    })
}

fn is_room_busy(room: &Room, slot: &TimeSlot, sessions: &[ScheduledSession]) -> bool {
    sessions
        .iter()
        .any(|s| s.room_id.as_deref() == Some(room.id.as_str()) && s.slot.overlaps(slot))
}

/// Required subjects of a group resolved against the catalog, in
/// catalog order. Catalog order decides subject processing order, so
/// the allocation result is stable for a stable catalog. Also useful
/// to callers that want to preview demand before a run.
pub fn required_subjects<'a>(group: &ClassGroup, subjects: &'a [Subject]) -> Vec<&'a Subject> {
    let wanted: HashSet<&str> = group.required_subject_names();
    subjects
        .iter()
        .filter(|s| wanted.contains(s.name.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::audit_sessions;
    use crate::models::{ConflictKind, Severity, Student};

    fn all_week_teacher(id: &str, subject: &str) -> Teacher {
        let mut t = Teacher::new(id).with_subject(subject);
        for day in 1..=5 {
            t = t.with_availability(day, 480, 1020);
        }
        t
    }

    fn math_group() -> ClassGroup {
        ClassGroup::new("10A")
            .with_student(Student::new("S1", "10A").with_subject("Mathematics"))
    }

    #[test]
    fn test_single_subject_single_session() {
        // Scenario A: one qualified teacher, one suitable room.
        let subjects =
            vec![Subject::new("MATH", "Mathematics").with_room_requirement("whiteboard")];
        let teachers = vec![all_week_teacher("T1", "Mathematics")];
        let rooms = vec![Room::new("R1").with_equipment("whiteboard")];

        let timetable = ConstrainedAllocator::new()
            .generate(&[math_group()], &subjects, &teachers, &rooms)
            .unwrap();

        assert_eq!(timetable.session_count(), 1);
        assert!(timetable.is_conflict_free());
        let s = &timetable.sessions[0];
        assert_eq!(s.teacher_id.as_deref(), Some("T1"));
        assert_eq!(s.room_id.as_deref(), Some("R1"));
        assert_eq!(s.class_name.as_deref(), Some("10A"));
    }

    #[test]
    fn test_no_qualifying_teacher() {
        let subjects = vec![Subject::new("MATH", "Mathematics")];
        let teachers = vec![all_week_teacher("T1", "Physics")];
        let rooms = vec![Room::new("R1")];

        let timetable = ConstrainedAllocator::new()
            .generate(&[math_group()], &subjects, &teachers, &rooms)
            .unwrap();

        assert_eq!(timetable.session_count(), 0);
        assert_eq!(timetable.conflicts.len(), 1);
        let c = &timetable.conflicts[0];
        assert_eq!(c.kind, ConflictKind::TeacherConflict);
        assert_eq!(c.severity, Severity::High);
        assert!(c.message.contains("Mathematics"));
    }

    #[test]
    fn test_no_suitable_room() {
        // Scenario B: required tag no room has.
        let subjects =
            vec![Subject::new("CHEM", "Chemistry").with_room_requirement("fume_hood")];
        let teachers = vec![all_week_teacher("T1", "Chemistry")];
        let rooms = vec![Room::new("R1").with_equipment("whiteboard")];
        let group = ClassGroup::new("10A")
            .with_student(Student::new("S1", "10A").with_subject("Chemistry"));

        let timetable = ConstrainedAllocator::new()
            .generate(&[group], &subjects, &teachers, &rooms)
            .unwrap();

        assert_eq!(timetable.session_count(), 0);
        assert_eq!(timetable.conflicts.len(), 1);
        let c = &timetable.conflicts[0];
        assert_eq!(c.kind, ConflictKind::RoomConflict);
        assert_eq!(c.severity, Severity::High);
        assert!(c.message.contains("Chemistry"));
    }

    #[test]
    fn test_grid_exhaustion_reports_shortfall() {
        // Scenario C: teacher only available Monday 09:00-10:00 but the
        // subject needs 3 weekly sessions.
        let subjects = vec![Subject::new("MATH", "Mathematics").with_duration(180)];
        let teachers = vec![Teacher::new("T1")
            .with_subject("Mathematics")
            .with_availability(1, 540, 600)];
        let rooms = vec![Room::new("R1")];

        let timetable = ConstrainedAllocator::new()
            .generate(&[math_group()], &subjects, &teachers, &rooms)
            .unwrap();

        assert_eq!(timetable.session_count(), 1);
        assert_eq!(timetable.conflicts.len(), 1);
        let c = &timetable.conflicts[0];
        assert_eq!(c.kind, ConflictKind::TimeConflict);
        assert_eq!(c.severity, Severity::Medium);
        assert!(c.message.contains("1/3"));
    }

    #[test]
    fn test_no_double_booking_across_classes() {
        // Two classes need the same subject from the same single teacher.
        let subjects = vec![Subject::new("MATH", "Mathematics").with_duration(120)];
        let teachers = vec![all_week_teacher("T1", "Mathematics")];
        let rooms = vec![Room::new("R1"), Room::new("R2")];
        let groups = vec![
            ClassGroup::new("10A")
                .with_student(Student::new("S1", "10A").with_subject("Mathematics")),
            ClassGroup::new("10B")
                .with_student(Student::new("S2", "10B").with_subject("Mathematics")),
        ];

        let timetable = ConstrainedAllocator::new()
            .generate(&groups, &subjects, &teachers, &rooms)
            .unwrap();

        assert_eq!(timetable.session_count(), 4);
        assert!(audit_sessions(&timetable.sessions).is_empty());
    }

    #[test]
    fn test_least_loaded_teacher_preferred() {
        // T1 absorbs the first subject's sessions; the second subject
        // should then flow to T2 even though T1 is listed first.
        let subjects = vec![
            Subject::new("ALG", "Algebra").with_duration(60),
            Subject::new("GEO", "Geometry").with_duration(60),
        ];
        let teachers = vec![
            all_week_teacher("T1", "Algebra").with_subject("Geometry"),
            all_week_teacher("T2", "Algebra").with_subject("Geometry"),
        ];
        let rooms = vec![Room::new("R1"), Room::new("R2")];
        let group = ClassGroup::new("10A").with_student(
            Student::new("S1", "10A")
                .with_subject("Algebra")
                .with_subject("Geometry"),
        );

        let timetable = ConstrainedAllocator::new()
            .generate(&[group], &subjects, &teachers, &rooms)
            .unwrap();

        assert_eq!(timetable.session_count(), 2);
        assert_eq!(timetable.sessions[0].teacher_id.as_deref(), Some("T1"));
        assert_eq!(timetable.sessions[1].teacher_id.as_deref(), Some("T2"));
    }

    #[test]
    fn test_weekly_ceiling_is_enforced_at_assignment() {
        // Ceiling of 2 weekly hours caps a 4-session subject at 2.
        let subjects = vec![Subject::new("MATH", "Mathematics").with_duration(240)];
        let teachers = vec![all_week_teacher("T1", "Mathematics").with_max_hours_per_week(2)];
        let rooms = vec![Room::new("R1")];

        let timetable = ConstrainedAllocator::new()
            .generate(&[math_group()], &subjects, &teachers, &rooms)
            .unwrap();

        assert_eq!(timetable.session_count(), 2);
        assert_eq!(timetable.conflicts.len(), 1);
        assert!(timetable.conflicts[0].message.contains("2/4"));
    }

    #[test]
    fn test_deterministic_for_fixed_catalogs() {
        let subjects = vec![
            Subject::new("MATH", "Mathematics").with_duration(180),
            Subject::new("PHYS", "Physics").with_duration(120),
        ];
        let teachers = vec![
            all_week_teacher("T1", "Mathematics").with_subject("Physics"),
            all_week_teacher("T2", "Mathematics"),
        ];
        let rooms = vec![Room::new("R1"), Room::new("R2")];
        let group = ClassGroup::new("10A").with_student(
            Student::new("S1", "10A")
                .with_subject("Mathematics")
                .with_subject("Physics"),
        );

        let allocator = ConstrainedAllocator::new();
        let a = allocator.generate(std::slice::from_ref(&group), &subjects, &teachers, &rooms).unwrap();
        let b = allocator.generate(std::slice::from_ref(&group), &subjects, &teachers, &rooms).unwrap();
        assert_eq!(a.sessions, b.sessions);
        assert_eq!(a.conflicts, b.conflicts);
    }

    #[test]
    fn test_sessions_use_grid_intervals_only() {
        let grid = GridConfig::default();
        let valid: Vec<TimeSlot> = grid.build_slots().unwrap();

        let subjects = vec![Subject::new("MATH", "Mathematics").with_duration(300)];
        let teachers = vec![all_week_teacher("T1", "Mathematics")];
        let rooms = vec![Room::new("R1")];

        let timetable = ConstrainedAllocator::new()
            .with_grid(grid)
            .generate(&[math_group()], &subjects, &teachers, &rooms)
            .unwrap();

        assert_eq!(timetable.session_count(), 5);
        for s in &timetable.sessions {
            assert!(valid.contains(&s.slot));
        }
    }

    #[test]
    fn test_empty_inputs_yield_empty_result() {
        let timetable = ConstrainedAllocator::new().generate(&[], &[], &[], &[]).unwrap();
        assert_eq!(timetable.session_count(), 0);
        assert!(timetable.is_conflict_free());
    }

    #[test]
    fn test_invalid_grid_is_an_error() {
        let result = ConstrainedAllocator::new()
            .with_grid(GridConfig::new().with_hours(17, 8))
            .generate(&[], &[], &[], &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_processes_subjects_in_catalog_order() {
        // Enrollment order is Chemistry-then-Algebra; emission must
        // still follow the catalog.
        let subjects = vec![Subject::new("A", "Algebra"), Subject::new("C", "Chemistry")];
        let teachers = vec![all_week_teacher("T1", "Algebra").with_subject("Chemistry")];
        let rooms = vec![Room::new("R1")];
        let group = ClassGroup::new("10A").with_student(
            Student::new("S1", "10A")
                .with_subject("Chemistry")
                .with_subject("Algebra"),
        );

        let timetable = ConstrainedAllocator::new()
            .generate(&[group], &subjects, &teachers, &rooms)
            .unwrap();

        assert_eq!(timetable.session_count(), 2);
        assert_eq!(timetable.sessions[0].subject_id, "A");
        assert_eq!(timetable.sessions[1].subject_id, "C");
    }

    #[test]
    fn test_required_subjects_follow_catalog_order() {
        let subjects = vec![
            Subject::new("A", "Algebra"),
            Subject::new("B", "Biology"),
            Subject::new("C", "Chemistry"),
        ];
        let group = ClassGroup::new("10A").with_student(
            Student::new("S1", "10A")
                .with_subject("Chemistry")
                .with_subject("Algebra"),
        );
        let required = required_subjects(&group, &subjects);
        let ids: Vec<&str> = required.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "C"]);
    }
}
