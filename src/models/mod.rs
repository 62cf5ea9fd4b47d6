//! Timetabling domain models.
//!
//! Core data types consumed and produced by the generation strategies:
//! the entity catalog (subjects, teachers, rooms, students), the time
//! values (slots, sessions), and the conflict taxonomy.
//!
//! All catalog types are read-only for the duration of a generation run
//! and use builder-style constructors.

mod conflict;
mod curriculum;
mod group;
mod room;
mod session;
mod subject;
mod teacher;

pub use conflict::{Conflict, ConflictKind, Severity};
pub use curriculum::{Curriculum, CurriculumCourse, MAX_CREDITS};
pub use group::{ClassGroup, Student};
pub use room::Room;
pub use session::{format_minutes, parse_minutes, ScheduledSession, TimeSlot, Timetable};
pub use subject::Subject;
pub use teacher::{AvailabilityWindow, Teacher};
