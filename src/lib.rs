//! Timetable generation and conflict-reporting engine.
//!
//! Schedules recurring class sessions (subject × teacher × room × time)
//! over a weekly grid and reports every placement it could not satisfy.
//! Two strategies are provided:
//!
//! - **Constrained allocation** ([`allocator`]): a single greedy pass
//!   over the full entity catalog (subjects, teachers, rooms, students),
//!   filtering by capability and availability and balancing workload.
//! - **Credit-driven placement** ([`placer`]): for curricula extracted
//!   from documents where only course names and credit counts are known,
//!   sessions are spread over a fixed day/slot grid by a seeded shuffle.
//!
//! Unsatisfiable placements are never errors: both strategies run to
//! completion and accumulate [`models::Conflict`] records. The [`audit`]
//! module re-checks finished (or externally supplied) session lists for
//! double-bookings the same way.
//!
//! # Modules
//!
//! - **`models`**: domain types — `Subject`, `Teacher`, `Room`,
//!   `ClassGroup`, `TimeSlot`, `ScheduledSession`, `Timetable`,
//!   `Conflict`, `Curriculum`
//! - **`grid`**: weekly time grid enumeration and configuration
//! - **`scoring`**: workload/usage tie-breaking scores
//! - **`allocator`**: the entity-constrained greedy strategy
//! - **`placer`**: the credit-driven strategy
//! - **`audit`**: post-hoc double-booking scans and remedy lookups
//! - **`validation`**: advisory catalog integrity checks
//!
//! # Concurrency
//!
//! A generation run is a pure, single-threaded computation over an
//! immutable catalog snapshot. Independent runs share no mutable state
//! and may execute in parallel; all per-run state lives in locals.

pub mod allocator;
pub mod audit;
pub mod grid;
pub mod models;
pub mod placer;
pub mod scoring;
pub mod validation;
