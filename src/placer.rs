//! Credit-driven session placer.
//!
//! Alternate strategy for when the upstream extractor supplies only
//! {course name, credit count} pairs: no teacher or room identity exists
//! at this stage. Session count is derived from credits
//! (`min(credits, 5)` per week, one per distinct day) and sessions are
//! spread over a fixed day/slot grid by a seeded random walk.
//!
//! # Randomness
//!
//! One explicit [`SmallRng`] is threaded through the whole run. The
//! default seed is derived from the curriculum (title length + course
//! count), so the same curriculum always places the same way; callers
//! may override it, and the result records the seed actually used so
//! any placement can be reproduced.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::SeedableRng;

use crate::models::{Conflict, Curriculum, ScheduledSession, TimeSlot, Timetable};

/// Slot start times (minutes since midnight) for the credit-driven grid:
/// 09-12 and 13-16, with 12:00-13:00 excluded as lunch.
pub const SLOT_STARTS: [u16; 6] = [540, 600, 660, 780, 840, 900];

/// Working days Monday (1) through Friday (5), indexed 0..5 internally.
const DAY_COUNT: usize = 5;

/// Result of one placement run.
#[derive(Debug, Clone)]
pub struct Placement {
    /// Placed sessions plus any placement shortfalls.
    pub timetable: Timetable,
    /// Seed the run actually used; replaying with it reproduces the
    /// placement exactly.
    pub seed: u64,
}

/// Places curriculum courses onto the fixed weekly grid.
///
/// # Example
///
/// ```
/// use classgrid::models::Curriculum;
/// use classgrid::placer::CreditPlacer;
///
/// let curriculum = Curriculum::new("CS Year 2").with_course("Database Systems", 3);
/// let placement = CreditPlacer::new().place(&curriculum);
/// assert_eq!(placement.timetable.session_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CreditPlacer {
    seed: Option<u64>,
}

impl CreditPlacer {
    /// Creates a placer that seeds itself from the curriculum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the placement seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Places every well-formed course in the curriculum.
    ///
    /// Malformed extractor entries (empty name, credits out of range)
    /// are skipped, never fatal. Each course gets at most one session
    /// per day; the day/slot occupancy array guarantees no two sessions
    /// share a (day, slot) pair. A course that cannot get all its days
    /// is placed partially and recorded as a low-severity conflict.
    pub fn place(&self, curriculum: &Curriculum) -> Placement {
        let seed = self.seed.unwrap_or_else(|| curriculum.default_seed());
        let mut rng = SmallRng::seed_from_u64(seed);
        // Fixed-size occupancy, indexed by integer day and slot.
        let mut occupied = [[false; SLOT_STARTS.len()]; DAY_COUNT];
        let mut timetable = Timetable::new();

        info!(
            "placing curriculum '{}': {} courses, seed {}",
            curriculum.title,
            curriculum.courses.len(),
            seed
        );

        let mut order: Vec<&_> = curriculum
            .courses
            .iter()
            .filter(|c| {
                if c.is_well_formed() {
                    true
                } else {
                    debug!("skipping malformed course entry {:?}", c.name);
                    false
                }
            })
            .collect();
        order.shuffle(&mut rng);

        for course in order {
            let needed = course.sessions_per_week() as usize;
            if needed == 0 {
                continue;
            }

            let mut days: Vec<usize> = (0..DAY_COUNT)
                .filter(|&d| occupied[d].iter().any(|taken| !taken))
                .collect();
            days.shuffle(&mut rng);
            if days.len() < needed {
                timetable.add_conflict(Conflict::day_shortfall(
                    &course.name,
                    days.len(),
                    needed,
                ));
            }
            days.truncate(needed);

            for day in days {
                let free: Vec<usize> = (0..SLOT_STARTS.len())
                    .filter(|&i| !occupied[day][i])
                    .collect();
                let Some(&slot_idx) = free.choose(&mut rng) else {
                    continue;
                };
                occupied[day][slot_idx] = true;

                let start = SLOT_STARTS[slot_idx];
                let slot = TimeSlot::new((day + 1) as u8, start, start + 60);
                debug!("placed {} on day {} {}", course.name, slot.day, slot.label());
                timetable.add_session(ScheduledSession::new(slot, &course.name));
            }
        }

        Placement { timetable, seed }
    }
}
