//! Curriculum models for the credit-driven path.
//!
//! When only a course catalog extracted from a syllabus document is
//! available (no teacher or room identities), each course is a name plus
//! an integer credit count. Credits are a proxy for weekly contact
//! sessions: `min(credits, 5)` sessions per week, one per distinct day.

use serde::{Deserialize, Serialize};

/// Credits above this are treated as malformed extractor output.
pub const MAX_CREDITS: u32 = 20;

/// A course known only by name and credit count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumCourse {
    /// Course name.
    pub name: String,
    /// Credit count (expected range 0..=20).
    pub credits: u32,
}

impl CurriculumCourse {
    /// Creates a new curriculum course.
    pub fn new(name: impl Into<String>, credits: u32) -> Self {
        Self {
            name: name.into(),
            credits,
        }
    }

    /// Weekly sessions this course needs: capped at one per working day.
    pub fn sessions_per_week(&self) -> u32 {
        self.credits.min(5)
    }

    /// Whether this entry honors the extractor output contract
    /// (non-empty name, credits within range).
    pub fn is_well_formed(&self) -> bool {
        !self.name.trim().is_empty() && self.credits <= MAX_CREDITS
    }
}

/// An extracted curriculum: a title plus an ordered course list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Curriculum {
    /// Curriculum title (e.g. the syllabus document name).
    pub title: String,
    /// Courses in extraction order.
    pub courses: Vec<CurriculumCourse>,
}

impl Curriculum {
    /// Creates an empty curriculum.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            courses: Vec::new(),
        }
    }

    /// Adds a course.
    pub fn with_course(mut self, name: impl Into<String>, credits: u32) -> Self {
        self.courses.push(CurriculumCourse::new(name, credits));
        self
    }

    /// Placement seed derived from the curriculum itself, so the same
    /// curriculum always shuffles the same way across runs.
    pub fn default_seed(&self) -> u64 {
        (self.title.len() + self.courses.len()) as u64
    }
}
