//! Input integrity checks for entity catalogs.
//!
//! Advisory structural checks to run before generation. Detects:
//! - Duplicate IDs across subjects, teachers, rooms, and students
//! - Teachers declaring no teachable subject
//! - Students enrolled in subjects missing from the catalog
//! - Inverted or out-of-range availability windows
//!
//! The allocator itself tolerates all of these (they surface as skipped
//! subjects or conflicts), so validation is optional; it exists to give
//! operators earlier, more precise messages.

use std::collections::HashSet;

use crate::models::{Room, Student, Subject, Teacher};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A student is enrolled in a subject the catalog doesn't have.
    UnknownSubjectReference,
    /// A teacher declares no teachable subject.
    NoTeachableSubject,
    /// An availability window is inverted or names an invalid day.
    InvalidAvailabilityWindow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an entity catalog snapshot.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(
    subjects: &[Subject],
    teachers: &[Teacher],
    rooms: &[Room],
    students: &[Student],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut subject_ids = HashSet::new();
    let mut subject_names = HashSet::new();
    for s in subjects {
        if !subject_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject ID: {}", s.id),
            ));
        }
        subject_names.insert(s.name.as_str());
    }

    let mut teacher_ids = HashSet::new();
    for t in teachers {
        if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }
        if t.subjects.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoTeachableSubject,
                format!("Teacher '{}' declares no teachable subject", t.id),
            ));
        }
        for w in &t.availability {
            if w.start_min >= w.end_min || w.day > 6 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidAvailabilityWindow,
                    format!(
                        "Teacher '{}' has an invalid availability window on day {}",
                        t.id, w.day
                    ),
                ));
            }
        }
    }

    let mut room_ids = HashSet::new();
    for r in rooms {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
    }

    let mut student_ids = HashSet::new();
    for s in students {
        if !student_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate student ID: {}", s.id),
            ));
        }
        for enrolled in &s.subjects {
            if !subject_names.contains(enrolled.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSubjectReference,
                    format!(
                        "Student '{}' is enrolled in unknown subject '{}'",
                        s.id, enrolled
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
