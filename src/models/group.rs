//! Students and class groups.
//!
//! A class group is a named cohort of students. The union of its
//! students' enrolled subject names determines which subjects the
//! constrained allocator must schedule for it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A student enrolled in a class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Name of the class this student belongs to.
    pub class_name: String,
    /// Names of subjects this student is enrolled in.
    pub subjects: Vec<String>,
}

impl Student {
    /// Creates a new student.
    pub fn new(id: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            class_name: class_name.into(),
            subjects: Vec::new(),
        }
    }

    /// Sets the student name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds an enrolled subject name.
    pub fn with_subject(mut self, subject_name: impl Into<String>) -> Self {
        self.subjects.push(subject_name.into());
        self
    }
}

/// A named class with its enrolled students.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassGroup {
    /// Class name (e.g. "10A").
    pub name: String,
    /// Students enrolled in this class.
    pub students: Vec<Student>,
}

impl ClassGroup {
    /// Creates an empty class group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            students: Vec::new(),
        }
    }

    /// Adds a student.
    pub fn with_student(mut self, student: Student) -> Self {
        self.students.push(student);
        self
    }

    /// Builds a group from a flat roster, taking the students whose
    /// `class_name` matches.
    pub fn from_roster(name: impl Into<String>, roster: &[Student]) -> Self {
        let name = name.into();
        let students = roster
            .iter()
            .filter(|s| s.class_name == name)
            .cloned()
            .collect();
        Self { name, students }
    }

    /// Union of all enrolled subject names across students.
    pub fn required_subject_names(&self) -> HashSet<&str> {
        self.students
            .iter()
            .flat_map(|s| s.subjects.iter().map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_roster_filters_by_class() {
        let roster = vec![
            Student::new("S1", "10A").with_subject("Mathematics"),
            Student::new("S2", "10B").with_subject("Physics"),
            Student::new("S3", "10A").with_subject("Chemistry"),
        ];
        let group = ClassGroup::from_roster("10A", &roster);
        assert_eq!(group.students.len(), 2);
    }

    #[test]
    fn test_required_subjects_are_a_union() {
        let group = ClassGroup::new("10A")
            .with_student(
                Student::new("S1", "10A")
                    .with_subject("Mathematics")
                    .with_subject("Physics"),
            )
            .with_student(
                Student::new("S2", "10A")
                    .with_subject("Physics")
                    .with_subject("Chemistry"),
            );

        let subjects = group.required_subject_names();
        assert_eq!(subjects.len(), 3);
        assert!(subjects.contains("Mathematics"));
        assert!(subjects.contains("Physics"));
        assert!(subjects.contains("Chemistry"));
    }

    #[test]
    fn test_empty_group_needs_nothing() {
        let group = ClassGroup::new("11C");
        assert!(group.required_subject_names().is_empty());
    }
}
