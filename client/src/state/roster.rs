//! Student roster state: class grouping, counts, and search.
//!
//! DESIGN
//! ======
//! The roster keeps the flat decoded list plus the user's class selection
//! and search term; grouping and filtering are derived on read so the store
//! fetch stays a plain assignment.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use records::Student;

use crate::util::search::matches_term;

/// Class levels in school order, as shown on the roster page.
pub const CLASS_LEVELS: [&str; 11] = [
    "Prep",
    "1",
    "2",
    "3",
    "4",
    "5",
    "6",
    "7",
    "8",
    "9",
    "10 (Matric)",
];

/// Roster page state.
#[derive(Clone, Debug, Default)]
pub struct RosterState {
    pub students: Vec<Student>,
    pub loading: bool,
    pub error: Option<String>,
    /// Class level whose table is open, if any.
    pub selected_class: Option<String>,
    /// Live search term applied to name and student ID.
    pub search: String,
}

impl RosterState {
    /// How many students sit in a class level.
    #[must_use]
    pub fn count_for(&self, level: &str) -> usize {
        self.students
            .iter()
            .filter(|s| s.class_level == level)
            .count()
    }

    /// Students visible in the open table: the selected class, narrowed by
    /// the search term against name and student ID.
    #[must_use]
    pub fn visible(&self) -> Vec<Student> {
        let Some(level) = self.selected_class.as_deref() else {
            return Vec::new();
        };
        self.students
            .iter()
            .filter(|s| s.class_level == level)
            .filter(|s| matches_term(&self.search, &[&s.name, &s.student_id]))
            .cloned()
            .collect()
    }
}
