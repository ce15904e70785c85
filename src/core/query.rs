//! Query engine
//!
//! Composes the course/group/search predicates into the filtered view the
//! grid renders. The view is always derived fresh from the canonical
//! sequence; nothing here mutates state.

use crate::core::models::{Student, StudentRecord};

/// Course combo box state: the "all courses" sentinel or a specific course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseFilter {
    #[default]
    All,
    Course(u8),
}

/// Group combo box state: the "all groups" sentinel or an exact group name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GroupFilter {
    #[default]
    All,
    Group(String),
}

/// The three active filter inputs, ANDed together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub course: CourseFilter,
    pub group: GroupFilter,
    /// Case-insensitive substring match against the last name only.
    /// Whitespace-only text is treated as no search.
    pub search: String,
}

impl FilterState {
    /// Check a single record against all active predicates.
    pub fn matches(&self, student: &Student) -> bool {
        if let CourseFilter::Course(course) = self.course {
            if student.course != course {
                return false;
            }
        }

        if let GroupFilter::Group(ref group) = self.group {
            if &student.group != group {
                return false;
            }
        }

        let search = self.search.trim();
        if !search.is_empty() {
            let needle = search.to_lowercase();
            if !student.last_name.to_lowercase().contains(&needle) {
                return false;
            }
        }

        true
    }

    /// Derive the filtered view: the matching records in canonical order.
    pub fn apply<'a>(&self, records: &'a [StudentRecord]) -> Vec<&'a StudentRecord> {
        records.iter().filter(|r| self.matches(&r.student)).collect()
    }
}

/// Option lists for the two filter combo boxes: the distinct values present
/// in the data, sorted ascending. The View prepends its own "all" entry.
///
/// Recomputed after every data mutation, never on a mere filter change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub courses: Vec<u8>,
    pub groups: Vec<String>,
}

impl FilterOptions {
    /// Collect the distinct courses and groups of the canonical sequence.
    pub fn collect(records: &[StudentRecord]) -> Self {
        let mut courses: Vec<u8> = records.iter().map(|r| r.student.course).collect();
        courses.sort_unstable();
        courses.dedup();

        let mut groups: Vec<String> = records.iter().map(|r| r.student.group.clone()).collect();
        groups.sort();
        groups.dedup();

        Self { courses, groups }
    }
}
