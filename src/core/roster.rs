//! In-memory record list
//!
//! The canonical, ordered sequence of student records plus the dirty flag.
//! Records keep insertion order; nothing here ever re-sorts. File I/O lives
//! in `storage`.

use crate::core::models::{Student, StudentRecord};

/// The canonical sequence and the "unsaved changes" flag.
#[derive(Debug, Default)]
pub struct Roster {
    records: Vec<StudentRecord>,
    dirty: bool,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when there are mutations not yet written to the store file.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Called after a successful save.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Canonical position of the record with the given id.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// The students alone, in canonical order (for persistence and export).
    pub fn students(&self) -> Vec<Student> {
        self.records.iter().map(|r| r.student.clone()).collect()
    }

    /// Replace the whole sequence with freshly loaded records.
    ///
    /// Memory now mirrors the file, so the dirty flag is cleared.
    pub fn replace_all(&mut self, students: Vec<Student>) {
        self.records = students.into_iter().map(StudentRecord::new).collect();
        self.dirty = false;
    }

    /// Append a validated record to the end.
    pub fn add(&mut self, student: Student) {
        self.records.push(StudentRecord::new(student));
        self.dirty = true;
    }

    /// Replace the entire record at a canonical position. The id at that
    /// position survives the edit.
    pub fn replace_at(&mut self, index: usize, student: Student) -> bool {
        match self.records.get_mut(index) {
            Some(record) => {
                record.student = student;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Remove the record at a canonical position.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index < self.records.len() {
            self.records.remove(index);
            self.dirty = true;
            true
        } else {
            false
        }
    }

    /// Append every imported record, unconditionally: no re-validation, no
    /// deduplication. Returns the number of records appended.
    pub fn import_merge(&mut self, students: Vec<Student>) -> usize {
        let count = students.len();
        self.records
            .extend(students.into_iter().map(StudentRecord::new));
        if count > 0 {
            self.dirty = true;
        }
        count
    }
}
