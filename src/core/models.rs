//! Core data model definitions
//!
//! The on-disk field names are fixed by existing `students.json` files and
//! must not change.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A validated student record as it is persisted.
///
/// Field names are serialized in the exact casing the historical store file
/// uses, so files written by earlier versions of the application round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "MiddleName")]
    pub middle_name: String,
    /// Course year, 1 through 4.
    #[serde(rename = "Course")]
    pub course: u8,
    #[serde(rename = "Group")]
    pub group: String,
    #[serde(rename = "BirthDate")]
    pub birth_date: NaiveDate,
    #[serde(rename = "Email")]
    pub email: String,
}

/// A student plus the stable opaque id it is addressed by at runtime.
///
/// The id exists so that edit/delete coming from a filtered grid resolve to
/// the right canonical record. It is assigned on load/add/import and is
/// never written to the store file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    /// Runtime-only identifier (UUID v4).
    pub id: String,
    pub student: Student,
}

impl StudentRecord {
    /// Wrap a student with a fresh id.
    pub fn new(student: Student) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            student,
        }
    }
}

/// Raw field values collected by the View, before validation.
///
/// `course` is `None` while nothing is selected in the course combo box.
#[derive(Debug, Clone, Default)]
pub struct StudentInput {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub course: Option<u8>,
    pub group: String,
    pub birth_date: NaiveDate,
    pub email: String,
}
