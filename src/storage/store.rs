//! Store file management
//!
//! Loads and saves the canonical sequence as a JSON array of objects. The
//! field names inside the file are fixed (see `core::models::Student`), so
//! files written by earlier versions of the application keep working.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::Student;
use crate::storage::DataError;

/// Default backing file, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "students.json";

/// The JSON-backed store file.
pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn with_default_path() -> Self {
        Self::new(PathBuf::from(DEFAULT_STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the store file.
    ///
    /// `Ok(None)` when the file does not exist yet (first run) - that is not
    /// an error and the in-memory sequence stays as it is.
    pub fn load(&self) -> Result<Option<Vec<Student>>, DataError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(DataError::FileRead)?;
        let students: Vec<Student> = serde_json::from_str(&content).map_err(DataError::Parse)?;
        tracing::info!(count = students.len(), path = %self.path.display(), "store loaded");
        Ok(Some(students))
    }

    /// Overwrite the store file with the whole sequence.
    pub fn save(&self, students: &[Student]) -> Result<(), DataError> {
        // A serialization failure is as fatal as a parse failure on load.
        let json = serde_json::to_string_pretty(students).map_err(DataError::Parse)?;
        fs::write(&self.path, json).map_err(DataError::FileWrite)?;
        tracing::info!(count = students.len(), path = %self.path.display(), "store saved");
        Ok(())
    }
}
