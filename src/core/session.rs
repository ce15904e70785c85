//! Session - the boundary the View talks to
//!
//! Owns the canonical sequence, the store file, the active filters, the
//! cached filter option lists and the id list of the active filtered view.
//! Every user-triggered operation of the application goes through here, so
//! the whole core is drivable from tests without a presentation layer.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::{StudentInput, StudentRecord};
use crate::core::query::{FilterOptions, FilterState};
use crate::core::roster::Roster;
use crate::core::validator::{self, ValidationError};
use crate::storage::export;
use crate::storage::store::RosterStore;
use crate::storage::DataError;

/// Anything an operation on the session can report to the View.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Data(#[from] DataError),
    /// The row index does not point at a record of the active view.
    #[error("Запись не найдена")]
    RecordNotFound,
}

/// The application core: canonical records, dirty flag, store file, filters.
pub struct Session {
    roster: Roster,
    store: RosterStore,
    filters: FilterState,
    /// Combo box option lists, recomputed on data changes only.
    options: FilterOptions,
    /// Ids of the active filtered view, in display order. Row indices
    /// arriving from the grid are resolved through this list, so edit and
    /// delete always hit the record the user is looking at even when
    /// filters narrow the visible set.
    visible: Vec<String>,
}

impl Session {
    pub fn new(store_path: PathBuf) -> Self {
        Self::with_store(RosterStore::new(store_path))
    }

    /// Session backed by the default `students.json`.
    pub fn with_default_store() -> Self {
        Self::with_store(RosterStore::with_default_path())
    }

    fn with_store(store: RosterStore) -> Self {
        Self {
            roster: Roster::new(),
            store,
            filters: FilterState::default(),
            options: FilterOptions::default(),
            visible: Vec::new(),
        }
    }

    pub fn store_path(&self) -> &Path {
        self.store.path()
    }

    /// Load the store file, replacing the in-memory sequence on success.
    ///
    /// A missing file is a normal first run and leaves memory as it is. On
    /// read or parse failure the error is surfaced and memory also stays
    /// unchanged; the application keeps running.
    pub fn load(&mut self) -> Result<(), DataError> {
        match self.store.load() {
            Ok(Some(students)) => {
                self.roster.replace_all(students);
                self.refresh_derived();
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => {
                tracing::warn!(error = %e, "load failed");
                Err(e)
            }
        }
    }

    /// Validate and append a new record.
    pub fn add_record(&mut self, input: StudentInput) -> Result<(), SessionError> {
        let student = validator::validate(input)?;
        self.roster.add(student);
        self.refresh_derived();
        Ok(())
    }

    /// Validate and replace the whole record shown at `row` of the active
    /// filtered view. The record keeps its identity.
    pub fn edit_record(&mut self, row: usize, input: StudentInput) -> Result<(), SessionError> {
        let index = self.canonical_index(row)?;
        let student = validator::validate(input)?;
        self.roster.replace_at(index, student);
        self.refresh_derived();
        Ok(())
    }

    /// Remove the record shown at `row` of the active filtered view.
    ///
    /// Asking the user for confirmation is the View's job; by the time this
    /// is called the deletion is decided.
    pub fn delete_record(&mut self, row: usize) -> Result<(), SessionError> {
        let index = self.canonical_index(row)?;
        self.roster.remove_at(index);
        self.refresh_derived();
        Ok(())
    }

    /// Persist the canonical sequence to the store file and clear the dirty
    /// flag. On failure both memory and the flag stay as they were.
    pub fn save(&mut self) -> Result<(), DataError> {
        self.store.save(&self.roster.students())?;
        self.roster.mark_saved();
        Ok(())
    }

    /// Export the full canonical sequence as CSV, active filters ignored.
    pub fn export_csv(&self, path: &Path) -> Result<(), DataError> {
        export::export_csv(path, &self.roster.students())
    }

    /// Import records from a JSON file, merge them into the canonical
    /// sequence and persist the merged result right away.
    ///
    /// Imported records are taken as-is, without validation. If the save
    /// fails, the merged records stay in memory unpersisted and the dirty
    /// flag stays set. Returns the number of merged records.
    pub fn import_json(&mut self, path: &Path) -> Result<usize, DataError> {
        let students = export::import_json(path)?;
        let count = self.roster.import_merge(students);
        self.refresh_derived();
        self.save()?;
        Ok(count)
    }

    /// Replace the active filters and recompute the visible id list.
    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.refresh_view();
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// The active filtered view, derived fresh, in canonical order.
    pub fn view(&self) -> Vec<&StudentRecord> {
        self.filters.apply(self.roster.records())
    }

    /// The full canonical sequence.
    pub fn records(&self) -> &[StudentRecord] {
        self.roster.records()
    }

    /// Option lists for the filter combo boxes.
    pub fn filter_options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn is_dirty(&self) -> bool {
        self.roster.is_dirty()
    }

    /// Window-close hook: true when the View should prompt to save first.
    pub fn on_close(&self) -> bool {
        self.roster.is_dirty()
    }

    /// Map a row of the active filtered view to its canonical position.
    fn canonical_index(&self, row: usize) -> Result<usize, SessionError> {
        let id = self.visible.get(row).ok_or(SessionError::RecordNotFound)?;
        self.roster
            .position_of(id)
            .ok_or(SessionError::RecordNotFound)
    }

    /// After any data mutation: option lists and visible ids.
    fn refresh_derived(&mut self) {
        self.options = FilterOptions::collect(self.roster.records());
        self.refresh_view();
    }

    /// After a filter change: visible ids only.
    fn refresh_view(&mut self) {
        self.visible = self
            .filters
            .apply(self.roster.records())
            .into_iter()
            .map(|r| r.id.clone())
            .collect();
    }
}
