//! Rosterly - student roster data-entry core
//!
//! Design principles:
//! - The View (GUI) is an external collaborator; this crate only validates,
//!   filters and persists.
//! - The canonical record list is the single source of truth until saved.
//! - Every filtered view is derived fresh, never incrementally maintained.
//! - Rows are addressed through stable record ids, never through raw grid
//!   positions.

pub mod core;
pub mod storage;
