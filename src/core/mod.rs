//! Core module - business logic of the roster

pub mod models;
pub mod query;
pub mod roster;
pub mod session;
pub mod validator;
