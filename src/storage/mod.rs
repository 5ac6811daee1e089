//! List file persistence
//!
//! Reads and writes the line-oriented `name,priority,completed` format.

mod list_file;

pub use list_file::{load, save};
