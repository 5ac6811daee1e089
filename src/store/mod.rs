//! Task storage
//!
//! The growable ordered collection backing one open list.

mod task_store;

pub use task_store::{INITIAL_CAPACITY, TaskStore};
