//! Domain types
//!
//! The task record and the priority levels users assign at the prompt.

mod task;

pub use task::{NAME_MAX, Priority, Task};
