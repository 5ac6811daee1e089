//! Taskr - a file-backed to-do list manager
//!
//! The core is a growable task store ordered in place by priority and
//! persisted to a line-oriented comma-separated text file. The interactive
//! prompt lives in the binary; this library only knows about tasks,
//! ordering, and the list file format.

pub mod domain;
pub mod error;
pub mod sort;
pub mod storage;
pub mod store;

pub use error::{Result, TaskrError};
