//! TaskStore: the growable ordered collection of tasks for one open list.
//!
//! Tasks keep insertion order until a sort call reorders them in place.
//! Capacity starts at 10 and doubles whenever an insertion would exceed it;
//! it never shrinks. Growth failure is recoverable (the mutation becomes a
//! no-op and the store stays valid at its prior capacity), in contrast to
//! construction, where an allocation failure aborts the process - a list
//! manager that cannot allocate its store cannot start at all.

use crate::domain::Task;
use crate::error::{Result, TaskrError};
use crate::sort;
use log::debug;

/// Capacity a freshly created store reserves up front.
pub const INITIAL_CAPACITY: usize = 10;

/// The ordered, growable collection of tasks for one open list.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    /// Tracked capacity; doubles on growth. The Vec is reserved to match.
    capacity: usize,
}

impl TaskStore {
    /// Create an empty store with the initial capacity.
    ///
    /// This is the one place allocation failure is unrecoverable: the
    /// allocator aborts the process if the initial buffer cannot be had.
    pub fn new() -> Self {
        Self {
            tasks: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    /// Double capacity if the next insertion would exceed it.
    ///
    /// On failure the store is untouched: count, capacity, and buffer stay
    /// mutually consistent, and the caller must abandon its mutation.
    fn ensure_capacity(&mut self) -> Result<()> {
        if self.tasks.len() == self.capacity {
            let new_capacity = self.capacity * 2;
            self.tasks
                .try_reserve_exact(new_capacity - self.tasks.len())
                .map_err(|e| TaskrError::Capacity(e.to_string()))?;
            debug!("store capacity grown: {} -> {}", self.capacity, new_capacity);
            self.capacity = new_capacity;
        }
        Ok(())
    }

    /// Append a new task. The name is sanitized; duplicates are permitted.
    ///
    /// If capacity growth fails the add is a no-op and the error is
    /// reported to the caller.
    pub fn add(&mut self, name: &str, priority: i32) -> Result<()> {
        let task = Task::new(name, priority);
        self.ensure_capacity()?;
        self.tasks.push(task);
        Ok(())
    }

    /// Append a task reconstructed from a list file, keeping its completed
    /// flag verbatim. Used by the load path.
    pub fn restore(&mut self, name: &str, priority: i32, completed: i32) -> Result<()> {
        let task = Task::restored(name, priority, completed);
        self.ensure_capacity()?;
        self.tasks.push(task);
        Ok(())
    }

    /// Remove the first task whose name matches exactly (case-sensitive).
    ///
    /// Later entries shift left so relative order is preserved. Returns
    /// whether a match was found; removing an absent name is a no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.tasks.iter().position(|t| t.name == name) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drop all tasks, keeping the current capacity. Idempotent; used
    /// before loading a fresh list into the same session.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Reorder tasks in place by ascending priority.
    pub fn sort_by_priority(&mut self) {
        sort::sort_by_priority(&mut self.tasks);
    }

    /// Sort, then hand out the tasks for display. The reordering sticks:
    /// a save after listing writes priority order, not insertion order.
    pub fn sorted_tasks(&mut self) -> &[Task] {
        self.sort_by_priority();
        &self.tasks
    }

    /// Tasks in current order (insertion order, or priority order after a
    /// sort).
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Current tracked capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
