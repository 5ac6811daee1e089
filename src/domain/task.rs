//! Task record and priority levels
//!
//! A task is one line of the persisted list: a name, a priority integer,
//! and a completed flag. Names are sanitized on the way in because the
//! list file format is comma-delimited.

use std::fmt;

/// Maximum task name length in characters; anything beyond is dropped.
pub const NAME_MAX: usize = 99;

/// One item of work.
///
/// `priority` is kept as a raw integer: the prompt layer validates the 1-3
/// range at input time, but hand-edited list files may carry any value and
/// load/sort without complaint. `completed` is a boolean-as-integer that is
/// preserved verbatim across load/save; nothing in the current command set
/// ever sets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub priority: i32,
    pub completed: i32,
}

impl Task {
    /// Create a new, not-yet-completed task with a sanitized name.
    pub fn new(name: &str, priority: i32) -> Self {
        Self::restored(name, priority, 0)
    }

    /// Reconstruct a task from persisted fields, keeping `completed` as-is.
    ///
    /// The name is run through the same sanitizer as `new`; loaded names
    /// cannot contain commas, so in practice only the length cap applies.
    pub fn restored(name: &str, priority: i32, completed: i32) -> Self {
        Self {
            name: sanitize_name(name),
            priority,
            completed,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; priority: {}", self.name, self.priority)
    }
}

/// Replace the field separator and truncate to the name cap.
///
/// Corrections are silent: the stored value simply differs from raw input.
fn sanitize_name(raw: &str) -> String {
    raw.chars()
        .take(NAME_MAX)
        .map(|c| if c == ',' { ';' } else { c })
        .collect()
}

/// The three priority levels offered at the prompt, 1 (high) to 3 (low).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Parse a raw integer, rejecting anything outside the 1-3 range.
    pub fn from_int(value: i32) -> Option<Self> {
        match value {
            1 => Some(Priority::High),
            2 => Some(Priority::Medium),
            3 => Some(Priority::Low),
            _ => None,
        }
    }

    /// The integer stored and persisted for this level.
    pub fn as_int(&self) -> i32 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    /// Human-readable label for prompt output.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}
