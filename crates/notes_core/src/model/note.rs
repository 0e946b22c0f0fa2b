//! Note value model.
//!
//! # Responsibility
//! - Hold the text of one to-do item.
//! - Provide equality, hashing and ordering consistent with that text.
//!
//! # Invariants
//! - Two notes are equal iff their `task` text is equal.
//! - `task` is private; a note cannot change after construction.
//! - Construction never fails. Empty or whitespace-only text is kept as-is.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One to-do item, compared by value.
///
/// Serialized as `{"task": "<text>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Note {
    task: String,
}

impl Note {
    /// Creates a note holding `task` verbatim.
    pub fn new(task: impl Into<String>) -> Self {
        Self { task: task.into() }
    }

    /// Returns the to-do text.
    pub fn task(&self) -> &str {
        self.task.as_str()
    }

    /// Returns whether the text is empty after trimming.
    ///
    /// Informational only; blank notes are still valid notes.
    pub fn is_blank(&self) -> bool {
        self.task.trim().is_empty()
    }

    /// Consumes the note and returns its text.
    pub fn into_task(self) -> String {
        self.task
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.task.as_str())
    }
}

impl From<&str> for Note {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Note {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
