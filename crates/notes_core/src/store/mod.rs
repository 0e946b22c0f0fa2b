//! Note store contracts and in-memory implementation.
//!
//! # Responsibility
//! - Define the append/read contract every note store honours.
//! - Resolve "the saved note" to the most recently saved entry.
//!
//! # Invariants
//! - Stores are append-only: nothing removes, edits or reorders entries.
//! - `notes()` returns entries in insertion order, duplicates retained.
//! - Reading never mutates the store.

use crate::model::note::Note;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;

pub type StoreResult<T> = Result<T, StoreError>;

/// Semantic error for note store reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Single-note retrieval was requested before any note was saved.
    NoSavedNote,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSavedNote => write!(f, "no note has been saved yet"),
        }
    }
}

impl Error for StoreError {}

/// Append-only store of notes.
pub trait NoteStore {
    /// Appends one note to the end of the sequence.
    fn save(&mut self, note: Note);

    /// Returns all saved notes in insertion order.
    fn notes(&self) -> &[Note];

    /// Returns the most recently saved note.
    ///
    /// # Errors
    /// - `StoreError::NoSavedNote` when the store is empty.
    fn saved_note(&self) -> StoreResult<&Note> {
        self.notes().last().ok_or(StoreError::NoSavedNote)
    }

    /// Number of saved notes.
    fn len(&self) -> usize {
        self.notes().len()
    }

    /// Returns whether nothing has been saved yet.
    fn is_empty(&self) -> bool {
        self.notes().is_empty()
    }
}
