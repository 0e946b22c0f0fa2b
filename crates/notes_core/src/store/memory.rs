//! In-process note memory.
//!
//! # Responsibility
//! - Own an ordered, append-only list of `Note` values for one session.
//! - Expose list and single-note retrieval over the same sequence.
//!
//! # Invariants
//! - The list only grows through `save`/`extend`.
//! - `get_saved_note` resolves to the last element, or `NoSavedNote`.
//! - Diagnostics carry counts only; note text is never logged.

use crate::model::note::Note;
use crate::store::{NoteStore, StoreResult};
use log::debug;
use serde::{Deserialize, Serialize};

/// Ordered in-memory store of notes.
///
/// Serializes as a plain JSON array of notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Memory {
    notes: Vec<Note>,
}

impl Memory {
    /// Creates an empty memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one note to the end of the list.
    pub fn save(&mut self, note: Note) {
        self.notes.push(note);
        debug!(
            "event=note_save module=memory status=ok count={}",
            self.notes.len()
        );
    }

    /// Returns all saved notes in insertion order.
    pub fn get_notes(&self) -> &[Note] {
        self.notes.as_slice()
    }

    /// Returns the most recently saved note.
    ///
    /// # Errors
    /// - `StoreError::NoSavedNote` when nothing has been saved.
    pub fn get_saved_note(&self) -> StoreResult<&Note> {
        self.saved_note()
    }

    /// Lazily iterates saved notes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    /// Number of saved notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns whether nothing has been saved yet.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Value-based membership check.
    pub fn contains(&self, note: &Note) -> bool {
        self.notes.contains(note)
    }

    /// Consumes the memory and returns its notes in insertion order.
    pub fn into_notes(self) -> Vec<Note> {
        self.notes
    }
}

impl NoteStore for Memory {
    fn save(&mut self, note: Note) {
        Memory::save(self, note);
    }

    fn notes(&self) -> &[Note] {
        self.notes.as_slice()
    }
}

impl Extend<Note> for Memory {
    fn extend<I: IntoIterator<Item = Note>>(&mut self, iter: I) {
        for note in iter {
            self.save(note);
        }
    }
}

impl FromIterator<Note> for Memory {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        let mut memory = Self::new();
        memory.extend(iter);
        memory
    }
}

impl<'a> IntoIterator for &'a Memory {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
