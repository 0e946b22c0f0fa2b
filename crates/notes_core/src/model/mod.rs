//! Domain model for to-do notes.
//!
//! # Responsibility
//! - Define the value types stored by `Memory` and rendered by callers.
//!
//! # Invariants
//! - Model values are compared by content, never by identity.
//! - Model values are immutable once constructed.

pub mod note;
