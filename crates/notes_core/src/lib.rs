//! Core domain logic for the notes utility.
//! This crate is the single source of truth for note/store invariants.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, init_logging_for, logging_status};
pub use model::note::Note;
pub use store::memory::Memory;
pub use store::{NoteStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
