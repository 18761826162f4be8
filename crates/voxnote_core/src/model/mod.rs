//! Domain model for the note grid.
//!
//! # Responsibility
//! - Define the canonical note record shared by storage and UI projections.
//! - Keep the persisted field naming stable across releases.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Notes are create/delete only; content never changes after creation.

pub mod note;
