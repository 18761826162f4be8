//! Note collection persistence adapter.
//!
//! # Responsibility
//! - Serialize the full note collection to one key/value entry and back.
//! - Absorb malformed persisted payloads as an empty collection.
//!
//! # Invariants
//! - The collection is always written wholesale under [`NOTES_KEY`].
//! - Decode failures never propagate out of `load`; they read-repair to
//!   empty and emit a warn event. Transport failures still propagate.

use super::{KeyValueStore, StoreError, StoreResult};
use crate::model::note::Note;
use log::{info, warn};

/// Storage key holding the serialized note collection.
pub const NOTES_KEY: &str = "notes";

/// Whole-collection load/save adapter over any key/value backend.
pub struct NoteStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> NoteStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Loads the full collection, newest first.
    ///
    /// Returns an empty collection when no value is stored or when the
    /// stored value fails to decode as a note array.
    pub fn load(&self) -> StoreResult<Vec<Note>> {
        let Some(raw) = self.backend.get(NOTES_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Note>>(&raw) {
            Ok(notes) => Ok(notes),
            Err(err) => {
                warn!(
                    "event=notes_load module=store status=repaired error_code=malformed_payload error={err}"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Overwrites the stored collection with `notes`, in the given order.
    pub fn save(&self, notes: &[Note]) -> StoreResult<()> {
        let payload = serde_json::to_string(notes).map_err(StoreError::Encode)?;
        self.backend.set(NOTES_KEY, &payload)?;
        info!(
            "event=notes_save module=store status=ok count={}",
            notes.len()
        );
        Ok(())
    }
}
