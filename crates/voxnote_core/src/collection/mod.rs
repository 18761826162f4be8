//! Note collection state.
//!
//! # Responsibility
//! - Own the in-memory ordered note list and its mutation operations.
//! - Write the full collection through the store after every mutation.
//!
//! # Invariants
//! - Order is insertion order, newest first; new notes are prepended.
//! - Memory and persisted state are updated together in the same operation;
//!   there is no separate dirty/synced state.
//! - `search` never mutates and never touches the store.

use crate::model::note::{Note, NoteId};
use crate::store::{KeyValueStore, NoteStore, StoreResult};
use log::info;

/// Ordered note list hydrated once from storage.
pub struct NoteCollection<S: KeyValueStore> {
    store: NoteStore<S>,
    notes: Vec<Note>,
}

impl<S: KeyValueStore> NoteCollection<S> {
    /// Hydrates the collection from the backend in one shot.
    ///
    /// Malformed stored payloads surface here as an empty collection; only
    /// transport failures propagate.
    pub fn hydrate(backend: S) -> StoreResult<Self> {
        let store = NoteStore::new(backend);
        let notes = store.load()?;
        info!(
            "event=collection_hydrate module=collection status=ok count={}",
            notes.len()
        );
        Ok(Self { store, notes })
    }

    /// Creates a note from `content` and persists the updated collection.
    ///
    /// Empty content is a silent no-op and returns `Ok(None)`.
    pub fn create(&mut self, content: &str) -> StoreResult<Option<NoteId>> {
        if content.is_empty() {
            return Ok(None);
        }

        let note = Note::new(content);
        let id = note.id;
        self.notes.insert(0, note);
        self.store.save(&self.notes)?;
        info!("event=note_create module=collection status=ok id={id}");
        Ok(Some(id))
    }

    /// Removes the note with `id` and persists the updated collection.
    ///
    /// A missing id is a no-op, not an error; the collection is re-saved
    /// either way. Returns whether a note was actually removed.
    pub fn delete(&mut self, id: NoteId) -> StoreResult<bool> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let removed = self.notes.len() != before;
        self.store.save(&self.notes)?;
        info!("event=note_delete module=collection status=ok id={id} removed={removed}");
        Ok(removed)
    }

    /// Pure filter over the collection; source order is preserved.
    ///
    /// An empty query returns the full collection unfiltered.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        self.notes.iter().filter(|note| note.matches(query)).collect()
    }

    /// Looks up one note by stable id.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Full collection, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
