//! Root composition.
//!
//! # Responsibility
//! - Wire the search field, the note collection and the card grid together.
//! - Hydrate the collection once from storage at startup.
//!
//! # Invariants
//! - The search query narrows the visible grid only; it never mutates or
//!   persists anything.
//! - Every mutation flows through the collection, which persists the full
//!   list in the same operation.

use crate::collection::NoteCollection;
use crate::model::note::{Note, NoteId};
use crate::store::{KeyValueStore, StoreResult};
use crate::ui::card::{CardDetail, CardPreview};
use chrono::{DateTime, Utc};

/// Application root owning the collection and the live search query.
pub struct App<S: KeyValueStore> {
    collection: NoteCollection<S>,
    search: String,
}

impl<S: KeyValueStore> App<S> {
    /// Builds the root, hydrating the collection from `backend` in one shot.
    pub fn new(backend: S) -> StoreResult<Self> {
        Ok(Self {
            collection: NoteCollection::hydrate(backend)?,
            search: String::new(),
        })
    }

    /// Updates the live search query.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn search_query(&self) -> &str {
        &self.search
    }

    /// Notes narrowed by the current query, newest first.
    pub fn visible_notes(&self) -> Vec<&Note> {
        self.collection.search(&self.search)
    }

    /// Card grid projection of the visible notes at display time `now`.
    pub fn previews(&self, now: DateTime<Utc>) -> Vec<CardPreview> {
        self.visible_notes()
            .into_iter()
            .map(|note| CardPreview::for_note(note, now))
            .collect()
    }

    /// Expanded view of one note; `None` when the id is unknown.
    pub fn detail(&self, id: NoteId, now: DateTime<Utc>) -> Option<CardDetail> {
        self.collection
            .get(id)
            .map(|note| CardDetail::for_note(note, now))
    }

    /// Creates a note; delegates validation and persistence downward.
    pub fn create_note(&mut self, content: &str) -> StoreResult<Option<NoteId>> {
        self.collection.create(content)
    }

    /// Deletes a note by id; the detail view closes on the caller's side.
    pub fn delete_note(&mut self, id: NoteId) -> StoreResult<bool> {
        self.collection.delete(id)
    }

    pub fn collection(&self) -> &NoteCollection<S> {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut NoteCollection<S> {
        &mut self.collection
    }
}
