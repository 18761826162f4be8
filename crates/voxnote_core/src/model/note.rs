//! Note domain model.
//!
//! # Responsibility
//! - Define the single persisted entity of the system.
//! - Provide the case-insensitive content match used by live search.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `date` is captured once at creation and never rewritten.
//! - `content` is immutable after creation; there is no edit operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// A user-authored text entry.
///
/// Field names are the on-disk JSON contract: `id`, `date`, `content`.
/// `date` serializes as RFC 3339 text, which is how the collection was
/// historically stored and what the loader expects back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global ID used as list key and delete target.
    pub id: NoteId,
    /// Creation instant; used only for relative-time display.
    pub date: DateTime<Utc>,
    /// Non-empty text body, typed or voice-transcribed.
    pub content: String,
}

impl Note {
    /// Creates a note with a generated stable ID and the current time.
    ///
    /// Callers are responsible for rejecting empty content before this point;
    /// the constructor itself does not validate.
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), Utc::now(), content)
    }

    /// Creates a note with caller-provided identity and timestamp.
    ///
    /// Used by rehydration paths and tests where identity already exists.
    pub fn with_id(id: NoteId, date: DateTime<Utc>, content: impl Into<String>) -> Self {
        Self {
            id,
            date,
            content: content.into(),
        }
    }

    /// Case-insensitive substring match against the note body.
    ///
    /// An empty query matches every note, which is what the live search
    /// field relies on to show the full grid.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.content.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::Note;

    #[test]
    fn new_notes_get_distinct_ids() {
        let a = Note::new("one");
        let b = Note::new("one");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn matches_is_case_insensitive() {
        let note = Note::new("Buy Milk tomorrow");
        assert!(note.matches("milk"));
        assert!(note.matches("BUY"));
        assert!(!note.matches("coffee"));
    }

    #[test]
    fn empty_query_matches_everything() {
        let note = Note::new("anything");
        assert!(note.matches(""));
    }

    #[test]
    fn serde_field_names_are_stable() {
        let note = Note::new("body");
        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("\"id\""));
        assert!(json.contains("\"date\""));
        assert!(json.contains("\"content\""));

        let back: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(back, note);
    }
}
