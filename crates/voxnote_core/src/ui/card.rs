//! Note card and detail view projections.
//!
//! # Responsibility
//! - Derive the preview (relative-time label + clamped excerpt) and the
//!   detail (label + full content) projections from one note.
//!
//! # Invariants
//! - Projections are pure; a note renders identically for the same `now`.
//! - The excerpt never exceeds [`EXCERPT_MAX_CHARS`] characters of content.

use crate::model::note::{Note, NoteId};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Character budget for the grid excerpt, standing in for the rendered
/// line clamp of the card.
pub const EXCERPT_MAX_CHARS: usize = 160;

/// Grid cell projection of one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPreview {
    pub id: NoteId,
    pub time_label: String,
    pub excerpt: String,
}

/// Expanded view of one note, with the delete target id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetail {
    pub id: NoteId,
    pub time_label: String,
    pub content: String,
}

impl CardPreview {
    /// Projects a note into its grid cell at display time `now`.
    pub fn for_note(note: &Note, now: DateTime<Utc>) -> Self {
        Self {
            id: note.id,
            time_label: relative_time(note.date, now),
            excerpt: derive_excerpt(&note.content),
        }
    }
}

impl CardDetail {
    /// Projects a note into its expanded view at display time `now`.
    pub fn for_note(note: &Note, now: DateTime<Utc>) -> Self {
        Self {
            id: note.id,
            time_label: relative_time(note.date, now),
            content: note.content.clone(),
        }
    }
}

/// Coarse "n units ago" label for a creation instant.
///
/// Buckets: under a minute -> "just now"; then minutes, hours, days, months
/// (30-day) and years (365-day). Future dates clamp to "just now".
pub fn relative_time(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - date).num_seconds().max(0);

    match seconds {
        0..=59 => "just now".to_string(),
        60..=3_599 => pluralize(seconds / 60, "minute"),
        3_600..=86_399 => pluralize(seconds / 3_600, "hour"),
        86_400..=2_591_999 => pluralize(seconds / 86_400, "day"),
        2_592_000..=31_535_999 => pluralize(seconds / 2_592_000, "month"),
        _ => pluralize(seconds / 31_536_000, "year"),
    }
}

fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Whitespace-normalized content excerpt clamped to the card budget.
fn derive_excerpt(content: &str) -> String {
    let normalized = WHITESPACE_RE.replace_all(content, " ");
    let trimmed = normalized.trim();
    if trimmed.chars().count() <= EXCERPT_MAX_CHARS {
        return trimmed.to_string();
    }

    let mut clamped: String = trimmed.chars().take(EXCERPT_MAX_CHARS).collect();
    clamped.push('…');
    clamped
}
