//! Core domain logic for VoxNote, a voice-and-text note grid.
//! This crate is the single source of truth for business invariants.

pub mod capture;
pub mod collection;
pub mod db;
pub mod logging;
pub mod model;
pub mod store;
pub mod ui;

pub use capture::{
    CaptureError, CaptureSession, CaptureState, EngineConfig, EngineError, SpeechEngine,
    TranscriptEvent, TranscriptSegment,
};
pub use collection::NoteCollection;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId};
pub use store::{
    KeyValueStore, MemoryKeyValueStore, NoteStore, SqliteKeyValueStore, StoreError, StoreResult,
    NOTES_KEY,
};
pub use ui::{relative_time, App, CardDetail, CardPreview, CreationPanel, PanelEvent, PanelState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
