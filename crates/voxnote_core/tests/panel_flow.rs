use voxnote_core::{
    CreationPanel, EngineConfig, EngineError, MemoryKeyValueStore, NoteCollection, PanelEvent,
    PanelState, SpeechEngine, TranscriptEvent, TranscriptSegment,
};

/// Always-available engine that ignores every call.
struct QuietEngine;

impl SpeechEngine for QuietEngine {
    fn is_available(&self) -> bool {
        true
    }

    fn start(&mut self, _config: &EngineConfig) -> Result<(), EngineError> {
        Ok(())
    }

    fn stop(&mut self) {}
}

struct AbsentEngine;

impl SpeechEngine for AbsentEngine {
    fn is_available(&self) -> bool {
        false
    }

    fn start(&mut self, _config: &EngineConfig) -> Result<(), EngineError> {
        Err(EngineError::Aborted("no recognizer".into()))
    }

    fn stop(&mut self) {}
}

fn event(text: &str) -> TranscriptEvent {
    TranscriptEvent::new(vec![TranscriptSegment::interim(text)])
}

#[test]
fn typing_moves_between_onboarding_and_editing() {
    let mut panel = CreationPanel::new(QuietEngine);
    assert_eq!(panel.state(), PanelState::Onboarding);

    panel.start_editor();
    assert_eq!(panel.state(), PanelState::Editing);

    panel.set_draft("B");
    panel.set_draft("Bu");
    assert_eq!(panel.state(), PanelState::Editing);
    assert_eq!(panel.draft(), "Bu");

    // Clearing all text reverts to the onboarding prompt.
    panel.set_draft("");
    assert_eq!(panel.state(), PanelState::Onboarding);
}

#[test]
fn submit_with_empty_draft_is_a_silent_noop() {
    let mut collection = NoteCollection::hydrate(MemoryKeyValueStore::new()).unwrap();
    let mut panel = CreationPanel::new(QuietEngine);

    let outcome = panel.submit(&mut collection).unwrap();

    assert_eq!(outcome, PanelEvent::Ignored);
    assert!(collection.is_empty());
    assert_eq!(panel.state(), PanelState::Onboarding);
}

#[test]
fn submit_creates_note_clears_draft_and_reports_success() {
    let mut collection = NoteCollection::hydrate(MemoryKeyValueStore::new()).unwrap();
    let mut panel = CreationPanel::new(QuietEngine);

    panel.set_draft("Buy milk");
    let outcome = panel.submit(&mut collection).unwrap();

    let PanelEvent::NoteCreated(id) = outcome else {
        panic!("expected a success notice, got {outcome:?}");
    };
    assert_eq!(collection.notes()[0].id, id);
    assert_eq!(collection.notes()[0].content, "Buy milk");
    assert_eq!(panel.draft(), "");
    assert_eq!(panel.state(), PanelState::Onboarding);
}

#[test]
fn missing_capability_is_reported_without_state_change() {
    let mut panel = CreationPanel::new(AbsentEngine);

    let outcome = panel.start_recording().unwrap();

    assert_eq!(outcome, PanelEvent::CaptureUnavailable);
    assert_eq!(panel.state(), PanelState::Onboarding);
    assert!(!panel.is_recording_indicator_on());
    assert!(!panel.capture_available());
}

#[test]
fn recording_streams_the_transcript_into_the_draft() {
    let mut panel = CreationPanel::new(QuietEngine);

    panel.start_recording().unwrap();
    assert_eq!(panel.state(), PanelState::Recording);
    assert!(panel.is_recording_indicator_on());

    panel.transcript_event(&event("comprar "));
    panel.transcript_event(&event("comprar leite"));
    assert_eq!(panel.draft(), "comprar leite");

    panel.stop_recording();
    assert_eq!(panel.state(), PanelState::Editing);
    assert!(!panel.is_recording_indicator_on());
    // The captured draft stays in the editor for review before submit.
    assert_eq!(panel.draft(), "comprar leite");
}

#[test]
fn voice_draft_submits_like_a_typed_one() {
    let mut collection = NoteCollection::hydrate(MemoryKeyValueStore::new()).unwrap();
    let mut panel = CreationPanel::new(QuietEngine);

    panel.start_recording().unwrap();
    panel.transcript_event(&event("nota ditada"));
    panel.stop_recording();

    let outcome = panel.submit(&mut collection).unwrap();
    assert!(matches!(outcome, PanelEvent::NoteCreated(_)));
    assert_eq!(collection.notes()[0].content, "nota ditada");
}

#[test]
fn engine_error_leaves_the_recording_indicator_on() {
    let mut panel = CreationPanel::new(QuietEngine);

    panel.start_recording().unwrap();
    panel.transcript_event(&event("até o erro"));
    panel.engine_error(&EngineError::Other("network".into()));

    // Soft failure: draft intact, indicator still shown. The engine may have
    // stopped internally; the UI is not corrected here.
    assert_eq!(panel.draft(), "até o erro");
    assert!(panel.is_recording_indicator_on());

    // Events after the error no longer reach the draft.
    panel.transcript_event(&event("depois do erro"));
    assert_eq!(panel.draft(), "até o erro");
}

#[test]
fn stop_after_error_clears_the_indicator() {
    let mut panel = CreationPanel::new(QuietEngine);

    panel.start_recording().unwrap();
    panel.engine_error(&EngineError::Other("network".into()));
    panel.stop_recording();

    assert!(!panel.is_recording_indicator_on());
    assert_eq!(panel.state(), PanelState::Editing);
}
