//! Creation panel state machine.
//!
//! # Responsibility
//! - Compose manual text entry and the speech capture session into one
//!   draft editing surface.
//! - Hand finished content to the note collection on submit.
//!
//! # Invariants
//! - States: Onboarding, Editing, Recording. Typing leaves Onboarding;
//!   clearing all typed text returns to it.
//! - Submit with an empty draft is a silent no-op; the panel stays open.
//! - The recording indicator is cleared only by an explicit stop. An engine
//!   error leaves it on; preserved behavior, see `engine_error`.

use crate::capture::{CaptureError, CaptureSession, EngineError, SpeechEngine, TranscriptEvent};
use crate::collection::NoteCollection;
use crate::model::note::NoteId;
use crate::store::{KeyValueStore, StoreResult};
use log::info;

/// Editing surface state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// Prompt shown, no text yet.
    Onboarding,
    /// Free-text entry visible.
    Editing,
    /// Draft display delegated to the capture session transcript.
    Recording,
}

/// User-visible outcome of a panel action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// A note was created from the draft; the success notice payload.
    NoteCreated(NoteId),
    /// The environment has no recognition facility; shown synchronously.
    CaptureUnavailable,
    /// Nothing happened (empty draft submit).
    Ignored,
}

/// Draft note editor owning its capture session.
pub struct CreationPanel<E: SpeechEngine> {
    session: CaptureSession<E>,
    state: PanelState,
    draft: String,
    recording_indicator: bool,
}

impl<E: SpeechEngine> CreationPanel<E> {
    pub fn new(engine: E) -> Self {
        Self {
            session: CaptureSession::new(engine),
            state: PanelState::Onboarding,
            draft: String::new(),
            recording_indicator: false,
        }
    }

    /// Switches from the onboarding prompt to manual text entry.
    pub fn start_editor(&mut self) {
        if self.state == PanelState::Onboarding {
            self.state = PanelState::Editing;
        }
    }

    /// Applies a typed draft change.
    ///
    /// Clearing all text reverts to Onboarding; only the typed path does
    /// this, a voice transcript going empty keeps the editor open.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        if self.draft.is_empty() {
            self.state = PanelState::Onboarding;
        } else if self.state == PanelState::Onboarding {
            self.state = PanelState::Editing;
        }
    }

    /// Starts voice capture.
    ///
    /// When the environment exposes no recognition facility the user is
    /// notified synchronously and no state changes. Other start failures
    /// propagate as errors.
    pub fn start_recording(&mut self) -> Result<PanelEvent, CaptureError> {
        match self.session.start() {
            Ok(()) => {
                self.state = PanelState::Recording;
                self.recording_indicator = true;
                Ok(PanelEvent::Ignored)
            }
            Err(CaptureError::Unavailable) => Ok(PanelEvent::CaptureUnavailable),
            Err(err) => Err(err),
        }
    }

    /// Feeds one transcript event through the session into the draft.
    ///
    /// The session's accumulated transcript fully replaces the draft; this
    /// is replacement, not append.
    pub fn transcript_event(&mut self, event: &TranscriptEvent) {
        self.session.handle_event(event);
        if self.state == PanelState::Recording {
            self.draft = self.session.transcript().to_string();
        }
    }

    /// Stops voice capture, keeping the captured draft in the editor.
    pub fn stop_recording(&mut self) {
        self.recording_indicator = false;
        self.session.stop();
        if self.state == PanelState::Recording {
            self.state = PanelState::Editing;
        }
    }

    /// Records an engine runtime failure.
    ///
    /// Deliberately soft: the session logs and parks in Error, the draft is
    /// untouched, and the recording indicator stays on even though the
    /// engine may have stopped internally. Documented product behavior, not
    /// an oversight to patch here.
    pub fn engine_error(&mut self, err: &EngineError) {
        self.session.handle_error(err);
    }

    /// Submits the draft as a new note.
    ///
    /// An empty draft is a silent no-op and the panel stays as-is. On
    /// success the draft clears, the panel returns to Onboarding and the
    /// created id rides along in the success notice.
    pub fn submit<S: KeyValueStore>(
        &mut self,
        collection: &mut NoteCollection<S>,
    ) -> StoreResult<PanelEvent> {
        let Some(id) = collection.create(&self.draft)? else {
            return Ok(PanelEvent::Ignored);
        };

        self.draft.clear();
        self.state = PanelState::Onboarding;
        info!("event=panel_submit module=ui status=ok id={id}");
        Ok(PanelEvent::NoteCreated(id))
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Whether the UI should show the pulsing record indicator.
    pub fn is_recording_indicator_on(&self) -> bool {
        self.recording_indicator
    }

    /// Whether the environment can record at all; drives affordance state.
    pub fn capture_available(&self) -> bool {
        self.session.is_available()
    }
}
