//! Capture session state machine.
//!
//! # Responsibility
//! - Own the engine handle for the duration of a recording.
//! - Reduce streamed transcript events into one running draft text.
//!
//! # Invariants
//! - States: Idle, Recording, Error. The only path back to Recording from
//!   any state is a fresh `start()`.
//! - Each handled event fully replaces the published transcript; the
//!   reducer is idempotent per event.
//! - Engine runtime errors are logged and move the session to Error; they
//!   are deliberately not surfaced to the draft or to the user (see
//!   `handle_error`).

use super::engine::{EngineConfig, EngineError, SpeechEngine, TranscriptEvent};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Recording,
    Error,
}

/// Failure starting a capture.
#[derive(Debug)]
pub enum CaptureError {
    /// The environment exposes no recognition facility. Reported to the
    /// user synchronously, before any state change.
    Unavailable,
    /// The engine refused to start a run.
    Engine(EngineError),
}

impl Display for CaptureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => {
                write!(f, "speech recognition is not available in this environment")
            }
            Self::Engine(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CaptureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable => None,
            Self::Engine(err) => Some(err),
        }
    }
}

impl From<EngineError> for CaptureError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

/// One speech capture session owning its engine handle.
///
/// Ownership is explicit: whoever constructs the session holds the only
/// handle to the underlying engine, so an abandoned run cannot leak through
/// ambient state.
pub struct CaptureSession<E: SpeechEngine> {
    engine: E,
    config: EngineConfig,
    state: CaptureState,
    transcript: String,
}

impl<E: SpeechEngine> CaptureSession<E> {
    /// Creates an idle session with the fixed product configuration.
    pub fn new(engine: E) -> Self {
        Self::with_config(engine, EngineConfig::default())
    }

    pub fn with_config(engine: E, config: EngineConfig) -> Self {
        Self {
            engine,
            config,
            state: CaptureState::Idle,
            transcript: String::new(),
        }
    }

    /// Starts a recording run.
    ///
    /// Refused before any state change when the engine is unavailable. If a
    /// run is already active the previous one is stopped and replaced
    /// explicitly rather than leaked; the transcript restarts empty.
    pub fn start(&mut self) -> Result<(), CaptureError> {
        if !self.engine.is_available() {
            return Err(CaptureError::Unavailable);
        }

        if self.state == CaptureState::Recording {
            warn!("event=capture_start module=capture status=replaced_active_run");
            self.engine.stop();
        }

        self.transcript.clear();
        self.engine.start(&self.config)?;
        self.state = CaptureState::Recording;
        info!(
            "event=capture_start module=capture status=ok language={}",
            self.config.language
        );
        Ok(())
    }

    /// Reduces one transcript event into the running draft text.
    ///
    /// The event's joined segments fully replace the previous value; events
    /// arriving outside Recording are dropped.
    pub fn handle_event(&mut self, event: &TranscriptEvent) {
        if self.state != CaptureState::Recording {
            return;
        }
        self.transcript = event.joined_transcript();
    }

    /// Stops the active run and returns to Idle.
    ///
    /// Fire-and-forget toward the engine; the accumulated transcript stays
    /// readable until the next `start()`.
    pub fn stop(&mut self) {
        if self.state == CaptureState::Recording {
            self.engine.stop();
        }
        self.state = CaptureState::Idle;
        info!("event=capture_stop module=capture status=ok");
    }

    /// Records an engine runtime failure.
    ///
    /// Logged only: no user notification, no transcript change, and no
    /// forced cleanup of caller-side recording indicators. The session
    /// parks in Error until a fresh `start()`.
    pub fn handle_error(&mut self, err: &EngineError) {
        error!("event=capture_error module=capture status=error error={err}");
        self.state = CaptureState::Error;
    }

    /// The current accumulated transcript for this session.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_recording(&self) -> bool {
        self.state == CaptureState::Recording
    }

    /// Whether the environment can record at all.
    pub fn is_available(&self) -> bool {
        self.engine.is_available()
    }
}
