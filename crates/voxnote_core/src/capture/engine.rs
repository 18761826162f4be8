//! Recognition engine capability contract.
//!
//! # Responsibility
//! - Abstract the environment-provided speech recognition facility behind a
//!   trait the session can own.
//! - Fix the recognition configuration the product uses.
//!
//! # Invariants
//! - `stop` is fire-and-forget; no acknowledgment is awaited.
//! - Transcript events report every segment emitted so far this run, not a
//!   delta; consumers must treat each event as a full snapshot.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Recognition settings applied at engine start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Spoken language tag, e.g. `pt-BR`.
    pub language: String,
    /// Keep recognizing across pauses instead of ending on first silence.
    pub continuous: bool,
    /// Deliver interim (not yet finalized) segments as they form.
    pub interim_results: bool,
    /// Alternatives kept per recognized segment; only the first is consumed.
    pub max_alternatives: u32,
}

impl Default for EngineConfig {
    /// The fixed product configuration: Brazilian Portuguese, continuous,
    /// interim results on, a single alternative per result.
    fn default() -> Self {
        Self {
            language: "pt-BR".to_string(),
            continuous: true,
            interim_results: true,
            max_alternatives: 1,
        }
    }
}

/// First-alternative text of one recognized result.
///
/// Interim and final segments are treated uniformly downstream; `is_final`
/// is carried for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSegment {
    pub transcript: String,
    pub is_final: bool,
}

impl TranscriptSegment {
    pub fn interim(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: false,
        }
    }

    pub fn finalized(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: true,
        }
    }
}

/// One reported batch of recognition results.
///
/// Carries all segments the engine has emitted so far this run; an event
/// with zero segments is valid and clears the running transcript.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranscriptEvent {
    pub segments: Vec<TranscriptSegment>,
}

impl TranscriptEvent {
    pub fn new(segments: Vec<TranscriptSegment>) -> Self {
        Self { segments }
    }

    /// Concatenation of every segment's text, in emission order.
    pub fn joined_transcript(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.transcript.as_str())
            .collect()
    }
}

/// Runtime failure reported by the engine while a run is active.
#[derive(Debug)]
pub enum EngineError {
    /// Engine refused to start or aborted the run.
    Aborted(String),
    /// Microphone or audio capture failure.
    AudioCapture(String),
    /// Engine-specific condition with no dedicated variant.
    Other(String),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Aborted(details) => write!(f, "recognition aborted: {details}"),
            Self::AudioCapture(details) => write!(f, "audio capture failed: {details}"),
            Self::Other(details) => write!(f, "recognition error: {details}"),
        }
    }
}

impl Error for EngineError {}

/// Environment-provided speech recognition capability.
///
/// The session owns one engine handle for its lifetime and drives it through
/// this contract; event delivery is pushed in by the embedding environment
/// via [`crate::capture::CaptureSession::handle_event`].
pub trait SpeechEngine {
    /// Whether the environment exposes a recognition facility at all.
    ///
    /// Checked before any state change; when `false`, starting a capture is
    /// refused synchronously.
    fn is_available(&self) -> bool;

    /// Begins a recognition run with the given configuration.
    fn start(&mut self, config: &EngineConfig) -> Result<(), EngineError>;

    /// Signals the engine to terminate the current run. Fire-and-forget.
    fn stop(&mut self);
}

#[cfg(test)]
mod tests {
    use super::{EngineConfig, TranscriptEvent, TranscriptSegment};

    #[test]
    fn default_config_matches_product_settings() {
        let config = EngineConfig::default();
        assert_eq!(config.language, "pt-BR");
        assert!(config.continuous);
        assert!(config.interim_results);
        assert_eq!(config.max_alternatives, 1);
    }

    #[test]
    fn joined_transcript_concatenates_in_order() {
        let event = TranscriptEvent::new(vec![
            TranscriptSegment::finalized("comprar leite "),
            TranscriptSegment::interim("e pão"),
        ]);
        assert_eq!(event.joined_transcript(), "comprar leite e pão");
    }

    #[test]
    fn empty_event_joins_to_empty_text() {
        assert_eq!(TranscriptEvent::default().joined_transcript(), "");
    }
}
