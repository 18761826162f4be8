//! Speech capture layer.
//!
//! # Responsibility
//! - Define the recognition engine capability contract.
//! - Run the capture session state machine that turns streamed transcript
//!   events into one running draft text.
//!
//! # Invariants
//! - At most one engine run is active per session; starting over an active
//!   run stops and replaces it explicitly.
//! - Transcript events carry cumulative results; each event fully replaces
//!   the published transcript.

pub mod engine;
pub mod session;

pub use engine::{EngineConfig, EngineError, SpeechEngine, TranscriptEvent, TranscriptSegment};
pub use session::{CaptureError, CaptureSession, CaptureState};
