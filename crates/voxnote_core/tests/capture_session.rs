use std::cell::RefCell;
use std::rc::Rc;
use voxnote_core::{
    CaptureError, CaptureSession, CaptureState, EngineConfig, EngineError, SpeechEngine,
    TranscriptEvent, TranscriptSegment,
};

#[derive(Default)]
struct EngineLog {
    starts: usize,
    stops: usize,
    last_language: Option<String>,
}

/// Scripted engine standing in for the environment-provided recognizer.
struct ScriptedEngine {
    available: bool,
    log: Rc<RefCell<EngineLog>>,
}

impl ScriptedEngine {
    fn available() -> (Self, Rc<RefCell<EngineLog>>) {
        let log = Rc::new(RefCell::new(EngineLog::default()));
        (
            Self {
                available: true,
                log: Rc::clone(&log),
            },
            log,
        )
    }

    fn unavailable() -> Self {
        Self {
            available: false,
            log: Rc::default(),
        }
    }
}

impl SpeechEngine for ScriptedEngine {
    fn is_available(&self) -> bool {
        self.available
    }

    fn start(&mut self, config: &EngineConfig) -> Result<(), EngineError> {
        let mut log = self.log.borrow_mut();
        log.starts += 1;
        log.last_language = Some(config.language.clone());
        Ok(())
    }

    fn stop(&mut self) {
        self.log.borrow_mut().stops += 1;
    }
}

fn event(texts: &[&str]) -> TranscriptEvent {
    TranscriptEvent::new(
        texts
            .iter()
            .map(|text| TranscriptSegment::interim(*text))
            .collect(),
    )
}

#[test]
fn start_refused_when_engine_is_unavailable() {
    let mut session = CaptureSession::new(ScriptedEngine::unavailable());

    assert!(matches!(session.start(), Err(CaptureError::Unavailable)));
    assert_eq!(session.state(), CaptureState::Idle);
    assert_eq!(session.transcript(), "");
}

#[test]
fn start_configures_the_engine_with_fixed_settings() {
    let (engine, log) = ScriptedEngine::available();
    let mut session = CaptureSession::new(engine);

    session.start().unwrap();

    assert_eq!(session.state(), CaptureState::Recording);
    assert_eq!(log.borrow().starts, 1);
    assert_eq!(log.borrow().last_language.as_deref(), Some("pt-BR"));
}

#[test]
fn each_event_fully_replaces_the_transcript() {
    let (engine, _log) = ScriptedEngine::available();
    let mut session = CaptureSession::new(engine);
    session.start().unwrap();

    session.handle_event(&event(&["comprar "]));
    assert_eq!(session.transcript(), "comprar ");

    // Cumulative snapshot: both segments arrive in the next event.
    session.handle_event(&event(&["comprar ", "leite"]));
    assert_eq!(session.transcript(), "comprar leite");

    // The engine may revise earlier interim text; the replacement wins.
    session.handle_event(&event(&["comprar pão"]));
    assert_eq!(session.transcript(), "comprar pão");

    session.handle_event(&event(&[]));
    assert_eq!(session.transcript(), "");
}

#[test]
fn events_outside_recording_are_dropped() {
    let (engine, _log) = ScriptedEngine::available();
    let mut session = CaptureSession::new(engine);

    session.handle_event(&event(&["ignored"]));
    assert_eq!(session.transcript(), "");

    session.start().unwrap();
    session.handle_event(&event(&["kept"]));
    session.stop();

    session.handle_event(&event(&["late arrival"]));
    assert_eq!(session.transcript(), "kept");
}

#[test]
fn stop_signals_the_engine_and_returns_to_idle() {
    let (engine, log) = ScriptedEngine::available();
    let mut session = CaptureSession::new(engine);

    session.start().unwrap();
    session.stop();

    assert_eq!(session.state(), CaptureState::Idle);
    assert_eq!(log.borrow().stops, 1);

    // Stopping an idle session does not reach the engine again.
    session.stop();
    assert_eq!(log.borrow().stops, 1);
}

#[test]
fn restarting_an_active_session_disposes_the_previous_run() {
    let (engine, log) = ScriptedEngine::available();
    let mut session = CaptureSession::new(engine);

    session.start().unwrap();
    session.handle_event(&event(&["primeira tentativa"]));

    session.start().unwrap();

    assert_eq!(log.borrow().stops, 1, "previous run must be stopped, not leaked");
    assert_eq!(log.borrow().starts, 2);
    assert_eq!(session.transcript(), "", "a fresh run restarts the transcript");
}

#[test]
fn engine_error_is_soft_and_parks_the_session() {
    let (engine, log) = ScriptedEngine::available();
    let mut session = CaptureSession::new(engine);

    session.start().unwrap();
    session.handle_event(&event(&["até aqui"]));
    session.handle_error(&EngineError::AudioCapture("mic unplugged".into()));

    assert_eq!(session.state(), CaptureState::Error);
    // The draft content is untouched and the engine is not force-stopped.
    assert_eq!(session.transcript(), "até aqui");
    assert_eq!(log.borrow().stops, 0);

    // Only a fresh start leaves the error state.
    session.handle_event(&event(&["depois do erro"]));
    assert_eq!(session.transcript(), "até aqui");
    session.start().unwrap();
    assert_eq!(session.state(), CaptureState::Recording);
}
