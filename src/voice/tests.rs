//! Unit tests for the voice session state machine.
//!
//! All tests drive the transition function with synthetic events and
//! explicit instants; no audio, timers, or sleeping involved.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;

use super::engine::RecognitionEngine;
use super::session::VoiceSession;
use super::types::{EngineEvent, RecognitionErrorKind, RecognitionResult, TranscriptSegment};

/// Engine double that records control calls.
#[derive(Default)]
struct ScriptedEngine {
    calls: Rc<RefCell<Vec<&'static str>>>,
    start_fails: bool,
}

impl RecognitionEngine for ScriptedEngine {
    fn start(&mut self) -> Result<()> {
        if self.start_fails {
            anyhow::bail!("device busy");
        }
        self.calls.borrow_mut().push("start");
        Ok(())
    }

    fn stop(&mut self) {
        self.calls.borrow_mut().push("stop");
    }

    fn abort(&mut self) {
        self.calls.borrow_mut().push("abort");
    }

    fn poll_events(&mut self) -> Vec<EngineEvent> {
        Vec::new()
    }
}

struct Harness {
    session: VoiceSession<ScriptedEngine>,
    calls: Rc<RefCell<Vec<&'static str>>>,
    results: Rc<RefCell<Vec<RecognitionResult>>>,
    errors: Rc<RefCell<Vec<String>>>,
    t0: Instant,
}

impl Harness {
    fn new() -> Self {
        Self::with_window(Duration::from_millis(1000))
    }

    fn with_window(window: Duration) -> Self {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let results = Rc::new(RefCell::new(Vec::new()));
        let errors = Rc::new(RefCell::new(Vec::new()));

        let engine = ScriptedEngine {
            calls: calls.clone(),
            start_fails: false,
        };
        let results_sink = results.clone();
        let errors_sink = errors.clone();
        let session = VoiceSession::new(
            engine,
            window,
            Box::new(move |result| results_sink.borrow_mut().push(result)),
            Some(Box::new(move |message| {
                errors_sink.borrow_mut().push(message)
            })),
        );

        Self {
            session,
            calls,
            results,
            errors,
            t0: Instant::now(),
        }
    }

    fn at(&self, ms: u64) -> Instant {
        self.t0 + Duration::from_millis(ms)
    }

    fn finals(&self) -> Vec<RecognitionResult> {
        self.results
            .borrow()
            .iter()
            .filter(|r| r.is_final)
            .cloned()
            .collect()
    }
}

#[test]
fn test_interim_events_emit_live_preview() {
    let mut h = Harness::new();
    h.session.start().unwrap();

    h.session.handle_event(
        EngineEvent::Segments(vec![TranscriptSegment::interim("find me")]),
        h.at(0),
    );
    h.session.handle_event(
        EngineEvent::Segments(vec![TranscriptSegment::interim("find me a react")]),
        h.at(200),
    );

    let results = h.results.borrow();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| !r.is_final));
    assert_eq!(results[1].transcript, "find me a react");
    // No engine-reported confidence on interim hypotheses
    assert_eq!(results[1].confidence, 0.5);
}

#[test]
fn test_preview_combines_accumulator_and_interim() {
    let mut h = Harness::new();
    h.session.start().unwrap();

    h.session.handle_event(
        EngineEvent::Segments(vec![
            TranscriptSegment::fin("find me", 0.9),
            TranscriptSegment::interim("a react developer"),
        ]),
        h.at(0),
    );

    let results = h.results.borrow();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].transcript, "find me a react developer");
    assert_eq!(results[0].confidence, 0.5); // last segment is interim
    assert!(!results[0].is_final);
}

#[test]
fn test_engine_end_finalizes_accumulated_segments_in_order() {
    let mut h = Harness::new();
    h.session.start().unwrap();

    h.session.handle_event(
        EngineEvent::Segments(vec![TranscriptSegment::fin("find me", 0.9)]),
        h.at(0),
    );
    h.session.handle_event(
        EngineEvent::Segments(vec![TranscriptSegment::fin("a python expert", 0.8)]),
        h.at(300),
    );
    h.session.handle_event(EngineEvent::Ended, h.at(600));

    let finals = h.finals();
    assert_eq!(finals.len(), 1);
    assert_eq!(finals[0].transcript, "find me a python expert");
    assert_eq!(finals[0].confidence, 1.0);
}

#[test]
fn test_manual_stop_never_emits_final() {
    let mut h = Harness::new();
    h.session.start().unwrap();

    h.session.handle_event(
        EngineEvent::Segments(vec![TranscriptSegment::fin("half a", 0.9)]),
        h.at(0),
    );
    h.session.stop();
    // Engine acknowledges the stop with an aborted error, then ends.
    h.session
        .handle_event(EngineEvent::Error(RecognitionErrorKind::Aborted), h.at(50));
    h.session.handle_event(EngineEvent::Ended, h.at(60));

    assert!(h.finals().is_empty());
    assert!(h.errors.borrow().is_empty());
    assert!(h.calls.borrow().contains(&"stop"));
}

#[test]
fn test_stop_before_any_speech_is_silent() {
    let mut h = Harness::new();
    h.session.start().unwrap();
    h.session.stop();
    h.session
        .handle_event(EngineEvent::Error(RecognitionErrorKind::Aborted), h.at(10));
    h.session.handle_event(EngineEvent::Ended, h.at(20));

    assert!(h.results.borrow().is_empty());
    assert!(h.errors.borrow().is_empty());
}

#[test]
fn test_no_speech_with_content_finalizes_instead_of_erroring() {
    let mut h = Harness::new();
    h.session.start().unwrap();

    h.session.handle_event(
        EngineEvent::Segments(vec![TranscriptSegment::fin("Hello world", 0.9)]),
        h.at(0),
    );
    h.session.handle_event(
        EngineEvent::Error(RecognitionErrorKind::NoSpeech),
        h.at(2000),
    );

    let finals = h.finals();
    assert_eq!(finals.len(), 1);
    assert_eq!(
        finals[0],
        RecognitionResult {
            transcript: "Hello world".to_string(),
            confidence: 1.0,
            is_final: true,
        }
    );
    assert!(h.errors.borrow().is_empty());

    // The engine's own end must not produce a second final.
    h.session.handle_event(EngineEvent::Ended, h.at(2050));
    assert_eq!(h.finals().len(), 1);
}

#[test]
fn test_no_speech_without_content_reports_error() {
    let mut h = Harness::new();
    h.session.start().unwrap();
    h.session.handle_event(
        EngineEvent::Error(RecognitionErrorKind::NoSpeech),
        h.at(3000),
    );

    assert!(h.finals().is_empty());
    assert_eq!(
        h.errors.borrow().as_slice(),
        ["No speech detected. Please try again."]
    );
}

#[test]
fn test_silence_window_finalizes_and_stops_engine_once() {
    let mut h = Harness::new();
    h.session.start().unwrap();

    h.session.handle_event(
        EngineEvent::Segments(vec![TranscriptSegment::fin("deploy the service", 0.9)]),
        h.at(0),
    );

    // Just under the window: nothing fires.
    h.session.tick(h.at(999));
    assert!(h.finals().is_empty());

    // Window elapsed: one final plus an engine stop request.
    h.session.tick(h.at(1000));
    let finals = h.finals();
    assert_eq!(finals.len(), 1);
    assert_eq!(finals[0].transcript, "deploy the service");
    assert_eq!(h.calls.borrow().as_slice(), ["start", "stop"]);

    // A later tick or engine end must not emit again.
    h.session.tick(h.at(2500));
    h.session.handle_event(EngineEvent::Ended, h.at(2600));
    assert_eq!(h.finals().len(), 1);
}

#[test]
fn test_new_speech_reschedules_silence_window() {
    let mut h = Harness::new();
    h.session.start().unwrap();

    h.session.handle_event(
        EngineEvent::Segments(vec![TranscriptSegment::fin("find", 0.9)]),
        h.at(0),
    );
    h.session.handle_event(
        EngineEvent::Segments(vec![TranscriptSegment::fin("rust developers", 0.9)]),
        h.at(900),
    );

    // 1s after the first event but only 100ms after the second.
    h.session.tick(h.at(1000));
    assert!(h.finals().is_empty());

    h.session.tick(h.at(1900));
    assert_eq!(h.finals()[0].transcript, "find rust developers");
}

#[test]
fn test_double_start_is_ignored() {
    let mut h = Harness::new();
    h.session.start().unwrap();
    h.session.handle_event(
        EngineEvent::Segments(vec![TranscriptSegment::fin("hello", 0.9)]),
        h.at(0),
    );

    // Second start while listening: no engine call, no state reset.
    h.session.start().unwrap();
    assert_eq!(h.calls.borrow().as_slice(), ["start"]);

    h.session.handle_event(EngineEvent::Ended, h.at(500));
    assert_eq!(h.finals()[0].transcript, "hello");
}

#[test]
fn test_session_is_reusable_after_end() {
    let mut h = Harness::new();
    h.session.start().unwrap();
    h.session.handle_event(
        EngineEvent::Segments(vec![TranscriptSegment::fin("first query", 0.9)]),
        h.at(0),
    );
    h.session.handle_event(EngineEvent::Ended, h.at(100));

    h.session.start().unwrap();
    h.session.handle_event(EngineEvent::Started, h.at(200));
    h.session.handle_event(
        EngineEvent::Segments(vec![TranscriptSegment::fin("second query", 0.9)]),
        h.at(300),
    );
    h.session.handle_event(EngineEvent::Ended, h.at(400));

    let finals = h.finals();
    assert_eq!(finals.len(), 2);
    assert_eq!(finals[0].transcript, "first query");
    assert_eq!(finals[1].transcript, "second query");
    assert_eq!(h.calls.borrow().as_slice(), ["start", "start"]);
}

#[test]
fn test_unknown_error_kind_reaches_caller_verbatim() {
    let mut h = Harness::new();
    h.session.start().unwrap();
    h.session.handle_event(
        EngineEvent::Error(RecognitionErrorKind::Other("aborted-by-device".to_string())),
        h.at(10),
    );

    let errors = h.errors.borrow();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("aborted-by-device"));
}

#[test]
fn test_known_error_kinds_use_fixed_messages() {
    assert_eq!(
        RecognitionErrorKind::from_tag("audio-capture").message(),
        "Microphone not found. Please check your device."
    );
    assert_eq!(
        RecognitionErrorKind::from_tag("not-allowed").message(),
        "Microphone access denied. Please allow microphone access."
    );
    assert_eq!(
        RecognitionErrorKind::from_tag("network").message(),
        "Network error. Please check your connection."
    );
    assert_eq!(
        RecognitionErrorKind::from_tag("warp-drive-offline"),
        RecognitionErrorKind::Other("warp-drive-offline".to_string())
    );
}

#[test]
fn test_aborted_without_manual_stop_reports_error() {
    let mut h = Harness::new();
    h.session.start().unwrap();
    h.session
        .handle_event(EngineEvent::Error(RecognitionErrorKind::Aborted), h.at(10));

    assert_eq!(
        h.errors.borrow().as_slice(),
        ["Speech recognition error: aborted"]
    );
}

#[test]
fn test_started_event_resets_leftover_state() {
    let mut h = Harness::new();
    h.session.start().unwrap();
    h.session.handle_event(
        EngineEvent::Segments(vec![TranscriptSegment::fin("stale", 0.9)]),
        h.at(0),
    );

    // Engine restarted on its own; leftover accumulator must not leak into
    // the new utterance.
    h.session.handle_event(EngineEvent::Started, h.at(100));
    h.session.handle_event(
        EngineEvent::Segments(vec![TranscriptSegment::fin("fresh", 0.9)]),
        h.at(200),
    );
    h.session.handle_event(EngineEvent::Ended, h.at(300));

    let finals = h.finals();
    assert_eq!(finals.len(), 1);
    assert_eq!(finals[0].transcript, "fresh");
}

#[test]
fn test_empty_interim_emits_nothing() {
    let mut h = Harness::new();
    h.session.start().unwrap();
    h.session.handle_event(
        EngineEvent::Segments(vec![TranscriptSegment::interim("   ")]),
        h.at(0),
    );
    assert!(h.results.borrow().is_empty());
}

#[test]
fn test_start_failure_leaves_session_restartable() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let results: Rc<RefCell<Vec<RecognitionResult>>> = Rc::new(RefCell::new(Vec::new()));
    let results_sink = results.clone();

    let engine = ScriptedEngine {
        calls: calls.clone(),
        start_fails: true,
    };
    let mut session = VoiceSession::new(
        engine,
        Duration::from_millis(1000),
        Box::new(move |result| results_sink.borrow_mut().push(result)),
        None,
    );

    assert!(session.start().is_err());
    assert!(!session.is_listening());
    // A failed start must not poison the next attempt.
    assert!(session.start().is_err());
}

#[test]
fn test_confidence_comes_from_last_segment() {
    let mut h = Harness::new();
    h.session.start().unwrap();
    h.session.handle_event(
        EngineEvent::Segments(vec![TranscriptSegment::fin("senior backend engineer", 0.87)]),
        h.at(0),
    );

    let results = h.results.borrow();
    assert_eq!(results[0].confidence, 0.87);
}
