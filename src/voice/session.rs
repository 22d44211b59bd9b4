//! Voice session state machine.
//!
//! Wraps a [`RecognitionEngine`] and turns its raw event stream into a
//! coherent transcript stream: interim previews while the user speaks, then
//! exactly one final result per utterance, finalized by trailing silence, by
//! a no-speech signal arriving after content, or by the engine ending on its
//! own. Manual stop/abort never produces a late final result.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::debug;

use super::engine::RecognitionEngine;
use super::types::{EngineEvent, RecognitionErrorKind, RecognitionResult, SessionPhase};

/// Trailing silence that finalizes an utterance.
pub const DEFAULT_SILENCE_WINDOW: Duration = Duration::from_millis(1000);

/// Callback receiving transcript updates.
pub type ResultCallback = Box<dyn FnMut(RecognitionResult)>;

/// Callback receiving display-ready error messages.
pub type ErrorCallback = Box<dyn FnMut(String)>;

/// A reusable speech-to-text session over a recognition engine.
///
/// One instance serves many start/stop cycles. Drive it from the UI loop:
/// call [`poll`] once per frame; it drains engine events through the
/// transition function and checks the silence deadline.
///
/// [`poll`]: VoiceSession::poll
pub struct VoiceSession<E: RecognitionEngine> {
    engine: E,
    phase: SessionPhase,
    /// Finalized transcript segments for the current utterance. Authoritative
    /// for every final emission; cleared as soon as a final result goes out.
    accumulator: String,
    /// When the silence timer fires. `None` means no timer outstanding.
    silence_deadline: Option<Instant>,
    silence_window: Duration,
    /// Set before asking the engine to stop/abort, reset on session start.
    /// Gates whether `Ended` may synthesize a final result.
    manual_stop: bool,
    on_result: ResultCallback,
    on_error: Option<ErrorCallback>,
}

impl<E: RecognitionEngine> VoiceSession<E> {
    pub fn new(
        engine: E,
        silence_window: Duration,
        on_result: ResultCallback,
        on_error: Option<ErrorCallback>,
    ) -> Self {
        Self {
            engine,
            phase: SessionPhase::Idle,
            accumulator: String::new(),
            silence_deadline: None,
            silence_window,
            manual_stop: false,
            on_result,
            on_error,
        }
    }

    /// True while a session is capturing speech.
    pub fn is_listening(&self) -> bool {
        self.phase == SessionPhase::Listening
    }

    /// Begin a new utterance.
    ///
    /// A second call while a session is running is ignored, so a double-click
    /// on the mic button cannot corrupt the accumulator. Errors out only when
    /// the engine itself fails to start; the session stays idle and can be
    /// started again.
    pub fn start(&mut self) -> Result<()> {
        if self.phase != SessionPhase::Idle {
            return Ok(());
        }

        self.accumulator.clear();
        self.manual_stop = false;
        self.silence_deadline = None;
        self.engine.start()?;
        self.phase = SessionPhase::Listening;
        debug!("voice session started");
        Ok(())
    }

    /// End the session on purpose. No final result will be emitted for
    /// whatever has accumulated; the caller has already moved on.
    pub fn stop(&mut self) {
        self.manual_stop = true;
        self.silence_deadline = None;
        self.engine.stop();
        if self.phase == SessionPhase::Listening {
            self.phase = SessionPhase::StoppingManually;
        }
        debug!("voice session stopped by caller");
    }

    /// Forceful teardown: like [`stop`](VoiceSession::stop) but discards
    /// in-flight recognition instead of flushing it.
    pub fn abort(&mut self) {
        self.manual_stop = true;
        self.silence_deadline = None;
        self.engine.abort();
        if self.phase == SessionPhase::Listening {
            self.phase = SessionPhase::StoppingManually;
        }
        debug!("voice session aborted");
    }

    /// Drain engine events and check the silence deadline. Call once per
    /// frame with the current time.
    pub fn poll(&mut self, now: Instant) {
        for event in self.engine.poll_events() {
            self.handle_event(event, now);
        }
        self.tick(now);
    }

    /// The transition function: feed one engine event into the state
    /// machine. Public so tests can drive the session deterministically.
    pub fn handle_event(&mut self, event: EngineEvent, now: Instant) {
        match event {
            EngineEvent::Started => {
                // Engines can restart sessions on their own; re-initialize
                // rather than trusting state left over from the last cycle.
                self.accumulator.clear();
                self.manual_stop = false;
                self.silence_deadline = None;
                self.phase = SessionPhase::Listening;
            }
            EngineEvent::Segments(segments) => {
                self.silence_deadline = None;

                let confidence = segments.last().and_then(|segment| segment.confidence);
                let mut interim = String::new();
                for segment in &segments {
                    if segment.is_final {
                        self.accumulator.push_str(&segment.text);
                        self.accumulator.push(' ');
                        debug!("finalized segment: {}", segment.text);
                    } else {
                        interim.push_str(&segment.text);
                    }
                }

                let current = format!("{}{}", self.accumulator, interim);
                let current = current.trim();
                if !current.is_empty() {
                    (self.on_result)(RecognitionResult {
                        transcript: current.to_string(),
                        confidence: confidence.unwrap_or(0.5),
                        is_final: false,
                    });
                }

                self.silence_deadline = Some(now + self.silence_window);
            }
            EngineEvent::Error(kind) => {
                self.silence_deadline = None;
                self.handle_error(kind);
            }
            EngineEvent::Ended => {
                self.silence_deadline = None;
                // Fallback finalize for engines that end sessions on their
                // own (platform timeout) before the silence timer fired.
                if !self.manual_stop && !self.accumulator.trim().is_empty() {
                    self.emit_final();
                }
                self.phase = SessionPhase::Idle;
                debug!("voice session ended");
            }
        }
    }

    /// Fire the silence timer if its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        let Some(deadline) = self.silence_deadline else {
            return;
        };
        if now < deadline || self.phase != SessionPhase::Listening {
            return;
        }

        self.silence_deadline = None;
        debug!("silence window elapsed, finalizing");
        if !self.accumulator.trim().is_empty() {
            self.emit_final();
        }
        // Engine-driven stop, not a manual one: `manual_stop` stays false,
        // and the emptied accumulator keeps `Ended` from emitting again.
        self.engine.stop();
    }

    fn handle_error(&mut self, kind: RecognitionErrorKind) {
        // No speech after we already have content is a success: finalize it.
        if kind == RecognitionErrorKind::NoSpeech && !self.accumulator.trim().is_empty() {
            self.emit_final();
            return;
        }

        // The engine acknowledges stop()/abort() with an aborted error.
        if kind == RecognitionErrorKind::Aborted && self.manual_stop {
            return;
        }

        tracing::warn!("speech recognition error: {kind:?}");
        if let Some(on_error) = &mut self.on_error {
            on_error(kind.message());
        }
    }

    fn emit_final(&mut self) {
        let transcript = self.accumulator.trim().to_string();
        self.accumulator.clear();
        (self.on_result)(RecognitionResult {
            transcript,
            confidence: 1.0,
            is_final: true,
        });
    }
}
