//! Voice input: dictate a search query instead of typing it.
//!
//! This module provides:
//! 1. A recognition-engine abstraction so the session logic is testable
//!    without audio hardware
//! 2. VoiceSession: the session state machine that merges interim and
//!    finalized transcript segments, detects trailing silence, and emits
//!    exactly one final transcript per utterance
//! 3. NativeEngine: a local engine using `sox` (rec command) for capture and
//!    `whisper-cli` (from whisper-cpp) for transcription
//!
//! The GUI constructs a session lazily on the first mic press, keeps it for
//! the lifetime of the window, and polls it once per frame.

mod engine;
mod native;
mod session;
mod types;

#[cfg(test)]
mod tests;

pub use engine::RecognitionEngine;
pub use native::{NativeEngine, NativeEngineConfig};
pub use session::{DEFAULT_SILENCE_WINDOW, ErrorCallback, ResultCallback, VoiceSession};
pub use types::{EngineEvent, RecognitionErrorKind, RecognitionResult, TranscriptSegment};
