//! Recognition engine abstraction.

use anyhow::Result;

use super::types::EngineEvent;

/// A continuous speech-recognition engine.
///
/// Implementations capture audio on their own thread and queue
/// [`EngineEvent`]s; the session drains them via [`poll_events`] from the UI
/// loop. All control methods are non-blocking.
///
/// [`poll_events`]: RecognitionEngine::poll_events
pub trait RecognitionEngine {
    /// Begin a recognition session.
    ///
    /// May fail synchronously (device already claimed, process spawn
    /// failure). Calling start on an engine that is already running is an
    /// implementation-defined error; [`super::VoiceSession`] never does it.
    fn start(&mut self) -> Result<()>;

    /// Request a graceful stop: in-flight audio is flushed and final
    /// segments may still arrive before `Ended`.
    fn stop(&mut self);

    /// Hard abort: discard in-flight recognition and end as soon as
    /// possible.
    fn abort(&mut self);

    /// Drain queued events (non-blocking).
    fn poll_events(&mut self) -> Vec<EngineEvent>;
}
