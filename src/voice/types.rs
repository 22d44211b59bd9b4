//! Voice input types and events.

/// A normalized transcript update delivered to the session's result callback.
///
/// Interim updates (`is_final == false`) are live previews and may arrive any
/// number of times; exactly one final update closes an utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionResult {
    pub transcript: String,
    /// Engine-reported confidence in [0, 1]; finals are always 1.0.
    pub confidence: f32,
    pub is_final: bool,
}

/// One transcript segment as reported by the engine.
///
/// Engines that produce interim hypotheses send the current best guess with
/// `is_final == false`, then re-send the settled text with `is_final == true`.
/// Engines without interim support only ever send final segments.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptSegment {
    pub text: String,
    pub confidence: Option<f32>,
    pub is_final: bool,
}

impl TranscriptSegment {
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: None,
            is_final: false,
        }
    }

    pub fn fin(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence: Some(confidence),
            is_final: true,
        }
    }
}

/// Raw events produced by a recognition engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Engine began listening
    Started,
    /// New transcript segments (finalized and/or interim)
    Segments(Vec<TranscriptSegment>),
    /// Recognition error
    Error(RecognitionErrorKind),
    /// Engine session ended (platform timeout, stop, or abort)
    Ended,
}

/// Error kinds a recognition engine can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionErrorKind {
    /// No speech was detected before the engine gave up
    NoSpeech,
    /// Microphone missing or capture failed
    AudioCapture,
    /// Microphone permission denied
    NotAllowed,
    /// Network failure (cloud engines)
    Network,
    /// Recognition was aborted
    Aborted,
    /// Anything else, carrying the engine's raw error tag
    Other(String),
}

impl RecognitionErrorKind {
    /// Parse an engine's wire tag into a kind.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "no-speech" => RecognitionErrorKind::NoSpeech,
            "audio-capture" => RecognitionErrorKind::AudioCapture,
            "not-allowed" => RecognitionErrorKind::NotAllowed,
            "network" => RecognitionErrorKind::Network,
            "aborted" => RecognitionErrorKind::Aborted,
            other => RecognitionErrorKind::Other(other.to_string()),
        }
    }

    /// Ready-to-display message for this error kind.
    pub fn message(&self) -> String {
        match self {
            RecognitionErrorKind::NoSpeech => {
                "No speech detected. Please try again.".to_string()
            }
            RecognitionErrorKind::AudioCapture => {
                "Microphone not found. Please check your device.".to_string()
            }
            RecognitionErrorKind::NotAllowed => {
                "Microphone access denied. Please allow microphone access.".to_string()
            }
            RecognitionErrorKind::Network => {
                "Network error. Please check your connection.".to_string()
            }
            RecognitionErrorKind::Aborted => "Speech recognition error: aborted".to_string(),
            RecognitionErrorKind::Other(tag) => format!("Speech recognition error: {tag}"),
        }
    }
}

/// Session lifecycle phase. Drives how `Ended` and `Error` events are
/// interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) enum SessionPhase {
    /// No session running
    #[default]
    Idle,
    /// Engine is capturing speech
    Listening,
    /// Caller requested stop/abort; the engine has not ended yet
    StoppingManually,
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionPhase::Idle => write!(f, "Idle"),
            SessionPhase::Listening => write!(f, "Listening"),
            SessionPhase::StoppingManually => write!(f, "Stopping"),
        }
    }
}
