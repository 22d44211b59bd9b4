//! Settings configuration types

use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_API_URL;
use crate::domain::EXACT_MATCH_THRESHOLD;

/// General settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Backend connection settings
    #[serde(default)]
    pub api: ApiSettings,

    /// GUI settings
    #[serde(default)]
    pub gui: GuiSettings,

    /// Voice input settings
    #[serde(default)]
    pub voice: VoiceSettings,
}

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Backend base URL. The `ROSTR_API_URL` environment variable takes
    /// precedence over this value.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// GUI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuiSettings {
    /// How many ranked results to request per search
    #[serde(default = "default_top_k")]
    pub search_top_k: u32,

    /// Match score at or above which a result is shown as an exact match
    /// rather than a recommendation (0.0-1.0)
    #[serde(default = "default_exact_threshold")]
    pub exact_threshold: f32,

    /// Dashboard auto-refresh interval in seconds
    #[serde(default = "default_refresh_secs")]
    pub dashboard_refresh_secs: u64,
}

/// Voice input settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Enable the microphone button when a recognition engine is available
    #[serde(default = "default_voice_enabled")]
    pub enabled: bool,

    /// Language for transcription (auto, en, de, etc.)
    #[serde(default = "default_voice_language")]
    pub language: String,

    /// Trailing silence that finalizes an utterance (in milliseconds)
    #[serde(default = "default_silence_window_ms")]
    pub silence_window_ms: u64,

    /// Maximum length of a single utterance capture (in seconds)
    #[serde(default = "default_max_utterance_secs")]
    pub max_utterance_secs: f32,

    /// Whisper model used by the native engine (tiny, base, small, medium)
    #[serde(default = "default_whisper_model")]
    pub whisper_model: String,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_top_k() -> u32 {
    20
}

fn default_exact_threshold() -> f32 {
    EXACT_MATCH_THRESHOLD
}

fn default_refresh_secs() -> u64 {
    30
}

fn default_voice_enabled() -> bool {
    true
}

fn default_voice_language() -> String {
    "en".to_string()
}

fn default_silence_window_ms() -> u64 {
    1000
}

fn default_max_utterance_secs() -> f32 {
    30.0
}

fn default_whisper_model() -> String {
    "base".to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            search_top_k: default_top_k(),
            exact_threshold: default_exact_threshold(),
            dashboard_refresh_secs: default_refresh_secs(),
        }
    }
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            enabled: default_voice_enabled(),
            language: default_voice_language(),
            silence_window_ms: default_silence_window_ms(),
            max_utterance_secs: default_max_utterance_secs(),
            whisper_model: default_whisper_model(),
        }
    }
}
