//! Voice input wiring for RostrApp.
//!
//! The session is created lazily on the first mic press and reused for the
//! lifetime of the window. Its callbacks push into a channel the app drains
//! each frame, so transcript previews land in the search field live and the
//! final result triggers a search.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::voice::{NativeEngine, NativeEngineConfig, RecognitionResult, VoiceSession};

use super::app::RostrApp;

/// Voice events routed from session callbacks to the frame loop.
pub enum VoiceUiEvent {
    Transcript(RecognitionResult),
    Error(String),
}

impl RostrApp {
    /// Check whether voice input can work on this machine, without spawning
    /// anything. Returns (supported, status message for the tooltip).
    pub(crate) fn probe_voice(config: &Config) -> (bool, String) {
        if !config.settings.voice.enabled {
            return (false, "Voice input disabled in settings".to_string());
        }
        let (available, status) = NativeEngine::availability(&Self::engine_config(config));
        (available, status)
    }

    fn engine_config(config: &Config) -> NativeEngineConfig {
        let voice = &config.settings.voice;
        let rostr_dir = Config::global_config_dir();
        NativeEngineConfig {
            language: voice.language.clone(),
            model_path: rostr_dir
                .join("whisper-models")
                .join(format!("ggml-{}.bin", voice.whisper_model)),
            capture_dir: rostr_dir,
            silence_window: Duration::from_millis(voice.silence_window_ms),
            max_utterance: Duration::from_secs_f32(voice.max_utterance_secs),
        }
    }

    /// Toggle dictation from the mic button.
    pub(crate) fn toggle_listening(&mut self) {
        if self.listening {
            self.stop_listening();
        } else {
            self.start_listening();
        }
    }

    fn start_listening(&mut self) {
        if self.voice.is_none() && !self.init_voice_session() {
            return;
        }

        let Some(session) = &mut self.voice else {
            return;
        };
        match session.start() {
            Ok(()) => {
                self.listening = true;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("voice start failed: {e}");
                self.error = Some("Failed to start voice recognition".to_string());
            }
        }
    }

    fn stop_listening(&mut self) {
        if let Some(session) = &mut self.voice {
            session.stop();
        }
        self.listening = false;
    }

    /// Build the session on first use. Returns false when the engine is
    /// absent; the caller shows voice as unsupported, not as an error.
    fn init_voice_session(&mut self) -> bool {
        let Some(engine) = NativeEngine::detect(Self::engine_config(&self.config)) else {
            self.voice_supported = false;
            self.voice_status = "Voice recognition not supported on this machine".to_string();
            return false;
        };

        let (tx, rx) = mpsc::channel();
        let result_tx = tx.clone();
        let session = VoiceSession::new(
            engine,
            Duration::from_millis(self.config.settings.voice.silence_window_ms),
            Box::new(move |result| {
                let _ = result_tx.send(VoiceUiEvent::Transcript(result));
            }),
            Some(Box::new(move |message| {
                let _ = tx.send(VoiceUiEvent::Error(message));
            })),
        );

        self.voice = Some(session);
        self.voice_rx = Some(rx);
        true
    }

    /// Pump the session and drain its events into app state. Called once per
    /// frame before rendering.
    pub(crate) fn poll_voice(&mut self) {
        if let Some(session) = &mut self.voice {
            session.poll(Instant::now());
        }

        let mut events = Vec::new();
        if let Some(rx) = &self.voice_rx {
            while let Ok(event) = rx.try_recv() {
                events.push(event);
            }
        }

        let mut finalized = None;
        for event in events {
            match event {
                VoiceUiEvent::Transcript(result) => {
                    self.search_query = result.transcript.clone();
                    if result.is_final {
                        finalized = Some(result.transcript);
                    }
                }
                VoiceUiEvent::Error(message) => {
                    self.error = Some(format!("Voice recognition error: {message}"));
                    self.listening = false;
                }
            }
        }

        if let Some(query) = finalized {
            self.listening = false;
            self.run_search(query);
        }
    }
}
