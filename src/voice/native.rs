//! Native recognition engine built on sox and whisper-cpp.
//!
//! Captures microphone audio with `rec` (sox) using its silence detection to
//! chunk utterances, transcribes each chunk with `whisper-cli`, and queues the
//! text as finalized segments. The capture silence duration matches the
//! session's silence window, so chunk boundaries and the session's deadline
//! coincide.

use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use tracing::{debug, warn};

use super::engine::RecognitionEngine;
use super::types::{EngineEvent, RecognitionErrorKind, TranscriptSegment};

/// Configuration for the native engine.
#[derive(Debug, Clone)]
pub struct NativeEngineConfig {
    /// Language passed to whisper ("auto" to detect)
    pub language: String,
    /// Path to the ggml whisper model file
    pub model_path: PathBuf,
    /// Directory for the temporary capture file
    pub capture_dir: PathBuf,
    /// Trailing silence that ends one capture chunk
    pub silence_window: Duration,
    /// Hard cap on a single capture chunk
    pub max_utterance: Duration,
}

/// Commands to the capture thread.
enum EngineCommand {
    Start,
    Stop,
    Abort,
}

/// Speech engine backed by local sox + whisper-cpp processes.
///
/// Obtain one via [`NativeEngine::detect`]; `None` means the machine cannot
/// do voice input (missing binaries or model) and the caller should present
/// voice as unsupported rather than as an error.
pub struct NativeEngine {
    command_tx: Sender<EngineCommand>,
    event_rx: Receiver<EngineEvent>,
}

impl NativeEngine {
    /// Check whether the engine can run, with a human-readable status.
    pub fn availability(config: &NativeEngineConfig) -> (bool, String) {
        if !binary_on_path("rec") {
            return (
                false,
                "sox not found. Install with: brew install sox".to_string(),
            );
        }
        if !binary_on_path("whisper-cli") {
            return (
                false,
                "whisper-cli not found. Install with: brew install whisper-cpp".to_string(),
            );
        }
        if !config.model_path.exists() {
            return (
                false,
                format!("Whisper model not found at {}", config.model_path.display()),
            );
        }
        (true, "Voice input ready".to_string())
    }

    /// Spawn the capture thread if the machine supports voice input.
    pub fn detect(config: NativeEngineConfig) -> Option<Self> {
        let (available, status) = Self::availability(&config);
        if !available {
            debug!("native voice engine unavailable: {status}");
            return None;
        }

        let (command_tx, command_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        thread::spawn(move || engine_thread(config, command_rx, event_tx));

        Some(Self {
            command_tx,
            event_rx,
        })
    }
}

impl RecognitionEngine for NativeEngine {
    fn start(&mut self) -> Result<()> {
        self.command_tx
            .send(EngineCommand::Start)
            .map_err(|_| anyhow!("voice capture thread is gone"))
    }

    fn stop(&mut self) {
        let _ = self.command_tx.send(EngineCommand::Stop);
    }

    fn abort(&mut self) {
        let _ = self.command_tx.send(EngineCommand::Abort);
    }

    fn poll_events(&mut self) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            events.push(event);
        }
        events
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptureState {
    Idle,
    Capturing,
}

/// Capture thread: owns the rec process and runs whisper between chunks.
fn engine_thread(
    config: NativeEngineConfig,
    command_rx: Receiver<EngineCommand>,
    event_tx: Sender<EngineEvent>,
) {
    let mut state = CaptureState::Idle;
    let mut capture: Option<Child> = None;
    let capture_path = config.capture_dir.join("voice_capture.wav");

    let _ = std::fs::create_dir_all(&config.capture_dir);

    loop {
        match command_rx.recv_timeout(Duration::from_millis(10)) {
            Ok(EngineCommand::Start) => {
                if state == CaptureState::Idle {
                    match start_capture_process(&capture_path, &config) {
                        Ok(child) => {
                            capture = Some(child);
                            state = CaptureState::Capturing;
                            let _ = event_tx.send(EngineEvent::Started);
                        }
                        Err(e) => {
                            warn!("failed to start capture: {e}");
                            let _ = event_tx
                                .send(EngineEvent::Error(RecognitionErrorKind::AudioCapture));
                            let _ = event_tx.send(EngineEvent::Ended);
                        }
                    }
                }
            }
            Ok(EngineCommand::Stop) => {
                if let Some(process) = capture.take() {
                    stop_capture_process(process);
                    // Graceful stop flushes whatever was already captured.
                    if let Ok(text) = transcribe(&capture_path, &config) {
                        let _ = event_tx
                            .send(EngineEvent::Segments(vec![TranscriptSegment::fin(text, 1.0)]));
                    }
                }
                let _ = std::fs::remove_file(&capture_path);
                if state != CaptureState::Idle {
                    state = CaptureState::Idle;
                    let _ = event_tx.send(EngineEvent::Ended);
                }
            }
            Ok(EngineCommand::Abort) => {
                if let Some(mut process) = capture.take() {
                    let _ = process.kill();
                    let _ = process.wait();
                }
                let _ = std::fs::remove_file(&capture_path);
                if state != CaptureState::Idle {
                    state = CaptureState::Idle;
                    let _ = event_tx.send(EngineEvent::Error(RecognitionErrorKind::Aborted));
                    let _ = event_tx.send(EngineEvent::Ended);
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                if let Some(mut process) = capture.take() {
                    let _ = process.kill();
                    let _ = process.wait();
                }
                let _ = std::fs::remove_file(&capture_path);
                break;
            }
        }

        // A chunk ends when rec exits on its own (silence or max duration).
        if state == CaptureState::Capturing {
            if let Some(process) = &mut capture {
                match process.try_wait() {
                    Ok(Some(_)) => {
                        capture = None;
                        match transcribe(&capture_path, &config) {
                            Ok(text) => {
                                let _ = event_tx.send(EngineEvent::Segments(vec![
                                    TranscriptSegment::fin(text, 1.0),
                                ]));
                                // Keep listening for a follow-up chunk.
                                match start_capture_process(&capture_path, &config) {
                                    Ok(child) => capture = Some(child),
                                    Err(e) => {
                                        warn!("failed to restart capture: {e}");
                                        state = CaptureState::Idle;
                                        let _ = event_tx.send(EngineEvent::Ended);
                                    }
                                }
                            }
                            Err(TranscribeError::NoSpeech) => {
                                state = CaptureState::Idle;
                                let _ = event_tx
                                    .send(EngineEvent::Error(RecognitionErrorKind::NoSpeech));
                                let _ = event_tx.send(EngineEvent::Ended);
                            }
                            Err(TranscribeError::Failed(message)) => {
                                warn!("transcription failed: {message}");
                                state = CaptureState::Idle;
                                let _ = event_tx.send(EngineEvent::Error(
                                    RecognitionErrorKind::Other(message),
                                ));
                                let _ = event_tx.send(EngineEvent::Ended);
                            }
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        warn!("capture process error: {e}");
                        capture = None;
                        state = CaptureState::Idle;
                        let _ =
                            event_tx.send(EngineEvent::Error(RecognitionErrorKind::AudioCapture));
                        let _ = event_tx.send(EngineEvent::Ended);
                    }
                }
            }
        }
    }
}

/// Start a `rec` process that waits for speech and stops on trailing silence.
fn start_capture_process(path: &PathBuf, config: &NativeEngineConfig) -> Result<Child, String> {
    Command::new("rec")
        .args([
            "-r",
            "16000", // 16kHz sample rate (whisper requirement)
            "-c",
            "1", // Mono
            "-b",
            "16", // 16-bit
            path.to_str().unwrap_or("voice_capture.wav"),
            "silence",
            "1",
            "0.1",
            "1%", // Wait for sound
            "1",
            &format!("{:.1}", config.silence_window.as_secs_f32()),
            "1%", // Stop on silence
            "trim",
            "0",
            &format!("{:.0}", config.max_utterance.as_secs_f32()),
        ])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("Failed to start recording: {e}"))
}

/// Stop a capture process gracefully.
///
/// SIGTERM first so sox finalizes the WAV header, then kill.
fn stop_capture_process(mut process: Child) {
    #[cfg(unix)]
    {
        let _ = Command::new("kill")
            .args(["-TERM", &process.id().to_string()])
            .output();
        thread::sleep(Duration::from_millis(100));
    }
    let _ = process.kill();
    let _ = process.wait();
}

enum TranscribeError {
    NoSpeech,
    Failed(String),
}

/// Run whisper-cpp on the captured chunk.
fn transcribe(audio_path: &PathBuf, config: &NativeEngineConfig) -> Result<String, TranscribeError> {
    if !audio_path.exists() {
        return Err(TranscribeError::NoSpeech);
    }

    let output = Command::new("whisper-cli")
        .args([
            "-m",
            config.model_path.to_str().unwrap_or("model.bin"),
            "-f",
            audio_path.to_str().unwrap_or("voice_capture.wav"),
            "--no-timestamps",
            "-l",
            &config.language,
        ])
        .output()
        .map_err(|e| TranscribeError::Failed(format!("Failed to run whisper: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(TranscribeError::Failed(format!("Whisper failed: {stderr}")));
    }

    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if text.is_empty() {
        return Err(TranscribeError::NoSpeech);
    }
    Ok(text)
}

fn binary_on_path(name: &str) -> bool {
    Command::new("which")
        .arg(name)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
