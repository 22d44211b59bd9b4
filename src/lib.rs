//! rostr - resource search and workload assignment client
//!
//! rostr is a desktop front end for a resource-assignment backend: search for
//! staff by natural-language query, review AI-ranked matches, inspect
//! profiles, assign workload hours, and watch aggregate statistics. Matching
//! and workload accounting happen server-side; this crate renders state and
//! issues HTTP requests.
//!
//! ## Input Methods
//!
//! Search queries can be typed or dictated:
//!
//! 1. **Keyboard**: type into the search field and press Enter.
//!
//! 2. **Voice**: the microphone button starts a speech session; interim
//!    transcription previews in the search field live, and one second of
//!    trailing silence finalizes the utterance and runs the search.

pub mod api;
pub mod config;
pub mod domain;
pub mod gui;
pub mod voice;

pub use domain::*;
