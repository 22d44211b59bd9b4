//! Configuration loading and persistence.
//!
//! One global config file at `~/.rostr/config.toml`, auto-created on first
//! load. Every field has a serde default so partial files keep working across
//! upgrades.

mod io;
mod settings;

pub use settings::{ApiSettings, GuiSettings, Settings, VoiceSettings};

use serde::{Deserialize, Serialize};

/// Root of the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}
