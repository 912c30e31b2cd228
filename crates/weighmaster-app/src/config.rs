//! Configuration management for weighmaster
//!
//! Config stored at: ~/.config/weighmaster/config.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use weighmaster_domain::service::price::DEFAULT_PRICE;
use weighmaster_types::{ConfigError, Result};

use crate::indicator::Tone;

/// Audio host used by the alarm indicator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioKind {
    /// Sine tone on the default output device
    #[default]
    Synth,
    /// Terminal bell on stderr
    Bell,
    /// Discard all tones
    Silent,
}

impl std::fmt::Display for AudioKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudioKind::Synth => write!(f, "synth"),
            AudioKind::Bell => write!(f, "bell"),
            AudioKind::Silent => write!(f, "silent"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Milliseconds between alarm pings
    #[serde(default = "default_alarm_interval_ms")]
    pub alarm_interval_ms: u64,

    /// Ping tone pitch
    #[serde(default = "default_tone_frequency_hz")]
    pub tone_frequency_hz: f32,

    /// Ping tone length in milliseconds
    #[serde(default = "default_tone_duration_ms")]
    pub tone_duration_ms: u64,

    /// Ping tone volume (0.0 - 1.0)
    #[serde(default = "default_tone_gain")]
    pub tone_gain: f32,

    /// Price a cleared form starts with
    #[serde(default = "default_price")]
    pub default_price: f64,

    /// Start with the alarm muted
    #[serde(default)]
    pub start_muted: bool,

    /// Audio host
    #[serde(default)]
    pub audio: AudioKind,
}

fn default_alarm_interval_ms() -> u64 {
    4000
}

fn default_tone_frequency_hz() -> f32 {
    740.0
}

fn default_tone_duration_ms() -> u64 {
    220
}

fn default_tone_gain() -> f32 {
    0.2
}

fn default_price() -> f64 {
    DEFAULT_PRICE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alarm_interval_ms: default_alarm_interval_ms(),
            tone_frequency_hz: default_tone_frequency_hz(),
            tone_duration_ms: default_tone_duration_ms(),
            tone_gain: default_tone_gain(),
            default_price: default_price(),
            start_muted: false,
            audio: AudioKind::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("weighmaster");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    pub fn alarm_interval(&self) -> Duration {
        Duration::from_millis(self.alarm_interval_ms)
    }

    pub fn tone(&self) -> Tone {
        Tone {
            frequency_hz: self.tone_frequency_hz,
            duration: Duration::from_millis(self.tone_duration_ms),
            gain: self.tone_gain.clamp(0.0, 1.0),
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Weighmaster Configuration")?;
        writeln!(f, "=========================")?;
        writeln!(f)?;
        writeln!(f, "Alarm interval: {} ms", self.alarm_interval_ms)?;
        writeln!(
            f,
            "Tone:           {} Hz, {} ms, gain {}",
            self.tone_frequency_hz, self.tone_duration_ms, self.tone_gain
        )?;
        writeln!(f, "Default price:  {}", self.default_price)?;
        writeln!(f, "Start muted:    {}", self.start_muted)?;
        writeln!(f, "Audio:          {}", self.audio)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
