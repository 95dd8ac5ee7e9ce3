// Settings structs, defaults and TOML persistence

use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::error::ConfigError;
use crate::reading::{OrpAlignment, PunctuationMultipliers};

/// Pacing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Words per minute reading speed (default 300)
    pub wpm: u32,

    /// Lower and upper bound every rate change is clamped to
    pub min_wpm: u32,
    pub max_wpm: u32,

    /// Keyboard speed steps (↑/↓ and Shift+←/→)
    pub wpm_step: u32,
    pub wpm_big_step: u32,

    pub multipliers: PunctuationMultipliers,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            wpm: 300,
            min_wpm: 100,
            max_wpm: 1000,
            wpm_step: 25,
            wpm_big_step: 50,
            multipliers: PunctuationMultipliers::default(),
        }
    }
}

impl TimingConfig {
    /// Allowed rates; a hand-edited file with swapped bounds still yields a
    /// valid range, and zero is never allowed.
    pub fn wpm_range(&self) -> RangeInclusive<u32> {
        let low = self.min_wpm.min(self.max_wpm).max(1);
        let high = self.min_wpm.max(self.max_wpm).max(low);
        low..=high
    }

    pub fn clamp_wpm(&self, wpm: u32) -> u32 {
        let range = self.wpm_range();
        wpm.clamp(*range.start(), *range.end())
    }
}

/// Presentation settings for the reader view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    pub alignment: OrpAlignment,

    /// Dimmed words shown on each side of the focus word
    pub context_words: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            alignment: OrpAlignment::Left,
            context_words: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timing: TimingConfig,
    pub reader: ReaderConfig,
}

impl Config {
    /// Loads `settings.toml` from the platform config directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Returns defaults when `path` does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.timing.multipliers = config.timing.multipliers.sanitized();
        Ok(config)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Creates parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
