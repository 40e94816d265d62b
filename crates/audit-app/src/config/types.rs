//! Configuration types for the self-audit
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - Section sub-types with their defaults

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub timing: TimingSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub dataset: DatasetSettings,
}

impl Settings {
    /// Delay between answering a question and moving to the next one
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.timing.advance_delay_ms)
    }

    /// Delay between revealing the results and scrolling to them
    pub fn results_delay(&self) -> Duration {
        Duration::from_millis(self.timing.results_delay_ms)
    }

    /// Zero delays, used by the headless runner
    pub fn without_delays(mut self) -> Self {
        self.timing.advance_delay_ms = 0;
        self.timing.results_delay_ms = 0;
        self
    }
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting with answers recorded
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { confirm_quit: true }
    }
}

/// Deferred transition timings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimingSettings {
    #[serde(default = "default_advance_delay_ms")]
    pub advance_delay_ms: u64,

    #[serde(default = "default_results_delay_ms")]
    pub results_delay_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            advance_delay_ms: default_advance_delay_ms(),
            results_delay_ms: default_results_delay_ms(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the confidentiality footer
    #[serde(default = "default_true")]
    pub show_footer: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_footer: true }
    }
}

/// Dataset source
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DatasetSettings {
    /// TOML dataset to use instead of the built-in audit
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_advance_delay_ms() -> u64 {
    800
}

fn default_results_delay_ms() -> u64 {
    300
}
