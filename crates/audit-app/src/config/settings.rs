//! Settings parser for config.toml

use super::types::Settings;
use audit_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "exec-audit";

const DEFAULT_CONFIG: &str = r#"# Executive Self-Audit Configuration

[behavior]
confirm_quit = true     # Ask before quitting with answers recorded

[timing]
advance_delay_ms = 800  # Pause before moving to the next question
results_delay_ms = 300  # Pause before scrolling to the results

[ui]
show_footer = true

[dataset]
# path = "/path/to/dataset.toml"   # Replace the built-in questionnaire
"#;

/// Platform config directory for the app (`~/.config/exec-audit` on Linux)
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Path of the settings file inside `config_dir`
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILENAME)
}

/// Load settings from `config_dir/config.toml`
///
/// Missing or unparsable files fall back to defaults.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_file_path(config_dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a commented default config.toml in `config_dir`
///
/// Never overwrites an existing file. Returns the config file path.
pub fn init_config_dir(config_dir: &Path) -> Result<PathBuf> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", config_dir, e)))?;
    }

    let config_path = config_file_path(config_dir);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}
