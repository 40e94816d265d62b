//! Configuration file parsing for the self-audit
//!
//! Supports:
//! - `<config dir>/exec-audit/config.toml` - Global settings

pub mod settings;
pub mod types;

pub use settings::{config_file_path, default_config_dir, init_config_dir, load_settings};
pub use types::*;
