//! Startup helpers: choosing and loading the questionnaire

use std::path::{Path, PathBuf};
use std::sync::Arc;

use audit_app::config::Settings;
use audit_core::prelude::*;
use audit_core::Assessment;

/// Dataset file to use, if any
///
/// The command line wins over `[dataset] path` in the settings; with
/// neither, the built-in questionnaire is used.
pub fn dataset_path(cli: Option<&Path>, settings: &Settings) -> Option<PathBuf> {
    cli.map(Path::to_path_buf)
        .or_else(|| settings.dataset.path.clone())
}

/// Load and validate the questionnaire for this run
pub fn load_assessment(cli: Option<&Path>, settings: &Settings) -> Result<Arc<Assessment>> {
    let assessment = match dataset_path(cli, settings) {
        Some(path) => {
            info!("Loading dataset from {}", path.display());
            Assessment::load(&path)?
        }
        None => {
            debug!("Using built-in dataset");
            Assessment::builtin()
        }
    };

    info!(
        "Questionnaire ready: {} sections, {} questions, max score {}",
        assessment.sections().len(),
        assessment.total_questions(),
        assessment.max_score()
    );
    Ok(Arc::new(assessment))
}
