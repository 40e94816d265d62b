//! Executive self-audit - terminal questionnaire
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use audit_app::config::{default_config_dir, init_config_dir, load_settings};
use audit_core::logging;
use audit_core::prelude::*;
use clap::Parser;
use exec_audit::headless::HeadlessEvent;
use exec_audit::startup::load_assessment;

/// Executive Stress & Trauma Self-Audit
#[derive(Parser, Debug)]
#[command(name = "exec-audit", version)]
#[command(about = "A confidential stress & trauma self-audit for your terminal", long_about = None)]
struct Args {
    /// Questionnaire dataset (TOML); defaults to the built-in audit
    #[arg(long, value_name = "PATH")]
    dataset: Option<PathBuf>,

    /// Directory holding config.toml
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Write a default config.toml and exit
    #[arg(long)]
    init_config: bool,

    /// Run without the TUI, printing NDJSON events to stdout
    #[arg(long)]
    headless: bool,

    /// Answers for headless mode, e.g. "3,3,0,5"; read from stdin when omitted
    #[arg(long, value_name = "LIST", requires = "headless")]
    answers: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config_dir = args.config_dir.unwrap_or_else(default_config_dir);

    if args.init_config {
        let path = init_config_dir(&config_dir)?;
        println!("{}", path.display());
        return Ok(());
    }

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    logging::init()?;

    let settings = load_settings(&config_dir);
    info!("Config directory: {}", config_dir.display());

    let assessment = match load_assessment(args.dataset.as_deref(), &settings) {
        Ok(assessment) => assessment,
        Err(e) => {
            error!("Failed to load dataset: {}", e);
            if args.headless {
                HeadlessEvent::error(e.to_string(), true).emit();
            }
            return Err(e);
        }
    };

    let result = if args.headless {
        exec_audit::run_headless(assessment, settings, args.answers)
    } else {
        exec_audit::run(assessment, settings).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        if let Ok(dir) = logging::get_log_directory() {
            eprintln!("Logs: {}", dir.display());
        }
    }

    info!("Executive self-audit exiting");
    result
}
