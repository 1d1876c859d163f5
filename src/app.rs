//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - installs the log subscriber
//! - resolves the run configuration
//! - runs the extraction pipeline and prints the report

use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::domain::{DEFAULT_PDF_PATH, DEFAULT_REQUIRED_CREDITS, RunConfig};
use crate::error::AppError;

pub mod pipeline;

const ENV_PDF: &str = "TRANSCRIPT_PDF";
const ENV_REQUIRED_CREDITS: &str = "REQUIRED_CREDITS";

/// Shortest usable name column: one character plus the "..." marker.
const MIN_NAME_WIDTH: usize = 4;

/// Entry point for the `tgpa` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli, |key| std::env::var(key).ok())?;
    tracing::debug!(?config, "resolved configuration");

    let run = catch_unexpected(|| pipeline::run_extraction(&config))?;
    print!(
        "{}",
        crate::report::format_report(&run.records, &run.stats, config.name_width)
    );

    Ok(())
}

/// Run `f`, turning a panic into an `Unexpected` error.
fn catch_unexpected<T>(f: impl FnOnce() -> Result<T, AppError>) -> Result<T, AppError> {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        let detail = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        tracing::error!(%detail, "extraction panicked");
        Err(AppError::unexpected(format!("Unexpected failure: {detail}")))
    })
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    // Logs go to stderr so the report on stdout stays clean.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Merge CLI flags with environment fallbacks.
///
/// Precedence: CLI flag > environment variable > built-in default.
pub fn resolve_config<F>(cli: &Cli, env: F) -> Result<RunConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let pdf_path = cli
        .pdf
        .clone()
        .or_else(|| env(ENV_PDF).filter(|s| !s.trim().is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PDF_PATH));

    let required_credits = match cli.required_credits {
        Some(n) => n,
        None => match env(ENV_REQUIRED_CREDITS) {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                AppError::invalid_config(format!("Invalid {ENV_REQUIRED_CREDITS} '{raw}': {e}"))
            })?,
            None => DEFAULT_REQUIRED_CREDITS,
        },
    };

    if required_credits == 0 {
        return Err(AppError::invalid_config("Required credits must be greater than zero."));
    }
    if cli.name_width < MIN_NAME_WIDTH {
        return Err(AppError::invalid_config(format!(
            "`--name-width` must be at least {MIN_NAME_WIDTH}."
        )));
    }

    Ok(RunConfig {
        pdf_path,
        required_credits,
        name_width: cli.name_width,
        parallel: cli.parallel,
    })
}
