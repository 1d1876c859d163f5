//! Command-line parsing for the transcript statistics tool.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! extraction and reporting code. Resolution of defaults that depend on the
//! environment happens in `app`.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "tgpa",
    version,
    about = "Extract course records from an academic transcript PDF and summarize credits and grades"
)]
pub struct Cli {
    /// Transcript PDF. Falls back to `TRANSCRIPT_PDF`, then `historico.pdf`.
    #[arg(value_name = "PDF")]
    pub pdf: Option<PathBuf>,

    /// Credits required to complete the degree (falls back to `REQUIRED_CREDITS`, then 3200).
    #[arg(long)]
    pub required_credits: Option<u32>,

    /// Display width of the course-name column.
    #[arg(long, default_value_t = crate::domain::DEFAULT_NAME_WIDTH)]
    pub name_width: usize,

    /// Parse entry chunks in parallel (output order is unchanged).
    #[arg(long)]
    pub parallel: bool,

    /// Increase log verbosity (`-v` info, `-vv` debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
