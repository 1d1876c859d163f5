//! The extraction pipeline shared by the binary and the tests:
//! page text -> course records -> statistics.
//!
//! Presentation lives in `report::format`; this module only computes.

use crate::domain::{CourseRecord, RunConfig};
use crate::error::AppError;
use crate::extract::Extractor;
use crate::io::{PageSource, PdfPages, aggregate_pages};
use crate::report::{TranscriptStats, compute_stats};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub records: Vec<CourseRecord>,
    pub stats: TranscriptStats,
    pub chunks_seen: usize,
    pub chunks_discarded: usize,
}

/// Open the configured PDF and run the pipeline over its pages.
pub fn run_extraction(config: &RunConfig) -> Result<RunOutput, AppError> {
    let pdf = PdfPages::open(&config.pdf_path)?;
    run_with_source(&pdf, config)
}

/// Run the pipeline over an already-opened page source.
///
/// Fails with a "no records" error when nothing in the text matched a course
/// entry, including documents without any extractable text.
pub fn run_with_source(source: &dyn PageSource, config: &RunConfig) -> Result<RunOutput, AppError> {
    let text = aggregate_pages(source)?;

    let extractor = Extractor::new()?;
    let extraction = if config.parallel {
        extractor.extract_parallel(&text)
    } else {
        extractor.extract(&text)
    };

    if extraction.records.is_empty() {
        return Err(AppError::no_records(crate::report::NO_RECORDS_MESSAGE));
    }
    tracing::info!(
        records = extraction.records.len(),
        discarded = extraction.chunks_discarded,
        "extracted course records"
    );

    let stats = compute_stats(&extraction.records, config.required_credits);

    Ok(RunOutput {
        records: extraction.records,
        stats,
        chunks_seen: extraction.chunks_seen,
        chunks_discarded: extraction.chunks_discarded,
    })
}
