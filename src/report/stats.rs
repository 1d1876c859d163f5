//! Credit and grade statistics over extracted course records.

use crate::domain::{CourseCode, CourseRecord, FieldError};

/// A record left out of the numeric sums because one of its fields is not an
/// integer. The record itself is still listed in the course table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatWarning {
    pub code: CourseCode,
    pub error: FieldError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptStats {
    /// Sum of credit hours over every countable record.
    pub total_credits: u64,
    /// Sum of credit hours over approved, graded records.
    pub completed_credits: u64,
    /// Sum of `grade * credit_hours` over the same records as `completed_credits`.
    pub weighted_sum: u64,
    pub required_credits: u32,
    pub warnings: Vec<StatWarning>,
}

impl TranscriptStats {
    /// Credit-weighted average grade on the 0–100 scale.
    ///
    /// `None` when nothing has been completed yet.
    pub fn average_score(&self) -> Option<f64> {
        if self.completed_credits == 0 {
            return None;
        }
        Some(self.weighted_sum as f64 / self.completed_credits as f64)
    }

    /// The same average mapped linearly onto a 0–4 scale.
    pub fn average_four_scale(&self) -> Option<f64> {
        self.average_score().map(|avg| avg / 100.0 * 4.0)
    }

    /// Completed credits as a percentage of the credits required for the degree.
    pub fn progress_percent(&self) -> f64 {
        if self.required_credits == 0 {
            return 0.0;
        }
        self.completed_credits as f64 / f64::from(self.required_credits) * 100.0
    }
}

/// Sum credits and grades over `records`.
///
/// A record contributes to every sum or to none: if its credit hours (or, for
/// a completed course, its grade) cannot be read as an integer it is recorded
/// as a [`StatWarning`] and skipped.
pub fn compute_stats(records: &[CourseRecord], required_credits: u32) -> TranscriptStats {
    let mut stats = TranscriptStats {
        total_credits: 0,
        completed_credits: 0,
        weighted_sum: 0,
        required_credits,
        warnings: Vec::new(),
    };

    for record in records {
        match countable(record) {
            Ok((credits, score)) => {
                stats.total_credits += credits;
                if let Some(score) = score {
                    stats.completed_credits += credits;
                    stats.weighted_sum += score * credits;
                }
            }
            Err(error) => {
                tracing::warn!(code = %record.code, %error, "excluding course from statistics");
                stats.warnings.push(StatWarning {
                    code: record.code.clone(),
                    error,
                });
            }
        }
    }

    stats
}

/// Credit hours, plus the score when the course counts as completed.
fn countable(record: &CourseRecord) -> Result<(u64, Option<u64>), FieldError> {
    let credits = u64::from(record.credit_hours_value()?);
    let score = if record.counts_as_completed() {
        Some(u64::from(record.grade.score()?))
    } else {
        None
    };
    Ok((credits, score))
}
