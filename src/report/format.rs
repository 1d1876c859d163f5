//! Formatted terminal output.
//!
//! We keep formatting code in one place so the extraction and statistics code
//! stay free of presentation concerns.

use crate::domain::CourseRecord;
use crate::report::stats::TranscriptStats;

/// Printed when a transcript yields no course records at all.
pub const NO_RECORDS_MESSAGE: &str = "No courses found in the PDF. Please check the file and pattern.";

const RULE_WIDTH: usize = 100;

/// Course table followed by warnings and the statistics block.
pub fn format_report(records: &[CourseRecord], stats: &TranscriptStats, name_width: usize) -> String {
    let mut out = String::new();
    out.push_str("Courses and Grades:\n");
    out.push_str(&format_course_table(records, name_width));

    if !stats.warnings.is_empty() {
        out.push('\n');
        out.push_str(&format_warnings(stats));
    }

    out.push('\n');
    out.push_str(&format_stats(stats));
    out
}

/// One row per record, in document order.
pub fn format_course_table(records: &[CourseRecord], name_width: usize) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:<10} {:<name_width$} {:<5} {:<6} {:<15} {:<10}",
            "CODE", "COURSE NAME", "CH", "GRADE", "STATUS", "FREQUENCY"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    for r in records {
        out.push_str(
            format!(
                "{:<10} {:<name_width$} {:<5} {:<6} {:<15} {:<10}",
                r.code.as_str(),
                truncate(&r.name, name_width),
                r.credit_hours,
                r.grade.to_string(),
                r.status.token(),
                r.frequency.to_string(),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

pub fn format_warnings(stats: &TranscriptStats) -> String {
    let mut out = String::new();
    for w in &stats.warnings {
        out.push_str(&format!("Warning: Could not process statistics for {} ({})\n", w.code, w.error));
    }
    out
}

pub fn format_stats(stats: &TranscriptStats) -> String {
    let mut out = String::new();
    out.push_str("Statistics:\n");
    out.push_str(&format!("Total credit hours: {}\n", stats.total_credits));
    out.push_str(&format!("Completed credit hours: {}\n", stats.completed_credits));

    match (stats.average_score(), stats.average_four_scale()) {
        (Some(avg), Some(avg4)) => {
            out.push_str(&format!("GPA (0-100 scale): {avg:.2}\n"));
            out.push_str(&format!("GPA (0-4 scale): {avg4:.2}\n"));
        }
        _ => out.push_str("GPA: not available (no completed graded courses)\n"),
    }

    out.push_str(&format!(
        "Progress towards graduation: {:.1}% ({}/{} credits)\n",
        stats.progress_percent(),
        stats.completed_credits,
        stats.required_credits
    ));
    out
}

/// Cut `s` so it fits a column of `width` chars, marking the cut with "...".
fn truncate(s: &str, width: usize) -> String {
    let keep = width.saturating_sub(3);
    if s.chars().count() <= keep {
        return s.to_string();
    }
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}
