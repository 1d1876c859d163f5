//! Field grammar for a flattened course entry, and the post-processing that
//! turns a match into a `CourseRecord`.
//!
//! Grammar, anchored at the start of the line and separated by whitespace:
//!
//! ```text
//! CODE  NAME (shortest)  CREDIT_HOURS  GRADE|-  FREQ%|-  STATUS  [anything]
//! ```
//!
//! The name is matched lazily, so if a course title itself contains tokens
//! that look like the trailing columns, the shortest name that lets the rest
//! of the line match wins.

use regex::Regex;

use crate::domain::{CourseCode, CourseRecord, CourseStatus, Frequency, Grade};

pub const ENTRY_PATTERN: &str = concat!(
    r"^([A-Z]{2,3}\d{3,4})",
    r"\s+(.+?)",
    r"\s+(\d{2,3})",
    r"\s+(-|\d{1,3})",
    r"\s+(\d+%|-)",
    r"\s+(Aprovado|Cancelado|Matriculado)",
);

/// The six captured fields of a matched line, borrowed from the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub credit_hours: &'a str,
    pub grade: &'a str,
    pub frequency: &'a str,
    pub status: CourseStatus,
}

/// Match a flattened line against the entry grammar.
///
/// `None` means "not a course line" (transcript headers, page footers, the
/// preamble). Callers skip these silently.
pub fn parse_entry<'a>(line: &'a str, entry: &Regex) -> Option<RawEntry<'a>> {
    let caps = entry.captures(line)?;
    let field = |idx: usize| caps.get(idx).map(|m| m.as_str());

    Some(RawEntry {
        code: field(1)?,
        name: field(2)?,
        credit_hours: field(3)?,
        grade: field(4)?,
        frequency: field(5)?,
        status: CourseStatus::from_token(field(6)?)?,
    })
}

/// Build the final record. Cancelled courses never carry a grade, whatever
/// digits happened to sit in the grade column.
///
/// Every matched entry becomes a record; the grammar has already checked the
/// code's shape.
pub fn into_record(raw: RawEntry<'_>) -> CourseRecord {
    let grade = match raw.status {
        CourseStatus::Cancelled => Grade::NoGrade,
        CourseStatus::Approved | CourseStatus::Enrolled => Grade::from_token(raw.grade),
    };

    CourseRecord {
        code: CourseCode::from_matched(raw.code),
        name: raw.name.to_string(),
        credit_hours: raw.credit_hours.to_string(),
        grade,
        frequency: Frequency::from_token(raw.frequency),
        status: raw.status,
    }
}
