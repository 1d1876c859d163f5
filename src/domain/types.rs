//! Shared domain types.
//!
//! Course records keep the textual fields exactly as they were captured from
//! the transcript. Numeric interpretation happens later, through explicit
//! fallible conversions (`CourseRecord::credit_hours_value`, `Grade::score`),
//! so a record with an odd field is still listed even if it cannot be counted.

use std::fmt;
use std::path::PathBuf;

/// Token used on transcripts for "no value" in the grade/frequency columns.
pub const ABSENT_TOKEN: &str = "-";

/// Input path used when neither the CLI nor the environment names one.
pub const DEFAULT_PDF_PATH: &str = "historico.pdf";

/// Credits required to complete the degree, unless overridden.
pub const DEFAULT_REQUIRED_CREDITS: u32 = 3200;

/// Display width of the course-name column in the report table.
pub const DEFAULT_NAME_WIDTH: usize = 50;

/// A course code: 2–3 uppercase ASCII letters followed by 3–4 digits
/// (e.g. `MAT101`, `FIS1002`).
///
/// Codes captured by the entry grammar keep whatever decimal digits the
/// transcript used, Unicode ones included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseCode(String);

impl CourseCode {
    /// Wrap a code the entry grammar has already matched.
    pub(crate) fn from_matched(raw: &str) -> Self {
        Self(raw.to_string())
    }

    /// Validate `raw` against the course-code shape (ASCII digits only).
    pub fn parse(raw: &str) -> Option<Self> {
        let letters = raw.bytes().take_while(u8::is_ascii_uppercase).count();
        let digits = raw[letters..].bytes().take_while(u8::is_ascii_digit).count();
        let shape_ok = (2..=3).contains(&letters) && (3..=4).contains(&digits);
        if shape_ok && letters + digits == raw.len() {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Completion state of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseStatus {
    Approved,
    Cancelled,
    Enrolled,
}

impl CourseStatus {
    pub const ALL: [CourseStatus; 3] = [
        CourseStatus::Approved,
        CourseStatus::Cancelled,
        CourseStatus::Enrolled,
    ];

    /// Map a transcript status token to its variant.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Aprovado" => Some(CourseStatus::Approved),
            "Cancelado" => Some(CourseStatus::Cancelled),
            "Matriculado" => Some(CourseStatus::Enrolled),
            _ => None,
        }
    }

    /// The token as printed on the transcript.
    pub fn token(self) -> &'static str {
        match self {
            CourseStatus::Approved => "Aprovado",
            CourseStatus::Cancelled => "Cancelado",
            CourseStatus::Enrolled => "Matriculado",
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A numeric field whose text could not be read as a non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub raw: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not an integer: '{}'", self.field, self.raw)
    }
}

impl std::error::Error for FieldError {}

fn parse_integer(field: &'static str, raw: &str) -> Result<u32, FieldError> {
    raw.trim().parse::<u32>().map_err(|_| FieldError {
        field,
        raw: raw.to_string(),
    })
}

/// Grade column: a numeric score as captured, or an explicit "no grade".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grade {
    Score(String),
    NoGrade,
}

impl Grade {
    pub fn from_token(token: &str) -> Self {
        if token == ABSENT_TOKEN {
            Grade::NoGrade
        } else {
            Grade::Score(token.to_string())
        }
    }

    pub fn is_graded(&self) -> bool {
        matches!(self, Grade::Score(_))
    }

    /// Integer value of the score. `NoGrade` is reported as a field error too.
    pub fn score(&self) -> Result<u32, FieldError> {
        match self {
            Grade::Score(raw) => parse_integer("grade", raw),
            Grade::NoGrade => Err(FieldError {
                field: "grade",
                raw: ABSENT_TOKEN.to_string(),
            }),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Score(raw) => f.write_str(raw),
            Grade::NoGrade => f.write_str(ABSENT_TOKEN),
        }
    }
}

/// Attendance frequency column: a percentage (`"90%"`) or "no frequency".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frequency {
    Percent(String),
    NoFrequency,
}

impl Frequency {
    pub fn from_token(token: &str) -> Self {
        if token == ABSENT_TOKEN {
            Frequency::NoFrequency
        } else {
            Frequency::Percent(token.to_string())
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Percent(raw) => f.write_str(raw),
            Frequency::NoFrequency => f.write_str(ABSENT_TOKEN),
        }
    }
}

/// One course line of the transcript.
///
/// Invariant: `status == Cancelled` implies `grade == Grade::NoGrade`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub code: CourseCode,
    pub name: String,
    /// Credit hours exactly as captured (2–3 digits).
    pub credit_hours: String,
    pub grade: Grade,
    pub frequency: Frequency,
    pub status: CourseStatus,
}

impl CourseRecord {
    pub fn credit_hours_value(&self) -> Result<u32, FieldError> {
        parse_integer("credit_hours", &self.credit_hours)
    }

    /// Whether the course counts towards completed credits and the average.
    pub fn counts_as_completed(&self) -> bool {
        self.status == CourseStatus::Approved && self.grade.is_graded()
    }
}

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub pdf_path: PathBuf,
    pub required_credits: u32,
    pub name_width: usize,
    pub parallel: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            pdf_path: PathBuf::from(DEFAULT_PDF_PATH),
            required_credits: DEFAULT_REQUIRED_CREDITS,
            name_width: DEFAULT_NAME_WIDTH,
            parallel: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_code_shape() {
        assert!(CourseCode::parse("MAT101").is_some());
        assert!(CourseCode::parse("CS200").is_some());
        assert!(CourseCode::parse("FIS1002").is_some());
        assert!(CourseCode::parse("M101").is_none());
        assert!(CourseCode::parse("MATH101").is_none());
        assert!(CourseCode::parse("MAT10").is_none());
        assert!(CourseCode::parse("MAT10123").is_none());
        assert!(CourseCode::parse("mat101").is_none());
        assert!(CourseCode::parse("MAT101X").is_none());
    }

    #[test]
    fn status_tokens_map_both_ways() {
        for status in CourseStatus::ALL {
            assert_eq!(CourseStatus::from_token(status.token()), Some(status));
        }
        assert_eq!(CourseStatus::from_token("Reprovado"), None);
    }

    #[test]
    fn absent_tokens_become_sentinels() {
        assert_eq!(Grade::from_token("-"), Grade::NoGrade);
        assert_eq!(Grade::from_token("85"), Grade::Score("85".to_string()));
        assert_eq!(Frequency::from_token("-"), Frequency::NoFrequency);
        assert_eq!(Grade::NoGrade.to_string(), "-");
        assert_eq!(Frequency::Percent("90%".to_string()).to_string(), "90%");
    }

    #[test]
    fn numeric_conversions_are_fallible() {
        assert_eq!(Grade::Score("85".to_string()).score(), Ok(85));
        assert!(Grade::Score("8a".to_string()).score().is_err());
        assert!(Grade::NoGrade.score().is_err());

        let record = CourseRecord {
            code: CourseCode::parse("MAT101").unwrap(),
            name: "Calculus I".to_string(),
            credit_hours: "6O".to_string(),
            grade: Grade::Score("85".to_string()),
            frequency: Frequency::NoFrequency,
            status: CourseStatus::Approved,
        };
        let err = record.credit_hours_value().unwrap_err();
        assert_eq!(err.field, "credit_hours");
        assert_eq!(err.raw, "6O");
        assert!(record.counts_as_completed());
    }
}
