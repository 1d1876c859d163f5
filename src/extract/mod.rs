//! Text-to-record extraction.
//!
//! Pipeline, per document:
//!
//! aggregated text -> `segment` -> per chunk: `normalize` -> `parse_entry`
//! -> `into_record` -> ordered `Vec<CourseRecord>`
//!
//! Chunks that do not match the entry grammar (the preamble, page headers and
//! footers) are dropped and only counted.

use rayon::prelude::*;
use regex::Regex;

use crate::domain::CourseRecord;
use crate::error::AppError;

pub mod normalize;
pub mod parse;
pub mod segment;

pub use normalize::normalize;
pub use parse::{RawEntry, into_record, parse_entry};
pub use segment::segment;

/// Compiled patterns, built once and shared read-only by every chunk.
#[derive(Debug, Clone)]
pub struct Grammar {
    entry_start: Regex,
    entry: Regex,
}

impl Grammar {
    pub fn new() -> Result<Self, AppError> {
        let compile = |pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| AppError::unexpected(format!("Invalid entry pattern '{pattern}': {e}")))
        };
        Ok(Self {
            entry_start: compile(segment::ENTRY_START_PATTERN)?,
            entry: compile(parse::ENTRY_PATTERN)?,
        })
    }

    pub fn entry_start(&self) -> &Regex {
        &self.entry_start
    }

    pub fn entry(&self) -> &Regex {
        &self.entry
    }
}

/// Extraction output: records in document order plus chunk bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub records: Vec<CourseRecord>,
    pub chunks_seen: usize,
    pub chunks_discarded: usize,
}

#[derive(Debug, Clone)]
pub struct Extractor {
    grammar: Grammar,
}

impl Extractor {
    pub fn new() -> Result<Self, AppError> {
        Ok(Self {
            grammar: Grammar::new()?,
        })
    }

    /// Extract every course record from `text`, one chunk at a time.
    pub fn extract(&self, text: &str) -> Extraction {
        let chunks = segment(text, self.grammar.entry_start());
        let records: Vec<CourseRecord> = chunks.iter().filter_map(|chunk| self.parse_chunk(chunk)).collect();
        finish(chunks.len(), records)
    }

    /// Same as [`Extractor::extract`], with chunks parsed on the rayon pool.
    ///
    /// Output order matches the sequential path.
    pub fn extract_parallel(&self, text: &str) -> Extraction {
        let chunks = segment(text, self.grammar.entry_start());
        let records: Vec<CourseRecord> = chunks.par_iter().filter_map(|chunk| self.parse_chunk(chunk)).collect();
        finish(chunks.len(), records)
    }

    /// Normalize and parse a single chunk. `None` for blank or non-course chunks.
    pub fn parse_chunk(&self, chunk: &str) -> Option<CourseRecord> {
        let flat = normalize(chunk);
        if flat.is_empty() {
            return None;
        }
        parse_entry(&flat, self.grammar.entry()).map(into_record)
    }
}

fn finish(chunks_seen: usize, records: Vec<CourseRecord>) -> Extraction {
    let chunks_discarded = chunks_seen - records.len();
    tracing::debug!(chunks_seen, records = records.len(), chunks_discarded, "segmented transcript text");
    Extraction {
        records,
        chunks_seen,
        chunks_discarded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CourseStatus, Grade};

    const TRANSCRIPT: &str = "\
UNIVERSIDADE FEDERAL DE EXEMPLO
Historico Escolar - Bacharelado
Codigo Disciplina CH Nota Freq Situacao
MAT101 Calculus I 60 85 90% Aprovado
CS200 Data Structures 40 77 - Cancelado
Pagina 1 de 2

FIS1002 Fisica Experimental 120 - - Matriculado
HIS300 Modern History 45 100 75% Aprovado Obs: equivalencia
";

    fn extractor() -> Extractor {
        Extractor::new().unwrap()
    }

    #[test]
    fn extracts_records_in_document_order() {
        let out = extractor().extract(TRANSCRIPT);
        let codes: Vec<&str> = out.records.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["MAT101", "CS200", "FIS1002", "HIS300"]);
        assert_eq!(out.chunks_seen, 5);
        assert_eq!(out.chunks_discarded, 1);
    }

    #[test]
    fn page_footer_rides_along_with_previous_entry() {
        let out = extractor().extract(TRANSCRIPT);
        let cs200 = &out.records[1];
        assert_eq!(cs200.name, "Data Structures");
        assert_eq!(cs200.grade, Grade::NoGrade);
        assert_eq!(cs200.status, CourseStatus::Cancelled);
    }

    #[test]
    fn line_break_inside_a_name_is_flattened() {
        let text = "MAT101 Calculus\nI 60 85 90% Aprovado\nCS200 Data\nStructures 40 - - Cancelado";
        let out = extractor().extract(text);
        assert_eq!(out.records.len(), 2);
        assert_eq!(out.records[0].name, "Calculus I");
        assert_eq!(out.records[1].name, "Data Structures");
    }

    #[test]
    fn blank_input_yields_nothing() {
        for text in ["", "   \n\t\n  "] {
            let out = extractor().extract(text);
            assert!(out.records.is_empty());
        }
        assert!(extractor().parse_chunk(" \n ").is_none());
    }

    #[test]
    fn header_only_text_yields_nothing() {
        let out = extractor().extract("Historico Escolar\nPagina 1 de 1\n");
        assert!(out.records.is_empty());
        assert_eq!(out.chunks_seen, 1);
        assert_eq!(out.chunks_discarded, 1);
    }

    #[test]
    fn entry_start_without_fields_is_discarded() {
        let out = extractor().extract("MAT101 Calculus I\nCS200 Data Structures 40 - - Cancelado");
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.records[0].code.as_str(), "CS200");
        assert_eq!(out.chunks_discarded, 1);
    }

    #[test]
    fn every_matched_chunk_becomes_a_record() {
        let text = "MAT\u{661}\u{660}\u{661} Calculus I 60 85 90% Aprovado\nCS200 Data Structures 40 - - Cancelado";
        let out = extractor().extract(text);
        assert_eq!(out.records.len(), 2);
        assert_eq!(out.chunks_discarded, 0);
        assert_eq!(out.records[0].code.as_str(), "MAT\u{661}\u{660}\u{661}");
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut text = String::from("Header\n");
        for i in 0..200 {
            let status = match i % 3 {
                0 => "Aprovado",
                1 => "Cancelado",
                _ => "Matriculado",
            };
            text.push_str(&format!("ABC{:03} Course number {i} 60 {} 90% {status}\n", 100 + i, i % 100));
            if i % 25 == 0 {
                text.push_str("Pagina\n");
            }
        }

        let ex = extractor();
        let seq = ex.extract(&text);
        let par = ex.extract_parallel(&text);
        assert_eq!(seq.records.len(), 200);
        assert_eq!(seq.records, par.records);
        assert_eq!(seq.chunks_seen, par.chunks_seen);
    }

    #[test]
    fn cancelled_records_never_carry_a_grade() {
        let text = "AB100 A 60 99 90% Cancelado\nAB101 B 60 - - Cancelado\nAB102 C 60 10 1% Aprovado";
        let out = extractor().extract(text);
        assert_eq!(out.records.len(), 3);
        for r in &out.records {
            if r.status == CourseStatus::Cancelled {
                assert_eq!(r.grade, Grade::NoGrade);
            }
        }
    }
}
