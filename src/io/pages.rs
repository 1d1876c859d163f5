//! Page text acquisition.
//!
//! The extraction core only needs "plain text per page, in page order". That
//! capability sits behind [`PageSource`] so the pipeline can be driven from a
//! real PDF ([`PdfPages`]) or from in-memory pages in tests.

use std::path::{Path, PathBuf};

use pdfplumber::{Pdf, TextOptions};

use crate::error::AppError;

/// Something that yields one text string per page, in page order.
///
/// A page without extractable text must still produce an (empty) string so
/// page ordering survives the join.
pub trait PageSource {
    fn page_texts(&self) -> Result<Vec<String>, AppError>;
}

impl<S: AsRef<str>> PageSource for Vec<S> {
    fn page_texts(&self) -> Result<Vec<String>, AppError> {
        Ok(self.iter().map(|p| p.as_ref().to_string()).collect())
    }
}

/// A PDF loaded fully into memory.
///
/// `pdfplumber` reads the file inside [`PdfPages::open`] and keeps no handle
/// open afterwards; the parsed document is dropped with this value.
///
/// Page text is rebuilt from character positions, so table cells on the same
/// baseline come out space-separated on one line, one line per table row.
pub struct PdfPages {
    path: PathBuf,
    pdf: Pdf,
}

impl PdfPages {
    pub fn open(path: &Path) -> Result<Self, AppError> {
        if !path.is_file() {
            return Err(AppError::source_unavailable(format!(
                "Transcript PDF '{}' not found.",
                path.display()
            )));
        }

        let pdf = Pdf::open_file(path, None).map_err(|e| {
            AppError::source_unavailable(format!("Failed to open PDF '{}': {e}", path.display()))
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            pdf,
        })
    }

    pub fn page_count(&self) -> usize {
        self.pdf.page_count()
    }
}

impl PageSource for PdfPages {
    fn page_texts(&self) -> Result<Vec<String>, AppError> {
        let page_count = self.page_count();
        tracing::info!(path = %self.path.display(), pages = page_count, "reading transcript pages");

        let options = TextOptions::default();
        let mut texts = Vec::with_capacity(page_count);
        for idx in 0..page_count {
            let text = match self.pdf.page(idx) {
                Ok(page) => page.extract_text(&options),
                Err(e) => {
                    tracing::warn!(page = idx + 1, error = %e, "no extractable text on page");
                    String::new()
                }
            };
            texts.push(text);
        }
        Ok(texts)
    }
}

/// Concatenate every page's text, newline-joined, in page order.
pub fn aggregate_pages(source: &dyn PageSource) -> Result<String, AppError> {
    Ok(source.page_texts()?.join("\n"))
}
