use std::path::Path;

use crate::error::{QuoteError, Result};
use crate::ingest::extract::{Pdftotext, TextExtractor};
use crate::ingest::parsers::FormatParser;
use crate::ingest::separator;
use crate::models::{Format, QuoteRecord};

/// File name of the extracted text inside the per-call scratch directory.
const EXTRACTED_FILE: &str = "extracted.txt";

/// PDF quotes, read line by line from a text rendering of the document.
///
/// Each call extracts into its own temporary directory, which is removed
/// before `parse` returns regardless of outcome.
pub struct PdfParser {
    extractor: Box<dyn TextExtractor>,
}

impl Default for PdfParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfParser {
    /// Parser backed by the external `pdftotext` tool.
    #[must_use]
    pub fn new() -> Self {
        Self::with_extractor(Box::new(Pdftotext::default()))
    }

    #[must_use]
    pub fn with_extractor(extractor: Box<dyn TextExtractor>) -> Self {
        Self { extractor }
    }

    /// Parse already-extracted text. `origin` is used for diagnostics only.
    #[must_use]
    pub fn parse_text(&self, origin: &Path, text: &str) -> Vec<QuoteRecord> {
        separator::collect_quotes(origin, text, separator::trim_quote_marks)
    }

    fn extract_and_parse(&self, path: &Path, text_path: &Path) -> Result<Vec<QuoteRecord>> {
        tracing::debug!(
            path = %path.display(),
            extractor = self.extractor.name(),
            "extracting pdf text"
        );
        self.extractor
            .extract(path, text_path)
            .map_err(|e| QuoteError::parse(path, e))?;
        let text = std::fs::read_to_string(text_path).map_err(|e| QuoteError::parse(path, e))?;
        Ok(self.parse_text(path, &text))
    }
}

impl FormatParser for PdfParser {
    fn format(&self) -> Format {
        Format::Pdf
    }

    fn parse(&self, path: &Path) -> Result<Vec<QuoteRecord>> {
        let scratch = tempfile::Builder::new()
            .prefix("quote-engine-pdf-")
            .tempdir()
            .map_err(|e| QuoteError::parse(path, e))?;
        let text_path = scratch.path().join(EXTRACTED_FILE);

        let result = self.extract_and_parse(path, &text_path);

        let scratch_path = scratch.path().to_path_buf();
        if let Err(e) = scratch.close() {
            tracing::warn!(
                path = %scratch_path.display(),
                error = %e,
                "failed to remove temporary extraction artifact"
            );
        }
        result
    }
}
