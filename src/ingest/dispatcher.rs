use std::path::Path;

use crate::config::PdfSettings;
use crate::error::{QuoteError, Result};
use crate::ingest::extract::{self, Pdftotext, TextExtractor};
use crate::ingest::parsers::{CsvParser, DocxParser, FormatParser, PdfParser, TxtParser};
use crate::models::{extension_of, Format, QuoteRecord};

/// Routes files to the first registered parser that recognizes them.
pub struct Dispatcher {
    parsers: Vec<Box<dyn FormatParser>>,
}

impl Dispatcher {
    /// Default registry `[CSV, DOCX, PDF, TXT]` with `pdftotext` extraction.
    #[must_use]
    pub fn new() -> Self {
        Self::with_extractor(Box::new(Pdftotext::default()))
    }

    /// Default registry with the PDF extractor chosen by settings.
    #[must_use]
    pub fn from_settings(settings: &PdfSettings) -> Self {
        Self::with_extractor(extract::from_settings(settings))
    }

    /// Default registry using a caller-supplied PDF extractor.
    #[must_use]
    pub fn with_extractor(extractor: Box<dyn TextExtractor>) -> Self {
        Self::with_parsers(vec![
            Box::new(CsvParser::new()),
            Box::new(DocxParser::new()),
            Box::new(PdfParser::with_extractor(extractor)),
            Box::new(TxtParser::new()),
        ])
    }

    /// Registry with an explicit, ordered parser list. First match wins.
    #[must_use]
    pub fn with_parsers(parsers: Vec<Box<dyn FormatParser>>) -> Self {
        Self { parsers }
    }

    /// Formats in registration order.
    #[must_use]
    pub fn formats(&self) -> Vec<Format> {
        self.parsers.iter().map(|p| p.format()).collect()
    }

    /// Check if any registered parser accepts the path.
    #[must_use]
    pub fn supports(&self, path: &Path) -> bool {
        self.parsers.iter().any(|p| p.can_ingest(path))
    }

    /// Select the parser for a path by extension.
    pub fn resolve(&self, path: &Path) -> Result<&dyn FormatParser> {
        match self.parsers.iter().find(|p| p.can_ingest(path)) {
            Some(parser) => Ok(&**parser),
            None => Err(QuoteError::UnsupportedFormat {
                path: path.to_string_lossy().into(),
                ext: extension_of(path).unwrap_or_else(|| "(none)".into()),
            }),
        }
    }

    /// Parse a single file with its resolved parser.
    pub fn parse_one(&self, path: &Path) -> Result<Vec<QuoteRecord>> {
        let parser = self.resolve(path)?;
        let _span = tracing::debug_span!("ingest", path = %path.display(), format = %parser.format())
            .entered();
        let quotes = parser.parse(path)?;
        tracing::info!(path = %path.display(), quotes = quotes.len(), "ingested");
        Ok(quotes)
    }

    /// Parse files in order and concatenate. Fails on the first error with no partial result.
    pub fn parse_many<I, P>(&self, paths: I) -> Result<Vec<QuoteRecord>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut quotes = Vec::new();
        for path in paths {
            quotes.extend(self.parse_one(path.as_ref())?);
        }
        Ok(quotes)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
