use std::path::Path;

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

use crate::error::{QuoteError, Result};
use crate::ingest::parsers::FormatParser;
use crate::ingest::separator::{self, LineParse};
use crate::models::{Format, QuoteRecord};

/// Word-processor documents, one `body - author` quote per paragraph.
///
/// Paragraphs without a separator are treated as prose and skipped.
pub struct DocxParser;

impl Default for DocxParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse an in-memory `.docx` archive. `origin` is used for diagnostics only.
    pub fn parse_bytes(&self, origin: &Path, bytes: &[u8]) -> Result<Vec<QuoteRecord>> {
        let doc = docx_rs::read_docx(bytes)
            .map_err(|e| QuoteError::parse(origin, format!("invalid docx document: {e}")))?;

        let mut quotes = Vec::new();
        for (idx, child) in doc.document.children.iter().enumerate() {
            let DocumentChild::Paragraph(paragraph) = child else {
                continue;
            };
            match separator::parse_line(&paragraph_text(paragraph)) {
                LineParse::Quote(quote) => quotes.push(quote),
                LineParse::Blank => {}
                LineParse::MissingSeparator | LineParse::Incomplete => tracing::debug!(
                    path = %origin.display(),
                    paragraph = idx + 1,
                    "skipping paragraph that is not a quote"
                ),
            }
        }
        Ok(quotes)
    }
}

/// Concatenated text of every run in a paragraph.
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    _ => {}
                }
            }
        }
    }
    text
}

impl FormatParser for DocxParser {
    fn format(&self) -> Format {
        Format::Docx
    }

    fn parse(&self, path: &Path) -> Result<Vec<QuoteRecord>> {
        let bytes = std::fs::read(path).map_err(|e| QuoteError::parse(path, e))?;
        self.parse_bytes(path, &bytes)
    }
}
