use std::path::Path;

use crate::error::{QuoteError, Result};
use crate::ingest::parsers::FormatParser;
use crate::ingest::separator;
use crate::models::{Format, QuoteRecord};

/// One `"body" - author` quote per line.
pub struct TxtParser;

impl Default for TxtParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TxtParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse already-loaded text. `origin` is used for diagnostics only.
    #[must_use]
    pub fn parse_str(&self, origin: &Path, source: &str) -> Vec<QuoteRecord> {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        separator::collect_quotes(origin, source, str::trim)
    }
}

impl FormatParser for TxtParser {
    fn format(&self) -> Format {
        Format::Txt
    }

    fn parse(&self, path: &Path) -> Result<Vec<QuoteRecord>> {
        let source = std::fs::read_to_string(path).map_err(|e| QuoteError::parse(path, e))?;
        Ok(self.parse_str(path, &source))
    }
}
