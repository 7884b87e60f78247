use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{QuoteError, Result};
use crate::ingest::parsers::FormatParser;
use crate::models::{Format, QuoteRecord};

/// Columns every quote table must carry.
const REQUIRED_COLUMNS: [&str; 2] = ["body", "author"];

#[derive(Debug, Deserialize)]
struct Row {
    body: String,
    author: String,
}

/// Tabular quotes with a `body,author` header row. Extra columns are ignored.
pub struct CsvParser;

impl Default for CsvParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse CSV from any reader. `origin` is used for diagnostics only.
    pub fn parse_reader<R: Read>(&self, origin: &Path, reader: R) -> Result<Vec<QuoteRecord>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| QuoteError::parse(origin, e))?
            .clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(QuoteError::parse(
                    origin,
                    format!("missing required column `{column}`"),
                ));
            }
        }

        let mut quotes = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(|e| QuoteError::parse(origin, e))?;
            let row: Row = record
                .deserialize(Some(&headers))
                .map_err(|e| QuoteError::parse(origin, e))?;
            match QuoteRecord::new(row.body, row.author) {
                Some(quote) => quotes.push(quote),
                None => tracing::warn!(
                    path = %origin.display(),
                    line = record.position().map_or(0, csv::Position::line),
                    "skipping row with empty body or author"
                ),
            }
        }
        Ok(quotes)
    }
}

impl FormatParser for CsvParser {
    fn format(&self) -> Format {
        Format::Csv
    }

    fn parse(&self, path: &Path) -> Result<Vec<QuoteRecord>> {
        let file = std::fs::File::open(path).map_err(|e| QuoteError::parse(path, e))?;
        self.parse_reader(path, std::io::BufReader::new(file))
    }
}
