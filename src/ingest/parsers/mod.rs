pub mod csv_parser;
pub mod docx;
pub mod pdf;
pub mod txt;

use std::path::Path;

use crate::error::Result;
use crate::models::{extension_of, Format, QuoteRecord};

pub use csv_parser::CsvParser;
pub use docx::DocxParser;
pub use pdf::PdfParser;
pub use txt::TxtParser;

/// Recognition and extraction for one document format.
pub trait FormatParser: Send + Sync {
    /// Format handled by this parser.
    fn format(&self) -> Format;

    /// Lowercase extensions (without dot) this parser accepts.
    fn extensions(&self) -> &[&str] {
        self.format().extensions()
    }

    /// Whether the path's extension belongs to this parser. Never touches the filesystem.
    fn can_ingest(&self, path: &Path) -> bool {
        extension_of(path).is_some_and(|ext| self.extensions().contains(&ext.as_str()))
    }

    /// Read the file and return its quotes in file order.
    fn parse(&self, path: &Path) -> Result<Vec<QuoteRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsers() -> Vec<Box<dyn FormatParser>> {
        vec![
            Box::new(CsvParser::new()),
            Box::new(DocxParser::new()),
            Box::new(PdfParser::new()),
            Box::new(TxtParser::new()),
        ]
    }

    #[test]
    fn can_ingest_matches_declared_extension_only() {
        let names = ["a.csv", "a.docx", "a.pdf", "a.txt", "a.rtf", "a", "csv"];
        for parser in parsers() {
            for name in names {
                let expected = name
                    .rsplit_once('.')
                    .is_some_and(|(_, ext)| ext == parser.format().as_str());
                assert_eq!(
                    parser.can_ingest(Path::new(name)),
                    expected,
                    "{} on {name}",
                    parser.format()
                );
            }
        }
    }

    #[test]
    fn can_ingest_is_case_insensitive() {
        assert!(CsvParser::new().can_ingest(Path::new("Quotes.CSV")));
        assert!(DocxParser::new().can_ingest(Path::new("dir/Quotes.DocX")));
        assert!(PdfParser::new().can_ingest(Path::new("QUOTES.Pdf")));
        assert!(TxtParser::new().can_ingest(Path::new("quotes.tXt")));
    }

    #[test]
    fn can_ingest_needs_no_file() {
        assert!(TxtParser::new().can_ingest(Path::new("/does/not/exist/quotes.txt")));
    }
}
