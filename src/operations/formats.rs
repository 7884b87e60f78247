use serde::Serialize;

use crate::config::PdfSettings;
use crate::ingestor::Ingestor;

/// Result of listing supported formats.
#[derive(Debug, Clone, Serialize)]
pub struct FormatsResult {
    /// Formats in dispatch order.
    pub formats: Vec<FormatInfo>,
    /// Configured PDF text extractor.
    pub pdf_extractor: String,
}

/// Information about one supported format.
#[derive(Debug, Clone, Serialize)]
pub struct FormatInfo {
    pub format: String,
    /// Extensions with leading dot (e.g., ".csv").
    pub extensions: Vec<String>,
    pub layout: String,
}

/// List registered formats in dispatch order.
#[must_use]
pub fn list_formats(ingestor: &Ingestor, pdf: &PdfSettings) -> FormatsResult {
    let formats = ingestor
        .dispatcher()
        .formats()
        .into_iter()
        .map(|format| FormatInfo {
            format: format.as_str().to_string(),
            extensions: format.extensions().iter().map(|e| format!(".{e}")).collect(),
            layout: format.description().to_string(),
        })
        .collect();

    FormatsResult {
        formats,
        pdf_extractor: pdf.extractor.as_str().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_formats_in_dispatch_order() {
        let result = list_formats(&Ingestor::new(), &PdfSettings::default());
        let names: Vec<&str> = result.formats.iter().map(|f| f.format.as_str()).collect();
        assert_eq!(names, vec!["csv", "docx", "pdf", "txt"]);
        assert_eq!(result.formats[1].extensions, vec![".docx"]);
        assert_eq!(result.pdf_extractor, "pdftotext");
    }
}
