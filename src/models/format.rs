use std::fmt;
use std::path::Path;

use serde::Serialize;

/// The closed set of document formats the ingestion layer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Csv,
    Docx,
    Pdf,
    Txt,
}

impl Format {
    /// Registration order used by the dispatcher.
    pub const ALL: [Format; 4] = [Self::Csv, Self::Docx, Self::Pdf, Self::Txt];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Docx => "docx",
            Self::Pdf => "pdf",
            Self::Txt => "txt",
        }
    }

    /// Extensions (lowercase, without dot) recognized for this format.
    #[must_use]
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Csv => &["csv"],
            Self::Docx => &["docx"],
            Self::Pdf => &["pdf"],
            Self::Txt => &["txt"],
        }
    }

    /// Human-readable description of how the format is read.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Csv => "tabular, `body` and `author` columns",
            Self::Docx => "word-processor paragraphs, `body - author`",
            Self::Pdf => "extracted text lines, `\"body\" - author`",
            Self::Txt => "one quote per line, `\"body\" - author`",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercased extension of a path or bare file name.
///
/// This is the substring after the last `.` of the file name, so `.txt`
/// yields `txt` and `archive.tar.GZ` yields `gz`. Returns `None` when the
/// name has no dot or ends with one.
#[must_use]
pub fn extension_of(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(extension_of(Path::new("Quotes.CSV")).as_deref(), Some("csv"));
        assert_eq!(extension_of(Path::new("dir/a.b.DocX")).as_deref(), Some("docx"));
    }

    #[test]
    fn extension_after_last_dot_only() {
        assert_eq!(extension_of(Path::new("notes.txt.pdf")).as_deref(), Some("pdf"));
        assert_eq!(extension_of(Path::new(".txt")).as_deref(), Some("txt"));
    }

    #[test]
    fn extension_missing() {
        assert_eq!(extension_of(Path::new("README")), None);
        assert_eq!(extension_of(Path::new("trailing.")), None);
        assert_eq!(extension_of(Path::new("")), None);
    }

    #[test]
    fn formats_have_disjoint_extensions() {
        let mut seen = std::collections::HashSet::new();
        for format in Format::ALL {
            for ext in format.extensions() {
                assert!(seen.insert(*ext), "duplicate extension {ext}");
            }
        }
    }
}
