use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::ingest::scanner::{DiscoveredFile, Scanner};
use crate::ingestor::Ingestor;

/// Result of scanning a directory for quote documents.
#[derive(Debug, Clone, Serialize)]
pub struct FilesResult {
    pub files: Vec<DiscoveredFile>,
    pub summary: FilesSummary,
}

/// Summary of file listing.
#[derive(Debug, Clone, Serialize)]
pub struct FilesSummary {
    pub total: usize,
    /// Files a registered parser accepts.
    pub supported: usize,
    pub skipped: usize,
}

/// Filter options for listing files.
#[derive(Debug, Clone, Default)]
pub struct FilesFilter {
    /// Only include files a parser accepts.
    pub supported_only: bool,
}

/// List files below `root` with their detected quote format.
pub fn list_files(ingestor: &Ingestor, root: &Path, filter: &FilesFilter) -> Result<FilesResult> {
    let mut files = Scanner::new(root).scan(ingestor.dispatcher())?;
    if filter.supported_only {
        files.retain(|f| f.supported);
    }

    let total = files.len();
    let supported = files.iter().filter(|f| f.supported).count();

    Ok(FilesResult {
        files,
        summary: FilesSummary {
            total,
            supported,
            skipped: total - supported,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("quotes.txt"), "\"A\" - B\n").unwrap();
        fs::write(tmp.path().join("photo.jpg"), [0xff, 0xd8]).unwrap();
        tmp
    }

    #[test]
    fn list_files_summary() {
        let tmp = project();
        let result = list_files(&Ingestor::new(), tmp.path(), &FilesFilter::default()).unwrap();
        assert_eq!(result.summary.total, 2);
        assert_eq!(result.summary.supported, 1);
        assert_eq!(result.summary.skipped, 1);
    }

    #[test]
    fn list_files_supported_only() {
        let tmp = project();
        let filter = FilesFilter {
            supported_only: true,
        };
        let result = list_files(&Ingestor::new(), tmp.path(), &filter).unwrap();
        assert_eq!(result.files.len(), 1);
        assert_eq!(result.files[0].relative_path, "quotes.txt");
    }
}
