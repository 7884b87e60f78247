use std::path::PathBuf;

use ignore::WalkBuilder;
use serde::Serialize;

use crate::error::Result;
use crate::ingest::dispatcher::Dispatcher;
use crate::models::{extension_of, Format};

/// A file found below the scan root.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveredFile {
    /// Absolute (or root-joined) path, for handing to the ingestor.
    #[serde(skip)]
    pub path: PathBuf,
    /// Path relative to the scan root (forward slashes).
    pub relative_path: String,
    /// Lowercase extension without dot, empty if none.
    pub extension: String,
    /// Format of the parser that would ingest this file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
    /// Whether a registered parser accepts the file.
    pub supported: bool,
}

/// Directory walker that respects .gitignore and skips hidden entries.
pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walk the root and classify every regular file, sorted by relative path.
    pub fn scan(&self, dispatcher: &Dispatcher) -> Result<Vec<DiscoveredFile>> {
        let root = &self.root;
        let mut files: Vec<DiscoveredFile> = WalkBuilder::new(root)
            .hidden(true)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .follow_links(false)
            .filter_entry(|e| {
                let name = e.file_name().to_string_lossy();
                !matches!(name.as_ref(), "target" | "node_modules" | ".quotes")
            })
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .map(|entry| {
                let path = entry.into_path();
                let relative_path = path
                    .strip_prefix(root)
                    .unwrap_or(&path)
                    .to_string_lossy()
                    .replace('\\', "/");
                let format = dispatcher.resolve(&path).ok().map(|p| p.format());
                DiscoveredFile {
                    extension: extension_of(&path).unwrap_or_default(),
                    supported: format.is_some(),
                    format,
                    relative_path,
                    path,
                }
            })
            .collect();

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    /// Only the files a registered parser accepts.
    pub fn scan_supported(&self, dispatcher: &Dispatcher) -> Result<Vec<DiscoveredFile>> {
        let mut files = self.scan(dispatcher)?;
        files.retain(|f| f.supported);
        Ok(files)
    }
}
