use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{QuoteError, Result};

/// Directory holding per-project quote-engine data.
const QUOTES_DIR: &str = ".quotes";
/// Config filename.
const CONFIG_FILE: &str = "config.toml";

/// Project-level configuration resolved from the working directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory relative paths are resolved against.
    pub project_root: PathBuf,
    /// Path to the `.quotes/` directory.
    pub quotes_dir: PathBuf,
    /// Path to the config file.
    pub config_path: PathBuf,
    /// User settings loaded from config.toml.
    pub settings: UserSettings,
}

/// User-configurable settings from .quotes/config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Default quote documents.
    pub sources: SourceSettings,
    /// PDF text extraction.
    pub pdf: PdfSettings,
}

/// Quote documents loaded when no explicit paths are given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// File paths, relative to the project root unless absolute.
    pub files: Vec<String>,
}

/// Which collaborator turns a PDF into plain text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorKind {
    /// External `pdftotext -layout` process.
    #[default]
    Pdftotext,
    /// In-process extraction via `pdf-extract`.
    Builtin,
}

impl ExtractorKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdftotext => "pdftotext",
            Self::Builtin => "builtin",
        }
    }
}

/// PDF extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfSettings {
    pub extractor: ExtractorKind,
    /// Program invoked for `pdftotext` extraction.
    pub program: String,
    /// Upper bound on one external extraction, in seconds.
    pub timeout_secs: u64,
}

impl Default for PdfSettings {
    fn default() -> Self {
        Self {
            extractor: ExtractorKind::Pdftotext,
            program: "pdftotext".into(),
            timeout_secs: 30,
        }
    }
}

impl PdfSettings {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Create config for a given project root.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let quotes_dir = project_root.join(QUOTES_DIR);
        let config_path = quotes_dir.join(CONFIG_FILE);

        let settings = Self::load_settings(&config_path).unwrap_or_default();

        Self {
            project_root,
            quotes_dir,
            config_path,
            settings,
        }
    }

    /// Create config from the current working directory.
    pub fn from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| QuoteError::Config(format!("cannot get cwd: {e}")))?;
        Ok(Self::new(cwd))
    }

    /// Load settings from config.toml if it exists and parses.
    fn load_settings(config_path: &Path) -> Option<UserSettings> {
        if !config_path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(config_path).ok()?;
        match toml::from_str(&content) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "ignoring invalid config, using defaults"
                );
                None
            }
        }
    }

    /// Save current settings to config.toml.
    pub fn save_settings(&self) -> Result<()> {
        self.ensure_quotes_dir()?;
        let content = toml::to_string_pretty(&self.settings)
            .map_err(|e| QuoteError::Config(format!("failed to serialize settings: {e}")))?;
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }

    /// Ensure the `.quotes/` directory exists.
    pub fn ensure_quotes_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.quotes_dir)?;
        Ok(())
    }

    /// Resolve a configured path against the project root.
    #[must_use]
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }

    /// Configured default sources, resolved and in declaration order.
    #[must_use]
    pub fn source_paths(&self) -> Vec<PathBuf> {
        self.settings
            .sources
            .files
            .iter()
            .map(|f| self.resolve_path(f))
            .collect()
    }

    /// Convert an absolute path to a project-relative path string.
    #[must_use]
    pub fn relative_path(&self, abs: &Path) -> String {
        abs.strip_prefix(&self.project_root)
            .unwrap_or(abs)
            .to_string_lossy()
            .replace('\\', "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn config_new_sets_paths() {
        let cfg = Config::new("/tmp/project");
        assert_eq!(cfg.project_root, PathBuf::from("/tmp/project"));
        assert_eq!(cfg.quotes_dir, PathBuf::from("/tmp/project/.quotes"));
        assert_eq!(
            cfg.config_path,
            PathBuf::from("/tmp/project/.quotes/config.toml")
        );
    }

    #[test]
    fn default_settings() {
        let settings = UserSettings::default();
        assert!(settings.sources.files.is_empty());
        assert_eq!(settings.pdf.extractor, ExtractorKind::Pdftotext);
        assert_eq!(settings.pdf.program, "pdftotext");
        assert_eq!(settings.pdf.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn save_and_load_settings() {
        let tmp = TempDir::new().unwrap();
        let mut cfg = Config::new(tmp.path());
        cfg.settings.sources.files = vec!["_data/quotes.txt".into(), "_data/quotes.csv".into()];
        cfg.settings.pdf.extractor = ExtractorKind::Builtin;
        cfg.settings.pdf.timeout_secs = 5;
        cfg.save_settings().unwrap();
        assert!(cfg.config_path.exists());

        let cfg2 = Config::new(tmp.path());
        assert_eq!(cfg2.settings.sources.files.len(), 2);
        assert_eq!(cfg2.settings.pdf.extractor, ExtractorKind::Builtin);
        assert_eq!(cfg2.settings.pdf.timeout_secs, 5);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let cfg = Config::new(tmp.path());
        cfg.ensure_quotes_dir().unwrap();
        std::fs::write(&cfg.config_path, "[pdf]\nextractor = \"builtin\"\n").unwrap();

        let cfg = Config::new(tmp.path());
        assert_eq!(cfg.settings.pdf.extractor, ExtractorKind::Builtin);
        assert_eq!(cfg.settings.pdf.program, "pdftotext");
        assert!(cfg.settings.sources.files.is_empty());
    }

    #[test]
    fn load_invalid_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let quotes_dir = tmp.path().join(".quotes");
        std::fs::create_dir_all(&quotes_dir).unwrap();
        std::fs::write(quotes_dir.join("config.toml"), "invalid toml {{{{").unwrap();

        let cfg = Config::new(tmp.path());
        assert_eq!(cfg.settings.pdf.timeout_secs, 30);
    }

    #[test]
    fn source_paths_resolve_against_root() {
        let mut cfg = Config::new("/tmp/project");
        cfg.settings.sources.files = vec!["data/a.txt".into(), "/abs/b.csv".into()];
        assert_eq!(
            cfg.source_paths(),
            vec![
                PathBuf::from("/tmp/project/data/a.txt"),
                PathBuf::from("/abs/b.csv")
            ]
        );
    }

    #[test]
    fn relative_path_strips_prefix() {
        let cfg = Config::new("/tmp/project");
        let rel = cfg.relative_path(Path::new("/tmp/project/data/quotes.pdf"));
        assert_eq!(rel, "data/quotes.pdf");
    }
}
