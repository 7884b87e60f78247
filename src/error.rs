use thiserror::Error;

/// Boxed underlying cause carried by a [`QuoteError::Parse`].
pub type Cause = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("unsupported format: {path} (extension: {ext})")]
    UnsupportedFormat { path: String, ext: String },

    #[error("parse error in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: Cause,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl QuoteError {
    /// Build a parse error for `path` from any error-like cause.
    pub fn parse(path: &std::path::Path, source: impl Into<Cause>) -> Self {
        Self::Parse {
            path: path.to_string_lossy().into(),
            source: source.into(),
        }
    }

    /// Short machine-readable kind, used by the CLI error output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat { .. } => "unsupported_format",
            Self::Parse { .. } => "parse",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
            Self::Config(_) => "config",
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::path::Path;

    #[test]
    fn parse_error_keeps_path_and_cause() {
        let err = QuoteError::parse(Path::new("quotes.csv"), "missing column `body`");
        let msg = err.to_string();
        assert!(msg.contains("quotes.csv"));
        assert!(msg.contains("missing column `body`"));
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("missing column `body`")
        );
    }

    #[test]
    fn unsupported_format_names_extension() {
        let err = QuoteError::UnsupportedFormat {
            path: "notes.rtf".into(),
            ext: "rtf".into(),
        };
        assert_eq!(err.kind(), "unsupported_format");
        assert!(err.to_string().contains("rtf"));
    }
}
