use std::fmt;

use serde::Serialize;

/// A single attributed quotation extracted from a source document.
///
/// Both fields are guaranteed non-empty. Construct through [`QuoteRecord::new`],
/// which rejects blank input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct QuoteRecord {
    body: String,
    author: String,
}

impl QuoteRecord {
    /// Build a record, returning `None` if `body` or `author` is blank.
    ///
    /// Values are stored as given; callers decide how much trimming applies.
    #[must_use]
    pub fn new(body: impl Into<String>, author: impl Into<String>) -> Option<Self> {
        let body = body.into();
        let author = author.into();
        if body.trim().is_empty() || author.trim().is_empty() {
            return None;
        }
        Some(Self { body, author })
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }
}

impl fmt::Display for QuoteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" - {}", self.body, self.author)
    }
}
