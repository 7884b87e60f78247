//! The `"body" - author` line convention shared by the TXT, PDF and DOCX parsers.
//!
//! A line is split on the first `-`. Lines without a separator, and lines
//! that would produce an empty body or author, are reported back to the
//! caller instead of failing the whole document.

use std::path::Path;

use crate::models::QuoteRecord;

/// Character separating the quote body from its author.
pub const SEPARATOR: char = '-';

/// Outcome of reading one line (or paragraph) as a quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineParse {
    /// Empty or whitespace-only.
    Blank,
    /// Non-empty but no `-` present.
    MissingSeparator,
    /// Separator present but body or author is empty.
    Incomplete,
    Quote(QuoteRecord),
}

/// Split one line into a quote.
#[must_use]
pub fn parse_line(line: &str) -> LineParse {
    let line = line.trim();
    if line.is_empty() {
        return LineParse::Blank;
    }
    let Some((left, right)) = line.split_once(SEPARATOR) else {
        return LineParse::MissingSeparator;
    };
    let body = strip_enclosing_quotes(left.trim()).trim();
    let author = right.trim();
    match QuoteRecord::new(body, author) {
        Some(quote) => LineParse::Quote(quote),
        None => LineParse::Incomplete,
    }
}

/// Remove at most one leading and one trailing quote mark (straight or typographic).
#[must_use]
pub fn strip_enclosing_quotes(s: &str) -> &str {
    let s = s.strip_prefix(is_quote_mark).unwrap_or(s);
    s.strip_suffix(is_quote_mark).unwrap_or(s)
}

/// Trim whitespace and any quote marks surrounding a whole line.
#[must_use]
pub fn trim_quote_marks(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || is_quote_mark(c))
}

fn is_quote_mark(c: char) -> bool {
    matches!(c, '"' | '\u{201C}' | '\u{201D}')
}

/// Read every line of `source` as a quote, in order.
///
/// `prepare` runs on each raw line before splitting. Malformed lines are
/// skipped with a warning naming `origin` and the 1-based line number.
pub fn collect_quotes(origin: &Path, source: &str, prepare: fn(&str) -> &str) -> Vec<QuoteRecord> {
    let mut quotes = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        match parse_line(prepare(raw)) {
            LineParse::Quote(quote) => quotes.push(quote),
            LineParse::Blank => {}
            LineParse::MissingSeparator => tracing::warn!(
                path = %origin.display(),
                line = idx + 1,
                "skipping line without `-` separator"
            ),
            LineParse::Incomplete => tracing::warn!(
                path = %origin.display(),
                line = idx + 1,
                "skipping line with empty body or author"
            ),
        }
    }
    quotes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(body: &str, author: &str) -> LineParse {
        LineParse::Quote(QuoteRecord::new(body, author).unwrap())
    }

    #[test]
    fn splits_quoted_body_and_author() {
        assert_eq!(
            parse_line("\"Be yourself\" - Oscar Wilde"),
            quote("Be yourself", "Oscar Wilde")
        );
    }

    #[test]
    fn splits_on_first_dash_only() {
        assert_eq!(
            parse_line("Existence precedes essence - Jean-Paul Sartre"),
            quote("Existence precedes essence", "Jean-Paul Sartre")
        );
    }

    #[test]
    fn blank_and_missing_separator() {
        assert_eq!(parse_line(""), LineParse::Blank);
        assert_eq!(parse_line("   \t"), LineParse::Blank);
        assert_eq!(parse_line("no separator here"), LineParse::MissingSeparator);
    }

    #[test]
    fn empty_sides_are_incomplete() {
        assert_eq!(parse_line("- Anonymous"), LineParse::Incomplete);
        assert_eq!(parse_line("\"\" - Anonymous"), LineParse::Incomplete);
        assert_eq!(parse_line("Orphan body -"), LineParse::Incomplete);
    }

    #[test]
    fn strips_one_quote_mark_per_side() {
        assert_eq!(strip_enclosing_quotes("\"hi\""), "hi");
        assert_eq!(strip_enclosing_quotes("\"\"hi\"\""), "\"hi\"");
        assert_eq!(strip_enclosing_quotes("\u{201C}hi\u{201D}"), "hi");
        assert_eq!(strip_enclosing_quotes("\"open"), "open");
        assert_eq!(strip_enclosing_quotes("close\""), "close");
        assert_eq!(strip_enclosing_quotes("\""), "");
    }

    #[test]
    fn trim_quote_marks_whole_line() {
        assert_eq!(trim_quote_marks("  \"Bark - Rex\"  "), "Bark - Rex");
        assert_eq!(trim_quote_marks("\x0c\"Woof\" - Fido"), "Woof\" - Fido");
        assert_eq!(
            parse_line(trim_quote_marks("\"Woof\" - Fido")),
            quote("Woof", "Fido")
        );
    }

    #[test]
    fn collect_quotes_skips_malformed_lines() {
        let source = "\"One\" - A\n\nmalformed line\n\"Two\" - B\n";
        let quotes = collect_quotes(Path::new("mem.txt"), source, str::trim);
        let authors: Vec<&str> = quotes.iter().map(QuoteRecord::author).collect();
        assert_eq!(authors, vec!["A", "B"]);
    }
}
