use serde::Serialize;

use crate::error::QuoteError;

/// Format a result as minified JSON.
pub fn format_json<T: Serialize>(result: &T) -> String {
    serde_json::to_string(result).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
}

/// Format a result as indented JSON.
pub fn format_pretty<T: Serialize>(result: &T) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
}

/// Format either way depending on the `--pretty` flag.
pub fn render<T: Serialize>(result: &T, pretty: bool) -> String {
    if pretty {
        format_pretty(result)
    } else {
        format_json(result)
    }
}

#[derive(Serialize)]
struct ErrorOutput {
    error: String,
    kind: &'static str,
}

/// User-facing message, distinct per failure kind.
#[must_use]
pub fn user_message(err: &QuoteError) -> String {
    match err {
        QuoteError::UnsupportedFormat { path, ext } => format!(
            "cannot read {path}: unsupported format `{ext}` (supported: .csv, .docx, .pdf, .txt)"
        ),
        QuoteError::Parse { path, source } => {
            format!("could not extract quotes from {path}: {source}")
        }
        other => other.to_string(),
    }
}

/// Format an error as JSON.
pub fn format_error(err: &QuoteError) -> String {
    format_json(&ErrorOutput {
        error: user_message(err),
        kind: err.kind(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[derive(Serialize)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn format_json_minified() {
        let data = TestData {
            name: "test".into(),
            value: 42,
        };
        let json = format_json(&data);
        assert!(!json.contains('\n'));
        assert!(json.contains("\"name\":\"test\""));
    }

    #[test]
    fn render_pretty_is_indented() {
        let data = TestData {
            name: "test".into(),
            value: 42,
        };
        assert!(render(&data, true).contains('\n'));
        assert!(!render(&data, false).contains('\n'));
    }

    #[test]
    fn unsupported_and_parse_messages_differ() {
        let unsupported = QuoteError::UnsupportedFormat {
            path: "notes.rtf".into(),
            ext: "rtf".into(),
        };
        let parse = QuoteError::parse(Path::new("q.csv"), "missing required column `body`");

        let a = format_error(&unsupported);
        let b = format_error(&parse);
        assert!(a.contains("\"kind\":\"unsupported_format\""));
        assert!(a.contains("unsupported format `rtf`"));
        assert!(b.contains("\"kind\":\"parse\""));
        assert!(b.contains("could not extract quotes from q.csv"));
    }

    #[test]
    fn format_error_escapes_quotes() {
        let err = QuoteError::Config("bad \"value\"".into());
        let json = format_error(&err);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["error"], "config error: bad \"value\"");
    }
}
