//! PDF-to-text collaborators used by the PDF parser.
//!
//! An extractor writes a UTF-8 rendering of a PDF to a caller-chosen output
//! path. The caller owns that path and its cleanup.

use std::io::{self, Read};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::config::{ExtractorKind, PdfSettings};

/// How often a running extraction process is polled for completion.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("`{program}` did not finish within {timeout:?}")]
    TimedOut { program: String, timeout: Duration },

    #[error("pdf extraction error: {0}")]
    Pdf(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Converts a PDF into a layout-preserving UTF-8 text file.
pub trait TextExtractor: Send + Sync {
    /// Short identifier, attached to log events.
    fn name(&self) -> &str;

    /// Render `pdf` as text into `output`.
    fn extract(&self, pdf: &Path, output: &Path) -> Result<(), ExtractError>;
}

/// Build the extractor selected in settings.
#[must_use]
pub fn from_settings(settings: &PdfSettings) -> Box<dyn TextExtractor> {
    match settings.extractor {
        ExtractorKind::Pdftotext => {
            Box::new(Pdftotext::new(settings.program.clone(), settings.timeout()))
        }
        ExtractorKind::Builtin => Box::new(BuiltinExtractor::new()),
    }
}

/// Runs poppler's `pdftotext -layout` with a bounded wait.
pub struct Pdftotext {
    program: String,
    timeout: Duration,
}

impl Default for Pdftotext {
    fn default() -> Self {
        let settings = PdfSettings::default();
        let timeout = settings.timeout();
        Self::new(settings.program, timeout)
    }
}

impl Pdftotext {
    #[must_use]
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }
}

impl TextExtractor for Pdftotext {
    fn name(&self) -> &str {
        "pdftotext"
    }

    fn extract(&self, pdf: &Path, output: &Path) -> Result<(), ExtractError> {
        let mut command = Command::new(&self.program);
        command
            .arg("-layout")
            .arg("-enc")
            .arg("UTF-8")
            .arg(pdf)
            .arg(output);
        run_bounded(&self.program, &mut command, self.timeout)
    }
}

/// Run `command` to completion within `timeout`, collecting its stderr.
///
/// Stderr is drained on a helper thread while waiting so a chatty child
/// cannot stall on a full pipe.
fn run_bounded(
    program: &str,
    command: &mut Command,
    timeout: Duration,
) -> Result<(), ExtractError> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| ExtractError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let stderr_reader = child.stderr.take().map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            // Best effort: the exit status is the primary signal.
            let _ = pipe.read_to_end(&mut buf);
            buf
        })
    });

    let waited = wait_with_timeout(&mut child, timeout);
    if !matches!(waited, Ok(Some(_))) {
        let _ = child.kill();
        let _ = child.wait();
    }
    let stderr = stderr_reader
        .and_then(|handle| handle.join().ok())
        .map(|buf| String::from_utf8_lossy(&buf).trim().to_string())
        .unwrap_or_default();

    match waited? {
        Some(status) if status.success() => Ok(()),
        Some(status) => Err(ExtractError::Failed {
            program: program.to_string(),
            status,
            stderr,
        }),
        None => Err(ExtractError::TimedOut {
            program: program.to_string(),
            timeout,
        }),
    }
}

/// Poll `child` until it exits or `timeout` elapses. `None` means it is still running.
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> io::Result<Option<ExitStatus>> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// In-process extraction with `pdf-extract`; no external tooling required.
pub struct BuiltinExtractor;

impl Default for BuiltinExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for BuiltinExtractor {
    fn name(&self) -> &str {
        "builtin"
    }

    fn extract(&self, pdf: &Path, output: &Path) -> Result<(), ExtractError> {
        let bytes = std::fs::read(pdf)?;
        let text = pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| ExtractError::Pdf(e.to_string()))?;
        std::fs::write(output, text)?;
        Ok(())
    }
}
