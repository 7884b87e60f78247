use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::ingest::scanner::Scanner;
use crate::ingestor::Ingestor;
use crate::models::QuoteRecord;

/// Quotes collected from one or more documents.
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutput {
    /// Number of quotes.
    pub count: usize,
    /// Documents parsed, in order.
    pub files: Vec<String>,
    pub quotes: Vec<QuoteRecord>,
}

impl ParseOutput {
    fn new(files: Vec<String>, quotes: Vec<QuoteRecord>) -> Self {
        Self {
            count: quotes.len(),
            files,
            quotes,
        }
    }
}

/// Parse explicit paths in the given order.
pub fn parse_paths(ingestor: &Ingestor, paths: &[String]) -> Result<ParseOutput> {
    let quotes = ingestor.parse_many(paths.iter().map(Path::new))?;
    Ok(ParseOutput::new(paths.to_vec(), quotes))
}

/// Parse the sources configured in `.quotes/config.toml`.
pub fn parse_sources(ingestor: &Ingestor, config: &Config) -> Result<ParseOutput> {
    let quotes = ingestor.load_sources(config)?;
    let files = config
        .source_paths()
        .iter()
        .map(|p| config.relative_path(p))
        .collect();
    Ok(ParseOutput::new(files, quotes))
}

/// Parse every supported document below `dir`, sorted by path.
pub fn parse_dir(ingestor: &Ingestor, dir: &Path) -> Result<ParseOutput> {
    let found = Scanner::new(dir).scan_supported(ingestor.dispatcher())?;
    let quotes = ingestor.parse_many(found.iter().map(|f| &f.path))?;
    let files = found.into_iter().map(|f| f.relative_path).collect();
    Ok(ParseOutput::new(files, quotes))
}
