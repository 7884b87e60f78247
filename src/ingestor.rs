use std::path::Path;

use crate::config::Config;
use crate::error::{QuoteError, Result};
use crate::ingest::dispatcher::Dispatcher;
use crate::models::{Format, QuoteRecord};

/// Single entry point for shells: parse one or many quote documents.
///
/// Holds no state besides the parser registry, so one instance can serve
/// concurrent callers. Each call returns a freshly owned list.
pub struct Ingestor {
    dispatcher: Dispatcher,
}

impl Ingestor {
    #[must_use]
    pub fn new() -> Self {
        Self::with_dispatcher(Dispatcher::new())
    }

    /// Build the parser registry from project settings.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_dispatcher(Dispatcher::from_settings(&config.settings.pdf))
    }

    #[must_use]
    pub fn with_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    #[must_use]
    pub fn can_ingest(&self, path: &Path) -> bool {
        self.dispatcher.supports(path)
    }

    /// Format that would be used for `path`, if any.
    #[must_use]
    pub fn format_of(&self, path: &Path) -> Option<Format> {
        self.dispatcher.resolve(path).ok().map(|p| p.format())
    }

    /// Parse a single document.
    pub fn parse_one(&self, path: &Path) -> Result<Vec<QuoteRecord>> {
        self.dispatcher.parse_one(path)
    }

    /// Parse documents in order and concatenate their quotes.
    ///
    /// The first failing document fails the whole call; nothing partial is returned.
    pub fn parse_many<I, P>(&self, paths: I) -> Result<Vec<QuoteRecord>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.dispatcher.parse_many(paths)
    }

    /// Parse the default sources listed in the project config.
    pub fn load_sources(&self, config: &Config) -> Result<Vec<QuoteRecord>> {
        let sources = config.source_paths();
        if sources.is_empty() {
            return Err(QuoteError::Config(format!(
                "no quote sources configured; add [sources] files to {}",
                config.config_path.display()
            )));
        }
        self.parse_many(&sources)
    }
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::new()
    }
}
