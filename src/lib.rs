// Pedantic lint configuration for the crate.
// - missing_errors_doc: Error handling is self-evident from Result types
// - missing_panics_doc: Panics are confined to tests
// - module_name_repetitions: Parser types read better fully named (CsvParser, DocxParser)
// - needless_pass_by_value: Sometimes clearer semantically
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::needless_pass_by_value
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod ingestor;
pub mod models;
pub mod operations;

pub use error::{QuoteError, Result};
pub use ingestor::Ingestor;
pub use models::{Format, QuoteRecord};
