//! Operations behind the CLI subcommands.
//!
//! Each returns a serializable result so the shell only formats output.

pub mod files;
pub mod formats;
pub mod parse;

pub use files::{list_files, FilesFilter, FilesResult, FilesSummary};
pub use formats::{list_formats, FormatInfo, FormatsResult};
pub use parse::{parse_dir, parse_paths, parse_sources, ParseOutput};
