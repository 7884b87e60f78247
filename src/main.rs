// Inherit lint configuration from lib.rs for consistency
#![allow(clippy::missing_errors_doc, clippy::needless_pass_by_value)]

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use quote_engine::cli::commands::{Cli, Command};
use quote_engine::cli::output;
use quote_engine::config::Config;
use quote_engine::error::QuoteError;
use quote_engine::ingestor::Ingestor;
use quote_engine::operations::{self, FilesFilter};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays valid JSON.
///
/// `--verbose` forces debug output; otherwise `RUST_LOG` applies, defaulting to warn.
fn init_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

type CmdResult = Result<(), QuoteError>;

fn run(cli: Cli) -> CmdResult {
    let pretty = cli.pretty;
    match cli.command {
        Command::Parse { paths, dir } => cmd_parse(&paths, dir.as_deref(), pretty),
        Command::Scan {
            path,
            supported_only,
        } => cmd_scan(&path, supported_only, pretty),
        Command::Formats => cmd_formats(pretty),
    }
}

fn cmd_parse(paths: &[String], dir: Option<&str>, pretty: bool) -> CmdResult {
    let config = Config::from_cwd()?;
    let ingestor = Ingestor::from_config(&config);

    let result = if let Some(dir) = dir {
        operations::parse_dir(&ingestor, Path::new(dir))?
    } else if paths.is_empty() {
        operations::parse_sources(&ingestor, &config)?
    } else {
        operations::parse_paths(&ingestor, paths)?
    };
    println!("{}", output::render(&result, pretty));
    Ok(())
}

fn cmd_scan(path: &str, supported_only: bool, pretty: bool) -> CmdResult {
    let config = Config::from_cwd()?;
    let ingestor = Ingestor::from_config(&config);
    let filter = FilesFilter { supported_only };
    let result = operations::list_files(&ingestor, Path::new(path), &filter)?;
    println!("{}", output::render(&result, pretty));
    Ok(())
}

fn cmd_formats(pretty: bool) -> CmdResult {
    let config = Config::from_cwd()?;
    let ingestor = Ingestor::from_config(&config);
    let result = operations::list_formats(&ingestor, &config.settings.pdf);
    println!("{}", output::render(&result, pretty));
    Ok(())
}
