use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "quotes",
    version,
    about = "Extract attributed quotations from CSV, DOCX, PDF and TXT documents",
    after_help = "Quotes are read with the `\"body\" - author` convention (CSV uses `body` and \
                  `author` columns). Lines or paragraphs without a `-` separator are skipped. \
                  Logs go to stderr; set RUST_LOG or pass --verbose for more detail."
)]
pub struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse quote documents and print the collected quotes as JSON.
    ///
    /// With no paths and no --dir, the sources listed under [sources] in
    /// .quotes/config.toml are parsed. Any failing document fails the whole
    /// command; no partial output is printed.
    Parse {
        /// Documents to parse, in order
        paths: Vec<String>,
        /// Parse every supported document below this directory instead
        #[arg(short, long, conflicts_with = "paths")]
        dir: Option<String>,
    },

    /// List files below a directory and the format each would be parsed as
    Scan {
        /// Directory to scan (default: current directory)
        #[arg(default_value = ".")]
        path: String,
        /// Only list files with a supported format
        #[arg(long)]
        supported_only: bool,
    },

    /// List supported formats and extensions
    Formats,
}
