use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cogload",
    version,
    about = "Cognitive Load Index calculator for codebase metrics",
    after_help = "Commands: normalize-d1 .. normalize-d8 (with d4-static, d4-llm, d4-fallback, \
                  d6-class, d6-module variants), aggregate, aggregate-polyglot, sample-files, \
                  sample-identifiers, rating.\n\n\
                  Example: cogload normalize-d1 '{\"complexity_scores\": [5, 10, 15]}'"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding cogload.toml and .cogload/local.toml
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,

    /// Command to run
    pub command: Option<String>,

    /// JSON payload, or `-` to read it from stdin
    pub payload: Option<String>,
}
