mod aggregate;
mod cli;
mod config;
mod dispatch;
mod error;
mod normalize;
mod report;
mod sampling;
mod types;

use crate::dispatch::Command;
use crate::error::{CogloadError, Result};
use clap::Parser;
use serde_json::Value;
use std::io::Read;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_payload(raw: &str) -> Result<String> {
    if raw != "-" {
        return Ok(raw.to_string());
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn run(cli: &cli::Cli) -> Result<Value> {
    let (name, raw_payload) = match (cli.command.as_deref(), cli.payload.as_deref()) {
        (Some(name), Some(payload)) => (name, payload),
        _ => {
            return Err(CogloadError::Usage(
                "Usage: cogload <command> '<json_data>'".to_string(),
            ))
        }
    };
    let command: Command = name.parse()?;

    let loaded = config::load_config(&cli.config_dir)?;
    let payload = read_payload(raw_payload)?;
    let data: Value =
        serde_json::from_str(&payload).map_err(|e| CogloadError::Parse(e.to_string()))?;

    debug!(%command, bytes = payload.len(), "payload decoded");
    dispatch::execute(command, data, &loaded.sampling_defaults())
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let outcome = run(&cli);
    let code = if outcome.is_ok() {
        exit_code::SUCCESS
    } else {
        exit_code::FAILURE
    };

    match report::render(&outcome) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::FAILURE);
        }
    }
    if code != exit_code::SUCCESS {
        std::process::exit(code);
    }
}
