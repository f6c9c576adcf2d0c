mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Exit status for usage errors and fatal failures.
const FAILURE_EXIT_CODE: i32 = 1;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match usage_failure(&e, std::env::args().nth(1).as_deref()) {
            Some((line, code)) => {
                println!("{}", line);
                std::process::exit(code);
            }
            None => e.exit(),
        },
    };

    if let Err(e) = run_app(cli) {
        error!("Command failed: {}", e);
        let (line, code) = fatal_failure(&e);
        println!("{}", line);
        std::process::exit(code);
    }
}

/// The stdout line and exit code for an argument error, or `None` when clap should
/// handle it itself (help and version output).
fn usage_failure(
    error: &clap::Error,
    subcommand: Option<&str>,
) -> Option<(&'static str, i32)> {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        _ => Some((cli::usage_line(subcommand), FAILURE_EXIT_CODE)),
    }
}

/// The stdout line and exit code for a command that failed.
fn fatal_failure(error: &CliError) -> (String, i32) {
    (format!("ERROR: {}", error), FAILURE_EXIT_CODE)
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn run_app(cli: Cli) -> Result<()> {
    logging::setup_logging(
        env_value(logging::LOG_FILTER_ENV).as_deref(),
        env_value(logging::LOG_FILE_ENV).map(PathBuf::from),
    )?;

    info!("BinderLink CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let config = config::load_config(env_value(config::CONFIG_ENV).map(PathBuf::from))?;
    debug!("Resolved pipeline configuration: {:?}", &config);

    match cli.command {
        Commands::Expand(args) => {
            info!("Dispatching to 'expand' command.");
            commands::expand::run(args, &config)
        }
        Commands::Filter(args) => {
            info!("Dispatching to 'filter' command.");
            commands::filter::run(args, &config)
        }
        Commands::Thread(args) => {
            info!("Dispatching to 'thread' command.");
            commands::thread::run(args, &config)
        }
    }
}
