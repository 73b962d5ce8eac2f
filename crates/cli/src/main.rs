// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bscripts: run build scripts and collect their artifacts

mod commands;
mod env;
mod exit_error;
mod logging;
mod output;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::project::Project;
use exit_error::{ExitError, EXIT_OTHER};
use output::OutputFormat;

/// Version string including the commit it was built from.
const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BSCRIPTS_GIT_HASH"));

#[derive(Parser)]
#[command(
    name = "bscripts",
    version = VERSION,
    about = "Run build scripts and collect their artifacts for packaging"
)]
struct Cli {
    /// Project root (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Configuration file (default: bscripts.toml, then pyproject.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (overrides BSCRIPTS_LOG_LEVEL)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Output format
    #[arg(short = 'o', long = "output", global = true, value_enum, default_value_t)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Clean outputs, run every script and collect artifacts
    Run,
    /// Run the pre-run cleanup only
    Clean,
    /// Remove collected artifacts after the package has been built
    Finalize,
    /// Show resolved script definitions
    Show,
}

fn dispatch(cli: Cli) -> Result<()> {
    let project = Project::load(cli.root.as_deref(), cli.config.as_deref())?;
    match cli.command {
        Commands::Run => commands::run::handle(&project, cli.output),
        Commands::Clean => commands::clean::handle(&project, cli.output),
        Commands::Finalize => commands::finalize::handle(&project, cli.output),
        Commands::Show => commands::show::handle(&project, cli.output),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    if let Err(e) = dispatch(cli) {
        let code = e.downcast_ref::<ExitError>().map_or(EXIT_OTHER, |x| x.code);
        eprintln!("error: {:#}", e);
        process::exit(code);
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
