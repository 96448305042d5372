//! Melee CLI - Command-line interface for running grid skirmish scenarios.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Melee - A deterministic two-team grid skirmish simulator
#[derive(Parser, Debug)]
#[command(name = "melee")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a single scenario and print the transcript
    Run {
        /// Scenario file (token stream, or .json), `-` for stdin
        #[arg(required = true)]
        scenario: std::path::PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Print only the verdict line
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run many scenarios in parallel and aggregate statistics
    Batch {
        /// Scenario files
        #[arg(required = true, num_args = 1..)]
        scenarios: Vec<std::path::PathBuf>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::BatchFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },

    /// Validate a scenario file without running it
    Validate {
        /// Scenario file to validate
        #[arg(required = true)]
        scenario: std::path::PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Run {
            scenario,
            format,
            quiet,
        } => cli::run::execute(scenario, format, quiet),

        Commands::Batch {
            scenarios,
            threads,
            format,
            progress,
        } => cli::batch::execute(scenarios, threads, format, progress),

        Commands::Validate { scenario } => cli::validate::execute(scenario),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
