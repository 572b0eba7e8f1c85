//! pdt - command-line driver for the Project D lexer.
//!
//! Parses arguments with clap, installs the tracing subscriber, loads
//! `pdt.toml`, and dispatches to the selected subcommand.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{CheckArgs, CheckCommand, TokensArgs, TokensCommand};
use config::Config;
use error::{PdtError, Result};

/// pdt - tools for Project D source files
#[derive(Parser, Debug)]
#[command(name = "pdt")]
#[command(author = "Compiling Dogs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lex Project D source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "PDT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PDT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "PDT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the pdt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of each file
    ///
    /// Writes JSON (the default) or a text table to stdout, or one
    /// `<stem>.json` / `<stem>.txt` file per input with `--output`.
    Tokens(TokensCommandArgs),

    /// Check that each file lexes without errors
    Check(CheckCommandArgs),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommandArgs {
    /// Source files to lex
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (json, text)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing output files
    #[arg(short, long)]
    force: bool,

    /// Number of parallel jobs
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    jobs: Option<u32>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommandArgs {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of parallel jobs
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    jobs: Option<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;
    debug!(?config, "configuration loaded");

    execute_command(cli.command, config)
}

/// Initialize the logging system. Logs go to stderr so token streams on
/// stdout stay machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| PdtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => {
            let args = TokensArgs {
                files: args.files,
                format: args.format,
                pretty: args.pretty,
                output: args.output,
                force: args.force,
                jobs: args.jobs.map(|j| j as usize),
            };
            commands::run::<TokensCommand>(args, config)
        },
        Commands::Check(args) => {
            let args = CheckArgs {
                files: args.files,
                jobs: args.jobs.map(|j| j as usize),
            };
            commands::run::<CheckCommand>(args, config)
        },
    }
}
