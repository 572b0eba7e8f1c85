//! Command modules for the pdt CLI.
//!
//! Each subcommand lives in its own file and implements [`Command`].

pub mod common;
pub mod traits;

pub mod check;
pub mod tokens;

use std::time::Instant;

use tracing::info;

use crate::config::Config;
use crate::error::Result;

pub use check::{CheckArgs, CheckCommand};
pub use tokens::{TokensArgs, TokensCommand};
use traits::Command;

/// Build and execute a command, logging how long it took.
pub fn run<C: Command>(args: C::Args, config: Config) -> Result<()> {
    let started = Instant::now();
    info!(command = C::name(), "running command");

    let result = C::new(args, config).execute();

    info!(
        command = C::name(),
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        ok = result.is_ok(),
        "command finished"
    );
    result
}
