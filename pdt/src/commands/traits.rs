//! Command trait for the pdt CLI.

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all pdt commands implement.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<()>;

    /// Get the command name.
    fn name() -> &'static str;
}
