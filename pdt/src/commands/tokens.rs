//! Tokens command implementation.
//!
//! Lexes each input file and writes its token stream as JSON or text,
//! either to stdout or to one file per input in an output directory.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use pdc_lex::Token;
use tracing::{error, info};

use crate::commands::common::{lex_files, output_path, OutputFormat};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{PdtError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Source files to lex.
    pub files: Vec<PathBuf>,
    /// Output format, overriding the configured one.
    pub format: Option<String>,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Directory receiving one output file per input.
    pub output: Option<PathBuf>,
    /// Overwrite existing output files.
    pub force: bool,
    /// Number of parallel jobs, overriding the configured one.
    pub jobs: Option<usize>,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

impl TokensCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        if self.args.files.is_empty() {
            return Err(PdtError::Validation("No input files specified".to_string()));
        }
        let format = self.output_format()?;
        let pretty = self.args.pretty || self.config.output.pretty;
        if let Some(dir) = &self.args.output {
            Self::prepare_output_dir(dir)?;
        }

        let jobs = self.args.jobs.unwrap_or(self.config.jobs).max(1);
        let results = lex_files(&self.args.files, jobs, &self.config.lexer)?;
        let multiple = results.len() > 1;

        let mut failed = 0;
        for (path, result) in results {
            let outcome = match result {
                Ok(tokens) => self.emit(&path, &tokens, format, pretty, multiple),
                Err(e) => Err(e.into()),
            };
            if let Err(e) = outcome {
                error!(file = %path.display(), "{}", e);
                failed += 1;
            }
        }

        if failed > 0 {
            return Err(PdtError::CommandExecution(format!(
                "{} file(s) failed to lex",
                failed
            )));
        }
        Ok(())
    }

    /// Format from the command line, else from the configuration.
    fn output_format(&self) -> Result<OutputFormat> {
        if let Some(name) = &self.args.format {
            return OutputFormat::from_name(name)
                .ok_or_else(|| PdtError::Validation(format!("Unknown format: {}", name)));
        }
        OutputFormat::from_name(&self.config.output.format).ok_or_else(|| {
            PdtError::Config(format!(
                "Invalid format in configuration: {}",
                self.config.output.format
            ))
        })
    }

    fn prepare_output_dir(dir: &Path) -> Result<()> {
        if dir.exists() && !dir.is_dir() {
            return Err(PdtError::Validation(format!(
                "Output path is not a directory: {}",
                dir.display()
            )));
        }
        fs::create_dir_all(dir)?;
        Ok(())
    }

    fn emit(
        &self,
        input: &Path,
        tokens: &[Token],
        format: OutputFormat,
        pretty: bool,
        with_header: bool,
    ) -> Result<()> {
        let rendered = format.render(tokens, pretty)?;

        let Some(dir) = &self.args.output else {
            let mut stdout = std::io::stdout().lock();
            if with_header && format == OutputFormat::Text {
                writeln!(stdout, "==> {} <==", input.display())?;
            }
            writeln!(stdout, "{}", rendered.trim_end())?;
            return Ok(());
        };

        let target = output_path(input, dir, format)?;
        if target.exists() && !self.args.force {
            return Err(PdtError::FileOperation(format!(
                "Output file already exists: {}",
                target.display()
            )));
        }
        fs::write(&target, rendered)?;
        info!(
            file = %input.display(),
            output = %target.display(),
            tokens = tokens.len(),
            "wrote token stream"
        );
        Ok(())
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<()> {
        self.run()
    }

    fn name() -> &'static str {
        "tokens"
    }
}
