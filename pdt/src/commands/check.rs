//! Check command implementation.
//!
//! Lexes each input file and reports whether it is lexically valid.

use std::path::{Path, PathBuf};

use pdc_lex::Token;
use tracing::error;

use crate::commands::common::lex_files;
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{PdtError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Source files to check.
    pub files: Vec<PathBuf>,
    /// Number of parallel jobs, overriding the configured one.
    pub jobs: Option<usize>,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        if self.args.files.is_empty() {
            return Err(PdtError::Validation("No input files specified".to_string()));
        }

        let jobs = self.args.jobs.unwrap_or(self.config.jobs).max(1);
        let results = lex_files(&self.args.files, jobs, &self.config.lexer)?;

        let mut failed = 0;
        for (path, result) in results {
            if let Err(e) = &result {
                error!(file = %path.display(), "{}", e);
                failed += 1;
            }
            println!("{}", report_line(&path, &result));
        }

        if failed > 0 {
            return Err(PdtError::CommandExecution(format!(
                "{} of {} file(s) failed the lexical check",
                failed,
                self.args.files.len()
            )));
        }
        Ok(())
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<()> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

/// One line of the check report.
pub fn report_line(path: &Path, result: &pdc_lex::Result<Vec<Token>>) -> String {
    match result {
        Ok(tokens) => format!("{}: ok ({} tokens)", path.display(), tokens.len()),
        Err(e) => format!("{}: {}", path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_report_line() {
        let ok = pdc_lex::tokenize("var x := 1");
        assert_eq!(report_line(Path::new("a.pd"), &ok), "a.pd: ok (4 tokens)");

        let failed = pdc_lex::tokenize("x := #");
        assert_eq!(
            report_line(Path::new("b.pd"), &failed),
            "b.pd: 1:6: unrecognized character '#'"
        );
    }

    #[test]
    fn test_no_input_files() {
        let command = CheckCommand::new(CheckArgs::default(), Config::default());
        assert!(matches!(command.run(), Err(PdtError::Validation(_))));
    }

    #[test]
    fn test_all_valid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ok.pd");
        std::fs::write(&path, "print 'hi'").unwrap();

        let args = CheckArgs {
            files: vec![path],
            jobs: Some(1),
        };
        assert!(CheckCommand::new(args, Config::default()).run().is_ok());
    }

    #[test]
    fn test_any_invalid_fails() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.pd");
        std::fs::write(&good, "x").unwrap();
        let bad = dir.path().join("bad.pd");
        std::fs::write(&bad, "/* open").unwrap();

        let args = CheckArgs {
            files: vec![good, bad],
            jobs: None,
        };
        assert!(matches!(
            CheckCommand::new(args, Config::default()).run(),
            Err(PdtError::CommandExecution(_))
        ));
    }
}
