//! Common types and utilities for pdt commands.

use std::path::{Path, PathBuf};

use pdc_lex::{tokenize_file_with, LexError, LexerConfig, Token};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::debug;

use crate::error::{PdtError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported token stream formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// serde_json rendering of the token list
    Json,
    /// One `line:column  Family.Variant  lexeme` row per token
    Text,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "text" | "txt" => Some(Self::Text),
            _ => None,
        }
    }

    /// Canonical name, as accepted in `pdt.toml`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }

    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "txt",
        }
    }

    /// Render a token stream in this format.
    pub fn render(&self, tokens: &[Token], pretty: bool) -> Result<String> {
        match self {
            Self::Json if pretty => Ok(serde_json::to_string_pretty(tokens)?),
            Self::Json => Ok(serde_json::to_string(tokens)?),
            Self::Text => Ok(render_text(tokens)),
        }
    }
}

fn render_text(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let at = format!("{}:{}", token.line, token.column);
        let kind = token.kind.to_string();
        out.push_str(&format!(
            "{:<8}  {:<22}  {}\n",
            at,
            kind,
            token.lexeme.escape_debug()
        ));
    }
    out
}

// ============================================================================
// Lexing
// ============================================================================

/// Outcome of lexing one input file.
pub type FileResult = (PathBuf, std::result::Result<Vec<Token>, LexError>);

/// Lex every file on a pool of `jobs` threads.
///
/// Each file gets its own lexer. Results come back in the order of `files`.
pub fn lex_files(files: &[PathBuf], jobs: usize, config: &LexerConfig) -> Result<Vec<FileResult>> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| PdtError::Config(format!("Failed to start {} worker threads: {}", jobs, e)))?;

    debug!(files = files.len(), jobs, "lexing files");
    Ok(pool.install(|| {
        files
            .par_iter()
            .map(|path| (path.clone(), tokenize_file_with(path, config)))
            .collect()
    }))
}

// ============================================================================
// Path Utilities
// ============================================================================

/// Path of the rendered token stream for `input` inside `output_dir`.
pub fn output_path(input: &Path, output_dir: &Path, format: OutputFormat) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .ok_or_else(|| PdtError::FileOperation(format!("Invalid file path: {}", input.display())))?;
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(format.extension());
    Ok(output_dir.join(name))
}
