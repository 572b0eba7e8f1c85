//! CLI Interface E2E Tests
//!
//! These tests run the pdt binary against fixture sources and check its
//! output, exit status and written files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// A pdt command isolated from any user or project configuration.
fn pdt(sandbox: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pdt").expect("pdt binary should be built");
    cmd.current_dir(sandbox.path())
        .env("HOME", sandbox.path())
        .env("XDG_CONFIG_HOME", sandbox.path().join("xdg"))
        .env_remove("PDT_VERBOSE")
        .env_remove("PDT_CONFIG")
        .env("PDT_NO_COLOR", "true");
    cmd
}

#[test]
fn test_cli_help() {
    let sandbox = TempDir::new().unwrap();
    pdt(&sandbox)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("tokens")));
}

#[test]
fn test_cli_version() {
    let sandbox = TempDir::new().unwrap();
    pdt(&sandbox)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pdt"));
}

#[test]
fn test_tokens_json_to_stdout() {
    let sandbox = TempDir::new().unwrap();
    let output = pdt(&sandbox)
        .arg("tokens")
        .arg(fixture("hello.pd"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let tokens: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tokens = tokens.as_array().unwrap();
    assert_eq!(tokens[0]["lexeme"], "var");
    assert_eq!(tokens[0]["line"], 2);
    assert_eq!(tokens[0]["column"], 1);
    assert_eq!(tokens[0]["kind"]["Keyword"], "Var");
    assert!(tokens
        .iter()
        .any(|t| t["lexeme"] == "\"Hello, world\""));
}

#[test]
fn test_tokens_text_format() {
    let sandbox = TempDir::new().unwrap();
    pdt(&sandbox)
        .args(["tokens", "-F", "text"])
        .arg(fixture("loop.pd"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Operator.Range"))
        .stdout(predicate::str::contains("Literal.Real"))
        .stdout(predicate::str::contains("Keyword.Loop"))
        .stdout(predicate::str::contains("Comment").not());
}

#[test]
fn test_tokens_logs_go_to_stderr() {
    let sandbox = TempDir::new().unwrap();
    pdt(&sandbox)
        .args(["--verbose", "tokens", "-F", "text"])
        .arg(fixture("hello.pd"))
        .assert()
        .success()
        .stdout(predicate::str::contains("lexical analysis").not())
        .stderr(predicate::str::contains("lexical analysis finished"));
}

#[test]
fn test_tokens_into_output_dir() {
    let sandbox = TempDir::new().unwrap();
    let out = sandbox.path().join("tokens");

    pdt(&sandbox)
        .arg("tokens")
        .arg(fixture("hello.pd"))
        .arg(fixture("loop.pd"))
        .arg("--pretty")
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let hello = fs::read_to_string(out.join("hello.json")).unwrap();
    assert!(hello.contains("\n  "));
    let value: serde_json::Value = serde_json::from_str(&hello).unwrap();
    assert!(value.as_array().is_some_and(|a| !a.is_empty()));
    assert!(out.join("loop.json").exists());
}

#[test]
fn test_tokens_refuses_to_overwrite_without_force() {
    let sandbox = TempDir::new().unwrap();
    let out = sandbox.path().join("tokens");
    fs::create_dir(&out).unwrap();
    fs::write(out.join("hello.json"), "old").unwrap();

    pdt(&sandbox)
        .arg("tokens")
        .arg(fixture("hello.pd"))
        .arg("-o")
        .arg(&out)
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(out.join("hello.json")).unwrap(), "old");

    pdt(&sandbox)
        .arg("tokens")
        .arg(fixture("hello.pd"))
        .arg("-o")
        .arg(&out)
        .arg("--force")
        .assert()
        .success();
    assert_ne!(fs::read_to_string(out.join("hello.json")).unwrap(), "old");
}

#[test]
fn test_tokens_lex_error_fails() {
    let sandbox = TempDir::new().unwrap();
    pdt(&sandbox)
        .arg("tokens")
        .arg(fixture("unterminated.pd"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unterminated string literal"));
}

#[test]
fn test_tokens_unknown_format() {
    let sandbox = TempDir::new().unwrap();
    pdt(&sandbox)
        .args(["tokens", "-F", "yaml"])
        .arg(fixture("hello.pd"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}

#[test]
fn test_check_reports_each_file_in_order() {
    let sandbox = TempDir::new().unwrap();
    pdt(&sandbox)
        .arg("check")
        .arg(fixture("hello.pd"))
        .arg(fixture("loop.pd"))
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)hello\.pd: ok \(\d+ tokens\).*loop\.pd: ok").unwrap());
}

#[test]
fn test_check_failure_exit_code() {
    let sandbox = TempDir::new().unwrap();
    pdt(&sandbox)
        .arg("check")
        .arg(fixture("hello.pd"))
        .arg(fixture("unterminated.pd"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("hello.pd: ok"))
        .stdout(predicate::str::contains("unterminated.pd: 1:10: unterminated string literal"));
}

#[test]
fn test_check_missing_file() {
    let sandbox = TempDir::new().unwrap();
    pdt(&sandbox)
        .args(["check", "does-not-exist.pd"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("failed to read does-not-exist.pd"));
}

#[test]
fn test_config_from_current_dir() {
    let sandbox = TempDir::new().unwrap();
    fs::write(
        sandbox.path().join("pdt.toml"),
        "[output]\nformat = \"text\"\n\n[lexer]\ntab_width = 8\n",
    )
    .unwrap();

    pdt(&sandbox)
        .arg("tokens")
        .arg(fixture("loop.pd"))
        .assert()
        .success()
        .stdout(predicate::str::contains("4:9 "));
}

#[test]
fn test_verbose_config_is_logged() {
    let sandbox = TempDir::new().unwrap();
    fs::write(
        sandbox.path().join("pdt.toml"),
        "verbose = true\n\n[lexer]\ntab_width = 8\n",
    )
    .unwrap();

    pdt(&sandbox)
        .arg("check")
        .arg(fixture("hello.pd"))
        .assert()
        .success()
        .stderr(predicate::str::contains("configuration loaded"))
        .stderr(predicate::str::contains("tab_width: 8"));
}

#[test]
fn test_explicit_config_rejects_huge_tab_width() {
    let sandbox = TempDir::new().unwrap();
    let config = sandbox.path().join("custom.toml");
    fs::write(&config, "[lexer]\ntab_width = 4294967295\n").unwrap();

    pdt(&sandbox)
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg(fixture("hello.pd"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("tab_width"));
}

#[test]
fn test_explicit_config_rejects_zero_tab_width() {
    let sandbox = TempDir::new().unwrap();
    let config = sandbox.path().join("custom.toml");
    fs::write(&config, "[lexer]\ntab_width = 0\n").unwrap();

    pdt(&sandbox)
        .arg("--config")
        .arg(&config)
        .args(["check"])
        .arg(fixture("hello.pd"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("tab_width"));
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    let sandbox = TempDir::new().unwrap();
    pdt(&sandbox).assert().failure().code(2);
}
