//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("languagetool-asciidoc")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("checks the prose of AsciiDoc"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("languagetool-asciidoc")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("languagetool-asciidoc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("languagetool-asciidoc")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_file_is_required() {
    cargo_bin_cmd!("languagetool-asciidoc")
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<FILE>"));
}

#[test]
fn test_ast_help() {
    cargo_bin_cmd!("languagetool-asciidoc")
        .args(["ast", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Parse an AsciiDoc document"));
}

#[test]
fn test_check_help() {
    cargo_bin_cmd!("languagetool-asciidoc")
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("check its prose with LanguageTool"));
}

#[test]
fn test_invalid_explicit_config() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    let doc = temp_dir.path().join("doc.adoc");
    std::fs::write(&config, "[checker\n").unwrap();
    std::fs::write(&doc, "Hello.\n").unwrap();

    cargo_bin_cmd!("languagetool-asciidoc")
        .args(["--config", config.to_str().unwrap(), "ast", doc.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}
