//! Ast subcommand tests

#![cfg(unix)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

use crate::support::{HELLO_WORLD_JSON, Project, printing_parser};

#[test]
fn test_ast_prints_outline() {
    let project = Project::new(&printing_parser(HELLO_WORLD_JSON), "");

    cargo_bin_cmd!("languagetool-asciidoc")
        .args(["ast", project.doc.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("FILE@0..15\n"))
        .stdout(predicate::str::contains("  TEXT@0..5 \"hello\"\n"))
        .stdout(predicate::str::contains("  BOLD@7..14\n    BOLD_START@7..8 \"*\"\n"));
}

#[test]
fn test_ast_passes_document_path_to_parser() {
    let script = r#"
case "$1 $3" in
  "-jar "*doc.adoc) printf '{"type":"AsciiDoc:FILE","startOffset":0,"endOffset":0}' ;;
  *) echo "unexpected arguments: $*" >&2; exit 2 ;;
esac
"#;
    let project = Project::new(script, "");

    cargo_bin_cmd!("languagetool-asciidoc")
        .args(["ast", project.doc.to_str().unwrap()])
        .assert()
        .success()
        .stdout("FILE@0..0\n");
}

#[test]
fn test_ast_reports_parser_error_verbatim() {
    let project = Project::new(
        "echo 'line 3: unterminated listing block' >&2\nexit 3\n",
        "",
    );

    cargo_bin_cmd!("languagetool-asciidoc")
        .args(["ast", project.doc.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to parse"))
        .stderr(predicate::str::contains("line 3: unterminated listing block"));
}

#[test]
fn test_ast_rejects_unknown_node_type() {
    let project = Project::new(
        &printing_parser(r#"{"type":"AsciiDoc:HOLOGRAM","startOffset":0,"endOffset":0}"#),
        "",
    );

    cargo_bin_cmd!("languagetool-asciidoc")
        .args(["ast", project.doc.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed AST"))
        .stderr(predicate::str::contains("unknown node type `HOLOGRAM`"))
        .stderr(predicate::str::contains("malformed AST: ").not());
}

#[test]
fn test_ast_missing_file() {
    let project = Project::new(&printing_parser(HELLO_WORLD_JSON), "");
    let missing = project.path().join("missing.adoc");

    cargo_bin_cmd!("languagetool-asciidoc")
        .args(["ast", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"))
        .stderr(predicate::str::contains("missing.adoc"));

    assert!(!project.path().join("cache").exists());
}
