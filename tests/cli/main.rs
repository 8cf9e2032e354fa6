//! CLI integration tests for languagetool-asciidoc.
//!
//! These tests execute the compiled binary against a fake parser (a shell script
//! standing in for `java -jar asciidoc-ast.jar`) and a mock LanguageTool server (`httpmock`).

mod ast;
mod check;
mod common;
#[cfg(unix)]
mod support;
