//! Check subcommand tests

#![cfg(unix)]

use assert_cmd::cargo::cargo_bin_cmd;
use httpmock::Method::POST;
use httpmock::MockServer;
use predicates::prelude::*;

use crate::support::{HELLO_WORLD_JSON, Project, printing_parser};

const RESPONSE: &str = r#"{
  "software": {"name": "LanguageTool", "version": "6.4"},
  "matches": [
    {
      "message": "This sentence does not start with an uppercase letter.",
      "replacements": [{"value": "Hello"}],
      "offset": 0,
      "length": 5,
      "rule": {"id": "UPPERCASE_SENTENCE_START"}
    },
    {
      "message": "Possible typo: you repeated a whitespace",
      "replacements": [{"value": " "}],
      "offset": 5,
      "length": 2,
      "rule": {"id": "WHITESPACE_RULE"}
    }
  ]
}"#;

fn without_proxies(cmd: &mut assert_cmd::Command) -> &mut assert_cmd::Command {
    for var in [
        "HTTP_PROXY",
        "http_proxy",
        "HTTPS_PROXY",
        "https_proxy",
        "ALL_PROXY",
        "all_proxy",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn checker_section(server: &MockServer, extra: &str) -> String {
    format!("server = {:?}\n{extra}", server.base_url())
}

#[test]
fn test_check_reports_matches_at_document_offsets() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v2/check")
            .body_contains("language=en-GB")
            .body_contains("disabledRules=WHITESPACE_RULE")
            .body_contains("data=%7B%22annotation%22");
        then.status(200)
            .header("content-type", "application/json")
            .body(RESPONSE);
    });
    let project = Project::new(
        &printing_parser(HELLO_WORLD_JSON),
        &checker_section(&server, "language = \"en-GB\""),
    );

    let mut cmd = cargo_bin_cmd!("languagetool-asciidoc");
    without_proxies(&mut cmd)
        .args(["check", project.doc.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            "Potential error at characters 0-5: \
             This sentence does not start with an uppercase letter.\n\
             Suggested correction(s): [Hello]\n",
        );

    mock.assert();
}

#[test]
fn test_check_clean_document_prints_nothing() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v2/check");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"matches": []}"#);
    });
    let project = Project::new(
        &printing_parser(HELLO_WORLD_JSON),
        &checker_section(&server, ""),
    );

    let mut cmd = cargo_bin_cmd!("languagetool-asciidoc");
    without_proxies(&mut cmd)
        .args(["check", project.doc.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    mock.assert();
}

#[test]
fn test_check_server_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v2/check");
        then.status(400).body("Error: Missing 'language' parameter");
    });
    let project = Project::new(
        &printing_parser(HELLO_WORLD_JSON),
        &checker_section(&server, ""),
    );

    let mut cmd = cargo_bin_cmd!("languagetool-asciidoc");
    without_proxies(&mut cmd)
        .args(["check", project.doc.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to check"))
        .stderr(predicate::str::contains(
            "LanguageTool returned HTTP 400: Error: Missing 'language' parameter",
        ));

    mock.assert();
}

#[test]
fn test_check_does_not_contact_server_when_parsing_fails() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v2/check");
        then.status(200).body(RESPONSE);
    });
    let project = Project::new(
        "echo 'parse error' >&2\nexit 1\n",
        &checker_section(&server, ""),
    );

    cargo_bin_cmd!("languagetool-asciidoc")
        .args(["check", project.doc.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse error"));

    mock.assert_hits(0);
}
