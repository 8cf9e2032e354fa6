//! Fixtures shared by the subcommand tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// `hello  *world*.` as the parser reports it.
pub const HELLO_WORLD: &str = "hello  *world*.";

pub const HELLO_WORLD_JSON: &str = r#"{
  "type": "AsciiDoc:FILE", "startOffset": 0, "endOffset": 15,
  "children": [
    {"type": "AsciiDoc:TEXT", "text": "hello", "startOffset": 0, "endOffset": 5},
    {"type": "AsciiDoc:WHITE_SPACE", "text": "  ", "startOffset": 5, "endOffset": 7},
    {"type": "AsciiDoc:BOLD", "startOffset": 7, "endOffset": 14, "children": [
      {"type": "AsciiDoc:BOLD_START", "text": "*", "startOffset": 7, "endOffset": 8},
      {"type": "AsciiDoc:TEXT", "text": "world", "startOffset": 8, "endOffset": 13},
      {"type": "AsciiDoc:BOLD_END", "text": "*", "startOffset": 13, "endOffset": 14}
    ]},
    {"type": "AsciiDoc:TEXT", "text": ".", "startOffset": 14, "endOffset": 15}
  ]
}"#;

/// A project directory with a document, a fake parser and a config wiring them up.
pub struct Project {
    pub dir: TempDir,
    pub doc: PathBuf,
}

impl Project {
    /// `parser_script` runs under `/bin/sh` as `script -jar <jar> <input>`.
    pub fn new(parser_script: &str, checker_section: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let doc = dir.path().join("doc.adoc");
        fs::write(&doc, HELLO_WORLD).unwrap();

        let script = dir.path().join("fake-parser.sh");
        fs::write(&script, parser_script).unwrap();
        let jar = dir.path().join("asciidoc-ast.jar");
        fs::write(&jar, b"").unwrap();

        let config = format!(
            "[parser]\njava = \"/bin/sh\"\njvm_args = [{script:?}]\njar = {jar:?}\ncache_dir = {cache:?}\n\n[checker]\n{checker_section}\n",
            script = script.display().to_string(),
            jar = jar.display().to_string(),
            cache = dir.path().join("cache").display().to_string(),
        );
        fs::write(dir.path().join(".languagetool-asciidoc.toml"), config).unwrap();

        Self { dir, doc }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// A parser that prints `json` no matter what it is given.
pub fn printing_parser(json: &str) -> String {
    format!("cat <<'JSON'\n{json}\nJSON\n")
}
