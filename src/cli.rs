use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "languagetool-asciidoc")]
#[command(author, version)]
#[command(about = "Grammar and style checking for AsciiDoc documents")]
#[command(
    long_about = "languagetool-asciidoc checks the prose of AsciiDoc (.adoc) documents with \
    LanguageTool. Documents are parsed into a syntax tree by the asciidoc-ast parser, which runs \
    on a JVM and is downloaded on first use. Markup is hidden from the grammar checker, so only \
    text and whitespace are checked, while reported positions still refer to the original file."
)]
#[command(after_help = "\
EXAMPLES:

    # Check a document against a local LanguageTool server
    languagetool-asciidoc check README.adoc

    # Show the syntax tree the checker works on
    languagetool-asciidoc ast README.adoc

    # Use custom config
    languagetool-asciidoc --config custom.toml check README.adoc

CONFIGURATION:

languagetool-asciidoc looks for configuration files in this order:
  1. Explicit --config path
  2. languagetool-asciidoc.toml or .languagetool-asciidoc.toml next to the document or in its parents
  3. ~/.config/languagetool-asciidoc/config.toml (XDG)
  4. Built-in defaults

Example .languagetool-asciidoc.toml:

    [parser]
    java = \"/usr/lib/jvm/java-17-openjdk/bin/java\"

    [checker]
    server = \"http://localhost:8081\"
    language = \"en-US\"
    disabled_rules = [\"EN_QUOTES\"]

Set RUST_LOG=debug to see what the parser and the checker are doing.")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, languagetool-asciidoc \
        will search for .languagetool-asciidoc.toml or languagetool-asciidoc.toml in the \
        document's directory and its parents, then fall back to \
        ~/.config/languagetool-asciidoc/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a document and print its syntax tree
    #[command(
        long_about = "Parse an AsciiDoc document with asciidoc-ast and print the resulting tree, \
        one node per line with its type and byte range. Leaves also show their text. Useful to \
        understand which parts of a document are treated as prose."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Print the tree
    languagetool-asciidoc ast README.adoc

Only TEXT and WHITE_SPACE leaves are checked by the check command. Every other leaf is markup.")]
    Ast {
        #[arg(help = "Input file path")]
        #[arg(long_help = "Path to the AsciiDoc document to parse.")]
        file: PathBuf,
    },
    /// Check the grammar and style of a document
    #[command(
        long_about = "Parse an AsciiDoc document and check its prose with LanguageTool. Each \
        potential error is printed with its character range in the original document, a message, \
        and suggested corrections. The excessive whitespace rule is always disabled."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Check a document
    languagetool-asciidoc check README.adoc

    # Check against another server
    languagetool-asciidoc --config remote.toml check README.adoc

A LanguageTool server must be reachable at the configured address (default \
http://localhost:8081).")]
    Check {
        #[arg(help = "Input file path")]
        #[arg(long_help = "Path to the AsciiDoc document to check.")]
        file: PathBuf,
    },
}
