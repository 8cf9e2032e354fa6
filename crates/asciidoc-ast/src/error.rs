use std::io;
use std::path::PathBuf;

use crate::node_type::NodeType;

/// Errors that can occur while provisioning, running, or reading the AST parser.
#[derive(Debug, thiserror::Error)]
pub enum AstError {
    /// The parser artifact could not be downloaded or written to the cache
    #[error("can't download {url} to {}", path.display())]
    Download {
        url: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// No per-user cache directory is known for this platform
    #[error("no cache directory available; set `parser.cache_dir` or `parser.jar`")]
    NoCacheDir,
    /// No Java runtime could be located
    #[error("java executable not found; install a JRE, set JAVA_HOME, or set `parser.java`")]
    JavaNotFound,
    /// Parser command failed to spawn
    #[error("failed to spawn {program}")]
    SpawnFailed {
        program: String,
        #[source]
        source: io::Error,
    },
    /// Parser exited with non-zero status; the message is its stderr, verbatim
    #[error("{stderr}")]
    ParserFailed { code: Option<i32>, stderr: String },
    /// Parser output is not a well-formed node tree
    #[error("malformed AST")]
    Malformed(#[from] serde_json::Error),
    /// A node span is inverted or escapes its parent
    #[error("invalid span for {kind}@{start}..{end}: {reason}")]
    InvalidSpan {
        kind: NodeType,
        start: usize,
        end: usize,
        reason: String,
    },
    /// I/O error on the input file or the capture files
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl AstError {
    /// Whether this error stems from the filesystem rather than from the parser.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
