//! Typed AsciiDoc syntax trees.
//!
//! Parsing is delegated to the `asciidoc-ast` jar, which is downloaded once into the
//! per-user cache directory and run on a JVM for every file. Its JSON output becomes a
//! [`Node`] tree whose types come from the closed [`NodeType`] enumeration.
//!
//! ```no_run
//! use asciidoc_ast::{AsciidocAst, AstConfig};
//!
//! let ast = AsciidocAst::new(AstConfig::default());
//! let tree = ast.parse("README.adoc".as_ref())?;
//! println!("{tree}");
//! # Ok::<(), asciidoc_ast::AstError>(())
//! ```

pub mod artifact;
pub mod error;
pub mod node;
pub mod node_type;
pub mod process;

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use artifact::{ASCIIDOC_AST_JAR_URL, Artifact, Fetch, HttpFetcher};
pub use error::AstError;
pub use node::Node;
pub use node_type::NodeType;
pub use process::ParserCommand;

/// How to obtain and run the parser.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AstConfig {
    /// Java executable (default: `$JAVA_HOME/bin/java`, then `java` on `PATH`)
    pub java: Option<PathBuf>,
    /// Flags passed to the JVM before `-jar`
    pub jvm_args: Vec<String>,
    /// Use this jar instead of the cached download
    pub jar: Option<PathBuf>,
    /// Where to download the jar from
    pub jar_url: String,
    /// Cache directory for the downloaded jar
    pub cache_dir: Option<PathBuf>,
    /// Directory for the parser's captured output
    pub temp_dir: Option<PathBuf>,
}

impl Default for AstConfig {
    fn default() -> Self {
        Self {
            java: None,
            jvm_args: process::DEFAULT_JVM_ARGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            jar: None,
            jar_url: ASCIIDOC_AST_JAR_URL.to_string(),
            cache_dir: None,
            temp_dir: None,
        }
    }
}

/// Entry point tying the provisioner and the parser process together.
pub struct AsciidocAst {
    config: AstConfig,
}

impl AsciidocAst {
    pub fn new(config: AstConfig) -> Self {
        Self { config }
    }

    /// The cached artifact described by the configuration.
    pub fn artifact(&self) -> Result<Artifact, AstError> {
        let cache_dir = match &self.config.cache_dir {
            Some(dir) => dir.clone(),
            None => artifact::default_cache_dir().ok_or(AstError::NoCacheDir)?,
        };
        Ok(Artifact::new(self.config.jar_url.clone(), &cache_dir))
    }

    /// Make sure the parser jar is available, downloading it over HTTP if needed.
    pub fn ensure_artifact(&self) -> Result<PathBuf, AstError> {
        if let Some(jar) = &self.config.jar {
            return Ok(jar.clone());
        }
        let artifact = self.artifact()?;
        if artifact.is_cached() {
            return Ok(artifact.path().to_path_buf());
        }
        let fetcher = HttpFetcher::new()?;
        Ok(artifact.ensure(&fetcher)?.to_path_buf())
    }

    /// Like [`AsciidocAst::ensure_artifact`], with a caller supplied fetcher.
    pub fn ensure_artifact_with(&self, fetcher: &dyn Fetch) -> Result<PathBuf, AstError> {
        if let Some(jar) = &self.config.jar {
            return Ok(jar.clone());
        }
        Ok(self.artifact()?.ensure(fetcher)?.to_path_buf())
    }

    /// Parse an AsciiDoc file into a node tree.
    ///
    /// A missing or unreadable `path` is reported as [`AstError::Io`] before the
    /// parser is provisioned or started.
    pub fn parse(&self, path: &Path) -> Result<Node, AstError> {
        process::check_input(path)?;
        let jar = self.ensure_artifact()?;
        let java = process::find_java(self.config.java.as_deref())?;
        ParserCommand::new(java, jar)
            .jvm_args(self.config.jvm_args.clone())
            .temp_dir(self.config.temp_dir.clone())
            .run(path)
    }
}
