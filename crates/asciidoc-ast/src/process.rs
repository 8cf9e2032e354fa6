//! Running the parser jar as a subprocess.
//!
//! The parser writes one JSON object to stdout on success, or a human readable
//! error to stderr and exits non-zero. Both streams are captured in temporary
//! files that are removed when the capture goes out of scope, whatever the outcome.

use std::env;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

use crate::error::AstError;
use crate::node::Node;

/// JVM flags the parser needs to reflect into `java.io` and `java.lang` internals.
pub const DEFAULT_JVM_ARGS: &[&str] = &[
    "--add-opens=java.base/java.io=ALL-UNNAMED",
    "--add-opens=java.base/java.lang=ALL-UNNAMED",
];

/// A fully resolved parser invocation: `<program> <jvm args...> -jar <jar> <input>`.
#[derive(Debug, Clone)]
pub struct ParserCommand {
    program: PathBuf,
    jvm_args: Vec<String>,
    jar: PathBuf,
    temp_dir: Option<PathBuf>,
}

impl ParserCommand {
    pub fn new(program: impl Into<PathBuf>, jar: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            jvm_args: DEFAULT_JVM_ARGS.iter().map(|s| s.to_string()).collect(),
            jar: jar.into(),
            temp_dir: None,
        }
    }

    pub fn jvm_args(mut self, args: Vec<String>) -> Self {
        self.jvm_args = args;
        self
    }

    /// Directory for the stdout/stderr capture files (system temp dir by default).
    pub fn temp_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.temp_dir = dir;
        self
    }

    /// Arguments passed to the program for `input`.
    pub fn args(&self, input: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.jvm_args.iter().map(OsString::from).collect();
        args.push("-jar".into());
        args.push(self.jar.clone().into_os_string());
        args.push(input.as_os_str().to_owned());
        args
    }

    /// Run the parser on `input` and build the node tree from its output.
    pub fn run(&self, input: &Path) -> Result<Node, AstError> {
        let stdout = self.capture_file()?;
        let stderr = self.capture_file()?;

        let args = self.args(input);
        log::debug!(
            "Invoking parser: {} {}",
            self.program.display(),
            args.iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let status = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(stdout.reopen()?)
            .stderr(stderr.reopen()?)
            .status()
            .map_err(|source| AstError::SpawnFailed {
                program: self.program.display().to_string(),
                source,
            })?;

        if !status.success() {
            let captured = fs::read(stderr.path())?;
            let stderr = String::from_utf8_lossy(&captured).into_owned();
            log::debug!("Parser exited with {:?}", status.code());
            return Err(AstError::ParserFailed {
                code: status.code(),
                stderr,
            });
        }

        let output = stdout.reopen()?;
        log::debug!("Parser produced {} bytes", output.metadata()?.len());
        Node::from_json_reader(BufReader::new(output))
    }

    fn capture_file(&self) -> io::Result<NamedTempFile> {
        match &self.temp_dir {
            Some(dir) => NamedTempFile::new_in(dir),
            None => NamedTempFile::new(),
        }
    }
}

/// Locate a Java runtime: the configured path, then `$JAVA_HOME/bin/java`, then `PATH`.
pub fn find_java(configured: Option<&Path>) -> Result<PathBuf, AstError> {
    if let Some(path) = configured {
        return Ok(path.to_path_buf());
    }

    if let Some(home) = env::var_os("JAVA_HOME") {
        let bin = Path::new(&home).join("bin");
        if let Ok(java) = which::which_in("java", Some(&bin), &bin) {
            log::debug!("Using java from JAVA_HOME: {}", java.display());
            return Ok(java);
        }
    }

    which::which("java").map_err(|_| AstError::JavaNotFound)
}

/// Fail early with an I/O error if `input` cannot be opened.
pub(crate) fn check_input(input: &Path) -> Result<(), AstError> {
    File::open(input)?;
    Ok(())
}
