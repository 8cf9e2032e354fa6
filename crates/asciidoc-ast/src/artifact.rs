//! Provisioning of the parser jar in the per-user cache directory.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::AstError;

/// Versioned release of the `asciidoc-ast` parser this crate understands.
pub const ASCIIDOC_AST_JAR_URL: &str = "https://github.com/alexpdp7/asciidoc-ast/releases/download/v20211106.1/asciidoc-ast-20211106.1.jar";

const QUALIFIER: &str = "net.pdp7";
const ORGANIZATION: &str = "pdp7.net";
const APPLICATION: &str = "languagetool-asciidoc";

/// Source of artifact bytes.
pub trait Fetch {
    /// Stream the resource at `url` into `sink`, returning the number of bytes written.
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> io::Result<u64>;
}

/// Fetches over HTTP(S) with a blocking client. Transfers are not time limited.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, AstError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("asciidoc-ast-rs/", env!("CARGO_PKG_VERSION")))
            .timeout(None)
            .build()
            .map_err(io::Error::other)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> io::Result<u64> {
        let mut response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(io::Error::other)?;
        response.copy_to(sink).map_err(io::Error::other)
    }
}

/// Per-user cache directory for this application, namespaced the way each
/// platform expects (`~/.cache/languagetool-asciidoc` on Linux).
pub fn default_cache_dir() -> Option<PathBuf> {
    let base = dirs::cache_dir()?;
    let dir = if cfg!(target_os = "macos") {
        base.join(format!("{QUALIFIER}.{APPLICATION}"))
    } else if cfg!(windows) {
        base.join(ORGANIZATION).join(APPLICATION).join("cache")
    } else {
        base.join(APPLICATION)
    };
    Some(dir)
}

/// A downloadable artifact and where it lives once cached.
#[derive(Debug, Clone)]
pub struct Artifact {
    url: String,
    path: PathBuf,
}

impl Artifact {
    /// An artifact cached under `cache_dir`, named after the last segment of `url`.
    pub fn new(url: impl Into<String>, cache_dir: &Path) -> Self {
        let url = url.into();
        let file_name = url.rsplit('/').next().unwrap_or(&url).to_string();
        let path = cache_dir.join(file_name);
        Self { url, path }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_cached(&self) -> bool {
        self.path.is_file()
    }

    /// Make sure the artifact is on disk, downloading it with `fetcher` if it is not.
    ///
    /// The download lands in a temporary file next to the destination and is renamed
    /// into place once complete, so a failed download leaves nothing behind.
    pub fn ensure(&self, fetcher: &dyn Fetch) -> Result<&Path, AstError> {
        if self.is_cached() {
            log::debug!("Using cached {}", self.path.display());
            return Ok(self.path.as_path());
        }

        log::info!("downloading {} to {}", self.url, self.path.display());
        self.download(fetcher).map_err(|source| AstError::Download {
            url: self.url.clone(),
            path: self.path.clone(),
            source,
        })?;
        log::info!("downloaded {} to {}", self.url, self.path.display());

        Ok(self.path.as_path())
    }

    fn download(&self, fetcher: &dyn Fetch) -> io::Result<()> {
        let parent = self.path.parent().unwrap_or(Path::new("."));
        fs::create_dir_all(parent)?;

        let mut partial = tempfile::NamedTempFile::new_in(parent)?;
        let bytes = fetcher.fetch(&self.url, partial.as_file_mut())?;
        partial.as_file_mut().flush()?;
        log::debug!("Fetched {} bytes from {}", bytes, self.url);

        partial.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}
