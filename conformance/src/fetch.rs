//! Blocking document retrieval.
//!
//! Manifests, patch documents and graphs are all addressed by URI. A
//! [`Fetcher`] turns a URI into bytes; nothing here caches or retries.

use std::collections::HashMap;
use std::path::Path;

use tracing::trace;
use url::Url;

use crate::error::FetchError;

/// Retrieves the bytes behind a URI.
pub trait Fetcher: Send + Sync {
    /// Fetches the document at `uri`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the URI is unsupported or the document
    /// cannot be read.
    fn fetch(&self, uri: &str) -> Result<Vec<u8>, FetchError>;
}

/// Reads `file:` URIs from the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileFetcher;

impl Fetcher for FileFetcher {
    fn fetch(&self, uri: &str) -> Result<Vec<u8>, FetchError> {
        let url = Url::parse(uri)?;
        if url.scheme() != "file" {
            return Err(FetchError::UnsupportedScheme(url.scheme().to_string()));
        }
        let path = url.to_file_path().map_err(|()| FetchError::NotAPath)?;
        trace!(path = %path.display(), "reading file");
        Ok(std::fs::read(path)?)
    }
}

/// Fetches `http:` and `https:` URIs with a blocking client.
#[cfg(feature = "http")]
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFetcher;

#[cfg(feature = "http")]
impl Fetcher for HttpFetcher {
    fn fetch(&self, uri: &str) -> Result<Vec<u8>, FetchError> {
        use std::io::Read;

        trace!(uri, "http get");
        let response = ureq::get(uri)
            .call()
            .map_err(|e| FetchError::Http(e.to_string()))?;
        let mut body = Vec::new();
        response.into_reader().read_to_end(&mut body)?;
        Ok(body)
    }
}

/// Dispatches on the URI scheme: `file:` always, `http(s):` with the
/// `http` feature.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFetcher;

impl Fetcher for DefaultFetcher {
    fn fetch(&self, uri: &str) -> Result<Vec<u8>, FetchError> {
        let url = Url::parse(uri)?;
        match url.scheme() {
            "file" => FileFetcher.fetch(uri),
            #[cfg(feature = "http")]
            "http" | "https" => HttpFetcher.fetch(uri),
            other => Err(FetchError::UnsupportedScheme(other.to_string())),
        }
    }
}

/// Serves documents registered in memory, keyed by their exact URI.
#[derive(Debug, Default, Clone)]
pub struct MemoryFetcher {
    documents: HashMap<String, Vec<u8>>,
}

impl MemoryFetcher {
    /// Creates an empty fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `body` under `uri`, replacing any previous document.
    pub fn insert(&mut self, uri: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.documents.insert(uri.into(), body.into());
    }

    /// Builder form of [`MemoryFetcher::insert`].
    pub fn with(mut self, uri: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.insert(uri, body);
        self
    }
}

impl Fetcher for MemoryFetcher {
    fn fetch(&self, uri: &str) -> Result<Vec<u8>, FetchError> {
        self.documents.get(uri).cloned().ok_or(FetchError::NotFound)
    }
}

/// Converts a local path to a `file:` URI.
///
/// # Errors
///
/// Returns [`FetchError::Io`] if the path cannot be made absolute, or
/// [`FetchError::NotAPath`] if it has no URI form.
pub fn file_uri(path: &Path) -> Result<String, FetchError> {
    let absolute = std::fs::canonicalize(path)?;
    Url::from_file_path(&absolute)
        .map(String::from)
        .map_err(|()| FetchError::NotAPath)
}
