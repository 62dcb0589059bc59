//! Suite configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::classify::Blacklist;
use crate::error::SuiteError;
use crate::fetch::file_uri;
use crate::vocab::Vocabulary;

/// Environment variable naming the local test-suite checkout.
pub const TESTSUITE_ENV: &str = "LDPATCH_TESTSUITE";

/// Checkout directory used when [`TESTSUITE_ENV`] is unset.
pub const DEFAULT_TESTSUITE_DIR: &str = "ld-patch-testsuite";

/// File name of the root manifest inside a checkout.
pub const MANIFEST_FILE: &str = "manifest.ttl";

fn default_strict() -> bool {
    true
}

/// Everything needed to build a suite, apart from the collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// URI of the root manifest.
    pub manifest: String,
    /// Entry names to skip.
    #[serde(default)]
    pub blacklist: Blacklist,
    /// Parse patches in strict mode.
    #[serde(default = "default_strict")]
    pub strict: bool,
    /// Namespace of the test kinds and action predicates; defaults to the
    /// root manifest IRI followed by `#`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<String>,
}

impl SuiteConfig {
    /// Configuration for the manifest at `manifest`, with defaults
    /// everywhere else.
    pub fn new(manifest: impl Into<String>) -> Self {
        Self {
            manifest: manifest.into(),
            blacklist: Blacklist::default(),
            strict: default_strict(),
            vocabulary: None,
        }
    }

    /// Replaces the blacklist.
    pub fn with_blacklist(mut self, blacklist: Blacklist) -> Self {
        self.blacklist = blacklist;
        self
    }

    /// Overrides the test-kind namespace.
    pub fn with_vocabulary(mut self, namespace: impl Into<String>) -> Self {
        self.vocabulary = Some(namespace.into());
        self
    }

    /// Configuration for a local checkout containing `manifest.ttl`.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::Config`] if the directory or its manifest is
    /// missing.
    pub fn from_testsuite_dir(dir: &Path) -> Result<Self, SuiteError> {
        let manifest = dir.join(MANIFEST_FILE);
        if !manifest.is_file() {
            return Err(SuiteError::Config(format!(
                "test suite could not be found at {}",
                dir.display()
            )));
        }
        let uri = file_uri(&manifest).map_err(|e| SuiteError::Config(e.to_string()))?;
        Ok(Self::new(uri))
    }

    /// Configuration for the checkout named by `LDPATCH_TESTSUITE`, or
    /// `ld-patch-testsuite` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::Config`] if the checkout is missing.
    pub fn from_env() -> Result<Self, SuiteError> {
        let dir = std::env::var_os(TESTSUITE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TESTSUITE_DIR));
        Self::from_testsuite_dir(&dir)
    }

    /// Parses a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse suite configuration")
    }

    /// Reads a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// configuration.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json_str(&content).with_context(|| format!("in {}", path.display()))
    }

    /// The vocabulary test kinds are recognized in.
    pub fn vocabulary(&self) -> Vocabulary {
        match &self.vocabulary {
            Some(namespace) => Vocabulary::new(namespace.clone()),
            None => Vocabulary::for_manifest(&self.manifest),
        }
    }
}
