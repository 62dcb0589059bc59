//! Error types: suite construction failures, retrieval failures, engine
//! signals, and assertion failures reported by generated test cases.

use thiserror::Error;

/// A failure while building the suite. Any of these aborts the build; no
/// partial suite is produced.
#[derive(Debug, Error)]
pub enum SuiteError {
    /// A manifest or artifact could not be retrieved.
    #[error("cannot fetch <{uri}>")]
    Fetch {
        /// The URI that was requested.
        uri: String,
        /// Underlying retrieval failure.
        #[source]
        source: FetchError,
    },

    /// A retrieved document is not valid Turtle.
    #[error("cannot parse <{uri}> as Turtle: {reason}")]
    Parse {
        /// The URI of the document.
        uri: String,
        /// Parser message.
        reason: String,
    },

    /// The in-memory graph rejected an operation.
    #[error("graph error: {0}")]
    Graph(String),

    /// An RDF collection in a manifest is not a well-formed list.
    #[error("malformed RDF list at {node} in <{manifest}>")]
    MalformedList {
        /// The manifest containing the list.
        manifest: String,
        /// The list node where the walk failed.
        node: String,
    },

    /// A manifest includes itself, directly or through other manifests.
    #[error("manifest inclusion cycle: {}", chain.join(" -> "))]
    InclusionCycle {
        /// The include path, ending with the repeated manifest.
        chain: Vec<String>,
    },

    /// The suite configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// A failure of the blocking fetch primitive.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The reference is not a valid absolute URI.
    #[error("invalid URI: {0}")]
    InvalidUri(#[from] url::ParseError),

    /// No fetcher handles this URI scheme.
    #[error("unsupported URI scheme `{0}`")]
    UnsupportedScheme(String),

    /// A `file:` URI does not map to a local path.
    #[error("not a local file path")]
    NotAPath,

    /// No document is registered under this URI.
    #[error("no such document")]
    NotFound,

    /// Reading a local file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// An HTTP request failed.
    #[error("http: {0}")]
    Http(String),
}

/// A signal raised by the patch parser or by the engine bound to it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    /// The document violates the grammar.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// The document is well formed but the engine rejected an operation.
    #[error("evaluation error: {0}")]
    Evaluation(String),
}

impl PatchError {
    /// Returns true for the syntax-error signal.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }

    /// Returns true for the evaluation-error signal.
    pub fn is_evaluation(&self) -> bool {
        matches!(self, Self::Evaluation(_))
    }
}

/// The expected outcome of a generated test case did not occur.
///
/// The message always names the document URI the case acted on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TestFailure {
    /// Human-readable failure message.
    pub message: String,
}

impl TestFailure {
    /// Creates a failure with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
