//! Manifest vocabulary.
//!
//! The structural terms (`mf:include`, `mf:entries`, `mf:name`, ...) come
//! from the W3C test-manifest vocabulary. The test kinds and the action
//! bundle predicates live in a suite-specific namespace, by default the
//! root manifest IRI followed by `#`.

use crate::manifest::TestKind;

/// W3C test-manifest namespace.
pub const MF: &str = "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#";

/// RDF test vocabulary namespace (approval status).
pub const RDFT: &str = "http://www.w3.org/ns/rdftest#";

/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// `mf:include`
pub const MF_INCLUDE: &str = "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#include";
/// `mf:entries`
pub const MF_ENTRIES: &str = "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#entries";
/// `mf:name`
pub const MF_NAME: &str = "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#name";
/// `mf:action`
pub const MF_ACTION: &str = "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#action";
/// `mf:result`
pub const MF_RESULT: &str = "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#result";

/// `rdft:approval`
pub const RDFT_APPROVAL: &str = "http://www.w3.org/ns/rdftest#approval";
/// `rdft:Approved`
pub const RDFT_APPROVED: &str = "http://www.w3.org/ns/rdftest#Approved";

/// `rdf:type`
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdf:first`
pub const RDF_FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
/// `rdf:rest`
pub const RDF_REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
/// `rdf:nil`
pub const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";

/// The suite-specific namespace holding test kinds and action predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    namespace: String,
}

impl Vocabulary {
    /// Uses `namespace` verbatim as the prefix for every suite term.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Derives the namespace from the root manifest IRI (`<manifest>#`).
    pub fn for_manifest(manifest: &str) -> Self {
        let base = manifest.split('#').next().unwrap_or(manifest);
        Self::new(format!("{base}#"))
    }

    /// The namespace prefix.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Expands a local name in this namespace.
    pub fn term(&self, local: &str) -> String {
        format!("{}{}", self.namespace, local)
    }

    /// The action's data-graph predicate.
    pub fn data(&self) -> String {
        self.term("data")
    }

    /// The action's patch-document predicate.
    pub fn patch(&self) -> String {
        self.term("patch")
    }

    /// The action's base-IRI override predicate.
    pub fn base(&self) -> String {
        self.term("base")
    }

    /// Maps a type IRI to a known test kind.
    pub fn test_kind(&self, type_iri: &str) -> Option<TestKind> {
        let local = type_iri.strip_prefix(self.namespace.as_str())?;
        TestKind::ALL
            .into_iter()
            .find(|kind| kind.local_name() == local)
    }
}
