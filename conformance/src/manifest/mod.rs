//! Manifest entries and their resolution from a manifest graph.

pub mod resolver;

use std::fmt;

use serde::Serialize;

pub use resolver::ManifestResolver;

/// The four kinds of test a manifest entry can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TestKind {
    /// The patch document must parse.
    PositiveSyntax,
    /// The patch document must be rejected by the parser.
    NegativeSyntax,
    /// Applying the patch to the data graph must yield the result graph.
    PositiveEvaluation,
    /// Applying the patch to the data graph must be rejected by the engine.
    NegativeEvaluation,
}

impl TestKind {
    /// Every kind, in declaration order.
    pub const ALL: [TestKind; 4] = [
        TestKind::PositiveSyntax,
        TestKind::NegativeSyntax,
        TestKind::PositiveEvaluation,
        TestKind::NegativeEvaluation,
    ];

    /// Local name of the kind's type IRI.
    pub fn local_name(self) -> &'static str {
        match self {
            TestKind::PositiveSyntax => "PositiveSyntaxTest",
            TestKind::NegativeSyntax => "NegativeSyntaxTest",
            TestKind::PositiveEvaluation => "PositiveEvaluationTest",
            TestKind::NegativeEvaluation => "NegativeEvaluationTest",
        }
    }

    /// Returns true for the two syntax-only kinds.
    pub fn is_syntax(self) -> bool {
        matches!(self, TestKind::PositiveSyntax | TestKind::NegativeSyntax)
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.local_name())
    }
}

/// The declared `rdf:type` of an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestType {
    /// One of the four known kinds.
    Known(TestKind),
    /// Anything else; holds the declared type, if there was one.
    Unknown(Option<String>),
}

/// The entry's `rdft:approval` status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Approval {
    /// `rdft:Approved`, also assumed when no approval is declared.
    Approved,
    /// Any other status, as declared.
    Other(String),
}

/// References to the documents a test acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A bare patch-document reference.
    Document(String),
    /// A structured bundle.
    Bundle(ActionBundle),
    /// The entry declares no usable action.
    Missing,
}

/// A structured action: data graph, patch document, optional base IRI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBundle {
    /// Source data graph.
    pub data: Option<String>,
    /// Patch document.
    pub patch: Option<String>,
    /// Base IRI override for parsing the patch.
    pub base: Option<String>,
}

impl ActionBundle {
    /// The base IRI to parse against: the declared base when non-empty,
    /// otherwise the data graph.
    pub fn effective_base(&self) -> Option<&str> {
        self.base
            .as_deref()
            .filter(|base| !base.is_empty())
            .or(self.data.as_deref())
    }
}

impl Action {
    /// The patch document of a syntax test and the base IRI to parse it
    /// against.
    ///
    /// A bare reference is its own base. A bundle contributes its `patch`
    /// and its explicit base, falling back to the patch reference.
    pub fn syntax_target(&self) -> Option<(&str, &str)> {
        match self {
            Action::Document(document) => Some((document, document)),
            Action::Bundle(bundle) => {
                let patch = bundle.patch.as_deref()?;
                let base = bundle
                    .base
                    .as_deref()
                    .filter(|base| !base.is_empty())
                    .unwrap_or(patch);
                Some((patch, base))
            }
            Action::Missing => None,
        }
    }

    /// The bundle of an evaluation test.
    pub fn bundle(&self) -> Option<&ActionBundle> {
        match self {
            Action::Bundle(bundle) => Some(bundle),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Document(document) => write!(f, "<{document}>"),
            Action::Bundle(bundle) => match &bundle.patch {
                Some(patch) => write!(f, "<{patch}>"),
                None => f.write_str("[action without patch]"),
            },
            Action::Missing => f.write_str("[no action]"),
        }
    }
}

/// One test described by a manifest.
///
/// Built once during resolution and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// The entry node, rendered (`<iri>` or `_:id`).
    pub id: String,
    /// Declared name; not necessarily unique.
    pub name: String,
    /// Declared test type.
    pub test_type: TestType,
    /// Approval status.
    pub approval: Approval,
    /// Documents acted on.
    pub action: Action,
    /// Expected result graph (evaluation tests).
    pub result: Option<String>,
}
