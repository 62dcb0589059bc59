//! Graph access over an in-memory RDF store.
//!
//! Covers the four operations the suite needs from a graph store: load a
//! Turtle graph from a URI, look up a value by subject and predicate, walk
//! an RDF collection, and compare two graphs up to blank-node renaming.
//! Working graphs are also mutated through here by engines under test.

use sophia_api::graph::{Graph, MutableGraph};
use sophia_api::parser::TripleParser;
use sophia_api::serializer::{Stringifier, TripleSerializer};
use sophia_api::source::TripleSource;
use sophia_api::term::matcher::Any;
use sophia_api::term::{IriRef, SimpleTerm, Term as _, TermKind};
use sophia_api::triple::Triple as _;
use sophia_inmem::graph::FastGraph;
use sophia_iri::Iri;
use sophia_turtle::parser::turtle::TurtleParser;
use sophia_turtle::serializer::turtle::TurtleSerializer;
use tracing::debug;

use crate::error::SuiteError;
use crate::fetch::Fetcher;
use crate::vocab::{RDF_FIRST, RDF_NIL, RDF_REST};

/// An owned RDF term.
pub type Term = SimpleTerm<'static>;

/// An owned RDF triple, in subject / predicate / object order.
pub type Triple = [Term; 3];

/// Upper bound on collection length, so a looping `rdf:rest` chain fails
/// instead of hanging.
const MAX_LIST_LEN: usize = 1 << 16;

/// Builds an IRI term.
pub fn iri(value: &str) -> Term {
    IriRef::new_unchecked(value.to_owned()).into_term()
}

/// Returns the IRI of `term`, if it is one.
pub fn iri_of(term: &Term) -> Option<String> {
    term.iri().map(|i| i.as_str().to_owned())
}

/// Renders a term for messages: `<iri>`, `_:id`, `"lexical"`, or `?var`.
pub fn display_term(term: &Term) -> String {
    match term.kind() {
        TermKind::Iri => format!("<{}>", iri_of(term).unwrap_or_default()),
        TermKind::BlankNode => format!(
            "_:{}",
            term.bnode_id().map(|b| b.as_str().to_owned()).unwrap_or_default()
        ),
        TermKind::Literal => format!(
            "\"{}\"",
            term.lexical_form().map(|l| l.to_string()).unwrap_or_default()
        ),
        TermKind::Variable => format!(
            "?{}",
            term.variable().map(|v| v.as_str().to_owned()).unwrap_or_default()
        ),
        TermKind::Triple => "<<triple>>".to_string(),
    }
}

/// A mutable in-memory RDF graph, remembering the URI it was loaded from.
#[derive(Debug)]
pub struct RdfGraph {
    source: String,
    inner: FastGraph,
}

impl RdfGraph {
    /// Creates an empty graph attributed to `source`.
    pub fn empty(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            inner: FastGraph::default(),
        }
    }

    /// Fetches `uri` and parses it as Turtle, using `uri` as the base IRI.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::Fetch`] if the document cannot be retrieved
    /// and [`SuiteError::Parse`] if it is not valid UTF-8 Turtle.
    pub fn load(fetcher: &dyn Fetcher, uri: &str) -> Result<Self, SuiteError> {
        debug!(uri, "loading graph");
        let bytes = fetcher.fetch(uri).map_err(|source| SuiteError::Fetch {
            uri: uri.to_string(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|e| SuiteError::Parse {
            uri: uri.to_string(),
            reason: e.to_string(),
        })?;
        Self::parse_turtle(&text, uri)
    }

    /// Parses Turtle text against `base`.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::Parse`] if `base` is not an absolute IRI or
    /// the text is not valid Turtle.
    pub fn parse_turtle(text: &str, base: &str) -> Result<Self, SuiteError> {
        let parse_error = |reason: String| SuiteError::Parse {
            uri: base.to_string(),
            reason,
        };
        let base_iri = Iri::new(base.to_string()).map_err(|e| parse_error(e.to_string()))?;
        let parser = TurtleParser {
            base: Some(base_iri),
        };
        let inner: FastGraph = parser
            .parse_str(text)
            .collect_triples()
            .map_err(|e| parse_error(e.to_string()))?;
        Ok(Self {
            source: base.to_string(),
            inner,
        })
    }

    /// The URI this graph was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of triples.
    pub fn len(&self) -> usize {
        self.inner.triples().count()
    }

    /// Returns true if the graph holds no triples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the first object of `(subject, predicate, ?)`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::Graph`] if the store fails while matching.
    pub fn value(&self, subject: &Term, predicate: &str) -> Result<Option<Term>, SuiteError> {
        let predicate = IriRef::new_unchecked(predicate);
        let found = self
            .inner
            .triples_matching([subject], [predicate], Any)
            .next();
        match found {
            None => Ok(None),
            Some(triple) => {
                let triple = triple.map_err(|e| SuiteError::Graph(e.to_string()))?;
                Ok(Some(triple.to_o().into_term()))
            }
        }
    }

    /// Like [`RdfGraph::value`], falling back to `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::Graph`] if the store fails while matching.
    pub fn value_or(&self, subject: &Term, predicate: &str, default: Term) -> Result<Term, SuiteError> {
        Ok(self.value(subject, predicate)?.unwrap_or(default))
    }

    /// Materializes the RDF collection starting at `head`, in order.
    ///
    /// `rdf:nil` yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::MalformedList`] if a cell lacks `rdf:first` or
    /// `rdf:rest`, or the chain does not terminate.
    pub fn list(&self, head: &Term) -> Result<Vec<Term>, SuiteError> {
        let malformed = |node: &Term| SuiteError::MalformedList {
            manifest: self.source.clone(),
            node: display_term(node),
        };
        let mut items = Vec::new();
        let mut cell = head.clone();
        while iri_of(&cell).as_deref() != Some(RDF_NIL) {
            if items.len() >= MAX_LIST_LEN {
                return Err(malformed(head));
            }
            let first = self.value(&cell, RDF_FIRST)?.ok_or_else(|| malformed(&cell))?;
            let rest = self.value(&cell, RDF_REST)?.ok_or_else(|| malformed(&cell))?;
            items.push(first);
            cell = rest;
        }
        Ok(items)
    }

    /// Returns true if both graphs are equal up to blank-node renaming.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::Graph`] if either store fails during the
    /// comparison.
    pub fn isomorphic(&self, other: &Self) -> Result<bool, SuiteError> {
        sophia_isomorphism::isomorphic_graphs(&self.inner, &other.inner)
            .map_err(|e| SuiteError::Graph(e.to_string()))
    }

    /// Returns true if the graph contains `triple`.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::Graph`] if the store fails.
    pub fn contains(&self, triple: &Triple) -> Result<bool, SuiteError> {
        let [s, p, o] = triple;
        self.inner
            .contains(s, p, o)
            .map_err(|e| SuiteError::Graph(e.to_string()))
    }

    /// Inserts `triple`; returns true if it was not already present.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::Graph`] if the store rejects the triple.
    pub fn insert(&mut self, triple: &Triple) -> Result<bool, SuiteError> {
        let [s, p, o] = triple;
        self.inner
            .insert(s, p, o)
            .map_err(|e| SuiteError::Graph(e.to_string()))
    }

    /// Removes `triple`; returns true if it was present.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::Graph`] if the store fails.
    pub fn remove(&mut self, triple: &Triple) -> Result<bool, SuiteError> {
        let [s, p, o] = triple;
        self.inner
            .remove(s, p, o)
            .map_err(|e| SuiteError::Graph(e.to_string()))
    }

    /// Serializes the graph as Turtle.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::Graph`] if serialization fails.
    pub fn to_turtle(&self) -> Result<String, SuiteError> {
        let mut stringifier = TurtleSerializer::new_stringifier();
        stringifier
            .serialize_graph(&self.inner)
            .map_err(|e| SuiteError::Graph(e.to_string()))?;
        Ok(stringifier.as_str().to_string())
    }
}
