//! Recursive manifest resolution.
//!
//! A manifest's `mf:include` list is resolved first, depth first and in
//! list order, then its own `mf:entries` are appended. Each manifest is
//! loaded with a blocking fetch; any failure aborts the whole resolution.

use tracing::{debug, trace};

use crate::error::SuiteError;
use crate::fetch::Fetcher;
use crate::graph::{display_term, iri, iri_of, RdfGraph, Term};
use crate::manifest::{Action, ActionBundle, Approval, ManifestEntry, TestType};
use crate::vocab::{
    Vocabulary, MF_ACTION, MF_ENTRIES, MF_INCLUDE, MF_NAME, MF_RESULT, RDFT_APPROVAL,
    RDFT_APPROVED, RDF_TYPE,
};

/// Walks a manifest and its includes, collecting entries in encounter order.
pub struct ManifestResolver<'a> {
    fetcher: &'a dyn Fetcher,
    vocab: &'a Vocabulary,
}

impl<'a> ManifestResolver<'a> {
    /// Creates a resolver reading documents through `fetcher` and
    /// recognizing test kinds in `vocab`.
    pub fn new(fetcher: &'a dyn Fetcher, vocab: &'a Vocabulary) -> Self {
        Self { fetcher, vocab }
    }

    /// Resolves the manifest at `manifest` and everything it includes.
    ///
    /// # Errors
    ///
    /// Returns a [`SuiteError`] if any manifest cannot be fetched or
    /// parsed, contains a malformed list, or includes itself.
    pub fn resolve(&self, manifest: &str) -> Result<Vec<ManifestEntry>, SuiteError> {
        let mut entries = Vec::new();
        let mut active = Vec::new();
        self.resolve_into(manifest, &mut active, &mut entries)?;
        debug!(manifest, entries = entries.len(), "manifest resolved");
        Ok(entries)
    }

    fn resolve_into(
        &self,
        manifest: &str,
        active: &mut Vec<String>,
        entries: &mut Vec<ManifestEntry>,
    ) -> Result<(), SuiteError> {
        if active.iter().any(|open| open == manifest) {
            let mut chain = active.clone();
            chain.push(manifest.to_string());
            return Err(SuiteError::InclusionCycle { chain });
        }
        active.push(manifest.to_string());

        let graph = RdfGraph::load(self.fetcher, manifest)?;
        let root = iri(manifest);

        for include in self.list_at(&graph, &root, MF_INCLUDE)? {
            let Some(sub) = iri_of(&include) else {
                return Err(SuiteError::Graph(format!(
                    "include {} in <{manifest}> is not an IRI",
                    display_term(&include)
                )));
            };
            debug!(manifest, include = %sub, "following include");
            self.resolve_into(&sub, active, entries)?;
        }

        for node in self.list_at(&graph, &root, MF_ENTRIES)? {
            let entry = self.read_entry(&graph, &node)?;
            trace!(manifest, name = %entry.name, id = %entry.id, "entry");
            entries.push(entry);
        }

        active.pop();
        Ok(())
    }

    /// Reads the list hanging off `(subject, predicate)`; absent means empty.
    fn list_at(&self, graph: &RdfGraph, subject: &Term, predicate: &str) -> Result<Vec<Term>, SuiteError> {
        match graph.value(subject, predicate)? {
            Some(head) => graph.list(&head),
            None => Ok(Vec::new()),
        }
    }

    fn read_entry(&self, graph: &RdfGraph, node: &Term) -> Result<ManifestEntry, SuiteError> {
        let id = display_term(node);

        let test_type = match graph.value(node, RDF_TYPE)?.as_ref().and_then(iri_of) {
            Some(type_iri) => match self.vocab.test_kind(&type_iri) {
                Some(kind) => TestType::Known(kind),
                None => TestType::Unknown(Some(type_iri)),
            },
            None => TestType::Unknown(None),
        };

        let approval = graph.value_or(node, RDFT_APPROVAL, iri(RDFT_APPROVED))?;
        let approval = match iri_of(&approval) {
            Some(status) if status == RDFT_APPROVED => Approval::Approved,
            Some(status) => Approval::Other(status),
            None => Approval::Other(display_term(&approval)),
        };

        let name = match graph.value(node, MF_NAME)? {
            Some(name) => text_of(&name),
            None => fallback_name(node),
        };

        let action = match graph.value(node, MF_ACTION)? {
            None => Action::Missing,
            Some(action) => self.read_action(graph, &action)?,
        };

        let result = graph.value(node, MF_RESULT)?.as_ref().and_then(iri_of);

        Ok(ManifestEntry {
            id,
            name,
            test_type,
            approval,
            action,
            result,
        })
    }

    /// An action is a bundle when it carries `data` or `patch`, otherwise a
    /// bare document reference.
    fn read_action(&self, graph: &RdfGraph, action: &Term) -> Result<Action, SuiteError> {
        let lookup = |predicate: String| -> Result<Option<String>, SuiteError> {
            Ok(graph.value(action, &predicate)?.as_ref().map(text_of))
        };
        let data = lookup(self.vocab.data())?;
        let patch = lookup(self.vocab.patch())?;
        let base = lookup(self.vocab.base())?;

        if data.is_some() || patch.is_some() {
            return Ok(Action::Bundle(ActionBundle { data, patch, base }));
        }
        Ok(match iri_of(action) {
            Some(document) => Action::Document(document),
            None => Action::Missing,
        })
    }
}

/// IRI or lexical form of a term.
fn text_of(term: &Term) -> String {
    use sophia_api::term::Term as _;

    iri_of(term)
        .or_else(|| term.lexical_form().map(|l| l.to_string()))
        .unwrap_or_else(|| display_term(term))
}

/// Name for an entry without `mf:name`: the IRI fragment or last segment.
fn fallback_name(node: &Term) -> String {
    match iri_of(node) {
        Some(id) => id
            .rsplit(['#', '/'])
            .find(|segment| !segment.is_empty())
            .unwrap_or("unnamed")
            .to_string(),
        None => "unnamed".to_string(),
    }
}
