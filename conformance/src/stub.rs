//! Stand-in engine for syntax-only tests.

use std::collections::HashMap;

use crate::engine::{PatchEngine, PathStep, Slice, WriteMode};
use crate::error::PatchError;
use crate::graph::{Term, Triple};

/// Tracks prefix declarations and ignores every graph operation.
///
/// One instance per parse: a prefix declared by one test must never be
/// visible to another.
#[derive(Debug, Default)]
pub struct StubEngine {
    prefixes: HashMap<String, String>,
}

impl StubEngine {
    /// Creates an engine with no declared prefixes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of declared prefixes.
    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }
}

impl PatchEngine for StubEngine {
    fn prefix(&mut self, prefix: &str, namespace: &str) {
        self.prefixes.insert(prefix.to_string(), namespace.to_string());
    }

    fn expand_pname(&self, prefix: &str, suffix: &str) -> Result<String, PatchError> {
        match self.prefixes.get(prefix) {
            Some(namespace) => Ok(format!("{namespace}{suffix}")),
            None => Err(PatchError::Syntax(format!("Undeclared prefix {prefix}:"))),
        }
    }

    fn bind(&mut self, _: &str, _: &Term, _: &[PathStep]) -> Result<(), PatchError> {
        Ok(())
    }

    fn add(&mut self, _: &[Triple], _: WriteMode) -> Result<(), PatchError> {
        Ok(())
    }

    fn delete(&mut self, _: &[Triple], _: WriteMode) -> Result<(), PatchError> {
        Ok(())
    }

    fn update_list(&mut self, _: &Term, _: &Term, _: Slice, _: &[Term]) -> Result<(), PatchError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::iri;

    #[test]
    fn expands_declared_prefixes() {
        let mut engine = StubEngine::new();
        engine.prefix("ex", "http://example.org/");
        assert_eq!(
            engine.expand_pname("ex", "thing").unwrap(),
            "http://example.org/thing"
        );
        assert_eq!(engine.expand_pname("ex", "").unwrap(), "http://example.org/");
    }

    #[test]
    fn redeclaring_a_prefix_replaces_it() {
        let mut engine = StubEngine::new();
        engine.prefix("ex", "http://a/");
        engine.prefix("ex", "http://b/");
        assert_eq!(engine.expand_pname("ex", "x").unwrap(), "http://b/x");
        assert_eq!(engine.prefix_count(), 1);
    }

    #[test]
    fn undeclared_prefix_is_a_syntax_error() {
        let engine = StubEngine::new();
        let err = engine.expand_pname("foaf", "name").unwrap_err();
        assert!(err.is_syntax());
    }

    #[test]
    fn fresh_engines_share_nothing() {
        let mut first = StubEngine::new();
        first.prefix("ex", "http://example.org/");
        let second = StubEngine::new();
        assert!(second.expand_pname("ex", "x").is_err());
    }

    #[test]
    fn graph_operations_are_accepted() {
        let mut engine = StubEngine::new();
        let triple = [iri("http://a"), iri("http://b"), iri("http://c")];
        assert!(engine.add(&[triple.clone()], WriteMode::Strict).is_ok());
        assert!(engine.delete(&[triple], WriteMode::Strict).is_ok());
        assert!(engine
            .bind("x", &iri("http://a"), &[PathStep::Unicity])
            .is_ok());
        assert!(engine
            .update_list(&iri("http://a"), &iri("http://b"), Slice::default(), &[])
            .is_ok());
    }
}
