//! The contract between generated test cases and the implementation under
//! test.
//!
//! A [`PatchParser`] reads a patch document and drives a [`PatchEngine`]
//! with the operations it finds. Syntax tests bind the parser to a
//! [`StubEngine`](crate::stub::StubEngine); evaluation tests bind it to a
//! real engine obtained from an [`EngineFactory`] over a fresh working graph.

use crate::error::PatchError;
use crate::graph::{RdfGraph, Term, Triple};

/// How strictly an `Add` or `Delete` treats triples that already exist or
/// are missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// `Add` / `Delete`: existing or missing triples are ignored.
    Lenient,
    /// `AddNew` / `DeleteExisting`: they are an evaluation error.
    Strict,
}

/// One step of a path expression.
#[derive(Debug, Clone)]
pub enum PathStep {
    /// Follow a predicate forwards (`/p`).
    Forward(Term),
    /// Follow a predicate backwards (`^p`).
    Backward(Term),
    /// Select a list element by index (`[n]`).
    Index(i64),
    /// Require exactly one node (`!`).
    Unicity,
    /// Keep nodes for which the nested path reaches `value`, or reaches
    /// anything when `value` is `None`.
    Filter {
        /// The nested path.
        path: Vec<PathStep>,
        /// Required value at the end of the nested path.
        value: Option<Term>,
    },
}

/// A list slice (`start..end`), either bound open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slice {
    /// First index, inclusive; negative counts from the end.
    pub start: Option<i64>,
    /// Last index, exclusive; negative counts from the end.
    pub end: Option<i64>,
}

/// Operations a parser applies while reading a patch.
pub trait PatchEngine {
    /// Registers a namespace binding for the rest of the parse.
    fn prefix(&mut self, prefix: &str, namespace: &str);

    /// Expands `prefix:suffix` to an IRI.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if `prefix` was never declared.
    fn expand_pname(&self, prefix: &str, suffix: &str) -> Result<String, PatchError>;

    /// Binds `variable` to the nodes reached from `value` along `path`.
    ///
    /// # Errors
    ///
    /// Returns an evaluation error if the path does not yield exactly one
    /// node.
    fn bind(&mut self, variable: &str, value: &Term, path: &[PathStep]) -> Result<(), PatchError>;

    /// Adds triples to the working graph.
    ///
    /// # Errors
    ///
    /// Returns an evaluation error on unbound variables, or on existing
    /// triples in [`WriteMode::Strict`].
    fn add(&mut self, triples: &[Triple], mode: WriteMode) -> Result<(), PatchError>;

    /// Removes triples from the working graph.
    ///
    /// # Errors
    ///
    /// Returns an evaluation error on unbound variables, or on missing
    /// triples in [`WriteMode::Strict`].
    fn delete(&mut self, triples: &[Triple], mode: WriteMode) -> Result<(), PatchError>;

    /// Replaces `slice` of the list at `(subject, predicate)` with `list`.
    ///
    /// # Errors
    ///
    /// Returns an evaluation error if no well-formed list is found or the
    /// slice is out of range.
    fn update_list(
        &mut self,
        subject: &Term,
        predicate: &Term,
        slice: Slice,
        list: &[Term],
    ) -> Result<(), PatchError>;
}

/// The parser entry point.
pub trait PatchParser: Send + Sync {
    /// Parses `document` against `base`, applying every operation to
    /// `engine` as it is read.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::Syntax`] on malformed input and
    /// [`PatchError::Evaluation`] when `engine` rejects an operation.
    fn parse(
        &self,
        document: &str,
        base: &str,
        strict: bool,
        engine: &mut dyn PatchEngine,
    ) -> Result<(), PatchError>;
}

/// Produces real engines bound to a working graph.
pub trait EngineFactory: Send + Sync {
    /// Returns an engine that applies patches to `graph`.
    fn bind<'g>(&self, graph: &'g mut RdfGraph) -> Box<dyn PatchEngine + 'g>;
}
