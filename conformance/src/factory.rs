//! Test-case generation.
//!
//! Every classified entry becomes a named, zero-argument procedure. The
//! procedure owns a copy of its entry and a handle on the shared
//! [`Harness`]; it fetches its documents only when run.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::classify::{SkipReason, Strategy};
use crate::engine::{EngineFactory, PatchParser};
use crate::error::{PatchError, TestFailure};
use crate::fetch::Fetcher;
use crate::graph::RdfGraph;
use crate::manifest::{ManifestEntry, TestKind};
use crate::report::Outcome;
use crate::stub::StubEngine;

/// The collaborators generated test cases run against.
pub struct Harness {
    /// Retrieves patch documents and graphs.
    pub fetcher: Box<dyn Fetcher>,
    /// The parser under test.
    pub parser: Box<dyn PatchParser>,
    /// Real engines for evaluation tests.
    pub engines: Box<dyn EngineFactory>,
}

impl Harness {
    /// Bundles the three collaborators.
    pub fn new(
        fetcher: impl Fetcher + 'static,
        parser: impl PatchParser + 'static,
        engines: impl EngineFactory + 'static,
    ) -> Self {
        Self {
            fetcher: Box::new(fetcher),
            parser: Box::new(parser),
            engines: Box::new(engines),
        }
    }

    fn fetch_text(&self, uri: &str) -> Result<Result<String, PatchError>, TestFailure> {
        let bytes = self
            .fetcher
            .fetch(uri)
            .map_err(|e| TestFailure::new(format!("cannot fetch <{uri}>: {e}")))?;
        Ok(String::from_utf8(bytes)
            .map_err(|_| PatchError::Syntax(format!("<{uri}> is not valid UTF-8"))))
    }

    fn load_graph(&self, uri: &str) -> Result<RdfGraph, TestFailure> {
        RdfGraph::load(self.fetcher.as_ref(), uri).map_err(|e| TestFailure::new(e.to_string()))
    }
}

/// Whether a generated case runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Run the procedure.
    Run,
    /// Do not run it; the reason is reported instead.
    Skip(String),
}

type Procedure = Box<dyn Fn() -> Result<(), TestFailure> + Send + Sync>;

/// A named, runnable test case generated from one manifest entry.
pub struct GeneratedTestCase {
    entry: ManifestEntry,
    disposition: Disposition,
    procedure: Procedure,
}

impl GeneratedTestCase {
    /// The entry this case was generated from.
    pub fn entry(&self) -> &ManifestEntry {
        &self.entry
    }

    /// Whether the case runs or skips.
    pub fn disposition(&self) -> &Disposition {
        &self.disposition
    }

    /// Returns true if the case is skipped.
    pub fn is_skipped(&self) -> bool {
        matches!(self.disposition, Disposition::Skip(_))
    }

    /// Runs the case. A skipped case reports its reason without running
    /// anything.
    pub fn run(&self) -> Outcome {
        match &self.disposition {
            Disposition::Skip(reason) => Outcome::Skipped {
                reason: reason.clone(),
            },
            Disposition::Run => match (self.procedure)() {
                Ok(()) => Outcome::Passed,
                Err(failure) => Outcome::Failed {
                    message: failure.message,
                },
            },
        }
    }
}

impl fmt::Debug for GeneratedTestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedTestCase")
            .field("entry", &self.entry)
            .field("disposition", &self.disposition)
            .finish_non_exhaustive()
    }
}

/// Builds test cases for classified entries.
#[derive(Clone)]
pub struct TestCaseFactory {
    harness: Arc<Harness>,
    strict: bool,
}

impl TestCaseFactory {
    /// Creates a factory whose cases run against `harness`, parsing in
    /// strict mode when `strict` is set.
    pub fn new(harness: Arc<Harness>, strict: bool) -> Self {
        Self { harness, strict }
    }

    /// Generates the case for `entry` according to `strategy`.
    pub fn build(&self, entry: ManifestEntry, strategy: Strategy) -> GeneratedTestCase {
        let kind = match strategy {
            Strategy::Skip(reason) => {
                let reason = skip_message(&entry, &reason);
                debug!(name = %entry.name, %reason, "skipping entry");
                return GeneratedTestCase {
                    entry,
                    disposition: Disposition::Skip(reason),
                    procedure: Box::new(|| Ok::<(), TestFailure>(())),
                };
            }
            Strategy::Run(kind) => kind,
        };

        let harness = Arc::clone(&self.harness);
        let strict = self.strict;
        let owned = entry.clone();
        let procedure: Procedure = match kind {
            TestKind::PositiveSyntax => {
                Box::new(move || positive_syntax(&harness, &owned, strict))
            }
            TestKind::NegativeSyntax => {
                Box::new(move || negative_syntax(&harness, &owned, strict))
            }
            TestKind::PositiveEvaluation => {
                Box::new(move || positive_evaluation(&harness, &owned, strict))
            }
            TestKind::NegativeEvaluation => {
                Box::new(move || negative_evaluation(&harness, &owned, strict))
            }
        };

        GeneratedTestCase {
            entry,
            disposition: Disposition::Run,
            procedure,
        }
    }
}

fn skip_message(entry: &ManifestEntry, reason: &SkipReason) -> String {
    match reason {
        SkipReason::Blacklisted => format!("Blacklisted entry {}", entry.id),
        SkipReason::Unapproved => format!("Unapproved entry {}", entry.id),
        SkipReason::UnknownType(Some(declared)) => format!("Unknown test type <{declared}>"),
        SkipReason::UnknownType(None) => "Unknown test type (none)".to_string(),
    }
}

/// Parses the entry's document with a fresh stub engine.
fn parse_syntax_target(
    harness: &Harness,
    entry: &ManifestEntry,
    strict: bool,
) -> Result<(String, Result<(), PatchError>), TestFailure> {
    let (document, base) = entry.action.syntax_target().ok_or_else(|| {
        TestFailure::new(format!(
            "entry {} has no patch document ({})",
            entry.id, entry.action
        ))
    })?;
    let outcome = harness.fetch_text(document)?.and_then(|text| {
        let mut engine = StubEngine::new();
        harness.parser.parse(&text, base, strict, &mut engine)
    });
    Ok((document.to_string(), outcome))
}

fn positive_syntax(harness: &Harness, entry: &ManifestEntry, strict: bool) -> Result<(), TestFailure> {
    match parse_syntax_target(harness, entry, strict)? {
        (_, Ok(())) => Ok(()),
        (document, Err(e)) => Err(TestFailure::new(format!("{e} in <{document}>"))),
    }
}

fn negative_syntax(harness: &Harness, entry: &ManifestEntry, strict: bool) -> Result<(), TestFailure> {
    match parse_syntax_target(harness, entry, strict)? {
        (_, Err(PatchError::Syntax(_))) => Ok(()),
        (document, Ok(())) => Err(TestFailure::new(format!(
            "expected syntax error in <{document}>"
        ))),
        (document, Err(e)) => Err(TestFailure::new(format!(
            "expected syntax error, got {e} in <{document}>"
        ))),
    }
}

/// The data graph, patch and base IRI of an evaluation test.
fn evaluation_target(entry: &ManifestEntry) -> Result<(&str, &str, &str), TestFailure> {
    let malformed = |what: &str| {
        TestFailure::new(format!(
            "entry {} has no {what} in its action ({})",
            entry.id, entry.action
        ))
    };
    let bundle = entry.action.bundle().ok_or_else(|| malformed("bundle"))?;
    let data = bundle.data.as_deref().ok_or_else(|| malformed("data graph"))?;
    let patch = bundle.patch.as_deref().ok_or_else(|| malformed("patch"))?;
    let base = bundle.effective_base().unwrap_or(data);
    Ok((data, patch, base))
}

/// Loads the data graph and applies the patch to it with a real engine.
fn apply_patch(
    harness: &Harness,
    data: &str,
    patch: &str,
    base: &str,
    strict: bool,
) -> Result<(RdfGraph, Result<(), PatchError>), TestFailure> {
    let mut graph = harness.load_graph(data)?;
    let text = harness.fetch_text(patch)?;
    let outcome = text.and_then(|text| {
        let mut engine = harness.engines.bind(&mut graph);
        harness.parser.parse(&text, base, strict, engine.as_mut())
    });
    Ok((graph, outcome))
}

fn positive_evaluation(harness: &Harness, entry: &ManifestEntry, strict: bool) -> Result<(), TestFailure> {
    let (data, patch, base) = evaluation_target(entry)?;
    let result = entry.result.as_deref().ok_or_else(|| {
        TestFailure::new(format!("entry {} has no expected result", entry.id))
    })?;

    let (graph, outcome) = apply_patch(harness, data, patch, base, strict)?;
    if let Err(e) = outcome {
        let label = if e.is_syntax() { "ParseError" } else { "EvalError" };
        return Err(TestFailure::new(format!("{label}: {e}\n  in <{patch}>")));
    }

    let expected = harness.load_graph(result)?;
    let isomorphic = graph
        .isomorphic(&expected)
        .map_err(|e| TestFailure::new(format!("{e}\n  comparing <{result}>")))?;
    if isomorphic {
        return Ok(());
    }
    let actual = graph
        .to_turtle()
        .unwrap_or_else(|e| format!("(unprintable: {e})"));
    Err(TestFailure::new(format!(
        "\n  patch: <{patch}>\n  result: {actual}\n"
    )))
}

fn negative_evaluation(harness: &Harness, entry: &ManifestEntry, strict: bool) -> Result<(), TestFailure> {
    let (data, patch, base) = evaluation_target(entry)?;
    let (_, outcome) = apply_patch(harness, data, patch, base, strict)?;
    match outcome {
        Err(PatchError::Evaluation(_)) => Ok(()),
        Ok(()) => Err(TestFailure::new(format!(
            "expected evaluation error in <{patch}>"
        ))),
        Err(e) => Err(TestFailure::new(format!(
            "unexpected {e}\n  in <{patch}>"
        ))),
    }
}
