//! LD Patch conformance suite synthesis.
//!
//! Reads a W3C-style test manifest, recursively follows its includes, and
//! turns every entry into a named, runnable test case for a patch parser
//! and engine supplied by the caller.
//!
//! # Pipeline
//!
//! | Stage | Module |
//! |-------|--------|
//! | Manifest resolution (includes first, then entries) | [`manifest`] |
//! | Classification (blacklist, approval, type) | [`classify`] |
//! | Test-case generation | [`factory`] |
//! | Unique naming (`test_<name>`, `_2`, `_3`, ...) | [`names`] |
//! | Orchestration and registry | [`suite`] |
//! | Sequential run and outcome aggregation | [`report`] |
//!
//! Syntax tests parse with a [`StubEngine`]; evaluation tests apply the
//! patch to a fresh working graph through an engine from the caller's
//! [`EngineFactory`] and compare the result up to blank-node renaming.
//!
//! # Entry Point
//!
//! ```no_run
//! use ldpatch_conformance::{build_suite, Harness, SuiteConfig};
//! # use ldpatch_conformance::{EngineFactory, PatchParser};
//! # fn run(parser: impl PatchParser + 'static, engines: impl EngineFactory + 'static) {
//! use ldpatch_conformance::fetch::DefaultFetcher;
//!
//! let config = SuiteConfig::from_env().expect("test suite checkout");
//! let harness = Harness::new(DefaultFetcher, parser, engines);
//! let suite = build_suite(config, harness).expect("Failed to build suite");
//! let report = suite.run();
//! assert!(report.all_passed());
//! # }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod factory;
pub mod fetch;
pub mod graph;
pub mod manifest;
pub mod names;
pub mod report;
pub mod stub;
pub mod suite;
pub mod tests;
pub mod vocab;

pub use classify::{Blacklist, EntryClassifier, SkipReason, Strategy};
pub use config::SuiteConfig;
pub use engine::{EngineFactory, PatchEngine, PatchParser, PathStep, Slice, WriteMode};
pub use error::{FetchError, PatchError, SuiteError, TestFailure};
pub use factory::{Disposition, GeneratedTestCase, Harness, TestCaseFactory};
pub use graph::{RdfGraph, Term, Triple};
pub use manifest::{Action, ActionBundle, Approval, ManifestEntry, ManifestResolver, TestKind, TestType};
pub use names::NameAllocator;
pub use report::{CaseResult, Outcome, SuiteReport};
pub use stub::StubEngine;
pub use suite::{SuiteBuilder, TestSuite};

/// Builds the suite described by `config`, with cases running against
/// `harness`.
///
/// # Errors
///
/// Returns a [`SuiteError`] if any manifest cannot be fetched or parsed,
/// or if manifests include each other cyclically.
pub fn build_suite(config: SuiteConfig, harness: Harness) -> Result<TestSuite, SuiteError> {
    SuiteBuilder::new(config, harness).build()
}
