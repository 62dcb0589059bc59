//! Suite construction and the resulting test registry.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{info, warn};

use crate::classify::EntryClassifier;
use crate::config::SuiteConfig;
use crate::error::SuiteError;
use crate::factory::{GeneratedTestCase, Harness, TestCaseFactory};
use crate::manifest::ManifestResolver;
use crate::names::NameAllocator;
use crate::report::{Outcome, SuiteReport};

/// Generated test cases keyed by unique name, in manifest order.
#[derive(Debug, Default)]
pub struct TestSuite {
    cases: IndexMap<String, GeneratedTestCase>,
}

impl TestSuite {
    /// Number of installed cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns true if no case is installed.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// The case installed under `name`.
    pub fn get(&self, name: &str) -> Option<&GeneratedTestCase> {
        self.cases.get(name)
    }

    /// Installed names, in installation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cases.keys().map(String::as_str)
    }

    /// Installed cases with their names, in installation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GeneratedTestCase)> {
        self.cases.iter().map(|(name, case)| (name.as_str(), case))
    }

    /// Runs every case sequentially and collects the outcomes.
    pub fn run(&self) -> SuiteReport {
        let mut report = SuiteReport::new();
        for (name, case) in &self.cases {
            let outcome = case.run();
            if let Outcome::Failed { message } = &outcome {
                warn!(name = %name, %message, "test case failed");
            }
            report.push(name.clone(), outcome);
        }
        info!(
            passed = report.pass_count(),
            failed = report.failure_count(),
            skipped = report.skip_count(),
            "suite run complete"
        );
        report
    }

    fn install(&mut self, name: String, case: GeneratedTestCase) {
        self.cases.insert(name, case);
    }
}

impl<'a> IntoIterator for &'a TestSuite {
    type Item = (&'a String, &'a GeneratedTestCase);
    type IntoIter = indexmap::map::Iter<'a, String, GeneratedTestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}

/// Resolves, classifies, generates and names every entry of a manifest.
pub struct SuiteBuilder {
    config: SuiteConfig,
    harness: Arc<Harness>,
}

impl SuiteBuilder {
    /// Creates a builder for `config` whose cases run against `harness`.
    pub fn new(config: SuiteConfig, harness: Harness) -> Self {
        Self {
            config,
            harness: Arc::new(harness),
        }
    }

    /// The configuration this builder uses.
    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Builds the suite in one pass over the resolved entries.
    ///
    /// # Errors
    ///
    /// Returns a [`SuiteError`] if manifest resolution fails; no partial
    /// suite is returned.
    pub fn build(&self) -> Result<TestSuite, SuiteError> {
        let vocab = self.config.vocabulary();
        let resolver = ManifestResolver::new(self.harness.fetcher.as_ref(), &vocab);
        let entries = resolver.resolve(&self.config.manifest)?;

        let classifier = EntryClassifier::new(self.config.blacklist.clone());
        let factory = TestCaseFactory::new(Arc::clone(&self.harness), self.config.strict);
        let mut names = NameAllocator::new();
        let mut suite = TestSuite::default();

        for entry in entries {
            let strategy = classifier.classify(&entry);
            let name = names.allocate(&entry.name);
            let case = factory.build(entry, strategy);
            suite.install(name, case);
        }

        info!(manifest = %self.config.manifest, cases = suite.len(), "suite built");
        Ok(suite)
    }
}
