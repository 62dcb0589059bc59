//! Report types: per-case outcomes and their aggregation over a run.

use serde::Serialize;

/// The result of running one generated test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Outcome {
    /// The expected behavior was observed.
    Passed,
    /// It was not; the message names the document acted on.
    Failed {
        /// Failure message.
        message: String,
    },
    /// The case was not run.
    Skipped {
        /// Why it was not run.
        reason: String,
    },
}

impl Outcome {
    /// Returns true if this outcome is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }

    /// Returns true if this outcome is a skip.
    pub fn is_skip(&self) -> bool {
        matches!(self, Outcome::Skipped { .. })
    }
}

/// One named case and its outcome.
#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    /// The unique test-case name.
    pub name: String,
    /// The outcome.
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Aggregated outcomes of a suite run, in run order.
#[derive(Debug, Default, Serialize)]
pub struct SuiteReport {
    /// All individual results.
    pub results: Vec<CaseResult>,
}

impl SuiteReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result.
    pub fn push(&mut self, name: impl Into<String>, outcome: Outcome) {
        self.results.push(CaseResult {
            name: name.into(),
            outcome,
        });
    }

    /// Looks up the outcome of the case called `name`.
    pub fn outcome(&self, name: &str) -> Option<&Outcome> {
        self.results
            .iter()
            .find(|r| r.name == name)
            .map(|r| &r.outcome)
    }

    /// Number of passed cases.
    pub fn pass_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome == Outcome::Passed)
            .count()
    }

    /// Number of failed cases.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_failure()).count()
    }

    /// Number of skipped cases.
    pub fn skip_count(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_skip()).count()
    }

    /// Returns true if no case failed. Skips are not failures.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }

    /// Serializes the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
