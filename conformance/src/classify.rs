//! Entry classification.
//!
//! Decides, from an entry's name, approval and declared type alone, which
//! kind of test case to generate. The blacklist wins over everything, then
//! approval, then the type.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::manifest::{Approval, ManifestEntry, TestKind, TestType};

/// Entries excluded unless the configuration says otherwise: their Turtle
/// fixtures use unicode escapes in local names.
pub const DEFAULT_BLACKLIST: [&str; 4] = [
    "localName_with_assigned_nfc_PN_CHARS_BASE_character_boundaries",
    "localName_with_assigned_nfc_bmp_PN_CHARS_BASE_character_boundaries",
    "localName_with_nfc_PN_CHARS_BASE_character_boundaries",
    "localName_with_non_leading_extras",
];

/// Entry names that are skipped whatever the manifest says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Blacklist(BTreeSet<String>);

impl Blacklist {
    /// A blacklist excluding nothing.
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Returns true if `name` is excluded. Matching is exact.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Number of excluded names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Blacklist {
    fn default() -> Self {
        DEFAULT_BLACKLIST.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Blacklist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Why an entry is not run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry's name is blacklisted.
    Blacklisted,
    /// The entry is not approved.
    Unapproved,
    /// The entry's type is not one of the four known kinds.
    UnknownType(Option<String>),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Blacklisted => f.write_str("blacklisted"),
            SkipReason::Unapproved => f.write_str("unapproved"),
            SkipReason::UnknownType(_) => f.write_str("unknown type"),
        }
    }
}

/// What to generate for an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Generate a runnable case of this kind.
    Run(TestKind),
    /// Generate a skipped case.
    Skip(SkipReason),
}

/// Maps entries to strategies against a fixed blacklist.
#[derive(Debug, Clone, Default)]
pub struct EntryClassifier {
    blacklist: Blacklist,
}

impl EntryClassifier {
    /// Creates a classifier using `blacklist`.
    pub fn new(blacklist: Blacklist) -> Self {
        Self { blacklist }
    }

    /// Classifies `entry`. Pure: depends only on the entry and the blacklist.
    pub fn classify(&self, entry: &ManifestEntry) -> Strategy {
        if self.blacklist.contains(&entry.name) {
            return Strategy::Skip(SkipReason::Blacklisted);
        }
        if entry.approval != Approval::Approved {
            return Strategy::Skip(SkipReason::Unapproved);
        }
        match &entry.test_type {
            TestType::Known(kind) => Strategy::Run(*kind),
            TestType::Unknown(declared) => Strategy::Skip(SkipReason::UnknownType(declared.clone())),
        }
    }
}
