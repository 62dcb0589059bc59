//! Unique test-case names.

use std::collections::HashSet;
use std::hash::BuildHasher;

/// Prefix of every generated test-case name.
pub const TEST_PREFIX: &str = "test_";

/// Returns `test_<base>`, or the first of `test_<base>_2`, `test_<base>_3`,
/// ... not in `existing`.
pub fn allocate<S: BuildHasher>(base: &str, existing: &HashSet<String, S>) -> String {
    let name = format!("{TEST_PREFIX}{base}");
    if !existing.contains(&name) {
        return name;
    }
    let mut i = 2usize;
    loop {
        let candidate = format!("{name}_{i}");
        if !existing.contains(&candidate) {
            return candidate;
        }
        i += 1;
    }
}

/// Hands out names that are unique for its lifetime.
#[derive(Debug, Default)]
pub struct NameAllocator {
    taken: HashSet<String>,
}

impl NameAllocator {
    /// Creates an allocator with no names taken.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates and reserves a unique name for `base`.
    pub fn allocate(&mut self, base: &str) -> String {
        let name = allocate(base, &self.taken);
        self.taken.insert(name.clone());
        name
    }

    /// Returns true if `name` has been handed out.
    pub fn is_taken(&self, name: &str) -> bool {
        self.taken.contains(name)
    }
}
