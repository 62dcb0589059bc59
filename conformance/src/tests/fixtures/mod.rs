//! Manifest and document fixtures.
//!
//! Each constant holds a Turtle manifest or a patch document, served from
//! memory under a fixed `http://example.org/` URI. Patch documents use a
//! minimal dialect: `@prefix` declarations plus `Add`, `AddNew`, `Delete`
//! and `DeleteExisting` blocks, one statement per line.

mod diamond;
mod nested;
mod scenarios;

pub use diamond::{diamond_fetcher, DIAMOND_ROOT};
pub use nested::{nested_fetcher, NESTED_ROOT};
pub use scenarios::{
    scenario_fetcher, BAR_PATCH, DATA_GRAPH, DELETE_MISSING_PATCH, FOO_PATCH, REPLACE_PATCH,
    RESULT_GRAPH, SCENARIO_BASE, SCENARIO_MANIFEST, SCENARIO_MANIFEST_TTL,
};
