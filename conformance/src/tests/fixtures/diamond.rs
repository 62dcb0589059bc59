//! Two sub-manifests that both include the same third one.

use crate::fetch::MemoryFetcher;

/// URI of the root manifest.
pub const DIAMOND_ROOT: &str = "http://example.org/diamond/manifest.ttl";

const ROOT: &str = r#"
@prefix mf: <http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#> .
<> mf:include ( <left.ttl> <right.ttl> ) .
"#;

const SIDE: &str = r#"
@prefix mf: <http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#> .
<> mf:include ( <shared.ttl> ) .
"#;

const SHARED: &str = r#"
@prefix mf: <http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#> .
<> mf:entries ( <#shared> ) .
<#shared> mf:name "shared" .
"#;

/// Serves the diamond-shaped manifest set.
pub fn diamond_fetcher() -> MemoryFetcher {
    MemoryFetcher::new()
        .with(DIAMOND_ROOT, ROOT)
        .with("http://example.org/diamond/left.ttl", SIDE)
        .with("http://example.org/diamond/right.ttl", SIDE)
        .with("http://example.org/diamond/shared.ttl", SHARED)
}
