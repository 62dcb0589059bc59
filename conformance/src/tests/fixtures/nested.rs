//! A root manifest including two sub-manifests.

use crate::fetch::MemoryFetcher;

/// URI of the root manifest.
pub const NESTED_ROOT: &str = "http://example.org/nested/manifest.ttl";

const ROOT: &str = r#"
@prefix mf: <http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#> .

<> mf:include ( <a/manifest.ttl> <b/manifest.ttl> ) ;
   mf:entries ( <#root1> <#root2> ) .

<#root1> mf:name "root1" .
<#root2> mf:name "root2" .
"#;

const SUB_A: &str = r#"
@prefix mf: <http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#> .

<> mf:entries ( <#a1> <#a2> ) .

<#a1> mf:name "a1" .
<#a2> mf:name "a2" .
"#;

const SUB_B: &str = r#"
@prefix mf: <http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#> .

<> mf:entries ( <#b1> ) .

<#b1> mf:name "b1" .
"#;

/// Serves the root manifest and both sub-manifests.
pub fn nested_fetcher() -> MemoryFetcher {
    MemoryFetcher::new()
        .with(NESTED_ROOT, ROOT)
        .with("http://example.org/nested/a/manifest.ttl", SUB_A)
        .with("http://example.org/nested/b/manifest.ttl", SUB_B)
}
