//! One manifest exercising every test kind, both skip reasons, an unknown
//! type, and a duplicated name.

use crate::fetch::MemoryFetcher;

/// Directory all scenario documents live in.
pub const SCENARIO_BASE: &str = "http://example.org/ldpatch/";

/// URI of the scenario manifest.
pub const SCENARIO_MANIFEST: &str = "http://example.org/ldpatch/manifest.ttl";

/// The scenario manifest.
pub const SCENARIO_MANIFEST_TTL: &str = r#"
@prefix mf:   <http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#> .
@prefix rdft: <http://www.w3.org/ns/rdftest#> .
@prefix :     <#> .

<> a mf:Manifest ;
    mf:entries (
        :foo
        :bar
        :replace
        :delete-missing
        :dup1
        :dup2
        :proposed
        :other
        :blacklisted
    ) .

:foo a :PositiveSyntaxTest ;
    mf:name "foo" ;
    mf:action <foo.ldpatch> .

:bar a :NegativeSyntaxTest ;
    mf:name "bar" ;
    mf:action <bar.ldpatch> .

:replace a :PositiveEvaluationTest ;
    mf:name "replace" ;
    rdft:approval rdft:Approved ;
    mf:action [ :data <data.ttl> ; :patch <replace.ldpatch> ] ;
    mf:result <result.ttl> .

:delete-missing a :NegativeEvaluationTest ;
    mf:name "delete-missing" ;
    mf:action [ :data <data.ttl> ; :patch <delete-missing.ldpatch> ] .

:dup1 a :PositiveSyntaxTest ;
    mf:name "dup" ;
    mf:action <foo.ldpatch> .

:dup2 a :NegativeSyntaxTest ;
    mf:name "dup" ;
    mf:action <bar.ldpatch> .

# Would fail if it ran: none of its documents exist.
:proposed a :PositiveEvaluationTest ;
    mf:name "proposed" ;
    rdft:approval rdft:Proposed ;
    mf:action [ :data <absent.ttl> ; :patch <absent.ldpatch> ] ;
    mf:result <absent.ttl> .

:other a :CsvResultFormatTest ;
    mf:name "other" ;
    mf:action <foo.ldpatch> .

:blacklisted a :PositiveSyntaxTest ;
    mf:name "localName_with_non_leading_extras" ;
    mf:action <absent.ldpatch> .
"#;

/// A well-formed patch.
pub const FOO_PATCH: &str = "@prefix ex: <http://example.org/ns#> .
Add { ex:s ex:p ex:o } .
";

/// A truncated patch.
pub const BAR_PATCH: &str = "Prefix(ex: <http://x/>) Add { ex:";

/// Data graph for the evaluation scenarios.
pub const DATA_GRAPH: &str = "<a> <b> <c> .\n";

/// Replaces `<a> <b> <c>` with `<a> <b> <d>`.
pub const REPLACE_PATCH: &str = "Delete { <a> <b> <c> } .
Add { <a> <b> <d> } .
";

/// Expected result of [`REPLACE_PATCH`].
pub const RESULT_GRAPH: &str = "<a> <b> <d> .\n";

/// Deletes a triple the data graph does not hold.
pub const DELETE_MISSING_PATCH: &str = "DeleteExisting { <a> <b> <z> } .\n";

/// Serves the scenario manifest and every document it references.
pub fn scenario_fetcher() -> MemoryFetcher {
    let doc = |name: &str| format!("{SCENARIO_BASE}{name}");
    MemoryFetcher::new()
        .with(SCENARIO_MANIFEST, SCENARIO_MANIFEST_TTL)
        .with(doc("foo.ldpatch"), FOO_PATCH)
        .with(doc("bar.ldpatch"), BAR_PATCH)
        .with(doc("data.ttl"), DATA_GRAPH)
        .with(doc("replace.ldpatch"), REPLACE_PATCH)
        .with(doc("result.ttl"), RESULT_GRAPH)
        .with(doc("delete-missing.ldpatch"), DELETE_MISSING_PATCH)
}
