//! A minimal patch dialect for driving generated cases end to end.
//!
//! One statement per line: `@prefix p: <ns> .` or
//! `Add|AddNew|Delete|DeleteExisting { s p o . s p o } .` with terms written
//! as `<iri>` (resolved against the base) or `prefix:local`.

#![allow(dead_code)]

use std::collections::HashMap;

use ldpatch_conformance::graph::iri;
use ldpatch_conformance::{
    EngineFactory, PatchEngine, PatchError, PatchParser, PathStep, RdfGraph, Slice, Term, Triple,
    WriteMode,
};
use url::Url;

fn syntax(line: usize, message: &str) -> PatchError {
    PatchError::Syntax(format!("line {}: {message}", line + 1))
}

/// Parser for the dialect described above.
pub struct MiniPatchParser;

impl PatchParser for MiniPatchParser {
    fn parse(
        &self,
        document: &str,
        base: &str,
        _strict: bool,
        engine: &mut dyn PatchEngine,
    ) -> Result<(), PatchError> {
        let base = Url::parse(base).map_err(|e| syntax(0, &format!("bad base: {e}")))?;
        for (n, raw) in document.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let statement = line
                .strip_suffix('.')
                .map(str::trim_end)
                .ok_or_else(|| syntax(n, "missing final '.'"))?;

            if let Some(rest) = statement.strip_prefix("@prefix") {
                let (name, namespace) = rest
                    .trim()
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| syntax(n, "malformed prefix declaration"))?;
                let name = name
                    .strip_suffix(':')
                    .ok_or_else(|| syntax(n, "prefix name must end with ':'"))?;
                let namespace = resolve(&base, namespace.trim(), n)?;
                engine.prefix(name, &namespace);
                continue;
            }

            let (keyword, body) = statement
                .split_once('{')
                .ok_or_else(|| syntax(n, "expected '{'"))?;
            let body = body
                .trim_end()
                .strip_suffix('}')
                .ok_or_else(|| syntax(n, "expected '}'"))?;
            let triples = parse_triples(body, &base, engine, n)?;
            match keyword.trim() {
                "Add" => engine.add(&triples, WriteMode::Lenient)?,
                "AddNew" => engine.add(&triples, WriteMode::Strict)?,
                "Delete" => engine.delete(&triples, WriteMode::Lenient)?,
                "DeleteExisting" => engine.delete(&triples, WriteMode::Strict)?,
                other => return Err(syntax(n, &format!("unknown operation `{other}`"))),
            }
        }
        Ok(())
    }
}

fn resolve(base: &Url, token: &str, line: usize) -> Result<String, PatchError> {
    let reference = token
        .strip_prefix('<')
        .and_then(|t| t.strip_suffix('>'))
        .ok_or_else(|| syntax(line, &format!("expected an IRI, found `{token}`")))?;
    base.join(reference)
        .map(String::from)
        .map_err(|e| syntax(line, &e.to_string()))
}

fn parse_term(token: &str, base: &Url, engine: &dyn PatchEngine, line: usize) -> Result<Term, PatchError> {
    if token.starts_with('<') {
        return Ok(iri(&resolve(base, token, line)?));
    }
    match token.split_once(':') {
        Some((prefix, local)) => Ok(iri(&engine.expand_pname(prefix, local)?)),
        None => Err(syntax(line, &format!("unexpected token `{token}`"))),
    }
}

fn parse_triples(
    body: &str,
    base: &Url,
    engine: &dyn PatchEngine,
    line: usize,
) -> Result<Vec<Triple>, PatchError> {
    let terms = body
        .split_whitespace()
        .filter(|token| *token != ".")
        .map(|token| parse_term(token, base, engine, line))
        .collect::<Result<Vec<_>, _>>()?;
    if terms.len() % 3 != 0 {
        return Err(syntax(line, "incomplete triple"));
    }
    Ok(terms
        .chunks(3)
        .map(|t| [t[0].clone(), t[1].clone(), t[2].clone()])
        .collect())
}

/// Applies additions and deletions to a working graph.
pub struct GraphEngine<'g> {
    graph: &'g mut RdfGraph,
    prefixes: HashMap<String, String>,
}

fn evaluation(e: impl ToString) -> PatchError {
    PatchError::Evaluation(e.to_string())
}

impl PatchEngine for GraphEngine<'_> {
    fn prefix(&mut self, prefix: &str, namespace: &str) {
        self.prefixes.insert(prefix.to_string(), namespace.to_string());
    }

    fn expand_pname(&self, prefix: &str, suffix: &str) -> Result<String, PatchError> {
        self.prefixes
            .get(prefix)
            .map(|namespace| format!("{namespace}{suffix}"))
            .ok_or_else(|| PatchError::Syntax(format!("Undeclared prefix {prefix}:")))
    }

    fn bind(&mut self, variable: &str, _: &Term, _: &[PathStep]) -> Result<(), PatchError> {
        Err(evaluation(format!("cannot bind ?{variable}: paths unsupported")))
    }

    fn add(&mut self, triples: &[Triple], mode: WriteMode) -> Result<(), PatchError> {
        for triple in triples {
            if mode == WriteMode::Strict && self.graph.contains(triple).map_err(evaluation)? {
                return Err(evaluation("AddNew: triple already present"));
            }
        }
        for triple in triples {
            self.graph.insert(triple).map_err(evaluation)?;
        }
        Ok(())
    }

    fn delete(&mut self, triples: &[Triple], mode: WriteMode) -> Result<(), PatchError> {
        for triple in triples {
            if mode == WriteMode::Strict && !self.graph.contains(triple).map_err(evaluation)? {
                return Err(evaluation("DeleteExisting: triple not present"));
            }
        }
        for triple in triples {
            self.graph.remove(triple).map_err(evaluation)?;
        }
        Ok(())
    }

    fn update_list(&mut self, _: &Term, _: &Term, _: Slice, _: &[Term]) -> Result<(), PatchError> {
        Err(evaluation("UpdateList unsupported"))
    }
}

/// Hands out [`GraphEngine`]s.
pub struct GraphEngines;

impl EngineFactory for GraphEngines {
    fn bind<'g>(&self, graph: &'g mut RdfGraph) -> Box<dyn PatchEngine + 'g> {
        Box::new(GraphEngine {
            graph,
            prefixes: HashMap::new(),
        })
    }
}
