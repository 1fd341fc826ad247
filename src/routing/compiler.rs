//! Route compilation.
//!
//! # Responsibilities
//! - Expand each declaration into (grouping template × route template × method)
//! - Resolve placeholders and translate wildcards for every joined template
//! - Fill a routing table, collecting rejected templates instead of aborting
//!
//! # Design Decisions
//! - Grouping templates outer, route templates middle, methods inner; this
//!   fixes insertion order and therefore pattern lookup order
//! - A rejected template never reaches the table
//! - Duplicate templates or methods within a declaration are expanded once

use std::hash::Hash;

use indexmap::IndexSet;
use thiserror::Error;

use crate::observability::metrics;
use crate::routing::entry::RouteEntry;
use crate::routing::matcher::MatcherPattern;
use crate::routing::method::RequestMethod;
use crate::routing::source::{scope_within, RouteDeclaration, RouteSource};
use crate::routing::table::RoutingTable;
use crate::template::{join_paths, resolve_placeholders, PropertySource, TemplateError};

/// A (template, method) pair that could not be compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot compile {method} `{raw_template}` in scope `{scope}`: {source}")]
pub struct CompileError {
    pub scope: String,
    pub raw_template: String,
    pub method: RequestMethod,
    #[source]
    pub source: TemplateError,
}

/// Failure of a strict build.
#[derive(Debug, Clone, Error)]
pub enum BuildError {
    #[error("{} route template(s) rejected; first: {}", .0.len(), first_error(.0))]
    Rejected(Vec<CompileError>),
}

fn first_error(errors: &[CompileError]) -> String {
    errors.first().map(ToString::to_string).unwrap_or_default()
}

/// Outcome of one compilation pass.
#[derive(Debug, Default)]
pub struct Compilation {
    pub table: RoutingTable,
    pub rejected: Vec<CompileError>,
}

impl Compilation {
    /// The table, or every rejection if there was any.
    pub fn into_strict(self) -> Result<RoutingTable, BuildError> {
        if self.rejected.is_empty() {
            Ok(self.table)
        } else {
            Err(BuildError::Rejected(self.rejected))
        }
    }
}

/// Turns route declarations into routing table entries.
#[derive(Debug, Clone)]
pub struct RouteCompiler<P> {
    properties: P,
    base_scopes: Vec<String>,
}

impl<P: PropertySource> RouteCompiler<P> {
    pub fn new(properties: P) -> Self {
        Self {
            properties,
            base_scopes: Vec::new(),
        }
    }

    /// Only compile declarations within one of `scopes`. No scopes means all.
    pub fn with_base_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base_scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    pub fn properties(&self) -> &P {
        &self.properties
    }

    /// Whether `declaration` falls within the configured base scopes.
    pub fn accepts(&self, declaration: &RouteDeclaration) -> bool {
        self.base_scopes.is_empty()
            || self
                .base_scopes
                .iter()
                .any(|base| scope_within(&declaration.scope, base))
    }

    /// Joined raw templates and methods of `declaration`, in expansion order.
    pub fn expand(&self, declaration: &RouteDeclaration) -> Vec<(String, RequestMethod)> {
        let groups = templates_or_root(&declaration.group_templates);
        let routes = templates_or_root(&declaration.route_templates);
        let methods = methods_or_all(&declaration.methods);

        let mut expanded = Vec::with_capacity(groups.len() * routes.len() * methods.len());
        for group in &groups {
            for route in &routes {
                let raw_template = join_paths(&[group.as_str(), route.as_str()]);
                for method in &methods {
                    expanded.push((raw_template.clone(), *method));
                }
            }
        }
        expanded
    }

    /// Resolves and translates one raw template.
    pub fn compile_template(&self, raw_template: &str) -> Result<(String, MatcherPattern), TemplateError> {
        let resolved_path = resolve_placeholders(raw_template, &self.properties)?;
        let matcher = MatcherPattern::from_resolved_path(&resolved_path)?;
        Ok((resolved_path, matcher))
    }

    /// Compiles every expansion of `declaration`, in expansion order.
    pub fn compile(&self, declaration: &RouteDeclaration) -> Vec<Result<RouteEntry, CompileError>> {
        let mut compiled = Vec::new();
        let mut last: Option<(String, Result<(String, MatcherPattern), TemplateError>)> = None;

        for (raw_template, method) in self.expand(declaration) {
            // Methods are innermost, so a template is compiled once per run.
            let outcome = match last.take() {
                Some((previous, outcome)) if previous == raw_template => outcome,
                _ => self.compile_template(&raw_template),
            };
            last = Some((raw_template.clone(), outcome.clone()));

            compiled.push(match outcome {
                Ok((resolved_path, matcher)) => Ok(RouteEntry::new(
                    method,
                    raw_template,
                    resolved_path,
                    matcher,
                    declaration.group_tags.clone(),
                    declaration.route_tags.clone(),
                    declaration.parameter_tags.clone(),
                )),
                Err(source) => Err(CompileError {
                    scope: declaration.scope.clone(),
                    raw_template,
                    method,
                    source,
                }),
            });
        }
        compiled
    }

    /// Compiles every accepted declaration of `source` into a fresh table.
    pub fn build<S: RouteSource + ?Sized>(&self, source: &S) -> Compilation {
        let mut compilation = Compilation::default();
        let mut skipped = 0usize;

        for declaration in source.declarations() {
            if !self.accepts(&declaration) {
                skipped += 1;
                continue;
            }
            for outcome in self.compile(&declaration) {
                match outcome {
                    Ok(entry) => self.insert_entry(&mut compilation.table, entry),
                    Err(error) => {
                        tracing::warn!(
                            scope = %error.scope,
                            template = %error.raw_template,
                            method = %error.method,
                            error = %error.source,
                            "Route template rejected"
                        );
                        metrics::record_rejected();
                        compilation.rejected.push(error);
                    }
                }
            }
        }

        metrics::record_table_size(compilation.table.len());
        tracing::info!(
            routes = compilation.table.len(),
            rejected = compilation.rejected.len(),
            skipped_declarations = skipped,
            "Routing table compiled"
        );
        compilation
    }

    fn insert_entry(&self, table: &mut RoutingTable, entry: RouteEntry) {
        let method = entry.method();
        let template = entry.raw_template().to_string();
        if table.insert(entry) {
            metrics::record_compiled();
            tracing::debug!(%method, %template, "Route compiled");
        } else {
            metrics::record_deduplicated();
            tracing::debug!(%method, %template, "Duplicate route skipped");
        }
    }
}

fn templates_or_root(templates: &[String]) -> Vec<String> {
    let unique = unique(templates);
    if unique.is_empty() {
        vec![String::new()]
    } else {
        unique
    }
}

fn methods_or_all(methods: &[RequestMethod]) -> Vec<RequestMethod> {
    let unique = unique(methods);
    if unique.is_empty() {
        RequestMethod::ALL.to_vec()
    } else {
        unique
    }
}

fn unique<T: Clone + Eq + Hash>(items: &[T]) -> Vec<T> {
    items.iter().cloned().collect::<IndexSet<T>>().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::tag::{tags, Tag};

    fn properties(key: &str, default: &str) -> String {
        match key {
            "test.var.1" => "haha".to_string(),
            _ => default.to_string(),
        }
    }

    fn compiler() -> RouteCompiler<fn(&str, &str) -> String> {
        RouteCompiler::new(properties as fn(&str, &str) -> String)
    }

    #[test]
    fn test_expansion_order() {
        let declaration = RouteDeclaration::new(["/x", "/y"])
            .under(["/a", "/b"])
            .with_methods([RequestMethod::Get, RequestMethod::Post]);

        let expanded = compiler().expand(&declaration);
        let expected = [
            ("/a/x", RequestMethod::Get),
            ("/a/x", RequestMethod::Post),
            ("/a/y", RequestMethod::Get),
            ("/a/y", RequestMethod::Post),
            ("/b/x", RequestMethod::Get),
            ("/b/x", RequestMethod::Post),
            ("/b/y", RequestMethod::Get),
            ("/b/y", RequestMethod::Post),
        ];
        assert_eq!(expanded.len(), expected.len());
        for ((raw, method), (want_raw, want_method)) in expanded.iter().zip(expected) {
            assert_eq!(raw, want_raw);
            assert_eq!(*method, want_method);
        }
    }

    #[test]
    fn test_empty_lists_expand_to_root_and_every_method() {
        let declaration = RouteDeclaration::default().under(["/b"]);
        let expanded = compiler().expand(&declaration);
        assert_eq!(expanded.len(), RequestMethod::ALL.len());
        assert!(expanded.iter().all(|(raw, _)| raw == "/b"));
        let methods: Vec<RequestMethod> = expanded.iter().map(|(_, m)| *m).collect();
        assert_eq!(methods, RequestMethod::ALL.to_vec());
    }

    #[test]
    fn test_duplicate_templates_and_methods_expanded_once() {
        let declaration = RouteDeclaration::new(["/x", "/x"])
            .with_methods([RequestMethod::Get, RequestMethod::Get]);
        assert_eq!(compiler().expand(&declaration).len(), 1);
    }

    #[test]
    fn test_compile_resolves_and_translates() {
        let declaration = RouteDeclaration::new(["/index/${test.var.1}", "/index/${test.var.2:yaya}"])
            .under(["/home"])
            .with_methods([RequestMethod::Get]);

        let entries: Vec<RouteEntry> = compiler()
            .compile(&declaration)
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(entries[0].raw_template(), "/home/index/${test.var.1}");
        assert_eq!(entries[0].resolved_path(), "/home/index/haha");
        assert_eq!(entries[0].matcher().as_str(), "/?home/index/haha/?");
        assert_eq!(entries[1].resolved_path(), "/home/index/yaya");
    }

    #[test]
    fn test_round_trip_for_plain_template() {
        let declaration = RouteDeclaration::new(["/home/index"]).with_methods([RequestMethod::Get]);
        let entry = compiler().compile(&declaration).remove(0).unwrap();
        assert_eq!(entry.resolved_path(), entry.raw_template());
        assert!(entry.matches(entry.resolved_path()));
    }

    #[test]
    fn test_build_is_idempotent() {
        let declaration = RouteDeclaration::new(["/a"])
            .with_methods([RequestMethod::Get])
            .with_route_tags(tags(["t"]));
        let table = compiler().build(&vec![declaration.clone(), declaration]).table;
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_parameter_tags_do_not_split_duplicates() {
        let plain = RouteDeclaration::new(["/a"]).with_methods([RequestMethod::Get]);
        let tagged = plain.clone().with_parameter_tags(vec![tags(["p"])]);
        let table = compiler().build(&vec![plain, tagged]).table;
        assert_eq!(table.len(), 1);
        // The first insertion is the one kept.
        assert!(table.find_by_parameter_tag(&Tag::new("p")).is_empty());
    }

    #[test]
    fn test_rejected_template_does_not_block_others() {
        let declaration = RouteDeclaration::new(["/ok", "/broken/{id"])
            .in_scope("app")
            .with_methods([RequestMethod::Get, RequestMethod::Put]);
        let compilation = compiler().build(&vec![declaration]);

        assert_eq!(compilation.table.len(), 2);
        assert_eq!(compilation.rejected.len(), 2);
        assert_eq!(compilation.rejected[0].raw_template, "/broken/{id");
        assert_eq!(compilation.rejected[0].method, RequestMethod::Get);
        assert!(matches!(
            compilation.rejected[0].source,
            TemplateError::UnclosedPathVariable { .. }
        ));
        assert!(matches!(compilation.into_strict(), Err(BuildError::Rejected(errors)) if errors.len() == 2));
    }

    #[test]
    fn test_base_scopes_filter_declarations() {
        let declarations = vec![
            RouteDeclaration::new(["/a"]).in_scope("app.controller"),
            RouteDeclaration::new(["/b"]).in_scope("app.controller2.ctrl"),
        ];
        let table = compiler()
            .with_base_scopes(["app.controller"])
            .build(&declarations)
            .table;
        assert!(table.iter().all(|entry| entry.raw_template() == "/a"));
        assert_eq!(table.len(), RequestMethod::ALL.len());

        let everything = compiler().build(&declarations).table;
        assert_eq!(everything.len(), 2 * RequestMethod::ALL.len());
    }
}
