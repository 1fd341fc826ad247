//! Compiled route entries.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::routing::matcher::MatcherPattern;
use crate::routing::method::RequestMethod;
use crate::routing::tag::Tag;

/// One compiled (template, method) pair. Immutable once built.
///
/// Equality and hashing cover everything except `parameter_tags`: two
/// entries differing only in parameter tags are the same route.
#[derive(Debug, Clone, Serialize)]
pub struct RouteEntry {
    method: RequestMethod,
    raw_template: String,
    resolved_path: String,
    #[serde(rename = "matcher_pattern")]
    matcher: MatcherPattern,
    group_tags: Vec<Tag>,
    route_tags: Vec<Tag>,
    parameter_tags: Vec<Vec<Tag>>,
}

impl RouteEntry {
    pub fn new(
        method: RequestMethod,
        raw_template: impl Into<String>,
        resolved_path: impl Into<String>,
        matcher: MatcherPattern,
        group_tags: Vec<Tag>,
        route_tags: Vec<Tag>,
        parameter_tags: Vec<Vec<Tag>>,
    ) -> Self {
        Self {
            method,
            raw_template: raw_template.into(),
            resolved_path: resolved_path.into(),
            matcher,
            group_tags,
            route_tags,
            parameter_tags,
        }
    }

    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// The template as declared, placeholders included.
    pub fn raw_template(&self) -> &str {
        &self.raw_template
    }

    /// The template with placeholders substituted.
    pub fn resolved_path(&self) -> &str {
        &self.resolved_path
    }

    pub fn matcher(&self) -> &MatcherPattern {
        &self.matcher
    }

    pub fn group_tags(&self) -> &[Tag] {
        &self.group_tags
    }

    pub fn route_tags(&self) -> &[Tag] {
        &self.route_tags
    }

    /// One tag list per declared parameter position.
    pub fn parameter_tags(&self) -> &[Vec<Tag>] {
        &self.parameter_tags
    }

    pub fn has_group_tag(&self, tag: &Tag) -> bool {
        self.group_tags.contains(tag)
    }

    pub fn has_route_tag(&self, tag: &Tag) -> bool {
        self.route_tags.contains(tag)
    }

    pub fn has_parameter_tag(&self, tag: &Tag) -> bool {
        self.parameter_tags.iter().any(|tags| tags.contains(tag))
    }

    /// Literal comparison against the resolved path.
    pub fn is_exact(&self, path: &str) -> bool {
        self.resolved_path == path
    }

    /// Pattern comparison against the matcher.
    pub fn matches(&self, path: &str) -> bool {
        self.matcher.matches(path)
    }
}

impl PartialEq for RouteEntry {
    fn eq(&self, other: &Self) -> bool {
        self.method == other.method
            && self.raw_template == other.raw_template
            && self.resolved_path == other.resolved_path
            && self.matcher == other.matcher
            && self.group_tags == other.group_tags
            && self.route_tags == other.route_tags
    }
}

impl Eq for RouteEntry {}

impl Hash for RouteEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.method.hash(state);
        self.raw_template.hash(state);
        self.resolved_path.hash(state);
        self.matcher.hash(state);
        self.group_tags.hash(state);
        self.route_tags.hash(state);
    }
}
