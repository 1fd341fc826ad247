//! Routing table storage and lookup.
//!
//! # Responsibilities
//! - Store compiled routes in insertion order, without duplicates
//! - Look up routes by request path (literal first, then pattern)
//! - Look up routes by grouping, route or parameter tag
//!
//! # Design Decisions
//! - Built once, then read-only (shared across threads without locks)
//! - Literal matches always win over pattern matches
//! - Among candidates of the same kind, the earliest inserted wins
//! - Linear scans over the entries
//! - Queries neither mutate the table nor emit metrics

use indexmap::IndexSet;

use crate::routing::entry::RouteEntry;
use crate::routing::method::RequestMethod;
use crate::routing::tag::Tag;

/// Ordered set of compiled routes.
#[derive(Debug, Clone, Default)]
pub struct RoutingTable {
    entries: IndexSet<RouteEntry>,
}

impl RoutingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `entry` unless an equal entry is already present.
    ///
    /// Returns whether the entry was added.
    pub fn insert(&mut self, entry: RouteEntry) -> bool {
        self.entries.insert(entry)
    }

    /// Every entry, in insertion order.
    pub fn all(&self) -> Vec<&RouteEntry> {
        self.entries.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&RouteEntry> {
        self.entries.get_index(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The route serving `path` for `method`.
    ///
    /// Every entry is first compared literally; only when none matches are
    /// the matcher patterns tried, again in insertion order.
    pub fn find_exact(&self, path: &str, method: RequestMethod) -> Option<&RouteEntry> {
        self.entries
            .iter()
            .find(|entry| entry.method() == method && entry.is_exact(path))
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|entry| entry.method() == method && entry.matches(path))
            })
    }

    /// Every route serving `path`, whatever its method.
    ///
    /// Literal matches come first, then pattern-only matches; each group
    /// keeps insertion order.
    pub fn find_by_path(&self, path: &str) -> Vec<&RouteEntry> {
        let mut found: Vec<&RouteEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.is_exact(path))
            .collect();
        found.extend(
            self.entries
                .iter()
                .filter(|entry| !entry.is_exact(path) && entry.matches(path)),
        );
        found
    }

    /// Routes carrying `tag` at the grouping or the route level.
    pub fn find_by_tag(&self, tag: &Tag) -> Vec<&RouteEntry> {
        self.filter(|entry| entry.has_group_tag(tag) || entry.has_route_tag(tag))
    }

    /// Routes carrying `tag` at the grouping level.
    pub fn find_by_group_tag(&self, tag: &Tag) -> Vec<&RouteEntry> {
        self.filter(|entry| entry.has_group_tag(tag))
    }

    /// Routes carrying `tag` at the route level.
    pub fn find_by_route_tag(&self, tag: &Tag) -> Vec<&RouteEntry> {
        self.filter(|entry| entry.has_route_tag(tag))
    }

    /// Routes with `tag` on any of their parameters.
    pub fn find_by_parameter_tag(&self, tag: &Tag) -> Vec<&RouteEntry> {
        self.filter(|entry| entry.has_parameter_tag(tag))
    }

    fn filter<F>(&self, predicate: F) -> Vec<&RouteEntry>
    where
        F: Fn(&RouteEntry) -> bool,
    {
        self.entries.iter().filter(|entry| predicate(*entry)).collect()
    }
}

impl Extend<RouteEntry> for RoutingTable {
    fn extend<I: IntoIterator<Item = RouteEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl FromIterator<RouteEntry> for RoutingTable {
    fn from_iter<I: IntoIterator<Item = RouteEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RoutingTable {
    type Item = &'a RouteEntry;
    type IntoIter = indexmap::set::Iter<'a, RouteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
