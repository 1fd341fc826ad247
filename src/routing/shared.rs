//! Atomically replaceable routing table.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::routing::table::RoutingTable;

/// Holds the current routing table; readers get a snapshot, rebuilds swap in
/// a whole new table.
#[derive(Debug)]
pub struct SharedRoutingTable {
    current: ArcSwap<RoutingTable>,
}

impl SharedRoutingTable {
    pub fn new(table: RoutingTable) -> Self {
        Self {
            current: ArcSwap::from_pointee(table),
        }
    }

    /// The table in effect now. Later swaps do not affect the snapshot.
    pub fn load(&self) -> Arc<RoutingTable> {
        self.current.load_full()
    }

    /// Publishes `table` and returns the one it replaces.
    pub fn replace(&self, table: RoutingTable) -> Arc<RoutingTable> {
        let previous = self.current.swap(Arc::new(table));
        tracing::info!(
            previous_routes = previous.len(),
            routes = self.current.load().len(),
            "Routing table swapped"
        );
        previous
    }
}

impl Default for SharedRoutingTable {
    fn default() -> Self {
        Self::new(RoutingTable::new())
    }
}
