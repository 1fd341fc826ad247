//! Metrics collection.
//!
//! # Responsibilities
//! - Count compiled, deduplicated and rejected routes
//! - Track the size of the last compiled table
//!
//! # Metrics
//! - `route_resolver_entries_compiled_total` (counter)
//! - `route_resolver_entries_deduplicated_total` (counter)
//! - `route_resolver_templates_rejected_total` (counter)
//! - `route_resolver_table_size` (gauge)
//!
//! # Design Decisions
//! - Facade only; the embedding application installs a recorder
//! - Without a recorder every call is a no-op
//! - Recorded while building tables only; lookups stay side-effect free

use metrics::{counter, gauge};

pub fn record_compiled() {
    counter!("route_resolver_entries_compiled_total").increment(1);
}

pub fn record_deduplicated() {
    counter!("route_resolver_entries_deduplicated_total").increment(1);
}

pub fn record_rejected() {
    counter!("route_resolver_templates_rejected_total").increment(1);
}

pub fn record_table_size(size: usize) {
    gauge!("route_resolver_table_size").set(size as f64);
}

