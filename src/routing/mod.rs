//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (once per pass):
//!     RouteSource → RouteDeclaration[]
//!     → compiler.rs (scope filter, G × L × M expansion)
//!     → template::* (resolve placeholders, build matcher pattern)
//!     → RouteEntry → table.rs (ordered, deduplicated)
//!     → shared.rs (atomic publish)
//!
//! Lookup:
//!     (path, method) → table.rs
//!     → literal pass over resolved paths
//!     → pattern pass over matcher patterns
//!     → matched RouteEntry or None
//! ```
//!
//! # Design Decisions
//! - Tables are immutable once built; reloads build a new one
//! - Deterministic: same declarations always give the same table order
//! - First match wins within each pass

pub mod compiler;
pub mod entry;
pub mod matcher;
pub mod method;
pub mod shared;
pub mod source;
pub mod table;
pub mod tag;

pub use compiler::{BuildError, Compilation, CompileError, RouteCompiler};
pub use entry::RouteEntry;
pub use matcher::MatcherPattern;
pub use method::{MethodParseError, RequestMethod};
pub use shared::SharedRoutingTable;
pub use source::{RouteDeclaration, RouteSource};
pub use table::RoutingTable;
pub use tag::{tags, Tag};
