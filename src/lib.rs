//! Route table construction and lookup.
//!
//! Declared route templates (`/home/${section:index}/{id}/**`) are resolved
//! against configuration properties, translated into anchored regular
//! expressions and collected into an ordered routing table that answers
//! exact, path and tag queries.

pub mod config;
pub mod observability;
pub mod routing;
pub mod template;

pub use config::schema::RouteManifest;
pub use routing::{
    RequestMethod, RouteCompiler, RouteDeclaration, RouteEntry, RouteSource, RoutingTable,
    SharedRoutingTable, Tag,
};
pub use template::TemplateError;
