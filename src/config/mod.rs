//! Route manifest subsystem.
//!
//! # Data Flow
//! ```text
//! manifest file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouteManifest (validated, immutable)
//!     → properties.rs + routing::RouteCompiler
//!     → RoutingTable
//!
//! On change:
//!     watcher.rs detects change
//!     → loader.rs loads and validates the new manifest
//!     → caller rebuilds the table
//!     → atomic swap in routing::SharedRoutingTable
//! ```
//!
//! # Design Decisions
//! - A manifest is immutable once loaded; changes require a full reload
//! - All fields have defaults to allow minimal manifests
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod properties;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use properties::Properties;
pub use schema::{GroupConfig, LogFormat, ObservabilityConfig, RouteConfig, RouteManifest};
pub use validation::{validate_config, ValidationError};
pub use watcher::ManifestWatcher;
