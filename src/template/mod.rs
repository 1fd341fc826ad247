//! Route template compilation.
//!
//! # Data Flow
//! ```text
//! raw template ("/home/${section:index}/{id}/**")
//!     → placeholder.rs (substitute ${key} / ${key:default})
//!     → resolved path ("/home/index/{id}/**")
//!     → escape.rs (escape regex specials outside protected spans)
//!     → wildcard.rs ({..}, **, *, ? → regex fragments, optional slashes)
//!     → matcher fragment ("/?home/index/[^/]+/.*/?")
//! ```
//!
//! # Design Decisions
//! - Every stage is a pure function of its inputs
//! - Malformed templates are rejected, never half-expanded
//! - Separator handling lives in path.rs and is shared with route expansion

pub mod error;
pub mod escape;
pub mod path;
pub mod placeholder;
pub mod wildcard;

mod scan;

pub use error::TemplateError;
pub use escape::escape_special_characters;
pub use path::{join_paths, join_paths_with, SEPARATOR};
pub use placeholder::{resolve_placeholders, PropertySource};
pub use wildcard::to_matcher_fragment;

/// Checks that every `${...}` placeholder and `{...}` path variable in a raw
/// template is well formed.
pub fn check_template(template: &str) -> Result<(), TemplateError> {
    scan::scan(template, true).map(|_| ())
}
