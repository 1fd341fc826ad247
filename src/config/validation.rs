//! Manifest validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check scope names and log settings
//! - Check every template for malformed placeholders and path variables
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouteManifest → Result<(), Vec<ValidationError>>
//! - Runs before a manifest is accepted into the system

use thiserror::Error;

use crate::config::schema::RouteManifest;
use crate::template::{check_template, TemplateError};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("scopes[{index}]: invalid base scope `{scope}`")]
    InvalidBaseScope { index: usize, scope: String },

    #[error("groups[{group}]: invalid scope `{scope}`")]
    InvalidScope { group: usize, scope: String },

    #[error("groups[{group}]: no routes declared")]
    EmptyGroup { group: usize },

    #[error("groups[{group}].paths[{index}]: {source}")]
    GroupTemplate {
        group: usize,
        index: usize,
        source: TemplateError,
    },

    #[error("groups[{group}].routes[{route}].paths[{index}]: {source}")]
    RouteTemplate {
        group: usize,
        route: usize,
        index: usize,
        source: TemplateError,
    },

    #[error("observability.log_level: unknown level `{0}`")]
    InvalidLogLevel(String),
}

/// Checks `manifest`, collecting every problem found.
pub fn validate_config(manifest: &RouteManifest) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (index, scope) in manifest.scopes.iter().enumerate() {
        if !is_valid_scope(scope) {
            errors.push(ValidationError::InvalidBaseScope {
                index,
                scope: scope.clone(),
            });
        }
    }

    for (group_index, group) in manifest.groups.iter().enumerate() {
        if !group.scope.is_empty() && !is_valid_scope(&group.scope) {
            errors.push(ValidationError::InvalidScope {
                group: group_index,
                scope: group.scope.clone(),
            });
        }
        if group.routes.is_empty() {
            errors.push(ValidationError::EmptyGroup { group: group_index });
        }

        for (index, template) in group.paths.iter().enumerate() {
            if let Err(source) = check_template(template) {
                errors.push(ValidationError::GroupTemplate {
                    group: group_index,
                    index,
                    source,
                });
            }
        }

        for (route_index, route) in group.routes.iter().enumerate() {
            for (index, template) in route.paths.iter().enumerate() {
                if let Err(source) = check_template(template) {
                    errors.push(ValidationError::RouteTemplate {
                        group: group_index,
                        route: route_index,
                        index,
                        source,
                    });
                }
            }
        }
    }

    let level = manifest.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            manifest.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Dot-separated, non-empty segments of `[A-Za-z0-9_-]`.
fn is_valid_scope(scope: &str) -> bool {
    !scope.is_empty()
        && scope.split('.').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        })
}
