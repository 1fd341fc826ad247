//! Route declarations and where they come from.

use serde::{Deserialize, Serialize};

use crate::routing::method::RequestMethod;
use crate::routing::tag::Tag;

/// One declared route, as extracted by a discovery collaborator.
///
/// Empty template lists stand for a single empty template; an empty method
/// list stands for every method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteDeclaration {
    /// Dotted home of the declaration, e.g. `app.web.admin`.
    pub scope: String,
    pub group_templates: Vec<String>,
    pub route_templates: Vec<String>,
    pub methods: Vec<RequestMethod>,
    pub group_tags: Vec<Tag>,
    pub route_tags: Vec<Tag>,
    pub parameter_tags: Vec<Vec<Tag>>,
}

impl RouteDeclaration {
    pub fn new<I, S>(route_templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            route_templates: route_templates.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn in_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn under<I, S>(mut self, group_templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_templates = group_templates.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_methods(mut self, methods: impl IntoIterator<Item = RequestMethod>) -> Self {
        self.methods = methods.into_iter().collect();
        self
    }

    pub fn with_group_tags(mut self, tags: Vec<Tag>) -> Self {
        self.group_tags = tags;
        self
    }

    pub fn with_route_tags(mut self, tags: Vec<Tag>) -> Self {
        self.route_tags = tags;
        self
    }

    pub fn with_parameter_tags(mut self, tags: Vec<Vec<Tag>>) -> Self {
        self.parameter_tags = tags;
        self
    }
}

/// Discovery collaborator: anything that can list route declarations.
pub trait RouteSource {
    fn declarations(&self) -> Vec<RouteDeclaration>;
}

impl RouteSource for [RouteDeclaration] {
    fn declarations(&self) -> Vec<RouteDeclaration> {
        self.to_vec()
    }
}

impl RouteSource for Vec<RouteDeclaration> {
    fn declarations(&self) -> Vec<RouteDeclaration> {
        self.clone()
    }
}

/// Whether `scope` is `base` itself or nested under it.
///
/// `app.web` covers `app.web.admin` but not `app.website`.
pub fn scope_within(scope: &str, base: &str) -> bool {
    match scope.strip_prefix(base) {
        Some("") => true,
        Some(rest) => rest.starts_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_within() {
        assert!(scope_within("app.web", "app.web"));
        assert!(scope_within("app.web.admin", "app.web"));
        assert!(!scope_within("app.website", "app.web"));
        assert!(!scope_within("app", "app.web"));
    }

    #[test]
    fn test_builder_fills_fields() {
        let declaration = RouteDeclaration::new(["/a"])
            .in_scope("app")
            .under(["/b"])
            .with_methods([RequestMethod::Post]);
        assert_eq!(declaration.scope, "app");
        assert_eq!(declaration.group_templates, vec!["/b".to_string()]);
        assert_eq!(declaration.route_templates, vec!["/a".to_string()]);
        assert_eq!(declaration.methods, vec![RequestMethod::Post]);
        assert!(declaration.route_tags.is_empty());
    }
}
