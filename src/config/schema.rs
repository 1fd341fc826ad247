//! Route manifest schema definitions.
//!
//! This module defines the structure of the TOML route manifest.
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::properties::Properties;
use crate::routing::{
    BuildError, Compilation, RequestMethod, RouteCompiler, RouteDeclaration, RouteSource,
    RoutingTable, Tag,
};

/// Root of a route manifest.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteManifest {
    /// Fail the whole build when any template is rejected.
    pub strict: bool,

    /// Base scopes to compile; empty compiles every group.
    pub scopes: Vec<String>,

    /// Values for `${key}` placeholders.
    pub properties: BTreeMap<String, String>,

    /// Also resolve placeholders from process environment variables.
    pub use_environment: bool,

    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Route groups.
    pub groups: Vec<GroupConfig>,
}

impl Default for RouteManifest {
    fn default() -> Self {
        Self {
            strict: false,
            scopes: Vec::new(),
            properties: BTreeMap::new(),
            use_environment: true,
            observability: ObservabilityConfig::default(),
            groups: Vec::new(),
        }
    }
}

/// A set of routes sharing grouping-level templates and tags.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GroupConfig {
    /// Dotted scope, e.g. `app.web.admin`.
    pub scope: String,

    /// Grouping-level templates, prefixed to every route template.
    pub paths: Vec<String>,

    /// Grouping-level tags.
    pub tags: Vec<Tag>,

    pub routes: Vec<RouteConfig>,
}

/// One declared route.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouteConfig {
    /// Route-level templates.
    pub paths: Vec<String>,

    /// Methods; empty means every method.
    pub methods: Vec<RequestMethod>,

    /// Route-level tags.
    pub tags: Vec<Tag>,

    /// One tag list per parameter position.
    pub parameters: Vec<Vec<Tag>>,
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl RouteManifest {
    /// Property lookup backing placeholder resolution.
    pub fn property_source(&self) -> Properties {
        let properties = Properties::new(self.properties.clone());
        if self.use_environment {
            properties
        } else {
            properties.without_environment()
        }
    }

    /// A compiler restricted to this manifest's base scopes.
    pub fn compiler(&self) -> RouteCompiler<Properties> {
        RouteCompiler::new(self.property_source()).with_base_scopes(self.scopes.iter().cloned())
    }

    /// Compiles every route of the manifest.
    pub fn compile(&self) -> Compilation {
        self.compiler().build(self)
    }

    /// Compiles the manifest, honouring `strict`.
    pub fn build_table(&self) -> Result<RoutingTable, BuildError> {
        let compilation = self.compile();
        if self.strict {
            compilation.into_strict()
        } else {
            Ok(compilation.table)
        }
    }
}

impl RouteSource for RouteManifest {
    fn declarations(&self) -> Vec<RouteDeclaration> {
        self.groups
            .iter()
            .flat_map(|group| {
                group.routes.iter().map(move |route| RouteDeclaration {
                    scope: group.scope.clone(),
                    group_templates: group.paths.clone(),
                    route_templates: route.paths.clone(),
                    methods: route.methods.clone(),
                    group_tags: group.tags.clone(),
                    route_tags: route.tags.clone(),
                    parameter_tags: route.parameters.clone(),
                })
            })
            .collect()
    }
}
