//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::io::Write;

use route_resolver::config::{parse_config, RouteManifest};
use route_resolver::RoutingTable;
use tempfile::NamedTempFile;

/// Three controllers exercising placeholders, path variables, wildcards,
/// method expansion and the three tag levels.
pub const FIXTURE_MANIFEST: &str = r#"
use_environment = false

[properties]
"test.var.1" = "haha"
"test.var.3" = "yoyo"

[[groups]]
scope = "app.controller"
paths = ["/home"]
tags = ["home_tag"]

[[groups.routes]]
paths = ["/index", "/index/{ph1}/"]
methods = ["GET"]

[[groups.routes]]
paths = ["/index/${test.var.1}"]
methods = ["GET", "POST", "DELETE", "PUT", "PATCH"]

[[groups.routes]]
paths = ["/index/${test.var.2:yaya}"]
methods = ["GET"]

[[groups]]
scope = "app.controller2.ctrl"
paths = ["/b"]
tags = ["type_tag"]

[[groups.routes]]
paths = ["/a"]
methods = ["POST"]

[[groups.routes]]
tags = ["method_tag"]

[[groups.routes]]
paths = ["/c/{cc}"]
methods = ["PUT"]
parameters = [["path_variable"]]

[[groups]]
scope = "app.controller3"

[[groups.routes]]
paths = ["/ant/${test.var.1}/${test.var.3}/{aaa}/**/*/a+b-c?.json"]
methods = ["GET"]
"#;

pub fn fixture_manifest() -> RouteManifest {
    parse_config(FIXTURE_MANIFEST).unwrap()
}

pub fn fixture_table() -> RoutingTable {
    fixture_manifest().build_table().unwrap()
}

/// Write `content` to a temporary `.toml` file.
pub fn write_manifest(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
