//! Placeholder values from the manifest and the process environment.

use std::collections::BTreeMap;

use crate::template::PropertySource;

/// Manifest `[properties]` layered over environment variables.
///
/// A key is looked up in the manifest first, then as an environment variable
/// spelled as-is, then in upper snake case (`test.var.1` → `TEST_VAR_1`).
#[derive(Debug, Clone)]
pub struct Properties {
    values: BTreeMap<String, String>,
    use_environment: bool,
}

impl Properties {
    pub fn new(values: BTreeMap<String, String>) -> Self {
        Self {
            values,
            use_environment: true,
        }
    }

    /// Stop consulting environment variables.
    pub fn without_environment(mut self) -> Self {
        self.use_environment = false;
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        if let Some(value) = self.values.get(key) {
            return Some(value.clone());
        }
        if !self.use_environment || !is_env_name(key) {
            return None;
        }
        std::env::var(key)
            .ok()
            .or_else(|| std::env::var(env_name(key)).ok())
    }
}

impl Default for Properties {
    fn default() -> Self {
        Self::new(BTreeMap::new())
    }
}

impl PropertySource for Properties {
    fn property(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

fn is_env_name(key: &str) -> bool {
    !key.is_empty() && !key.contains(['=', '\0'])
}

fn env_name(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_value_then_default() {
        let properties: Properties = [("test.var.1", "haha")].into_iter().collect();
        let properties = properties.without_environment();
        assert_eq!(properties.property("test.var.1", "x"), "haha");
        assert_eq!(properties.property("test.var.2", "yaya"), "yaya");
        assert_eq!(properties.property("test.var.3", ""), "");
    }

    #[test]
    fn test_env_name() {
        assert_eq!(env_name("test.var.1"), "TEST_VAR_1");
        assert_eq!(env_name("server-port"), "SERVER_PORT");
    }

    #[test]
    fn test_environment_fallback() {
        // PATH is set in any test environment.
        let properties = Properties::default();
        assert_eq!(properties.get("PATH"), std::env::var("PATH").ok());
        assert_eq!(properties.clone().without_environment().get("PATH"), None);
        assert_eq!(properties.get("a=b"), None);
    }
}
