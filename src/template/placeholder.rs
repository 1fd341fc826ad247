//! `${key}` / `${key:default}` substitution.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::template::error::TemplateError;
use crate::template::scan::{scan, Segment};

/// Source of configuration values for placeholders.
///
/// Implementations must be total: a missing key yields `default`.
pub trait PropertySource {
    /// Returns the value bound to `key`, or `default` when there is none.
    fn property(&self, key: &str, default: &str) -> String;
}

impl<F> PropertySource for F
where
    F: Fn(&str, &str) -> String,
{
    fn property(&self, key: &str, default: &str) -> String {
        self(key, default)
    }
}

impl<S: BuildHasher> PropertySource for HashMap<String, String, S> {
    fn property(&self, key: &str, default: &str) -> String {
        self.get(key).map_or_else(|| default.to_string(), Clone::clone)
    }
}

impl PropertySource for BTreeMap<String, String> {
    fn property(&self, key: &str, default: &str) -> String {
        self.get(key).map_or_else(|| default.to_string(), Clone::clone)
    }
}

/// Replaces every placeholder of `template`, left to right, with the value
/// `properties` returns for it.
///
/// Substituted values are copied as-is: a value that itself looks like a
/// placeholder is not expanded again.
pub fn resolve_placeholders<P>(template: &str, properties: &P) -> Result<String, TemplateError>
where
    P: PropertySource + ?Sized,
{
    let mut resolved = String::with_capacity(template.len());
    for segment in scan(template, true)? {
        match segment {
            Segment::Placeholder { key, default } => {
                resolved.push_str(&properties.property(key, default));
            }
            Segment::Literal(text) | Segment::Variable(text) => resolved.push_str(text),
        }
    }
    Ok(resolved)
}
