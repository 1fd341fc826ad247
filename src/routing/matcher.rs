//! Compiled matcher patterns.
//!
//! # Responsibilities
//! - Hold the translated fragment of a resolved path
//! - Test request paths against it as a whole-string match
//!
//! # Design Decisions
//! - Identity is the fragment text; the compiled regex is derived from it
//! - Matching is anchored at both ends
//! - Case-sensitive, like the literal comparison it complements

use std::fmt;
use std::hash::{Hash, Hasher};

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::template::{to_matcher_fragment, TemplateError};

/// A translated route pattern and its compiled, anchored regex.
#[derive(Debug, Clone)]
pub struct MatcherPattern {
    source: String,
    regex: Regex,
}

impl MatcherPattern {
    /// Compiles an already-translated fragment.
    pub fn new(source: impl Into<String>) -> Result<Self, TemplateError> {
        let source = source.into();
        let regex = Regex::new(&format!("^(?:{source})$")).map_err(|e| {
            TemplateError::InvalidPattern {
                pattern: source.clone(),
                message: e.to_string(),
            }
        })?;
        Ok(Self { source, regex })
    }

    /// Translates a resolved path and compiles the result.
    pub fn from_resolved_path(resolved_path: &str) -> Result<Self, TemplateError> {
        Self::new(to_matcher_fragment(resolved_path)?)
    }

    /// The fragment text, without anchors.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the whole of `path` matches.
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

impl PartialEq for MatcherPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for MatcherPattern {}

impl Hash for MatcherPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

impl fmt::Display for MatcherPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Serialize for MatcherPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_is_anchored() {
        let pattern = MatcherPattern::from_resolved_path("/home/{x}").unwrap();
        assert!(pattern.matches("/home/index"));
        assert!(pattern.matches("home/index/"));
        assert!(!pattern.matches("/prefix/home/index"));
        assert!(!pattern.matches("/home/index/more"));
    }

    #[test]
    fn test_alternation_stays_inside_anchors() {
        let pattern = MatcherPattern::new("a|b").unwrap();
        assert!(pattern.matches("a"));
        assert!(!pattern.matches("ab"));
    }

    #[test]
    fn test_equality_by_source() {
        let a = MatcherPattern::new("/?a/?").unwrap();
        let b = MatcherPattern::from_resolved_path("/a").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, MatcherPattern::new("/?b/?").unwrap());
    }

    #[test]
    fn test_invalid_fragment_rejected() {
        assert!(matches!(
            MatcherPattern::new("(unclosed"),
            Err(TemplateError::InvalidPattern { .. })
        ));
    }
}
