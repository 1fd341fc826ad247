//! Wildcard and path-variable translation into matcher fragments.
//!
//! | Token    | Fragment | Meaning                               |
//! |----------|----------|---------------------------------------|
//! | `{name}` | `[^/]+`  | one non-empty segment                 |
//! | `**`     | `.*`     | anything, across segments             |
//! | `*`      | `[^/]*`  | zero or more characters of a segment  |
//! | `?`      | `.`      | exactly one character                 |
//!
//! `**` is first rewritten to `."` so the single-star pass cannot mistake the
//! inserted star for one written in the template; the quote becomes `*` last.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::template::error::TemplateError;
use crate::template::escape::escape_special_characters;
use crate::template::scan::scan;

const ONE_SEGMENT: &str = "[^/]+";
const PARTIAL_SEGMENT: &str = "[^/]*";
const ANY_CHARACTER: &str = ".";
const ANY_PATH: &str = ".\"";
const SENTINEL: char = '"';

static PATH_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]+\}").expect("path variable pattern"));
static DOUBLE_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*").expect("double star pattern"));
static SINGLE_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*").expect("single star pattern"));
static QUESTION_MARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?").expect("question mark pattern"));

/// Translates a resolved path (no `${...}` left) into a matcher fragment.
///
/// The fragment accepts the path with or without its leading slash, and with
/// or without a trailing slash unless the path already ends in one.
pub fn to_matcher_fragment(resolved_path: &str) -> Result<String, TemplateError> {
    scan(resolved_path, false)?;
    if let Some(offset) = resolved_path.find(SENTINEL) {
        return Err(TemplateError::ReservedCharacter {
            template: resolved_path.to_string(),
            offset,
        });
    }

    let escaped = escape_special_characters(
        resolved_path,
        &[&*PATH_VARIABLE, &*DOUBLE_STAR, &*SINGLE_STAR, &*QUESTION_MARK],
    );
    let fragment = PATH_VARIABLE.replace_all(&escaped, NoExpand(ONE_SEGMENT));
    let fragment = DOUBLE_STAR.replace_all(&fragment, NoExpand(ANY_PATH));
    let fragment = SINGLE_STAR.replace_all(&fragment, NoExpand(PARTIAL_SEGMENT));
    let fragment = QUESTION_MARK.replace_all(&fragment, NoExpand(ANY_CHARACTER));
    let fragment = fragment.replace(SENTINEL, "*");

    Ok(with_optional_slashes(&fragment))
}

fn with_optional_slashes(fragment: &str) -> String {
    let body = fragment.strip_prefix('/').unwrap_or(fragment);
    let mut pattern = format!("/?{body}");
    if !pattern.ends_with('/') {
        pattern.push_str("/?");
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_match(fragment: &str, path: &str) -> bool {
        Regex::new(&format!("^(?:{fragment})$")).unwrap().is_match(path)
    }

    #[test]
    fn test_ant_style_template() {
        assert_eq!(
            to_matcher_fragment("/ant/{aaa}/**/*/a+b-c?.json").unwrap(),
            r"/?ant/[^/]+/.*/[^/]*/a\+b\-c.\.json/?"
        );
    }

    #[test]
    fn test_literal_path() {
        assert_eq!(to_matcher_fragment("/home/index").unwrap(), "/?home/index/?");
        assert_eq!(to_matcher_fragment("home/index").unwrap(), "/?home/index/?");
    }

    #[test]
    fn test_trailing_slash_kept_mandatory() {
        assert_eq!(
            to_matcher_fragment("/home/index/{ph1}/").unwrap(),
            "/?home/index/[^/]+/"
        );
    }

    #[test]
    fn test_every_star_translated_once() {
        assert_eq!(
            to_matcher_fragment("/a/*/b/*").unwrap(),
            "/?a/[^/]*/b/[^/]*/?"
        );
        assert_eq!(to_matcher_fragment("/**/x/**").unwrap(), "/?.*/x/.*/?");
        assert_eq!(to_matcher_fragment("/a/***").unwrap(), "/?a/.*[^/]*/?");
    }

    #[test]
    fn test_variable_content_not_escaped() {
        assert_eq!(to_matcher_fragment("/{a.b*}").unwrap(), "/?[^/]+/?");
    }

    #[test]
    fn test_optional_slashes() {
        let fragment = to_matcher_fragment("/home/index").unwrap();
        for path in ["home/index", "/home/index", "home/index/", "/home/index/"] {
            assert!(full_match(&fragment, path), "{path} should match");
        }
        assert!(!full_match(&fragment, "/home/index/x"));
        assert!(!full_match(&fragment, "/home/indexx"));
    }

    #[test]
    fn test_wildcard_semantics() {
        let fragment = to_matcher_fragment("/files/**/*.txt").unwrap();
        assert!(full_match(&fragment, "/files/a/b/c.txt"));
        assert!(full_match(&fragment, "/files//c.txt"));
        assert!(!full_match(&fragment, "/files/a/b/c.txt.bak"));

        let fragment = to_matcher_fragment("/v?/items").unwrap();
        assert!(full_match(&fragment, "/v1/items"));
        assert!(!full_match(&fragment, "/v10/items"));
    }

    #[test]
    fn test_rejects_sentinel_and_bad_braces() {
        assert!(matches!(
            to_matcher_fragment("/a\"b"),
            Err(TemplateError::ReservedCharacter { offset: 2, .. })
        ));
        assert!(matches!(
            to_matcher_fragment("/a/{b"),
            Err(TemplateError::UnclosedPathVariable { .. })
        ));
    }
}
