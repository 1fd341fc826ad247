//! Regex special-character escaping with protected spans.
//!
//! # Responsibilities
//! - Escape every regex special character of a path
//! - Leave characters inside matches of protected patterns untouched
//!
//! # Design Decisions
//! - One match cursor per protected pattern, local to each call
//! - Cursors only move forward; a full scan advances each at most once per match
//! - Zero-length matches never protect anything

use regex::{Match, Matches, Regex};

/// Characters with a meaning in regular expressions.
pub const SPECIAL_CHARACTERS: &[char] = &[
    '\\', '[', '.', ']', '{', '}', '(', ')', '*', '+', '-', '?', '^', '$', '|',
];

/// Forward-only view over the matches of one protected pattern.
struct Cursor<'r, 'h> {
    matches: Matches<'r, 'h>,
    current: Option<Match<'h>>,
}

impl<'r, 'h> Cursor<'r, 'h> {
    fn new(pattern: &'r Regex, input: &'h str) -> Self {
        let mut matches = pattern.find_iter(input);
        let current = matches.next();
        Self { matches, current }
    }

    fn covers(&self, index: usize) -> bool {
        self.current
            .is_some_and(|m| m.start() <= index && index < m.end())
    }

    fn is_behind(&self, index: usize) -> bool {
        self.current.is_some_and(|m| m.end() <= index)
    }

    fn advance(&mut self) {
        self.current = self.matches.next();
    }
}

fn is_protected(cursors: &mut [Cursor<'_, '_>], index: usize) -> bool {
    loop {
        let mut advanced = false;
        for cursor in cursors.iter_mut() {
            if cursor.is_behind(index) {
                cursor.advance();
                advanced = true;
            }
            if cursor.covers(index) {
                return true;
            }
        }
        if !advanced {
            return false;
        }
    }
}

/// Returns `input` with every regex special character escaped, except those
/// lying inside a match of one of `protected`.
pub fn escape_special_characters(input: &str, protected: &[&Regex]) -> String {
    let mut cursors: Vec<Cursor<'_, '_>> = protected
        .iter()
        .map(|pattern| Cursor::new(pattern, input))
        .collect();

    let mut escaped = String::with_capacity(input.len() + input.len() / 4);
    for (index, ch) in input.char_indices() {
        if SPECIAL_CHARACTERS.contains(&ch) && !is_protected(&mut cursors, index) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    #[test]
    fn test_no_protection_escapes_everything() {
        assert_eq!(
            escape_special_characters("a+b-c?.json", &[]),
            r"a\+b\-c\?\.json"
        );
        assert_eq!(
            escape_special_characters(r"\[.]{}()*+-?^$|", &[]),
            r"\\\[\.\]\{\}\(\)\*\+\-\?\^\$\|"
        );
    }

    #[test]
    fn test_absent_protected_patterns_change_nothing() {
        let var = re(r"\{[^}]+\}");
        let star = re(r"\*\*");
        assert_eq!(
            escape_special_characters("a+b-c?.json", &[&var, &star]),
            r"a\+b\-c\?\.json"
        );
    }

    #[test]
    fn test_protected_spans_copied_verbatim() {
        let var = re(r"\{[^}]+\}");
        let star = re(r"\*");
        let question = re(r"\?");
        assert_eq!(
            escape_special_characters("/a.{x.y}/*/b?.c", &[&var, &star, &question]),
            r"/a\.{x.y}/*/b?\.c"
        );
    }

    #[test]
    fn test_cursor_advances_past_several_matches() {
        let var = re(r"\{[^}]+\}");
        assert_eq!(
            escape_special_characters("{a}{b}{c}.+", &[&var]),
            r"{a}{b}{c}\.\+"
        );
        assert_eq!(
            escape_special_characters("{a}.{b}.{c}", &[&var]),
            r"{a}\.{b}\.{c}"
        );
    }

    #[test]
    fn test_zero_length_match_never_protects() {
        let empty = re(r"x*");
        assert_eq!(escape_special_characters("a.b", &[&empty]), r"a\.b");
    }

    #[test]
    fn test_multibyte_input() {
        let var = re(r"\{[^}]+\}");
        assert_eq!(
            escape_special_characters("/café/{ñ}.html", &[&var]),
            r"/café/{ñ}\.html"
        );
    }
}
