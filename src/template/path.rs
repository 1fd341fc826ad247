//! Path joining.

/// Separator used between route path segments.
pub const SEPARATOR: char = '/';

/// Joins path segments with [`SEPARATOR`].
pub fn join_paths<S: AsRef<str>>(segments: &[S]) -> String {
    join_paths_with(SEPARATOR, segments)
}

/// Joins path segments with `separator`.
///
/// Empty segments are dropped. At every join point the separators ending the
/// left segment and starting the right one collapse into exactly one;
/// repeated separators inside a segment are kept.
pub fn join_paths_with<S: AsRef<str>>(separator: char, segments: &[S]) -> String {
    let mut parts: Vec<String> = segments
        .iter()
        .map(AsRef::as_ref)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    for i in 1..parts.len() {
        let kept = parts[i - 1].trim_end_matches(separator).len();
        parts[i - 1].truncate(kept);

        let body = parts[i].trim_start_matches(separator);
        parts[i] = format!("{separator}{body}");
    }

    parts.concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_collapses_separators_at_join_point() {
        assert_eq!(join_paths(&["/home", "/index"]), "/home/index");
        assert_eq!(join_paths(&["/home/", "index"]), "/home/index");
        assert_eq!(join_paths(&["/home//", "//index"]), "/home/index");
        assert_eq!(join_paths(&["/home", "index"]), "/home/index");
    }

    #[test]
    fn test_empty_segments_dropped() {
        assert_eq!(join_paths(&["", "/index"]), "/index");
        assert_eq!(join_paths(&["/b", ""]), "/b");
        assert_eq!(join_paths(&["", ""]), "");
        assert_eq!(join_paths::<&str>(&[]), "");
    }

    #[test]
    fn test_inner_doubled_separators_untouched() {
        assert_eq!(join_paths(&["/a//b", "c//d/"]), "/a//b/c//d/");
    }

    #[test]
    fn test_separator_only_segment() {
        assert_eq!(join_paths(&["/a", "/", "b"]), "/a/b");
        assert_eq!(join_paths(&["/", "/home"]), "/home");
        assert_eq!(join_paths(&["/home", "/"]), "/home/");
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(join_paths_with('.', &["app.", ".web", "admin"]), "app.web.admin");
    }
}
