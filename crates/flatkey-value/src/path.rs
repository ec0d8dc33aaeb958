/// Joins a parent path and a child name with a dot.
///
/// Returns whichever side is non-empty when the other is empty, and the
/// empty string when both are.
pub fn join_path(root: &str, key: &str) -> String {
    match (root.is_empty(), key.is_empty()) {
        (false, false) => format!("{}.{}", root, key),
        (false, true) => root.to_string(),
        (true, false) => key.to_string(),
        (true, true) => String::new(),
    }
}

/// Formats one flat entry from a path and an already-encoded value.
///
/// Bracket decoration marks a terminal that was a direct element of an
/// enclosing sequence with no intervening mapping or record boundary.
pub fn format_entry(path: &str, encoded: &str, in_array: bool) -> String {
    if in_array {
        format!("{}:[{}]", path, encoded)
    } else {
        format!("{}:{}", path, encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_concatenates_non_empty_parts() {
        assert_eq!(join_path("a", "b"), "a.b");
        assert_eq!(join_path("a.b", "c"), "a.b.c");
    }

    #[test]
    fn join_passes_through_a_single_part() {
        assert_eq!(join_path("a", ""), "a");
        assert_eq!(join_path("", "b"), "b");
        assert_eq!(join_path("", ""), "");
    }

    #[test]
    fn entries_bracket_only_in_array_context() {
        assert_eq!(format_entry("p", "1", false), "p:1");
        assert_eq!(format_entry("p", "1", true), "p:[1]");
        assert_eq!(format_entry("", "[null]", true), ":[[null]]");
    }
}
