//! Workspace ordering
//!
//! i3 and sway let users mix numbered workspaces (`1`, `2`, ...) with named
//! ones (`mail`, `web`). The panel ordering this crate replicates puts the
//! named block first, sorted in descending lexicographic order, followed by
//! the numbered block in descending numeric order. The ordering looks odd on
//! paper but is what existing consumers lay out on screen, so it is kept
//! exactly as is.

use std::cmp::Ordering;

use crate::workspace::Workspace;

/// Parse a workspace name as a number
///
/// A name counts as numeric when the whole string parses as a non-negative
/// base-10 integer without overflow. Everything else — empty names, negative
/// numbers, trailing garbage like `"3x"` — is a named workspace.
///
/// # Example
///
/// ```
/// use sway_workspaces::parse_number;
///
/// assert_eq!(parse_number("42"), Some(42));
/// assert_eq!(parse_number("mail"), None);
/// ```
pub fn parse_number(name: &str) -> Option<i64> {
    name.parse::<i64>().ok().filter(|n| *n >= 0)
}

/// Compare two workspace names under the panel ordering
pub(crate) fn name_order(a: &str, b: &str) -> Ordering {
    match (parse_number(a), parse_number(b)) {
        // named block: descending lexicographic
        (None, None) => b.cmp(a),
        // named sorts before numeric
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        // numeric block: descending numeric
        (Some(na), Some(nb)) => nb.cmp(&na),
    }
}

/// Compare two workspaces by name under the panel ordering
///
/// This is the comparator [`WorkspaceList`](crate::WorkspaceList) keeps its
/// entries sorted by, exported so consumers can merge their own data into
/// the same order.
pub fn compare(a: &Workspace, b: &Workspace) -> Ordering {
    name_order(&a.name, &b.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_positive_parse_as_numbers() {
        assert_eq!(parse_number("0"), Some(0));
        assert_eq!(parse_number("42"), Some(42));
    }

    #[test]
    fn test_non_numbers_parse_as_names() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("-5"), None);
        assert_eq!(parse_number("3x"), None);
        assert_eq!(parse_number("abc"), None);
    }

    #[test]
    fn test_overflow_parses_as_name() {
        assert_eq!(parse_number("99999999999999999999999999"), None);
    }

    #[test]
    fn test_named_sorts_before_numeric() {
        assert_eq!(name_order("mail", "1"), Ordering::Less);
        assert_eq!(name_order("1", "mail"), Ordering::Greater);
    }

    #[test]
    fn test_named_block_is_descending_lexicographic() {
        assert_eq!(name_order("web", "chat"), Ordering::Less);
        assert_eq!(name_order("chat", "web"), Ordering::Greater);
        assert_eq!(name_order("web", "web"), Ordering::Equal);
    }

    #[test]
    fn test_numeric_block_is_descending() {
        assert_eq!(name_order("3", "1"), Ordering::Less);
        assert_eq!(name_order("1", "3"), Ordering::Greater);
        assert_eq!(name_order("7", "7"), Ordering::Equal);
    }

    #[test]
    fn test_ordering_law() {
        let mut names = vec!["1", "web", "3", "chat"];
        names.sort_by(|a, b| name_order(a, b));
        assert_eq!(names, vec!["web", "chat", "3", "1"]);
    }

    #[test]
    fn test_compare_uses_names_only() {
        let a = Workspace::named("web", "DP-1");
        let mut b = Workspace::named("chat", "HDMI-1");
        b.urgent = true;
        assert_eq!(compare(&a, &b), Ordering::Less);
        assert_eq!(compare(&b, &a), Ordering::Greater);
    }
}
