//! Component path parsing.
//!
//! A component path such as `Design System|Forms/Inputs.Text` consists of an
//! optional root (before the root separator) followed by groups.

use crate::parameters::Separator;

/// A component path split into root and groups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedKind {
    /// Root segment, present only when the root separator occurs.
    pub root: Option<String>,
    /// Non-empty group segments in path order.
    pub groups: Vec<String>,
}

/// Split a component path into its root and groups.
///
/// The text before the first `root_separator` is the root. The text up to
/// the next `root_separator` (or the whole path when the separator is
/// absent) is split on `group_separator`, and empty segments are dropped.
/// Anything after a second root separator is ignored.
///
/// # Example
///
/// ```
/// use storydocs_core::{Separator, parse_kind};
///
/// let parsed = parse_kind("Kit|Forms/Input", "|", &Separator::default());
/// assert_eq!(parsed.root.as_deref(), Some("Kit"));
/// assert_eq!(parsed.groups, vec!["Forms", "Input"]);
/// ```
#[must_use]
pub fn parse_kind(kind: &str, root_separator: &str, group_separator: &Separator) -> ParsedKind {
    let (root, remainder) = if root_separator.is_empty() {
        (None, kind)
    } else {
        let mut parts = kind.splitn(3, root_separator);
        match (parts.next(), parts.next()) {
            (Some(root), Some(rest)) => (Some(root.to_owned()), rest),
            _ => (None, kind),
        }
    };

    let groups = group_separator
        .split(remainder)
        .into_iter()
        .filter(|group| !group.is_empty())
        .map(str::to_owned)
        .collect();

    ParsedKind { root, groups }
}
