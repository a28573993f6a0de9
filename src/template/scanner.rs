//! Ordered placeholder discovery.

use super::PLACEHOLDER_REGEX;
use std::collections::HashSet;

/// A variable referenced by a prompt template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Variable name.
    pub name: String,
    /// Default embedded at the first occurrence, if any and non-empty.
    pub default_value: Option<String>,
}

/// Extract placeholders from `template` in first-occurrence order.
///
/// Each name appears once. A repeated name is skipped entirely, so a default
/// attached to a later occurrence never replaces the first one.
///
/// # Example
///
/// ```text
/// scan("{{a}} {{b|x}} {{a|y}}") == [a (no default), b (default "x")]
/// ```
pub fn scan(template: &str) -> Vec<Placeholder> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut placeholders = Vec::new();

    for caps in PLACEHOLDER_REGEX.captures_iter(template) {
        let Some(name) = caps.get(1).map(|m| m.as_str()) else {
            continue;
        };
        if !seen.insert(name) {
            continue;
        }

        let default_value = caps
            .get(2)
            .map(|m| m.as_str())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        placeholders.push(Placeholder {
            name: name.to_string(),
            default_value,
        });
    }

    placeholders
}
