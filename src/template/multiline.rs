//! Multiline field detection.
//!
//! A variable that sits alone on its own line (surrounding whitespace
//! allowed) is expected to receive a block of text, so its form field should
//! accept multiple lines. Inline variables stay single-line.

use super::PLACEHOLDER_REGEX;
use super::scanner::scan;
use std::collections::HashSet;

/// Return the names of variables that occupy a whole template line by
/// themselves on at least one line.
///
/// A line holding two or more placeholders never marks anything, even when
/// it holds nothing else.
pub fn classify(template: &str) -> HashSet<String> {
    let mut names = HashSet::new();

    for line in template.lines() {
        let trimmed = line.trim();
        let mut matches = PLACEHOLDER_REGEX.captures_iter(trimmed);

        let (Some(only), None) = (matches.next(), matches.next()) else {
            continue;
        };
        let Some(whole) = only.get(0) else {
            continue;
        };

        let rest = format!("{}{}", &trimmed[..whole.start()], &trimmed[whole.end()..]);
        if rest.trim().is_empty()
            && let Some(name) = only.get(1)
        {
            names.insert(name.as_str().to_string());
        }
    }

    names
}

/// Multiline variable names in discovery order.
pub fn multiline_names(template: &str) -> Vec<String> {
    let multiline = classify(template);
    scan(template)
        .into_iter()
        .map(|p| p.name)
        .filter(|name| multiline.contains(name))
        .collect()
}
