//! Placeholder rewriting for the output dialects.

use super::PLACEHOLDER_REGEX;
use crate::config::Dialect;

/// Rewrite every placeholder as `[[name]]`, the form shorthand.
///
/// Each occurrence is rewritten on its own; text between placeholders is
/// left untouched.
pub fn to_form_syntax(template: &str) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, "[[${1}]]")
        .into_owned()
}

/// Rewrite every placeholder as a bare `{{name}}`, dropping embedded defaults.
pub fn to_plain_var_syntax(template: &str) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, "{{${1}}}")
        .into_owned()
}

/// Rewrite placeholders for the given output dialect.
pub fn transform(template: &str, dialect: Dialect) -> String {
    match dialect {
        Dialect::Form => to_form_syntax(template),
        Dialect::Vars => to_plain_var_syntax(template),
    }
}
