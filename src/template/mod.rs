//! Placeholder analysis for prompt templates.
//!
//! Prompt bodies carry fill-in variables written as `{{name}}` or
//! `{{name|default}}`. This module holds the pure functions that the build
//! pipeline runs over a prompt body:
//!
//! - [`scan`] - ordered, deduplicated placeholder discovery
//! - [`classify`] - which variables deserve a multiline input
//! - [`to_form_syntax`] / [`to_plain_var_syntax`] - rewrites for the two
//!   output dialects
//!
//! Nothing here touches the filesystem, and no state survives between calls.
//!
//! # Syntax
//!
//! - `{{name}}` - variable `name`, no default
//! - `{{name|text}}` - variable `name` with default `text` (`text` may not
//!   contain `}`; an empty default counts as no default)
//!
//! Names are ASCII word characters (`[A-Za-z0-9_]`).

mod multiline;
mod scanner;
mod transform;


use regex::Regex;
use std::sync::LazyLock;

pub use multiline::{classify, multiline_names};
pub use scanner::{Placeholder, scan};
pub use transform::{to_form_syntax, to_plain_var_syntax, transform};

/// Matches one placeholder. Group 1 is the name, group 2 the optional default.
pub(crate) static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z0-9_]+)(?:\|([^}]*))?\}\}").expect("Invalid placeholder regex")
});
