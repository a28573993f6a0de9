//! YAML emission helpers shared by the package and prompt-file writers.
//!
//! Document bodies are serialized with `serde_yaml`. Only the comment lines
//! that frame them are written by hand.

use crate::error::{PackError, Result};
use serde::Serialize;

/// Serialize `value` as a YAML document body (no `---` marker).
///
/// `what` names the document in the error message.
pub fn to_yaml<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<String> {
    serde_yaml::to_string(value)
        .map_err(|e| PackError::UserError(format!("failed to serialize {}: {}", what, e)))
}

/// Text that can follow `# ` on a single comment line.
///
/// Line breaks and other control characters become spaces.
pub fn comment_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
