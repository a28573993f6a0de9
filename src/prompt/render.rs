//! Rendering prompt records back to prompt-file YAML.

use super::PromptRecord;
use crate::error::Result;
use crate::template::multiline_names;
use crate::yaml::{comment_text, to_yaml};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Who contributed a prompt, recorded as a header comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    /// Issue number the prompt was submitted through.
    pub issue_number: u64,
    /// Contributor handle, e.g. `@octocat`.
    pub contributor: String,
}

#[derive(Serialize)]
struct PromptFile<'a> {
    trigger: &'a str,
    label: &'a str,
    description: &'a str,
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    form_fields: Option<MultilineFields>,
}

/// `name: { multiline: true }` per name, in the given order.
struct MultilineFields(Vec<String>);

#[derive(Serialize)]
struct MultilineFlag {
    multiline: bool,
}

impl Serialize for MultilineFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for name in &self.0 {
            map.serialize_entry(name, &MultilineFlag { multiline: true })?;
        }
        map.end()
    }
}

/// Render a prompt file for `record`.
///
/// Variables that sit alone on a line get a `form_fields` entry with
/// `multiline: true`, in discovery order. Explicit `form_fields` already on
/// the record are not rendered.
pub fn render_prompt_file(
    record: &PromptRecord,
    contribution: Option<&Contribution>,
) -> Result<String> {
    let multiline = multiline_names(&record.prompt);
    let file = PromptFile {
        trigger: &record.trigger,
        label: &record.label,
        description: &record.description,
        prompt: &record.prompt,
        form_fields: (!multiline.is_empty()).then(|| MultilineFields(multiline)),
    };

    let mut output = String::new();
    if let Some(c) = contribution {
        output.push_str(&format!("# Contributed via issue #{}\n", c.issue_number));
        output.push_str(&format!("# Contributor: {}\n", comment_text(&c.contributor)));
        output.push('\n');
    }
    output.push_str(&to_yaml(&file, "prompt file")?);
    Ok(output)
}
