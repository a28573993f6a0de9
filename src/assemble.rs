//! Turning prompt records into package entries.
//!
//! [`assemble`] merges three sources of field metadata for each variable:
//! the record's explicit `form_fields`, the multiline classifier, and the
//! default embedded in the placeholder. Precedence:
//!
//! - `multiline` is true if declared true or if the classifier flags it
//! - `default` comes from the declaration first, then the placeholder
//!
//! A declared default silently wins over a different embedded default.

use crate::config::Dialect;
use crate::prompt::PromptRecord;
use crate::template::{classify, scan, transform};
use log::debug;

/// Merged metadata for one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Variable name.
    pub name: String,
    /// Default value, never empty when present.
    pub default_value: Option<String>,
    /// Whether the input accepts multiple lines.
    pub multiline: bool,
}

/// The text an entry expands to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryBody {
    /// No variables: the prompt verbatim.
    Replace(String),
    /// Variables rewritten for `dialect`.
    Template { dialect: Dialect, text: String },
}

/// One snippet in the generated package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputEntry {
    pub trigger: String,
    pub label: String,
    pub body: EntryBody,
    /// Fields carrying explicit metadata, in discovery order.
    pub fields: Vec<FieldDescriptor>,
    /// Every variable name in discovery order.
    pub variables: Vec<String>,
}

impl OutputEntry {
    /// Metadata for `name`, if the field carries any.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Build the package entry for `record` in the given dialect.
pub fn assemble(record: &PromptRecord, dialect: Dialect) -> OutputEntry {
    let placeholders = scan(&record.prompt);
    let label = record.display_label().to_string();

    if placeholders.is_empty() {
        return OutputEntry {
            trigger: record.trigger.clone(),
            label,
            body: EntryBody::Replace(record.prompt.clone()),
            fields: Vec::new(),
            variables: Vec::new(),
        };
    }

    let multiline = classify(&record.prompt);
    let mut fields = Vec::new();

    for placeholder in &placeholders {
        let declared = record.form_fields.get(&placeholder.name);

        let mut field = FieldDescriptor {
            name: placeholder.name.clone(),
            default_value: declared
                .and_then(|d| d.default.clone())
                .filter(|d| !d.is_empty()),
            multiline: declared.and_then(|d| d.multiline).unwrap_or(false),
        };
        field.multiline |= multiline.contains(&placeholder.name);
        if field.default_value.is_none() {
            field.default_value = placeholder.default_value.clone();
        }

        if declared.is_some() || field.multiline || field.default_value.is_some() {
            fields.push(field);
        } else {
            debug!("{}: '{}' needs no field metadata", record.trigger, placeholder.name);
        }
    }

    OutputEntry {
        trigger: record.trigger.clone(),
        label,
        body: EntryBody::Template {
            dialect,
            text: transform(&record.prompt, dialect),
        },
        fields,
        variables: placeholders.into_iter().map(|p| p.name).collect(),
    }
}
