//! Output package rendering.
//!
//! Header comments are written by hand; the `matches:` document below them is
//! serialized with `serde_yaml` from the structs in this module, so field
//! order is fixed by declaration order (`trigger` and `label` lead).
//!
//! # Form dialect
//!
//! ```text
//! - trigger: ':review'
//!   label: Code review
//!   form: |-
//!     Review:
//!     [[code]]
//!   form_fields:
//!     code:
//!       multiline: true
//! ```
//!
//! # Vars dialect
//!
//! ```text
//! - trigger: ':review'
//!   label: Code review
//!   replace: |-
//!     Review:
//!     {{code}}
//!   vars:
//!   - name: code
//!     type: multiline
//!     params:
//!       prompt: code
//! ```


use crate::assemble::{EntryBody, FieldDescriptor, OutputEntry};
use crate::config::Dialect;
use crate::error::Result;
use crate::yaml::{comment_text, to_yaml};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Header information written as comments at the top of the package.
#[derive(Debug, Clone)]
pub struct PackageHeader {
    /// Pack name shown on the first line.
    pub pack_name: String,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
}

impl PackageHeader {
    /// Header stamped with the current time.
    pub fn now(pack_name: impl Into<String>) -> Self {
        Self {
            pack_name: pack_name.into(),
            generated_at: Utc::now(),
        }
    }
}

#[derive(Serialize)]
struct PackageDocument<'a> {
    matches: Vec<PackageMatch<'a>>,
}

#[derive(Serialize)]
struct PackageMatch<'a> {
    trigger: &'a str,
    label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    replace: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    form: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    form_fields: Option<FormFields<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vars: Option<Vec<VarSpec<'a>>>,
}

/// Field metadata keyed by name, in discovery order.
struct FormFields<'a>(&'a [FieldDescriptor]);

impl Serialize for FormFields<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for field in self.0 {
            map.serialize_entry(
                &field.name,
                &FieldMetadata {
                    default: field.default_value.as_deref(),
                    multiline: field.multiline,
                },
            )?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct FieldMetadata<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<&'a str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    multiline: bool,
}

#[derive(Serialize)]
struct VarSpec<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    params: VarParams<'a>,
}

#[derive(Serialize)]
struct VarParams<'a> {
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<&'a str>,
}

/// Render the complete package document.
///
/// # Errors
///
/// Fails only if the entries cannot be serialized.
pub fn render_package(entries: &[OutputEntry], header: &PackageHeader) -> Result<String> {
    let document = PackageDocument {
        matches: entries.iter().map(package_match).collect(),
    };

    let mut output = [
        format!("# {}", comment_text(&header.pack_name)),
        "# Generated prompt package".to_string(),
        format!(
            "# Generated at: {}",
            header
                .generated_at
                .to_rfc3339_opts(SecondsFormat::Millis, true)
        ),
        format!("# Prompt count: {}", entries.len()),
        String::new(),
    ]
    .join("\n");
    output.push('\n');
    output.push_str(&to_yaml(&document, "package")?);
    Ok(output)
}

fn package_match(entry: &OutputEntry) -> PackageMatch<'_> {
    let mut item = PackageMatch {
        trigger: &entry.trigger,
        label: &entry.label,
        replace: None,
        form: None,
        form_fields: None,
        vars: None,
    };

    match &entry.body {
        EntryBody::Replace(text) => item.replace = Some(text.as_str()),
        EntryBody::Template {
            dialect: Dialect::Form,
            text,
        } => {
            item.form = Some(text.as_str());
            if !entry.fields.is_empty() {
                item.form_fields = Some(FormFields(&entry.fields));
            }
        }
        EntryBody::Template {
            dialect: Dialect::Vars,
            text,
        } => {
            item.replace = Some(text.as_str());
            item.vars = Some(
                entry
                    .variables
                    .iter()
                    .map(|name| var_spec(entry, name))
                    .collect(),
            );
        }
    }

    item
}

fn var_spec<'a>(entry: &'a OutputEntry, name: &'a str) -> VarSpec<'a> {
    let field = entry.field(name);
    let multiline = field.is_some_and(|f| f.multiline);

    VarSpec {
        name,
        kind: if multiline { "multiline" } else { "text" },
        params: VarParams {
            prompt: name,
            default: field.and_then(|f| f.default_value.as_deref()),
        },
    }
}
