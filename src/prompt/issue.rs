//! Prompt submissions from issue-tracker forms.
//!
//! Issue forms render each answer under a `### <Section>` heading. The
//! prompt body is fenced as a code block:
//!
//! ````text
//! ### Trigger
//! :review
//!
//! ### Label
//! Code review
//!
//! ### Description
//! Review a snippet of code
//!
//! ### Prompt
//! ```
//! Review the following code:
//! {{code}}
//! ```
//! ````

use super::PromptRecord;
use crate::validate::PromptIssue;
use regex::Regex;
use std::sync::LazyLock;

static TRIGGER_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)### Trigger[ \t\r]*\n\s*`?([^`\n]+)`?").expect("Invalid trigger regex")
});

static LABEL_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)### Label[ \t\r]*\n\s*(.+)").expect("Invalid label regex")
});

static DESCRIPTION_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)### Description[ \t\r]*\n\s*(.*?)(?:###|\z)")
        .expect("Invalid description regex")
});

static PROMPT_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)### Prompt[ \t\r]*\n\s*```[^\n]*\n(.*?)```").expect("Invalid prompt regex")
});

/// Parse an issue document into a prompt record.
///
/// Every captured value is trimmed. All four sections must be present; the
/// error names each missing one and no partial record is produced.
pub fn parse_issue(content: &str) -> std::result::Result<PromptRecord, PromptIssue> {
    let sections = [
        ("Trigger", &*TRIGGER_SECTION),
        ("Label", &*LABEL_SECTION),
        ("Description", &*DESCRIPTION_SECTION),
        ("Prompt", &*PROMPT_SECTION),
    ];

    let mut values = Vec::with_capacity(sections.len());
    let mut missing = Vec::new();
    for (name, regex) in sections {
        match regex.captures(content).and_then(|c| c.get(1)) {
            Some(m) => values.push(m.as_str().trim().to_string()),
            None => missing.push(name),
        }
    }

    if !missing.is_empty() {
        return Err(PromptIssue::ParseFailure(format!(
            "issue is missing section(s): {}",
            missing.join(", ")
        )));
    }

    let [trigger, label, description, prompt]: [String; 4] = values
        .try_into()
        .map_err(|_| PromptIssue::ParseFailure("issue sections are incomplete".to_string()))?;

    Ok(PromptRecord {
        trigger,
        label,
        description,
        prompt,
        ..PromptRecord::default()
    })
}
