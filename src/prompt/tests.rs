//! Tests for prompt parsing, discovery, issue conversion and rendering.

use super::*;
use std::fs;
use tempfile::TempDir;

const ISSUE_BODY: &str = "### Trigger

:review

### Label

Code review

### Description

Review a snippet of code
for obvious problems.

### Prompt

```text
Review the following code:

{{code}}

Focus on: {{focus|security}}
```
";

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_full_record() {
    let yaml = r#"
trigger: ":review"
label: "Code review"
description: "Review a snippet of code"
prompt: |
  Review:
  {{code}}
form_fields:
  code:
    multiline: true
  focus:
    default: "performance"
"#;

    let record = PromptRecord::parse(yaml).unwrap();
    assert_eq!(record.trigger, ":review");
    assert_eq!(record.label, "Code review");
    assert_eq!(record.prompt, "Review:\n{{code}}\n");
    assert_eq!(record.form_fields["code"].multiline, Some(true));
    assert_eq!(record.form_fields["code"].default, None);
    assert_eq!(
        record.form_fields["focus"].default.as_deref(),
        Some("performance")
    );
}

#[test]
fn test_parse_missing_and_null_fields_become_empty() {
    let record = PromptRecord::parse("trigger: \":x\"\nlabel: ~\n").unwrap();
    assert_eq!(record.trigger, ":x");
    assert_eq!(record.label, "");
    assert_eq!(record.description, "");
    assert_eq!(record.prompt, "");
    assert!(record.form_fields.is_empty());
}

#[test]
fn test_parse_empty_document_fails() {
    assert!(matches!(
        PromptRecord::parse("  \n"),
        Err(PromptIssue::ParseFailure(_))
    ));
}

#[test]
fn test_parse_malformed_yaml_fails() {
    assert!(matches!(
        PromptRecord::parse("trigger: [unclosed"),
        Err(PromptIssue::ParseFailure(_))
    ));
    assert!(matches!(
        PromptRecord::parse("just a sentence"),
        Err(PromptIssue::ParseFailure(_))
    ));
}

#[test]
fn test_display_label_falls_back_to_trigger() {
    let mut record = PromptRecord {
        trigger: ":fix".to_string(),
        ..PromptRecord::default()
    };
    assert_eq!(record.display_label(), ":fix");

    record.label = "Fix it".to_string();
    assert_eq!(record.display_label(), "Fix it");
}

// ============================================================================
// Discovery and loading
// ============================================================================

#[test]
fn test_discover_matches_globs_sorted() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(dir.join("b.yaml"), "").unwrap();
    fs::write(dir.join("a.yml"), "").unwrap();
    fs::write(dir.join("notes.txt"), "").unwrap();
    fs::create_dir(dir.join("nested.yml")).unwrap();

    let globs = crate::config::types::default_prompt_globs();
    let files = discover_prompt_files(dir, &globs).unwrap();

    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.yml", "b.yaml"]);
}

#[test]
fn test_discover_missing_directory_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let globs = crate::config::types::default_prompt_globs();
    assert!(discover_prompt_files(&temp_dir.path().join("missing"), &globs).is_err());
}

#[test]
fn test_discover_invalid_glob_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let result = discover_prompt_files(temp_dir.path(), &["[".to_string()]);
    assert!(result.is_err());
}

#[test]
fn test_load_missing_file_is_parse_failure() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_prompt_file(&temp_dir.path().join("gone.yml"));
    assert!(matches!(result, Err(PromptIssue::ParseFailure(_))));
}

// ============================================================================
// Issue conversion
// ============================================================================

#[test]
fn test_parse_issue_extracts_sections() {
    let record = parse_issue(ISSUE_BODY).unwrap();
    assert_eq!(record.trigger, ":review");
    assert_eq!(record.label, "Code review");
    assert_eq!(
        record.description,
        "Review a snippet of code\nfor obvious problems."
    );
    assert_eq!(
        record.prompt,
        "Review the following code:\n\n{{code}}\n\nFocus on: {{focus|security}}"
    );
    assert!(record.form_fields.is_empty());
}

#[test]
fn test_parse_issue_strips_backticks_from_trigger() {
    let body = ISSUE_BODY.replace(":review", "`:review`");
    assert_eq!(parse_issue(&body).unwrap().trigger, ":review");
}

#[test]
fn test_parse_issue_headings_are_case_insensitive() {
    let body = ISSUE_BODY
        .replace("### Trigger", "### trigger")
        .replace("### Prompt", "### PROMPT");
    let record = parse_issue(&body).unwrap();
    assert_eq!(record.trigger, ":review");
    assert!(record.prompt.starts_with("Review the following code:"));
}

#[test]
fn test_parse_issue_accepts_crlf() {
    let body = ISSUE_BODY.replace('\n', "\r\n");
    let record = parse_issue(&body).unwrap();
    assert_eq!(record.trigger, ":review");
    assert_eq!(record.label, "Code review");
}

#[test]
fn test_parse_issue_reports_every_missing_section() {
    let err = parse_issue("### Trigger\n:review\n").unwrap_err();
    let PromptIssue::ParseFailure(message) = err else {
        panic!("expected parse failure, got {:?}", err);
    };
    assert!(message.contains("Label"));
    assert!(message.contains("Description"));
    assert!(message.contains("Prompt"));
    assert!(!message.contains("Trigger"));
}

#[test]
fn test_parse_issue_requires_fenced_prompt() {
    let body = "### Trigger\n:a1\n\n### Label\nA\n\n### Description\nB\n\n### Prompt\nno fence here\n";
    assert!(matches!(
        parse_issue(body),
        Err(PromptIssue::ParseFailure(m)) if m.contains("Prompt")
    ));
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_round_trips_through_parse() {
    let record = parse_issue(ISSUE_BODY).unwrap();
    let rendered = render_prompt_file(&record, None).unwrap();

    let reparsed = PromptRecord::parse(&rendered).unwrap();
    assert_eq!(reparsed.trigger, record.trigger);
    assert_eq!(reparsed.label, record.label);
    assert_eq!(reparsed.description, record.description);
    assert_eq!(reparsed.prompt, record.prompt);
}

#[test]
fn test_render_marks_standalone_variables_multiline() {
    let record = parse_issue(ISSUE_BODY).unwrap();
    let rendered = render_prompt_file(&record, None).unwrap();

    let reparsed = PromptRecord::parse(&rendered).unwrap();
    assert_eq!(reparsed.form_fields.len(), 1);
    assert_eq!(reparsed.form_fields["code"].multiline, Some(true));
    assert!(!reparsed.form_fields.contains_key("focus"));
}

#[test]
fn test_render_without_multiline_has_no_form_fields() {
    let record = PromptRecord {
        trigger: ":tr".to_string(),
        label: "Translate".to_string(),
        description: "Translate text".to_string(),
        prompt: "Translate {{text}} into {{language|French}}".to_string(),
        ..PromptRecord::default()
    };
    let rendered = render_prompt_file(&record, None).unwrap();

    assert!(!rendered.contains("form_fields"));
    assert!(rendered.ends_with('\n'));
    assert_eq!(PromptRecord::parse(&rendered).unwrap().prompt, record.prompt);
}

#[test]
fn test_render_contribution_header() {
    let record = parse_issue(ISSUE_BODY).unwrap();
    let contribution = Contribution {
        issue_number: 42,
        contributor: "@octocat".to_string(),
    };
    let rendered = render_prompt_file(&record, Some(&contribution)).unwrap();

    assert!(rendered.starts_with(
        "# Contributed via issue #42\n# Contributor: @octocat\n\ntrigger: "
    ));
    assert!(PromptRecord::parse(&rendered).is_ok());
}

#[test]
fn test_render_quotes_special_characters() {
    let record = PromptRecord {
        trigger: ":q".to_string(),
        label: "Say \"hi\": now".to_string(),
        description: "# not a comment".to_string(),
        prompt: "Hello there, {{name}}".to_string(),
        ..PromptRecord::default()
    };
    let reparsed = PromptRecord::parse(&render_prompt_file(&record, None).unwrap()).unwrap();
    assert_eq!(reparsed.label, record.label);
    assert_eq!(reparsed.description, record.description);
}

#[test]
fn test_render_round_trips_control_characters() {
    let record = PromptRecord {
        trigger: ":ctl".to_string(),
        label: "Label \u{1b}[1m bold".to_string(),
        description: "Tab\tand bell \u{7}".to_string(),
        prompt: "Line one \u{7}\n{{code}}".to_string(),
        ..PromptRecord::default()
    };
    let reparsed = PromptRecord::parse(&render_prompt_file(&record, None).unwrap()).unwrap();

    assert_eq!(reparsed.label, record.label);
    assert_eq!(reparsed.description, record.description);
    assert_eq!(reparsed.prompt, record.prompt);
    assert_eq!(reparsed.form_fields["code"].multiline, Some(true));
}

#[test]
fn test_render_contributor_cannot_break_out_of_comment() {
    let record = parse_issue(ISSUE_BODY).unwrap();
    let contribution = Contribution {
        issue_number: 1,
        contributor: "@octocat\ntrigger: \":hijack\"".to_string(),
    };
    let rendered = render_prompt_file(&record, Some(&contribution)).unwrap();

    assert_eq!(PromptRecord::parse(&rendered).unwrap().trigger, ":review");
}

#[test]
fn test_render_numeric_multiline_name_stays_string() {
    let record = PromptRecord {
        trigger: ":steps".to_string(),
        label: "Steps".to_string(),
        description: "Numbered steps".to_string(),
        prompt: "Step:\n{{1}}".to_string(),
        ..PromptRecord::default()
    };
    let reparsed = PromptRecord::parse(&render_prompt_file(&record, None).unwrap()).unwrap();
    assert_eq!(reparsed.form_fields["1"].multiline, Some(true));
}
