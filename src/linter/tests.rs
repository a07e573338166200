#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for the definitions linter

use crate::linter::{fail_if_errors, lint_definitions, LintIssue, LintSeverity};
use std::io::Write;
use tempfile::NamedTempFile;

/// Write YAML to a temp file and lint it
fn lint_yaml(content: &str) -> Vec<LintIssue> {
    let mut temp = NamedTempFile::with_suffix(".yaml").expect("create temp file");
    temp.write_all(content.as_bytes()).expect("write definitions");
    temp.flush().expect("flush");
    lint_definitions(temp.path()).expect("lint definitions")
}

fn of_kind<'a>(issues: &'a [LintIssue], kind: &str) -> Vec<&'a LintIssue> {
    issues.iter().filter(|i| i.kind == kind).collect()
}

#[test]
fn test_clean_definitions() {
    let issues = lint_yaml(
        r#"
resources:
  - singular: goose
    plural: geese
    select: "-secret"
    fields:
      - { name: cooked, type: boolean }
      - { name: secret, type: string }
    children: [stuffing]
  - singular: stuffing
    plural: stuffings
    fields:
      - { name: bread, type: boolean }
"#,
    );
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    fail_if_errors(&issues).unwrap();
}

#[test]
fn test_lint_unrecognized_type() {
    let issues = lint_yaml(
        r#"
resources:
  - singular: vegetable
    plural: vegetables
    fields:
      - { name: price, type: Decimal128 }
      - { name: blob, type: buffer }
"#,
    );
    let errors = of_kind(&issues, "unrecognized_type");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].severity, LintSeverity::Error);
    assert_eq!(errors[0].location, "resource:vegetable/field:price");
    assert!(errors[0].suggestion.is_some());

    let opaque = of_kind(&issues, "opaque_type");
    assert_eq!(opaque.len(), 1);
    assert_eq!(opaque[0].severity, LintSeverity::Info);
    assert!(fail_if_errors(&issues).is_err());
}

#[test]
fn test_lint_mixed_selection() {
    let issues = lint_yaml(
        r#"
resources:
  - singular: fungus
    plural: fungi
    select: "+name -password"
    fields:
      - { name: name, type: string }
"#,
    );
    let errors = of_kind(&issues, "invalid_selection");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("+name -password"));
}

#[test]
fn test_lint_selection_names_unknown_field() {
    let issues = lint_yaml(
        r#"
resources:
  - singular: fungus
    plural: fungi
    select: "-hyphenated-field-name -password -_id -location.lat"
    fields:
      - { name: hyphenated-field-name, type: string }
      - { name: location, type: object }
"#,
    );
    let warnings = of_kind(&issues, "selection_unknown_field");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("'password'"));
    assert_eq!(warnings[0].severity, LintSeverity::Warning);
}

#[test]
fn test_lint_inclusive_selection_of_hidden_field() {
    let issues = lint_yaml(
        r#"
resources:
  - singular: vegetable
    plural: vegetables
    select: "+name +species"
    fields:
      - { name: name, type: string }
      - { name: species, type: string, hidden: true }
"#,
    );
    let infos = of_kind(&issues, "selection_reveals_hidden");
    assert_eq!(infos.len(), 1);
    assert!(infos[0].message.contains("species"));
}

#[test]
fn test_lint_duplicate_names_and_fields() {
    let issues = lint_yaml(
        r#"
resources:
  - singular: goose
    plural: geese
    fields:
      - { name: cooked, type: boolean }
      - { name: cooked, type: string }
  - singular: gander
    plural: geese
"#,
    );
    assert_eq!(of_kind(&issues, "duplicate_field").len(), 1);
    let duplicates = of_kind(&issues, "duplicate_resource");
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].location, "resource:gander");
    assert!(duplicates[0].message.starts_with("plural name"));
}

#[test]
fn test_lint_verbs_and_children() {
    let issues = lint_yaml(
        r#"
resources:
  - singular: goose
    plural: geese
    verbs: [head, patch]
    children: [gravy]
"#,
    );
    assert_eq!(of_kind(&issues, "unknown_verb").len(), 1);
    assert_eq!(of_kind(&issues, "no_documented_verbs").len(), 1);
    let children = of_kind(&issues, "unknown_child");
    assert_eq!(children.len(), 1);
    assert!(children[0].message.contains("gravy"));
}

#[test]
fn test_lint_implicit_plural_and_range_with_enum() {
    let issues = lint_yaml(
        r#"
resources:
  - singular: berry
    fields:
      - { name: size, type: number, min: 1, enum: ["1", "2"] }
"#,
    );
    let plural = of_kind(&issues, "implicit_plural");
    assert_eq!(plural.len(), 1);
    assert!(plural[0].message.contains("berries"));
    assert_eq!(of_kind(&issues, "range_and_enum").len(), 1);
    fail_if_errors(&issues).unwrap();
}

#[test]
fn test_lint_invalid_resource_name() {
    let issues = lint_yaml(
        r#"
resources:
  - singular: "bad name"
    plural: "bad/names"
"#,
    );
    assert_eq!(of_kind(&issues, "invalid_resource_name").len(), 2);
}

#[test]
fn test_lint_repeated_child() {
    let issues = lint_yaml(
        r#"
resources:
  - singular: goose
    plural: geese
    children: [stuffing, stuffing]
  - singular: stuffing
    plural: stuffings
"#,
    );
    let repeated = of_kind(&issues, "duplicate_child");
    assert_eq!(repeated.len(), 1);
    assert_eq!(repeated[0].severity, LintSeverity::Error);
    assert!(of_kind(&issues, "unknown_child").is_empty());
}

#[test]
fn test_lint_colliding_model_ids() {
    let issues = lint_yaml(
        r#"
resources:
  - singular: goose
    plural: geese
  - singular: Goose
    plural: honkers
"#,
    );
    let models = of_kind(&issues, "duplicate_model");
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].location, "resource:Goose");
    assert!(of_kind(&issues, "duplicate_resource").is_empty());
}

#[test]
fn test_lint_virtual_named_like_field() {
    let issues = lint_yaml(
        r#"
resources:
  - singular: vegetable
    plural: vegetables
    fields:
      - { name: name, type: string, required: true }
    virtuals: [name, label]
"#,
    );
    let shadows = of_kind(&issues, "virtual_shadows_field");
    assert_eq!(shadows.len(), 1);
    assert_eq!(shadows[0].location, "resource:vegetable/virtual:name");
    fail_if_errors(&issues).unwrap();
}
