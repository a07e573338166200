//! # Resource Definitions Linter
//!
//! Checks a resource definitions file and reports every problem at once,
//! instead of stopping at the first one the way registration does.
//!
//! ## Checks Performed
//!
//! 1. **Resource names** - singular and plural must be usable in a URL path and unique
//! 2. **Verbs** - must be known; a resource should document at least one operation
//! 3. **Selection expressions** - must not mix `+` and `-`, and should name declared fields
//! 4. **Field types** - must be known to the type mapper; opaque types are flagged
//! 5. **Field declarations** - names must be unique; range and enum should not be combined;
//!    virtuals should not reuse declared names
//! 6. **Nested resources** - every declared child must be defined in the same file, once
//! 7. **Model ids** - capitalized singular names must not collide
//!
//! ## Usage
//!
//! ```rust,no_run
//! use restdoc::linter::{lint_definitions, print_lint_issues};
//! use std::path::Path;
//!
//! let issues = lint_definitions(Path::new("resources.yaml"))?;
//! print_lint_issues(&issues);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::resource::{capitalize, pluralize, validate_resource_name, HttpVerb, DEFAULT_ID_FIELD};
use crate::schema::{doc_type_for, read_definitions, DefinitionsFile, PrimitiveType, ResourceSpec};
use crate::selection::{SelectionExpression, SelectionMode};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

#[cfg(test)]
mod tests;

/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Registration or documentation generation will fail
    Error,
    /// Documentation is generated but probably not as intended
    Warning,
    /// Worth knowing, nothing to fix
    Info,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintSeverity::Error => write!(f, "error"),
            LintSeverity::Warning => write!(f, "warning"),
            LintSeverity::Info => write!(f, "info"),
        }
    }
}

/// A problem found in a definitions file
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// e.g. `resource:vegetable` or `resource:vegetable/field:name`
    pub location: String,
    pub severity: LintSeverity,
    /// Machine-readable kind, e.g. `unrecognized_type`
    pub kind: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl LintIssue {
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Lint a YAML or JSON definitions file.
pub fn lint_definitions(path: &Path) -> anyhow::Result<Vec<LintIssue>> {
    let file = read_definitions(path)?;
    Ok(lint_resources(&file))
}

/// Lint already parsed definitions.
pub fn lint_resources(file: &DefinitionsFile) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    let singulars: HashSet<&str> = file.resources.iter().map(|r| r.singular.as_str()).collect();
    let mut seen_names: HashMap<String, String> = HashMap::new();

    for spec in &file.resources {
        let location = format!("resource:{}", spec.singular);
        lint_names(&mut issues, &location, spec, &mut seen_names);
        lint_verbs(&mut issues, &location, spec);
        lint_fields(&mut issues, &location, spec);
        lint_selection(&mut issues, &location, spec);

        let mut seen_children = HashSet::new();
        for child in &spec.children {
            if !seen_children.insert(child.as_str()) {
                issues.push(
                    LintIssue::new(
                        &location,
                        LintSeverity::Error,
                        "duplicate_child",
                        format!("Nested resource '{child}' is declared more than once"),
                    )
                    .with_suggestion(format!("List '{child}' once under children")),
                );
                continue;
            }
            if !singulars.contains(child.as_str()) {
                issues.push(
                    LintIssue::new(
                        &location,
                        LintSeverity::Error,
                        "unknown_child",
                        format!("Nested resource '{child}' is not defined"),
                    )
                    .with_suggestion(format!(
                        "Define a resource with singular '{child}' or remove it from children"
                    )),
                );
            }
        }
    }

    issues
}

fn lint_names(
    issues: &mut Vec<LintIssue>,
    location: &str,
    spec: &ResourceSpec,
    seen: &mut HashMap<String, String>,
) {
    let plural = spec
        .plural
        .clone()
        .unwrap_or_else(|| pluralize(&spec.singular));

    for name in [&spec.singular, &plural] {
        if validate_resource_name(name).is_err() {
            issues.push(
                LintIssue::new(
                    location,
                    LintSeverity::Error,
                    "invalid_resource_name",
                    format!("'{name}' cannot be used as a path segment"),
                )
                .with_suggestion("Use a non-empty name without '/', '{', '}', '?', '#' or spaces"),
            );
        }
    }

    for (kind, name) in [("singular", &spec.singular), ("plural", &plural)] {
        let key = format!("{kind}:{name}");
        if let Some(owner) = seen.get(&key) {
            issues.push(LintIssue::new(
                location,
                LintSeverity::Error,
                "duplicate_resource",
                format!("{kind} name '{name}' is already used by resource '{owner}'"),
            ));
        } else {
            seen.insert(key, spec.singular.clone());
        }
    }

    let model = capitalize(&spec.singular);
    match seen.get(&format!("model:{model}")) {
        Some(owner) if *owner != spec.singular => issues.push(
            LintIssue::new(
                location,
                LintSeverity::Error,
                "duplicate_model",
                format!("Model id '{model}' is already generated by resource '{owner}'"),
            )
            .with_suggestion("Singular names must differ by more than the case of their first letter"),
        ),
        Some(_) => {}
        None => {
            seen.insert(format!("model:{model}"), spec.singular.clone());
        }
    }

    if spec.plural.is_none() {
        issues.push(
            LintIssue::new(
                location,
                LintSeverity::Info,
                "implicit_plural",
                format!("Plural derived as '{plural}'"),
            )
            .with_suggestion("Set 'plural' explicitly for irregular nouns"),
        );
    }
}

fn lint_verbs(issues: &mut Vec<LintIssue>, location: &str, spec: &ResourceSpec) {
    let Some(verbs) = &spec.verbs else {
        return;
    };

    let mut parsed = Vec::new();
    for verb in verbs {
        match HttpVerb::parse(verb) {
            Ok(v) => parsed.push(v),
            Err(err) => issues.push(
                LintIssue::new(location, LintSeverity::Error, "unknown_verb", err.to_string())
                    .with_suggestion("Use one of: get, post, put, del, head"),
            ),
        }
    }

    if parsed.iter().all(|v| *v == HttpVerb::Head) {
        issues.push(LintIssue::new(
            location,
            LintSeverity::Warning,
            "no_documented_verbs",
            "No operation will be documented for this resource",
        ));
    }
}

fn lint_fields(issues: &mut Vec<LintIssue>, location: &str, spec: &ResourceSpec) {
    let mut names = HashSet::new();
    for field in &spec.fields {
        let field_location = format!("{location}/field:{}", field.name);

        if !names.insert(field.name.as_str()) {
            issues.push(LintIssue::new(
                &field_location,
                LintSeverity::Error,
                "duplicate_field",
                format!("Field '{}' is declared more than once", field.name),
            ));
        }

        let primitive = PrimitiveType::parse(&field.type_descriptor);
        match doc_type_for(&primitive) {
            Err(err) => issues.push(
                LintIssue::new(&field_location, LintSeverity::Error, "unrecognized_type", err.to_string())
                    .with_suggestion(
                        "Use string, number, date, boolean, objectid, object, mixed, buffer or [element]",
                    ),
            ),
            Ok(None) => issues.push(LintIssue::new(
                &field_location,
                LintSeverity::Info,
                "opaque_type",
                format!(
                    "Type '{}' has no documentation form and is documented as string",
                    field.type_descriptor
                ),
            )),
            Ok(Some(_)) => {}
        }

        let has_range = field.min.is_some() || field.max.is_some();
        let has_enum = field.enum_values.as_ref().is_some_and(|v| !v.is_empty());
        if has_range && has_enum {
            issues.push(LintIssue::new(
                &field_location,
                LintSeverity::Warning,
                "range_and_enum",
                "Both a range and an enumeration are declared; only the range is documented",
            ));
        }
    }

    for name in &spec.virtuals {
        if names.contains(name.as_str()) {
            issues.push(
                LintIssue::new(
                    format!("{location}/virtual:{name}"),
                    LintSeverity::Warning,
                    "virtual_shadows_field",
                    format!("Virtual '{name}' has the name of a declared field and is not documented"),
                )
                .with_suggestion("Rename the virtual or drop it"),
            );
        }
    }
}

fn lint_selection(issues: &mut Vec<LintIssue>, location: &str, spec: &ResourceSpec) {
    let Some(select) = &spec.select else {
        return;
    };
    let expression = match SelectionExpression::parse(select) {
        Ok(expression) => expression,
        Err(err) => {
            issues.push(
                LintIssue::new(location, LintSeverity::Error, "invalid_selection", err.to_string())
                    .with_suggestion("Use only '-name' tokens or only '+name'/'name' tokens"),
            );
            return;
        }
    };

    let id_field = spec.id_field.as_deref().unwrap_or(DEFAULT_ID_FIELD);
    for name in expression.names() {
        let root = name.split('.').next().unwrap_or(name);
        let field = spec.fields.iter().find(|f| f.name == root);
        let known = field.is_some() || root == id_field || spec.virtuals.iter().any(|v| v == root);
        if !known {
            issues.push(LintIssue::new(
                location,
                LintSeverity::Warning,
                "selection_unknown_field",
                format!("Selection '{}' names undeclared field '{name}'", expression.as_str()),
            ));
        }
        if expression.mode() == SelectionMode::Inclusive && field.is_some_and(|f| f.hidden) {
            issues.push(LintIssue::new(
                location,
                LintSeverity::Info,
                "selection_reveals_hidden",
                format!("Field '{name}' is hidden by the schema and stays undocumented"),
            ));
        }
    }
}

/// Print lint issues grouped by severity.
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        println!("✅ No lint issues found!");
        return;
    }

    let count = |severity: LintSeverity| issues.iter().filter(|i| i.severity == severity).count();
    println!("\n📋 Lint Results:");
    println!(
        "   {} error(s), {} warning(s), {} info(s)\n",
        count(LintSeverity::Error),
        count(LintSeverity::Warning),
        count(LintSeverity::Info)
    );

    for (severity, heading) in [
        (LintSeverity::Error, "❌ Errors (must fix):"),
        (LintSeverity::Warning, "⚠️  Warnings (should fix):"),
        (LintSeverity::Info, "ℹ️  Info:"),
    ] {
        let group: Vec<_> = issues.iter().filter(|i| i.severity == severity).collect();
        if group.is_empty() {
            continue;
        }
        println!("{heading}");
        for issue in group {
            println!("   [{}] {}", issue.kind, issue.location);
            println!("      {}", issue.message);
            if let Some(suggestion) = &issue.suggestion {
                println!("      💡 Suggestion: {suggestion}");
            }
        }
        println!();
    }
}

/// Fail when any error-level issue is present.
pub fn fail_if_errors(issues: &[LintIssue]) -> anyhow::Result<()> {
    let errors = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Error)
        .count();
    if errors > 0 {
        anyhow::bail!("{errors} lint error(s) found");
    }
    Ok(())
}
