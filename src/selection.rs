//! # Field Selection
//!
//! Resources may restrict which of their fields appear in the generated model
//! with a selection expression: whitespace separated field names, each either
//! bare or prefixed with `+` (inclusive) or `-` (exclusive).
//!
//! ```text
//! "name species"        inclusive: only name, species and the id field
//! "+name"               inclusive, same as "name"
//! "-password -secret"   exclusive: everything except password and secret
//! ```
//!
//! The mode is a property of the whole expression. An expression that mixes
//! both kinds of token is rejected by [`SelectionExpression::parse`].
//!
//! Fields declared hidden by the schema never appear, whatever the expression.

use crate::error::DocError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Inclusive,
    Exclusive,
}

/// A parsed, validated selection expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionExpression {
    source: String,
    mode: SelectionMode,
    names: Vec<String>,
}

impl SelectionExpression {
    /// Parse an expression.
    ///
    /// An empty or all-whitespace expression parses to an expression with no
    /// names, which selects nothing and behaves as if no expression were set.
    ///
    /// # Errors
    ///
    /// - [`DocError::MixedSelection`] when `-name` tokens appear alongside bare
    ///   or `+name` tokens
    /// - [`DocError::EmptySelectionToken`] for a lone `-` or `+`
    pub fn parse(expression: &str) -> Result<Self, DocError> {
        let mut excluded = Vec::new();
        let mut included = Vec::new();

        for token in expression.split_whitespace() {
            let (bucket, name) = if let Some(name) = token.strip_prefix('-') {
                (&mut excluded, name)
            } else {
                (&mut included, token.strip_prefix('+').unwrap_or(token))
            };
            if name.is_empty() {
                return Err(DocError::EmptySelectionToken {
                    expression: expression.to_string(),
                });
            }
            bucket.push(name.to_string());
        }

        let (mode, names) = match (excluded.is_empty(), included.is_empty()) {
            (false, false) => {
                return Err(DocError::MixedSelection {
                    expression: expression.to_string(),
                })
            }
            (false, true) => (SelectionMode::Exclusive, excluded),
            _ => (SelectionMode::Inclusive, included),
        };

        Ok(SelectionExpression {
            source: expression.to_string(),
            mode,
            names,
        })
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Field names without their `+`/`-` prefix, in expression order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether any token names `field`.
    ///
    /// Tokens match whole names only (`name` does not match `username`). A
    /// token also covers dotted sub-paths, so `address` matches `address.city`.
    pub fn mentions(&self, field: &str) -> bool {
        self.names.iter().any(|name| {
            field == name
                || field
                    .strip_prefix(name.as_str())
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }
}

impl FromStr for SelectionExpression {
    type Err = DocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SelectionExpression::parse(s)
    }
}

impl fmt::Display for SelectionExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// How much of the visibility machinery applies to generated models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldVisibilityPolicy {
    /// Only schema-declared hidden fields are left out; selection is ignored
    HiddenOnly,
    /// Hidden fields are left out and the resource's selection applies
    #[default]
    Selection,
}

/// Decides field inclusion for one resource.
#[derive(Debug, Clone, Copy)]
pub struct VisibilityResolver<'a> {
    selection: Option<&'a SelectionExpression>,
    id_field: &'a str,
}

impl<'a> VisibilityResolver<'a> {
    pub fn new(
        selection: Option<&'a SelectionExpression>,
        id_field: &'a str,
        policy: FieldVisibilityPolicy,
    ) -> Self {
        let selection = match policy {
            FieldVisibilityPolicy::Selection => selection.filter(|s| !s.is_empty()),
            FieldVisibilityPolicy::HiddenOnly => None,
        };
        VisibilityResolver {
            selection,
            id_field,
        }
    }

    /// Whether the field belongs in the documentation.
    pub fn includes(&self, field: &str, default_hidden: bool) -> bool {
        if default_hidden {
            debug!(field = %field, "field hidden by schema");
            return false;
        }
        let Some(selection) = self.selection else {
            return true;
        };
        let included = match selection.mode() {
            SelectionMode::Exclusive => !selection.mentions(field),
            SelectionMode::Inclusive => field == self.id_field || selection.mentions(field),
        };
        if !included {
            debug!(field = %field, selection = %selection, "field deselected");
        }
        included
    }
}
