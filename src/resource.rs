//! # Resources
//!
//! A resource is anything the generators can describe: it has singular and
//! plural names, a schema, a set of supported verbs and optionally a selection
//! expression and nested child resources. The generators only ever see the
//! [`DocumentableResource`] trait, so a schema layer plugs in by implementing it
//! (or by building a [`ResourceDefinition`]).

use crate::error::DocError;
use crate::schema::{ComputedField, FieldDescriptor};
use crate::selection::SelectionExpression;
use http::Method;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Names end up inside URL paths and path templates.
static RESOURCE_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^/{}?#\s]+$").expect("resource name regex should be valid")
});

/// Identifier field used when a resource does not name one
pub const DEFAULT_ID_FIELD: &str = "_id";

/// HTTP verb a resource controller can support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Head,
}

impl HttpVerb {
    pub const ALL: [HttpVerb; 5] = [
        HttpVerb::Get,
        HttpVerb::Post,
        HttpVerb::Put,
        HttpVerb::Delete,
        HttpVerb::Head,
    ];

    /// Parse a verb name, case-insensitively. `del` is accepted for `delete`.
    pub fn parse(verb: &str) -> Result<Self, DocError> {
        match verb.trim().to_ascii_lowercase().as_str() {
            "get" => Ok(HttpVerb::Get),
            "post" => Ok(HttpVerb::Post),
            "put" => Ok(HttpVerb::Put),
            "del" | "delete" => Ok(HttpVerb::Delete),
            "head" => Ok(HttpVerb::Head),
            _ => Err(DocError::UnknownVerb {
                verb: verb.to_string(),
            }),
        }
    }

    /// Lowercase spelling used in nicknames
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "get",
            HttpVerb::Post => "post",
            HttpVerb::Put => "put",
            HttpVerb::Delete => "delete",
            HttpVerb::Head => "head",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            HttpVerb::Get => Method::GET,
            HttpVerb::Post => Method::POST,
            HttpVerb::Put => Method::PUT,
            HttpVerb::Delete => Method::DELETE,
            HttpVerb::Head => Method::HEAD,
        }
    }
}

impl FromStr for HttpVerb {
    type Err = DocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpVerb::parse(s)
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The capability the documentation generators need from a resource.
pub trait DocumentableResource: Send + Sync {
    fn singular(&self) -> &str;

    fn plural(&self) -> &str;

    /// Name of the primary identifier field, always kept by inclusive selections
    fn id_field(&self) -> &str {
        DEFAULT_ID_FIELD
    }

    /// Declared fields in schema declaration order
    fn fields(&self) -> &[FieldDescriptor];

    /// Computed fields in declaration order
    fn computed_fields(&self) -> &[ComputedField] {
        &[]
    }

    /// Verbs the resource's controller answers, in documentation order
    fn verbs(&self) -> &[HttpVerb];

    fn selection(&self) -> Option<&SelectionExpression> {
        None
    }

    /// Singular names of resources nested under this one
    fn children(&self) -> &[String] {
        &[]
    }
}

/// Plain data implementation of [`DocumentableResource`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceDefinition {
    singular: String,
    plural: String,
    id_field: String,
    fields: Vec<FieldDescriptor>,
    computed: Vec<ComputedField>,
    verbs: Vec<HttpVerb>,
    selection: Option<SelectionExpression>,
    children: Vec<String>,
}

impl ResourceDefinition {
    /// New resource supporting every verb, with a default English plural.
    pub fn new(singular: impl Into<String>) -> Self {
        let singular = singular.into();
        let plural = pluralize(&singular);
        ResourceDefinition {
            singular,
            plural,
            id_field: DEFAULT_ID_FIELD.to_string(),
            fields: Vec::new(),
            computed: Vec::new(),
            verbs: HttpVerb::ALL.to_vec(),
            selection: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_plural(mut self, plural: impl Into<String>) -> Self {
        self.plural = plural.into();
        self
    }

    #[must_use]
    pub fn with_id_field(mut self, id_field: impl Into<String>) -> Self {
        self.id_field = id_field.into();
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_computed(mut self, name: impl Into<String>) -> Self {
        self.computed.push(ComputedField::new(name));
        self
    }

    #[must_use]
    pub fn with_verbs(mut self, verbs: impl IntoIterator<Item = HttpVerb>) -> Self {
        self.verbs = verbs.into_iter().collect();
        self
    }

    /// Attach a selection expression, validating it now so a bad expression
    /// fails at registration rather than during a documentation request.
    pub fn with_selection(mut self, expression: &str) -> Result<Self, DocError> {
        self.selection = Some(SelectionExpression::parse(expression)?);
        Ok(self)
    }

    #[must_use]
    pub fn with_child(mut self, singular: impl Into<String>) -> Self {
        self.children.push(singular.into());
        self
    }
}

impl DocumentableResource for ResourceDefinition {
    fn singular(&self) -> &str {
        &self.singular
    }

    fn plural(&self) -> &str {
        &self.plural
    }

    fn id_field(&self) -> &str {
        &self.id_field
    }

    fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    fn computed_fields(&self) -> &[ComputedField] {
        &self.computed
    }

    fn verbs(&self) -> &[HttpVerb] {
        &self.verbs
    }

    fn selection(&self) -> Option<&SelectionExpression> {
        self.selection.as_ref()
    }

    fn children(&self) -> &[String] {
        &self.children
    }
}

/// Check that a resource name can be embedded in a URL path.
pub fn validate_resource_name(name: &str) -> Result<(), DocError> {
    if RESOURCE_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(DocError::InvalidResourceName {
            name: name.to_string(),
        })
    }
}

/// Uppercase the first character.
///
/// ```rust
/// assert_eq!(restdoc::resource::capitalize("goose"), "Goose");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Regular English plural. Irregular plurals (`goose` → `geese`) must be set
/// with [`ResourceDefinition::with_plural`].
pub fn pluralize(singular: &str) -> String {
    let lower = singular.to_ascii_lowercase();
    let ends_with_consonant_y = lower.ends_with('y')
        && !lower
            .chars()
            .rev()
            .nth(1)
            .is_some_and(|c| "aeiou".contains(c));
    if singular.is_empty() {
        String::new()
    } else if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        format!("{singular}es")
    } else if ends_with_consonant_y && singular.len() > 1 {
        format!("{}ies", &singular[..singular.len() - 1])
    } else {
        format!("{singular}s")
    }
}
