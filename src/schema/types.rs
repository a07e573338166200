use std::fmt;
use std::str::FromStr;

/// Storage type of a declared schema field.
///
/// Parsed from descriptor strings such as `string`, `number` or `[string]`.
/// Unknown descriptors are kept as [`PrimitiveType::Unrecognized`] so the type
/// mapper can report them with the original text.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveType {
    Text,
    Numeric,
    Temporal,
    Boolean,
    /// Reference to another document by identifier
    ObjectId,
    /// Homogeneous array; the element may be declared hidden on its own
    Array {
        element: Box<PrimitiveType>,
        element_hidden: bool,
    },
    /// Embedded object or sub-document
    Structured,
    /// Untyped value
    Mixed,
    /// Raw binary
    Buffer,
    Unrecognized(String),
}

impl PrimitiveType {
    /// Parse a descriptor string. Never fails; see [`PrimitiveType::Unrecognized`].
    pub fn parse(descriptor: &str) -> Self {
        let trimmed = descriptor.trim();
        if let Some(inner) = trimmed
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
        {
            let element = if inner.trim().is_empty() {
                PrimitiveType::Mixed
            } else {
                PrimitiveType::parse(inner)
            };
            return PrimitiveType::Array {
                element: Box::new(element),
                element_hidden: false,
            };
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "string" | "text" => PrimitiveType::Text,
            "number" | "numeric" | "double" => PrimitiveType::Numeric,
            "date" | "datetime" => PrimitiveType::Temporal,
            "boolean" | "bool" => PrimitiveType::Boolean,
            "objectid" | "oid" => PrimitiveType::ObjectId,
            "array" => PrimitiveType::Array {
                element: Box::new(PrimitiveType::Mixed),
                element_hidden: false,
            },
            "object" | "structured" => PrimitiveType::Structured,
            "mixed" => PrimitiveType::Mixed,
            "buffer" | "binary" => PrimitiveType::Buffer,
            _ => PrimitiveType::Unrecognized(trimmed.to_string()),
        }
    }

    /// Array of `element`.
    pub fn array_of(element: PrimitiveType) -> Self {
        PrimitiveType::Array {
            element: Box::new(element),
            element_hidden: false,
        }
    }

    /// Mark the element of an array type as hidden. No-op for other types.
    #[must_use]
    pub fn with_hidden_element(self) -> Self {
        match self {
            PrimitiveType::Array { element, .. } => PrimitiveType::Array {
                element,
                element_hidden: true,
            },
            other => other,
        }
    }

    /// Whether this is an array whose element is declared hidden.
    pub fn hides_element(&self) -> bool {
        matches!(
            self,
            PrimitiveType::Array {
                element_hidden: true,
                ..
            }
        )
    }
}

impl FromStr for PrimitiveType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PrimitiveType::parse(s))
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveType::Text => write!(f, "string"),
            PrimitiveType::Numeric => write!(f, "number"),
            PrimitiveType::Temporal => write!(f, "date"),
            PrimitiveType::Boolean => write!(f, "boolean"),
            PrimitiveType::ObjectId => write!(f, "objectid"),
            PrimitiveType::Array { element, .. } => write!(f, "[{}]", element),
            PrimitiveType::Structured => write!(f, "object"),
            PrimitiveType::Mixed => write!(f, "mixed"),
            PrimitiveType::Buffer => write!(f, "buffer"),
            PrimitiveType::Unrecognized(descriptor) => write!(f, "{}", descriptor),
        }
    }
}

/// One declared field of a resource schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub primitive_type: PrimitiveType,
    pub required: bool,
    /// Never documented, whatever the selection expression says
    pub default_hidden: bool,
    pub enum_values: Vec<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, primitive_type: PrimitiveType) -> Self {
        FieldDescriptor {
            name: name.into(),
            primitive_type,
            required: false,
            default_hidden: false,
            enum_values: Vec::new(),
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.default_hidden = true;
        self
    }

    #[must_use]
    pub fn with_enum<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = values.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Hard-hidden either directly or through a hidden array element.
    pub fn is_hidden(&self) -> bool {
        self.default_hidden || self.primitive_type.hides_element()
    }
}

/// A computed (virtual) field. It has no storage type and is documented as a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedField {
    pub name: String,
}

impl ComputedField {
    pub fn new(name: impl Into<String>) -> Self {
        ComputedField { name: name.into() }
    }
}
