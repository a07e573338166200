use super::types::PrimitiveType;
use crate::error::DocError;
use serde::Serialize;
use std::fmt;

/// Data type tag understood by Swagger 1.1 documentation viewers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocType {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "Date")]
    Date,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "Array")]
    Array,
}

impl DocType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::String => "string",
            DocType::Double => "double",
            DocType::Date => "Date",
            DocType::Boolean => "boolean",
            DocType::Array => "Array",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a schema primitive type to its documentation type.
///
/// Returns `Ok(None)` for types with no direct documentation form (embedded
/// objects, untyped values, binary); the caller decides the fallback. Arrays
/// map to [`DocType::Array`] whatever their element type is.
///
/// # Errors
///
/// Returns [`DocError::UnrecognizedType`] for a descriptor the mapper does not
/// know.
pub fn doc_type_for(primitive: &PrimitiveType) -> Result<Option<DocType>, DocError> {
    let mapped = match primitive {
        PrimitiveType::Text => Some(DocType::String),
        PrimitiveType::Numeric => Some(DocType::Double),
        PrimitiveType::Temporal => Some(DocType::Date),
        PrimitiveType::Boolean => Some(DocType::Boolean),
        PrimitiveType::ObjectId => Some(DocType::String),
        PrimitiveType::Array { .. } => Some(DocType::Array),
        PrimitiveType::Structured | PrimitiveType::Mixed | PrimitiveType::Buffer => None,
        PrimitiveType::Unrecognized(descriptor) => {
            return Err(DocError::UnrecognizedType {
                descriptor: descriptor.clone(),
            })
        }
    };
    Ok(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_mappings() {
        assert_eq!(doc_type_for(&PrimitiveType::Text), Ok(Some(DocType::String)));
        assert_eq!(doc_type_for(&PrimitiveType::Numeric), Ok(Some(DocType::Double)));
        assert_eq!(doc_type_for(&PrimitiveType::Temporal), Ok(Some(DocType::Date)));
        assert_eq!(doc_type_for(&PrimitiveType::Boolean), Ok(Some(DocType::Boolean)));
        assert_eq!(doc_type_for(&PrimitiveType::ObjectId), Ok(Some(DocType::String)));
    }

    #[test]
    fn test_array_ignores_element_type() {
        let nested = PrimitiveType::array_of(PrimitiveType::Structured);
        assert_eq!(doc_type_for(&nested), Ok(Some(DocType::Array)));
        let hidden = PrimitiveType::array_of(PrimitiveType::Text).with_hidden_element();
        assert_eq!(doc_type_for(&hidden), Ok(Some(DocType::Array)));
    }

    #[test]
    fn test_opaque_types_have_no_mapping() {
        for ty in [
            PrimitiveType::Structured,
            PrimitiveType::Mixed,
            PrimitiveType::Buffer,
        ] {
            assert_eq!(doc_type_for(&ty), Ok(None));
        }
    }

    #[test]
    fn test_unrecognized_fails_fast() {
        let err = doc_type_for(&PrimitiveType::Unrecognized("Decimal128".into())).unwrap_err();
        assert_eq!(
            err,
            DocError::UnrecognizedType {
                descriptor: "Decimal128".to_string()
            }
        );
    }

    #[test]
    fn test_doc_type_serializes_as_swagger_tag() {
        assert_eq!(serde_json::to_string(&DocType::Date).unwrap(), "\"Date\"");
        assert_eq!(DocType::Array.to_string(), "Array");
    }
}
