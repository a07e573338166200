use std::fmt;

/// Documentation generation error
///
/// Returned by the generators, the selection parser and the registry builder.
/// Every variant is a configuration or programming error in the resource
/// definitions: none of them depend on the incoming request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocError {
    /// A field declares a primitive type descriptor the type mapper does not know
    ///
    /// The schema adapter and the mapper are out of sync. Generation for the
    /// owning resource stops here instead of guessing a type.
    UnrecognizedType {
        /// The descriptor text as declared
        descriptor: String,
    },
    /// A selection expression mixes `-name` tokens with bare or `+name` tokens
    MixedSelection {
        /// The offending expression
        expression: String,
    },
    /// A selection expression contains a lone `-` or `+`
    EmptySelectionToken {
        /// The offending expression
        expression: String,
    },
    /// A singular or plural resource name is empty or contains path characters
    InvalidResourceName {
        /// The rejected name
        name: String,
    },
    /// Two registered resources share a singular or plural name
    DuplicateResource {
        /// The repeated name
        name: String,
    },
    /// A resource declares a nested child that is not registered
    UnknownNestedResource {
        /// Singular name of the parent
        parent: String,
        /// Singular name of the missing child
        child: String,
    },
    /// A resource declares the same nested child more than once
    DuplicateChild {
        /// Singular name of the parent
        parent: String,
        /// Singular name of the repeated child
        child: String,
    },
    /// Two resources would document models under the same id, e.g. `goose` and `Goose`
    DuplicateModel {
        /// The shared model id
        model: String,
    },
    /// Two operations in one resource document would share a nickname
    DuplicateNickname {
        /// The repeated nickname
        nickname: String,
    },
    /// A verb string that is not one of get, post, put, del/delete or head
    UnknownVerb {
        /// The rejected verb
        verb: String,
    },
    /// A documentation lookup named a plural that is not registered
    UnknownResource {
        /// The requested plural name
        plural: String,
    },
}

impl fmt::Display for DocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocError::UnrecognizedType { descriptor } => {
                write!(f, "Unrecognized field type descriptor '{}'", descriptor)
            }
            DocError::MixedSelection { expression } => {
                write!(
                    f,
                    "Selection expression '{}' mixes exclusive (-name) and inclusive tokens. \
                    Use only '-name' tokens or only 'name'/'+name' tokens.",
                    expression
                )
            }
            DocError::EmptySelectionToken { expression } => {
                write!(
                    f,
                    "Selection expression '{}' contains a '-' or '+' without a field name",
                    expression
                )
            }
            DocError::InvalidResourceName { name } => {
                write!(
                    f,
                    "Invalid resource name '{}'. Names must be non-empty and may not contain '/', '{{' or '}}'",
                    name
                )
            }
            DocError::DuplicateResource { name } => {
                write!(f, "Resource name '{}' is registered more than once", name)
            }
            DocError::UnknownNestedResource { parent, child } => {
                write!(
                    f,
                    "Resource '{}' declares nested resource '{}' which is not registered",
                    parent, child
                )
            }
            DocError::DuplicateChild { parent, child } => {
                write!(
                    f,
                    "Resource '{}' declares nested resource '{}' more than once",
                    parent, child
                )
            }
            DocError::DuplicateModel { model } => {
                write!(f, "Model id '{}' is generated by more than one resource", model)
            }
            DocError::DuplicateNickname { nickname } => {
                write!(f, "Operation nickname '{}' is generated more than once", nickname)
            }
            DocError::UnknownVerb { verb } => {
                write!(
                    f,
                    "Unknown HTTP verb '{}'. Expected one of get, post, put, del, delete, head",
                    verb
                )
            }
            DocError::UnknownResource { plural } => {
                write!(f, "No resource is registered under '{}'", plural)
            }
        }
    }
}

impl std::error::Error for DocError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_descriptor() {
        let err = DocError::UnrecognizedType {
            descriptor: "decimal128".to_string(),
        };
        assert!(err.to_string().contains("decimal128"));
    }

    #[test]
    fn test_errors_box_into_anyhow() {
        let err: anyhow::Error = DocError::UnknownResource {
            plural: "geese".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "No resource is registered under 'geese'");
    }
}
