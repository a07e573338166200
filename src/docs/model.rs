use super::types::{AllowableValues, ModelDefinition, Properties, PropertyDoc};
use crate::config::GeneratorConfig;
use crate::error::DocError;
use crate::resource::{capitalize, DocumentableResource};
use crate::schema::{doc_type_for, DocType, FieldDescriptor};
use crate::selection::VisibilityResolver;
use tracing::{debug, warn};

/// Build the model definition of a resource.
///
/// Declared fields come first in declaration order, followed by computed fields
/// when [`GeneratorConfig::supports_virtual_fields`] is set. A computed field
/// named like a declared field is skipped. Each field passes
/// through the [`VisibilityResolver`] before it is documented.
///
/// # Errors
///
/// [`DocError::UnrecognizedType`] if any declared field, visible or not, has a
/// type descriptor the mapper does not know.
pub fn generate_model_definition<R>(
    resource: &R,
    config: &GeneratorConfig,
) -> Result<ModelDefinition, DocError>
where
    R: DocumentableResource + ?Sized,
{
    let id = capitalize(resource.singular());
    let resolver = VisibilityResolver::new(
        resource.selection(),
        resource.id_field(),
        config.field_visibility,
    );
    let mut properties = Properties::default();

    for field in resource.fields() {
        let mapped = doc_type_for(&field.primitive_type)?;
        if !resolver.includes(&field.name, field.is_hidden()) {
            continue;
        }
        let doc_type = mapped.unwrap_or_else(|| {
            warn!(
                model = %id,
                field = %field.name,
                descriptor = %field.primitive_type,
                "Field type has no documentation mapping; documenting as string"
            );
            DocType::String
        });
        properties.insert(
            field.name.clone(),
            PropertyDoc {
                doc_type,
                required: field.required,
                allowable_values: allowable_values_for(field),
            },
        );
    }

    if config.supports_virtual_fields {
        for computed in resource.computed_fields() {
            if resource.fields().iter().any(|f| f.name == computed.name) {
                warn!(
                    model = %id,
                    field = %computed.name,
                    "Computed field shadows a declared field; keeping the declared one"
                );
                continue;
            }
            if !resolver.includes(&computed.name, false) {
                continue;
            }
            properties.insert(
                computed.name.clone(),
                PropertyDoc {
                    doc_type: DocType::String,
                    required: false,
                    allowable_values: None,
                },
            );
        }
    }

    debug!(model = %id, properties = properties.len(), "Model definition generated");
    Ok(ModelDefinition { id, properties })
}

/// A numeric bound takes precedence over an enumeration.
fn allowable_values_for(field: &FieldDescriptor) -> Option<AllowableValues> {
    if field.min.is_some() || field.max.is_some() {
        return Some(AllowableValues::Range {
            min: field.min,
            max: field.max,
        });
    }
    if !field.enum_values.is_empty() {
        return Some(AllowableValues::List {
            values: field.enum_values.clone(),
        });
    }
    None
}
