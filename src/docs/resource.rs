use super::model::generate_model_definition;
use super::operations::{generate_route, Scope};
use super::types::{ApiRoute, ModelDefinition, ResourceDoc};
use crate::config::GeneratorConfig;
use crate::error::DocError;
use crate::registry::ResourceRegistry;
use crate::resource::DocumentableResource;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Builds the documentation of one resource.
///
/// Construction documents the resource's own collection and instance routes.
/// Nested resources are attached afterwards, each adding its own two routes
/// after everything generated so far. [`ResourceDocAssembler::finalize`]
/// consumes the assembler, so a document can only be finalized once.
pub struct ResourceDocAssembler<'a> {
    resource: &'a dyn DocumentableResource,
    config: &'a GeneratorConfig,
    model_name: String,
    models: BTreeMap<String, ModelDefinition>,
    apis: Vec<ApiRoute>,
    nicknames: HashSet<String>,
}

impl<'a> ResourceDocAssembler<'a> {
    /// # Errors
    ///
    /// Propagates model generation errors and rejects duplicate nicknames.
    pub fn new(
        resource: &'a dyn DocumentableResource,
        config: &'a GeneratorConfig,
    ) -> Result<Self, DocError> {
        let model = generate_model_definition(resource, config)?;
        let mut assembler = ResourceDocAssembler {
            resource,
            config,
            model_name: model.id.clone(),
            models: BTreeMap::new(),
            apis: Vec::new(),
            nicknames: HashSet::new(),
        };
        assembler.models.insert(model.id.clone(), model);
        assembler.append_routes(vec![
            generate_route(resource, Scope::Collection, None, config),
            generate_route(resource, Scope::Instance, None, config),
        ])?;
        Ok(assembler)
    }

    /// Document `child` nested under this resource.
    ///
    /// # Errors
    ///
    /// Fails without changing the assembler if the child's model cannot be
    /// generated, a different model already uses its id
    /// ([`DocError::DuplicateModel`]), or one of its nicknames is already
    /// taken (for example when the same child is attached twice).
    pub fn attach_nested(&mut self, child: &dyn DocumentableResource) -> Result<&mut Self, DocError> {
        let model = generate_model_definition(child, self.config)?;
        if self.models.get(&model.id).is_some_and(|existing| *existing != model) {
            return Err(DocError::DuplicateModel { model: model.id });
        }
        let parent = Some(self.resource);
        self.append_routes(vec![
            generate_route(child, Scope::Collection, parent, self.config),
            generate_route(child, Scope::Instance, parent, self.config),
        ])?;
        self.models.insert(model.id.clone(), model);
        debug!(
            parent = %self.resource.singular(),
            child = %child.singular(),
            "Nested resource documented"
        );
        Ok(self)
    }

    fn append_routes(&mut self, routes: Vec<ApiRoute>) -> Result<(), DocError> {
        let mut incoming = HashSet::new();
        for operation in routes.iter().flat_map(|r| r.operations.iter()) {
            let fresh = !self.nicknames.contains(&operation.nickname)
                && incoming.insert(operation.nickname.clone());
            if !fresh {
                return Err(DocError::DuplicateNickname {
                    nickname: operation.nickname.clone(),
                });
            }
        }
        self.nicknames.extend(incoming);
        self.apis.extend(routes);
        Ok(())
    }

    pub fn finalize(self) -> ResourceDoc {
        ResourceDoc {
            model_name: self.model_name,
            models: self.models,
            apis: self.apis,
        }
    }
}

/// Document a registered resource together with its declared nested resources.
///
/// Nested resources are skipped when [`GeneratorConfig::supports_nested_paths`]
/// is off.
///
/// # Errors
///
/// [`DocError::UnknownNestedResource`] when a declared child is missing from
/// `registry`, plus anything [`ResourceDocAssembler`] reports.
pub fn document_resource(
    resource: &dyn DocumentableResource,
    registry: &ResourceRegistry,
    config: &GeneratorConfig,
) -> Result<ResourceDoc, DocError> {
    let mut assembler = ResourceDocAssembler::new(resource, config)?;
    if config.supports_nested_paths {
        for child_name in resource.children() {
            let child = registry.by_singular(child_name).ok_or_else(|| {
                DocError::UnknownNestedResource {
                    parent: resource.singular().to_string(),
                    child: child_name.clone(),
                }
            })?;
            assembler.attach_nested(child)?;
        }
    }
    Ok(assembler.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::ResourceDefinition;
    use crate::schema::{FieldDescriptor, PrimitiveType};

    fn goose() -> ResourceDefinition {
        ResourceDefinition::new("goose")
            .with_plural("geese")
            .with_field(FieldDescriptor::new("cooked", PrimitiveType::Boolean))
    }

    fn stuffing() -> ResourceDefinition {
        ResourceDefinition::new("stuffing")
            .with_field(FieldDescriptor::new("bread", PrimitiveType::Boolean))
    }

    fn paths(doc: &ResourceDoc) -> Vec<&str> {
        doc.apis.iter().map(|a| a.path.as_str()).collect()
    }

    #[test]
    fn test_collection_route_precedes_instance_route() {
        let goose = goose();
        let config = GeneratorConfig::default();
        let doc = ResourceDocAssembler::new(&goose, &config).unwrap().finalize();
        assert_eq!(doc.model_name, "Goose");
        assert_eq!(paths(&doc), ["/geese", "/geese/{id}"]);
        assert_eq!(doc.models.len(), 1);
    }

    #[test]
    fn test_attach_appends_without_disturbing() {
        let goose = goose();
        let stuffing = stuffing();
        let config = GeneratorConfig::default();
        let mut assembler = ResourceDocAssembler::new(&goose, &config).unwrap();
        let before = assembler.apis.clone();
        assembler.attach_nested(&stuffing).unwrap();
        let doc = assembler.finalize();

        assert_eq!(&doc.apis[..2], &before[..]);
        assert_eq!(
            paths(&doc),
            [
                "/geese",
                "/geese/{id}",
                "/geese/{gooseId}/stuffings",
                "/geese/{gooseId}/stuffings/{id}"
            ]
        );
        assert!(doc.models.contains_key("Stuffing"));
    }

    #[test]
    fn test_double_attach_rejected_and_harmless() {
        let goose = goose();
        let stuffing = stuffing();
        let config = GeneratorConfig::default();
        let mut assembler = ResourceDocAssembler::new(&goose, &config).unwrap();
        assembler.attach_nested(&stuffing).unwrap();
        let err = assembler.attach_nested(&stuffing).err().unwrap();
        assert_eq!(
            err,
            DocError::DuplicateNickname {
                nickname: "getStuffingsByGoose".to_string()
            }
        );
        assert_eq!(assembler.finalize().apis.len(), 4);
    }

    #[test]
    fn test_child_with_colliding_model_id_rejected() {
        let goose = goose();
        let honker = ResourceDefinition::new("Goose")
            .with_plural("honkers")
            .with_field(FieldDescriptor::new("honk", PrimitiveType::Boolean));
        let config = GeneratorConfig::default();
        let mut assembler = ResourceDocAssembler::new(&goose, &config).unwrap();

        let err = assembler.attach_nested(&honker).err().unwrap();
        assert_eq!(
            err,
            DocError::DuplicateModel {
                model: "Goose".to_string()
            }
        );

        let doc = assembler.finalize();
        assert_eq!(doc.apis.len(), 2);
        let names: Vec<_> = doc.models["Goose"].properties.names().collect();
        assert_eq!(names, ["cooked"]);
    }
}
