use super::catalog::{build_catalog, build_resource_document, RequestContext};
use super::types::{CatalogDocument, ResourceDocument};
use crate::config::GeneratorConfig;
use crate::error::DocError;
use crate::registry::{ResourceRegistry, SharedRegistry};

/// Answers documentation requests against the current registry snapshot.
///
/// Each request works on one snapshot taken when it starts, so a registry
/// swapped in concurrently never shows up half-applied.
pub struct DocumentationService {
    registry: SharedRegistry,
    config: GeneratorConfig,
}

impl DocumentationService {
    pub fn new(registry: ResourceRegistry, config: GeneratorConfig) -> Self {
        DocumentationService {
            registry: SharedRegistry::new(registry),
            config,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    pub fn catalog(&self, ctx: &RequestContext) -> CatalogDocument {
        let registry = self.registry.snapshot();
        build_catalog(&registry, ctx, &self.config)
    }

    pub fn resource(
        &self,
        plural: &str,
        ctx: &RequestContext,
    ) -> Result<ResourceDocument, DocError> {
        let registry = self.registry.snapshot();
        build_resource_document(&registry, plural, ctx, &self.config)
    }
}
