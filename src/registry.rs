//! # Resource Registry
//!
//! Resources are registered once while the application starts up
//! ([`RegistryBuilder`]) and are read-only afterwards ([`ResourceRegistry`]).
//! Documentation requests only ever read the registry, so any number of them
//! can run at once without locking.
//!
//! Applications that reload their resource definitions at runtime hold a
//! [`SharedRegistry`]: each request takes a snapshot and keeps it for its whole
//! duration, and a replacement becomes visible to the next request.

use crate::error::DocError;
use crate::resource::{capitalize, validate_resource_name, DocumentableResource};
use arc_swap::ArcSwap;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info};

/// Collects resources during application start-up.
#[derive(Default)]
pub struct RegistryBuilder {
    resources: Vec<Arc<dyn DocumentableResource>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource. Catalog order follows registration order.
    pub fn register<R>(&mut self, resource: R) -> &mut Self
    where
        R: DocumentableResource + 'static,
    {
        self.resources.push(Arc::new(resource));
        self
    }

    /// Register a resource already shared elsewhere in the application.
    pub fn register_shared(&mut self, resource: Arc<dyn DocumentableResource>) -> &mut Self {
        self.resources.push(resource);
        self
    }

    /// Validate the registrations and freeze them.
    ///
    /// # Errors
    ///
    /// - [`DocError::InvalidResourceName`] for names that cannot appear in a path
    /// - [`DocError::DuplicateResource`] when a singular or plural name repeats
    /// - [`DocError::DuplicateModel`] when two singular names capitalize to the same model id
    /// - [`DocError::UnknownNestedResource`] when a declared child is not registered
    /// - [`DocError::DuplicateChild`] when a resource declares a child twice
    pub fn build(self) -> Result<ResourceRegistry, DocError> {
        let mut by_plural = HashMap::new();
        let mut by_singular = HashMap::new();
        let mut model_ids = HashSet::new();

        for (index, resource) in self.resources.iter().enumerate() {
            validate_resource_name(resource.singular())?;
            validate_resource_name(resource.plural())?;
            if by_singular
                .insert(resource.singular().to_string(), index)
                .is_some()
            {
                return Err(DocError::DuplicateResource {
                    name: resource.singular().to_string(),
                });
            }
            if by_plural
                .insert(resource.plural().to_string(), index)
                .is_some()
            {
                return Err(DocError::DuplicateResource {
                    name: resource.plural().to_string(),
                });
            }
            let model = capitalize(resource.singular());
            if !model_ids.insert(model.clone()) {
                return Err(DocError::DuplicateModel { model });
            }
        }

        for resource in &self.resources {
            let mut seen_children = HashSet::new();
            for child in resource.children() {
                if !seen_children.insert(child.as_str()) {
                    return Err(DocError::DuplicateChild {
                        parent: resource.singular().to_string(),
                        child: child.clone(),
                    });
                }
                if !by_singular.contains_key(child) {
                    return Err(DocError::UnknownNestedResource {
                        parent: resource.singular().to_string(),
                        child: child.clone(),
                    });
                }
                debug!(parent = %resource.singular(), child = %child, "Nested resource linked");
            }
        }

        info!(resources = self.resources.len(), "Resource registry built");

        Ok(ResourceRegistry {
            resources: self.resources,
            by_plural,
            by_singular,
        })
    }
}

/// Immutable set of registered resources.
pub struct ResourceRegistry {
    resources: Vec<Arc<dyn DocumentableResource>>,
    by_plural: HashMap<String, usize>,
    by_singular: HashMap<String, usize>,
}

impl ResourceRegistry {
    /// A registry with no resources
    pub fn empty() -> Self {
        ResourceRegistry {
            resources: Vec::new(),
            by_plural: HashMap::new(),
            by_singular: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Resources in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn DocumentableResource> {
        self.resources.iter().map(|r| r.as_ref())
    }

    /// Look up a resource by its plural name (the documentation path segment).
    pub fn get(&self, plural: &str) -> Option<&dyn DocumentableResource> {
        self.by_plural
            .get(plural)
            .and_then(|&i| self.resources.get(i))
            .map(|r| r.as_ref())
    }

    /// Look up a resource by its singular name (how children are declared).
    pub fn by_singular(&self, singular: &str) -> Option<&dyn DocumentableResource> {
        self.by_singular
            .get(singular)
            .and_then(|&i| self.resources.get(i))
            .map(|r| r.as_ref())
    }
}

impl std::fmt::Debug for ResourceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.resources.iter().map(|r| r.plural()))
            .finish()
    }
}

/// A registry that can be swapped while documentation requests are in flight.
pub struct SharedRegistry {
    current: ArcSwap<ResourceRegistry>,
}

impl SharedRegistry {
    pub fn new(registry: ResourceRegistry) -> Self {
        SharedRegistry {
            current: ArcSwap::from_pointee(registry),
        }
    }

    /// The registry as of now. Hold it for the duration of one request.
    pub fn snapshot(&self) -> Arc<ResourceRegistry> {
        self.current.load_full()
    }

    /// Publish a new registry. Requests holding an older snapshot keep it.
    pub fn replace(&self, registry: ResourceRegistry) {
        info!(resources = registry.len(), "Resource registry replaced");
        self.current.store(Arc::new(registry));
    }
}

impl From<ResourceRegistry> for SharedRegistry {
    fn from(registry: ResourceRegistry) -> Self {
        SharedRegistry::new(registry)
    }
}
