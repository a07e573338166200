//! # restdoc
//!
//! **restdoc** produces [Swagger 1.1](https://github.com/swagger-api/swagger-spec/blob/master/versions/1.1.md)
//! documentation for REST resources declared with a field schema. Given a
//! resource's singular and plural names, its typed fields, its enabled verbs
//! and an optional field selection, it emits a model definition and the
//! collection and instance operations a client can call, then wraps them in a
//! catalog document and per-resource documents.
//!
//! ## Architecture
//!
//! - **[`schema`]** - field descriptors, the type mapper and the definitions file loader
//! - **[`selection`]** - selection expressions and field visibility
//! - **[`resource`]** - the [`DocumentableResource`] trait and a plain data implementation
//! - **[`registry`]** - start-up registration and snapshot-based runtime replacement
//! - **[`docs`]** - model, operation, resource and catalog generation
//! - **[`linter`]** - checks for definitions files
//! - **[`config`]** - [`GeneratorConfig`]
//! - **[`logging`]** - tracing subscriber setup for binaries
//! - **[`cli`]** - the `restdoc` command line
//!
//! ### Request Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Client
//!     participant Service as DocumentationService
//!     participant Registry as SharedRegistry
//!     participant Catalog as docs::catalog
//!     participant Assembler as ResourceDocAssembler
//!     participant Model as docs::model
//!     participant Ops as docs::operations
//!
//!     Client->>Service: GET /api/documentation/geese
//!     Service->>Registry: snapshot()
//!     Registry-->>Service: Arc<ResourceRegistry>
//!     Service->>Catalog: build_resource_document("geese")
//!     Catalog->>Assembler: new(goose)
//!     Assembler->>Model: generate_model_definition(goose)
//!     Model-->>Assembler: Goose
//!     Assembler->>Ops: generate_route(collection, instance)
//!     Ops-->>Assembler: /geese, /geese/{id}
//!     Catalog->>Assembler: attach_nested(stuffing)
//!     Assembler->>Ops: generate_route(nested)
//!     Ops-->>Assembler: /geese/{gooseId}/stuffings, ...
//!     Assembler-->>Catalog: finalize()
//!     Catalog-->>Client: ResourceDocument (basePath, resourcePath, apis, models)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use restdoc::{
//!     build_catalog, FieldDescriptor, GeneratorConfig, PrimitiveType, RegistryBuilder,
//!     RequestContext, ResourceDefinition,
//! };
//!
//! let mut builder = RegistryBuilder::new();
//! builder.register(
//!     ResourceDefinition::new("vegetable")
//!         .with_field(FieldDescriptor::new("name", PrimitiveType::Text).required()),
//! );
//! let registry = builder.build()?;
//!
//! let ctx = RequestContext::parse("http://localhost:8012/api/documentation")?;
//! let catalog = build_catalog(&registry, &ctx, &GeneratorConfig::default());
//! assert_eq!(catalog.base_path, "http://localhost:8012/api");
//! assert_eq!(catalog.apis[0].path, "/documentation/vegetables");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod linter;
pub mod logging;
pub mod registry;
pub mod resource;
pub mod schema;
pub mod selection;

pub use config::GeneratorConfig;
pub use docs::{
    build_catalog, build_resource_document, document_resource, generate_model_definition,
    CatalogDocument, DocumentationService, ModelDefinition, RequestContext, ResourceDoc,
    ResourceDocAssembler, ResourceDocument,
};
pub use error::DocError;
pub use registry::{RegistryBuilder, ResourceRegistry, SharedRegistry};
pub use resource::{DocumentableResource, HttpVerb, ResourceDefinition};
pub use schema::{load_registry, ComputedField, DocType, FieldDescriptor, PrimitiveType};
pub use selection::{FieldVisibilityPolicy, SelectionExpression, VisibilityResolver};
