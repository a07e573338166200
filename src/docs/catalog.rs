use super::resource::document_resource;
use super::types::{CatalogDocument, CatalogEntry, ResourceDocument};
use crate::config::GeneratorConfig;
use crate::error::DocError;
use crate::registry::ResourceRegistry;
use tracing::{error, info};
use url::Url;

/// Trailing segments dropped from a catalog request path (`/documentation`)
pub const CATALOG_TRIM_SEGMENTS: usize = 1;
/// Trailing segments dropped from a resource request path (`/documentation/<plural>`)
pub const RESOURCE_TRIM_SEGMENTS: usize = 2;

/// Where a documentation request arrived.
///
/// Generated base paths are derived from this rather than configured, so the
/// documents stay correct behind any mount point or proxy prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub scheme: String,
    /// Host, with the port when it is not the scheme default
    pub host: String,
    /// Request path; a query string, if present, is ignored
    pub path: String,
}

impl RequestContext {
    pub fn new(
        scheme: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        RequestContext {
            scheme: scheme.into(),
            host: host.into(),
            path: path.into(),
        }
    }

    pub fn from_url(url: &Url) -> Self {
        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => String::new(),
        };
        RequestContext {
            scheme: url.scheme().to_string(),
            host,
            path: url.path().to_string(),
        }
    }

    /// Parse an absolute request URL.
    pub fn parse(url: &str) -> Result<Self, url::ParseError> {
        Url::parse(url).map(|u| Self::from_url(&u))
    }

    /// `scheme://host` followed by the request path minus its last `trim` segments.
    pub fn base_path(&self, trim: usize) -> String {
        let path = self.path.split(&['?', '#'][..]).next().unwrap_or("");
        let segments: Vec<&str> = path
            .trim_end_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        let keep = segments.len().saturating_sub(trim);
        let mut base = format!("{}://{}", self.scheme, self.host);
        for segment in &segments[..keep] {
            base.push('/');
            base.push_str(segment);
        }
        base
    }
}

/// Build the resource listing for every registered resource.
///
/// A resource whose documentation fails to generate is left out of `apis`,
/// logged, and named in [`CatalogDocument::degraded`]; the other resources
/// are listed normally.
pub fn build_catalog(
    registry: &ResourceRegistry,
    ctx: &RequestContext,
    config: &GeneratorConfig,
) -> CatalogDocument {
    let root = config.documentation_path();
    let mut apis = Vec::with_capacity(registry.len());
    let mut degraded = Vec::new();

    for resource in registry.iter() {
        if let Err(err) = document_resource(resource, registry, config) {
            error!(
                resource = %resource.plural(),
                error = %err,
                "Resource documentation failed; omitting it from the catalog"
            );
            degraded.push(resource.plural().to_string());
            continue;
        }
        apis.push(CatalogEntry {
            path: format!("{root}/{}", resource.plural()),
            description: format!("Operations about {}.", resource.plural()),
        });
    }

    info!(
        resources = apis.len(),
        degraded = degraded.len(),
        host = %ctx.host,
        "Catalog generated"
    );

    CatalogDocument {
        api_version: config.api_version.clone(),
        swagger_version: config.swagger_version.clone(),
        base_path: ctx.base_path(CATALOG_TRIM_SEGMENTS),
        apis,
        degraded,
    }
}

/// Build the documentation of the resource registered under `plural`.
///
/// # Errors
///
/// [`DocError::UnknownResource`] when nothing is registered under `plural`,
/// otherwise whatever generation reports.
pub fn build_resource_document(
    registry: &ResourceRegistry,
    plural: &str,
    ctx: &RequestContext,
    config: &GeneratorConfig,
) -> Result<ResourceDocument, DocError> {
    let resource = registry
        .get(plural)
        .ok_or_else(|| DocError::UnknownResource {
            plural: plural.to_string(),
        })?;
    let doc = document_resource(resource, registry, config)?;

    info!(
        resource = %plural,
        routes = doc.apis.len(),
        models = doc.models.len(),
        "Resource documentation generated"
    );

    Ok(ResourceDocument {
        api_version: config.api_version.clone(),
        swagger_version: config.swagger_version.clone(),
        base_path: ctx.base_path(RESOURCE_TRIM_SEGMENTS),
        resource_path: format!("/{}", resource.plural()),
        apis: doc.apis,
        models: doc.models,
    })
}
