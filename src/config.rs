//! # Generator Configuration
//!
//! Controls the envelope values of generated documents and which optional
//! generator capabilities are active.
//!
//! ## Sources
//!
//! Configuration can come from a YAML or JSON file:
//!
//! ```yaml
//! api_version: "1.2.0"
//! documentation_root: documentation
//! supports_virtual_fields: true
//! supports_nested_paths: true
//! document_collection_delete: false
//! field_visibility: selection   # or hidden_only
//! ```
//!
//! Missing keys take their defaults. Environment variables are applied on top
//! by [`GeneratorConfig::with_env_overrides`]:
//!
//! ### `RESTDOC_API_VERSION`
//!
//! Overrides `api_version`, the version reported in every document.
//!
//! ### `RESTDOC_DOC_ROOT`
//!
//! Overrides `documentation_root`, the path segment under which the catalog
//! and per-resource documents are served.

use crate::selection::FieldVisibilityPolicy;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Swagger specification version emitted in every document
pub const SWAGGER_VERSION: &str = "1.1";

/// Settings shared by every documentation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Version of the documented API (default `0.0.1`)
    pub api_version: String,
    /// Swagger version string (default `1.1`)
    pub swagger_version: String,
    /// Path segment the documentation is mounted under (default `documentation`)
    pub documentation_root: String,
    /// Header that lets an update bypass validation with raw update operators
    pub update_operator_header: String,
    /// Document computed (virtual) fields as string properties
    pub supports_virtual_fields: bool,
    /// Document nested sub-resource routes under their parents
    pub supports_nested_paths: bool,
    /// Document `delete` on collection routes (removal of every match of a query)
    pub document_collection_delete: bool,
    pub field_visibility: FieldVisibilityPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            api_version: "0.0.1".to_string(),
            swagger_version: SWAGGER_VERSION.to_string(),
            documentation_root: "documentation".to_string(),
            update_operator_header: "X-Baucis-Update-Operator".to_string(),
            supports_virtual_fields: true,
            supports_nested_paths: true,
            document_collection_delete: false,
            field_visibility: FieldVisibilityPolicy::Selection,
        }
    }
}

impl GeneratorConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `RESTDOC_API_VERSION` and `RESTDOC_DOC_ROOT` when set and non-empty.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(version) = env::var("RESTDOC_API_VERSION") {
            if !version.trim().is_empty() {
                self.api_version = version.trim().to_string();
            }
        }
        if let Ok(root) = env::var("RESTDOC_DOC_ROOT") {
            let root = root.trim().trim_matches('/');
            if !root.is_empty() {
                self.documentation_root = root.to_string();
            }
        }
        self
    }

    /// Load from a YAML (`.yaml`/`.yml`) or JSON file, then apply environment overrides.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading generator config {}", path.display()))?;
        let config: GeneratorConfig = if path
            .extension()
            .map(|s| s == "yaml" || s == "yml")
            .unwrap_or(false)
        {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        Ok(config.with_env_overrides())
    }

    /// `/<documentation_root>`
    pub fn documentation_path(&self) -> String {
        format!("/{}", self.documentation_root.trim_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.swagger_version, "1.1");
        assert_eq!(config.documentation_path(), "/documentation");
        assert!(config.supports_nested_paths);
        assert_eq!(config.field_visibility, FieldVisibilityPolicy::Selection);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let mut temp = NamedTempFile::with_suffix(".yaml").expect("create temp file");
        temp.write_all(b"api_version: \"2.0.0\"\nfield_visibility: hidden_only\n")
            .expect("write config");
        temp.flush().expect("flush");

        let config = GeneratorConfig::from_file(temp.path()).expect("load config");
        assert_eq!(config.field_visibility, FieldVisibilityPolicy::HiddenOnly);
        assert!(config.supports_virtual_fields);
        assert_eq!(config.update_operator_header, "X-Baucis-Update-Operator");
    }
}
