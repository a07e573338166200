use super::types::{FieldDescriptor, PrimitiveType};
use crate::error::DocError;
use crate::registry::{RegistryBuilder, ResourceRegistry};
use crate::resource::{HttpVerb, ResourceDefinition};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Top level of a resource definitions file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefinitionsFile {
    #[serde(default)]
    pub resources: Vec<ResourceSpec>,
}

/// One resource as written in a definitions file.
///
/// Kept close to the file format so the linter can inspect raw values before
/// they are validated into a [`ResourceDefinition`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSpec {
    pub singular: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
    #[serde(default)]
    pub virtuals: Vec<String>,
    #[serde(default)]
    pub children: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub type_descriptor: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub hidden: bool,
    /// Hide the element of an array field
    #[serde(default)]
    pub element_hidden: bool,
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl FieldSpec {
    pub fn to_descriptor(&self) -> FieldDescriptor {
        let mut primitive_type = PrimitiveType::parse(&self.type_descriptor);
        if self.element_hidden {
            primitive_type = primitive_type.with_hidden_element();
        }
        FieldDescriptor {
            name: self.name.clone(),
            primitive_type,
            required: self.required,
            default_hidden: self.hidden,
            enum_values: self.enum_values.clone().unwrap_or_default(),
            min: self.min,
            max: self.max,
        }
    }
}

impl ResourceSpec {
    /// Validate into a [`ResourceDefinition`].
    ///
    /// # Errors
    ///
    /// Fails on unknown verbs and invalid selection expressions. Unknown type
    /// descriptors are carried through and reported when documentation is
    /// generated (or earlier, by the linter).
    pub fn to_definition(&self) -> Result<ResourceDefinition, DocError> {
        let mut definition = ResourceDefinition::new(self.singular.clone());
        if let Some(plural) = &self.plural {
            definition = definition.with_plural(plural.clone());
        }
        if let Some(id_field) = &self.id_field {
            definition = definition.with_id_field(id_field.clone());
        }
        if let Some(verbs) = &self.verbs {
            let parsed = verbs
                .iter()
                .map(|v| HttpVerb::parse(v))
                .collect::<Result<Vec<_>, _>>()?;
            definition = definition.with_verbs(parsed);
        }
        if let Some(select) = &self.select {
            definition = definition.with_selection(select)?;
        }
        for field in &self.fields {
            definition = definition.with_field(field.to_descriptor());
        }
        for name in &self.virtuals {
            definition = definition.with_computed(name.clone());
        }
        for child in &self.children {
            definition = definition.with_child(child.clone());
        }
        Ok(definition)
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false)
}

/// Parse definitions from YAML (`yaml = true`) or JSON text.
pub fn parse_definitions(content: &str, yaml: bool) -> anyhow::Result<DefinitionsFile> {
    let file = if yaml {
        serde_yaml::from_str(content)?
    } else {
        serde_json::from_str(content)?
    };
    Ok(file)
}

/// Read a definitions file. The format follows the extension (`.yaml`/`.yml`, else JSON).
pub fn read_definitions(path: &Path) -> anyhow::Result<DefinitionsFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading resource definitions from {}", path.display()))?;
    parse_definitions(&content, is_yaml(path))
        .with_context(|| format!("parsing resource definitions in {}", path.display()))
}

/// Build a registry from parsed definitions.
pub fn registry_from_definitions(file: &DefinitionsFile) -> Result<ResourceRegistry, DocError> {
    let mut builder = RegistryBuilder::new();
    for spec in &file.resources {
        builder.register(spec.to_definition()?);
    }
    builder.build()
}

/// Read a definitions file and build the registry from it.
pub fn load_registry(path: &Path) -> anyhow::Result<ResourceRegistry> {
    let file = read_definitions(path)?;
    let registry = registry_from_definitions(&file)
        .with_context(|| format!("registering resources from {}", path.display()))?;
    info!(
        path = %path.display(),
        resources = registry.len(),
        "Resource definitions loaded"
    );
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::DocumentableResource;

    const YAML: &str = r#"
resources:
  - singular: vegetable
    verbs: [get, post, put, del, head]
    select: "-species"
    fields:
      - { name: name, type: string, required: true }
      - { name: diseases, type: "[string]", element_hidden: true }
      - { name: weight, type: number, min: 0, max: 10 }
    virtuals: [label]
"#;

    #[test]
    fn test_parse_yaml_definitions() {
        let file = parse_definitions(YAML, true).unwrap();
        assert_eq!(file.resources.len(), 1);
        let vegetable = file.resources[0].to_definition().unwrap();
        assert_eq!(vegetable.plural(), "vegetables");
        assert_eq!(vegetable.verbs().len(), 5);
        assert_eq!(vegetable.verbs()[3], HttpVerb::Delete);
        assert!(vegetable.fields()[1].is_hidden());
        assert_eq!(vegetable.fields()[2].max, Some(10.0));
        assert_eq!(vegetable.computed_fields()[0].name, "label");
    }

    #[test]
    fn test_parse_json_definitions() {
        let json = r#"{"resources":[{"singular":"goose","plural":"geese"}]}"#;
        let file = parse_definitions(json, false).unwrap();
        let registry = registry_from_definitions(&file).unwrap();
        assert!(registry.get("geese").is_some());
    }

    #[test]
    fn test_unknown_verb_rejected() {
        let spec = ResourceSpec {
            singular: "thing".into(),
            plural: None,
            id_field: None,
            verbs: Some(vec!["patch".into()]),
            select: None,
            fields: vec![],
            virtuals: vec![],
            children: vec![],
        };
        assert!(matches!(
            spec.to_definition(),
            Err(DocError::UnknownVerb { .. })
        ));
    }
}
