use crate::schema::DocType;
use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Constraint on the values a property accepts
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "valueType")]
pub enum AllowableValues {
    #[serde(rename = "LIST")]
    List { values: Vec<String> },
    #[serde(rename = "RANGE")]
    Range {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PropertyDoc {
    #[serde(rename = "type")]
    pub doc_type: DocType,
    pub required: bool,
    #[serde(rename = "allowableValues", skip_serializing_if = "Option::is_none")]
    pub allowable_values: Option<AllowableValues>,
}

/// Model properties in schema declaration order.
///
/// Serialized as a JSON object whose key order is the declaration order, so
/// repeated generations produce identical bytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties(Vec<(String, PropertyDoc)>);

impl Properties {
    /// Insert a property. A name seen before keeps its position and takes the new value.
    pub fn insert(&mut self, name: String, property: PropertyDoc) {
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = property,
            None => self.0.push((name, property)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PropertyDoc> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, p)| p)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, property)| (name, property)))
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ModelDefinition {
    pub id: String,
    pub properties: Properties,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Path,
    Query,
    Header,
    Body,
}

impl fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamLocation::Path => write!(f, "path"),
            ParamLocation::Query => write!(f, "query"),
            ParamLocation::Header => write!(f, "header"),
            ParamLocation::Body => write!(f, "body"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(rename = "paramType")]
    pub location: ParamLocation,
    pub name: String,
    pub description: String,
    pub data_type: String,
    pub required: bool,
    pub allow_multiple: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub reason: String,
}

/// One documented verb on one route
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub http_method: String,
    pub nickname: String,
    pub response_class: String,
    pub summary: String,
    pub parameters: Vec<Parameter>,
    pub error_responses: Vec<ErrorResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ApiRoute {
    pub path: String,
    pub description: String,
    pub operations: Vec<Operation>,
}

/// Everything documented about one resource: its models and its routes.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDoc {
    pub model_name: String,
    pub models: BTreeMap<String, ModelDefinition>,
    pub apis: Vec<ApiRoute>,
}

impl ResourceDoc {
    /// Every operation on every route, in route order
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.apis.iter().flat_map(|api| api.operations.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CatalogEntry {
    pub path: String,
    pub description: String,
}

/// Top-level resource listing
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    pub api_version: String,
    pub swagger_version: String,
    pub base_path: String,
    pub apis: Vec<CatalogEntry>,
    /// Plural names left out because their documentation failed to generate
    #[serde(skip)]
    pub degraded: Vec<String>,
}

/// Per-resource document as served to documentation viewers
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDocument {
    pub api_version: String,
    pub swagger_version: String,
    pub base_path: String,
    pub resource_path: String,
    pub apis: Vec<ApiRoute>,
    pub models: BTreeMap<String, ModelDefinition>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_allowable_values_wire_shape() {
        let list = AllowableValues::List {
            values: vec!["red".into(), "green".into()],
        };
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            json!({ "valueType": "LIST", "values": ["red", "green"] })
        );

        let range = AllowableValues::Range {
            min: None,
            max: Some(10.0),
        };
        assert_eq!(
            serde_json::to_value(&range).unwrap(),
            json!({ "valueType": "RANGE", "max": 10.0 })
        );
    }

    #[test]
    fn test_properties_keep_insertion_order() {
        let prop = |doc_type| PropertyDoc {
            doc_type,
            required: false,
            allowable_values: None,
        };
        let mut props = Properties::default();
        props.insert("zeta".into(), prop(DocType::String));
        props.insert("alpha".into(), prop(DocType::Double));
        props.insert("zeta".into(), prop(DocType::Boolean));

        let text = serde_json::to_string(&props).unwrap();
        assert_eq!(
            text,
            r#"{"zeta":{"type":"boolean","required":false},"alpha":{"type":"double","required":false}}"#
        );
    }

    #[test]
    fn test_parameter_wire_names() {
        let param = Parameter {
            location: ParamLocation::Query,
            name: "skip".into(),
            description: "How many documents to skip.".into(),
            data_type: "int".into(),
            required: false,
            allow_multiple: false,
        };
        let value = serde_json::to_value(&param).unwrap();
        assert_eq!(value["paramType"], "query");
        assert_eq!(value["dataType"], "int");
        assert_eq!(value["allowMultiple"], false);
    }

    #[test]
    fn test_catalog_does_not_serialize_degraded() {
        let catalog = CatalogDocument {
            api_version: "0.0.1".into(),
            swagger_version: "1.1".into(),
            base_path: "http://localhost/api".into(),
            apis: vec![],
            degraded: vec!["fungi".into()],
        };
        let value = serde_json::to_value(&catalog).unwrap();
        assert!(value.get("degraded").is_none());
        assert_eq!(value["swaggerVersion"], "1.1");
    }
}
