#![allow(dead_code, clippy::expect_used)]

use restdoc::{
    FieldDescriptor, GeneratorConfig, PrimitiveType, RegistryBuilder, RequestContext,
    ResourceDefinition, ResourceRegistry,
};
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn vegetable() -> ResourceDefinition {
    ResourceDefinition::new("vegetable")
        .with_field(FieldDescriptor::new("name", PrimitiveType::Text).required())
        .with_field(FieldDescriptor::new(
            "diseases",
            PrimitiveType::array_of(PrimitiveType::Text).with_hidden_element(),
        ))
        .with_field(FieldDescriptor::new("species", PrimitiveType::Text).hidden())
        .with_field(FieldDescriptor::new("related", PrimitiveType::ObjectId))
}

pub fn fungus() -> ResourceDefinition {
    ResourceDefinition::new("fungus")
        .with_plural("fungi")
        .with_field(FieldDescriptor::new("dork", PrimitiveType::Boolean))
        .with_field(FieldDescriptor::new("hyphenated-field-name", PrimitiveType::Text))
        .with_field(FieldDescriptor::new("password", PrimitiveType::Text))
        .with_selection("-hyphenated-field-name -password")
        .expect("valid selection")
}

pub fn goose() -> ResourceDefinition {
    ResourceDefinition::new("goose")
        .with_plural("geese")
        .with_field(FieldDescriptor::new("cooked", PrimitiveType::Boolean))
        .with_child("stuffing")
}

pub fn stuffing() -> ResourceDefinition {
    ResourceDefinition::new("stuffing")
        .with_field(FieldDescriptor::new("bread", PrimitiveType::Boolean))
}

/// vegetable, fungus, goose and stuffing, in that order
pub fn fixture_registry() -> ResourceRegistry {
    let mut builder = RegistryBuilder::new();
    builder
        .register(vegetable())
        .register(fungus())
        .register(goose())
        .register(stuffing());
    builder.build().expect("fixture registry")
}

pub fn catalog_context() -> RequestContext {
    RequestContext::new("http", "localhost:8012", "/api/documentation")
}

pub fn resource_context(plural: &str) -> RequestContext {
    RequestContext::new("http", "localhost:8012", format!("/api/documentation/{plural}"))
}

pub fn config() -> GeneratorConfig {
    GeneratorConfig::default()
}
