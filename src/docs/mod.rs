//! Swagger 1.1 document generation.
//!
//! Generation runs bottom-up: [`model`] turns a resource's fields into a model
//! definition, [`operations`] produces the routes and operations for each verb,
//! [`resource`] assembles both (plus nested resources) into one resource's
//! documentation, and [`catalog`] wraps everything in the response envelopes.

pub mod catalog;
pub mod model;
pub mod operations;
pub mod resource;
pub mod service;
pub mod types;

pub use catalog::*;
pub use model::*;
pub use operations::*;
pub use resource::*;
pub use service::*;
pub use types::*;
