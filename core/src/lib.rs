#![deny(missing_docs)]

//! # ROAPI Core
//!
//! Generates Swagger 2.0 descriptions of Restful Objects APIs from an
//! introspected domain metamodel.

/// Shared error types.
pub mod error;

/// Metamodel descriptors and the loader contract.
pub mod metamodel;

/// Swagger schema model.
pub mod schema;

/// Generated document model.
pub mod document;

/// HTTP caching classes.
pub mod caching;

/// Audience levels.
pub mod visibility;

/// Value type to primitive schema mapping.
pub mod value_property;

/// Visibility and membership helpers.
pub mod util;

/// Exclusion and tagging policies.
pub mod strategies;

/// The full API generator.
pub mod generation;

/// The supporting-resources generator.
pub mod swagger_spec;

/// JSON / YAML rendering.
pub mod render;

/// Host-facing entry point.
pub mod service;

pub use caching::Caching;
pub use document::{GeneratedDocument, HttpMethod, Operation, Parameter, PathItem, Response};
pub use error::{AppError, AppResult};
pub use generation::Generation;
pub use metamodel::{Metamodel, MetamodelDump, SpecificationLoader, TypeDescriptor};
pub use render::{render, Format};
pub use schema::Schema;
pub use service::{SwaggerConfig, SwaggerService};
pub use strategies::{ClassExcluder, DefaultClassExcluder, DefaultTagger, Tagger};
pub use swagger_spec::SwaggerSpec;
pub use value_property::{ValuePropertyFactory, ValuePropertyPlugin};
pub use visibility::Visibility;
