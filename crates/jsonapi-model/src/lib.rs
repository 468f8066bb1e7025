//! # JSON:API Model
//!
//! This crate turns parsed JSON:API documents into graphs of strongly-typed
//! domain objects. Each resource is dispatched to a domain type by its
//! `type` name, and relationship references are resolved against the
//! document's compound `included` section.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Document Layer** ([`Document`]) - The typed JSON:API input, parsed with `serde_json`
//! 2. **Model Layer** ([`DomainModel`]) - Your domain types: dynamic attributes plus related models
//! 3. **Building Layer** ([`ModelFactory`]) - Type resolution and relationship resolution
//!
//! ## Type Resolution
//!
//! For every resource type name, the factory tries in order:
//!
//! - a [`TypeFactory`] registered for that name,
//! - an explicit [`TypeMapper`] entry,
//! - the [`TypeRegistry`] entry named `default_namespace + type_name`.
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonapi_model::{domain_model, DomainModel, ModelFactory, TypeRegistry};
//!
//! domain_model!(pub Article);
//! domain_model!(pub Person);
//!
//! let mut registry = TypeRegistry::new();
//! registry
//!     .register_in::<Article>("app::", "articles")
//!     .register_in::<Person>("app::", "people");
//!
//! let factory = ModelFactory::with_registry(registry);
//! let models = factory.build_str(r#"{
//!     "data": {
//!         "type": "articles", "id": "1",
//!         "attributes": { "title": "T" },
//!         "relationships": { "author": { "data": { "type": "people", "id": "9" } } }
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(models.len(), 1);
//! let author = &models[0].relationships()[0];
//! assert!(author.is::<Person>());
//! assert_eq!(author.id(), Some("9"));
//! assert!(!author.has("name"));
//! ```
//!
//! ## Concurrency Model
//!
//! Building is synchronous and in-memory. [`ModelFactory::build`] takes
//! `&self` and only reads its tables, so one configured factory can serve
//! many threads. Reconfigure it only while no build is running.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockTypeFactory`](mock::MockTypeFactory), a
//! recording type factory with injectable failures.

pub mod config;
pub mod document;
pub mod error;
pub mod factory;
pub mod mapper;
pub mod mock;
pub mod model;
pub mod registry;
pub mod tracing;
pub mod type_factory;

// Re-export core types for convenience
pub use config::{FactoryConfig, DEFAULT_NAMESPACE};
pub use document::{
    Attributes, Document, Identifier, PrimaryData, Relationship, RelationshipData, Relationships,
    Resource,
};
pub use error::ModelError;
pub use factory::ModelFactory;
pub use mapper::{TargetType, TypeMapper};
pub use model::{DomainModel, ModelData};
pub use registry::TypeRegistry;
pub use type_factory::TypeFactory;
