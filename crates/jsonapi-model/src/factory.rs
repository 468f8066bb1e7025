//! # Model Factory
//!
//! `ModelFactory` turns a [`Document`] into an ordered list of
//! [`DomainModel`]s.
//!
//! ## Algorithm
//!
//! 1. **Included pass**: every resource in `included` is built, in document
//!    order, into a lookup pool. Their relationship stubs are extracted but
//!    never resolved.
//! 2. **Primary pass**: every primary resource is built in order; its
//!    relationship stubs are then replaced by matching models from the pool.
//!
//! A single primary resource still yields a one-element list, and an empty
//! collection (or `null` data) yields an empty one.
//!
//! ## Type resolution
//!
//! Given a JSON:API type name, the first rule that applies wins:
//!
//! 1. a [`TypeFactory`] registered for the name builds the model;
//! 2. the [`TypeMapper`] target type is constructed;
//! 3. the [`TypeRegistry`] entry named `default_namespace + type_name` is
//!    constructed.
//!
//! If none applies the build fails with [`ModelError::UnresolvedType`].
//! Stubs go through the same rule.
//!
//! ## Relationship resolution
//!
//! A stub is replaced by the first pooled model of the identical concrete
//! type with the same `id`. Unmatched stubs stay in place with only their
//! `id`.
//!
//! ```rust
//! use jsonapi_model::{domain_model, DomainModel, ModelFactory, TargetType};
//!
//! domain_model!(pub Article);
//! domain_model!(pub Person);
//!
//! let mut factory = ModelFactory::new();
//! factory
//!     .map_type("articles", TargetType::of::<Article>())
//!     .map_type("people", TargetType::of::<Person>());
//!
//! let models = factory.build_str(r#"{
//!     "data": [{
//!         "type": "articles", "id": "1",
//!         "attributes": { "title": "T" },
//!         "relationships": { "author": { "data": { "type": "people", "id": "9" } } }
//!     }],
//!     "included": [{ "type": "people", "id": "9", "attributes": { "name": "Dan" } }]
//! }"#).unwrap();
//!
//! let article = models[0].downcast_ref::<Article>().unwrap();
//! let author = article.relationships()[0].downcast_ref::<Person>().unwrap();
//! assert_eq!(author.get("name").unwrap(), "Dan");
//! ```

use crate::config::{FactoryConfig, DEFAULT_NAMESPACE};
use crate::document::{Attributes, Document, Resource};
use crate::error::ModelError;
use crate::mapper::{TargetType, TypeMapper};
use crate::model::DomainModel;
use crate::registry::TypeRegistry;
use crate::type_factory::TypeFactory;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// Builds domain models from JSON:API documents.
///
/// The mapping tables are only read during [`build`](Self::build), so a
/// configured factory can be shared behind an `Arc` and used from several
/// threads at once. Each call owns its included pool and result list.
#[derive(Clone)]
pub struct ModelFactory {
    type_factories: HashMap<String, Arc<dyn TypeFactory>>,
    type_mapper: TypeMapper,
    registry: TypeRegistry,
    default_namespace: String,
}

impl ModelFactory {
    /// An empty factory using [`DEFAULT_NAMESPACE`] and no registered types.
    pub fn new() -> Self {
        Self::with_registry(TypeRegistry::new())
    }

    pub fn with_registry(registry: TypeRegistry) -> Self {
        Self {
            type_factories: HashMap::new(),
            type_mapper: TypeMapper::default(),
            registry,
            default_namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    /// Builds a factory from configuration, resolving every mapped type
    /// through `registry`.
    ///
    /// # Errors
    /// [`ModelError::Config`] when a mapping names an unregistered type.
    pub fn from_config(config: &FactoryConfig, registry: TypeRegistry) -> Result<Self, ModelError> {
        let mut mapped_types = HashMap::with_capacity(config.mapped_types.len());
        for (type_name, qualified_name) in &config.mapped_types {
            let target = registry.resolve(qualified_name).ok_or_else(|| {
                ModelError::Config(format!(
                    "type {type_name} is mapped to unregistered {qualified_name}"
                ))
            })?;
            mapped_types.insert(type_name.clone(), *target);
        }

        let mut factory = Self::with_registry(registry);
        factory.set_mapped_types(mapped_types);
        factory.set_default_namespace(config.default_namespace.clone());
        Ok(factory)
    }

    // --- Configuration ---

    pub fn set_type_factories(&mut self, type_factories: HashMap<String, Arc<dyn TypeFactory>>) {
        self.type_factories = type_factories;
    }

    pub fn type_factories(&self) -> &HashMap<String, Arc<dyn TypeFactory>> {
        &self.type_factories
    }

    pub fn register_type_factory(
        &mut self,
        type_name: impl Into<String>,
        factory: impl TypeFactory + 'static,
    ) -> &mut Self {
        self.type_factories.insert(type_name.into(), Arc::new(factory));
        self
    }

    pub fn set_mapped_types(&mut self, mapped_types: HashMap<String, TargetType>) {
        self.type_mapper.set_mapped_types(mapped_types);
    }

    pub fn mapped_types(&self) -> &HashMap<String, TargetType> {
        self.type_mapper.mapped_types()
    }

    pub fn map_type(&mut self, type_name: impl Into<String>, target: TargetType) -> &mut Self {
        self.type_mapper.map(type_name, target);
        self
    }

    pub fn type_mapper(&self) -> &TypeMapper {
        &self.type_mapper
    }

    pub fn set_default_namespace(&mut self, namespace: impl Into<String>) {
        self.default_namespace = namespace.into();
    }

    pub fn default_namespace(&self) -> &str {
        &self.default_namespace
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut TypeRegistry {
        &mut self.registry
    }

    // --- Building ---

    /// Builds the models described by `document`.
    ///
    /// # Errors
    /// Any unresolvable type or contract violation aborts the whole build.
    #[instrument(skip_all)]
    pub fn build(&self, document: &Document) -> Result<Vec<Box<dyn DomainModel>>, ModelError> {
        let included = self.parse_included(document)?;

        let Some(data) = document.data() else {
            debug!(included = included.len(), "No primary data");
            return Ok(Vec::new());
        };

        let resources = data.as_slice();
        let mut models = Vec::with_capacity(resources.len());
        for resource in resources {
            models.push(self.build_from_item(resource, &included)?);
        }

        debug!(
            collection = data.is_collection(),
            built = models.len(),
            included = included.len(),
            "Built document"
        );
        Ok(models)
    }

    /// Parses `json` as a JSON:API document and builds it.
    pub fn build_str(&self, json: &str) -> Result<Vec<Box<dyn DomainModel>>, ModelError> {
        let document: Document = json.parse()?;
        self.build(&document)
    }

    /// Builds from an already decoded JSON value.
    pub fn build_value(&self, value: Value) -> Result<Vec<Box<dyn DomainModel>>, ModelError> {
        self.build(&Document::from_value(value)?)
    }

    fn parse_included(&self, document: &Document) -> Result<Vec<Box<dyn DomainModel>>, ModelError> {
        document
            .included()
            .iter()
            .map(|resource| self.build_item(resource))
            .collect()
    }

    fn build_from_item(
        &self,
        resource: &Resource,
        included: &[Box<dyn DomainModel>],
    ) -> Result<Box<dyn DomainModel>, ModelError> {
        let mut model = self.build_item(resource)?;
        self.complete_relations(model.as_mut(), included);
        Ok(model)
    }

    /// Builds one resource with its relationships as unresolved stubs.
    fn build_item(&self, resource: &Resource) -> Result<Box<dyn DomainModel>, ModelError> {
        let attributes = extract_item_attributes(resource);
        let mut model = self.build_model(&resource.kind, &resource.id, attributes)?;
        model.set_relationships(self.extract_relationships(resource)?);
        trace!(kind = %resource.kind, id = %resource.id, model = model.type_name(), "Built item");
        Ok(model)
    }

    fn build_model(
        &self,
        type_name: &str,
        id: &str,
        attributes: Attributes,
    ) -> Result<Box<dyn DomainModel>, ModelError> {
        let model = match self.type_factories.get(type_name) {
            Some(factory) => factory.build(attributes)?,
            None => self.resolve_type(type_name)?.construct(attributes),
        };

        if model.id() != Some(id) {
            return Err(ModelError::Build(format!(
                "{} built for {type_name} {id} does not carry its id",
                model.type_name()
            )));
        }
        Ok(model)
    }

    /// Mapping first, then the registry convention.
    fn resolve_type(&self, type_name: &str) -> Result<&TargetType, ModelError> {
        if self.type_mapper.should_be_mapped(type_name) {
            return self.type_mapper.mapped_type(type_name);
        }

        let qualified_name = format!("{}{}", self.default_namespace, type_name);
        self.registry
            .resolve(&qualified_name)
            .ok_or(ModelError::UnresolvedType(qualified_name))
    }

    /// One stub per identifier, flattened across relationships in declaration
    /// order. Link-only relationships contribute nothing.
    fn extract_relationships(
        &self,
        resource: &Resource,
    ) -> Result<Vec<Box<dyn DomainModel>>, ModelError> {
        let mut relationships = Vec::new();

        for (name, relationship) in resource.relationships.iter() {
            let Some(data) = &relationship.data else {
                trace!(relationship = name, "Skipping link-only relationship");
                continue;
            };

            for identifier in data.identifiers() {
                let mut attributes = Attributes::new();
                attributes.insert("id".to_string(), Value::String(identifier.id.clone()));
                relationships.push(self.build_model(&identifier.kind, &identifier.id, attributes)?);
            }
        }

        Ok(relationships)
    }

    /// Replaces each stub with the first included model of the same concrete
    /// type and id.
    fn complete_relations(&self, model: &mut dyn DomainModel, included: &[Box<dyn DomainModel>]) {
        let mut relations = model.take_relationships();

        for stub in relations.iter_mut() {
            let stub_type = stub.as_any().type_id();
            let found = included.iter().find(|candidate| {
                candidate.as_any().type_id() == stub_type && candidate.id() == stub.id()
            });

            match found {
                Some(hydrated) => *stub = hydrated.clone_model(),
                None => trace!(model = stub.type_name(), id = ?stub.id(), "Unresolved relation"),
            }
        }

        model.set_relationships(relations);
    }
}

impl Default for ModelFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ModelFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut factories: Vec<&str> = self.type_factories.keys().map(String::as_str).collect();
        factories.sort_unstable();
        f.debug_struct("ModelFactory")
            .field("type_factories", &factories)
            .field("type_mapper", &self.type_mapper)
            .field("registry", &self.registry)
            .field("default_namespace", &self.default_namespace)
            .finish()
    }
}

/// `id` first, then the resource attributes. The resource `id` wins over an
/// attribute of the same name.
fn extract_item_attributes(resource: &Resource) -> Attributes {
    let mut attributes = Attributes::new();
    attributes.insert("id".to_string(), Value::String(resource.id.clone()));
    for (key, value) in &resource.attributes {
        if key != "id" {
            attributes.insert(key.clone(), value.clone());
        }
    }
    attributes
}
