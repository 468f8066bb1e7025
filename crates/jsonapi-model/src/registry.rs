//! # Type Registry
//!
//! Runtime table from qualified type names to [`TargetType`]s, populated at
//! startup. It backs the convention-based fallback of
//! [`ModelFactory`](crate::ModelFactory): a resource type with neither a type
//! factory nor an explicit mapping resolves to the entry named
//! `default_namespace + type_name`.
//!
//! ```rust
//! use jsonapi_model::{domain_model, TypeRegistry};
//!
//! domain_model!(pub Person);
//!
//! let mut registry = TypeRegistry::new();
//! registry.register_in::<Person>("app::", "people");
//!
//! assert!(registry.contains("app::people"));
//! assert_eq!(registry.resolve("app::people").unwrap().name(), "Person");
//! ```

use crate::mapper::TargetType;
use crate::model::DomainModel;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, TargetType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` under a fully qualified name, replacing any previous entry.
    pub fn register<T: DomainModel>(&mut self, qualified_name: impl Into<String>) -> &mut Self {
        self.types.insert(qualified_name.into(), TargetType::of::<T>());
        self
    }

    /// Registers `T` under `namespace` followed by `type_name`.
    pub fn register_in<T: DomainModel>(&mut self, namespace: &str, type_name: &str) -> &mut Self {
        self.register::<T>(format!("{namespace}{type_name}"))
    }

    pub fn resolve(&self, qualified_name: &str) -> Option<&TargetType> {
        self.types.get(qualified_name)
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.types.contains_key(qualified_name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
