//! # Type Mapping
//!
//! [`TargetType`] is a runtime handle on a concrete [`DomainModel`] type: its
//! name, its `TypeId` and a constructor. [`TypeMapper`] holds the explicit,
//! caller-supplied table from JSON:API type names to target types. It has no
//! implicit entries.

use crate::document::Attributes;
use crate::error::ModelError;
use crate::model::{short_type_name, DomainModel};
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;

/// A constructible domain type, resolved at runtime.
///
/// Two target types are equal when they construct the same concrete type.
#[derive(Clone, Copy)]
pub struct TargetType {
    name: &'static str,
    type_id: TypeId,
    construct: fn(Attributes) -> Box<dyn DomainModel>,
}

impl TargetType {
    pub fn of<T: DomainModel>() -> Self {
        Self {
            name: short_type_name(std::any::type_name::<T>()),
            type_id: TypeId::of::<T>(),
            construct: construct_boxed::<T>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn construct(&self, attributes: Attributes) -> Box<dyn DomainModel> {
        (self.construct)(attributes)
    }
}

fn construct_boxed<T: DomainModel>(attributes: Attributes) -> Box<dyn DomainModel> {
    Box::new(T::from_attributes(attributes))
}

impl PartialEq for TargetType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for TargetType {}

impl fmt::Debug for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TargetType").field(&self.name).finish()
    }
}

/// Explicit mapping of JSON:API type names to target types.
#[derive(Debug, Clone, Default)]
pub struct TypeMapper {
    mapped_types: HashMap<String, TargetType>,
}

impl TypeMapper {
    pub fn new(mapped_types: HashMap<String, TargetType>) -> Self {
        Self { mapped_types }
    }

    pub fn should_be_mapped(&self, type_name: &str) -> bool {
        self.mapped_types.contains_key(type_name)
    }

    /// Gets the target type mapped to `type_name`.
    ///
    /// # Errors
    /// [`ModelError::UnmappedType`] when [`should_be_mapped`](Self::should_be_mapped)
    /// is false for that name.
    pub fn mapped_type(&self, type_name: &str) -> Result<&TargetType, ModelError> {
        self.mapped_types
            .get(type_name)
            .ok_or_else(|| ModelError::UnmappedType(type_name.to_string()))
    }

    pub fn mapped_types(&self) -> &HashMap<String, TargetType> {
        &self.mapped_types
    }

    /// Replaces the whole table.
    pub fn set_mapped_types(&mut self, mapped_types: HashMap<String, TargetType>) {
        self.mapped_types = mapped_types;
    }

    /// Adds or replaces one entry.
    pub fn map(&mut self, type_name: impl Into<String>, target: TargetType) {
        self.mapped_types.insert(type_name.into(), target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::domain_model!(Article);
    crate::domain_model!(Person);

    #[test]
    fn lookup_is_explicit() {
        let mut mapper = TypeMapper::default();
        mapper.map("articles", TargetType::of::<Article>());

        assert!(mapper.should_be_mapped("articles"));
        assert!(!mapper.should_be_mapped("people"));
        assert_eq!(
            mapper.mapped_type("articles").unwrap(),
            &TargetType::of::<Article>()
        );
        assert!(matches!(
            mapper.mapped_type("people"),
            Err(ModelError::UnmappedType(name)) if name == "people"
        ));
    }

    #[test]
    fn set_mapped_types_replaces_table() {
        let mut mapper = TypeMapper::default();
        mapper.map("articles", TargetType::of::<Article>());
        mapper.set_mapped_types(HashMap::from([(
            "people".to_string(),
            TargetType::of::<Person>(),
        )]));

        assert!(!mapper.should_be_mapped("articles"));
        assert_eq!(mapper.mapped_types().len(), 1);
    }

    #[test]
    fn target_type_constructs_its_type() {
        let target = TargetType::of::<Person>();
        assert_eq!(target.name(), "Person");
        assert_ne!(target, TargetType::of::<Article>());

        let built = target.construct(Attributes::new());
        assert!(built.is::<Person>());
    }
}
