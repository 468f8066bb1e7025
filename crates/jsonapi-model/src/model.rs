//! # DomainModel Trait
//!
//! The `DomainModel` trait is the contract every built object satisfies. A
//! domain type embeds a [`ModelData`] (dynamic attributes plus an ordered
//! relationship list) and exposes it through the trait; every accessor is a
//! provided method, so a concrete type only wires up storage and a
//! constructor.
//!
//! Attributes are dynamically keyed on purpose: a JSON:API resource may carry
//! any attribute, and the builder copies all of them. Typed accessors belong
//! on the concrete domain type, on top of [`DomainModel::get`].
//!
//! # Declaring a domain type
//!
//! The [`domain_model!`](crate::domain_model) macro generates the struct and
//! the trait impl:
//!
//! ```rust
//! use jsonapi_model::{domain_model, DomainModel};
//! use serde_json::json;
//!
//! domain_model!(
//!     /// A blog article.
//!     pub Article
//! );
//!
//! let mut article = Article::default();
//! article.set("title", json!("Rails is Omakase"));
//! assert!(article.has("title"));
//! assert_eq!(article.type_name(), "Article");
//! ```

use crate::document::Attributes;
use crate::mapper::TargetType;
use serde_json::{json, Value};
use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Storage shared by every domain type: attributes and relationships.
#[derive(Debug, Default)]
pub struct ModelData {
    attributes: Attributes,
    relationships: Vec<Box<dyn DomainModel>>,
}

impl ModelData {
    pub fn new(attributes: Attributes) -> Self {
        Self {
            attributes,
            relationships: Vec::new(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl Clone for ModelData {
    fn clone(&self) -> Self {
        Self {
            attributes: self.attributes.clone(),
            relationships: self.relationships.iter().map(|r| r.clone_model()).collect(),
        }
    }
}

/// Contract for objects produced by [`ModelFactory`](crate::ModelFactory).
///
/// Implementations are usually generated by [`domain_model!`](crate::domain_model).
/// The required methods only expose storage and type information; the
/// attribute and relationship API is provided.
pub trait DomainModel: Any + Debug + Send + Sync {
    /// Constructs the model from its attributes (`id` included).
    fn from_attributes(attributes: Attributes) -> Self
    where
        Self: Sized;

    fn data(&self) -> &ModelData;

    fn data_mut(&mut self) -> &mut ModelData;

    /// Deep copy behind a fresh box.
    fn clone_model(&self) -> Box<dyn DomainModel>;

    fn as_any(&self) -> &dyn Any;

    // --- Provided ---

    /// Short name of the concrete type (e.g. `Article`, not `app::model::Article`).
    fn type_name(&self) -> &'static str {
        short_type_name(std::any::type_name_of_val(self))
    }

    /// Returns the attribute, or `None` when it was never set.
    fn get(&self, key: &str) -> Option<&Value> {
        self.data().attributes.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        self.data_mut().attributes.insert(key.to_string(), value);
    }

    /// Whether the attribute is present and not `null`.
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| !value.is_null())
    }

    /// Removes the attribute, returning its previous value.
    fn unset(&mut self, key: &str) -> Option<Value> {
        self.data_mut().attributes.shift_remove(key)
    }

    /// The resource id, when it is stored as a string.
    fn id(&self) -> Option<&str> {
        self.get("id").and_then(Value::as_str)
    }

    fn attributes(&self) -> &Attributes {
        &self.data().attributes
    }

    /// Related models, flattened across all relationships.
    ///
    /// The order is relationship-declaration order, then identifier order
    /// within each relationship. Relationship names are not kept: an
    /// `author` and an `editor` of the same type are told apart only by
    /// position.
    fn relationships(&self) -> &[Box<dyn DomainModel>] {
        &self.data().relationships
    }

    /// Replaces the whole relationship list.
    fn set_relationships(&mut self, relationships: Vec<Box<dyn DomainModel>>) {
        self.data_mut().relationships = relationships;
    }

    /// Moves the relationship list out, leaving it empty.
    fn take_relationships(&mut self) -> Vec<Box<dyn DomainModel>> {
        std::mem::take(&mut self.data_mut().relationships)
    }

    /// Related models whose concrete type is exactly `target`.
    fn relationships_matching(&self, target: &TargetType) -> Vec<&dyn DomainModel> {
        self.relationships()
            .iter()
            .map(|r| &**r)
            .filter(|r| r.as_any().type_id() == target.type_id())
            .collect()
    }

    /// Structural snapshot: type name, attributes and related snapshots.
    fn to_value(&self) -> Value {
        json!({
            "type": self.type_name(),
            "attributes": Value::Object(self.attributes().clone()),
            "relationships": self.relationships().iter().map(|r| r.to_value()).collect::<Vec<_>>(),
        })
    }
}

impl dyn DomainModel {
    pub fn is<T: DomainModel>(&self) -> bool {
        self.as_any().type_id() == TypeId::of::<T>()
    }

    pub fn downcast_ref<T: DomainModel>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Related models of concrete type `T`, in relationship order.
    pub fn relationships_of<T: DomainModel>(&self) -> impl Iterator<Item = &T> {
        self.relationships()
            .iter()
            .filter_map(|r| r.as_any().downcast_ref::<T>())
    }
}

impl Clone for Box<dyn DomainModel> {
    fn clone(&self) -> Self {
        self.clone_model()
    }
}

pub(crate) fn short_type_name(full: &'static str) -> &'static str {
    full.rsplit("::").next().unwrap_or(full)
}

/// Declares a domain type backed by [`ModelData`] and implements
/// [`DomainModel`] for it.
///
/// The generated struct is `Debug + Default + Clone` and has a `new`
/// constructor taking its attributes.
#[macro_export]
macro_rules! domain_model {
    ($(#[$meta:meta])* $vis:vis $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone)]
        $vis struct $name {
            data: $crate::ModelData,
        }

        impl $name {
            pub fn new(attributes: $crate::Attributes) -> Self {
                Self {
                    data: $crate::ModelData::new(attributes),
                }
            }
        }

        impl $crate::DomainModel for $name {
            fn from_attributes(attributes: $crate::Attributes) -> Self {
                Self::new(attributes)
            }

            fn data(&self) -> &$crate::ModelData {
                &self.data
            }

            fn data_mut(&mut self) -> &mut $crate::ModelData {
                &mut self.data
            }

            fn clone_model(&self) -> ::std::boxed::Box<dyn $crate::DomainModel> {
                ::std::boxed::Box::new(self.clone())
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    crate::domain_model!(Article);
    crate::domain_model!(Person);

    fn attributes(value: Value) -> Attributes {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("fixture must be an object"),
        }
    }

    #[test]
    fn attribute_accessors() {
        let mut article = Article::new(attributes(json!({ "id": "1", "title": "T" })));
        assert_eq!(article.id(), Some("1"));
        assert!(article.has("title"));
        assert!(!article.has("body"));
        assert_eq!(article.get("body"), None);

        article.set("body", json!("text"));
        assert_eq!(article.get("body"), Some(&json!("text")));

        assert_eq!(article.unset("title"), Some(json!("T")));
        assert!(!article.has("title"));
        assert_eq!(article.unset("title"), None);
    }

    #[test]
    fn null_attribute_is_not_set() {
        let article = Article::new(attributes(json!({ "id": "1", "title": null })));
        assert!(!article.has("title"));
        assert_eq!(article.get("title"), Some(&Value::Null));
    }

    #[test]
    fn relationship_filtering_is_exact_type() {
        let mut article = Article::new(attributes(json!({ "id": "1" })));
        article.set_relationships(vec![
            Box::new(Person::new(attributes(json!({ "id": "9" })))),
            Box::new(Article::new(attributes(json!({ "id": "2" })))),
            Box::new(Person::new(attributes(json!({ "id": "10" })))),
        ]);

        let people = article.relationships_matching(&TargetType::of::<Person>());
        let ids: Vec<_> = people.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![Some("9"), Some("10")]);

        let boxed: Box<dyn DomainModel> = Box::new(article);
        assert!(boxed.is::<Article>());
        assert_eq!(boxed.relationships_of::<Article>().count(), 1);
    }

    #[test]
    fn clone_is_deep() {
        let mut article = Article::new(attributes(json!({ "id": "1" })));
        article.set_relationships(vec![Box::new(Person::new(attributes(json!({ "id": "9" }))))]);

        let mut copy = article.clone();
        copy.set_relationships(Vec::new());
        assert_eq!(article.relationships().len(), 1);
        assert_eq!(article.to_value()["relationships"][0]["type"], json!("Person"));
    }
}
