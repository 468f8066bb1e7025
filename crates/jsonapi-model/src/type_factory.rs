//! # TypeFactory Trait
//!
//! A pluggable, per-type construction strategy. When a
//! [`ModelFactory`](crate::ModelFactory) has a `TypeFactory` registered for a
//! type name, it is invoked instead of the type mapping or the registry
//! convention.
//!
//! Closures with the right signature are type factories too:
//!
//! ```rust
//! use jsonapi_model::{domain_model, Attributes, DomainModel, ModelError, TypeFactory};
//! use serde_json::json;
//!
//! domain_model!(pub Person);
//!
//! let factory = |mut attributes: Attributes| -> Result<Box<dyn DomainModel>, ModelError> {
//!     attributes.insert("source".into(), json!("factory"));
//!     Ok(Box::new(Person::new(attributes)))
//! };
//!
//! let person = factory.build(Attributes::new()).unwrap();
//! assert_eq!(person.get("source"), Some(&json!("factory")));
//! ```

use crate::document::Attributes;
use crate::error::ModelError;
use crate::model::DomainModel;

pub trait TypeFactory: Send + Sync {
    /// Builds a model from the resource's attributes (`id` included).
    fn build(&self, attributes: Attributes) -> Result<Box<dyn DomainModel>, ModelError>;
}

impl<F> TypeFactory for F
where
    F: Fn(Attributes) -> Result<Box<dyn DomainModel>, ModelError> + Send + Sync,
{
    fn build(&self, attributes: Attributes) -> Result<Box<dyn DomainModel>, ModelError> {
        self(attributes)
    }
}
