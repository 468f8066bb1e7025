//! # Mock Type Factory & Testing Guide
//!
//! `MockTypeFactory<T>` is an in-memory [`TypeFactory`] for tests. It records
//! every attribute map it is asked to build from and can be primed with
//! per-call outcomes, so a test can check *that* a factory was preferred,
//! *what* it received and *how* its failure propagates.
//!
//! ## When to use the mock vs a real factory
//!
//! | Feature | MockTypeFactory | Closure / custom factory |
//! |---------|-----------------|--------------------------|
//! | **Call recording** | Built in (`calls`) | Manual |
//! | **Error injection** | `expect_build().return_err(..)` | Manual |
//! | **Use case** | Testing precedence and error paths | Production construction logic |
//!
//! ## Example
//!
//! ```rust
//! use jsonapi_model::mock::MockTypeFactory;
//! use jsonapi_model::{domain_model, DomainModel, ModelError, ModelFactory};
//!
//! domain_model!(pub Person);
//!
//! let people = MockTypeFactory::<Person>::new();
//! people.expect_build().return_ok();
//! people.expect_build().return_err(ModelError::Build("rejected".into()));
//!
//! let mut factory = ModelFactory::new();
//! factory.register_type_factory("people", people.clone());
//!
//! let ok = factory.build_str(r#"{ "data": { "type": "people", "id": "1" } }"#);
//! assert!(ok.is_ok());
//!
//! let err = factory.build_str(r#"{ "data": { "type": "people", "id": "2" } }"#);
//! assert!(matches!(err, Err(ModelError::Build(_))));
//!
//! assert_eq!(people.call_count(), 2);
//! people.verify();
//! ```
//!
//! Without queued expectations the mock simply constructs `T` from the
//! attributes it receives.

use crate::document::Attributes;
use crate::error::ModelError;
use crate::model::DomainModel;
use crate::type_factory::TypeFactory;
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

enum Expectation {
    Build,
    Fail(ModelError),
}

/// A recording [`TypeFactory`] that constructs `T`.
///
/// Clones share their recorded calls and expectations, so keep one handle in
/// the test and register a clone with the [`ModelFactory`](crate::ModelFactory).
pub struct MockTypeFactory<T: DomainModel> {
    calls: Arc<Mutex<Vec<Attributes>>>,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    _model: PhantomData<fn() -> T>,
}

impl<T: DomainModel> MockTypeFactory<T> {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            expectations: Arc::new(Mutex::new(VecDeque::new())),
            _model: PhantomData,
        }
    }

    /// Queues the outcome of the next `build` call.
    pub fn expect_build(&self) -> BuildExpectationBuilder {
        BuildExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Attribute maps received so far, in call order.
    pub fn calls(&self) -> Vec<Attributes> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Panics unless every queued expectation was consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: DomainModel> Default for MockTypeFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DomainModel> Clone for MockTypeFactory<T> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
            expectations: self.expectations.clone(),
            _model: PhantomData,
        }
    }
}

impl<T: DomainModel> TypeFactory for MockTypeFactory<T> {
    fn build(&self, attributes: Attributes) -> Result<Box<dyn DomainModel>, ModelError> {
        self.calls.lock().unwrap().push(attributes.clone());

        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(Expectation::Fail(error)) => Err(error),
            Some(Expectation::Build) | None => Ok(Box::new(T::from_attributes(attributes))),
        }
    }
}

/// Builder for a single `build` expectation.
pub struct BuildExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl BuildExpectationBuilder {
    /// The call constructs `T` from its attributes.
    pub fn return_ok(self) {
        self.expectations.lock().unwrap().push_back(Expectation::Build);
    }

    /// The call fails with `error`.
    pub fn return_err(self, error: ModelError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Fail(error));
    }
}
