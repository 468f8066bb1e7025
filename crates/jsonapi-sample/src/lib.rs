//! # JSON:API Sample Library
//!
//! A small blog domain wired to [`jsonapi_model`]: the [`model`] types, the
//! registry and factory that dispatch to them, and async [`source`]s that
//! load documents.

pub mod error;
pub mod model;
pub mod source;

pub use error::SampleError;

use crate::model::{Article, Comment, Person};
use crate::source::DocumentSource;
use jsonapi_model::{DomainModel, ModelFactory, TypeRegistry, DEFAULT_NAMESPACE};
use std::sync::Arc;
use tracing::{info, instrument};

/// The compound document bundled with the sample binary.
pub const SAMPLE_DOCUMENT: &str = include_str!("../data/articles.json");

/// Registers the blog types under the default namespace.
pub fn sample_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry
        .register_in::<Article>(DEFAULT_NAMESPACE, "articles")
        .register_in::<Person>(DEFAULT_NAMESPACE, "people")
        .register_in::<Comment>(DEFAULT_NAMESPACE, "comments");
    registry
}

/// A factory that resolves every blog type through the registry convention.
pub fn sample_factory() -> ModelFactory {
    ModelFactory::with_registry(sample_registry())
}

/// Fetches a document and builds it on a blocking task.
#[instrument(skip_all, fields(source = source.name()))]
pub async fn load_models(
    factory: Arc<ModelFactory>,
    source: &dyn DocumentSource,
) -> Result<Vec<Box<dyn DomainModel>>, SampleError> {
    let document = source.fetch().await?;

    let models = tokio::task::spawn_blocking(move || factory.build(&document))
        .await
        .map_err(|e| SampleError::Task(e.to_string()))??;

    info!(models = models.len(), "Loaded");
    Ok(models)
}
