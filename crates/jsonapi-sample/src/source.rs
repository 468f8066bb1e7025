//! # Document Sources
//!
//! A [`DocumentSource`] produces a parsed JSON:API [`Document`]. Fetching is
//! asynchronous; building the models from the document is not.
//!
//! ```rust
//! use jsonapi_sample::source::{DocumentSource, StaticSource};
//!
//! #[tokio::main]
//! async fn main() {
//!     let source = StaticSource::new("inline", r#"{ "data": [] }"#);
//!     let document = source.fetch().await.unwrap();
//!     assert!(document.has_data());
//! }
//! ```

use crate::error::SampleError;
use async_trait::async_trait;
use jsonapi_model::Document;
use std::path::PathBuf;
use tracing::{debug, instrument};

#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Human-readable origin, used in logs.
    fn name(&self) -> &str;

    async fn fetch(&self) -> Result<Document, SampleError>;
}

/// Reads a document from a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self), fields(source = %self.name))]
    async fn fetch(&self) -> Result<Document, SampleError> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SampleError::Io {
                path: self.name.clone(),
                source,
            })?;
        debug!(bytes = json.len(), "Read document");
        Ok(json.parse()?)
    }
}

/// Serves a document held in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    json: String,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, json: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            json: json.into(),
        }
    }
}

#[async_trait]
impl DocumentSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Document, SampleError> {
        Ok(self.json.parse()?)
    }
}
