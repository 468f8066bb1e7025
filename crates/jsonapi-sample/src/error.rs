//! Error types for the sample application.

use jsonapi_model::ModelError;
use thiserror::Error;

/// Errors that can occur while loading or building sample documents.
#[derive(Debug, Error)]
pub enum SampleError {
    /// The document source could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be parsed or built.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A blocking build task panicked or was cancelled.
    #[error("Build task failed: {0}")]
    Task(String),
}
