//! # Model Errors
//!
//! This module defines the error type returned by every fallible operation in
//! the crate. A failure anywhere inside [`ModelFactory::build`](crate::ModelFactory::build)
//! aborts the whole call; there is no partial result to recover.

/// Errors that can occur while mapping, resolving or building domain models.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The type name has no explicit mapping, but one was required.
    #[error("Could not map {0} to any type")]
    UnmappedType(String),

    /// No type factory, no mapping and no registry entry for the type name.
    #[error("Could not resolve type {0}")]
    UnresolvedType(String),

    /// A constructed object does not satisfy the domain model contract.
    #[error("Build error: {0}")]
    Build(String),

    /// The input is not a well-formed JSON:API document.
    #[error("Malformed document: {0}")]
    Document(#[from] serde_json::Error),

    /// A configuration table refers to something that does not exist.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
