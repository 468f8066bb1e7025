//! Domain types built from the blog's JSON:API resources.
//!
//! Each type is declared with [`domain_model!`](jsonapi_model::domain_model)
//! and adds typed accessors on top of the dynamic attribute map.

pub mod article;
pub mod comment;
pub mod person;

pub use article::*;
pub use comment::*;
pub use person::*;
