//! # Observability & Tracing
//!
//! The library emits `tracing` events and never installs a subscriber
//! itself. Binaries call [`setup_tracing`] once at startup.
//!
//! ## What Gets Traced
//!
//! - **`build` span**: one span per [`ModelFactory::build`](crate::ModelFactory::build) call.
//! - **`debug`**: document summary (primary count, included pool size).
//! - **`trace`**: every built item, skipped link-only relationships and
//!   relationship stubs that found no included match.
//!
//! Failures are returned as [`ModelError`](crate::ModelError) and are not
//! logged by the library.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p jsonapi-sample
//! RUST_LOG=jsonapi_model=trace cargo run -p jsonapi-sample -- article.json
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
