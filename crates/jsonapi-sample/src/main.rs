//! # JSON:API Sample
//!
//! Loads JSON:API documents, builds them into the blog domain and logs the
//! resulting object graph.
//!
//! ```bash
//! # Build the bundled compound document
//! RUST_LOG=info cargo run -p jsonapi-sample
//!
//! # Build several files concurrently, with builder diagnostics
//! RUST_LOG=debug cargo run -p jsonapi-sample -- a.json b.json
//! ```

use jsonapi_model::tracing::setup_tracing;
use jsonapi_model::DomainModel;
use jsonapi_sample::model::{Article, Comment, Person};
use jsonapi_sample::source::{DocumentSource, FileSource, StaticSource};
use jsonapi_sample::{load_models, sample_factory, SampleError, SAMPLE_DOCUMENT};
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), SampleError> {
    setup_tracing();

    let sources: Vec<Box<dyn DocumentSource>> = {
        let paths: Vec<String> = std::env::args().skip(1).collect();
        if paths.is_empty() {
            vec![Box::new(StaticSource::new("bundled", SAMPLE_DOCUMENT))]
        } else {
            paths
                .into_iter()
                .map(|path| Box::new(FileSource::new(path)) as Box<dyn DocumentSource>)
                .collect()
        }
    };

    // One factory, shared read-only by every build.
    let factory = Arc::new(sample_factory());
    info!(types = ?factory.registry().names(), "Factory ready");

    let handles: Vec<_> = sources
        .into_iter()
        .map(|source| {
            let factory = Arc::clone(&factory);
            tokio::spawn(async move {
                let result = load_models(factory, source.as_ref()).await;
                (source.name().to_string(), result)
            })
        })
        .collect();

    let mut failures = 0;
    for handle in handles {
        let (name, result) = handle
            .await
            .map_err(|e| SampleError::Task(e.to_string()))?;
        match result {
            Ok(models) => report(&name, &models),
            Err(e) => {
                failures += 1;
                error!(source = %name, error = %e, "Build failed");
            }
        }
    }

    info!(failures, "Done");
    Ok(())
}

fn report(source: &str, models: &[Box<dyn DomainModel>]) {
    for model in models {
        if let Some(article) = model.downcast_ref::<Article>() {
            let author = article.author().and_then(Person::display_name);
            let comments: Vec<_> = article.comments().iter().map(|c| describe(c)).collect();
            info!(
                source,
                id = ?article.id(),
                title = ?article.title(),
                author = ?author,
                ?comments,
                "Article"
            );
        } else {
            warn!(source, model = model.type_name(), id = ?model.id(), "Unexpected primary model");
        }
    }
}

fn describe(comment: &Comment) -> String {
    match comment.body() {
        Some(body) => format!("{}: {body}", comment.id().unwrap_or("?")),
        None => format!("{} (not included)", comment.id().unwrap_or("?")),
    }
}
