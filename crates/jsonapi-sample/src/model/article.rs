use crate::model::{Comment, Person};
use jsonapi_model::{domain_model, DomainModel};

domain_model!(
    /// A blog article (`articles`).
    ///
    /// Relationships are flattened by the builder, so the author and the
    /// comments are told apart by type rather than by relationship name.
    pub Article
);

impl Article {
    pub fn title(&self) -> Option<&str> {
        self.get("title").and_then(|v| v.as_str())
    }

    /// The first related [`Person`].
    pub fn author(&self) -> Option<&Person> {
        let this: &dyn DomainModel = self;
        this.relationships_of::<Person>().next()
    }

    pub fn comments(&self) -> Vec<&Comment> {
        let this: &dyn DomainModel = self;
        this.relationships_of::<Comment>().collect()
    }
}
