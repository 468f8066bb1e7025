use crate::model::Person;
use jsonapi_model::{domain_model, DomainModel};

domain_model!(
    /// A comment on an article (`comments`).
    pub Comment
);

impl Comment {
    pub fn body(&self) -> Option<&str> {
        self.get("body").and_then(|v| v.as_str())
    }

    /// The comment's author. Included comments keep unresolved author stubs.
    pub fn author(&self) -> Option<&Person> {
        let this: &dyn DomainModel = self;
        this.relationships_of::<Person>().next()
    }
}
