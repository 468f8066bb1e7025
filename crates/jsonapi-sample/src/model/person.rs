use jsonapi_model::{domain_model, DomainModel};

domain_model!(
    /// A person (`people`), usually an article or comment author.
    pub Person
);

impl Person {
    pub fn first_name(&self) -> Option<&str> {
        self.get("first-name").and_then(|v| v.as_str())
    }

    pub fn last_name(&self) -> Option<&str> {
        self.get("last-name").and_then(|v| v.as_str())
    }

    /// `first-name last-name`, or whichever part is known.
    pub fn display_name(&self) -> Option<String> {
        match (self.first_name(), self.last_name()) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(name), None) | (None, Some(name)) => Some(name.to_string()),
            (None, None) => None,
        }
    }

    /// Whether only the identifier is known (an unresolved relationship).
    pub fn is_stub(&self) -> bool {
        self.attributes().len() == 1 && self.id().is_some()
    }
}
