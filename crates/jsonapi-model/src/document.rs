//! # JSON:API Document
//!
//! Typed view of a parsed JSON:API payload. Only the members the builder
//! consumes are modelled: primary `data`, the compound `included` section,
//! and each resource's `type`, `id`, `attributes` and `relationships`.
//! Everything else (`links`, `meta`, `jsonapi`, `errors`) is accepted and
//! ignored.
//!
//! Parsing is delegated to `serde_json`; a payload that does not have the
//! JSON:API shape is rejected here, before any model is built.
//!
//! ```rust
//! use jsonapi_model::Document;
//!
//! let document: Document = r#"{
//!     "data": { "type": "articles", "id": "1", "attributes": { "title": "T" } }
//! }"#.parse().unwrap();
//!
//! assert!(document.has_data());
//! assert!(!document.has_included());
//! assert_eq!(document.data().unwrap().as_slice()[0].id, "1");
//! ```

use crate::error::ModelError;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Free-form attribute storage, keyed by attribute name, in source order.
pub type Attributes = Map<String, Value>;

/// A top-level JSON:API document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Document {
    #[serde(default)]
    data: Option<PrimaryData>,
    #[serde(default)]
    included: Option<Vec<Resource>>,
}

impl Document {
    /// Parses a document from an already decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Whether the document carries non-null primary data.
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// Whether the document is a compound document.
    pub fn has_included(&self) -> bool {
        self.included.is_some()
    }

    pub fn data(&self) -> Option<&PrimaryData> {
        self.data.as_ref()
    }

    /// Included resources in document order; empty when the section is absent.
    pub fn included(&self) -> &[Resource] {
        self.included.as_deref().unwrap_or_default()
    }
}

impl FromStr for Document {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Primary data: one resource or an ordered collection of them.
///
/// A collection of bare resource identifiers deserializes as a `Collection`
/// whose resources have no attributes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PrimaryData {
    Collection(Vec<Resource>),
    Single(Resource),
}

impl PrimaryData {
    pub fn is_collection(&self) -> bool {
        matches!(self, PrimaryData::Collection(_))
    }

    /// The primary resources in order, regardless of cardinality.
    pub fn as_slice(&self) -> &[Resource] {
        match self {
            PrimaryData::Collection(resources) => resources,
            PrimaryData::Single(resource) => std::slice::from_ref(resource),
        }
    }
}

/// A typed, identified resource object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub relationships: Relationships,
}

impl Resource {
    /// The `{type, id}` pair that references this resource.
    pub fn identifier(&self) -> Identifier {
        Identifier {
            kind: self.kind.clone(),
            id: self.id.clone(),
        }
    }
}

/// A bare `{type, id}` reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Identifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

/// The named relationships of a resource, in declaration order.
///
/// Stored as a list of pairs rather than a hash map: the builder flattens
/// relationships positionally and must see them in the order the document
/// declared them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relationships(Vec<(String, Relationship)>);

impl Relationships {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Relationship)> {
        self.0.iter().map(|(name, rel)| (name.as_str(), rel))
    }

    pub fn get(&self, name: &str) -> Option<&Relationship> {
        self.0
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, rel)| rel)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Relationships {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RelationshipsVisitor;

        impl<'de> Visitor<'de> for RelationshipsVisitor {
            type Value = Relationships;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of relationship objects")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, relationship)) = map.next_entry()? {
                    entries.push((name, relationship));
                }
                Ok(Relationships(entries))
            }
        }

        deserializer.deserialize_map(RelationshipsVisitor)
    }
}

/// A single named relationship.
///
/// `data` is `None` for link-only relationships, which contribute nothing to
/// the built model.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Relationship {
    #[serde(default, deserialize_with = "deserialize_linkage")]
    pub data: Option<RelationshipData>,
}

/// Resource linkage of a relationship.
#[derive(Debug, Clone, PartialEq)]
pub enum RelationshipData {
    /// `"data": null`, an empty to-one relationship.
    Empty,
    One(Identifier),
    Many(Vec<Identifier>),
}

impl RelationshipData {
    /// The linkage normalized to an ordered sequence of identifiers.
    pub fn identifiers(&self) -> &[Identifier] {
        match self {
            RelationshipData::Empty => &[],
            RelationshipData::One(identifier) => std::slice::from_ref(identifier),
            RelationshipData::Many(identifiers) => identifiers,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Linkage {
    Many(Vec<Identifier>),
    One(Identifier),
}

// Only called when the `data` member is present; absence is handled by `default`.
fn deserialize_linkage<'de, D>(deserializer: D) -> Result<Option<RelationshipData>, D::Error>
where
    D: Deserializer<'de>,
{
    let linkage = Option::<Linkage>::deserialize(deserializer)?;
    Ok(Some(match linkage {
        None => RelationshipData::Empty,
        Some(Linkage::One(identifier)) => RelationshipData::One(identifier),
        Some(Linkage::Many(identifiers)) => RelationshipData::Many(identifiers),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relationships_keep_declaration_order() {
        let resource: Resource = serde_json::from_str(
            r#"{
                "type": "articles",
                "id": "1",
                "relationships": {
                    "zeta": { "data": { "type": "people", "id": "1" } },
                    "alpha": { "data": [] },
                    "mid": { "links": { "related": "http://example.com" } }
                }
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = resource.relationships.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert!(resource.relationships.get("mid").unwrap().data.is_none());
        assert_eq!(
            resource.relationships.get("alpha").unwrap().data,
            Some(RelationshipData::Many(vec![]))
        );
    }

    #[test]
    fn null_linkage_is_empty_not_absent() {
        let relationship: Relationship = serde_json::from_str(r#"{ "data": null }"#).unwrap();
        assert_eq!(relationship.data, Some(RelationshipData::Empty));
        assert!(relationship.data.unwrap().identifiers().is_empty());
    }

    #[test]
    fn null_and_missing_primary_data() {
        let null_data: Document = r#"{ "data": null }"#.parse().unwrap();
        assert!(!null_data.has_data());

        let meta_only: Document = r#"{ "meta": { "count": 0 } }"#.parse().unwrap();
        assert!(!meta_only.has_data());
        assert!(meta_only.included().is_empty());
    }

    #[test]
    fn identifier_collection_is_a_collection() {
        let document: Document = r#"{ "data": [{ "type": "people", "id": "9" }] }"#
            .parse()
            .unwrap();
        let data = document.data().unwrap();
        assert!(data.is_collection());
        assert!(data.as_slice()[0].attributes.is_empty());
    }

    #[test]
    fn malformed_document_is_rejected() {
        let result: Result<Document, _> = r#"{ "data": { "type": "articles" } }"#.parse();
        assert!(matches!(result, Err(ModelError::Document(_))));
    }
}
