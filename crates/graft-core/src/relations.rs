//! Relation metadata consumed by the write-tree walker.
//!
//! Nested write shapes do not name the model they target: the field `author`
//! on a `Post` payload reaches `User`, and nothing in the argument tree says
//! so. That mapping lives in the client's schema metadata, which the engine
//! consumes through [`RelationRegistry`].

use std::collections::HashMap;

/// Resolves a model's relation fields to the related model.
///
/// The walker treats a payload field as a nested write only when the
/// registry resolves it; any other field passes through as plain data.
pub trait RelationRegistry: Send + Sync {
    /// The model reached through `field` on `model`, if the field is a relation.
    fn related_model(&self, model: &str, field: &str) -> Option<&str>;
}

/// In-memory relation registry: model name to its relation fields.
#[derive(Debug, Clone, Default)]
pub struct RelationMap {
    relations: HashMap<String, HashMap<String, String>>,
}

impl RelationMap {
    /// Start building a relation map.
    pub fn builder() -> RelationMapBuilder {
        RelationMapBuilder::default()
    }
}

impl RelationRegistry for RelationMap {
    fn related_model(&self, model: &str, field: &str) -> Option<&str> {
        self.relations
            .get(model)?
            .get(field)
            .map(String::as_str)
    }
}

/// Builder for [`RelationMap`].
#[derive(Debug, Default)]
pub struct RelationMapBuilder {
    relations: HashMap<String, HashMap<String, String>>,
}

impl RelationMapBuilder {
    /// Declare that `field` on `model` reaches `related`.
    pub fn relation(
        mut self,
        model: impl Into<String>,
        field: impl Into<String>,
        related: impl Into<String>,
    ) -> Self {
        self.relations
            .entry(model.into())
            .or_default()
            .insert(field.into(), related.into());
        self
    }

    /// Finish the map.
    pub fn build(self) -> RelationMap {
        RelationMap {
            relations: self.relations,
        }
    }
}
