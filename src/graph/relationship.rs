//! Relationship: a directed, attributed edge label

use super::property::{Properties, PropertyCell, PropertyValue};
use std::fmt;
use std::sync::Arc;

struct RelationshipInner {
    category: String,
    props: PropertyCell,
}

/// Label of a directed edge, e.g. "Knows" or "Bought"
///
/// Like [`Node`](super::Node) this is a shared handle. Unlike a node it has
/// no structural identity: two relationships are equal only when they are
/// clones of the same instance.
#[derive(Clone)]
pub struct Relationship(Arc<RelationshipInner>);

impl Relationship {
    /// Create a relationship with no properties
    pub fn new(category: impl Into<String>) -> Self {
        Self::with_props(category, Properties::new())
    }

    pub fn with_props(category: impl Into<String>, props: Properties) -> Self {
        Self(Arc::new(RelationshipInner {
            category: category.into(),
            props: PropertyCell::new(props),
        }))
    }

    /// Add a property to the relationship
    pub fn with_property(self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn category(&self) -> &str {
        &self.0.category
    }

    /// Look up a property; `None` when the key is not set
    pub fn get(&self, key: &str) -> Option<PropertyValue> {
        self.0.props.get(key)
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.0.props.set(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) -> Option<PropertyValue> {
        self.0.props.remove(key)
    }

    /// Copy of the current properties
    pub fn props(&self) -> Properties {
        self.0.props.snapshot()
    }

    /// True if both handles point at the same relationship instance
    pub fn is_same(&self, other: &Relationship) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Relationship {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl Eq for Relationship {}

/// `:category<SPACE>{props}`
impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{} {}", self.0.category, self.0.props)
    }
}

impl fmt::Debug for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relationship")
            .field("category", &self.0.category)
            .field("props", &self.0.props)
            .finish()
    }
}
