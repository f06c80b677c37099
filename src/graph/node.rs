//! Node representation in the property graph

use super::property::{Properties, PropertyCell, PropertyValue};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

struct NodeInner {
    name: String,
    category: String,
    props: PropertyCell,
}

/// A vertex in the property graph
///
/// `Node` is a handle: cloning it is cheap and every clone refers to the
/// same vertex, so properties set through one clone are visible through
/// all of them (including the ones held as keys by a graph or subgraph).
///
/// Identity is `(name, category)`. Two nodes with the same name and
/// category are equal and hash identically whatever their properties.
#[derive(Clone)]
pub struct Node(Arc<NodeInner>);

impl Node {
    /// Create a node with no properties
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self::with_props(name, category, Properties::new())
    }

    /// Create a node with an initial property map
    pub fn with_props(
        name: impl Into<String>,
        category: impl Into<String>,
        props: Properties,
    ) -> Self {
        Self(Arc::new(NodeInner {
            name: name.into(),
            category: category.into(),
            props: PropertyCell::new(props),
        }))
    }

    /// Add a property to the node
    pub fn with_property(self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn category(&self) -> &str {
        &self.0.category
    }

    /// Look up a property; `None` when the key is not set
    pub fn get(&self, key: &str) -> Option<PropertyValue> {
        self.0.props.get(key)
    }

    /// Insert or overwrite a property
    pub fn set(&self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.0.props.set(key.into(), value.into());
    }

    /// Remove a property, returning its previous value
    pub fn remove(&self, key: &str) -> Option<PropertyValue> {
        self.0.props.remove(key)
    }

    pub fn has_property(&self, key: &str) -> bool {
        self.0.props.contains_key(key)
    }

    /// True if `value` is stored under any key, comparing numbers loosely
    pub fn has_value(&self, value: &PropertyValue) -> bool {
        self.0.props.contains_value(value)
    }

    pub fn property_count(&self) -> usize {
        self.0.props.len()
    }

    pub fn has_properties(&self) -> bool {
        !self.0.props.is_empty()
    }

    /// Copy of the current properties
    pub fn props(&self) -> Properties {
        self.0.props.snapshot()
    }

    /// True if both handles point at the same vertex instance
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.0.name == other.0.name && self.0.category == other.0.category
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.name.hash(state);
        self.0.category.hash(state);
    }
}

/// `name:category<TAB>{props}`
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}\t{}", self.0.name, self.0.category, self.0.props)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.0.name)
            .field("category", &self.0.category)
            .field("props", &self.0.props)
            .finish()
    }
}
