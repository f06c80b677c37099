//! Find queries for locating nodes

use crate::graph::{Node, PropertyGraph, PropertyValue};
use indexmap::IndexSet;

/// Query for finding nodes by various criteria
///
/// Unset criteria match every node; set criteria are ANDed.
#[derive(Debug, Clone, Default)]
pub struct FindQuery {
    /// Filter by node name
    pub name: Option<String>,
    /// Filter by node category
    pub category: Option<String>,
    /// Filter by property key existence
    pub key: Option<String>,
    /// Filter by a property value stored under any key
    pub value: Option<PropertyValue>,
}

impl FindQuery {
    /// Create a new empty query (matches all nodes)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by property existence
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Filter by property value, whatever key it is stored under
    ///
    /// Numbers match across variants (see [`PropertyValue::loose_eq`]).
    pub fn with_value(mut self, value: impl Into<PropertyValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Execute the query against a graph
    ///
    /// Matches come back in the graph's node insertion order.
    pub fn execute(&self, graph: &PropertyGraph) -> IndexSet<Node> {
        graph
            .nodes()
            .filter(|node| self.matches(node))
            .cloned()
            .collect()
    }

    /// Check if a node matches all query criteria
    pub fn matches(&self, node: &Node) -> bool {
        if let Some(ref name) = self.name {
            if node.name() != name {
                return false;
            }
        }

        if let Some(ref category) = self.category {
            if node.category() != category {
                return false;
            }
        }

        if let Some(ref key) = self.key {
            if !node.has_property(key) {
                return false;
            }
        }

        if let Some(ref value) = self.value {
            if !node.has_value(value) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> (PropertyGraph, Node, Node) {
        let a = Node::new("A", "Test").with_property("key1", "value1");
        let b = Node::new("B", "OtherTest");
        let mut graph = PropertyGraph::new();
        graph.add_node(&a);
        graph.add_node(&b);
        (graph, a, b)
    }

    #[test]
    fn test_find_all() {
        let (graph, a, b) = create_test_graph();
        let result = FindQuery::new().execute(&graph);
        assert_eq!(result.len(), 2);
        assert!(result.contains(&a));
        assert!(result.contains(&b));
    }

    #[test]
    fn test_find_by_name() {
        let (graph, a, b) = create_test_graph();
        let result = graph.get_nodes(&FindQuery::new().with_name("A"));
        assert!(result.contains(&a));
        assert!(!result.contains(&b));
    }

    #[test]
    fn test_find_by_category() {
        let (graph, a, b) = create_test_graph();
        let result = graph.get_nodes(&FindQuery::new().with_category("Test"));
        assert!(result.contains(&a));
        assert!(!result.contains(&b));
    }

    #[test]
    fn test_find_by_key() {
        let (graph, a, b) = create_test_graph();
        let result = graph.get_nodes(&FindQuery::new().with_key("key1"));
        assert!(result.contains(&a));
        assert!(!result.contains(&b));
    }

    #[test]
    fn test_find_by_value_under_any_key() {
        let (graph, a, b) = create_test_graph();
        let result = graph.get_nodes(&FindQuery::new().with_value("value1"));
        assert!(result.contains(&a));
        assert!(!result.contains(&b));

        // The value criterion is not tied to the key criterion
        let loose = graph.get_nodes(&FindQuery::new().with_key("key1").with_value("value1"));
        assert!(loose.contains(&a));
        a.set("key2", "elsewhere");
        let elsewhere = graph.get_nodes(&FindQuery::new().with_key("key1").with_value("elsewhere"));
        assert!(elsewhere.contains(&a));
    }

    #[test]
    fn test_find_combined_filters() {
        let (graph, a, b) = create_test_graph();
        let result = graph.get_nodes(
            &FindQuery::new()
                .with_name("A")
                .with_category("Test")
                .with_key("key1")
                .with_value("value1"),
        );
        assert_eq!(result.len(), 1);
        assert!(result.contains(&a));
        assert!(!result.contains(&b));

        let none = graph.get_nodes(&FindQuery::new().with_name("A").with_category("OtherTest"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_find_sees_property_updates() {
        let (graph, _, b) = create_test_graph();
        assert!(graph.get_nodes(&FindQuery::new().with_key("rank")).is_empty());
        b.set("rank", 1);
        let result = graph.get_nodes(&FindQuery::new().with_value(1));
        assert_eq!(result.into_iter().collect::<Vec<_>>(), vec![b]);
    }

    #[test]
    fn test_find_by_value_compares_numbers_loosely() {
        let (graph, a, b) = create_test_graph();
        a.set("score", 1.0);
        b.set("active", true);

        let ones = graph.get_nodes(&FindQuery::new().with_value(1));
        assert_eq!(ones.into_iter().collect::<Vec<_>>(), vec![a.clone(), b.clone()]);

        let floats = graph.get_nodes(&FindQuery::new().with_value(1.0));
        assert_eq!(floats.len(), 2);
        assert!(graph.get_nodes(&FindQuery::new().with_value(2)).is_empty());
        assert!(graph.get_nodes(&FindQuery::new().with_value("1")).is_empty());
    }

    #[test]
    fn test_find_preserves_insertion_order() {
        let mut graph = PropertyGraph::new();
        for name in ["z", "a", "m"] {
            graph.add_node(&Node::new(name, "Letter"));
        }
        let names: Vec<_> = FindQuery::new()
            .with_category("Letter")
            .execute(&graph)
            .iter()
            .map(|n| n.name().to_string())
            .collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }
}
