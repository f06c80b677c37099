//! Adjacency queries over a node's outgoing edges

use crate::graph::{EdgeRecord, GraphError, GraphResult, Node, PropertyGraph};
use tracing::trace;

/// Query for the direct successors of a node
#[derive(Debug, Clone, Default)]
pub struct AdjacentQuery {
    /// Only targets with this category
    pub node_category: Option<String>,
    /// Only edges whose relationship has this category
    pub rel_category: Option<String>,
}

impl AdjacentQuery {
    /// Create a new query (follows every outgoing edge)
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by target node category
    pub fn with_node_category(mut self, category: impl Into<String>) -> Self {
        self.node_category = Some(category.into());
        self
    }

    /// Filter by relationship category
    pub fn with_rel_category(mut self, category: impl Into<String>) -> Self {
        self.rel_category = Some(category.into());
        self
    }

    /// Execute the query from `node`
    ///
    /// Targets are returned in edge insertion order; a target reached by
    /// several parallel edges appears once per edge.
    pub fn execute(&self, graph: &PropertyGraph, node: &Node) -> GraphResult<Vec<Node>> {
        let records = graph
            .edges(node)
            .ok_or_else(|| GraphError::node_not_found(node))?;

        Ok(records
            .iter()
            .filter(|record| self.matches(record))
            .map(|(target, _)| target.clone())
            .collect())
    }

    /// Check if an edge record passes the filters
    pub fn matches(&self, record: &EdgeRecord) -> bool {
        let (target, rel) = record;

        if let Some(ref category) = self.node_category {
            if target.category() != category {
                trace!(target = target.name(), "skipping target by node category");
                return false;
            }
        }

        if let Some(ref category) = self.rel_category {
            if rel.category() != category {
                trace!(target = target.name(), "skipping edge by relationship category");
                return false;
            }
        }

        true
    }
}
