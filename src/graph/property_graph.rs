//! PropertyGraph: a directed multigraph keyed by node

use super::error::GraphResult;
use super::node::Node;
use super::relationship::Relationship;
use crate::query::{AdjacentQuery, FindQuery};
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use tracing::{debug, trace};

/// An outgoing edge stored under its source node: `(target, relationship)`
pub type EdgeRecord = (Node, Relationship);

/// A directed multigraph whose nodes and relationships carry properties
///
/// Each node key owns the ordered list of its outgoing edge records.
/// Parallel edges between the same pair are kept, in insertion order.
/// Every node that appears as a source or target is also a key.
///
/// Node and relationship handles are shared with the caller and with any
/// subgraph derived from this graph; only the edge lists are owned.
#[derive(Debug, Clone, Default)]
pub struct PropertyGraph {
    nodes: IndexMap<Node, Vec<EdgeRecord>>,
}

impl PropertyGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the graph
    ///
    /// No-op if an equal node (same name and category) is already a key;
    /// the handle registered first stays the key.
    pub fn add_node(&mut self, node: &Node) {
        if self.nodes.contains_key(node) {
            return;
        }
        debug!(name = node.name(), category = node.category(), "adding node");
        self.nodes.insert(node.clone(), Vec::new());
    }

    /// Connect `src` to `target` via the directed relationship `rel`
    ///
    /// Either endpoint is added first if the graph does not contain it.
    /// Repeated calls add parallel edges; only `src`'s edge list changes.
    pub fn add_relationship(&mut self, src: &Node, target: &Node, rel: &Relationship) {
        self.add_node(src);
        self.add_node(target);
        debug!(
            source = src.name(),
            target = target.name(),
            relationship = rel.category(),
            "adding relationship"
        );
        self.nodes
            .entry(src.clone())
            .or_default()
            .push((target.clone(), rel.clone()));
    }

    /// Return the set of nodes matching every criterion of `query`
    pub fn get_nodes(&self, query: &FindQuery) -> IndexSet<Node> {
        query.execute(self)
    }

    /// Return the targets of `node`'s outgoing edges that pass `query`
    ///
    /// Fails with `NodeNotFound` if `node` is not in the graph.
    pub fn adjacent(&self, node: &Node, query: &AdjacentQuery) -> GraphResult<Vec<Node>> {
        query.execute(self, node)
    }

    /// Return the subgraph induced by `nodes`
    ///
    /// The result holds the given node handles (not copies) and every edge
    /// of this graph whose source and target are both in the set, in their
    /// original order. Nodes this graph does not contain are carried over
    /// as isolated nodes. This graph is left unchanged.
    ///
    /// Members are visited in input order; each is added, then its internal
    /// edges are copied, which registers an edge's target as soon as it is
    /// reached. A target can therefore precede a member listed before it.
    pub fn subgraph<'a, I>(&self, nodes: I) -> PropertyGraph
    where
        I: IntoIterator<Item = &'a Node>,
    {
        let members: IndexSet<&Node> = nodes.into_iter().collect();
        let mut graph = PropertyGraph::new();

        for node in &members {
            graph.add_node(node);
            let Some(records) = self.nodes.get(*node) else {
                debug!(
                    name = node.name(),
                    category = node.category(),
                    "subgraph node not in source graph"
                );
                continue;
            };
            for (target, rel) in records {
                match members.get(target) {
                    Some(member) => graph.add_relationship(node, member, rel),
                    None => trace!(
                        source = node.name(),
                        target = target.name(),
                        "dropping edge leaving subgraph"
                    ),
                }
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "extracted subgraph"
        );
        graph
    }

    /// Check whether an equal node is a key
    pub fn contains_node(&self, node: &Node) -> bool {
        self.nodes.contains_key(node)
    }

    /// Get the stored key handle equal to `node`
    pub fn get_node(&self, node: &Node) -> Option<&Node> {
        self.nodes.get_key_value(node).map(|(key, _)| key)
    }

    /// Get the outgoing edge records of `node`
    pub fn edges(&self, node: &Node) -> Option<&[EdgeRecord]> {
        self.nodes.get(node).map(Vec::as_slice)
    }

    /// Iterate over all nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.keys()
    }

    /// Iterate over every edge as `(source, target, relationship)`
    pub fn relationships(&self) -> impl Iterator<Item = (&Node, &Node, &Relationship)> {
        self.nodes
            .iter()
            .flat_map(|(src, records)| records.iter().map(move |(target, rel)| (src, target, rel)))
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of edges
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// One line per node, followed by one tab-indented line per outgoing edge:
///
/// ```text
/// name:category<TAB>{props}
/// <TAB>:relationship {props} target:category<TAB>{props}
/// ```
impl fmt::Display for PropertyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, records) in &self.nodes {
            writeln!(f, "{}", node)?;
            for (target, rel) in records {
                writeln!(f, "\t{} {}", rel, target)?;
            }
        }
        Ok(())
    }
}
