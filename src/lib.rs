//! propgraph: In-Memory Property Graph
//!
//! A directed multigraph whose nodes and relationships carry arbitrary
//! key/value properties.
//!
//! # Core Concepts
//!
//! - **Nodes**: Vertices identified by `(name, category)`; properties are
//!   not part of their identity
//! - **Relationships**: Directed edge labels with their own properties
//! - **Subgraphs**: New graphs induced by a set of nodes, sharing the
//!   original node handles
//!
//! # Example
//!
//! ```
//! use propgraph::{AdjacentQuery, Node, PropertyGraph, Relationship};
//!
//! let alice = Node::new("Alice", "Person");
//! let book = Node::new("Cosmos", "Book").with_property("Price", "$17.00");
//!
//! let mut graph = PropertyGraph::new();
//! graph.add_relationship(&alice, &book, &Relationship::new("Bought"));
//!
//! let bought = graph
//!     .adjacent(&alice, &AdjacentQuery::new().with_rel_category("Bought"))
//!     .unwrap();
//! assert_eq!(bought, vec![book]);
//! ```

mod graph;
pub mod query;
pub mod recommend;

pub use graph::{
    EdgeRecord, GraphError, GraphResult, Node, Properties, PropertyGraph, PropertyValue,
    Relationship,
};
pub use query::{AdjacentQuery, FindQuery};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
