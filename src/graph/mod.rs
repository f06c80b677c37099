//! Core graph data structures

mod error;
mod node;
mod property;
mod property_graph;
mod relationship;


pub use error::{GraphError, GraphResult};
pub use node::Node;
pub use property::{Properties, PropertyValue};
pub use property_graph::{EdgeRecord, PropertyGraph};
pub use relationship::Relationship;
