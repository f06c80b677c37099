//! Query system for property graphs
//!
//! Provides capabilities for finding nodes by name, category and
//! properties, and for following a node's outgoing edges.

mod adjacent;
mod find;

pub use adjacent::AdjacentQuery;
pub use find::FindQuery;
