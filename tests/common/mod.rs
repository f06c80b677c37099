//! Shared fixtures for property graph integration tests

#![allow(dead_code)]

use propgraph::{Node, PropertyGraph, Relationship};

pub fn node_a() -> Node {
    Node::new("A", "Test").with_property("key1", "value1")
}

pub fn node_b() -> Node {
    Node::new("B", "OtherTest")
}

pub fn node_c() -> Node {
    Node::new("C", "Test")
}

pub fn relationship_connected() -> Relationship {
    Relationship::new("Connected")
}

pub fn relationship_friend() -> Relationship {
    Relationship::new("Friend").with_property("since", "2000")
}

/// A -Connected-> B -Connected-> C, with A -Friend-> C
pub fn triangle() -> (PropertyGraph, Node, Node, Node) {
    let (a, b, c) = (node_a(), node_b(), node_c());
    let mut graph = PropertyGraph::new();
    graph.add_relationship(&a, &b, &relationship_connected());
    graph.add_relationship(&b, &c, &relationship_connected());
    graph.add_relationship(&a, &c, &relationship_friend());
    (graph, a, b, c)
}
