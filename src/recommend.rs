//! Book recommendations over a small social graph
//!
//! People `Knows` each other and have `Bought` books. A person is
//! recommended every book bought by someone they know that they have not
//! bought themselves.

use crate::graph::{GraphError, GraphResult, Node, PropertyGraph, Relationship};
use crate::query::{AdjacentQuery, FindQuery};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

pub const PERSON: &str = "Person";
pub const BOOK: &str = "Book";
pub const KNOWS: &str = "Knows";
pub const BOUGHT: &str = "Bought";
pub const RECOMMEND: &str = "Recommend";

/// Shape of the graph returned by [`recommendations`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphType {
    /// Person and recommended books as disconnected nodes
    #[default]
    Unlinked,
    /// Person connected to each book by a `Recommend` relationship
    Linked,
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphType::Unlinked => f.write_str("unlinked"),
            GraphType::Linked => f.write_str("linked"),
        }
    }
}

fn person(name: &str) -> Node {
    Node::new(name, PERSON)
}

fn book(name: &str, price: &str) -> Node {
    Node::new(name, BOOK).with_property("Price", price)
}

/// Build the demo dataset of five people and four books
pub fn demo_graph() -> PropertyGraph {
    let emily = person("Emily");
    let spencer = person("Spencer");
    let brendan = person("Brendan");
    let trevor = person("Trevor");
    let paxtyn = person("Paxtyn");

    let cosmos = book("Cosmos", "$17.00");
    let database_design = book("Database Design", "$195.00");
    let life_of_cronkite = book("The Life of Cronkite", "$29.95");
    let dna_and_you = book("DNA & You", "$11.50");

    let knows = [(&emily, &spencer), (&spencer, &emily), (&spencer, &brendan)];
    let bought = [
        (&emily, &database_design),
        (&spencer, &cosmos),
        (&spencer, &database_design),
        (&brendan, &database_design),
        (&brendan, &dna_and_you),
        (&trevor, &cosmos),
        (&trevor, &database_design),
        (&paxtyn, &database_design),
        (&paxtyn, &life_of_cronkite),
    ];

    let mut graph = PropertyGraph::new();
    for (src, target) in knows {
        graph.add_relationship(src, target, &Relationship::new(KNOWS));
    }
    for (src, target) in bought {
        graph.add_relationship(src, target, &Relationship::new(BOUGHT));
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built demo graph"
    );
    graph
}

/// Look up a person by name
pub fn find_person(graph: &PropertyGraph, name: &str) -> GraphResult<Node> {
    graph
        .get_nodes(&FindQuery::new().with_name(name).with_category(PERSON))
        .into_iter()
        .next()
        .ok_or_else(|| GraphError::NodeNotFound(format!("{}:{}", name, PERSON)))
}

/// Books bought by people `person` knows that `person` has not bought
///
/// Each book is listed once, in the order it is first reached.
pub fn recommended_books(graph: &PropertyGraph, person: &Node) -> GraphResult<Vec<Node>> {
    let bought = AdjacentQuery::new().with_rel_category(BOUGHT);
    let people_known = graph.adjacent(person, &AdjacentQuery::new().with_rel_category(KNOWS))?;
    let books_bought: IndexSet<Node> = graph.adjacent(person, &bought)?.into_iter().collect();

    let mut books = IndexSet::new();
    for friend in &people_known {
        for candidate in graph.adjacent(friend, &bought)? {
            if !books_bought.contains(&candidate) {
                books.insert(candidate);
            }
        }
    }

    info!(
        person = person.name(),
        friends = people_known.len(),
        recommendations = books.len(),
        "computed recommendations"
    );
    Ok(books.into_iter().collect())
}

/// Build the recommendation graph for the person named `person_name`
///
/// The graph starts as the subgraph of the person alone; the recommended
/// books are then added either as isolated nodes or behind a fresh
/// `Recommend` relationship from the person, depending on `graph_type`.
pub fn recommendations(
    graph: &PropertyGraph,
    person_name: &str,
    graph_type: GraphType,
) -> GraphResult<PropertyGraph> {
    let person = find_person(graph, person_name)?;
    let books = recommended_books(graph, &person)?;

    let mut rec_graph = graph.subgraph([&person]);
    for book in &books {
        match graph_type {
            GraphType::Unlinked => rec_graph.add_node(book),
            GraphType::Linked => {
                rec_graph.add_relationship(&person, book, &Relationship::new(RECOMMEND))
            }
        }
    }
    Ok(rec_graph)
}
