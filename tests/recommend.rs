//! End-to-end recommendation scenario over the demo dataset

use propgraph::recommend::{self, GraphType, RECOMMEND};
use propgraph::{AdjacentQuery, Node};

const DEMO_GRAPH: &str = "\
Emily:Person\t{}
\t:Knows {} Spencer:Person\t{}
\t:Bought {} Database Design:Book\t{'Price': '$195.00'}
Spencer:Person\t{}
\t:Knows {} Emily:Person\t{}
\t:Knows {} Brendan:Person\t{}
\t:Bought {} Cosmos:Book\t{'Price': '$17.00'}
\t:Bought {} Database Design:Book\t{'Price': '$195.00'}
Brendan:Person\t{}
\t:Bought {} Database Design:Book\t{'Price': '$195.00'}
\t:Bought {} DNA & You:Book\t{'Price': '$11.50'}
Database Design:Book\t{'Price': '$195.00'}
Cosmos:Book\t{'Price': '$17.00'}
DNA & You:Book\t{'Price': '$11.50'}
Trevor:Person\t{}
\t:Bought {} Cosmos:Book\t{'Price': '$17.00'}
\t:Bought {} Database Design:Book\t{'Price': '$195.00'}
Paxtyn:Person\t{}
\t:Bought {} Database Design:Book\t{'Price': '$195.00'}
\t:Bought {} The Life of Cronkite:Book\t{'Price': '$29.95'}
The Life of Cronkite:Book\t{'Price': '$29.95'}
";

#[test]
fn demo_graph_renders_in_insertion_order() {
    assert_eq!(recommend::demo_graph().to_string(), DEMO_GRAPH);
}

#[test]
fn spencer_unlinked_recommendation() {
    let graph = recommend::demo_graph();
    let rec = recommend::recommendations(&graph, "Spencer", GraphType::Unlinked).unwrap();

    assert_eq!(rec.node_count(), 2);
    assert_eq!(rec.edge_count(), 0);
    assert_eq!(
        rec.to_string(),
        "Spencer:Person\t{}\nDNA & You:Book\t{'Price': '$11.50'}\n"
    );
}

#[test]
fn spencer_linked_recommendation() {
    let graph = recommend::demo_graph();
    let rec = recommend::recommendations(&graph, "Spencer", GraphType::Linked).unwrap();

    let spencer = Node::new("Spencer", "Person");
    let recommended = rec
        .adjacent(&spencer, &AdjacentQuery::new().with_rel_category(RECOMMEND))
        .unwrap();
    assert_eq!(recommended, vec![Node::new("DNA & You", "Book")]);
    assert_eq!(
        rec.to_string(),
        "Spencer:Person\t{}\n\
         \t:Recommend {} DNA & You:Book\t{'Price': '$11.50'}\n\
         DNA & You:Book\t{'Price': '$11.50'}\n"
    );
}

#[test]
fn recommending_does_not_touch_the_source_graph() {
    let graph = recommend::demo_graph();
    recommend::recommendations(&graph, "Spencer", GraphType::Linked).unwrap();
    assert_eq!(graph.to_string(), DEMO_GRAPH);
}

#[test]
fn recommendation_graph_shares_book_handles() {
    let graph = recommend::demo_graph();
    let rec = recommend::recommendations(&graph, "Spencer", GraphType::Unlinked).unwrap();

    let book = Node::new("DNA & You", "Book");
    rec.get_node(&book).unwrap().set("Price", "$9.99");
    assert_eq!(
        graph.get_node(&book).unwrap().get("Price"),
        Some("$9.99".into())
    );
}
