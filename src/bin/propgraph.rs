//! propgraph CLI — prints the demo property graph and book recommendations.
//!
//! Usage:
//!   propgraph show
//!   propgraph recommend <person> [--graph-type unlinked|linked] [--json]

use clap::{Parser, Subcommand, ValueEnum};
use propgraph::recommend::{self, GraphType};
use propgraph::Node;
use serde_json::json;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "propgraph",
    version,
    about = "In-memory property graph with a book recommendation demo"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the demo graph
    Show,
    /// Recommend books for a person in the demo graph
    Recommend {
        /// Name of the person to recommend books to
        person: String,
        /// Shape of the recommendation graph
        #[arg(long, value_enum, default_value_t = GraphTypeArg::Unlinked)]
        graph_type: GraphTypeArg,
        /// Print the recommendations as JSON instead of a graph dump
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum GraphTypeArg {
    Unlinked,
    Linked,
}

impl From<GraphTypeArg> for GraphType {
    fn from(arg: GraphTypeArg) -> Self {
        match arg {
            GraphTypeArg::Unlinked => GraphType::Unlinked,
            GraphTypeArg::Linked => GraphType::Linked,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_show() -> i32 {
    print!("{}", recommend::demo_graph());
    0
}

fn book_summary(book: &Node) -> serde_json::Value {
    json!({
        "name": book.name(),
        "category": book.category(),
        "props": book.props(),
    })
}

/// Document printed by `recommend --json`
fn recommendation_doc(person: &str, graph_type: GraphType, books: &[Node]) -> serde_json::Value {
    json!({
        "person": person,
        "graph_type": graph_type,
        "recommendations": books.iter().map(book_summary).collect::<Vec<_>>(),
    })
}

fn cmd_recommend(person: &str, graph_type: GraphType, as_json: bool) -> i32 {
    let graph = recommend::demo_graph();

    if as_json {
        let books = match recommend::find_person(&graph, person)
            .and_then(|node| recommend::recommended_books(&graph, &node))
        {
            Ok(books) => books,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        };
        let doc = recommendation_doc(person, graph_type, &books);
        return match serde_json::to_string_pretty(&doc) {
            Ok(text) => {
                println!("{}", text);
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        };
    }

    match recommend::recommendations(&graph, person, graph_type) {
        Ok(rec_graph) => {
            print!("{}", rec_graph);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cli.command {
        Commands::Show => cmd_show(),
        Commands::Recommend {
            person,
            graph_type,
            json,
        } => cmd_recommend(&person, graph_type.into(), json),
    };
    std::process::exit(code);
}
