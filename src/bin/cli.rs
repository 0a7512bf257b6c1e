//! Treeflow CLI - JSON documents as navigable graphs.
//!
//! Usage:
//!   treeflow graph <file>           # Print the node/edge collection
//!   treeflow find <file> <query>    # Resolve a path query to a node
//!   treeflow stats <file>           # Graph statistics

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use treeflow::{build_graph, resolve, JsonGraph, Resolution, SearchResponse, TreeflowError};

#[derive(Parser)]
#[command(name = "treeflow")]
#[command(about = "Treeflow - JSON documents as navigable graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the graph and print the node/edge collection as JSON
    Graph {
        /// Path to the JSON document
        file: PathBuf,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Resolve a path query against the document graph
    Find {
        /// Path to the JSON document
        file: PathBuf,

        /// Query string (e.g. "user.name", ".user", "$.items[0]")
        query: String,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show graph statistics
    Stats {
        /// Path to the JSON document
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Graph { file, compact } => {
            let graph = load_graph(&file)?;
            let data = graph.to_data();
            let text = if compact {
                serde_json::to_string(&data)?
            } else {
                serde_json::to_string_pretty(&data)?
            };
            println!("{}", text);
        }

        Commands::Find { file, query, json } => {
            let graph = load_graph(&file)?;
            let resolution = resolve(&graph, &query);

            if json {
                let response = SearchResponse::from_resolution(&query, &resolution);
                println!("{}", serde_json::to_string_pretty(&response)?);
                return Ok(());
            }

            match resolution {
                Resolution::Found(node) => {
                    println!("Found {}", node.id);
                    println!("  label:    {}", node.label);
                    println!("  category: {}", node.category);
                    println!("  position: ({}, {})", node.position.x, node.position.y);
                }
                Resolution::NoMatch { normalized } => {
                    println!("No match for '{}'", normalized);
                }
                Resolution::EmptyGraph => {
                    println!("Nothing to search (graph is empty)");
                }
            }
        }

        Commands::Stats { file } => {
            let graph = load_graph(&file)?;
            println!("{}", graph.stats());
        }
    }

    Ok(())
}

/// Load a document and build its graph.
///
/// Malformed JSON produces an empty graph plus a user-visible notice; the
/// document is never partially interpreted. I/O failures are real errors.
fn load_graph(file: &Path) -> Result<JsonGraph> {
    match treeflow::load_document(file) {
        Ok(value) => Ok(build_graph(&value)),
        Err(TreeflowError::MalformedInput(e)) => {
            warn!(file = %file.display(), "invalid JSON input");
            eprintln!("Invalid JSON input: {}", e);
            Ok(JsonGraph::new())
        }
        Err(e) => Err(e.into()),
    }
}
