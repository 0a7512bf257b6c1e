//! JSON graph module — the structural backbone of treeflow.
//!
//! Provides the graph data model, the builder that turns a document into
//! nodes and edges, the layout assigner, and the graph store.

pub mod builder;
pub mod engine;
pub mod layout;
pub mod types;

pub use builder::build_graph;
pub use engine::{GraphStats, JsonGraph};
pub use layout::{LayoutCursor, COLUMN_WIDTH, ROW_HEIGHT};
pub use types::{GraphData, GraphEdge, GraphNode, NodeCategory, NodeColors, Position};
