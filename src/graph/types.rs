//! Core types for the JSON graph.
//!
//! Defines node categories, the node and edge records handed to the
//! rendering surface, and the label rules that summarize each value.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::path::PathId;

/// The category of a node — one per JSON value shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    /// A JSON null (also covers an absent value).
    Null,
    /// `true` or `false`.
    Boolean,
    /// Any JSON number.
    Number,
    /// A JSON string.
    String,
    /// An ordered sequence of values.
    Array,
    /// An ordered mapping of string keys to values.
    Object,
}

impl NodeCategory {
    /// Classify a value by its runtime shape. No schema is consulted.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => NodeCategory::Null,
            Value::Bool(_) => NodeCategory::Boolean,
            Value::Number(_) => NodeCategory::Number,
            Value::String(_) => NodeCategory::String,
            Value::Array(_) => NodeCategory::Array,
            Value::Object(_) => NodeCategory::Object,
        }
    }

    /// Whether nodes of this category have children of their own.
    pub fn is_composite(&self) -> bool {
        matches!(self, NodeCategory::Array | NodeCategory::Object)
    }

    /// Display colors for the rendering surface (background, border).
    pub fn colors(&self) -> NodeColors {
        match self {
            NodeCategory::Null => NodeColors::new("#f3f4f6", "#6b7280"),
            NodeCategory::Array => NodeColors::new("#d1fae5", "#10b981"),
            NodeCategory::Object => NodeColors::new("#dbeafe", "#3b82f6"),
            NodeCategory::String | NodeCategory::Number | NodeCategory::Boolean => {
                NodeColors::new("#fef3c7", "#f59e0b")
            }
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeCategory::Null => write!(f, "null"),
            NodeCategory::Boolean => write!(f, "boolean"),
            NodeCategory::Number => write!(f, "number"),
            NodeCategory::String => write!(f, "string"),
            NodeCategory::Array => write!(f, "array"),
            NodeCategory::Object => write!(f, "object"),
        }
    }
}

/// CSS color pair used to style a node by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeColors {
    pub background: &'static str,
    pub border: &'static str,
}

impl NodeColors {
    const fn new(background: &'static str, border: &'static str) -> Self {
        Self { background, border }
    }
}

/// 2D placement of a node on the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// One JSON location, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Unique path address of this location.
    pub id: PathId,
    /// The value shape at this location.
    pub category: NodeCategory,
    /// Human-readable summary: key/index plus, for scalars, the rendered
    /// value and a type suffix.
    pub label: String,
    /// Assigned placement.
    pub position: Position,
    /// The raw value at this location.
    pub raw: Value,
}

impl GraphNode {
    /// Build a node for `value` reached as `name`, classifying and labeling it.
    pub fn new(id: PathId, name: &str, value: &Value, position: Position) -> Self {
        let category = NodeCategory::of(value);
        let label = match value {
            // null renders without a type suffix
            Value::Null => format!("{}: null", name),
            Value::Bool(b) => format!("{}: {} (boolean)", name, b),
            Value::Number(n) => format!("{}: {} (number)", name, n),
            Value::String(s) => format!("{}: {} (string)", name, s),
            Value::Array(_) => format!("{} (array)", name),
            Value::Object(_) => format!("{} (object)", name),
        };
        Self {
            id,
            category,
            label,
            position,
            raw: value.clone(),
        }
    }
}

/// One parent→child relation between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Derived from the endpoint ids, unique because they are.
    pub id: String,
    /// Parent node id.
    pub source: PathId,
    /// Child node id.
    pub target: PathId,
}

impl GraphEdge {
    pub fn between(source: PathId, target: PathId) -> Self {
        let id = format!("e-{}--{}", source, target);
        Self { id, source, target }
    }
}

/// Complete graph snapshot: what the rendering surface consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}
