//! Deltas reported by the canvas for nodes and edges.

use serde::{Deserialize, Serialize};

use super::Position;

/// A node delta from the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeChange {
  /// Node was dragged. `position` is `None` for the drag-end event, which carries no coordinates.
  Position {
    id: String,
    #[serde(default)]
    position: Option<Position>,
  },
  Select {
    id: String,
    selected: bool,
  },
  Remove {
    id: String,
  },
}

/// An edge delta from the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EdgeChange {
  Select { id: String, selected: bool },
  Remove { id: String },
}
