//! Node palette entries and the drag payload they emit.

use serde::{Deserialize, Serialize};

use crate::error::PayloadError;
use crate::types::NodeKind;

/// MIME type the palette's drag payload is registered under.
pub const DRAG_MIME_TYPE: &str = "application/reactflow";

/// One draggable palette button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
  pub kind: NodeKind,
  pub label: &'static str,
}

/// Palette buttons in display order.
pub fn palette() -> Vec<PaletteEntry> {
  NodeKind::ALL
    .iter()
    .map(|&kind| PaletteEntry {
      kind,
      label: kind.title(),
    })
    .collect()
}

/// `{ "nodeType": "<type>" }` carried from the palette to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DragPayload {
  #[serde(rename = "nodeType")]
  pub node_type: NodeKind,
}

#[derive(Deserialize)]
struct RawDragPayload {
  #[serde(rename = "nodeType")]
  node_type: Option<String>,
}

impl DragPayload {
  pub fn for_kind(node_type: NodeKind) -> Self {
    Self { node_type }
  }

  /// JSON set as the drag data on drag start.
  pub fn to_json(&self) -> String {
    format!("{{\"nodeType\":\"{}\"}}", self.node_type.as_str())
  }

  /// Decodes the drag data found on drop.
  pub fn parse(raw: Option<&str>) -> Result<Self, PayloadError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or(PayloadError::Empty)?;
    let payload: RawDragPayload = serde_json::from_str(raw)?;
    let tag = payload
      .node_type
      .filter(|t| !t.is_empty())
      .ok_or(PayloadError::MissingNodeType)?;
    Ok(Self {
      node_type: tag.parse()?,
    })
  }
}
