//! Turns a palette drop on the canvas into a new node.

use tracing::{debug, error, instrument};

use crate::canvas::{CanvasProjection, ScreenPoint};
use crate::palette::DragPayload;
use crate::store::GraphStore;
use crate::types::PipelineNode;

/// Handles a drop at `point` carrying the raw drag data `payload`.
///
/// Returns the new node's id. A missing or malformed payload, or an unknown
/// node type, leaves the graph untouched and returns `None`.
#[instrument(level = "trace", skip(store, canvas))]
pub fn on_drop(
  store: &mut GraphStore,
  canvas: &impl CanvasProjection,
  point: ScreenPoint,
  payload: Option<&str>,
) -> Option<String> {
  let kind = match DragPayload::parse(payload) {
    Ok(p) => p.node_type,
    Err(e) => {
      debug!(error = %e, "ignoring drop");
      return None;
    }
  };

  let position = canvas.project(point);
  let id = store.get_node_id(kind);
  let node = PipelineNode::with_kind(id.clone(), kind, position);
  if let Err(e) = store.add_node(node) {
    error!(error = %e, "dropped node not inserted");
    return None;
  }
  debug!(node = %id, x = position.x, y = position.y, "node dropped");
  Some(id)
}
