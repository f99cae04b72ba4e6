//! Request body sent to the pipeline validator.

use serde::{Deserialize, Serialize};

use super::{PipelineEdge, PipelineNode};

/// `{ "nodes": [...], "edges": [...] }` as sent to `POST /pipelines/parse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelinePayload {
  #[serde(default)]
  pub nodes: Vec<PipelineNode>,
  #[serde(default)]
  pub edges: Vec<PipelineEdge>,
}

impl PipelinePayload {
  pub fn new(nodes: Vec<PipelineNode>, edges: Vec<PipelineEdge>) -> Self {
    Self { nodes, edges }
  }

  /// Copies the given collections verbatim.
  pub fn from_slices(nodes: &[PipelineNode], edges: &[PipelineEdge]) -> Self {
    Self {
      nodes: nodes.to_vec(),
      edges: edges.to_vec(),
    }
  }
}
