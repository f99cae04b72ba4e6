//! An edge between two node ports, and the connect gesture that creates one.

use serde::{Deserialize, Serialize};

/// Source and target ports picked by a connect gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
  pub source: String,
  pub source_handle: String,
  pub target: String,
  pub target_handle: String,
}

impl Connection {
  pub fn new(
    source: impl Into<String>,
    source_handle: impl Into<String>,
    target: impl Into<String>,
    target_handle: impl Into<String>,
  ) -> Self {
    Self {
      source: source.into(),
      source_handle: source_handle.into(),
      target: target.into(),
      target_handle: target_handle.into(),
    }
  }

  /// Id an edge created from this connection gets.
  pub fn edge_id(&self) -> String {
    edge_id(
      &self.source,
      &self.source_handle,
      &self.target,
      &self.target_handle,
    )
  }
}

/// Deterministic edge id for a `(source, sourceHandle, target, targetHandle)` tuple.
pub fn edge_id(source: &str, source_handle: &str, target: &str, target_handle: &str) -> String {
  format!("edge-{source}.{source_handle}->{target}.{target_handle}")
}

/// A directed edge from one node's output port to another node's input port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineEdge {
  pub id: String,
  pub source: String,
  pub source_handle: String,
  pub target: String,
  pub target_handle: String,
  #[serde(default, skip_serializing_if = "std::ops::Not::not")]
  pub selected: bool,
}

impl PipelineEdge {
  pub fn touches_node(&self, node_id: &str) -> bool {
    self.source == node_id || self.target == node_id
  }
}

impl From<Connection> for PipelineEdge {
  fn from(c: Connection) -> Self {
    Self {
      id: c.edge_id(),
      source: c.source,
      source_handle: c.source_handle,
      target: c.target,
      target_handle: c.target_handle,
      selected: false,
    }
  }
}
