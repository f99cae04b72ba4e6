//! Responses returned by the pipeline validator.

use serde::{Deserialize, Serialize};

/// Result of `POST /pipelines/parse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSummary {
  pub num_nodes: usize,
  pub num_edges: usize,
  pub is_dag: bool,
  /// One cycle, in traversal order, when the validator found the graph cyclic.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cycle_nodes: Option<Vec<String>>,
}

impl PipelineSummary {
  /// Result text shown to the user after a successful submit.
  pub fn report(&self) -> String {
    let mut out = format!(
      "Pipeline Results:\n\nNodes: {}\nEdges: {}\nIs DAG: {}",
      self.num_nodes,
      self.num_edges,
      if self.is_dag { "Yes" } else { "No" }
    );
    if let Some(cycle) = self.cycle_nodes.as_ref().filter(|c| !c.is_empty()) {
      out.push_str(&format!("\nCycle: {}", cycle.join(" -> ")));
    }
    out
  }
}

/// Result of `GET /` on the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
  pub status: String,
  #[serde(default)]
  pub message: String,
}
