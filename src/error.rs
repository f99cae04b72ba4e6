//! Error types for the graph store, drag payloads and pipeline submission.

use thiserror::Error;

use crate::types::NodeKind;

/// Invariant violations reported by [crate::store::GraphStore].
///
/// None of these are user-facing: ids come from the store's own generator and
/// node editors only ever edit their own node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphStoreError {
  #[error("Node '{0}' already exists in the graph")]
  DuplicateNodeId(String),

  #[error("Node '{0}' not found in the graph")]
  UnknownNode(String),

  #[error("Node '{node_id}' is a {expected} node, but the update carries {found} data")]
  KindMismatch {
    node_id: String,
    expected: NodeKind,
    found: NodeKind,
  },
}

/// Problems decoding a palette drag payload. Swallowed by the drop handler.
#[derive(Error, Debug)]
pub enum PayloadError {
  #[error("Drag payload is empty")]
  Empty,

  #[error("Drag payload is not valid JSON: {0}")]
  Json(#[from] serde_json::Error),

  #[error("Drag payload has no nodeType")]
  MissingNodeType,

  #[error("Unknown node type '{0}'")]
  UnknownNodeType(String),
}

/// Failure of a single submission to the pipeline validator.
#[derive(Error, Debug)]
pub enum SubmitError {
  #[error("Request to pipeline validator failed: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("Server error {status}: {body}")]
  Status { status: u16, body: String },

  #[error("Could not decode validator response: {source}")]
  Decode {
    #[source]
    source: serde_json::Error,
    body: String,
  },

  #[error("Invalid validator URL '{url}': {reason}")]
  InvalidUrl { url: String, reason: String },
}

impl SubmitError {
  /// HTTP status for [SubmitError::Status], `None` otherwise.
  pub fn status(&self) -> Option<u16> {
    match self {
      SubmitError::Status { status, .. } => Some(*status),
      _ => None,
    }
  }
}
