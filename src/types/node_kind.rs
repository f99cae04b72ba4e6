//! The closed set of node kinds a pipeline can contain.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PayloadError;

/// Kind of a pipeline node. Fixed at build time; there is no runtime registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
  #[serde(alias = "customInput")]
  Input,
  #[serde(alias = "customOutput")]
  Output,
  Text,
  Llm,
}

impl NodeKind {
  /// Every kind, in palette order.
  pub const ALL: [NodeKind; 4] = [
    NodeKind::Input,
    NodeKind::Llm,
    NodeKind::Output,
    NodeKind::Text,
  ];

  /// Wire tag for this kind (also the prefix of generated node ids).
  pub fn as_str(&self) -> &'static str {
    match self {
      NodeKind::Input => "input",
      NodeKind::Output => "output",
      NodeKind::Text => "text",
      NodeKind::Llm => "llm",
    }
  }

  /// Human-readable title shown on the palette and node header.
  pub fn title(&self) -> &'static str {
    match self {
      NodeKind::Input => "Input",
      NodeKind::Output => "Output",
      NodeKind::Text => "Text",
      NodeKind::Llm => "LLM",
    }
  }
}

impl fmt::Display for NodeKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for NodeKind {
  type Err = PayloadError;

  /// Accepts the canonical tags plus the legacy `customInput` / `customOutput` palette tags.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "input" | "customInput" => Ok(NodeKind::Input),
      "output" | "customOutput" => Ok(NodeKind::Output),
      "text" => Ok(NodeKind::Text),
      "llm" => Ok(NodeKind::Llm),
      other => Err(PayloadError::UnknownNodeType(other.to_string())),
    }
  }
}
