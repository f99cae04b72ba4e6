//! Kind-specific node data.
//!
//! Each [NodeKind] has exactly one [NodeData] variant carrying its own field
//! shape. On the wire the fields are camelCase keys inside the node's `data`
//! object (see [super::PipelineNode]).

use serde::{Deserialize, Serialize};

use super::NodeKind;

/// Declared value type of an `input` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputType {
  #[default]
  Text,
  File,
  Number,
}

/// Declared value type of an `output` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputType {
  #[default]
  Text,
  Image,
  #[serde(rename = "JSON")]
  Json,
}

/// Fields edited on an `input` node. Unset fields fall back to display defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputFields {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub input_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub input_type: Option<InputType>,
}

/// Fields edited on an `output` node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputFields {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub output_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub output_type: Option<OutputType>,
}

/// Template text of a `text` node. Input ports are derived from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextFields {
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub text: String,
}

/// Kind-specific data held by a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
  Input(InputFields),
  Output(OutputFields),
  Text(TextFields),
  Llm,
}

impl NodeData {
  /// Data a freshly created node of `kind` starts with (no fields set).
  pub fn initial(kind: NodeKind) -> Self {
    match kind {
      NodeKind::Input => NodeData::Input(InputFields::default()),
      NodeKind::Output => NodeData::Output(OutputFields::default()),
      NodeKind::Text => NodeData::Text(TextFields::default()),
      NodeKind::Llm => NodeData::Llm,
    }
  }

  /// Template data with the given text.
  pub fn text(text: impl Into<String>) -> Self {
    NodeData::Text(TextFields { text: text.into() })
  }

  pub fn kind(&self) -> NodeKind {
    match self {
      NodeData::Input(_) => NodeKind::Input,
      NodeData::Output(_) => NodeKind::Output,
      NodeData::Text(_) => NodeKind::Text,
      NodeData::Llm => NodeKind::Llm,
    }
  }

  /// Template text when this is a `text` node.
  pub fn template(&self) -> Option<&str> {
    match self {
      NodeData::Text(fields) => Some(&fields.text),
      _ => None,
    }
  }
}

/// Counter suffix of a generated node id (`"input-7"` → `"7"`).
pub(crate) fn id_suffix(node_id: &str) -> &str {
  node_id.rsplit('-').next().unwrap_or(node_id)
}

impl InputFields {
  /// Declared name, or `input_<counter>` when the user has not named it yet.
  pub fn display_name(&self, node_id: &str) -> String {
    self
      .input_name
      .clone()
      .unwrap_or_else(|| format!("input_{}", id_suffix(node_id)))
  }

  pub fn effective_type(&self) -> InputType {
    self.input_type.unwrap_or_default()
  }
}

impl OutputFields {
  /// Declared name, or `output_<counter>` when the user has not named it yet.
  pub fn display_name(&self, node_id: &str) -> String {
    self
      .output_name
      .clone()
      .unwrap_or_else(|| format!("output_{}", id_suffix(node_id)))
  }

  pub fn effective_type(&self) -> OutputType {
    self.output_type.unwrap_or_default()
  }
}
