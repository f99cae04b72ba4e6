//! A node in the pipeline graph.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{InputFields, NodeData, NodeKind, OutputFields, Position, TextFields};

/// A node in the pipeline graph.
///
/// The id is fixed at construction. Position, selection and data are changed
/// only through [crate::store::GraphStore].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireNode", into = "WireNode")]
pub struct PipelineNode {
  id: String,
  position: Position,
  data: NodeData,
  selected: bool,
}

impl PipelineNode {
  pub fn new(id: impl Into<String>, position: Position, data: NodeData) -> Self {
    Self {
      id: id.into(),
      position,
      data,
      selected: false,
    }
  }

  /// A node of `kind` with its initial (empty) data.
  pub fn with_kind(id: impl Into<String>, kind: NodeKind, position: Position) -> Self {
    Self::new(id, position, NodeData::initial(kind))
  }

  pub fn id(&self) -> &str {
    &self.id
  }

  pub fn kind(&self) -> NodeKind {
    self.data.kind()
  }

  pub fn position(&self) -> Position {
    self.position
  }

  pub fn data(&self) -> &NodeData {
    &self.data
  }

  pub fn is_selected(&self) -> bool {
    self.selected
  }

  pub(crate) fn set_position(&mut self, position: Position) {
    self.position = position;
  }

  pub(crate) fn set_selected(&mut self, selected: bool) {
    self.selected = selected;
  }

  pub(crate) fn set_data(&mut self, data: NodeData) {
    self.data = data;
  }
}

/// Wire shape: `{ id, type, position, data: { id, nodeType, ...fields } }`.
#[derive(Clone, Serialize, Deserialize)]
struct WireNode {
  id: String,
  #[serde(rename = "type")]
  kind: NodeKind,
  position: Position,
  #[serde(default)]
  data: Value,
  #[serde(default, skip_serializing_if = "std::ops::Not::not")]
  selected: bool,
}

impl From<PipelineNode> for WireNode {
  fn from(node: PipelineNode) -> Self {
    let kind = node.kind();
    let mut data = Map::new();
    data.insert("id".to_string(), Value::String(node.id.clone()));
    data.insert(
      "nodeType".to_string(),
      Value::String(kind.as_str().to_string()),
    );
    let fields = match &node.data {
      NodeData::Input(f) => serde_json::to_value(f),
      NodeData::Output(f) => serde_json::to_value(f),
      NodeData::Text(f) => serde_json::to_value(f),
      NodeData::Llm => Ok(Value::Null),
    };
    if let Ok(Value::Object(fields)) = fields {
      data.extend(fields);
    }
    WireNode {
      id: node.id,
      kind,
      position: node.position,
      data: Value::Object(data),
      selected: node.selected,
    }
  }
}

impl TryFrom<WireNode> for PipelineNode {
  type Error = serde_json::Error;

  fn try_from(wire: WireNode) -> Result<Self, Self::Error> {
    let fields = match wire.data {
      Value::Null => Value::Object(Map::new()),
      other => other,
    };
    let data = match wire.kind {
      NodeKind::Input => NodeData::Input(serde_json::from_value::<InputFields>(fields)?),
      NodeKind::Output => NodeData::Output(serde_json::from_value::<OutputFields>(fields)?),
      NodeKind::Text => NodeData::Text(serde_json::from_value::<TextFields>(fields)?),
      NodeKind::Llm => NodeData::Llm,
    };
    Ok(PipelineNode {
      id: wire.id,
      position: wire.position,
      data,
      selected: wire.selected,
    })
  }
}
