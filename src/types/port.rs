//! Ports (handles) exposed by a node.

use serde::{Deserialize, Serialize};

/// Which side of the node a port sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortSide {
  Input,
  Output,
}

/// A connection point on a node. `id` is unique within the owning node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
  pub id: String,
  pub label: String,
  pub side: PortSide,
}

impl Port {
  pub fn input(id: impl Into<String>, label: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      label: label.into(),
      side: PortSide::Input,
    }
  }

  pub fn output(id: impl Into<String>, label: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      label: label.into(),
      side: PortSide::Output,
    }
  }
}

/// The live port set of a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePorts {
  pub inputs: Vec<Port>,
  pub outputs: Vec<Port>,
}

impl NodePorts {
  pub fn has_input(&self, port_id: &str) -> bool {
    self.inputs.iter().any(|p| p.id == port_id)
  }

  pub fn has_output(&self, port_id: &str) -> bool {
    self.outputs.iter().any(|p| p.id == port_id)
  }
}
