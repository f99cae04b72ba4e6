//! Live port sets per node.
//!
//! Ports are never stored on the node: they are recomputed from the node's
//! kind and data wherever they are needed (rendering, connect validation,
//! edge pruning), so all three always agree.

use crate::template::extract_variables;
use crate::types::{NodeData, NodeKind, NodePorts, Port};

/// Prefix of ports derived from template variables.
pub const VARIABLE_PORT_PREFIX: &str = "var-";

/// Port id of the input derived from template variable `name`.
pub fn variable_port_id(name: &str) -> String {
  format!("{VARIABLE_PORT_PREFIX}{name}")
}

/// Current ports of node `node_id` holding `data`. Pure.
pub fn derive_ports(node_id: &str, data: &NodeData) -> NodePorts {
  match data {
    NodeData::Text(fields) => template_ports(node_id, &extract_variables(&fields.text)),
    NodeData::Input(_) => static_ports(node_id, NodeKind::Input),
    NodeData::Output(_) => static_ports(node_id, NodeKind::Output),
    NodeData::Llm => static_ports(node_id, NodeKind::Llm),
  }
}

/// Ports of a text node whose template references `variables`.
pub fn template_ports(node_id: &str, variables: &[String]) -> NodePorts {
  NodePorts {
    inputs: variables
      .iter()
      .map(|name| Port::input(variable_port_id(name), name.as_str()))
      .collect(),
    outputs: vec![Port::output(format!("{node_id}-output"), "output")],
  }
}

/// Ports declared once per kind. A text node has no static inputs.
pub fn static_ports(node_id: &str, kind: NodeKind) -> NodePorts {
  match kind {
    NodeKind::Input => NodePorts {
      inputs: vec![],
      outputs: vec![Port::output(format!("{node_id}-output"), "output")],
    },
    NodeKind::Output => NodePorts {
      inputs: vec![Port::input(format!("{node_id}-input"), "input")],
      outputs: vec![],
    },
    NodeKind::Llm => NodePorts {
      inputs: vec![
        Port::input(format!("{node_id}-system"), "system"),
        Port::input(format!("{node_id}-prompt"), "prompt"),
      ],
      outputs: vec![Port::output(format!("{node_id}-response"), "response")],
    },
    NodeKind::Text => template_ports(node_id, &[]),
  }
}
