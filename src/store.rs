//! The graph store: single owner of the node and edge collections.
//!
//! One [GraphStore] is constructed per editing session and handed (`&mut`)
//! to whatever needs to change the graph. Every mutation goes through one of
//! its operations (or [GraphStore::dispatch]), runs to completion before the
//! next one starts, and bumps the revision observed by [GraphStore::subscribe].

use std::collections::HashSet;

use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, error, instrument};

use crate::error::GraphStoreError;
use crate::id_generator::NodeIdGenerator;
use crate::ports::derive_ports;
use crate::types::{
  Connection, EdgeChange, NodeChange, NodeData, NodeKind, NodePorts, PipelineEdge, PipelineNode,
  PipelinePayload,
};

/// A mutation request processed by [GraphStore::dispatch].
#[derive(Debug, Clone, PartialEq)]
pub enum GraphCommand {
  AddNode(PipelineNode),
  ApplyNodeDelta(Vec<NodeChange>),
  ApplyEdgeDelta(Vec<EdgeChange>),
  Connect(Connection),
  UpdateNodeData { node_id: String, data: NodeData },
}

/// What a dispatched command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
  Applied,
  Connect(ConnectOutcome),
  /// Node data was replaced; carries the ids of edges pruned with it.
  DataUpdated { pruned_edges: Vec<String> },
}

/// Result of a connect gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
  Created(String),
  /// An edge with the same endpoints already exists; nothing changed.
  AlreadyConnected(String),
  Rejected(ConnectRejection),
}

/// Why a connect gesture was rejected. The graph is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectRejection {
  #[error("source node '{0}' does not exist")]
  UnknownSource(String),
  #[error("target node '{0}' does not exist")]
  UnknownTarget(String),
  #[error("node '{node_id}' has no output port '{handle}'")]
  NotAnOutput { node_id: String, handle: String },
  #[error("node '{node_id}' has no input port '{handle}'")]
  NotAnInput { node_id: String, handle: String },
}

/// Single source of truth for the pipeline graph of one editing session.
#[derive(Debug)]
pub struct GraphStore {
  nodes: Vec<PipelineNode>,
  edges: Vec<PipelineEdge>,
  ids: NodeIdGenerator,
  revision: watch::Sender<u64>,
}

impl Default for GraphStore {
  fn default() -> Self {
    Self::new()
  }
}

impl GraphStore {
  pub fn new() -> Self {
    let (revision, _) = watch::channel(0);
    Self {
      nodes: Vec::new(),
      edges: Vec::new(),
      ids: NodeIdGenerator::new(),
      revision,
    }
  }

  /// Clears the graph and restarts id generation. Subscribers stay attached.
  pub fn reset(&mut self) {
    self.nodes.clear();
    self.edges.clear();
    self.ids.reset();
    self.notify();
  }

  /// Receiver that changes once per mutating operation (render subscription).
  pub fn subscribe(&self) -> watch::Receiver<u64> {
    self.revision.subscribe()
  }

  /// Current revision; starts at 0 and increments on every visible change.
  pub fn revision(&self) -> u64 {
    *self.revision.borrow()
  }

  pub fn nodes(&self) -> &[PipelineNode] {
    &self.nodes
  }

  pub fn edges(&self) -> &[PipelineEdge] {
    &self.edges
  }

  pub fn node(&self, node_id: &str) -> Option<&PipelineNode> {
    self.nodes.iter().find(|n| n.id() == node_id)
  }

  /// Live ports of `node_id`, derived from its current data.
  pub fn ports(&self, node_id: &str) -> Option<NodePorts> {
    self.node(node_id).map(|n| derive_ports(n.id(), n.data()))
  }

  /// Owned copy of both collections as they are right now.
  pub fn snapshot(&self) -> PipelinePayload {
    PipelinePayload::from_slices(&self.nodes, &self.edges)
  }

  /// Fresh node id for `kind`.
  pub fn get_node_id(&mut self, kind: NodeKind) -> String {
    self.ids.next_id(kind)
  }

  /// Processes one command synchronously.
  pub fn dispatch(&mut self, command: GraphCommand) -> Result<CommandOutcome, GraphStoreError> {
    match command {
      GraphCommand::AddNode(node) => self.add_node(node).map(|()| CommandOutcome::Applied),
      GraphCommand::ApplyNodeDelta(changes) => {
        self.apply_node_changes(changes);
        Ok(CommandOutcome::Applied)
      }
      GraphCommand::ApplyEdgeDelta(changes) => {
        self.apply_edge_changes(changes);
        Ok(CommandOutcome::Applied)
      }
      GraphCommand::Connect(connection) => Ok(CommandOutcome::Connect(self.on_connect(connection))),
      GraphCommand::UpdateNodeData { node_id, data } => self
        .update_node_data(&node_id, data)
        .map(|pruned_edges| CommandOutcome::DataUpdated { pruned_edges }),
    }
  }

  /// Inserts `node`. Its id must not be in the graph yet.
  #[instrument(level = "trace", skip(self, node), fields(node = %node.id()))]
  pub fn add_node(&mut self, node: PipelineNode) -> Result<(), GraphStoreError> {
    if self.node(node.id()).is_some() {
      error!(node = %node.id(), "duplicate node id on insert");
      return Err(GraphStoreError::DuplicateNodeId(node.id().to_string()));
    }
    debug!(node = %node.id(), kind = %node.kind(), "node added");
    self.nodes.push(node);
    self.notify();
    Ok(())
  }

  /// Applies position, selection and removal deltas as one update.
  ///
  /// Removing a node removes every edge that starts or ends at it. Deltas for
  /// unknown nodes are ignored.
  #[instrument(level = "trace", skip(self, changes))]
  pub fn apply_node_changes(&mut self, changes: impl IntoIterator<Item = NodeChange>) {
    let mut removed: HashSet<String> = HashSet::new();
    let mut changed = false;
    for change in changes {
      match change {
        NodeChange::Position { id, position } => {
          if let (Some(node), Some(position)) = (self.node_mut(&id), position) {
            node.set_position(position);
            changed = true;
          }
        }
        NodeChange::Select { id, selected } => {
          if let Some(node) = self.node_mut(&id) {
            node.set_selected(selected);
            changed = true;
          }
        }
        NodeChange::Remove { id } => {
          if self.node(&id).is_some() {
            removed.insert(id);
          }
        }
      }
    }

    if !removed.is_empty() {
      self.nodes.retain(|n| !removed.contains(n.id()));
      let before = self.edges.len();
      self
        .edges
        .retain(|e| !removed.contains(&e.source) && !removed.contains(&e.target));
      debug!(
        nodes = removed.len(),
        edges = before - self.edges.len(),
        "nodes removed"
      );
      changed = true;
    }

    if changed {
      self.notify();
    }
  }

  /// Applies edge selection and removal deltas. Unknown edge ids are ignored.
  #[instrument(level = "trace", skip(self, changes))]
  pub fn apply_edge_changes(&mut self, changes: impl IntoIterator<Item = EdgeChange>) {
    let mut changed = false;
    for change in changes {
      match change {
        EdgeChange::Select { id, selected } => {
          if let Some(edge) = self.edges.iter_mut().find(|e| e.id == id) {
            edge.selected = selected;
            changed = true;
          }
        }
        EdgeChange::Remove { id } => {
          let before = self.edges.len();
          self.edges.retain(|e| e.id != id);
          changed |= self.edges.len() != before;
        }
      }
    }
    if changed {
      self.notify();
    }
  }

  /// Creates the edge for a connect gesture.
  ///
  /// Both ports must exist in the nodes' current port sets. Connecting the
  /// same endpoints twice leaves a single edge.
  #[instrument(level = "trace", skip(self))]
  pub fn on_connect(&mut self, connection: Connection) -> ConnectOutcome {
    if let Err(rejection) = self.check_connection(&connection) {
      debug!(%rejection, "connection rejected");
      return ConnectOutcome::Rejected(rejection);
    }
    let edge = PipelineEdge::from(connection);
    if self.edges.iter().any(|e| e.id == edge.id) {
      return ConnectOutcome::AlreadyConnected(edge.id);
    }
    let id = edge.id.clone();
    debug!(edge = %id, "edge created");
    self.edges.push(edge);
    self.notify();
    ConnectOutcome::Created(id)
  }

  /// Replaces the data of `node_id` and prunes edges whose ports no longer exist.
  ///
  /// Returns the ids of the pruned edges. The data must be for the node's own kind.
  #[instrument(level = "trace", skip(self, data))]
  pub fn update_node_data(
    &mut self,
    node_id: &str,
    data: NodeData,
  ) -> Result<Vec<String>, GraphStoreError> {
    let node = self
      .node_mut(node_id)
      .ok_or_else(|| GraphStoreError::UnknownNode(node_id.to_string()))?;
    if node.kind() != data.kind() {
      return Err(GraphStoreError::KindMismatch {
        node_id: node_id.to_string(),
        expected: node.kind(),
        found: data.kind(),
      });
    }
    node.set_data(data);
    let pruned = self.prune_dangling_edges(node_id);
    self.notify();
    Ok(pruned)
  }

  fn check_connection(&self, c: &Connection) -> Result<(), ConnectRejection> {
    let source_ports = self
      .ports(&c.source)
      .ok_or_else(|| ConnectRejection::UnknownSource(c.source.clone()))?;
    let target_ports = self
      .ports(&c.target)
      .ok_or_else(|| ConnectRejection::UnknownTarget(c.target.clone()))?;
    if !source_ports.has_output(&c.source_handle) {
      return Err(ConnectRejection::NotAnOutput {
        node_id: c.source.clone(),
        handle: c.source_handle.clone(),
      });
    }
    if !target_ports.has_input(&c.target_handle) {
      return Err(ConnectRejection::NotAnInput {
        node_id: c.target.clone(),
        handle: c.target_handle.clone(),
      });
    }
    Ok(())
  }

  /// Removes edges attached to `node_id` through ports it no longer has.
  fn prune_dangling_edges(&mut self, node_id: &str) -> Vec<String> {
    let Some(ports) = self.ports(node_id) else {
      return Vec::new();
    };
    let mut pruned = Vec::new();
    self.edges.retain(|e| {
      let dangling = (e.target == node_id && !ports.has_input(&e.target_handle))
        || (e.source == node_id && !ports.has_output(&e.source_handle));
      if dangling {
        pruned.push(e.id.clone());
      }
      !dangling
    });
    if !pruned.is_empty() {
      debug!(node = %node_id, edges = ?pruned, "pruned edges on removed ports");
    }
    pruned
  }

  fn node_mut(&mut self, node_id: &str) -> Option<&mut PipelineNode> {
    self.nodes.iter_mut().find(|n| n.id() == node_id)
  }

  fn notify(&self) {
    self.revision.send_modify(|r| *r += 1);
  }
}
