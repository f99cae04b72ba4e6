//! # pipeline-builder
//!
//! Graph model behind a node-based pipeline editor: typed nodes dropped from
//! a palette onto a pannable/zoomable canvas, ports wired between them, and
//! the finished graph submitted to a remote validator that reports node and
//! edge counts and whether the graph is a DAG.
//!
//! ## Architecture
//!
//! - [id_generator]: session-wide `"<kind>-<counter>"` node ids.
//! - [template]: `{{variable}}` extraction from text-node templates.
//! - [ports]: live port sets, derived from a node's kind and data.
//! - [store]: [GraphStore], sole owner of nodes and edges.
//! - [placement]: palette drop → projected position → new node.
//! - [submit]: [HttpPipelineClient], the validator client.
//!
//! The canvas itself is an external collaborator; it is consumed only through
//! [canvas::CanvasProjection] and the change/connect types in [types].

pub mod canvas;
pub mod config;
pub mod error;
pub mod id_generator;
#[cfg(test)]
mod id_generator_test;
pub mod palette;
pub mod pipeline_io;
pub mod placement;
#[cfg(test)]
mod placement_test;
pub mod ports;
pub mod store;
pub mod submit;
pub mod template;
pub mod types;

pub use config::ClientConfig;
pub use error::{GraphStoreError, PayloadError, SubmitError};
pub use placement::on_drop;
pub use ports::derive_ports;
pub use store::{GraphCommand, GraphStore};
pub use submit::{HttpPipelineClient, PipelineValidator};
pub use template::extract_variables;
pub use types::{NodeKind, PipelineEdge, PipelineNode, PipelinePayload, PipelineSummary};
