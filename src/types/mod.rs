//! Pipeline graph types: nodes, ports, edges, canvas deltas and validator wire types.
//!
//! Nodes and edges serialize to the shape the canvas and the validator share
//! (`id`, `type`, `position`, `data` for nodes; `id`, `source`,
//! `sourceHandle`, `target`, `targetHandle` for edges).

mod changes;
mod node_data;
mod node_kind;
mod pipeline_edge;
mod pipeline_node;
mod pipeline_payload;
mod pipeline_summary;
mod port;
mod position;

pub use changes::{EdgeChange, NodeChange};
pub use node_data::{InputFields, InputType, NodeData, OutputFields, OutputType, TextFields};
pub use node_kind::NodeKind;
pub use pipeline_edge::{Connection, PipelineEdge, edge_id};
pub use pipeline_node::PipelineNode;
pub use pipeline_payload::PipelinePayload;
pub use pipeline_summary::{HealthStatus, PipelineSummary};
pub use port::{NodePorts, Port, PortSide};
pub use position::Position;
