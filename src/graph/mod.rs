//! Graph model: named nodes, optionally weighted edges and their text forms.

mod format;
mod model;

pub use model::{DisplayEdge, Edge, EdgeId, Graph, GraphNode, NodeId};
