use std::collections::HashMap;
use std::fmt;

/// Handle to a node owned by a [`Graph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
	/// Position of the node in the graph's insertion order.
	pub fn index(self) -> usize {
		self.0
	}
}

/// Handle to an edge owned by a [`Graph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl EdgeId {
	/// Position of the edge in the graph's insertion order.
	pub fn index(self) -> usize {
		self.0
	}
}

/// A named vertex. The name is its identity within the owning graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphNode {
	name: String,
}

impl GraphNode {
	/// Display name of the node.
	pub fn name(&self) -> &str {
		&self.name
	}
}

/// A connection between two nodes of the same graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	from: NodeId,
	to: NodeId,
	directed: bool,
	weight: Option<f64>,
}

impl Edge {
	/// Source endpoint.
	pub fn from(&self) -> NodeId {
		self.from
	}

	/// Destination endpoint.
	pub fn to(&self) -> NodeId {
		self.to
	}

	/// Directedness copied from the graph when the edge was created.
	pub fn is_directed(&self) -> bool {
		self.directed
	}

	/// Optional numeric weight.
	pub fn weight(&self) -> Option<f64> {
		self.weight
	}
}

/// A directed or undirected graph with unique node names.
///
/// Nodes and edges keep their insertion order, which drives both the
/// text serializations and the circular layout.
#[derive(Clone, Debug, Default)]
pub struct Graph {
	directed: bool,
	nodes: Vec<GraphNode>,
	edges: Vec<Edge>,
	name_to_id: HashMap<String, NodeId>,
}

impl Graph {
	/// Creates an empty graph.
	pub fn new(directed: bool) -> Self {
		Self {
			directed,
			nodes: Vec::new(),
			edges: Vec::new(),
			name_to_id: HashMap::new(),
		}
	}

	/// Whether edges created through this graph are directed.
	pub fn is_directed(&self) -> bool {
		self.directed
	}

	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Number of edges, parallel edges counted separately.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Nodes in insertion order.
	pub fn nodes(&self) -> &[GraphNode] {
		&self.nodes
	}

	/// Edges in insertion order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Node behind a handle.
	pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
		self.nodes.get(id.0)
	}

	/// Edge behind a handle.
	pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
		self.edges.get(id.0)
	}

	/// Iterates node handles in insertion order.
	pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
		(0..self.nodes.len()).map(NodeId)
	}

	/// Iterates edge handles in insertion order.
	pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
		(0..self.edges.len()).map(EdgeId)
	}

	/// Adds a node named `name`, or returns the existing node with that
	/// exact (case-sensitive) name.
	pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
		let name = name.into();
		if let Some(&id) = self.name_to_id.get(&name) {
			return id;
		}
		let id = NodeId(self.nodes.len());
		self.name_to_id.insert(name.clone(), id);
		self.nodes.push(GraphNode { name });
		id
	}

	/// Appends an edge carrying the graph's directedness.
	///
	/// Both handles must come from this graph's [`Graph::add_node`].
	/// Parallel edges are kept as separate entries.
	pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Option<f64>) -> EdgeId {
		let id = EdgeId(self.edges.len());
		self.edges.push(Edge {
			from,
			to,
			directed: self.directed,
			weight,
		});
		id
	}

	/// Node named exactly `name`.
	pub fn find_node(&self, name: &str) -> Option<NodeId> {
		self.name_to_id.get(name).copied()
	}

	/// Finds an edge from `a` to `b`. Undirected graphs also match `b` to
	/// `a`. With parallel edges the last one in insertion order wins.
	pub fn find_edge(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
		self.edges
			.iter()
			.enumerate()
			.rev()
			.find(|(_, e)| {
				(e.from == a && e.to == b) || (!self.directed && e.from == b && e.to == a)
			})
			.map(|(i, _)| EdgeId(i))
	}

	/// Name of a node, or an empty string for a foreign handle.
	pub fn node_name(&self, id: NodeId) -> &str {
		self.node(id).map(GraphNode::name).unwrap_or_default()
	}

	/// Formats an edge as `A-(w)>B`, `A>B`, `A-(w)-B` or `A-B`.
	pub fn display_edge(&self, id: EdgeId) -> Option<DisplayEdge<'_>> {
		self.edge(id).map(|edge| DisplayEdge { graph: self, edge })
	}
}

/// [`fmt::Display`] adapter for an edge, resolving endpoint names.
pub struct DisplayEdge<'a> {
	graph: &'a Graph,
	edge: &'a Edge,
}

impl fmt::Display for DisplayEdge<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let (from, to) = (
			self.graph.node_name(self.edge.from),
			self.graph.node_name(self.edge.to),
		);
		match (self.edge.directed, self.edge.weight) {
			(true, Some(w)) => write!(f, "{from}-({w})>{to}"),
			(true, None) => write!(f, "{from}>{to}"),
			(false, Some(w)) => write!(f, "{from}-({w})-{to}"),
			(false, None) => write!(f, "{from}-{to}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn add_node_is_idempotent() {
		let mut g = Graph::new(true);
		let a = g.add_node("a");
		let b = g.add_node("b");
		assert_ne!(a, b);
		assert_eq!(g.add_node("a"), a);
		assert_eq!(g.node_count(), 2);
	}

	#[test]
	fn names_are_case_sensitive() {
		let mut g = Graph::new(false);
		let lower = g.add_node("a");
		let upper = g.add_node("A");
		assert_ne!(lower, upper);
		assert_eq!(g.find_node("A"), Some(upper));
		assert_eq!(g.find_node("b"), None);
	}

	#[test]
	fn edges_inherit_directedness() {
		let mut g = Graph::new(false);
		let a = g.add_node("a");
		let b = g.add_node("b");
		let e = g.add_edge(a, b, Some(2.0));
		let edge = g.edge(e).unwrap();
		assert!(!edge.is_directed());
		assert_eq!(edge.weight(), Some(2.0));
		assert_eq!((edge.from(), edge.to()), (a, b));
	}

	#[test]
	fn find_edge_respects_direction() {
		let mut directed = Graph::new(true);
		let a = directed.add_node("a");
		let b = directed.add_node("b");
		let e = directed.add_edge(a, b, None);
		assert_eq!(directed.find_edge(a, b), Some(e));
		assert_eq!(directed.find_edge(b, a), None);

		let mut undirected = Graph::new(false);
		let a = undirected.add_node("a");
		let b = undirected.add_node("b");
		let e = undirected.add_edge(a, b, None);
		assert_eq!(undirected.find_edge(b, a), Some(e));
	}

	#[test]
	fn find_edge_prefers_last_parallel_edge() {
		let mut g = Graph::new(true);
		let a = g.add_node("a");
		let b = g.add_node("b");
		g.add_edge(a, b, Some(1.0));
		let second = g.add_edge(a, b, Some(2.0));
		assert_eq!(g.edge_count(), 2);
		assert_eq!(g.find_edge(a, b), Some(second));
	}

	#[test]
	fn edge_display_formats() {
		let mut directed = Graph::new(true);
		let a = directed.add_node("A");
		let b = directed.add_node("B");
		let weighted = directed.add_edge(a, b, Some(3.5));
		let plain = directed.add_edge(a, b, None);
		assert_eq!(directed.display_edge(weighted).unwrap().to_string(), "A-(3.5)>B");
		assert_eq!(directed.display_edge(plain).unwrap().to_string(), "A>B");

		let mut undirected = Graph::new(false);
		let a = undirected.add_node("A");
		let b = undirected.add_node("B");
		let weighted = undirected.add_edge(a, b, Some(3.0));
		let plain = undirected.add_edge(a, b, None);
		assert_eq!(undirected.display_edge(weighted).unwrap().to_string(), "A-(3)-B");
		assert_eq!(undirected.display_edge(plain).unwrap().to_string(), "A-B");
	}
}
