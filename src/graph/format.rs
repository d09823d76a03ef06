//! Text serializations of a [`Graph`].

use std::fmt::Write;

use super::model::Graph;

impl Graph {
	/// Comma separated adjacency matrix, one row per node.
	///
	/// The first column is the node name padded to width 2. A cell is `1`
	/// when [`Graph::find_edge`] finds an edge from the row node to the
	/// column node, so undirected graphs produce a symmetric matrix.
	pub fn to_adjacency_matrix(&self) -> String {
		let mut out = String::new();
		for row in self.node_ids() {
			let _ = write!(out, "{:>2}, ", self.node_name(row));
			for column in self.node_ids() {
				let cell = u8::from(self.find_edge(row, column).is_some());
				let _ = write!(out, "{cell}, ");
			}
			out.push('\n');
		}
		out
	}

	/// Adjacency list keyed by node name, listing destination indexes in
	/// edge insertion order.
	pub fn to_edge_list(&self) -> String {
		let mut targets: Vec<Vec<usize>> = vec![Vec::new(); self.node_count()];
		for edge in self.edges() {
			if let Some(row) = targets.get_mut(edge.from().index()) {
				row.push(edge.to().index());
			}
		}

		let mut out = String::new();
		for (node, row) in self.nodes().iter().zip(&targets) {
			let _ = write!(out, "{}: ", node.name());
			for column in row {
				let _ = write!(out, "{column}, ");
			}
			out.push('\n');
		}
		out
	}

	/// Every edge's display form, newline separated.
	pub fn edge_strings(&self) -> String {
		self.edge_ids()
			.filter_map(|id| self.display_edge(id))
			.map(|edge| edge.to_string())
			.collect::<Vec<_>>()
			.join("\n")
	}
}
