use log::info;

use crate::graph::Graph;

/// Directed "divides" relation over `min..=max`: an edge `i -> j` for every
/// `j` that `i` divides, including the self-loop `i -> i`.
pub fn divisibility_graph(min: u32, max: u32) -> Graph {
	let mut graph = Graph::new(true);

	for first in min..=max {
		let first_node = graph.add_node(first.to_string());
		for second in min..=max {
			let second_node = graph.add_node(second.to_string());
			if first != 0 && second % first == 0 {
				graph.add_edge(first_node, second_node, None);
			}
		}
	}

	info!(
		"divisibility graph [{min}, {max}]: {} nodes, {} edges",
		graph.node_count(),
		graph.edge_count()
	);
	graph
}

#[cfg(test)]
mod tests {
	use super::*;

	fn edge(graph: &Graph, from: &str, to: &str) -> bool {
		let (Some(a), Some(b)) = (graph.find_node(from), graph.find_node(to)) else {
			return false;
		};
		graph.find_edge(a, b).is_some()
	}

	#[test]
	fn one_to_twelve() {
		let graph = divisibility_graph(1, 12);
		assert_eq!(graph.node_count(), 12);
		for n in 1..=12 {
			assert!(edge(&graph, "1", &n.to_string()));
		}
		assert!(edge(&graph, "3", "6"));
		assert!(!edge(&graph, "6", "3"));
	}

	#[test]
	fn every_number_divides_itself() {
		let graph = divisibility_graph(4, 9);
		for n in 4..=9 {
			let name = n.to_string();
			assert!(edge(&graph, &name, &name));
		}
	}

	#[test]
	fn nodes_follow_numeric_order() {
		let graph = divisibility_graph(3, 6);
		let names: Vec<_> = graph.nodes().iter().map(|n| n.name()).collect();
		assert_eq!(names, ["3", "4", "5", "6"]);
		assert_eq!(graph.to_edge_list(), "3: 0, 3, \n4: 1, \n5: 2, \n6: 3, \n");
	}

	#[test]
	fn empty_range() {
		assert_eq!(divisibility_graph(5, 4).node_count(), 0);
	}
}
